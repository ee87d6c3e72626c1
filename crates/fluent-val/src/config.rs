use crate::FluentStr;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEPARATOR: char = '.';

/// Options applied while wrapping raw input into nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Strict lookups on the root node. Nested nodes are always lenient.
    pub raise_on_missing: bool,
    /// Separator of dotted paths. Wrapped nodes keep it for `Node::check_path`.
    pub separator: char,
    /// When set, every `separator` inside a key name is replaced with this text.
    pub key_replacement: Option<FluentStr>,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            raise_on_missing: false,
            separator: DEFAULT_SEPARATOR,
            key_replacement: None,
        }
    }
}

impl WrapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self) -> Self {
        self.raise_on_missing = true;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_key_replacement(mut self, replacement: impl Into<FluentStr>) -> Self {
        self.key_replacement = Some(replacement.into());
        self
    }

    /// Settings handed down to nested nodes.
    pub(crate) fn nested(&self) -> Self {
        Self {
            raise_on_missing: false,
            ..self.clone()
        }
    }
}

/// Layout of [`Node::pretty`](crate::Node::pretty) output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettyConfig {
    /// Leader characters per nesting level.
    pub indent: usize,
    pub leader: char,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            leader: ' ',
        }
    }
}

impl PrettyConfig {
    pub fn new(indent: usize, leader: char) -> Self {
        Self { indent, leader }
    }

    pub(crate) fn pad(&self, depth: usize) -> String {
        std::iter::repeat(self.leader)
            .take(self.indent * depth)
            .collect()
    }
}
