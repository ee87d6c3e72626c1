pub use ecow::EcoString as FluentStr;

/// Leading character of names that are stored on a node but never enumerated.
pub const HIDDEN_MARKER: char = '_';

pub trait KeyExt {
    /// Replace every occurrence of `separator` in a key name.
    fn sanitized(&self, separator: char, replacement: &str) -> FluentStr;

    /// Whether this name is exposed as an attribute.
    fn is_attribute(&self) -> bool;
}

impl KeyExt for str {
    fn sanitized(&self, separator: char, replacement: &str) -> FluentStr {
        if !self.contains(separator) {
            return self.into();
        }
        let mut out = FluentStr::new();
        for c in self.chars() {
            if c == separator {
                out.push_str(replacement);
            } else {
                out.push(c);
            }
        }
        out
    }

    fn is_attribute(&self) -> bool {
        match self.chars().next() {
            Some(c) => c != HIDDEN_MARKER,
            None => false,
        }
    }
}
