use crate::config::{WrapConfig, DEFAULT_SEPARATOR};
use crate::error::{FluentError, FluentResult};
use crate::item::Item;
use crate::string::KeyExt;
use crate::{Array, FluentStr, Obj, Value};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

pub type SharedNode = Rc<RefCell<Node>>;

pub fn shared(node: Node) -> SharedNode {
    Rc::new(RefCell::new(node))
}

/// A wrapped mapping and/or sequence.
///
/// A node carries named attributes and, optionally, an ordered list of elements.
/// Both facets may be present at once; a node with neither is an empty container.
///
/// `Clone` is shallow: nested nodes are shared with the original. Mutating a
/// nested node through one handle is visible through every other handle,
/// including handles kept after a [`merge`](Node::merge).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) attrs: IndexMap<FluentStr, Item>,
    pub(crate) elems: Option<Vec<Item>>,
    raise_on_missing: bool,
    separator: char,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            attrs: IndexMap::new(),
            elems: None,
            raise_on_missing: false,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

// construction
impl Node {
    /// An empty node, to be filled with [`set`](Node::set), [`append`](Node::append) or merges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty node that fails lookups of missing attributes.
    pub fn strict() -> Self {
        Self {
            raise_on_missing: true,
            ..Self::default()
        }
    }

    fn with_separator(separator: char) -> Self {
        Self {
            separator,
            ..Self::default()
        }
    }

    pub fn wrap(value: &Value) -> FluentResult<Self> {
        Self::wrap_with(value, &WrapConfig::default())
    }

    /// Wrap a mapping or a sequence, descending into nested containers.
    ///
    /// `Nil` counts as absent input and yields an empty node. Any other terminal
    /// is rejected with [`FluentError::NotIterable`].
    pub fn wrap_with(value: &Value, config: &WrapConfig) -> FluentResult<Self> {
        let mut node = match value {
            Value::Nil => Node::with_separator(config.separator),
            Value::Array(array) => Self::from_array(array, config),
            Value::Obj(obj) => Self::from_obj(obj, config),
            other => {
                debug!(found = other.kind(), "refusing to wrap a terminal");
                return Err(FluentError::NotIterable {
                    found: other.kind().to_string(),
                });
            }
        };
        node.raise_on_missing = config.raise_on_missing;
        trace!(
            attrs = node.attrs.len(),
            elems = node.len(),
            strict = node.raise_on_missing,
            "wrapped node"
        );
        Ok(node)
    }

    pub fn from_input(value: Option<&Value>, config: &WrapConfig) -> FluentResult<Self> {
        match value {
            Some(value) => Self::wrap_with(value, config),
            None => Ok(Node {
                raise_on_missing: config.raise_on_missing,
                ..Node::with_separator(config.separator)
            }),
        }
    }

    fn from_array(array: &Array, config: &WrapConfig) -> Self {
        let nested = config.nested();
        let elems = array
            .iter()
            .map(|value| Self::wrap_member(value, &nested))
            .collect();
        Node {
            elems: Some(elems),
            ..Node::with_separator(config.separator)
        }
    }

    fn from_obj(obj: &Obj, config: &WrapConfig) -> Self {
        let nested = config.nested();
        let mut node = Node::with_separator(config.separator);
        for (key, value) in obj.iter() {
            let key = match &config.key_replacement {
                Some(replacement) => key.sanitized(config.separator, replacement),
                None => key.clone(),
            };
            node.attrs.insert(key, Self::wrap_member(value, &nested));
        }
        node
    }

    fn wrap_member(value: &Value, config: &WrapConfig) -> Item {
        match value {
            Value::Array(array) => Item::node(Self::from_array(array, config)),
            Value::Obj(obj) => Item::node(Self::from_obj(obj, config)),
            terminal => Item::Term(terminal.clone()),
        }
    }

    pub fn into_shared(self) -> SharedNode {
        shared(self)
    }

    /// Copy of the whole subtree that shares no nested node with `self`.
    pub fn deep_clone(&self) -> Self {
        Node {
            attrs: self
                .attrs
                .iter()
                .map(|(k, v)| (k.clone(), v.deep_clone()))
                .collect(),
            elems: self
                .elems
                .as_ref()
                .map(|elems| elems.iter().map(Item::deep_clone).collect()),
            raise_on_missing: self.raise_on_missing,
            separator: self.separator,
        }
    }
}

// attribute facet
impl Node {
    pub fn raise_on_missing(&self) -> bool {
        self.raise_on_missing
    }

    /// Path separator this node was wrapped with.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Look up an attribute.
    ///
    /// A miss is `Ok(None)` on a lenient node and [`FluentError::MissingAttribute`]
    /// on a strict one. Hidden names are reachable here even though they are
    /// never enumerated.
    pub fn attr(&self, name: &str) -> FluentResult<Option<Item>> {
        match self.attrs.get(name) {
            Some(item) => Ok(Some(item.clone())),
            None if self.raise_on_missing => {
                debug!(name, "strict lookup missed");
                Err(FluentError::MissingAttribute(name.to_string()))
            }
            None => Ok(None),
        }
    }

    /// Look up an exposed attribute, failing when it does not exist.
    pub fn get_key(&self, name: &str) -> FluentResult<Item> {
        match self.attrs.get(name) {
            Some(item) if name.is_attribute() => Ok(item.clone()),
            _ => Err(FluentError::MissingKey(name.to_string())),
        }
    }

    /// Exposed attribute names, in declaration order.
    pub fn keys(&self) -> Vec<FluentStr> {
        self.attributes().map(|(k, _)| k.clone()).collect()
    }

    pub(crate) fn attributes(&self) -> impl Iterator<Item = (&FluentStr, &Item)> {
        self.attrs.iter().filter(|(k, _)| k.is_attribute())
    }

    pub fn has(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Direct attribute assignment. The item is stored as given.
    pub fn set(&mut self, name: impl Into<FluentStr>, item: impl Into<Item>) {
        self.attrs.insert(name.into(), item.into());
    }

    /// Remove an attribute; a missing name is ignored. Elements are never touched.
    pub fn delete_key(&mut self, name: &str) {
        self.attrs.shift_remove(name);
    }

    /// True when the node holds no attributes and no elements.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.len() == 0
    }
}

// list facet
impl Node {
    /// Append to the element list, creating it on first use.
    ///
    /// Unlike construction, the item is not wrapped: appending `Value::Array`
    /// stores the array as a terminal. Pass a [`Node`] to get structure.
    pub fn append(&mut self, item: impl Into<Item>) {
        self.elems.get_or_insert_with(Vec::new).push(item.into());
    }

    /// Element at `index`.
    ///
    /// Negative and out-of-range indices fail; a node without an element list
    /// returns `Ok(None)` for any non-negative index.
    pub fn get(&self, index: i64) -> FluentResult<Option<Item>> {
        if index < 0 {
            return Err(FluentError::NegativeIndex(index));
        }
        let Some(elems) = &self.elems else {
            return Ok(None);
        };
        let at = usize::try_from(index).unwrap_or(usize::MAX);
        match elems.get(at) {
            Some(item) => Ok(Some(item.clone())),
            None => Err(FluentError::IndexOutOfRange {
                index: at,
                len: elems.len(),
            }),
        }
    }

    /// [`get`](Node::get) with a position taken from raw data.
    pub fn get_at(&self, position: &Value) -> FluentResult<Option<Item>> {
        match position {
            Value::Int(i) => self.get(*i),
            Value::Uint(u) => match i64::try_from(*u) {
                Ok(i) => self.get(i),
                Err(_) => Err(FluentError::IndexOutOfRange {
                    index: usize::try_from(*u).unwrap_or(usize::MAX),
                    len: self.len(),
                }),
            },
            other => Err(FluentError::InvalidIndexType {
                found: other.kind().to_string(),
            }),
        }
    }

    /// Number of elements, 0 when there is no element list.
    pub fn len(&self) -> usize {
        self.elems.as_ref().map_or(0, Vec::len)
    }

    pub fn has_elements(&self) -> bool {
        self.elems.is_some()
    }

    pub fn elements(&self) -> &[Item] {
        self.elems.as_deref().unwrap_or(&[])
    }
}

// paths
impl Node {
    /// Whether a dotted path resolves from this node, split on the separator the
    /// node was wrapped with.
    ///
    /// ```rust
    /// use fluent_val::{Node, Obj, Value};
    ///
    /// let input = Value::from(Obj::new().with("a", Obj::new().with("b", 5)));
    /// let node = Node::wrap(&input).unwrap();
    /// assert!(node.check_path("a.b"));
    /// assert!(!node.check_path("a.c"));
    /// ```
    pub fn check_path(&self, path: &str) -> bool {
        self.check_path_with(path, self.separator)
    }

    pub fn check_path_with(&self, path: &str, separator: char) -> bool {
        let segments: Vec<&str> = path.split(separator).collect();
        self.check_path_by_list(&segments)
    }

    /// Walk `segments` one attribute at a time.
    ///
    /// Every segment but the last must resolve to a nested node. The last one only
    /// has to exist: a terminal there still counts as a hit.
    pub fn check_path_by_list<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        let Some((first, rest)) = segments.split_first() else {
            return false;
        };
        match self.attrs.get(first.as_ref()) {
            None => false,
            Some(_) if rest.is_empty() => true,
            Some(Item::Node(next)) => next.borrow().check_path_by_list(rest),
            Some(Item::Term(_)) => false,
        }
    }
}
