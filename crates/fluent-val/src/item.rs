use crate::node::{Node, SharedNode};
use crate::{FluentStr, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A member of a node: either a terminal value or a handle to a nested node.
///
/// Cloning an `Item` clones the handle, not the nested node.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Term(Value),
    Node(SharedNode),
}

impl Item {
    pub fn nil() -> Self {
        Item::Term(Value::Nil)
    }

    pub fn term(value: impl Into<Value>) -> Self {
        Item::Term(value.into())
    }

    pub fn node(node: Node) -> Self {
        Item::Node(Rc::new(RefCell::new(node)))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Item::Node(_))
    }

    pub fn is_term(&self) -> bool {
        matches!(self, Item::Term(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Item::Term(Value::Nil))
    }

    pub fn as_term(&self) -> Option<&Value> {
        match self {
            Item::Term(v) => Some(v),
            Item::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&SharedNode> {
        match self {
            Item::Node(n) => Some(n),
            Item::Term(_) => None,
        }
    }

    /// Copy of this item whose nested nodes share nothing with the original.
    pub fn deep_clone(&self) -> Self {
        match self {
            Item::Term(v) => Item::Term(v.clone()),
            Item::Node(n) => Item::node(n.borrow().deep_clone()),
        }
    }

    pub fn to_fstr(&self) -> FluentStr {
        self.to_string().into()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Term(v) => write!(f, "{}", v),
            Item::Node(n) => write!(f, "{}", n.borrow()),
        }
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Item::Term(value)
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Item::node(node)
    }
}

impl From<SharedNode> for Item {
    fn from(node: SharedNode) -> Self {
        Item::Node(node)
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Term(b.into())
    }
}

impl From<i32> for Item {
    fn from(i: i32) -> Self {
        Item::Term(i.into())
    }
}

impl From<i64> for Item {
    fn from(i: i64) -> Self {
        Item::Term(i.into())
    }
}

impl From<f64> for Item {
    fn from(f: f64) -> Self {
        Item::Term(f.into())
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Term(s.into())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Term(s.into())
    }
}
