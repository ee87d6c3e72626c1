//! # fluent-val
//!
//! Turns already-parsed nested data (mappings and sequences of scalars) into a tree of
//! [`Node`]s whose members can be looked up by name, walked by dotted path, merged,
//! drained through a [`Reader`] and rendered as text.
//!
//! ```rust
//! use fluent_val::{Node, Obj, Value};
//!
//! let input = Value::from(Obj::new().with("name", "db").with("port", 5432));
//! let node = Node::wrap(&input).unwrap();
//! assert!(node.check_path("port"));
//! assert_eq!(node.to_string(), "Node(name=db, port=5432)");
//! ```
//!
//! Nested nodes are held behind [`SharedNode`] handles. Merging moves handles rather than
//! copying subtrees, so a node merged into another must not be mutated through a handle
//! that is still alive elsewhere. Use [`Node::deep_clone`] to break sharing.

mod string;
pub use string::*;

mod value;
pub use value::*;

mod array;
pub use array::*;

mod obj;
pub use obj::*;

mod item;
pub use item::*;

mod node;
pub use node::*;

mod merge;

mod reader;
pub use reader::*;

mod render;

mod config;
pub use config::*;

mod error;
pub use error::{FluentError, FluentResult};

mod json;
