use crate::error::FluentResult;
use crate::item::Item;
use crate::node::{Node, SharedNode};
use crate::string::KeyExt;
use crate::Value;
use indexmap::map::Entry;
use std::ops::{Add, AddAssign};
use tracing::trace;

impl Node {
    /// Combine `other` into this node and return it for chaining.
    ///
    /// For each exposed attribute of `other`: a new name is copied across; when
    /// both sides hold nested nodes they are merged recursively; any other
    /// collision is won by `other`. Elements of `other` are appended after the
    /// existing ones.
    ///
    /// Handles are moved, never copied: after the merge this node and any
    /// surviving handle into `other` may point at the same nested nodes.
    pub fn merge(&mut self, other: Node) -> &mut Self {
        let Node { attrs, elems, .. } = other;
        trace!(
            attrs = attrs.len(),
            elems = elems.as_ref().map_or(0, Vec::len),
            "merging node"
        );
        for (key, incoming) in attrs {
            if !key.is_attribute() {
                continue;
            }
            match self.attrs.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => {
                    if !merge_nested(slot.get(), &incoming) {
                        slot.insert(incoming);
                    }
                }
            }
        }
        if let Some(elems) = elems {
            self.elems.get_or_insert_with(Vec::new).extend(elems);
        }
        self
    }

    /// [`merge`](Node::merge) a snapshot of `other`.
    ///
    /// `other` may be the handle this node is borrowed from; it is then
    /// snapshotted through `self`.
    pub fn merge_shared(&mut self, other: &SharedNode) -> &mut Self {
        let incoming = match other.try_borrow() {
            Ok(other) => other.clone(),
            Err(_) => self.clone(),
        };
        self.merge(incoming)
    }

    /// Merge `other` into `target` through their handles, which may be the same.
    pub fn merge_into(target: &SharedNode, other: &SharedNode) {
        let incoming = other.borrow().clone();
        target.borrow_mut().merge(incoming);
    }

    /// Wrap `other` first, then [`merge`](Node::merge) it.
    pub fn merge_value(&mut self, other: &Value) -> FluentResult<&mut Self> {
        let incoming = Node::wrap(other)?;
        Ok(self.merge(incoming))
    }
}

/// Merge right into left when both are nested nodes.
fn merge_nested(left: &Item, right: &Item) -> bool {
    match (left, right) {
        (Item::Node(left), Item::Node(right)) => {
            // snapshot first: left and right may be the same handle
            let incoming = right.borrow().clone();
            left.borrow_mut().merge(incoming);
            true
        }
        _ => false,
    }
}

impl Add for Node {
    type Output = Node;

    fn add(mut self, rhs: Node) -> Node {
        self.merge(rhs);
        self
    }
}

impl AddAssign for Node {
    fn add_assign(&mut self, rhs: Node) {
        self.merge(rhs);
    }
}
