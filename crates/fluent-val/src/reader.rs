use crate::error::{FluentError, FluentResult};
use crate::item::Item;
use crate::node::{Node, SharedNode};
use crate::FluentStr;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Attrs,
    Elems { at: usize, size: usize },
    Done,
}

/// One-pass cursor over a node.
///
/// Yields attribute values ordered by name, then the elements in stored order.
/// The attribute names are captured when the reader is created; the element
/// count is read when the element phase begins. Once drained, a reader stays
/// drained.
#[derive(Debug)]
pub struct Reader {
    node: SharedNode,
    keys: std::vec::IntoIter<FluentStr>,
    phase: Phase,
}

impl Reader {
    pub fn new(node: &SharedNode) -> Self {
        let mut keys = node.borrow().keys();
        keys.sort();
        Self {
            node: node.clone(),
            keys: keys.into_iter(),
            phase: Phase::Attrs,
        }
    }

    /// Next value, or [`FluentError::EndOfSequence`] once the reader is drained.
    pub fn advance(&mut self) -> FluentResult<Item> {
        self.next().ok_or(FluentError::EndOfSequence)
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

impl Iterator for Reader {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        loop {
            match self.phase {
                Phase::Attrs => {
                    if let Some(key) = self.keys.next() {
                        // a name deleted since the snapshot is skipped
                        if let Some(item) = self.node.borrow().attrs.get(&key) {
                            return Some(item.clone());
                        }
                        continue;
                    }
                    self.phase = match &self.node.borrow().elems {
                        Some(elems) => Phase::Elems {
                            at: 0,
                            size: elems.len(),
                        },
                        None => Phase::Done,
                    };
                }
                Phase::Elems { at, size } => {
                    let item = if at < size {
                        self.node
                            .borrow()
                            .elems
                            .as_ref()
                            .and_then(|elems| elems.get(at).cloned())
                    } else {
                        None
                    };
                    match item {
                        Some(item) => {
                            self.phase = Phase::Elems { at: at + 1, size };
                            return Some(item);
                        }
                        None => self.phase = Phase::Done,
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

impl FusedIterator for Reader {}

impl Node {
    pub fn into_reader(self) -> Reader {
        Reader::new(&self.into_shared())
    }
}

impl IntoIterator for Node {
    type Item = Item;
    type IntoIter = Reader;

    fn into_iter(self) -> Reader {
        self.into_reader()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Obj, Value};

    fn sample() -> SharedNode {
        let mut node = Node::wrap(&Value::from(Obj::new().with("b", 1).with("a", 2))).unwrap();
        node.append(9);
        node.append(8);
        node.into_shared()
    }

    #[test]
    fn test_sorted_attrs_then_elements() {
        let items: Vec<Item> = Reader::new(&sample()).collect();
        assert_eq!(
            items,
            vec![Item::from(2), Item::from(1), Item::from(9), Item::from(8)]
        );
    }

    #[test]
    fn test_end_of_sequence_is_final() {
        let node = Node::new().into_shared();
        let mut reader = Reader::new(&node);
        assert_eq!(reader.advance().unwrap_err(), FluentError::EndOfSequence);
        assert!(reader.is_done());

        node.borrow_mut().append(1);
        assert_eq!(reader.advance().unwrap_err(), FluentError::EndOfSequence);
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn test_attr_snapshot() {
        let node = sample();
        let mut reader = Reader::new(&node);
        node.borrow_mut().set("0first", 0);
        node.borrow_mut().delete_key("b");

        assert_eq!(reader.advance().unwrap(), Item::from(2));
        assert_eq!(reader.advance().unwrap(), Item::from(9));
    }

    #[test]
    fn test_element_count_read_lazily() {
        let node = sample();
        let mut reader = Reader::new(&node);
        assert_eq!(reader.next(), Some(Item::from(2)));
        node.borrow_mut().append(7);

        let rest: Vec<Item> = reader.by_ref().collect();
        assert_eq!(rest, vec![Item::from(1), Item::from(9), Item::from(8), Item::from(7)]);
    }

    #[test]
    fn test_elements_added_during_list_phase_are_not_seen() {
        let node = sample();
        let mut reader = Reader::new(&node);
        reader.next();
        reader.next();
        assert_eq!(reader.next(), Some(Item::from(9)));
        node.borrow_mut().append(7);
        assert_eq!(reader.next(), Some(Item::from(8)));
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn test_list_created_after_reader() {
        let node = Node::new().into_shared();
        let mut reader = Reader::new(&node);
        node.borrow_mut().append(1);
        assert_eq!(reader.next(), Some(Item::from(1)));
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut node = Node::new();
        node.set("z", 1);
        node.set("_hidden", 5);
        node.set("m", 2);
        let items: Vec<Item> = node.into_iter().collect();
        assert_eq!(items, vec![Item::from(2), Item::from(1)]);
    }
}
