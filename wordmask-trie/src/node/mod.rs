// wordmask-trie/src/node/mod.rs
//! Compressed trie nodes for prioritized key/value pairs.
//!
//! Keys and values may be empty. The trie holding "ax", "ay", "bcbc", "x" and
//! "xy" has eight nodes:
//!
//! ```text
//!  n0  -
//!  n1  a-
//!  n2  .x+
//!  n3  .y+
//!  n4  b-
//!  n5  .cbc+
//!  n6  x+
//!  n7  .y+
//! ```
//!
//! n0 is the root and branches through a table to n1, n4 and n6. n4 reaches n5
//! through the prefix "cbc". Nodes marked `+` are complete keys and carry a
//! positive priority; nodes marked `-` are partial keys with priority zero.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::mapping::ByteMapping;
use crate::Priority;

/// The children of a trie node.
///
/// A single child is stored behind a shared prefix. Several children are
/// stored in a dense table indexed through [`ByteMapping`].
#[derive(Debug, Default)]
pub enum Children {
    #[default]
    Leaf,
    Prefix {
        prefix: Vec<u8>,
        next: Box<TrieNode>,
    },
    Table(Vec<Option<Box<TrieNode>>>),
}

#[derive(Debug, Default)]
pub struct TrieNode {
    /// Replacement for the key ending here. Empty unless terminal.
    pub value: String,
    pub priority: Priority,
    pub children: Children,
}

pub(crate) fn empty_table(size: usize) -> Vec<Option<Box<TrieNode>>> {
    (0..size).map(|_| None).collect()
}

impl TrieNode {
    /// A node whose children are a table, as the root always is.
    pub fn with_table(size: usize) -> Self {
        Self {
            children: Children::Table(empty_table(size)),
            ..Self::default()
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.priority > 0
    }

    /// Inserts `key` below this node.
    ///
    /// A terminal value is only written into a node that has not been claimed
    /// yet, so the first insertion of a key keeps its value.
    pub fn add(&mut self, key: &[u8], value: &str, priority: Priority, mapping: &ByteMapping) {
        let Some((&first, rest)) = key.split_first() else {
            if self.priority == 0 {
                self.value = String::from(value);
                self.priority = priority;
            }
            return;
        };

        self.children = match core::mem::take(&mut self.children) {
            Children::Leaf => {
                let mut next = TrieNode::default();
                next.add(&[], value, priority, mapping);
                Children::Prefix {
                    prefix: key.to_vec(),
                    next: Box::new(next),
                }
            }
            Children::Table(mut table) => {
                if let Some(idx) = mapping.index(first) {
                    table[idx]
                        .get_or_insert_with(Default::default)
                        .add(rest, value, priority, mapping);
                }
                Children::Table(table)
            }
            Children::Prefix { mut prefix, mut next } => {
                let common = prefix
                    .iter()
                    .zip(key)
                    .take_while(|(a, b)| a == b)
                    .count();

                if common == prefix.len() {
                    next.add(&key[common..], value, priority, mapping);
                    Children::Prefix { prefix, next }
                } else if common == 0 {
                    // Branch on the first byte: the stored prefix continues in
                    // one slot, the new key starts in another.
                    let prefix_node = if prefix.len() == 1 {
                        next
                    } else {
                        Box::new(TrieNode {
                            children: Children::Prefix {
                                prefix: prefix[1..].to_vec(),
                                next,
                            },
                            ..TrieNode::default()
                        })
                    };
                    let mut key_node = TrieNode::default();
                    key_node.add(rest, value, priority, mapping);

                    let mut table = empty_table(mapping.table_size());
                    if let Some(idx) = mapping.index(prefix[0]) {
                        table[idx] = Some(prefix_node);
                    }
                    if let Some(idx) = mapping.index(first) {
                        table[idx] = Some(Box::new(key_node));
                    }
                    Children::Table(table)
                } else {
                    let tail = prefix.split_off(common);
                    let mut split = TrieNode {
                        children: Children::Prefix { prefix: tail, next },
                        ..TrieNode::default()
                    };
                    split.add(&key[common..], value, priority, mapping);
                    Children::Prefix {
                        prefix,
                        next: Box::new(split),
                    }
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[&str]) -> (TrieNode, ByteMapping) {
        let mapping = ByteMapping::from_keys(keys.iter().map(|k| k.as_bytes()));
        let mut root = TrieNode::with_table(mapping.table_size());
        for (i, k) in keys.iter().enumerate() {
            root.add(k.as_bytes(), k, keys.len() - i, &mapping);
        }
        (root, mapping)
    }

    fn child<'a>(node: &'a TrieNode, mapping: &ByteMapping, b: u8) -> &'a TrieNode {
        match &node.children {
            Children::Table(t) => t[mapping.index(b).unwrap()].as_deref().unwrap(),
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn single_child_is_stored_as_prefix() {
        let (root, mapping) = build(&["bcbc"]);
        let b = child(&root, &mapping, b'b');
        match &b.children {
            Children::Prefix { prefix, next } => {
                assert_eq!(prefix.as_slice(), b"cbc");
                assert!(next.is_terminal());
                assert_eq!(next.value, "bcbc");
            }
            other => panic!("expected prefix, got {:?}", other),
        }
    }

    #[test]
    fn diverging_first_byte_splits_prefix_into_table() {
        let (root, mapping) = build(&["ax", "ay"]);
        let a = child(&root, &mapping, b'a');
        assert!(!a.is_terminal());
        assert_eq!(child(a, &mapping, b'x').value, "ax");
        assert_eq!(child(a, &mapping, b'y').value, "ay");
    }

    #[test]
    fn shared_prefix_is_split_after_common_section() {
        let (root, mapping) = build(&["abcd", "abxy"]);
        let a = child(&root, &mapping, b'a');
        match &a.children {
            Children::Prefix { prefix, next } => {
                assert_eq!(prefix.as_slice(), b"b");
                assert_eq!(child(next, &mapping, b'c').priority, 0);
                assert!(matches!(child(next, &mapping, b'x').children, Children::Prefix { .. }));
            }
            other => panic!("expected prefix, got {:?}", other),
        }
    }

    #[test]
    fn shorter_key_terminates_inside_prefix() {
        let (root, mapping) = build(&["xyz", "xy"]);
        let x = child(&root, &mapping, b'x');
        match &x.children {
            Children::Prefix { prefix, next } => {
                assert_eq!(prefix.as_slice(), b"y");
                assert_eq!(next.value, "xy");
            }
            other => panic!("expected prefix, got {:?}", other),
        }
    }

    #[test]
    fn first_insertion_keeps_terminal_value() {
        let mapping = ByteMapping::from_keys([&b"x"[..]]);
        let mut root = TrieNode::with_table(mapping.table_size());
        root.add(b"x", "A", 2, &mapping);
        root.add(b"x", "B", 1, &mapping);

        let x = child(&root, &mapping, b'x');
        assert_eq!(x.value, "A");
        assert_eq!(x.priority, 2);
    }
}
