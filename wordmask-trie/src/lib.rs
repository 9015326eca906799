// wordmask-trie/src/lib.rs
#![no_std]

extern crate alloc; 

#[cfg(feature = "std")]
extern crate std;

pub mod mapping;
pub mod node;
pub mod replacer;

pub use replacer::{BuildError, Match, TrieReplacer};

/// Priority of a terminal trie node. Zero marks a partial key.
pub type Priority = usize;
