// wordmask-core/src/engines/mod.rs
//! This module contains the substitution engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `Replacer` trait. `engine::Engine` wraps them into a single variant type.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod trie_engine;
pub mod word_boundary_engine;
