// wordmask/src/lib.rs
//! # wordmask CLI Application
//!
//! This crate provides the command-line front end for `wordmask-core`:
//! one-shot sanitization of text, files or stdin, and management of the
//! stored per-namespace word lists.

pub mod cli;
pub mod commands;
pub mod logger;
