//! Shared test utilities

#![allow(dead_code)]

mod tree;

pub use tree::*;
