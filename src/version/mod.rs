//! Version metadata layer
//!
//! This module provides the hierarchical version tree and the flat version
//! sources it is populated from or compared against.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Properties  │────▶│SimpleVersion│────▶│ VersionInfo │
//! │  (parse)    │     │    Info     │     │   (trait)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                ▲
//!                     ┌─────────────┐            │
//!                     │ VersionTree │────────────┘
//!                     │ (recursive) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tree`]: Recursive keyed tree with path lookup, flattening and depth queries
//! - [`info`]: `VersionInfo` trait and the flat `SimpleVersionInfo`
//! - [`key`]: Composite keys produced when flattening with full paths
//! - [`properties`]: Properties text parser
//! - [`error`]: Error types for tree contract violations and loading

pub mod error;
pub mod info;
pub mod key;
pub mod properties;
pub mod tree;
