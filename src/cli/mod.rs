//! Command-line layer
//!
//! # Modules
//!
//! - [`commands`]: One function per subcommand, returning the text to print
//! - [`loader`]: Reading `.json` / `.properties` files and writing JSON trees
//! - [`logging`]: Tracing subscriber setup (stderr or log file)

pub mod commands;
pub mod loader;
pub mod logging;
