//! CLI module for the snapshot binary.
//!
//! # Usage
//!
//! ```ignore
//! use snapshot::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Generate { topic, .. } => { /* run a generation */ }
//!     CliCommand::Version => println!("{}", snapshot::cli::version_line()),
//!     _ => println!("{}", snapshot::cli::USAGE),
//! }
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use output::{render_items, transition_line};
pub use version::{version_line, VERSION};
