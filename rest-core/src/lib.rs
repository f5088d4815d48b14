//! Core utilities and types for the prisma-rest route generator.
//!
//! This crate provides the small primitives shared by the schema reader,
//! the code generator and the command-line tool.

mod file;
mod utils;
mod version;

// File operations
pub use file::write_file;
// Naming rules
pub use utils::{pluralize, to_camel_case};
pub use version::Version;
