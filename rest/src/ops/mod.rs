//! Core operations.
//!
//! This module contains the business logic for prisma-rest commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod routes;

use eyre::Result;
use prisma_rest_codegen::RunContext;
use prisma_rest_core::Version;

pub use generate::generate;
pub use routes::routes;

/// Generator name written into file headers.
pub const GENERATOR_NAME: &str = "prisma-rest";

/// Run context for this binary, stamped with the current time.
pub fn run_context() -> Result<RunContext> {
    let version: Version = env!("CARGO_PKG_VERSION")
        .parse()
        .map_err(eyre::Report::msg)?;
    Ok(RunContext::now(GENERATOR_NAME, version))
}
