//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod generate;
mod output;
mod routes;

pub use generate::GenerateSummary;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Output, Report, TerminalOutput};
pub use routes::RoutesReport;
