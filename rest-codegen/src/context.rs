//! Per-run values stamped into generated files.

use chrono::{DateTime, SecondsFormat, Utc};
use prisma_rest_core::Version;

use crate::builder::CodeBuilder;

/// Generator identity and generation time for one run.
///
/// Created once by the caller and passed down, so rendering never reads
/// the clock itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub generator: String,
    pub version: Version,
    pub generated_at: DateTime<Utc>,
}

impl RunContext {
    pub fn new(
        generator: impl Into<String>,
        version: Version,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generator: generator.into(),
            version,
            generated_at,
        }
    }

    /// A context stamped with the current time.
    pub fn now(generator: impl Into<String>, version: Version) -> Self {
        Self::new(generator, version, Utc::now())
    }

    /// ISO-8601 timestamp with millisecond precision (`2024-01-02T03:04:05.678Z`).
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The provenance comment block, followed by a blank line.
    pub fn header(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line(&format!(
                "// Generated by {} v{}",
                self.generator, self.version
            ))
            .push_line(&format!("// Generated at: {}", self.timestamp()))
            .push_line("// DO NOT MODIFY THIS COMMENT BLOCK")
            .push_blank();
        builder.build()
    }

    /// Prefix `content` with the provenance header.
    pub fn stamp(&self, content: &str) -> String {
        let mut stamped = self.header();
        stamped.push_str(content);
        stamped
    }
}
