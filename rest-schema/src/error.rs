use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the schema text and its filename so readers can build labelled
/// diagnostics without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a syntax error pointing at `span`.
    pub fn syntax_error(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: span.into(),
            message: message.into(),
        })
    }

    /// Create an error for a block whose closing brace never arrives.
    pub fn unterminated_block_error(
        &self,
        kind: impl Into<String>,
        name: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnterminatedBlock {
            src: self.named_source(),
            span: span.into(),
            kind: kind.into(),
            name: name.into(),
        })
    }

    /// Create an error for a model or enum declared twice.
    pub fn duplicate_error(
        &self,
        kind: impl Into<String>,
        name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            kind: kind.into(),
            name: name.into(),
        })
    }

    /// Create a JSON error, locating serde's line/column in the source.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column pair.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("schema not found at '{path}'")]
    #[diagnostic(
        code(prisma_rest::schema_not_found),
        help("pass the schema location with --schema")
    )]
    SchemaNotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse datamodel JSON")]
    #[diagnostic(code(prisma_rest::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(prisma_rest::syntax_error))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("{kind} '{name}' is never closed")]
    #[diagnostic(
        code(prisma_rest::unterminated_block),
        help("add a closing '}}' after the last line of the {kind}")
    )]
    UnterminatedBlock {
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here")]
        span: SourceSpan,
        kind: String,
        name: String,
    },

    #[error("{kind} '{name}' is declared more than once")]
    #[diagnostic(code(prisma_rest::duplicate_name))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        kind: String,
        name: String,
    },
}
