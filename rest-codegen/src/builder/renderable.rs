//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe what the generated code is; [`CodeFragment`]s are the
//! line/block structure a [`CodeBuilder`](super::CodeBuilder) prints.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A header line, indented body fragments and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }

    /// Create a block fragment whose closing line belongs to what follows
    /// (e.g., `try {` continued by `} catch (error) {`).
    pub fn open_block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: None,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
