//! TypeScript import builder.

use super::expr::quote;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// The statement as a single line, without newline.
    pub fn statement(&self) -> String {
        let from = quote(&self.from);
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from {};", def, from),
            (Some(def), false) => {
                format!("import {}, {{ {} }} from {};", def, self.named.join(", "), from)
            }
            (None, false) => format!("import {{ {} }} from {};", self.named.join(", "), from),
            (None, true) => format!("import {};", from),
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
