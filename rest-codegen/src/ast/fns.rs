//! TypeScript function declarations.

use super::Stmt;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn declaration(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

/// Builder for function declarations.
///
/// Signatures with more than one parameter are broken over several lines,
/// one parameter per line.
#[derive(Debug, Clone, PartialEq)]
pub struct Fn {
    name: String,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    body: Vec<Stmt>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn stmts(mut self, stmts: impl IntoIterator<Item = Stmt>) -> Self {
        self.body.extend(stmts);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn signature_start(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        format!("{export}{async_kw}function {}(", self.name)
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let start = self.signature_start();
        let body = self.body.to_fragments();

        if self.params.len() <= 1 {
            let params = self
                .params
                .first()
                .map(Param::declaration)
                .unwrap_or_default();
            return vec![CodeFragment::block(
                format!("{start}{params}) {{"),
                body,
                "}",
            )];
        }

        let params = self
            .params
            .iter()
            .map(|p| CodeFragment::line(format!("{},", p.declaration())))
            .collect();
        vec![
            CodeFragment::open_block(start, params),
            CodeFragment::block(") {", body, "}"),
        ]
    }
}
