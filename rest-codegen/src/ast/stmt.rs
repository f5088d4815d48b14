//! TypeScript statements.

use super::Expr;
use crate::builder::{CodeFragment, Renderable};

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `const <binding> = <value>;`
    Const { binding: String, value: Expr },
    /// `<expr>;`
    Expr(Expr),
    /// `return <expr>;`
    Return(Expr),
    /// `if (<cond>) { ... }`
    If { cond: String, body: Vec<Stmt> },
    /// `try { ... } catch (<binding>) { ... }`
    TryCatch {
        body: Vec<Stmt>,
        binding: String,
        handler: Vec<Stmt>,
    },
    /// An empty line separating groups of statements.
    Blank,
}

impl Stmt {
    pub fn constant(binding: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self::Const {
            binding: binding.into(),
            value: value.into(),
        }
    }

    pub fn ret(value: impl Into<Expr>) -> Self {
        Self::Return(value.into())
    }

    pub fn if_(cond: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self::If {
            cond: cond.into(),
            body,
        }
    }

    pub fn try_catch(body: Vec<Stmt>, binding: impl Into<String>, handler: Vec<Stmt>) -> Self {
        Self::TryCatch {
            body,
            binding: binding.into(),
            handler,
        }
    }
}

impl Renderable for Stmt {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Const { binding, value } => value.fragments(&format!("const {binding} = "), ";"),
            Self::Expr(expr) => expr.fragments("", ";"),
            Self::Return(expr) => expr.fragments("return ", ";"),
            Self::If { cond, body } => vec![CodeFragment::block(
                format!("if ({cond}) {{"),
                body.to_fragments(),
                "}",
            )],
            Self::TryCatch {
                body,
                binding,
                handler,
            } => vec![
                CodeFragment::open_block("try {", body.to_fragments()),
                CodeFragment::block(
                    format!("}} catch ({binding}) {{"),
                    handler.to_fragments(),
                    "}",
                ),
            ],
            Self::Blank => vec![CodeFragment::Blank],
        }
    }
}
