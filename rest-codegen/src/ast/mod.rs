//! TypeScript AST builders for route handler modules.
//!
//! These describe handler code structurally; rendering goes through
//! [`CodeFragment`](crate::builder::CodeFragment)s and a
//! [`CodeBuilder`](crate::builder::CodeBuilder).

mod expr;
mod fns;
mod imports;
mod stmt;

pub use expr::{Call, Expr, JsObject};
pub use fns::{Fn, Param};
pub use imports::Import;
pub use stmt::Stmt;
