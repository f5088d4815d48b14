//! CodeFile abstraction for structured TypeScript file generation.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

/// A structured representation of a TypeScript module.
///
/// Imports are rendered first, followed by a blank line and the body
/// elements separated by blank lines.
///
/// # Example
///
/// ```
/// use prisma_rest_codegen::{CodeFile, ast::{Fn, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("next/server").named("NextResponse"))
///     .add(Fn::new("GET").async_())
///     .render();
///
/// assert_eq!(
///     code,
///     "import { NextResponse } from \"next/server\";\n\nexport async function GET() {\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Fn, Stmt};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_imports_only() {
        let code = CodeFile::new()
            .import(Import::new("next/server").named("NextResponse"))
            .render();
        assert_eq!(code, "import { NextResponse } from \"next/server\";\n");
    }

    #[test]
    fn test_blank_lines_between_body() {
        let code = CodeFile::new()
            .add(Stmt::constant("a", Expr::raw("1")))
            .add(Stmt::constant("b", Expr::raw("2")))
            .render();
        assert_eq!(code, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_custom_indent() {
        let code = CodeFile::new()
            .add(Fn::new("f").stmt(Stmt::ret(Expr::raw("1"))))
            .render_with_indent(Indent::Spaces(4));
        assert_eq!(code, "export function f() {\n    return 1;\n}\n");
    }
}
