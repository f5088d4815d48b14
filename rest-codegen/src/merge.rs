//! Merging handler modules that share one route file.
//!
//! Each handler module starts with its own imports. Merging keeps the
//! first occurrence of every import line and concatenates the bodies.
//!
//! Only the leading run of `import` lines (blank lines allowed) counts as
//! the import block. An import line that appears after the first body line
//! stays in the body and is not deduplicated.

use indexmap::IndexSet;

/// Handler modules being merged into one file.
#[derive(Debug, Clone, Default)]
pub struct MergedSource {
    imports: IndexSet<String>,
    bodies: Vec<String>,
}

impl MergedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendered handler module.
    pub fn push(&mut self, handler: &str) {
        let (imports, body) = split_imports(handler);
        for import in imports {
            self.imports.insert(import.to_string());
        }
        self.bodies.push(body.trim().to_string());
    }

    /// Deduplicated import lines in first-seen order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Imports, a blank line, then the trimmed bodies separated by blank lines.
    pub fn render(&self) -> String {
        let imports: Vec<&str> = self.imports().collect();
        format!("{}\n\n{}", imports.join("\n"), self.bodies.join("\n\n"))
    }
}

impl<S: AsRef<str>> Extend<S> for MergedSource {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for handler in iter {
            self.push(handler.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for MergedSource {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut merged = Self::new();
        merged.extend(iter);
        merged
    }
}

/// Merge rendered handler modules destined for the same file.
pub fn combine_handlers<S: AsRef<str>>(handlers: &[S]) -> String {
    handlers.iter().collect::<MergedSource>().render()
}

/// Split a module into its leading import lines and the remaining text.
///
/// Blank lines inside the leading block are dropped.
pub fn split_imports(source: &str) -> (Vec<&str>, String) {
    let mut imports = Vec::new();
    let mut lines = source.split('\n').peekable();

    while let Some(line) = lines.next_if(|l| l.starts_with("import") || l.trim().is_empty()) {
        if !line.trim().is_empty() {
            imports.push(line);
        }
    }

    (imports, lines.collect::<Vec<_>>().join("\n"))
}
