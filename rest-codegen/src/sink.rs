//! Destinations for generated route files.
//!
//! Paths handed to a sink are relative to the output root and always use
//! `/` separators (`users/[id]/route.ts`).

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use eyre::Result;
use prisma_rest_core::write_file;

/// Where the generator looks for existing files and writes new ones.
pub trait FileSink {
    /// Whether a file already exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Create or replace the file at `path`.
    fn write(&mut self, path: &str, contents: &str) -> Result<()>;
}

/// Writes files below a root directory on disk.
#[derive(Debug, Clone)]
pub struct DiskSink {
    root: PathBuf,
}

impl DiskSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a relative route path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl FileSink for DiskSink {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        let target = self.resolve(path);
        tracing::debug!(path = %target.display(), "writing route file");
        write_file(&target, contents)
    }
}

/// Keeps files in memory, ordered by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that starts out with the given files.
    pub fn with_files<K, V>(files: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            files: files
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSink for MemorySink {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        self.files.insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
