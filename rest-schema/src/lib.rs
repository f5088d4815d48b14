//! Schema model for the prisma-rest route generator.
//!
//! The generator works on a normalized, data-only view of a Prisma
//! datamodel: models ([`Entity`]), their [`Field`]s and [`Enum`]s.
//! This crate defines that view and the adapters that produce it:
//!
//! - [`Schema::from_file`] - load a `.prisma` schema or a DMMF JSON document
//! - [`Schema::from_prisma_str`] - read Prisma schema language from a string
//! - [`Schema::from_dmmf_str`] - read a DMMF datamodel JSON document
//!
//! # Example
//!
//! ```
//! use prisma_rest_schema::Schema;
//!
//! let schema = Schema::from_prisma_str(
//!     r#"
//!     model User {
//!       id    String @id
//!       email String @unique
//!     }
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(schema.entities[0].id_field(), "id");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod dmmf;
mod error;
mod model;
mod prisma;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
pub use model::{Entity, Enum, Field, Relation, Schema};

impl Schema {
    /// Load a schema from disk.
    ///
    /// Files with a `.json` extension are read as DMMF datamodel documents,
    /// everything else as Prisma schema language. A missing file is a
    /// configuration error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Box::new(Error::SchemaNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();

        let schema = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => dmmf::parse_dmmf(&content, &filename)?,
            _ => prisma::parse_prisma(&content, &filename)?,
        };

        tracing::debug!(
            path = %filename,
            models = schema.entities.len(),
            enums = schema.enums.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Read Prisma schema language (uses "schema.prisma" for error reporting).
    pub fn from_prisma_str(content: &str) -> Result<Self> {
        prisma::parse_prisma(content, "schema.prisma")
    }

    /// Read a DMMF datamodel JSON document (uses "schema.json" for error reporting).
    pub fn from_dmmf_str(content: &str) -> Result<Self> {
        dmmf::parse_dmmf(content, "schema.json")
    }
}
