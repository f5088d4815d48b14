//! Route handler generation for the prisma-rest route generator.
//!
//! Turns the models of a Prisma schema into Next.js App Router route
//! modules, two per model:
//!
//! - `{plural}/route.ts` with the list (`GET`) and create (`POST`) handlers
//! - `{plural}/[id]/route.ts` with the get (`GET`), update (`PUT`) and
//!   delete (`DELETE`) handlers
//!
//! # Usage
//!
//! ```ignore
//! use prisma_rest_codegen::{DiskSink, Generator, GeneratorConfig, RunContext};
//! use prisma_rest_schema::Schema;
//!
//! let schema = Schema::from_file("prisma/schema.prisma")?;
//! let config = GeneratorConfig::new("prisma/schema.prisma", "app/api");
//! let ctx = RunContext::now("prisma-rest", "0.1.0".parse()?);
//!
//! let report = Generator::new(schema, config, ctx).generate(&mut DiskSink::new("app/api"))?;
//! println!("generated {} models", report.generated_count());
//! ```

pub mod ast;
pub mod builder;
mod code_file;
mod config;
mod context;
mod directives;
mod generator;
mod handlers;
mod merge;
mod report;
mod routes;
mod sink;

pub use code_file::CodeFile;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_PRISMA_IMPORT, DEFAULT_SCHEMA_PATH, ExistingFiles, GeneratorConfig,
    default_output_path,
};
pub use context::RunContext;
pub use directives::{RestDirectives, parse_directives};
pub use generator::{Generator, PlannedFile};
pub use handlers::{DEFAULT_LIMIT, DEFAULT_PAGE, HandlerSource, emit_handler, emit_handler_named};
pub use merge::{MergedSource, combine_handlers, split_imports};
pub use report::{EntityOutcome, GenerateReport, Outcome};
pub use routes::{
    HttpMethod, Operation, ROUTE_EXTENSION, RouteDescriptor, RouteFile, UnknownOperation,
    build_routes,
};
pub use sink::{DiskSink, FileSink, MemorySink};
