//! Generate operation - route files from a schema.

use eyre::{Context, Result};
use prisma_rest_codegen::{DiskSink, Generator, GeneratorConfig, RunContext};
use prisma_rest_schema::Schema;

use crate::reports::GenerateSummary;

/// Generate route files for `schema` under the configured output root.
pub fn generate(
    schema: Schema,
    config: GeneratorConfig,
    ctx: RunContext,
) -> Result<GenerateSummary> {
    let model_count = schema.entities.len();
    let output_dir = config.output_path.clone();
    let prisma_import = config.prisma_import.clone();

    let mut sink = DiskSink::new(&output_dir);
    let report = Generator::new(schema, config, ctx)
        .generate(&mut sink)
        .wrap_err("Failed to generate routes")?;

    Ok(GenerateSummary {
        model_count,
        output_dir,
        prisma_import,
        report,
    })
}
