//! Routes operation - the route table without writing anything.

use prisma_rest_codegen::{Generator, GeneratorConfig, RunContext};
use prisma_rest_schema::Schema;

use crate::reports::RoutesReport;

/// Route table of the models `config` selects.
pub fn routes(schema: Schema, config: GeneratorConfig, ctx: RunContext) -> RoutesReport {
    RoutesReport {
        routes: Generator::new(schema, config, ctx).routes(),
    }
}
