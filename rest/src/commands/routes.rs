use std::path::Path;

use clap::Args;
use eyre::Result;
use prisma_rest_codegen::ExistingFiles;
use prisma_rest_schema::Schema;

use super::{TargetArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RoutesCommand {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl RoutesCommand {
    pub fn run(&self) -> Result<()> {
        let config = self
            .target
            .resolve(Path::new("."), ExistingFiles::default(), true)?;
        let schema = Schema::from_file(&config.schema_path).unwrap_or_exit();

        ops::routes(schema, config, ops::run_context()?).render(&mut TerminalOutput::new());
        Ok(())
    }
}
