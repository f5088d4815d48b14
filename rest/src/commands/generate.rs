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
pub struct GenerateCommand {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Overwrite existing route files
    #[arg(long)]
    pub force: bool,

    /// Only generate routes for new models
    #[arg(long)]
    pub skip_existing: bool,

    /// Show what would be generated without creating files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn existing_files(&self) -> ExistingFiles {
        ExistingFiles::from_flags(self.force, self.skip_existing)
    }

    pub fn run(&self) -> Result<()> {
        let config = self
            .target
            .resolve(Path::new("."), self.existing_files(), self.dry_run)?;
        println!("Generating REST API routes...");

        let schema = Schema::from_file(&config.schema_path).unwrap_or_exit();
        let summary = ops::generate(schema, config, ops::run_context()?)?;

        summary.render(&mut TerminalOutput::new());
        Ok(())
    }
}
