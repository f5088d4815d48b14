mod completions;
mod generate;
mod routes;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use prisma_rest_codegen::{ExistingFiles, GeneratorConfig};
use routes::RoutesCommand;

use crate::config::Settings;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for prisma_rest_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "prisma-rest")]
#[command(version)]
#[command(about = "Generate REST API routes for Next.js from Prisma schema")]
pub(crate) struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Routes(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate REST API routes from Prisma schema
    Generate(GenerateCommand),

    /// Print the routes that would be generated
    Routes(RoutesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options selecting the schema, models and route layout.
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Configuration file (defaults to ./prisma-rest.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to Prisma schema file [default: ./prisma/schema.prisma]
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Output directory for generated routes [default: ./src/app/api or ./app/api]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL for API routes [default: /api]
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Additional path prefix for API routes (e.g., "rest" for /api/rest)
    #[arg(long)]
    pub api_prefix: Option<String>,

    /// Import path for Prisma client [default: @/lib/prisma]
    #[arg(short, long)]
    pub prisma_import: Option<String>,

    /// Include only specific models
    #[arg(long, num_args = 1.., value_name = "MODELS")]
    pub include: Option<Vec<String>>,

    /// Exclude specific models
    #[arg(long, num_args = 1.., value_name = "MODELS")]
    pub exclude: Option<Vec<String>>,
}

impl TargetArgs {
    fn settings(&self) -> Settings {
        Settings {
            schema: self.schema.clone(),
            output: self.output.clone(),
            base_url: self.base_url.clone(),
            api_prefix: self.api_prefix.clone(),
            prisma_import: self.prisma_import.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }

    /// Merge flags over the configuration file and defaults.
    pub fn resolve(
        &self,
        project_root: &Path,
        existing: ExistingFiles,
        dry_run: bool,
    ) -> Result<GeneratorConfig> {
        let file = Settings::discover(self.config.as_deref(), project_root)?;
        Ok(self
            .settings()
            .or(file)
            .into_generator_config(project_root, existing, dry_run))
    }
}
