//! Generate command report.

use std::path::PathBuf;

use prisma_rest_codegen::{GenerateReport, Outcome};

use super::output::{Output, Report};

/// Everything the `generate` command prints after a run.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Number of models in the schema.
    pub model_count: usize,
    pub output_dir: PathBuf,
    pub prisma_import: String,
    pub report: GenerateReport,
}

fn routes(n: usize) -> String {
    if n == 1 {
        format!("{n} route")
    } else {
        format!("{n} routes")
    }
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        let report = &self.report;

        out.preformatted(&format!("Parsed {} models from schema", self.model_count));
        for entity in &report.entities {
            let name = &entity.entity;
            match entity.outcome {
                Outcome::Generated if report.dry_run => {
                    out.added_item(&format!("[DRY RUN] Generating routes for {name}"))
                }
                Outcome::Generated => out.added_item(&format!("Generating routes for {name}")),
                Outcome::Skipped => out.list_item(&format!("Skipping existing routes for {name}")),
                Outcome::Conflicted => {
                    out.blocked_item(&format!("Routes already exist for {name}"))
                }
                Outcome::Excluded => out.list_item(&format!("Skipping {name} (@rest-skip)")),
            }
        }

        if !report.files.is_empty() {
            out.newline();
            out.section(if report.dry_run { "Would write" } else { "Wrote" });
            for file in &report.files {
                out.added_item(&self.output_dir.join(file).display().to_string());
            }
        }

        let generated = report.generated_count();
        out.newline();
        if report.dry_run {
            out.preformatted(&format!("DRY RUN: Would generate {}", routes(generated)));
        } else {
            out.preformatted(&format!("Successfully generated {}!", routes(generated)));
        }

        let skipped = report.skipped_count();
        if skipped > 0 {
            out.preformatted(&format!("Skipped {} existing", routes(skipped)));
        }

        let conflicted = report.conflicted();
        if !conflicted.is_empty() {
            out.newline();
            out.warning(&format!("Routes already exist for: {}", conflicted.join(", ")));
            out.preformatted("  Use --force to overwrite or --skip-existing to skip them");
        }

        if !report.dry_run && generated > 0 {
            out.newline();
            out.preformatted(&format!(
                "Make sure you have a Prisma client instance at {}",
                self.prisma_import
            ));
        }
    }
}
