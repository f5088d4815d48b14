//! The generation run: model selection, conflict policy and file output.

use eyre::Result;
use prisma_rest_core::pluralize;
use prisma_rest_schema::{Entity, Schema};

use crate::{
    config::{ExistingFiles, GeneratorConfig},
    context::RunContext,
    directives::parse_directives,
    handlers::emit_handler,
    merge::combine_handlers,
    report::{GenerateReport, Outcome},
    routes::{RouteDescriptor, RouteFile, build_routes},
    sink::FileSink,
};

/// A rendered route file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the output root.
    pub path: String,
    pub content: String,
}

/// Generates Next.js route files for the models of a schema.
///
/// Output depends only on the schema, the configuration and the run
/// context; the sink decides where files go.
#[derive(Debug, Clone)]
pub struct Generator {
    schema: Schema,
    config: GeneratorConfig,
    ctx: RunContext,
}

impl Generator {
    pub fn new(schema: Schema, config: GeneratorConfig, ctx: RunContext) -> Self {
        Self {
            schema,
            config,
            ctx,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Models passing the include and exclude lists, in schema order.
    pub fn selected_entities(&self) -> Vec<&Entity> {
        self.schema
            .entities
            .iter()
            .filter(|e| self.config.selects(&e.name))
            .collect()
    }

    /// Selected models not excluded by a documentation directive.
    pub fn target_entities(&self) -> Vec<&Entity> {
        self.selected_entities()
            .into_iter()
            .filter(|e| !parse_directives(e.documentation.as_deref()).skip)
            .collect()
    }

    /// Route table of every target model.
    pub fn routes(&self) -> Vec<RouteDescriptor> {
        let base = self.config.route_base();
        self.target_entities()
            .into_iter()
            .flat_map(|e| build_routes(e, &base))
            .collect()
    }

    /// Render the route files of one model.
    pub fn render_entity(&self, entity: &Entity) -> Vec<PlannedFile> {
        let plural = pluralize(&entity.name);
        RouteFile::ALL
            .into_iter()
            .map(|file| PlannedFile {
                path: file.relative_path(&plural),
                content: self.render_file(entity, file),
            })
            .collect()
    }

    /// Render every target model without consulting any sink.
    pub fn preview(&self) -> Vec<PlannedFile> {
        self.target_entities()
            .into_iter()
            .flat_map(|e| self.render_entity(e))
            .collect()
    }

    /// Run generation against `sink`.
    ///
    /// Models are processed one at a time. A write failure aborts the run;
    /// files written for earlier models stay in place.
    pub fn generate(&self, sink: &mut dyn FileSink) -> Result<GenerateReport> {
        let base = self.config.route_base();
        let mut report = GenerateReport {
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        let selected = self.selected_entities();
        tracing::debug!(
            selected = selected.len(),
            total = self.schema.entities.len(),
            "selected models"
        );

        for entity in selected {
            let name = entity.name.as_str();

            if parse_directives(entity.documentation.as_deref()).skip {
                tracing::info!(entity = name, "excluded by @rest-skip");
                report.record(name, Outcome::Excluded);
                continue;
            }

            let files = self.render_entity(entity);
            if files.iter().any(|f| sink.exists(&f.path)) {
                match self.config.existing {
                    ExistingFiles::Skip => {
                        tracing::info!(entity = name, "skipping existing routes");
                        report.record(name, Outcome::Skipped);
                        continue;
                    }
                    ExistingFiles::Conflict => {
                        tracing::warn!(entity = name, "routes already exist");
                        report.record(name, Outcome::Conflicted);
                        continue;
                    }
                    ExistingFiles::Overwrite => {
                        tracing::debug!(entity = name, "overwriting existing routes");
                    }
                }
            }

            for file in &files {
                if !self.config.dry_run {
                    sink.write(&file.path, &file.content)?;
                }
                report.files.push(file.path.clone());
            }
            report.routes.extend(build_routes(entity, &base));
            report.record(name, Outcome::Generated);
            tracing::info!(
                entity = name,
                dry_run = self.config.dry_run,
                "generated routes"
            );
        }

        Ok(report)
    }

    fn render_file(&self, entity: &Entity, file: RouteFile) -> String {
        let handlers: Vec<String> = file
            .operations()
            .iter()
            .map(|&op| emit_handler(entity, op, &self.config.prisma_import))
            .collect();
        self.ctx.stamp(&combine_handlers(&handlers))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use prisma_rest_core::Version;
    use prisma_rest_schema::Field;

    use super::*;
    use crate::sink::MemorySink;

    fn schema() -> Schema {
        Schema {
            entities: vec![
                Entity::new("User").with_field(Field::new("id", "String").id()),
                Entity::new("Post").with_field(Field::new("id", "Int").id()),
                Entity::new("AuditLog")
                    .with_documentation("@rest-skip internal only")
                    .with_field(Field::new("id", "Int").id()),
            ],
            enums: Vec::new(),
        }
    }

    fn generator(config: GeneratorConfig) -> Generator {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
        let ctx = RunContext::new("prisma-rest", Version::new(0, 1, 0), at);
        Generator::new(schema(), config, ctx)
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::new("schema.prisma", "app/api")
    }

    #[test]
    fn test_selection_excludes_after_include() {
        let generator = generator(
            config()
                .include(Some(vec!["User".into()]))
                .exclude(Some(vec!["User".into()])),
        );
        assert!(generator.selected_entities().is_empty());
    }

    #[test]
    fn test_directive_excludes_from_routes() {
        let generator = generator(config());
        let entities: Vec<_> = generator
            .target_entities()
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(entities, vec!["User", "Post"]);
        assert_eq!(generator.routes().len(), 10);
    }

    #[test]
    fn test_generate_writes_two_files_per_model() {
        let mut sink = MemorySink::new();
        let report = generator(config()).generate(&mut sink).unwrap();

        assert_eq!(report.generated_count(), 2);
        assert_eq!(report.excluded(), vec!["AuditLog"]);
        assert_eq!(
            sink.paths().collect::<Vec<_>>(),
            vec![
                "posts/[id]/route.ts",
                "posts/route.ts",
                "users/[id]/route.ts",
                "users/route.ts",
            ]
        );
        let collection = sink.get("users/route.ts").unwrap();
        assert!(collection.starts_with("// Generated by prisma-rest v0.1.0\n"));
        assert!(collection.contains("export async function GET(request: NextRequest)"));
        assert!(collection.contains("export async function POST(request: NextRequest)"));
    }

    #[test]
    fn test_route_base_includes_prefix() {
        let generator = generator(config().api_prefix(Some("rest".into())));
        assert_eq!(generator.routes()[1].path, "/api/rest/users/[id]");
    }
}
