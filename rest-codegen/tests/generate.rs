//! End-to-end generation runs against a temporary output directory.

use std::fs;

use chrono::{TimeZone, Utc};
use prisma_rest_codegen::{
    DiskSink, ExistingFiles, GenerateReport, Generator, GeneratorConfig, Operation, Outcome,
    RunContext,
};
use prisma_rest_core::Version;
use prisma_rest_schema::{Entity, Field, Schema};
use tempfile::TempDir;

fn schema() -> Schema {
    Schema {
        entities: vec![
            Entity::new("User").with_field(Field::new("id", "String").id()),
            Entity::new("Category").with_field(Field::new("name", "String")),
        ],
        enums: Vec::new(),
    }
}

fn ctx() -> RunContext {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).single().unwrap();
    RunContext::new("prisma-rest", Version::new(0, 1, 0), at)
}

fn run(temp: &TempDir, config: GeneratorConfig) -> GenerateReport {
    let mut sink = DiskSink::new(temp.path());
    Generator::new(schema(), config, ctx())
        .generate(&mut sink)
        .unwrap()
}

fn config(temp: &TempDir) -> GeneratorConfig {
    GeneratorConfig::new("prisma/schema.prisma", temp.path())
}

fn read(temp: &TempDir, rel: &[&str]) -> String {
    let path = rel.iter().fold(temp.path().to_path_buf(), |p, s| p.join(s));
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_user_get_route() {
    let temp = TempDir::new().unwrap();
    let report = run(&temp, config(&temp));

    let get = report
        .routes
        .iter()
        .find(|r| r.entity == "User" && r.operation == Operation::Get)
        .unwrap();
    assert_eq!(get.path, "/api/users/[id]");
    assert_eq!(get.handler, "getUser");
}

#[test]
fn test_category_keys_on_id_by_fallback() {
    let temp = TempDir::new().unwrap();
    run(&temp, config(&temp));

    let item = read(&temp, &["categorys", "[id]", "route.ts"]);
    assert_eq!(item.matches("where: { id: params.id },").count(), 3);
    assert!(item.contains("prisma.category.findUnique"));
}

#[test]
fn test_files_are_laid_out_per_model() {
    let temp = TempDir::new().unwrap();
    let report = run(&temp, config(&temp));

    assert_eq!(report.generated_count(), 2);
    assert_eq!(
        report.files,
        vec![
            "users/route.ts",
            "users/[id]/route.ts",
            "categorys/route.ts",
            "categorys/[id]/route.ts",
        ]
    );
    let collection = read(&temp, &["users", "route.ts"]);
    assert!(collection.starts_with(
        "// Generated by prisma-rest v0.1.0\n// Generated at: 2024-03-09T12:00:00.000Z\n// DO NOT MODIFY THIS COMMENT BLOCK\n\n"
    ));
    assert_eq!(collection.matches("from \"next/server\"").count(), 1);
}

#[test]
fn test_include_and_exclude_same_model_selects_nothing() {
    let temp = TempDir::new().unwrap();
    let report = run(
        &temp,
        config(&temp)
            .include(Some(vec!["User".into()]))
            .exclude(Some(vec!["User".into()])),
    );

    assert_eq!(report.generated_count(), 0);
    assert!(report.entities.is_empty());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let report = run(
        &temp,
        config(&temp).include(Some(vec!["User".into()])).dry_run(true),
    );

    assert!(report.dry_run);
    assert_eq!(report.generated_count(), 1);
    assert_eq!(report.files.len(), 2);
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_rerun_without_force_conflicts() {
    let temp = TempDir::new().unwrap();
    let first = run(&temp, config(&temp));
    let before = read(&temp, &["users", "route.ts"]);

    let second = run(&temp, config(&temp));
    assert_eq!(second.generated_count(), 0);
    assert_eq!(second.conflicted(), vec!["User", "Category"]);
    assert!(second.files.is_empty());
    assert_eq!(read(&temp, &["users", "route.ts"]), before);
    assert_eq!(first.generated_count(), 2);
}

#[test]
fn test_generation_is_reproducible() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    run(&a, config(&a));
    run(&b, config(&b));

    let files: [&[&str]; 2] = [&["users", "route.ts"], &["categorys", "[id]", "route.ts"]];
    for rel in files {
        assert_eq!(read(&a, rel), read(&b, rel));
    }
}

#[test]
fn test_skip_existing_counts_skipped() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("users").join("[id]")).unwrap();
    fs::write(temp.path().join("users").join("[id]").join("route.ts"), "// mine").unwrap();

    let report = run(
        &temp,
        config(&temp).existing(ExistingFiles::from_flags(true, true)),
    );

    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.generated_count(), 1);
    assert!(report.conflicted().is_empty());
    assert_eq!(read(&temp, &["users", "[id]", "route.ts"]), "// mine");
    assert!(!temp.path().join("users").join("route.ts").exists());
}

#[test]
fn test_force_overwrites() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("users")).unwrap();
    fs::write(temp.path().join("users").join("route.ts"), "// stale").unwrap();

    let report = run(&temp, config(&temp).existing(ExistingFiles::Overwrite));

    assert_eq!(report.generated_count(), 2);
    assert!(read(&temp, &["users", "route.ts"]).contains("export async function POST"));
}

#[test]
fn test_excluded_model_is_reported() {
    let temp = TempDir::new().unwrap();
    let schema = Schema {
        entities: vec![
            Entity::new("Session")
                .with_documentation("Auth sessions. @REST-SKIP")
                .with_field(Field::new("id", "String").id()),
        ],
        enums: Vec::new(),
    };
    let mut sink = DiskSink::new(temp.path());
    let report = Generator::new(schema, config(&temp), ctx())
        .generate(&mut sink)
        .unwrap();

    assert_eq!(report.entities[0].outcome, Outcome::Excluded);
    assert_eq!(report.generated_count(), 0);
    assert!(!temp.path().join("sessions").exists());
}

#[test]
fn test_prisma_doc_comment_skips_model() {
    let schema = Schema::from_prisma_str(
        r#"
        /// Secrets are never exposed over HTTP.
        /// @rest-skip
        model Secret {
          id Int @id
        }

        model Note {
          id   Int    @id
          body String
        }
        "#,
    )
    .unwrap();

    let temp = TempDir::new().unwrap();
    let mut sink = DiskSink::new(temp.path());
    let report = Generator::new(schema, config(&temp), ctx())
        .generate(&mut sink)
        .unwrap();

    assert_eq!(report.excluded(), vec!["Secret"]);
    assert_eq!(report.generated_count(), 1);
    assert!(temp.path().join("notes").join("route.ts").is_file());
    assert!(!temp.path().join("secrets").exists());
}
