//! Run configuration for the route generator.

use std::path::{Path, PathBuf};

/// Default route base.
pub const DEFAULT_BASE_URL: &str = "/api";
/// Default module the `prisma` client is imported from.
pub const DEFAULT_PRISMA_IMPORT: &str = "@/lib/prisma";
/// Default schema location, relative to the project root.
pub const DEFAULT_SCHEMA_PATH: &str = "./prisma/schema.prisma";

/// What to do when a model's route files already exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingFiles {
    /// Leave the model untouched and report it as conflicted.
    #[default]
    Conflict,
    /// Leave the model untouched and count it as skipped.
    Skip,
    /// Regenerate and replace the files.
    Overwrite,
}

impl ExistingFiles {
    /// Policy from the `--force` and `--skip-existing` flags.
    ///
    /// Skipping wins when both are set.
    pub fn from_flags(force: bool, skip_existing: bool) -> Self {
        match (force, skip_existing) {
            (_, true) => Self::Skip,
            (true, false) => Self::Overwrite,
            (false, false) => Self::Conflict,
        }
    }
}

/// Immutable configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub schema_path: PathBuf,
    /// Directory the route tree is written under.
    pub output_path: PathBuf,
    pub base_url: String,
    /// Extra path segment after the base URL (`rest` for `/api/rest`).
    pub api_prefix: Option<String>,
    pub prisma_import: String,
    /// Only these models, when set.
    pub include: Option<Vec<String>>,
    /// Never these models, applied after `include`.
    pub exclude: Option<Vec<String>>,
    pub existing: ExistingFiles,
    pub dry_run: bool,
}

impl GeneratorConfig {
    pub fn new(schema_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_path: output_path.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: None,
            prisma_import: DEFAULT_PRISMA_IMPORT.to_string(),
            include: None,
            exclude: None,
            existing: ExistingFiles::default(),
            dry_run: false,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_prefix(mut self, prefix: Option<String>) -> Self {
        self.api_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    pub fn prisma_import(mut self, import: impl Into<String>) -> Self {
        self.prisma_import = import.into();
        self
    }

    pub fn include(mut self, models: Option<Vec<String>>) -> Self {
        self.include = models;
        self
    }

    pub fn exclude(mut self, models: Option<Vec<String>>) -> Self {
        self.exclude = models;
        self
    }

    pub fn existing(mut self, policy: ExistingFiles) -> Self {
        self.existing = policy;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// URL prefix of every generated route: the base URL without a trailing
    /// slash, then the API prefix if any.
    pub fn route_base(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match &self.api_prefix {
            Some(prefix) => format!("{base}/{}", prefix.trim_matches('/')),
            None => base.to_string(),
        }
    }

    /// Whether a model passes the include and exclude lists.
    pub fn selects(&self, model: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .is_none_or(|names| names.iter().any(|n| n == model));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == model));
        included && !excluded
    }
}

/// Default output root for a project: `src/app/api` when the project has
/// a `src` directory, `app/api` otherwise, with the API prefix appended.
pub fn default_output_path(project_root: &Path, api_prefix: Option<&str>) -> PathBuf {
    let app = if project_root.join("src").is_dir() {
        project_root.join("src").join("app")
    } else {
        project_root.join("app")
    };
    let api = app.join("api");
    match api_prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => api.join(prefix.trim_matches('/')),
        None => api,
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config() -> GeneratorConfig {
        GeneratorConfig::new("prisma/schema.prisma", "app/api")
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.base_url, "/api");
        assert_eq!(config.prisma_import, "@/lib/prisma");
        assert_eq!(config.existing, ExistingFiles::Conflict);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_existing_policy_from_flags() {
        assert_eq!(ExistingFiles::from_flags(false, false), ExistingFiles::Conflict);
        assert_eq!(ExistingFiles::from_flags(true, false), ExistingFiles::Overwrite);
        assert_eq!(ExistingFiles::from_flags(false, true), ExistingFiles::Skip);
        assert_eq!(ExistingFiles::from_flags(true, true), ExistingFiles::Skip);
    }

    #[test]
    fn test_route_base() {
        assert_eq!(config().route_base(), "/api");
        assert_eq!(config().base_url("/api/").route_base(), "/api");
        assert_eq!(
            config().api_prefix(Some("rest".into())).route_base(),
            "/api/rest"
        );
        assert_eq!(
            config().base_url("/v2").api_prefix(Some("".into())).route_base(),
            "/v2"
        );
    }

    #[test]
    fn test_include_then_exclude() {
        let both = config()
            .include(Some(vec!["User".into()]))
            .exclude(Some(vec!["User".into()]));
        assert!(!both.selects("User"));
        assert!(!both.selects("Post"));

        let exclude_only = config().exclude(Some(vec!["Post".into()]));
        assert!(exclude_only.selects("User"));
        assert!(!exclude_only.selects("Post"));

        assert!(config().selects("Anything"));
    }

    #[test]
    fn test_default_output_path() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        assert_eq!(default_output_path(root, None), root.join("app").join("api"));
        assert_eq!(
            default_output_path(root, Some("rest")),
            root.join("app").join("api").join("rest")
        );

        std::fs::create_dir(root.join("src")).unwrap();
        assert_eq!(
            default_output_path(root, None),
            root.join("src").join("app").join("api")
        );
    }
}
