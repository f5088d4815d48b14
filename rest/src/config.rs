//! Project configuration file (`prisma-rest.toml`).
//!
//! Every key is optional. Command-line flags override file values, which
//! override the built-in defaults.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use prisma_rest_codegen::{
    DEFAULT_BASE_URL, DEFAULT_PRISMA_IMPORT, DEFAULT_SCHEMA_PATH, ExistingFiles, GeneratorConfig,
    default_output_path,
};
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "prisma-rest.toml";

/// Generation settings from a config file or command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub api_prefix: Option<String>,
    pub prisma_import: Option<String>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).wrap_err("invalid configuration")
    }

    /// Read settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("in '{}'", path.display()))
    }

    /// Settings from an explicit path, or from [`CONFIG_FILE`] under
    /// `project_root` when present.
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => {
                bail!("configuration file '{}' not found", path.display())
            }
            Some(path) => Self::load(path),
            None => {
                let default = project_root.join(CONFIG_FILE);
                if default.is_file() {
                    tracing::debug!(path = %default.display(), "loading configuration");
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Values from `self`, falling back to `base` for unset keys.
    pub fn or(self, base: Settings) -> Settings {
        Settings {
            schema: self.schema.or(base.schema),
            output: self.output.or(base.output),
            base_url: self.base_url.or(base.base_url),
            api_prefix: self.api_prefix.or(base.api_prefix),
            prisma_import: self.prisma_import.or(base.prisma_import),
            include: self.include.or(base.include),
            exclude: self.exclude.or(base.exclude),
        }
    }

    /// Fill in defaults and build the run configuration.
    pub fn into_generator_config(
        self,
        project_root: &Path,
        existing: ExistingFiles,
        dry_run: bool,
    ) -> GeneratorConfig {
        let api_prefix = self.api_prefix.filter(|p| !p.is_empty());
        let schema = self
            .schema
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));
        let output = self
            .output
            .unwrap_or_else(|| default_output_path(project_root, api_prefix.as_deref()));

        GeneratorConfig::new(schema, output)
            .base_url(self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .api_prefix(api_prefix)
            .prisma_import(
                self.prisma_import
                    .unwrap_or_else(|| DEFAULT_PRISMA_IMPORT.to_string()),
            )
            .include(self.include)
            .exclude(self.exclude)
            .existing(existing)
            .dry_run(dry_run)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_all_keys() {
        let settings = Settings::parse(
            r#"
            schema = "db/schema.prisma"
            output = "src/app/api/v1"
            base_url = "/api/v1"
            api_prefix = "rest"
            prisma_import = "~/server/db"
            include = ["User", "Post"]
            exclude = ["Post"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.schema, Some(PathBuf::from("db/schema.prisma")));
        assert_eq!(settings.prisma_import.as_deref(), Some("~/server/db"));
        assert_eq!(settings.include, Some(vec!["User".into(), "Post".into()]));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Settings::parse("schema_path = \"x\"").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = Settings {
            base_url: Some("/from-file".into()),
            prisma_import: Some("@/file".into()),
            ..Default::default()
        };
        let flags = Settings {
            base_url: Some("/from-flag".into()),
            ..Default::default()
        };

        let merged = flags.or(file);
        assert_eq!(merged.base_url.as_deref(), Some("/from-flag"));
        assert_eq!(merged.prisma_import.as_deref(), Some("@/file"));
    }

    #[test]
    fn test_defaults_fill_unset_keys() {
        let temp = TempDir::new().unwrap();
        let config =
            Settings::default().into_generator_config(temp.path(), ExistingFiles::Conflict, false);

        assert_eq!(config.schema_path, PathBuf::from("./prisma/schema.prisma"));
        assert_eq!(config.output_path, temp.path().join("app").join("api"));
        assert_eq!(config.base_url, "/api");
        assert_eq!(config.prisma_import, "@/lib/prisma");
        assert_eq!(config.route_base(), "/api");
    }

    #[test]
    fn test_api_prefix_reaches_output_and_routes() {
        let temp = TempDir::new().unwrap();
        let config = Settings {
            api_prefix: Some("rest".into()),
            ..Default::default()
        }
        .into_generator_config(temp.path(), ExistingFiles::Skip, true);

        assert_eq!(
            config.output_path,
            temp.path().join("app").join("api").join("rest")
        );
        assert_eq!(config.route_base(), "/api/rest");
        assert_eq!(config.existing, ExistingFiles::Skip);
        assert!(config.dry_run);
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            Settings::discover(None, temp.path()).unwrap(),
            Settings::default()
        );

        std::fs::write(temp.path().join(CONFIG_FILE), "base_url = \"/v2\"").unwrap();
        let found = Settings::discover(None, temp.path()).unwrap();
        assert_eq!(found.base_url.as_deref(), Some("/v2"));

        let missing = temp.path().join("other.toml");
        assert!(Settings::discover(Some(&missing), temp.path()).is_err());
    }
}
