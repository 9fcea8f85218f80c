// Rust guideline compliant 2026-10-17

//! Configuration management for the Jira progress reporter.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

const ENV_AUTH_TOKEN: &str = "JIRA_PROGRESS_AUTH_TOKEN";
const ENV_URL: &str = "JIRA_PROGRESS_URL";
const ENV_PROJECT: &str = "JIRA_PROGRESS_PROJECT";
const ENV_FILTER_ID: &str = "JIRA_PROGRESS_FILTER_ID";

/// On-disk layout: every setting lives under a single `[default]` table.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    default: Config,
}

/// Connection and board settings.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Credential sent in the `Authorization` header.
    #[serde(rename = "authentication-token", default)]
    pub authentication_token: String,

    /// Base URL of the tracker, e.g. `https://jira.example.com`.
    #[serde(rename = "jiraURL", default)]
    pub jira_url: String,

    /// Project key used by board reports.
    #[serde(rename = "issueKey", default)]
    pub issue_key: String,

    /// Saved filter id scoping board reports.
    #[serde(rename = "filterId", default)]
    pub filter_id: Option<u32>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("authentication_token", &"<redacted>")
            .field("jira_url", &self.jira_url)
            .field("issue_key", &self.issue_key)
            .field("filter_id", &self.filter_id)
            .finish()
    }
}

impl Config {
    /// Loads configuration from a TOML file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Empty defaults
    /// 2. The `[default]` table of the file at `path`, if it exists
    /// 3. Environment variables with `JIRA_PROGRESS_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - The token or base URL is empty after overrides
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`] with a custom environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let file: ConfigFile = toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Invalid config file {}: {}", path.display(), e))
            })?;
            config = file.default;
        }

        config.apply_env_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `JIRA_PROGRESS_AUTH_TOKEN` - Authentication token
    /// - `JIRA_PROGRESS_URL` - Tracker base URL
    /// - `JIRA_PROGRESS_PROJECT` - Project key for board reports
    /// - `JIRA_PROGRESS_FILTER_ID` - Saved filter id
    ///
    /// # Errors
    ///
    /// Returns an error if `JIRA_PROGRESS_FILTER_ID` is not a number.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(val) = lookup(ENV_AUTH_TOKEN) {
            self.authentication_token = val;
        }

        if let Some(val) = lookup(ENV_URL) {
            self.jira_url = val;
        }

        if let Some(val) = lookup(ENV_PROJECT) {
            self.issue_key = val;
        }

        if let Some(val) = lookup(ENV_FILTER_ID) {
            let id = val.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_FILTER_ID} must be a positive number"))
            })?;
            self.filter_id = Some(id);
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.authentication_token.trim().is_empty() {
            return Err(Error::Config(
                "authentication-token is required".to_string(),
            ));
        }

        if self.jira_url.trim().is_empty() {
            return Err(Error::Config("jiraURL is required".to_string()));
        }

        Ok(())
    }

    /// Returns the project key for board reports.
    ///
    /// # Errors
    ///
    /// Returns an error if `issueKey` is not configured.
    pub fn project_id(&self) -> Result<&str> {
        let project = self.issue_key.trim();
        if project.is_empty() {
            return Err(Error::Config(
                "issueKey is required for board reports".to_string(),
            ));
        }
        Ok(project)
    }

    fn base_url(&self) -> &str {
        self.jira_url.trim().trim_end_matches('/')
    }

    /// URL of a single issue resource.
    #[must_use]
    pub fn issue_url(&self, key: &str) -> String {
        format!("{}/rest/api/2/issue/{}", self.base_url(), key)
    }

    /// URL of the search resource.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/rest/api/2/search", self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
[default]
authentication-token = "secret"
jiraURL = "https://jira.example.com"
issueKey = "PROJ"
filterId = 7
"#,
        );

        let config = Config::load_with(&path, no_env).unwrap();
        assert_eq!(config.authentication_token, "secret");
        assert_eq!(config.jira_url, "https://jira.example.com");
        assert_eq!(config.issue_key, "PROJ");
        assert_eq!(config.filter_id, Some(7));
    }

    #[test]
    fn test_config_missing_file_uses_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        let env = env_from(&[
            ("JIRA_PROGRESS_AUTH_TOKEN", "tok"),
            ("JIRA_PROGRESS_URL", "https://jira.example.com/"),
        ]);

        let config = Config::load_with(&path, env).unwrap();
        assert_eq!(config.authentication_token, "tok");
        assert_eq!(config.filter_id, None);
        assert_eq!(
            config.issue_url("PROJ-1"),
            "https://jira.example.com/rest/api/2/issue/PROJ-1"
        );
    }

    #[test]
    fn test_config_missing_token_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[default]\njiraURL = \"https://jira\"\n");

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(err.to_string().contains("authentication-token"));
    }

    #[test]
    fn test_config_missing_url_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[default]\nauthentication-token = \"t\"\n");

        let err = Config::load_with(&path, no_env).unwrap_err();
        assert!(err.to_string().contains("jiraURL"));
    }

    #[test]
    fn test_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[default\n");

        assert!(matches!(
            Config::load_with(&path, no_env),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "[default]\nauthentication-token = \"t\"\njiraURL = \"https://a\"\nfilterId = 3\n",
        );
        let env = env_from(&[
            ("JIRA_PROGRESS_URL", "https://b"),
            ("JIRA_PROGRESS_FILTER_ID", "12"),
            ("JIRA_PROGRESS_PROJECT", "OPS"),
        ]);

        let config = Config::load_with(&path, env).unwrap();
        assert_eq!(config.jira_url, "https://b");
        assert_eq!(config.filter_id, Some(12));
        assert_eq!(config.project_id().unwrap(), "OPS");
    }

    #[test]
    fn test_config_env_invalid_filter_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "[default]\nauthentication-token = \"t\"\njiraURL = \"https://a\"\n",
        );
        let env = env_from(&[("JIRA_PROGRESS_FILTER_ID", "seven")]);

        assert!(Config::load_with(&path, env).is_err());
    }

    #[test]
    fn test_project_id_required_for_board() {
        let config = Config {
            authentication_token: "t".to_string(),
            jira_url: "https://a".to_string(),
            ..Config::default()
        };
        assert!(config.project_id().is_err());
    }

    #[test]
    fn test_search_url_trims_trailing_slash() {
        let config = Config {
            jira_url: "https://jira.example.com//".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.search_url(),
            "https://jira.example.com/rest/api/2/search"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config {
            authentication_token: "super-secret".to_string(),
            ..Config::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
