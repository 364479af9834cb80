use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SipaError};
use crate::render::UnresolvedPolicy;

/// User-level configuration loaded from `~/.config/sipa/config.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    /// Replaces the project template shipped with sipa.
    pub template_dir: Option<PathBuf>,

    /// What happens to `{{ name }}` markers that have no binding.
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,

    #[serde(default)]
    pub defaults: PromptDefaults,
}

/// Values offered when the user submits an empty answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PromptDefaults {
    pub version: String,
    pub author: String,
    pub email: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            version: "0.0.1".to_string(),
            author: String::new(),
            email: String::new(),
        }
    }
}

/// Get the path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sipa").join("config.toml"))
}

/// Load user configuration from the XDG config directory.
///
/// Returns the defaults if there is no config directory or no config file.
pub fn load_user_config() -> Result<UserConfig> {
    match config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load user configuration from an explicit path, falling back to defaults if it is absent.
pub fn load_config_file(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no user config, using defaults");
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| SipaError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| SipaError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_user_config() {
        let toml_str = r#"
template_dir = "/opt/templates/web"
unresolved = "remove"

[defaults]
version = "1.0.0"
author = "Ann"
email = "ann@example.com"
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.template_dir.as_deref(),
            Some(Path::new("/opt/templates/web"))
        );
        assert_eq!(config.unresolved, UnresolvedPolicy::Remove);
        assert_eq!(config.defaults.version, "1.0.0");
        assert_eq!(config.defaults.author, "Ann");
        assert_eq!(config.defaults.email, "ann@example.com");
    }

    #[test]
    fn parse_empty_config() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.unresolved, UnresolvedPolicy::Keep);
        assert_eq!(config.defaults.version, "0.0.1");
        assert!(config.defaults.author.is_empty());
    }

    #[test]
    fn parse_partial_defaults_table() {
        let config: UserConfig = toml::from_str("[defaults]\nauthor = \"Bo\"").unwrap();
        assert_eq!(config.defaults.version, "0.0.1");
        assert_eq!(config.defaults.author, "Bo");
    }

    #[test]
    fn parse_unknown_policy_errors() {
        let result: std::result::Result<UserConfig, _> = toml::from_str("unresolved = \"explode\"");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid [[ toml").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result, Err(SipaError::ConfigParse { .. })));
    }
}
