//! Configuration types for gitinbit.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::APP_ID;
use crate::constants::timing::RESIZE_DEBOUNCE_MS;
use crate::constants::viewport::WIDE_SCREEN_BREAKPOINT;
use crate::platform::path::{expand, expand_and_resolve};

/// A link to one of the author's social profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    /// Network name, e.g. "github".
    pub name: String,
    /// Profile URL.
    pub url: String,
}

/// Runtime behaviour of the UI core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Minimum viewport width in pixels that counts as a wide screen.
    /// Default: 1024
    pub wide_screen_breakpoint: u32,

    /// Quiet period in milliseconds after the last resize before the viewport
    /// is re-classified.
    /// Default: 500
    pub resize_debounce_ms: u64,

    /// Path of the file used to persist the font scale.
    /// Supports `~` expansion. Empty uses the platform data directory.
    pub storage_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            wide_screen_breakpoint: WIDE_SCREEN_BREAKPOINT,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            storage_path: String::new(),
        }
    }
}

impl UiConfig {
    /// Returns the expanded storage path, if one is configured.
    #[must_use]
    pub fn storage_path(&self) -> Option<PathBuf> {
        Some(expand(&self.storage_path)).filter(|path| !path.as_os_str().is_empty())
    }

    /// Storage path resolved against the configuration file's directory.
    #[must_use]
    pub fn storage_path_in(&self, config_dir: &Path) -> Option<PathBuf> {
        Some(expand_and_resolve(&self.storage_path, config_dir))
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Root configuration for gitinbit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Full site title, used in `<title>` on the index.
    pub site_title: String,
    /// Title appended to post and page titles.
    pub short_site_title: String,
    /// Meta description used when a record has no sub-title.
    pub site_description: String,
    /// Canonical site URL without trailing slash.
    pub site_url: String,
    /// Path prefix the site is served under.
    pub path_prefix: String,
    /// Default social preview image, relative to the site URL.
    pub site_image: String,
    /// Content language code.
    pub site_language: String,

    /// Author display name.
    pub author_name: String,
    /// Twitter handle without the `@`.
    pub author_twitter_account: String,
    /// Author's social profiles.
    pub author_social_links: Vec<SocialLink>,
    /// Contact e-mail address.
    pub contact_email: String,

    /// Heading of the info box and info bar.
    pub info_title: String,
    /// Sub-heading of the info box.
    pub info_title_note: String,

    /// Path of the content JSON file. Supports `~` expansion.
    pub content_path: String,

    /// UI core behaviour.
    pub ui: UiConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Denny Scott - GitInBit".to_string(),
            short_site_title: "Denny Scott - Git In Bit".to_string(),
            site_description: "Denny Scotts personal blog site.".to_string(),
            site_url: "https://dennyscott.io".to_string(),
            path_prefix: String::new(),
            site_image: "preview.jpg".to_string(),
            site_language: "en".to_string(),
            author_name: "denny scott".to_string(),
            author_twitter_account: "gitinbit".to_string(),
            author_social_links: vec![
                SocialLink {
                    name: "github".to_string(),
                    url: "https://github.com/dennyscott".to_string(),
                },
                SocialLink {
                    name: "twitter".to_string(),
                    url: "https://twitter.com/gitinbit".to_string(),
                },
            ],
            contact_email: String::new(),
            info_title: "denny scott".to_string(),
            info_title_note: "personal blog".to_string(),
            content_path: String::new(),
            ui: UiConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Returns the expanded content path, if one is configured.
    #[must_use]
    pub fn content_path(&self) -> Option<PathBuf> {
        Some(expand(&self.content_path)).filter(|path| !path.as_os_str().is_empty())
    }

    /// Content path resolved against the configuration file's directory.
    #[must_use]
    pub fn content_path_in(&self, config_dir: &Path) -> Option<PathBuf> {
        Some(expand_and_resolve(&self.content_path, config_dir))
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/gitinbit/config.jsonc, \
                the platform config directory, or ~/.gitinbit.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Home-directory configuration file names.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".gitinbit.jsonc", ".gitinbit.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/gitinbit/` if set
/// 2. `~/.config/gitinbit/`
/// 3. The platform config directory (`~/Library/Application Support/gitinbit/` on macOS)
/// 4. `~/.gitinbit.jsonc` or `~/.gitinbit.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let push_dir = |dir: PathBuf, paths: &mut Vec<PathBuf>| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        push_dir(PathBuf::from(xdg_config).join(APP_ID), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_ID), &mut paths);
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_ID), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, and
/// `ConfigError::ParseError` if it is not valid JSONC.
pub fn load_config_from_path(path: &Path) -> Result<(SiteConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: SiteConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or any error from [`load_config_from_path`] for
/// the first file that exists.
pub fn load_config() -> Result<(SiteConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_site() {
        let config = SiteConfig::default();
        assert_eq!(config.site_url, "https://dennyscott.io");
        assert_eq!(config.ui.wide_screen_breakpoint, 1024);
        assert_eq!(config.ui.resize_debounce_ms, 500);
        assert!(config.content_path().is_none());
        assert!(config.ui.storage_path().is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "siteTitle": "My blog", "ui": { "wideScreenBreakpoint": 900 } }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.site_title, "My blog");
        assert_eq!(config.ui.wide_screen_breakpoint, 900);
        assert_eq!(config.ui.resize_debounce_ms, 500);
        assert_eq!(config.info_title, "denny scott");
    }

    #[test]
    fn test_load_config_from_path_strips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // line comment
                "infoTitle": "someone", /* block */
                "contentPath": "/srv/content.json"
            }"#,
        )
        .unwrap();

        let (config, loaded_from) = load_config_from_path(&path).unwrap();
        assert_eq!(config.info_title, "someone");
        assert_eq!(config.content_path(), Some(PathBuf::from("/srv/content.json")));
        assert_eq!(loaded_from, path);
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let config = SiteConfig {
            content_path: "content.json".to_string(),
            ui: UiConfig { storage_path: "state/store.json".to_string(), ..Default::default() },
            ..Default::default()
        };
        let dir = Path::new("/etc/gitinbit");
        assert_eq!(config.content_path_in(dir), Some(dir.join("content.json")));
        assert_eq!(config.ui.storage_path_in(dir), Some(dir.join("state/store.json")));
        assert_eq!(SiteConfig::default().content_path_in(dir), None);
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from_path(&dir.path().join("missing.jsonc"));
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config_from_path(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_paths_are_not_empty() {
        let paths = config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains(APP_ID)));
    }

    #[test]
    fn test_config_error_display() {
        assert!(ConfigError::NotFound.to_string().contains("No configuration file found"));
    }
}
