//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// gitinbit Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Site Metadata
  // ============================================================================
  // "siteTitle": "Denny Scott - GitInBit",
  // "shortSiteTitle": "Denny Scott - Git In Bit",
  // "siteDescription": "Denny Scotts personal blog site.",
  // "siteUrl": "https://dennyscott.io",
  // "pathPrefix": "",
  // "siteImage": "preview.jpg",
  // "siteLanguage": "en",

  // ============================================================================
  // Author
  // ============================================================================
  // "authorName": "denny scott",
  // "authorTwitterAccount": "gitinbit",
  // "contactEmail": "",
  // "authorSocialLinks": [
  //   { "name": "github", "url": "https://github.com/dennyscott" },
  //   { "name": "twitter", "url": "https://twitter.com/gitinbit" }
  // ],

  // ============================================================================
  // Info Panel
  // ============================================================================
  // "infoTitle": "denny scott",
  // "infoTitleNote": "personal blog",

  // ============================================================================
  // Content
  // ============================================================================
  // Path to the content JSON produced by the site build (supports ~)
  // "contentPath": "",

  // ============================================================================
  // UI Behaviour
  // ============================================================================
  // "ui": {
  //   // Minimum viewport width in pixels treated as a wide screen
  //   "wideScreenBreakpoint": 1024,
  //
  //   // Milliseconds to wait after the last resize before re-classifying
  //   "resizeDebounceMs": 500,
  //
  //   // File used to persist the font scale (empty = platform data directory)
  //   "storagePath": ""
  // }
}
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
