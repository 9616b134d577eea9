//! Builds a [`Site`] from command-line options and the configuration file.

use std::path::{Path, PathBuf};

use crate::config::{self, SiteConfig};
use crate::content::ContentSet;
use crate::error::GitinbitError;
use crate::site::Site;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage, default_storage_path};
use crate::throttle::Clock;
use crate::viewport::FixedViewport;

/// Where the CLI reads content from and keeps preferences.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    pub content: Option<PathBuf>,
    pub storage: Option<PathBuf>,
    pub ephemeral: bool,
}

fn config_dir() -> Option<&'static Path> { config::get_config_path().and_then(|path| path.parent()) }

impl SiteOptions {
    /// Content file from `--content`, else `contentPath` from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` when neither is set.
    pub fn content_path(&self, config: &SiteConfig) -> Result<PathBuf, GitinbitError> {
        self.content
            .clone()
            .or_else(|| config_dir().map_or_else(|| config.content_path(), |dir| config.content_path_in(dir)))
            .ok_or_else(|| {
                GitinbitError::InvalidArguments(
                    "No content file given. Pass --content or set \"contentPath\" in the configuration."
                        .to_string(),
                )
            })
    }

    /// Storage file from `--storage`, else `ui.storagePath`, else the data directory.
    #[must_use]
    pub fn storage_path(&self, config: &SiteConfig) -> PathBuf {
        self.storage
            .clone()
            .or_else(|| {
                config_dir().map_or_else(|| config.ui.storage_path(), |dir| config.ui.storage_path_in(dir))
            })
            .unwrap_or_else(default_storage_path)
    }

    /// Opens the preference storage for this run.
    #[must_use]
    pub fn open_storage(&self, config: &SiteConfig) -> Box<dyn KeyValueStorage> {
        if self.ephemeral {
            return Box::new(MemoryStorage::new());
        }
        let path = self.storage_path(config);
        tracing::debug!(path = %path.display(), "using file storage");
        Box::new(FileStorage::new(path))
    }

    /// Loads content and builds a site for a viewport of `width` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if no content file is configured or it cannot be loaded.
    pub fn load_site<C: Clock>(&self, clock: C, width: u32) -> Result<Site<C>, GitinbitError> {
        let config = config::get_config().clone();
        let content_path = self.content_path(&config)?;
        let content = ContentSet::load(&content_path)?;
        tracing::debug!(
            path = %content_path.display(),
            records = content.records().len(),
            "loaded content"
        );

        let storage = self.open_storage(&config);
        Ok(Site::new(config, content, storage, clock, &FixedViewport::new(width)))
    }
}
