//! Read-only site content.
//!
//! Content is produced by the static build and handed to the UI as JSON:
//!
//! ```json
//! {
//!   "posts":    [{ "slug": "/hello/", "title": "Hello", "category": "tech", ... }],
//!   "mdxPosts": [{ "slug": "/live/",  "title": "Live code", ... }],
//!   "pages":    [{ "slug": "/about/", "title": "About", "prefix": "1", ... }],
//!   "parts":    [{ "title": "author", "body": "<p>...</p>" }]
//! }
//! ```
//!
//! Records are validated once, at load time. After that a [`ContentSet`] is
//! immutable apart from replacing the post collection wholesale.

mod collection;
mod record;

use std::path::PathBuf;

use thiserror::Error;

pub use collection::{ContentFile, ContentSet, derive_categories};
pub use record::{
    BodyFormat, ContentKind, ContentRecord, PageRecord, PartRecord, PostRecord, RecordBase,
};

/// Errors raised while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The content file is not valid JSON of the expected shape.
    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record is missing a required field. `index` is the record's position
    /// within `section` of the content file.
    #[error("Invalid {kind} at {section}[{index}]: missing {field}")]
    InvalidRecord {
        kind: ContentKind,
        section: &'static str,
        index: usize,
        field: &'static str,
    },
}
