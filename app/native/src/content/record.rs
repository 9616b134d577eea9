//! Content record types.
//!
//! Records arrive pre-rendered: the body is HTML (or compiled MDX) and the
//! cover is an opaque reference to an already-processed image. Every record
//! kind shares a [`RecordBase`]; the kind-specific fields live alongside it.

use serde::{Deserialize, Serialize};

use super::ContentError;

/// Fields shared by every content record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordBase {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_ref: Option<String>,
}

/// How a post body was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyFormat {
    /// Markdown rendered to HTML.
    #[default]
    Html,
    /// MDX compiled to a component body.
    Mdx,
}

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    /// Ordering prefix taken from the source file name (usually a date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default)]
    pub format: BodyFormat,
}

/// A static page such as "About" or "Contact".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    /// Numeric prefixes mark pages that belong in the menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Shorter title used in menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_title: Option<String>,
}

impl PageRecord {
    /// Title to show in menus, falling back to the page title.
    #[must_use]
    pub fn menu_label(&self) -> &str { self.menu_title.as_deref().unwrap_or(&self.base.title) }
}

/// A reusable fragment such as the author blurb or the footnote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    #[serde(flatten)]
    pub base: RecordBase,
}

/// Record kind, used in validation errors and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Post,
    Page,
    Part,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Part => "part",
        })
    }
}

/// A loaded unit of site content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentRecord {
    Post(PostRecord),
    Page(PageRecord),
    Part(PartRecord),
}

impl ContentRecord {
    #[must_use]
    pub const fn base(&self) -> &RecordBase {
        match self {
            Self::Post(post) => &post.base,
            Self::Page(page) => &page.base,
            Self::Part(part) => &part.base,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Post(_) => ContentKind::Post,
            Self::Page(_) => ContentKind::Page,
            Self::Part(_) => ContentKind::Part,
        }
    }

    #[must_use]
    pub fn slug(&self) -> &str { &self.base().slug }

    #[must_use]
    pub fn title(&self) -> &str { &self.base().title }

    #[must_use]
    pub const fn as_post(&self) -> Option<&PostRecord> {
        match self {
            Self::Post(post) => Some(post),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_page(&self) -> Option<&PageRecord> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_part(&self) -> Option<&PartRecord> {
        match self {
            Self::Part(part) => Some(part),
            _ => None,
        }
    }

    /// Checks the fields every record of this kind must carry.
    ///
    /// # Errors
    ///
    /// See [`RecordBase::validate`].
    pub fn validate(&self, section: &'static str, index: usize) -> Result<(), ContentError> {
        self.base().validate(self.kind(), section, index)
    }
}

impl RecordBase {
    /// Checks the fields a record of `kind` must carry.
    ///
    /// Posts and pages need a slug and a title; parts only need a title.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidRecord` naming the first missing field,
    /// located by the file `section` and `index` the record was read from.
    pub fn validate(
        &self,
        kind: ContentKind,
        section: &'static str,
        index: usize,
    ) -> Result<(), ContentError> {
        let missing = |field: &'static str| ContentError::InvalidRecord { kind, section, index, field };

        if self.title.trim().is_empty() {
            return Err(missing("title"));
        }
        if kind != ContentKind::Part && self.slug.trim().is_empty() {
            return Err(missing("slug"));
        }
        Ok(())
    }
}
