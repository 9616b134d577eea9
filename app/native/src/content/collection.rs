//! The loaded content collection and its queries.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ContentError;
use super::record::{
    BodyFormat, ContentKind, ContentRecord, PageRecord, PartRecord, PostRecord, RecordBase,
};

/// Pages whose prefix is purely numeric (ASCII digits) are listed in the menu.
static MENU_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]+$").ok());

/// On-disk shape of the content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentFile {
    pub posts: Vec<PostRecord>,
    pub mdx_posts: Vec<PostRecord>,
    pub pages: Vec<PageRecord>,
    pub parts: Vec<PartRecord>,
}

/// Validated, ordered site content.
///
/// Posts are held in listing order: MDX posts newest-first (they are loaded
/// oldest-first), followed by markdown posts sorted by descending prefix.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    records: Vec<ContentRecord>,
    categories: Vec<String>,
}

impl ContentSet {
    /// Builds a set from the sections of a content file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidRecord` for the first record missing a
    /// required field.
    pub fn new(file: ContentFile) -> Result<Self, ContentError> {
        let ContentFile { posts, mdx_posts, pages, parts } = file;

        validate_section(ContentKind::Post, "posts", posts.iter().map(|r| &r.base))?;
        validate_section(ContentKind::Post, "mdxPosts", mdx_posts.iter().map(|r| &r.base))?;
        validate_section(ContentKind::Page, "pages", pages.iter().map(|r| &r.base))?;
        validate_section(ContentKind::Part, "parts", parts.iter().map(|r| &r.base))?;

        let records: Vec<ContentRecord> = order_posts(posts, mdx_posts)
            .into_iter()
            .map(ContentRecord::Post)
            .chain(pages.into_iter().map(ContentRecord::Page))
            .chain(parts.into_iter().map(ContentRecord::Part))
            .collect();

        let categories = derive_categories(records.iter().filter_map(ContentRecord::as_post));
        tracing::debug!(
            records = records.len(),
            categories = categories.len(),
            "content loaded"
        );

        Ok(Self { records, categories })
    }

    /// Parses and validates a content JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed JSON, or any error from
    /// [`Self::new`].
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Loads content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read, or any error
    /// from [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Every record, posts first.
    #[must_use]
    pub fn records(&self) -> &[ContentRecord] { &self.records }

    pub fn posts(&self) -> impl Iterator<Item = &PostRecord> {
        self.records.iter().filter_map(ContentRecord::as_post)
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageRecord> {
        self.records.iter().filter_map(ContentRecord::as_page)
    }

    pub fn parts(&self) -> impl Iterator<Item = &PartRecord> {
        self.records.iter().filter_map(ContentRecord::as_part)
    }

    /// Unique post categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[String] { &self.categories }

    /// Finds the post or page published at `slug`.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&ContentRecord> {
        self.records
            .iter()
            .find(|record| record.as_part().is_none() && record.slug() == slug)
    }

    #[must_use]
    pub fn post_by_slug(&self, slug: &str) -> Option<&PostRecord> {
        self.posts().find(|post| post.base.slug == slug)
    }

    #[must_use]
    pub fn page_by_slug(&self, slug: &str) -> Option<&PageRecord> {
        self.pages().find(|page| page.base.slug == slug)
    }

    /// Posts in `category`, in listing order.
    pub fn posts_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a PostRecord> + 'a {
        self.posts().filter(move |post| post.base.category.as_deref() == Some(category))
    }

    /// Pages with a numeric prefix, in ascending natural prefix order.
    #[must_use]
    pub fn menu_pages(&self) -> Vec<&PageRecord> {
        let mut pages: Vec<&PageRecord> = self
            .pages()
            .filter(|page| page.prefix.as_deref().is_some_and(is_menu_prefix))
            .collect();
        pages.sort_by(|a, b| compare_prefix(a.prefix.as_deref(), b.prefix.as_deref()));
        pages
    }

    /// Finds a part by title (e.g. `"author"` or `"footnote"`).
    #[must_use]
    pub fn part(&self, title: &str) -> Option<&PartRecord> {
        self.parts().find(|part| part.base.title == title)
    }
}

/// Folds posts into their unique categories, keeping first-seen order.
pub fn derive_categories<'a>(posts: impl IntoIterator<Item = &'a PostRecord>) -> Vec<String> {
    posts.into_iter().fold(Vec::new(), |mut list, post| {
        if let Some(category) = post.base.category.as_deref()
            && !category.is_empty()
            && !list.iter().any(|seen| seen == category)
        {
            list.push(category.to_string());
        }
        list
    })
}

/// Puts posts in listing order: MDX posts newest-first (they are loaded
/// oldest-first), then markdown posts by descending prefix with unprefixed
/// posts last. MDX posts are tagged with their body format.
fn order_posts(mut posts: Vec<PostRecord>, mdx_posts: Vec<PostRecord>) -> Vec<PostRecord> {
    posts.sort_by(|a, b| match (a.prefix.as_deref(), b.prefix.as_deref()) {
        (Some(a), Some(b)) => natord::compare(b, a),
        (a, b) => compare_prefix(a, b),
    });

    mdx_posts
        .into_iter()
        .rev()
        .map(|mut post| {
            post.format = BodyFormat::Mdx;
            post
        })
        .chain(posts)
        .collect()
}

/// Validates one section of the content file, indexing records in file order.
fn validate_section<'a>(
    kind: ContentKind,
    section: &'static str,
    records: impl Iterator<Item = &'a RecordBase>,
) -> Result<(), ContentError> {
    records.enumerate().try_for_each(|(index, base)| base.validate(kind, section, index))
}

fn is_menu_prefix(prefix: &str) -> bool {
    MENU_PREFIX.as_ref().is_some_and(|re| re.is_match(prefix))
}

/// Natural ordering of optional prefixes; records without one sort last.
fn compare_prefix(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => natord::compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, category: Option<&str>, prefix: Option<&str>) -> PostRecord {
        PostRecord {
            base: RecordBase {
                slug: slug.to_string(),
                title: slug.trim_matches('/').to_string(),
                category: category.map(str::to_string),
                ..Default::default()
            },
            prefix: prefix.map(str::to_string),
            format: BodyFormat::Html,
        }
    }

    fn page(slug: &str, prefix: Option<&str>) -> PageRecord {
        PageRecord {
            base: RecordBase {
                slug: slug.to_string(),
                title: slug.trim_matches('/').to_string(),
                ..Default::default()
            },
            prefix: prefix.map(str::to_string),
            menu_title: None,
        }
    }

    #[test]
    fn test_categories_deduplicated_in_first_seen_order() {
        let posts = [
            post("/a/", Some("tech"), None),
            post("/b/", Some("life"), None),
            post("/c/", Some("tech"), None),
            post("/d/", Some("travel"), None),
        ];
        assert_eq!(derive_categories(&posts), vec!["tech", "life", "travel"]);
    }

    #[test]
    fn test_categories_skip_missing() {
        let posts = [post("/a/", None, None), post("/b/", Some(""), None), post("/c/", Some("x"), None)];
        assert_eq!(derive_categories(&posts), vec!["x"]);
    }

    #[test]
    fn test_post_listing_order() {
        let file = ContentFile {
            posts: vec![
                post("/old/", None, Some("2018-01-01")),
                post("/new/", None, Some("2019-06-01")),
            ],
            mdx_posts: vec![post("/mdx-1/", None, None), post("/mdx-2/", None, None)],
            ..Default::default()
        };
        let content = ContentSet::new(file).unwrap();
        let slugs: Vec<&str> = content.posts().map(|p| p.base.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/mdx-2/", "/mdx-1/", "/new/", "/old/"]);
        assert_eq!(content.post_by_slug("/mdx-1/").unwrap().format, BodyFormat::Mdx);
        assert_eq!(content.post_by_slug("/old/").unwrap().format, BodyFormat::Html);
    }

    #[test]
    fn test_unprefixed_posts_list_last() {
        let file = ContentFile {
            posts: vec![
                post("/loose/", None, None),
                post("/p9/", None, Some("9")),
                post("/p10/", None, Some("10")),
            ],
            ..Default::default()
        };
        let content = ContentSet::new(file).unwrap();
        let slugs: Vec<&str> = content.posts().map(|p| p.base.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/p10/", "/p9/", "/loose/"]);
    }

    #[test]
    fn test_menu_pages_filtered_and_naturally_sorted() {
        let file = ContentFile {
            pages: vec![
                page("/contact/", Some("10")),
                page("/about/", Some("2")),
                page("/draft/", Some("draft")),
                page("/hidden/", None),
            ],
            ..Default::default()
        };
        let content = ContentSet::new(file).unwrap();
        let slugs: Vec<&str> = content.menu_pages().iter().map(|p| p.base.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/about/", "/contact/"]);
        assert_eq!(content.pages().count(), 4);
    }

    #[test]
    fn test_queries() {
        let file = ContentFile {
            posts: vec![post("/a/", Some("tech"), Some("2")), post("/b/", Some("life"), Some("1"))],
            pages: vec![page("/about/", Some("1"))],
            parts: vec![PartRecord {
                base: RecordBase { title: "author".to_string(), ..Default::default() },
            }],
            ..Default::default()
        };
        let content = ContentSet::new(file).unwrap();

        assert_eq!(content.find("/about/").map(ContentRecord::kind), Some(ContentKind::Page));
        assert_eq!(content.find("/a/").map(ContentRecord::kind), Some(ContentKind::Post));
        assert!(content.find("/missing/").is_none());
        assert!(content.page_by_slug("/about/").is_some());
        assert_eq!(content.posts_in_category("life").count(), 1);
        assert!(content.part("author").is_some());
        assert!(content.part("footnote").is_none());
    }

    #[test]
    fn test_invalid_record_rejects_load() {
        let json = r#"{ "posts": [{ "slug": "/ok/", "title": "Ok" }, { "title": "No slug" }] }"#;
        let err = ContentSet::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidRecord { kind: ContentKind::Post, section: "posts", index: 1, field: "slug" }
        ));
    }

    #[test]
    fn test_invalid_record_index_is_file_position() {
        let json = r#"{
            "posts": [{ "slug": "/ok/", "title": "Ok" }],
            "pages": [{ "title": "No slug" }]
        }"#;
        let err = ContentSet::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidRecord { kind: ContentKind::Page, section: "pages", index: 0, field: "slug" }
        ));
    }

    #[test]
    fn test_invalid_post_index_ignores_listing_order() {
        // Listing order would put the invalid post first.
        let json = r#"{
            "posts": [
                { "slug": "/old/", "title": "Old", "prefix": "1" },
                { "title": "No slug", "prefix": "9" }
            ],
            "mdxPosts": [{ "slug": "/mdx/", "title": "Mdx" }]
        }"#;
        let err = ContentSet::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidRecord { section: "posts", index: 1, field: "slug", .. }
        ));
    }

    #[test]
    fn test_order_posts_tags_and_orders() {
        let ordered = order_posts(
            vec![post("/a/", None, Some("1")), post("/b/", None, None), post("/c/", None, Some("3"))],
            vec![post("/m1/", None, None), post("/m2/", None, None)],
        );
        let slugs: Vec<&str> = ordered.iter().map(|p| p.base.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/m2/", "/m1/", "/c/", "/a/", "/b/"]);
        assert!(ordered[..2].iter().all(|p| p.format == BodyFormat::Mdx));
        assert!(ordered[2..].iter().all(|p| p.format == BodyFormat::Html));
    }

    #[test]
    fn test_menu_prefix_is_ascii_only() {
        assert!(is_menu_prefix("12"));
        assert!(!is_menu_prefix("١٢"));
        assert!(!is_menu_prefix("1a"));
        assert!(!is_menu_prefix(""));

        let content = ContentSet::new(ContentFile {
            pages: vec![page("/arabic/", Some("١٢")), page("/about/", Some("1"))],
            ..Default::default()
        })
        .unwrap();
        let slugs: Vec<&str> = content.menu_pages().iter().map(|p| p.base.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/about/"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ContentSet::load(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, r#"{ "posts": [{ "slug": "/a/", "title": "A", "category": "tech" }] }"#)
            .unwrap();
        let content = ContentSet::load(&path).unwrap();
        assert_eq!(content.categories(), ["tech"]);
    }
}
