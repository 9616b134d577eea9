use serde::Serialize;

use super::code::CodeBlock;
use crate::content::{BodyFormat, PageRecord, PartRecord, PostRecord};

/// A rendered post or page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub header: ArticleHeader,
    pub body: ArticleBody,
    /// Highlighted and live code blocks mapped from the MDX body.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub code_blocks: Vec<CodeBlock>,
    pub footer: ArticleFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleHeader {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Article body, either pre-rendered HTML or a compiled MDX component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", content = "content", rename_all = "camelCase")]
pub enum ArticleBody {
    Html(String),
    Mdx(String),
}

impl ArticleBody {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Html(body) | Self::Mdx(body) => body,
        }
    }

    #[must_use]
    pub const fn is_mdx(&self) -> bool { matches!(self, Self::Mdx(_)) }
}

/// Footer shown below an article.
///
/// Posts carry the author blurb and their slug (for share links); pages only
/// show the site footnote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
}

fn part_body(part: Option<&PartRecord>) -> Option<String> {
    part.map(|part| part.base.body.clone()).filter(|body| !body.is_empty())
}

/// Renders a post with its author blurb and the site footnote.
#[must_use]
pub fn render_post(
    post: &PostRecord,
    author: Option<&PartRecord>,
    footnote: Option<&PartRecord>,
) -> Article {
    let (body, code_blocks) = match post.format {
        BodyFormat::Html => (ArticleBody::Html(post.base.body.clone()), Vec::new()),
        BodyFormat::Mdx => (
            ArticleBody::Mdx(post.base.body.clone()),
            CodeBlock::extract(&post.base.body),
        ),
    };

    Article {
        header: ArticleHeader {
            title: post.base.title.clone(),
            sub_title: post.base.sub_title.clone(),
            date: post.base.date.clone(),
        },
        body,
        code_blocks,
        footer: ArticleFooter {
            author: part_body(author),
            slug: Some(post.base.slug.clone()),
            footnote: part_body(footnote),
        },
    }
}

/// Renders a static page. Pages have no date and no author.
#[must_use]
pub fn render_page(page: &PageRecord, footnote: Option<&PartRecord>) -> Article {
    Article {
        header: ArticleHeader {
            title: page.base.title.clone(),
            sub_title: page.base.sub_title.clone(),
            date: None,
        },
        body: ArticleBody::Html(page.base.body.clone()),
        code_blocks: Vec::new(),
        footer: ArticleFooter {
            footnote: part_body(footnote),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RecordBase;

    fn part(title: &str, body: &str) -> PartRecord {
        PartRecord {
            base: RecordBase {
                title: title.to_string(),
                body: body.to_string(),
                ..Default::default()
            },
        }
    }

    fn post(format: BodyFormat) -> PostRecord {
        PostRecord {
            base: RecordBase {
                slug: "/hello/".to_string(),
                title: "Hello".to_string(),
                sub_title: Some("first post".to_string()),
                date: Some("2018-09-01".to_string()),
                body: "<p>hi</p>".to_string(),
                ..Default::default()
            },
            prefix: Some("2018-09-01".to_string()),
            format,
        }
    }

    #[test]
    fn test_render_post_html() {
        let author = part("author", "<p>me</p>");
        let footnote = part("footnote", "<p>fin</p>");
        let article = render_post(&post(BodyFormat::Html), Some(&author), Some(&footnote));

        assert_eq!(article.header.title, "Hello");
        assert_eq!(article.header.date.as_deref(), Some("2018-09-01"));
        assert_eq!(article.body, ArticleBody::Html("<p>hi</p>".to_string()));
        assert_eq!(article.footer.author.as_deref(), Some("<p>me</p>"));
        assert_eq!(article.footer.slug.as_deref(), Some("/hello/"));
        assert_eq!(article.footer.footnote.as_deref(), Some("<p>fin</p>"));
    }

    #[test]
    fn test_render_post_mdx() {
        let article = render_post(&post(BodyFormat::Mdx), None, None);
        assert!(article.body.is_mdx());
        assert_eq!(article.footer.author, None);
    }

    #[test]
    fn test_only_mdx_bodies_map_code_blocks() {
        let body = r#"<pre><code className="language-js" metastring="react-live">run()</code></pre>"#;
        let mut record = post(BodyFormat::Mdx);
        record.base.body = body.to_string();

        let article = render_post(&record, None, None);
        assert_eq!(article.code_blocks.len(), 1);
        assert!(article.code_blocks[0].live);

        record.format = BodyFormat::Html;
        assert!(render_post(&record, None, None).code_blocks.is_empty());
    }

    #[test]
    fn test_render_page_has_no_author_or_date() {
        let page = PageRecord {
            base: RecordBase {
                slug: "/about/".to_string(),
                title: "About".to_string(),
                date: Some("2018-01-01".to_string()),
                body: "<p>about</p>".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let article = render_page(&page, Some(&part("footnote", "")));

        assert_eq!(article.header.date, None);
        assert_eq!(article.footer, ArticleFooter::default());
        assert_eq!(article.body.as_str(), "<p>about</p>");
    }

    #[test]
    fn test_article_body_serializes_format() {
        let json = serde_json::to_value(ArticleBody::Mdx("x".to_string())).unwrap();
        assert_eq!(json["format"], "mdx");
        assert_eq!(json["content"], "x");
    }
}
