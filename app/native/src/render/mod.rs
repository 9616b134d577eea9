//! Article rendering.
//!
//! Turns content records into the structures a view displays: the article
//! itself (header, body, footer), the SEO tags for the document head, and
//! highlighted code blocks extracted from `pre` elements.

mod article;
mod code;
mod seo;

pub use article::{Article, ArticleBody, ArticleFooter, ArticleHeader, render_page, render_post};
pub use code::CodeBlock;
pub use seo::SeoTags;
