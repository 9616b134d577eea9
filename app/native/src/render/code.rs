//! Code blocks inside article bodies.
//!
//! A `pre` element whose child `code` carries a `language-<lang>` class is
//! rendered as a highlighted block; a block whose fence meta contains
//! `react-live` becomes an editable live example. Any other `pre` is left to
//! render verbatim.
//!
//! MDX bodies write the class as `className` and keep the fence meta in a
//! `metastring` attribute; plain HTML uses `class`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static LANGUAGE_CLASS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)language-([\w#+.-]+)").ok());

static PRE_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)<pre[^>]*>\s*<code([^>]*)>(.*?)</code>\s*</pre>").ok());

static CLASS_ATTR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"\bclass(?:Name)?="([^"]*)""#).ok());

static META_ATTR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"\bmetastring="([^"]*)""#).ok());

const LIVE_FLAG: &str = "react-live";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
    pub live: bool,
}

impl CodeBlock {
    /// Recognises a code block from the class and text of a `pre > code` element.
    ///
    /// Returns `None` when no `language-` class is present.
    #[must_use]
    pub fn from_pre(class_name: &str, code: &str) -> Option<Self> {
        let captures = LANGUAGE_CLASS.as_ref()?.captures(class_name)?;
        let language = captures.get(1)?.as_str().to_string();

        Some(Self {
            language,
            code: code.strip_suffix('\n').unwrap_or(code).to_string(),
            live: class_name.split_whitespace().any(|class| class == LIVE_FLAG),
        })
    }

    /// Applies the fence meta string (the text after the language in a fence).
    #[must_use]
    pub fn with_meta(mut self, meta: &str) -> Self {
        if meta.split_whitespace().any(|word| word == LIVE_FLAG) {
            self.live = true;
        }
        self
    }

    /// Collects the code blocks of every `pre > code` element in `body`, in
    /// document order. Elements without a language class are skipped.
    #[must_use]
    pub fn extract(body: &str) -> Vec<Self> {
        let Some(pre_code) = PRE_CODE.as_ref() else {
            return Vec::new();
        };

        pre_code
            .captures_iter(body)
            .filter_map(|captures| {
                let attrs = captures.get(1).map_or("", |m| m.as_str());
                let code = unescape_html(captures.get(2).map_or("", |m| m.as_str()));
                let block = Self::from_pre(attribute(&CLASS_ATTR, attrs), &code)?;
                Some(block.with_meta(attribute(&META_ATTR, attrs)))
            })
            .collect()
    }
}

fn attribute<'a>(pattern: &LazyLock<Option<Regex>>, attrs: &'a str) -> &'a str {
    pattern
        .as_ref()
        .and_then(|re| re.captures(attrs))
        .and_then(|captures| captures.get(1))
        .map_or("", |m| m.as_str())
}

/// Decodes the entities an HTML serializer emits inside `code`.
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_class_detected() {
        let block = CodeBlock::from_pre("language-rust", "fn main() {}\n").unwrap();
        assert_eq!(block.language, "rust");
        assert_eq!(block.code, "fn main() {}");
        assert!(!block.live);
    }

    #[test]
    fn test_language_among_other_classes() {
        let block = CodeBlock::from_pre("line-numbers language-c++ wide", "x").unwrap();
        assert_eq!(block.language, "c++");
    }

    #[test]
    fn test_only_one_trailing_newline_trimmed() {
        let block = CodeBlock::from_pre("language-js", "a\n\n").unwrap();
        assert_eq!(block.code, "a\n");
    }

    #[test]
    fn test_plain_pre_is_not_a_code_block() {
        assert_eq!(CodeBlock::from_pre("", "text"), None);
        assert_eq!(CodeBlock::from_pre("highlight", "text"), None);
        assert_eq!(CodeBlock::from_pre("nolanguage-js", "text"), None);
    }

    #[test]
    fn test_react_live_flag() {
        let block = CodeBlock::from_pre("language-jsx", "<App />").unwrap().with_meta("react-live");
        assert!(block.live);

        let by_class = CodeBlock::from_pre("language-jsx react-live", "<App />").unwrap();
        assert!(by_class.live);
    }

    #[test]
    fn test_extract_from_mdx_markup() {
        let body = r#"<p>Try it:</p>
<pre><code className="language-jsx" metastring="react-live">&lt;Button label=&quot;go&quot; /&gt;
</code></pre>
<pre><code>plain text</code></pre>
<pre class="language-rust"><code class="language-rust">let a = 1 &amp;&amp; 2;</code></pre>"#;

        let blocks = CodeBlock::extract(body);
        assert_eq!(blocks, vec![
            CodeBlock {
                language: "jsx".to_string(),
                code: "<Button label=\"go\" />".to_string(),
                live: true,
            },
            CodeBlock {
                language: "rust".to_string(),
                code: "let a = 1 && 2;".to_string(),
                live: false,
            },
        ]);
    }

    #[test]
    fn test_extract_without_code_blocks() {
        assert!(CodeBlock::extract("<p>no code here</p>").is_empty());
        assert!(CodeBlock::extract("").is_empty());
    }
}
