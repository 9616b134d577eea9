use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::ContentRecord;

/// Tags written into the document head for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoTags {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub language: String,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,
}

impl SeoTags {
    /// Builds the tags for `record`, or for the index when `record` is `None`.
    #[must_use]
    pub fn for_record(record: Option<&ContentRecord>, config: &SiteConfig) -> Self {
        let base = record.map(ContentRecord::base);
        let site_root = format!("{}{}", config.site_url, config.path_prefix);

        let title = base.map_or_else(
            || config.site_title.clone(),
            |base| format!("{} - {}", base.title, config.short_site_title),
        );
        let description = base
            .and_then(|base| base.sub_title.clone())
            .unwrap_or_else(|| config.site_description.clone());
        let url = base.map_or_else(|| site_root.clone(), |base| format!("{site_root}{}", base.slug));
        let image = match base.and_then(|base| base.cover_ref.as_deref()) {
            Some(cover) if cover.starts_with("http://") || cover.starts_with("https://") => {
                cover.to_string()
            }
            Some(cover) => format!("{site_root}{cover}"),
            None => format!("{site_root}/{}", config.site_image.trim_start_matches('/')),
        };
        let twitter_creator = Some(config.author_twitter_account.as_str())
            .filter(|account| !account.is_empty())
            .map(|account| format!("@{account}"));

        Self {
            title,
            description,
            url,
            image,
            language: config.site_language.clone(),
            og_type: if record.is_some() { "article" } else { "website" },
            twitter_card: "summary",
            twitter_creator,
        }
    }
}
