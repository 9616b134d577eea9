//! Layout composition for the site chrome.
//!
//! The chrome around every view consists of the navigator (post list), the
//! actions bar (category filter and font controls), and an info panel. On wide
//! screens the info panel is the full side box; on narrow screens it collapses
//! into the condensed bar. [`InfoPanel`] holds exactly one of the two, so the
//! composed chrome can never show both.

mod deferred;

use serde::Serialize;

pub use deferred::{AlreadyResolved, ChromeComponent, ChromeSlots, Deferred, SlotView};

use crate::config::SiteConfig;
use crate::content::{ContentSet, PageRecord, PartRecord, PostRecord};
use crate::state::{FontScale, NavigatorPosition, UiState};

/// Everything the chrome displays for one state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
    pub navigator: NavigatorChrome,
    pub actions_bar: ActionsBar,
    pub info: InfoPanel,
}

impl Chrome {
    /// Chrome components visible in this composition, in render order.
    #[must_use]
    pub const fn components(&self) -> [ChromeComponent; 3] {
        [ChromeComponent::Navigator, ChromeComponent::ActionsBar, self.info.component()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorChrome {
    pub position: NavigatorPosition,
    pub posts: Vec<PostSummary>,
}

/// The fields of a post the navigator list shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_ref: Option<String>,
}

impl From<&PostRecord> for PostSummary {
    fn from(post: &PostRecord) -> Self {
        Self {
            slug: post.base.slug.clone(),
            title: post.base.title.clone(),
            sub_title: post.base.sub_title.clone(),
            date: post.base.date.clone(),
            category: post.base.category.clone(),
            cover_ref: post.base.cover_ref.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsBar {
    pub categories: Vec<String>,
    pub font_size_increase: FontScale,
}

/// The info panel variant for the current screen class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum InfoPanel {
    /// Full side box, wide screens only.
    Box(InfoContent),
    /// Condensed bar for narrow screens.
    Bar(InfoContent),
}

impl InfoPanel {
    #[must_use]
    pub const fn content(&self) -> &InfoContent {
        match self {
            Self::Box(content) | Self::Bar(content) => content,
        }
    }

    #[must_use]
    pub const fn is_box(&self) -> bool { matches!(self, Self::Box(_)) }

    #[must_use]
    pub const fn is_bar(&self) -> bool { matches!(self, Self::Bar(_)) }

    #[must_use]
    pub const fn component(&self) -> ChromeComponent {
        match self {
            Self::Box(_) => ChromeComponent::InfoBox,
            Self::Bar(_) => ChromeComponent::InfoBar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub menu: Vec<MenuEntry>,
    pub parts: Vec<PartSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub slug: String,
    pub label: String,
}

impl From<&PageRecord> for MenuEntry {
    fn from(page: &PageRecord) -> Self {
        Self {
            slug: page.base.slug.clone(),
            label: page.menu_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSummary {
    pub title: String,
    pub body: String,
}

impl From<&PartRecord> for PartSummary {
    fn from(part: &PartRecord) -> Self {
        Self {
            title: part.base.title.clone(),
            body: part.base.body.clone(),
        }
    }
}

/// Composes chrome from content and UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutComposer {
    info_title: String,
    info_note: Option<String>,
}

impl LayoutComposer {
    #[must_use]
    pub fn new(info_title: impl Into<String>, info_note: Option<String>) -> Self {
        Self { info_title: info_title.into(), info_note }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        let note = Some(config.info_title_note.clone()).filter(|note| !note.is_empty());
        Self::new(config.info_title.clone(), note)
    }

    /// Builds the chrome for `state`.
    #[must_use]
    pub fn compose(&self, content: &ContentSet, state: &UiState) -> Chrome {
        let info = InfoContent {
            title: self.info_title.clone(),
            note: self.info_note.clone(),
            menu: content.menu_pages().into_iter().map(MenuEntry::from).collect(),
            parts: content.parts().map(PartSummary::from).collect(),
        };

        Chrome {
            navigator: NavigatorChrome {
                position: state.navigator_position,
                posts: content.posts().map(PostSummary::from).collect(),
            },
            actions_bar: ActionsBar {
                categories: content.categories().to_vec(),
                font_size_increase: state.font_size_increase,
            },
            info: if state.is_wide_screen { InfoPanel::Box(info) } else { InfoPanel::Bar(info) },
        }
    }
}

/// Composes chrome with an untitled info panel.
#[must_use]
pub fn compose(content: &ContentSet, state: &UiState) -> Chrome {
    LayoutComposer::default().compose(content, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentFile, RecordBase};

    fn content() -> ContentSet {
        let post = |slug: &str, category: &str| PostRecord {
            base: RecordBase {
                slug: slug.to_string(),
                title: slug.to_string(),
                category: Some(category.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        ContentSet::new(ContentFile {
            posts: vec![post("/a/", "tech"), post("/b/", "life"), post("/c/", "tech"), post("/d/", "travel")],
            pages: vec![PageRecord {
                base: RecordBase {
                    slug: "/about/".to_string(),
                    title: "About me".to_string(),
                    ..Default::default()
                },
                prefix: Some("1".to_string()),
                menu_title: Some("About".to_string()),
            }],
            parts: vec![PartRecord {
                base: RecordBase {
                    title: "info".to_string(),
                    body: "<p>hi</p>".to_string(),
                    ..Default::default()
                },
            }],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_wide_screen_shows_info_box_only() {
        let state = UiState { is_wide_screen: true, ..Default::default() };
        let chrome = compose(&content(), &state);
        assert!(chrome.info.is_box());
        assert!(!chrome.info.is_bar());
        assert_eq!(chrome.components()[2], ChromeComponent::InfoBox);
    }

    #[test]
    fn test_narrow_screen_shows_info_bar_only() {
        let chrome = compose(&content(), &UiState::default());
        assert!(chrome.info.is_bar());
        assert!(!chrome.info.is_box());
        assert_eq!(chrome.components()[2], ChromeComponent::InfoBar);
    }

    #[test]
    fn test_actions_bar_categories() {
        let chrome = compose(&content(), &UiState::default());
        assert_eq!(chrome.actions_bar.categories, vec!["tech", "life", "travel"]);
    }

    #[test]
    fn test_navigator_reflects_state() {
        let state = UiState { navigator_position: NavigatorPosition::Aside, ..Default::default() };
        let chrome = compose(&content(), &state);
        assert_eq!(chrome.navigator.position, NavigatorPosition::Aside);
        assert_eq!(chrome.navigator.posts.len(), 4);
    }

    #[test]
    fn test_info_content_menu_and_parts() {
        let composer = LayoutComposer::new("denny scott", Some("personal blog".to_string()));
        let chrome = composer.compose(&content(), &UiState::default());
        let info = chrome.info.content();

        assert_eq!(info.title, "denny scott");
        assert_eq!(info.menu, vec![MenuEntry { slug: "/about/".to_string(), label: "About".to_string() }]);
        assert_eq!(info.parts.len(), 1);
    }

    #[test]
    fn test_chrome_serializes_info_variant() {
        let state = UiState { is_wide_screen: true, ..Default::default() };
        let json = serde_json::to_value(compose(&content(), &state)).unwrap();
        assert_eq!(json["info"]["variant"], "box");
        assert_eq!(json["navigator"]["position"], "is-featured");
    }
}
