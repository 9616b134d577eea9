//! Commands that show what the site displays.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::context::SiteOptions;
use crate::cli::output::{self, format_bool};
use crate::content::BodyFormat;
use crate::error::GitinbitError;
use crate::layout::{Chrome, SlotView};
use crate::state::{UiState, ViewKind};
use crate::throttle::SystemClock;

/// View entered before composing the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Index,
    Post,
    Page,
}

impl From<ViewArg> for ViewKind {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Index => Self::Index,
            ViewArg::Post => Self::Post,
            ViewArg::Page => Self::Page,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChromeReport {
    state: UiState,
    chrome: Chrome,
    #[serde(skip_serializing_if = "Option::is_none")]
    slots: Option<Vec<SlotView>>,
}

/// Prints the chrome for a viewport of `width` pixels after entering `view`.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded.
pub fn chrome(options: &SiteOptions, width: u32, view: ViewArg, slots: bool) -> Result<(), GitinbitError> {
    let site = options.load_site(SystemClock::new(), width)?;
    site.enter_view(view.into());

    output::print_json(&ChromeReport {
        state: site.state(),
        chrome: site.chrome(),
        slots: slots.then(|| site.chrome_slots()),
    })
}

/// Renders the article at `slug`.
///
/// # Errors
///
/// Returns `NotFound` if no post or page has that slug.
pub fn article(options: &SiteOptions, slug: &str, width: u32) -> Result<(), GitinbitError> {
    let site = options.load_site(SystemClock::new(), width)?;
    let rendered = site.open(slug).ok_or_else(|| GitinbitError::NotFound(slug.to_string()))?;
    output::print_json(&rendered)
}

/// Lists post categories.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded.
pub fn categories(options: &SiteOptions, json: bool) -> Result<(), GitinbitError> {
    let site = options.load_site(SystemClock::new(), 0)?;
    let categories = site.content().categories();

    if json {
        return output::print_json(&categories);
    }
    if categories.is_empty() {
        println!("{}", "No categories.".dimmed());
    }
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

/// Lists posts in navigator order, optionally filtered by category.
///
/// # Errors
///
/// Returns an error if the site cannot be loaded.
pub fn posts(options: &SiteOptions, category: Option<&str>, json: bool) -> Result<(), GitinbitError> {
    #[derive(Tabled)]
    struct PostRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Title")]
        title: String,
        #[tabled(rename = "Slug")]
        slug: String,
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Category")]
        category: String,
        #[tabled(rename = "MDX")]
        mdx: String,
    }

    let site = options.load_site(SystemClock::new(), 0)?;
    let content = site.content();
    let posts: Vec<_> = match category {
        Some(category) => content.posts_in_category(category).collect(),
        None => content.posts().collect(),
    };

    if json {
        return output::print_json(&posts);
    }
    if posts.is_empty() {
        println!("{}", "No posts.".dimmed());
        return Ok(());
    }

    let rows: Vec<PostRow> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| PostRow {
            index: i + 1,
            title: output::truncate(&post.base.title, 48),
            slug: post.base.slug.clone(),
            date: post.base.date.clone().unwrap_or_default(),
            category: post.base.category.clone().unwrap_or_default(),
            mdx: format_bool(post.format == BodyFormat::Mdx),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::last()).with(Alignment::center()))
        .to_string();

    println!("{}", format!("Posts ({})", posts.len()).bold());
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_arg_maps_to_view_kind() {
        assert_eq!(ViewKind::from(ViewArg::Index), ViewKind::Index);
        assert_eq!(ViewKind::from(ViewArg::Post), ViewKind::Post);
        assert_eq!(ViewKind::from(ViewArg::Page), ViewKind::Page);
    }

    #[test]
    fn test_missing_content_errors() {
        let options = SiteOptions {
            content: Some(std::path::PathBuf::from("/definitely/missing/content.json")),
            ephemeral: true,
            ..Default::default()
        };
        assert!(matches!(categories(&options, true), Err(GitinbitError::ContentError(_))));
    }
}
