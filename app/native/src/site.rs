//! The composition root.
//!
//! [`Site`] wires the store, the resize throttler, the viewport classifier and
//! the loaded content together. It is what a host drives: it reports viewport
//! widths, view changes and clock ticks, and reads back chrome and articles.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::constants::content::{AUTHOR_PART, FOOTNOTE_PART};
use crate::constants::timing::RESIZE_EVENT;
use crate::content::{ContentRecord, ContentSet};
use crate::layout::{
    AlreadyResolved, Chrome, ChromeComponent, ChromeSlots, LayoutComposer, SlotView,
};
use crate::render::{Article, SeoTags, render_page, render_post};
use crate::state::{Action, StoreError, UiState, UiStore, ViewKind, enter_view};
use crate::storage::KeyValueStorage;
use crate::throttle::{Clock, TimeoutThrottler};
use crate::viewport::{ViewportClassifier, ViewportSource};

/// An article together with the head tags for its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedArticle {
    pub article: Article,
    pub seo: SeoTags,
}

/// A running site.
pub struct Site<C: Clock> {
    config: SiteConfig,
    content: ContentSet,
    store: UiStore,
    throttler: TimeoutThrottler<&'static str, C>,
    classifier: ViewportClassifier,
    composer: LayoutComposer,
    slots: ChromeSlots,
    /// Latest reported viewport width, read when the debounced resize fires.
    width: Rc<Cell<u32>>,
    resize_delay: Duration,
}

impl<C: Clock> Site<C> {
    /// Builds a site, restoring the persisted font scale and classifying the
    /// initial viewport.
    pub fn new(
        config: SiteConfig,
        content: ContentSet,
        storage: impl KeyValueStorage + 'static,
        clock: C,
        viewport: &dyn ViewportSource,
    ) -> Self {
        let classifier = ViewportClassifier::new(config.ui.wide_screen_breakpoint);
        let store = UiStore::new(storage);
        let width = viewport.width();

        if let Err(err) = store.dispatch(Action::SetIsWideScreen(classifier.is_wide_screen(width))) {
            tracing::warn!(error = %err, "initial viewport classification rejected");
        }
        tracing::debug!(width, state = ?store.state(), "site initialised");

        Self {
            composer: LayoutComposer::from_config(&config),
            resize_delay: Duration::from_millis(config.ui.resize_debounce_ms),
            config,
            content,
            store,
            throttler: TimeoutThrottler::new(clock),
            classifier,
            slots: ChromeSlots::new(),
            width: Rc::new(Cell::new(width)),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig { &self.config }

    #[must_use]
    pub const fn content(&self) -> &ContentSet { &self.content }

    /// Handle to the store, for subscribing to state changes.
    #[must_use]
    pub const fn store(&self) -> &UiStore { &self.store }

    #[must_use]
    pub fn state(&self) -> UiState { self.store.state() }

    /// Applies the navigator transition for entering `view`.
    pub fn enter_view(&self, view: ViewKind) { enter_view(&self.store, view); }

    /// Records a new viewport width.
    ///
    /// Re-classification happens once no resize has been reported for the
    /// debounce delay; call [`Self::tick`] to let due timers fire.
    pub fn resize(&mut self, width: u32) {
        self.width.set(width);

        let store = self.store.clone();
        let classifier = self.classifier;
        let latest = Rc::clone(&self.width);
        self.throttler.schedule(RESIZE_EVENT, self.resize_delay, move || {
            let is_wide = classifier.is_wide_screen(latest.get());
            if let Err(err) = store.dispatch(Action::SetIsWideScreen(is_wide)) {
                tracing::warn!(error = %err, "resize classification rejected");
            }
        });
    }

    /// Fires every timer whose deadline has passed. Returns how many fired.
    pub fn tick(&mut self) -> usize { self.throttler.fire_due() }

    /// Whether a resize is waiting for its quiet period to end.
    #[must_use]
    pub fn resize_pending(&self) -> bool { self.throttler.is_pending(&RESIZE_EVENT) }

    /// Clock time (ms) at which the next timer is due.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<u64> { self.throttler.next_deadline_ms() }

    /// Composes the chrome for the current state.
    #[must_use]
    pub fn chrome(&self) -> Chrome { self.composer.compose(&self.content, &self.store.state()) }

    /// Marks a lazily loaded chrome component as ready.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` if the component was already loaded.
    pub fn load_component(&mut self, component: ChromeComponent) -> Result<(), AlreadyResolved> {
        self.slots.resolve(component)
    }

    /// Slot state of every component the current chrome shows.
    #[must_use]
    pub fn chrome_slots(&self) -> Vec<SlotView> {
        self.chrome().components().into_iter().map(|c| self.slots.view(c)).collect()
    }

    /// Renders the post or page at `slug` without touching UI state.
    #[must_use]
    pub fn article(&self, slug: &str) -> Option<RenderedArticle> {
        let record = self.content.find(slug)?;
        let footnote = self.content.part(FOOTNOTE_PART);

        let article = match record {
            ContentRecord::Post(post) => {
                render_post(post, self.content.part(AUTHOR_PART), footnote)
            }
            ContentRecord::Page(page) => render_page(page, footnote),
            ContentRecord::Part(_) => return None,
        };

        Some(RenderedArticle { article, seo: SeoTags::for_record(Some(record), &self.config) })
    }

    /// Enters the view for `slug` and renders it.
    pub fn open(&self, slug: &str) -> Option<RenderedArticle> {
        let view = match self.content.find(slug)? {
            ContentRecord::Post(_) => ViewKind::Post,
            ContentRecord::Page(_) => ViewKind::Page,
            ContentRecord::Part(_) => return None,
        };
        self.enter_view(view);
        self.article(slug)
    }

    /// Head tags for the index view.
    #[must_use]
    pub fn index_seo(&self) -> SeoTags { SeoTags::for_record(None, &self.config) }

    /// Sets the font scale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFontScale` if `value` is outside `[1.0, 1.5]`.
    pub fn set_font_size_increase(&self, value: f64) -> Result<(), StoreError> {
        self.store.dispatch(Action::SetFontSizeIncrease(value))
    }

    /// Cancels pending timers and shuts the store down.
    pub fn shutdown(&mut self) {
        self.throttler.clear();
        self.store.shutdown();
    }
}
