//! UI state for the site chrome.
//!
//! This module contains:
//! - Core types (`UiState`, `NavigatorPosition`, `Action`, `StoreError`)
//! - The bounded, persisted `FontScale`
//! - Navigator transitions keyed on the view being entered
//! - The `UiStore` container with dispatch and synchronous observers

pub mod font_scale;
pub mod navigator;
mod store;
mod types;

pub use font_scale::FontScale;
pub use navigator::{ViewKind, enter_view, next_position};
pub use store::{SubscriptionId, UiStore, reduce};
pub use types::{Action, NavigatorPosition, StoreError, UiState};
