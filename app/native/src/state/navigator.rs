//! Navigator position transitions.
//!
//! The navigator is featured on the index view and docked aside whenever a
//! single post or page is shown. Views call [`enter_view`] when they are
//! entered; the transition is dispatched only when the position actually needs
//! to change.

use serde::{Deserialize, Serialize};

use super::store::UiStore;
use super::types::{Action, NavigatorPosition};

/// Kind of view being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    /// The home listing.
    Index,
    /// A single blog post (markdown or MDX).
    Post,
    /// A single static page.
    Page,
}

impl ViewKind {
    /// Returns `true` for views that display a single content item.
    #[must_use]
    pub const fn is_single_item(self) -> bool { matches!(self, Self::Post | Self::Page) }
}

/// Returns the position to move to when entering `view`, or `None` if the
/// navigator should stay where it is.
#[must_use]
pub const fn next_position(current: NavigatorPosition, view: ViewKind) -> Option<NavigatorPosition> {
    match (view, current) {
        (ViewKind::Index, NavigatorPosition::Aside) => Some(NavigatorPosition::Featured),
        (ViewKind::Post | ViewKind::Page, NavigatorPosition::Featured) => {
            Some(NavigatorPosition::Aside)
        }
        _ => None,
    }
}

/// Applies the navigator transition for entering `view`.
///
/// Returns the new position if a transition was dispatched.
pub fn enter_view(store: &UiStore, view: ViewKind) -> Option<NavigatorPosition> {
    let current = store.state().navigator_position;
    let next = next_position(current, view)?;

    // Position actions carry no validation, so dispatch cannot fail here.
    if store.dispatch(Action::SetNavigatorPosition(next)).is_err() {
        return None;
    }
    tracing::debug!(view = ?view, from = %current, to = %next, "navigator moved");
    Some(next)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_transition_table() {
        use NavigatorPosition::{Aside, Featured};

        assert_eq!(next_position(Featured, ViewKind::Index), None);
        assert_eq!(next_position(Aside, ViewKind::Index), Some(Featured));
        assert_eq!(next_position(Featured, ViewKind::Post), Some(Aside));
        assert_eq!(next_position(Featured, ViewKind::Page), Some(Aside));
        assert_eq!(next_position(Aside, ViewKind::Post), None);
        assert_eq!(next_position(Aside, ViewKind::Page), None);
    }

    #[test]
    fn test_single_item_view_moves_navigator_aside() {
        let store = UiStore::new(MemoryStorage::new());
        assert_eq!(store.state().navigator_position, NavigatorPosition::Featured);

        assert_eq!(enter_view(&store, ViewKind::Post), Some(NavigatorPosition::Aside));
        assert_eq!(store.state().navigator_position, NavigatorPosition::Aside);
    }

    #[test]
    fn test_second_single_item_view_is_idempotent() {
        let store = UiStore::new(MemoryStorage::new());
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        enter_view(&store, ViewKind::Post);
        assert_eq!(enter_view(&store, ViewKind::Page), None);

        assert_eq!(store.state().navigator_position, NavigatorPosition::Aside);
        assert_eq!(notifications.get(), 1);
    }

    #[test]
    fn test_index_view_resets_to_featured() {
        let store = UiStore::new(MemoryStorage::new());
        enter_view(&store, ViewKind::Page);
        assert_eq!(enter_view(&store, ViewKind::Index), Some(NavigatorPosition::Featured));
        assert_eq!(store.state().navigator_position, NavigatorPosition::Featured);
    }

    #[test]
    fn test_is_single_item() {
        assert!(!ViewKind::Index.is_single_item());
        assert!(ViewKind::Post.is_single_item());
        assert!(ViewKind::Page.is_single_item());
    }
}
