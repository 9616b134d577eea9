//! The UI state store.
//!
//! One [`UiStore`] exists per site root. It is a cheap-clone handle: every
//! clone reads and mutates the same state, so the composition layer can hand
//! copies to the resize throttler and to observers without sharing globals.
//!
//! All mutation goes through [`UiStore::dispatch`]. After every accepted
//! action the new state is delivered synchronously to each subscriber, in the
//! order they subscribed. Rejected actions leave the state untouched and
//! notify nobody.
//!
//! An observer may dispatch. The nested action is applied at once; observers
//! later in the running round see the updated state, and a follow-up round
//! runs when the current one ends, so the last state every observer sees is
//! the store's current state.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use super::font_scale::{self, FontScale};
use super::types::{Action, StoreError, UiState};
use crate::storage::KeyValueStorage;

/// Identifies a subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&UiState)>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    /// Registered observers. Empty while a notification is in flight.
    entries: Vec<(SubscriptionId, Observer)>,
    /// Ids that have not been unsubscribed.
    live: HashSet<SubscriptionId>,
    notifying: bool,
    /// Set when an observer dispatched during the running round.
    pending: bool,
}

struct StoreInner {
    state: Cell<UiState>,
    subscribers: RefCell<Subscribers>,
    storage: RefCell<Box<dyn KeyValueStorage>>,
}

/// Shared handle to the UI state container.
#[derive(Clone)]
pub struct UiStore {
    inner: Rc<StoreInner>,
}

impl fmt::Debug for UiStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStore")
            .field("state", &self.state())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl UiStore {
    /// Creates a store with default state, then applies the persisted font
    /// scale if one is stored and valid.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        let mut state = UiState::default();
        if let Some(stored) = font_scale::hydrate(state.font_size_increase, &storage) {
            tracing::debug!(font_size_increase = %stored, "restored persisted font scale");
            state.font_size_increase = stored;
        }

        Self {
            inner: Rc::new(StoreInner {
                state: Cell::new(state),
                subscribers: RefCell::new(Subscribers::default()),
                storage: RefCell::new(Box::new(storage)),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> UiState { self.inner.state.get() }

    /// Applies an action and notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFontScale` for a font scale outside
    /// `[1.0, 1.5]`. The state is unchanged and no subscriber is notified.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let next = match reduce(self.state(), action) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(action = action.type_name(), error = %err, "action rejected");
                return Err(err);
            }
        };

        self.inner.state.set(next);
        tracing::trace!(action = action.type_name(), state = ?next, "action applied");

        if matches!(action, Action::SetFontSizeIncrease(_)) {
            font_scale::persist(next.font_size_increase, self.inner.storage.borrow_mut().as_mut());
        }

        self.notify();
        Ok(())
    }

    /// Applies an action given in its JSON wire shape.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownAction` when the `type` is missing or not
    /// handled, `StoreError::MalformedAction` when the payload does not fit the
    /// type, or any error from [`Self::dispatch`]. None of these change state.
    pub fn dispatch_raw(&self, raw: &serde_json::Value) -> Result<(), StoreError> {
        let kind = raw.get("type").and_then(serde_json::Value::as_str).unwrap_or_default();
        if !Action::TYPES.contains(&kind) {
            tracing::debug!(action = kind, "ignoring unknown action");
            return Err(StoreError::UnknownAction(kind.to_string()));
        }

        let action: Action = serde_json::from_value(raw.clone())
            .map_err(|err| StoreError::MalformedAction(format!("{kind}: {err}")))?;
        self.dispatch(action)
    }

    /// Registers an observer called with the new state after every accepted
    /// action.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where F: FnMut(&UiState) + 'static {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        subscribers.next_id += 1;
        let id = SubscriptionId(subscribers.next_id);
        subscribers.live.insert(id);
        subscribers.entries.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        if !subscribers.live.remove(&id) {
            return false;
        }
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        true
    }

    /// Gets the number of registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.inner.subscribers.borrow().live.len() }

    /// Persists the font scale and drops every observer.
    pub fn shutdown(&self) {
        font_scale::persist(self.state().font_size_increase, self.inner.storage.borrow_mut().as_mut());

        let mut subscribers = self.inner.subscribers.borrow_mut();
        subscribers.entries.clear();
        subscribers.live.clear();
        tracing::debug!("ui store shut down");
    }

    fn notify(&self) {
        let mut active = {
            let mut subscribers = self.inner.subscribers.borrow_mut();
            if subscribers.notifying {
                tracing::trace!("action dispatched from an observer, queueing another round");
                subscribers.pending = true;
                return;
            }
            subscribers.notifying = true;
            std::mem::take(&mut subscribers.entries)
        };

        loop {
            for (id, observer) in &mut active {
                // Observers may unsubscribe each other mid-notification.
                if self.inner.subscribers.borrow().live.contains(id) {
                    observer(&self.state());
                }
            }

            let mut subscribers = self.inner.subscribers.borrow_mut();
            active.retain(|(id, _)| subscribers.live.contains(id));
            // Observers subscribed during the notification go after existing ones.
            active.append(&mut subscribers.entries);

            if !std::mem::take(&mut subscribers.pending) {
                subscribers.notifying = false;
                subscribers.entries = active;
                return;
            }
        }
    }
}

/// Computes the state that results from applying `action` to `state`.
///
/// # Errors
///
/// Returns `StoreError::InvalidFontScale` for an out-of-range font scale.
pub fn reduce(state: UiState, action: Action) -> Result<UiState, StoreError> {
    let mut next = state;
    match action {
        Action::SetNavigatorPosition(position) => next.navigator_position = position,
        Action::SetIsWideScreen(is_wide) => next.is_wide_screen = is_wide,
        Action::SetFontSizeIncrease(value) => next.font_size_increase = FontScale::new(value)?,
    }
    Ok(next)
}
