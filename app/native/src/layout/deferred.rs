//! Deferred chrome components.
//!
//! Chrome components may be loaded lazily. Until a component is ready its slot
//! renders a placeholder. Each slot resolves exactly once; components resolve
//! independently and in any order.

use serde::Serialize;
use thiserror::Error;

/// A value that is either still loading or ready.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Deferred<T> {
    #[default]
    Loading,
    Ready(T),
}

/// Returned when resolving a slot that already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deferred value already resolved")]
pub struct AlreadyResolved;

impl<T> Deferred<T> {
    #[must_use]
    pub const fn new() -> Self { Self::Loading }

    #[must_use]
    pub const fn is_ready(&self) -> bool { matches!(self, Self::Ready(_)) }

    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading => None,
        }
    }

    /// Stores the loaded value.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` if the slot is already ready; the existing
    /// value is kept.
    pub fn resolve(&mut self, value: T) -> Result<(), AlreadyResolved> {
        if self.is_ready() {
            return Err(AlreadyResolved);
        }
        *self = Self::Ready(value);
        Ok(())
    }
}

/// Chrome components that load independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChromeComponent {
    Navigator,
    ActionsBar,
    InfoBar,
    InfoBox,
}

impl ChromeComponent {
    pub const ALL: [Self; 4] = [Self::Navigator, Self::ActionsBar, Self::InfoBar, Self::InfoBox];
}

/// What a slot shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "component", rename_all = "camelCase")]
pub enum SlotView {
    Placeholder(ChromeComponent),
    Ready(ChromeComponent),
}

/// Load state of every chrome component.
#[derive(Debug, Clone, Default)]
pub struct ChromeSlots {
    navigator: Deferred<()>,
    actions_bar: Deferred<()>,
    info_bar: Deferred<()>,
    info_box: Deferred<()>,
}

impl ChromeSlots {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    const fn slot(&self, component: ChromeComponent) -> &Deferred<()> {
        match component {
            ChromeComponent::Navigator => &self.navigator,
            ChromeComponent::ActionsBar => &self.actions_bar,
            ChromeComponent::InfoBar => &self.info_bar,
            ChromeComponent::InfoBox => &self.info_box,
        }
    }

    const fn slot_mut(&mut self, component: ChromeComponent) -> &mut Deferred<()> {
        match component {
            ChromeComponent::Navigator => &mut self.navigator,
            ChromeComponent::ActionsBar => &mut self.actions_bar,
            ChromeComponent::InfoBar => &mut self.info_bar,
            ChromeComponent::InfoBox => &mut self.info_box,
        }
    }

    /// Marks a component as loaded.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` if the component was already loaded.
    pub fn resolve(&mut self, component: ChromeComponent) -> Result<(), AlreadyResolved> {
        let result = self.slot_mut(component).resolve(());
        if result.is_err() {
            tracing::debug!(component = ?component, "component already loaded");
        }
        result
    }

    #[must_use]
    pub const fn is_ready(&self, component: ChromeComponent) -> bool {
        self.slot(component).is_ready()
    }

    /// Returns the view for `component`.
    #[must_use]
    pub const fn view(&self, component: ChromeComponent) -> SlotView {
        if self.is_ready(component) {
            SlotView::Ready(component)
        } else {
            SlotView::Placeholder(component)
        }
    }
}
