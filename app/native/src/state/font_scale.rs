//! Bounded font scale and its persistence.
//!
//! The font scale multiplies the base font size of post bodies. It is the only
//! piece of UI state that survives between sessions: every accepted change is
//! written to storage, and the stored value is read back exactly once when a
//! store is created.

use serde::Serialize;

use super::types::StoreError;
use crate::constants::font::{MAX_FONT_SIZE_INCREASE, MIN_FONT_SIZE_INCREASE};
use crate::constants::storage::FONT_SIZE_INCREASE_KEY;
use crate::storage::KeyValueStorage;

/// A font scale factor within `[1.0, 1.5]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FontScale(f64);

impl Default for FontScale {
    fn default() -> Self { Self::MIN }
}

impl FontScale {
    pub const MIN: Self = Self(MIN_FONT_SIZE_INCREASE);
    pub const MAX: Self = Self(MAX_FONT_SIZE_INCREASE);

    /// Validates a raw scale factor.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFontScale` if `value` is NaN or outside the
    /// inclusive range.
    pub fn new(value: f64) -> Result<Self, StoreError> {
        if (MIN_FONT_SIZE_INCREASE..=MAX_FONT_SIZE_INCREASE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StoreError::InvalidFontScale(value))
        }
    }

    /// Parses a persisted numeric string. Invalid input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().and_then(|value| Self::new(value).ok())
    }

    #[must_use]
    pub const fn value(self) -> f64 { self.0 }
}

impl std::fmt::Display for FontScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Reads the persisted scale and returns it if it should replace `current`.
///
/// Returns `None` when storage is unavailable, the key is absent, the value
/// does not parse or is out of range, or it equals `current`.
#[must_use]
pub fn hydrate(current: FontScale, storage: &dyn KeyValueStorage) -> Option<FontScale> {
    let raw = match storage.get(FONT_SIZE_INCREASE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::debug!(error = %err, "font scale storage unavailable, keeping default");
            return None;
        }
    };

    let Some(stored) = FontScale::parse(&raw) else {
        tracing::debug!(value = %raw, "ignoring invalid persisted font scale");
        return None;
    };

    (stored != current).then_some(stored)
}

/// Writes the scale to storage. Failures are logged and otherwise ignored.
pub fn persist(value: FontScale, storage: &mut dyn KeyValueStorage) {
    if let Err(err) = storage.set(FONT_SIZE_INCREASE_KEY, &value.to_string()) {
        tracing::debug!(error = %err, value = %value, "failed to persist font scale");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, UnavailableStorage};

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(FontScale::new(1.0).is_ok());
        assert!(FontScale::new(1.5).is_ok());
        assert!(FontScale::new(1.25).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        for value in [0.0, 0.99, 1.51, 5.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(FontScale::new(value).is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_parse_handles_garbage() {
        assert_eq!(FontScale::parse(" 1.3 "), Some(FontScale(1.3)));
        assert_eq!(FontScale::parse(""), None);
        assert_eq!(FontScale::parse("big"), None);
        assert_eq!(FontScale::parse("5.0"), None);
    }

    #[test]
    fn test_hydrate_valid_different_value() {
        let storage = MemoryStorage::with_entry(FONT_SIZE_INCREASE_KEY, "1.3");
        assert_eq!(hydrate(FontScale::MIN, &storage), Some(FontScale(1.3)));
    }

    #[test]
    fn test_hydrate_same_value_is_no_override() {
        let storage = MemoryStorage::with_entry(FONT_SIZE_INCREASE_KEY, "1");
        assert_eq!(hydrate(FontScale::MIN, &storage), None);
    }

    #[test]
    fn test_hydrate_invalid_value_is_no_override() {
        let storage = MemoryStorage::with_entry(FONT_SIZE_INCREASE_KEY, "5.0");
        assert_eq!(hydrate(FontScale::MIN, &storage), None);
    }

    #[test]
    fn test_hydrate_missing_or_unavailable() {
        assert_eq!(hydrate(FontScale::MIN, &MemoryStorage::new()), None);
        assert_eq!(hydrate(FontScale::MIN, &UnavailableStorage), None);
    }

    #[test]
    fn test_persist_writes_numeric_string() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        persist(FontScale(1.2), &mut writer);
        assert_eq!(storage.peek(FONT_SIZE_INCREASE_KEY).as_deref(), Some("1.2"));
    }

    #[test]
    fn test_persist_ignores_unavailable_storage() {
        persist(FontScale::MAX, &mut UnavailableStorage);
    }
}
