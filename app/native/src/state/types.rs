//! Core types of the UI state store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::font_scale::FontScale;

/// Where the primary navigation element is displayed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum NavigatorPosition {
    /// Centered and prominent, shown on the index view.
    #[default]
    #[serde(rename = "is-featured")]
    Featured,
    /// Docked to the side while a single post or page is open.
    #[serde(rename = "is-aside")]
    Aside,
}

impl NavigatorPosition {
    /// Returns the position as its CSS-class style name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "is-featured",
            Self::Aside => "is-aside",
        }
    }
}

impl std::fmt::Display for NavigatorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Snapshot of the UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub navigator_position: NavigatorPosition,
    pub is_wide_screen: bool,
    pub font_size_increase: FontScale,
}

/// State transitions accepted by [`super::UiStore::dispatch`].
///
/// Serialises in the `{"type": ..., "payload": ...}` shape used by the site's
/// front-end actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetNavigatorPosition(NavigatorPosition),
    SetIsWideScreen(bool),
    SetFontSizeIncrease(f64),
}

impl Action {
    /// Every action type name the store understands.
    pub const TYPES: [&'static str; 3] =
        ["SET_NAVIGATOR_POSITION", "SET_IS_WIDE_SCREEN", "SET_FONT_SIZE_INCREASE"];

    /// Returns the action's type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::SetNavigatorPosition(_) => Self::TYPES[0],
            Self::SetIsWideScreen(_) => Self::TYPES[1],
            Self::SetFontSizeIncrease(_) => Self::TYPES[2],
        }
    }
}

/// Reasons a dispatch was rejected. A rejected dispatch never changes state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Font scale outside the accepted range.
    #[error("Font size increase {0} is outside the range [1.0, 1.5]")]
    InvalidFontScale(f64),
    /// Action type the store does not handle.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    /// Known action type with a payload of the wrong shape.
    #[error("Malformed action: {0}")]
    MalformedAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = UiState::default();
        assert_eq!(state.navigator_position, NavigatorPosition::Featured);
        assert!(!state.is_wide_screen);
        assert!((state.font_size_increase.value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_navigator_position_serializes_as_class_name() {
        let json = serde_json::to_string(&NavigatorPosition::Aside).unwrap();
        assert_eq!(json, "\"is-aside\"");
        assert_eq!(NavigatorPosition::Featured.to_string(), "is-featured");
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let json = serde_json::to_value(UiState::default()).unwrap();
        assert_eq!(json["navigatorPosition"], "is-featured");
        assert_eq!(json["isWideScreen"], false);
        assert_eq!(json["fontSizeIncrease"], 1.0);
    }

    #[test]
    fn test_action_wire_shape() {
        let action: Action =
            serde_json::from_str(r#"{"type": "SET_IS_WIDE_SCREEN", "payload": true}"#).unwrap();
        assert_eq!(action, Action::SetIsWideScreen(true));
        assert_eq!(action.type_name(), "SET_IS_WIDE_SCREEN");

        let json = serde_json::to_value(Action::SetNavigatorPosition(NavigatorPosition::Aside))
            .unwrap();
        assert_eq!(json["type"], "SET_NAVIGATOR_POSITION");
        assert_eq!(json["payload"], "is-aside");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::InvalidFontScale(2.0);
        assert!(err.to_string().contains("outside the range"));
        let err = StoreError::UnknownAction("TOGGLE_THEME".to_string());
        assert!(err.to_string().contains("TOGGLE_THEME"));
    }
}
