//! Visual theme applied through the document's `data-theme` attribute

use serde::{Deserialize, Serialize};

/// Name of the attribute on `<html>` that carries the theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Read back an attribute value. Anything that is not `light` is dark.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_unknown_attribute_is_dark() {
        assert_eq!(Theme::from_attribute(None), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    }
}
