//! Site languages and navigation label translations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Key under which the language preference is persisted
pub const LANGUAGE_STORAGE_KEY: &str = "site:lang";

/// Supported site languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sl,
}

impl Language {
    /// ISO 639-1 code, also the persisted value and the `<html lang>` value
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sl => "sl",
        }
    }

    /// Flip between the two supported languages
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Sl,
            Language::Sl => Language::En,
        }
    }

    /// Parse a stored preference. Anything other than `en`/`sl` is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "sl" => Some(Language::Sl),
            _ => None,
        }
    }

    /// Map a browser locale (`sl-SI`, `en-US`, ...) to a site language.
    ///
    /// Only the first two characters are inspected; unknown locales fall
    /// back to English.
    pub fn from_browser_locale(locale: &str) -> Self {
        match locale.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("sl") => Language::Sl,
            _ => Language::En,
        }
    }

    /// Resolve the effective language: a valid stored value wins, then the
    /// browser locale, then English.
    pub fn resolve(stored: Option<&str>, browser_locale: Option<&str>) -> Self {
        stored
            .and_then(Language::from_code)
            .or_else(|| browser_locale.map(Language::from_browser_locale))
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| Error::config(format!("unsupported language: {s}")))
    }
}

const NAV_EN: &[(&str, &str)] = &[
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const NAV_SL: &[(&str, &str)] = &[
    ("about", "O meni"),
    ("skills", "Veščine"),
    ("projects", "Projekti"),
    ("contact", "Kontakt"),
];

/// Translate a navigation key (`about`, `#about`) into a label.
///
/// Unknown keys fall back to the key itself with any leading `#` removed.
pub fn translate_nav(lang: Language, key: &str) -> String {
    let key = key.trim_start_matches('#');
    let table = match lang {
        Language::En => NAV_EN,
        Language::Sl => NAV_SL,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_en_and_sl() {
        assert_eq!(Language::En.toggled(), Language::Sl);
        assert_eq!(Language::Sl.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Language::from_code("sl"), Some(Language::Sl));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_browser_locale_prefix() {
        assert_eq!(Language::from_browser_locale("sl-SI"), Language::Sl);
        assert_eq!(Language::from_browser_locale("SL"), Language::Sl);
        assert_eq!(Language::from_browser_locale("en-GB"), Language::En);
        assert_eq!(Language::from_browser_locale("s"), Language::En);
    }

    #[test]
    fn test_resolve_prefers_valid_stored_value() {
        assert_eq!(Language::resolve(Some("sl"), Some("en-US")), Language::Sl);
        assert_eq!(Language::resolve(Some("xx"), Some("sl-SI")), Language::Sl);
        assert_eq!(Language::resolve(None, None), Language::En);
    }

    #[test]
    fn test_translate_nav_known_and_unknown_keys() {
        assert_eq!(translate_nav(Language::En, "about"), "About");
        assert_eq!(translate_nav(Language::Sl, "#skills"), "Veščine");
        assert_eq!(translate_nav(Language::Sl, "blog"), "blog");
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Sl).unwrap();
        assert_eq!(json, "\"sl\"");
    }
}
