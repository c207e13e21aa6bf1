//! Localized messages
//!
//! Message catalogs are JSON objects compiled into the binary. Keys are
//! dotted paths (`notices.selectText`); `{name}` placeholders are filled
//! from the supplied variables. A key with no string at its path is
//! returned unchanged.

use std::str::FromStr;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::warn;

use crate::error::ZettelError;

const EN: &str = include_str!("locales/en.json");
const JA: &str = include_str!("locales/ja.json");

/// Supported message languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Pick a locale from a language tag such as `ja`, `ja-JP` or
    /// `en_US.UTF-8`. Unsupported or missing tags give English.
    pub fn resolve(tag: Option<&str>) -> Locale {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    fn catalog(&self) -> &'static Value {
        static EN_CATALOG: OnceLock<Value> = OnceLock::new();
        static JA_CATALOG: OnceLock<Value> = OnceLock::new();

        let (cell, source) = match self {
            Locale::En => (&EN_CATALOG, EN),
            Locale::Ja => (&JA_CATALOG, JA),
        };
        cell.get_or_init(|| match serde_json::from_str(source) {
            Ok(value) => value,
            Err(e) => {
                warn!(locale = self.code(), error = %e, "Failed to parse message catalog");
                Value::Null
            }
        })
    }
}

impl FromStr for Locale {
    type Err = ZettelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_', '.'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            _ => Err(ZettelError::invalid_value("locale", s)),
        }
    }
}

/// Translate `key` into `locale`, substituting `{name}` placeholders
pub fn translate(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
    let found = key
        .split('.')
        .try_fold(locale.catalog(), |value, segment| value.get(segment))
        .and_then(Value::as_str);

    let mut message = match found {
        Some(text) => text.to_string(),
        None => key.to_string(),
    };
    for (name, value) in vars {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}
