//! User-facing notices
//!
//! Notices go to stderr so stdout stays clean for paths and JSON. They are
//! dropped with `--quiet` and in JSON mode.

use pagezettel_core::assembler::Notifier;
use pagezettel_core::i18n::{translate, Locale};

/// Localized message lookup
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn get(&self, key: &str) -> String {
        translate(self.locale, key, &[])
    }

    pub fn format(&self, key: &str, vars: &[(&str, &str)]) -> String {
        translate(self.locale, key, vars)
    }
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy)]
pub struct CliNotifier {
    enabled: bool,
}

impl CliNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for CliNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(message, "notice");
        if self.enabled {
            eprintln!("{}", message);
        }
    }
}
