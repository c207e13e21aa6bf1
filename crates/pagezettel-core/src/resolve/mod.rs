//! Placeholder expansion for file names and template bodies
//!
//! Supported tokens:
//! - file names: `{{date}}`, `{{time}}`, `{{datetime}}`, `{{zettel-id}}`,
//!   `{{title}}`, `{{alias}}`
//! - bodies: `{{title}}`, `{{content}}`, `{{alias}}`, `{{date:FORMAT}}`,
//!   `{{date}}`, `{{time}}`, `{{datetime}}`
//!
//! Matching is case-sensitive. Anything else between braces is left as is.
//! Bare `{{date}}`/`{{time}}`/`{{datetime}}` in a body are rendered from the
//! wall clock, while `{{date:FORMAT}}` renders the `date` variable.

pub mod moment;

use std::sync::OnceLock;

use chrono::DateTime;
use regex::{Captures, Regex};
use tracing::{trace, warn};

use crate::clock::Timestamp;
pub use moment::format_moment;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ZETTEL_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Characters that cannot appear in a note file name
const UNSAFE_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

static CUSTOM_DATE_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn custom_date_re() -> Option<&'static Regex> {
    CUSTOM_DATE_RE
        .get_or_init(|| match Regex::new(r"\{\{date:([^}]+)\}\}") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile custom date regex");
                None
            }
        })
        .as_ref()
}

/// Values substituted into a template body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    pub title: String,
    pub content: Option<String>,
    /// RFC 3339 timestamp rendered by `{{date:FORMAT}}`
    pub date: String,
    pub alias: Option<String>,
}

/// 14-digit timestamp identifier, e.g. `20240305090807`
pub fn zettel_id(now: &Timestamp) -> String {
    now.format(ZETTEL_ID_FORMAT).to_string()
}

/// Replace characters that are illegal in file names with `-` and trim
pub fn sanitize_title(title: &str) -> String {
    title
        .replace(&UNSAFE_FILENAME_CHARS[..], "-")
        .trim()
        .to_string()
}

/// Expand a file-name pattern. The extension is appended by the caller.
///
/// `alias` is inserted verbatim when present and non-empty; otherwise
/// `{{alias}}` falls back to the sanitized title.
pub fn expand_file_name(
    format: &str,
    now: &Timestamp,
    title: &str,
    alias: Option<&str>,
) -> String {
    let sanitized_title = sanitize_title(title);
    let alias = alias
        .filter(|a| !a.is_empty())
        .unwrap_or(sanitized_title.as_str());

    let name = format
        .replace("{{date}}", &now.format(DATE_FORMAT).to_string())
        .replace("{{time}}", &now.format(TIME_FORMAT).to_string())
        .replace("{{datetime}}", &now.format(DATETIME_FORMAT).to_string())
        .replace("{{zettel-id}}", &zettel_id(now))
        .replace("{{title}}", &sanitized_title)
        .replace("{{alias}}", alias);

    trace!(format, name = %name, "expand_file_name");
    name
}

/// Expand a template body.
///
/// A `{{date:FORMAT}}` token whose `date` variable does not parse as RFC
/// 3339 is kept verbatim.
pub fn expand_body(template: &str, variables: &TemplateVariables, now: &Timestamp) -> String {
    let mut result = template
        .replace("{{title}}", &variables.title)
        .replace("{{content}}", variables.content.as_deref().unwrap_or(""))
        .replace("{{alias}}", variables.alias.as_deref().unwrap_or(""));

    if let Some(re) = custom_date_re() {
        let date = DateTime::parse_from_rfc3339(&variables.date);
        result = re
            .replace_all(&result, |caps: &Captures| match &date {
                Ok(ts) => format_moment(ts, &caps[1]),
                Err(e) => {
                    trace!(date = %variables.date, error = %e, "custom_date_unparsed");
                    caps[0].to_string()
                }
            })
            .into_owned();
    }

    result
        .replace("{{date}}", &now.format(DATE_FORMAT).to_string())
        .replace("{{time}}", &now.format(TIME_FORMAT).to_string())
        .replace("{{datetime}}", &now.format(DATETIME_FORMAT).to_string())
}
