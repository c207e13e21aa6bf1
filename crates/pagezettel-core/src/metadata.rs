//! Generated front-matter for newly extracted notes

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::clock::Timestamp;
use crate::error::{Result, ZettelError};

/// Metadata every extracted note starts with, before template
/// front-matter is merged in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Creation time, RFC 3339 in UTC with millisecond precision
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Wiki links back to the note the selection came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_notes: Option<Vec<String>>,
}

impl NoteMetadata {
    pub fn new(created: &Timestamp) -> Self {
        NoteMetadata {
            created: created
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            tags: None,
            aliases: None,
            source_notes: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    /// Record `alias`; empty aliases are ignored
    pub fn with_alias(mut self, alias: &str) -> Self {
        if !alias.is_empty() {
            self.aliases.get_or_insert_with(Vec::new).push(alias.to_string());
        }
        self
    }

    /// Link back to the note named `basename`
    pub fn with_source_note(mut self, basename: &str) -> Self {
        self.source_notes
            .get_or_insert_with(Vec::new)
            .push(format!("[[{}]]", basename));
        self
    }

    /// Convert to a YAML mapping in field order
    pub fn to_mapping(&self) -> Result<Mapping> {
        match serde_yaml::to_value(self)? {
            Value::Mapping(mapping) => Ok(mapping),
            other => Err(ZettelError::Other(format!(
                "note metadata serialized to a non-mapping value: {:?}",
                other
            ))),
        }
    }
}
