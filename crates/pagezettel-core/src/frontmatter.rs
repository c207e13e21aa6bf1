//! Front-matter parsing, merging and rendering
//!
//! A front-matter block is a YAML mapping at the very start of a file,
//! opened by a `---` line and closed by the next line starting with `---`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::Result;

static FRONTMATTER_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn frontmatter_re() -> Option<&'static Regex> {
    FRONTMATTER_RE
        .get_or_init(|| match Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n?") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile frontmatter regex");
                None
            }
        })
        .as_ref()
}

/// A template file split into its front-matter and body
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTemplate {
    pub frontmatter: Option<Mapping>,
    pub body: String,
}

impl ParsedTemplate {
    fn unparsed(raw: &str) -> Self {
        ParsedTemplate {
            frontmatter: None,
            body: raw.to_string(),
        }
    }
}

/// Split `raw` into front-matter and body.
///
/// Never fails: a missing block or YAML that is not a mapping leaves the
/// text untouched with no front-matter. An empty block is removed from the
/// body but yields no front-matter.
pub fn parse_frontmatter(raw: &str) -> ParsedTemplate {
    let Some(caps) = frontmatter_re().and_then(|re| re.captures(raw)) else {
        return ParsedTemplate::unparsed(raw);
    };

    let block_len = caps[0].len();
    let body = raw[block_len..].to_string();

    match serde_yaml::from_str::<Value>(&caps[1]) {
        Ok(Value::Mapping(mapping)) => ParsedTemplate {
            frontmatter: Some(mapping),
            body,
        },
        Ok(Value::Null) => ParsedTemplate {
            frontmatter: None,
            body,
        },
        Ok(_) => {
            debug!("frontmatter_not_a_mapping");
            ParsedTemplate::unparsed(raw)
        }
        Err(e) => {
            debug!(error = %e, "frontmatter_parse_failed");
            ParsedTemplate::unparsed(raw)
        }
    }
}

/// How template front-matter is combined with generated metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MergePolicy {
    /// Every key in the template overrides the generated value
    #[default]
    TemplateWins,
    /// Template keys listed here are ignored when a generated value exists
    DefaultsProtected { fields: Vec<String> },
}

impl MergePolicy {
    fn protects(&self, key: &Value) -> bool {
        match self {
            MergePolicy::TemplateWins => false,
            MergePolicy::DefaultsProtected { fields } => key
                .as_str()
                .is_some_and(|k| fields.iter().any(|f| f == k)),
        }
    }
}

/// Shallow-merge template front-matter over the generated defaults.
///
/// Keys keep the position they had in `defaults`; template-only keys are
/// appended in template order.
pub fn merge_frontmatter(
    defaults: Mapping,
    template: Option<&Mapping>,
    policy: &MergePolicy,
) -> Mapping {
    let Some(template) = template else {
        return defaults;
    };

    let mut merged = defaults;
    for (key, value) in template {
        if merged.contains_key(key) && policy.protects(key) {
            debug!(key = ?key.as_str(), "frontmatter_key_protected");
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Render a front-matter block followed by the body
pub fn render_with_frontmatter(metadata: &Mapping, body: &str) -> Result<String> {
    let mut yaml = serde_yaml::to_string(metadata)?;
    if !yaml.ends_with('\n') {
        yaml.push('\n');
    }
    Ok(format!("---\n{}---\n\n{}", yaml, body))
}
