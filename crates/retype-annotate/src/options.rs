//! Annotator options.
//!
//! Options are plain JSON (camelCase keys). Boolean fields also accept the
//! string spellings people tend to write in hand-edited config files
//! (`"true"`, `"off"`, ...). Unknown keys are rejected.

use crate::error::AnnotateError;
use crate::model::VisitedFunction;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AnnotateOptions {
    /// Record a failed function in the report and keep going, instead of
    /// failing the whole file.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub isolate_failures: bool,
    /// Keep records for functions without a resolvable name.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub include_anonymous: bool,
    /// Drop records that need no insertion (already annotated or unplaceable).
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub skip_annotated: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptions {
            isolate_failures: true,
            include_anonymous: true,
            skip_annotated: false,
        }
    }
}

impl AnnotateOptions {
    pub fn from_json_str(json: &str) -> Result<Self, AnnotateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a finished record belongs in the report. Filters only;
    /// records are never altered.
    pub(crate) fn keeps(&self, visited: &VisitedFunction) -> bool {
        if !self.include_anonymous && visited.name.is_none() {
            return false;
        }
        if self.skip_annotated && visited.text_to_insert.is_none() {
            return false;
        }
        true
    }
}

fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                s
            ))),
        },
    }
}
