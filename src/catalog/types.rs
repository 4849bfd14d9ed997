//! Catalog record types.

use serde::Serialize;

/// One translatable message extracted from application code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMessage {
    /// Message identifier, matched against locale keys.
    pub id: String,
    /// Source-language text; empty when absent.
    pub default_message: String,
    /// Context for translators; empty when absent.
    pub description: String,
}

/// One `key -> value` pair of a locale catalog, kept in file order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    /// Message identifier.
    pub key: String,
    /// Translated text; empty means deleted.
    pub value: String,
}

impl LocaleEntry {
    /// What: Construct an entry from anything string-like.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A source message joined with its first matching translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingString {
    /// Message identifier.
    pub id: String,
    /// Source-language text.
    pub default_message: String,
    /// Context for translators.
    pub description: String,
    /// Current translation.
    pub message: String,
}

impl MatchingString {
    /// What: Join a source record with the translated text found for it.
    #[must_use]
    pub fn from_parts(source: &SourceMessage, message: &str) -> Self {
        Self {
            id: source.id.clone(),
            default_message: source.default_message.clone(),
            description: source.description.clone(),
            message: message.to_string(),
        }
    }
}
