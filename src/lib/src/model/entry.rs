use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::JournalError;

/// A single journal record. Every field is free-form and may be absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JournalEntry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub text: Option<String>,
    // Attached by the journal frontend, not part of the four core fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl JournalEntry {
    pub fn new() -> JournalEntry {
        JournalEntry::default()
    }

    /// Parse an entry from a raw request body.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<JournalEntry, JournalError> {
        serde_json::from_slice(bytes).map_err(|err| JournalError::parsing_error(err.to_string()))
    }

    pub fn with_date(mut self, date: impl AsRef<str>) -> JournalEntry {
        self.date = Some(date.as_ref().to_string());
        self
    }

    pub fn with_mood(mut self, mood: impl AsRef<str>) -> JournalEntry {
        self.mood = Some(mood.as_ref().to_string());
        self
    }

    pub fn with_tags<S: AsRef<str>>(mut self, tags: &[S]) -> JournalEntry {
        self.tags = Some(tags.iter().map(|t| t.as_ref().to_string()).collect());
        self
    }

    pub fn with_text(mut self, text: impl AsRef<str>) -> JournalEntry {
        self.text = Some(text.as_ref().to_string());
        self
    }

    pub fn with_emoji(mut self, emoji: impl AsRef<str>) -> JournalEntry {
        self.emoji = Some(emoji.as_ref().to_string());
        self
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = self.date.as_deref().unwrap_or("-");
        let mood = self.mood.as_deref().unwrap_or("-");
        let tags = self.tags.as_deref().unwrap_or(&[]).join(", ");
        let text_len = self.text.as_ref().map(|t| t.chars().count()).unwrap_or(0);
        write!(f, "{} · {} [{}] ({} chars)", date, mood, tags, text_len)
    }
}
