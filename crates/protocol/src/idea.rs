//! Idea types for the idea board.
//!
//! This module defines the [`Idea`] returned by `GET /api/ideas` and the
//! [`NewIdea`] body sent to `POST /api/ideas`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Server-assigned identifier of an idea.
pub type IdeaId = i64;

/// Maximum length of an idea, in characters.
pub const MAX_IDEA_LENGTH: usize = 500;

/// Format used when displaying an idea's creation time.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A submitted idea, as stored by the backend.
///
/// Ideas are immutable once created: the client never edits or deletes them.
///
/// # Examples
///
/// ```
/// use idea_board_protocol::Idea;
///
/// let json = r#"{"id": 1, "content": "Test idea 1", "created_at": "2024-01-01T00:00:00Z"}"#;
/// let idea: Idea = serde_json::from_str(json).unwrap();
/// assert_eq!(idea.id, 1);
/// assert_eq!(idea.content, "Test idea 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Unique identifier assigned by the backend.
    pub id: IdeaId,
    /// The idea text.
    pub content: String,
    /// When the backend stored this idea.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Creates an idea with the given fields.
    #[must_use]
    pub fn new(id: IdeaId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }

    /// Formats the creation time in the given time zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use idea_board_protocol::Idea;
    ///
    /// let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    /// let idea = Idea::new(1, "Test", created);
    /// assert_eq!(idea.timestamp_in(&Utc), "2024-01-01 09:30:00");
    /// ```
    #[must_use]
    pub fn timestamp_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.created_at
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    /// Formats the creation time in the local time zone.
    #[must_use]
    pub fn local_timestamp(&self) -> String {
        self.timestamp_in(&chrono::Local)
    }
}

/// The body of a submission request.
///
/// A `NewIdea` can only be built from content that is non-empty after
/// trimming and at most [`MAX_IDEA_LENGTH`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdea {
    /// The trimmed idea text.
    pub content: String,
}

impl NewIdea {
    /// Validates and trims raw user input into a submission.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyContent`] if the input is empty or only
    /// whitespace, and [`ProtocolError::ContentTooLong`] if the trimmed input
    /// exceeds [`MAX_IDEA_LENGTH`] characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea_board_protocol::NewIdea;
    ///
    /// let idea = NewIdea::new("\n  ship it \t").unwrap();
    /// assert_eq!(idea.content, "ship it");
    /// ```
    pub fn new(content: impl AsRef<str>) -> Result<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ProtocolError::EmptyContent);
        }

        let length = trimmed.chars().count();
        if length > MAX_IDEA_LENGTH {
            return Err(ProtocolError::ContentTooLong { length });
        }

        Ok(Self {
            content: trimmed.to_string(),
        })
    }
}

/// Serde support for idea timestamps.
///
/// The backend may emit naive ISO-8601 values (no offset); those are read as
/// UTC. Serialization always produces RFC 3339.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    #[test]
    fn deserialize_rfc3339_timestamp() {
        let json = r#"{"id": 1, "content": "Test idea 1", "created_at": "2024-01-01T00:00:00Z"}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea, Idea::new(1, "Test idea 1", at(0, 0, 0)));
    }

    #[test]
    fn deserialize_offset_timestamp_converts_to_utc() {
        let json = r#"{"id": 2, "content": "x", "created_at": "2024-01-01T02:00:00+02:00"}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.created_at, at(0, 0, 0));
    }

    #[test]
    fn deserialize_naive_timestamp_as_utc() {
        let json = r#"{"id": 3, "content": "x", "created_at": "2024-01-01T01:00:00"}"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.created_at, at(1, 0, 0));
    }

    #[test]
    fn deserialize_naive_timestamp_with_fraction() {
        let parsed = timestamp::parse("2024-01-01T01:00:00.123456").unwrap();
        assert_eq!(parsed.timestamp(), at(1, 0, 0).timestamp());
        assert_eq!(parsed.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn deserialize_rejects_garbage_timestamp() {
        let json = r#"{"id": 4, "content": "x", "created_at": "yesterday"}"#;
        let result: std::result::Result<Idea, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_missing_content() {
        let json = r#"{"id": 5, "created_at": "2024-01-01T00:00:00Z"}"#;
        let result: std::result::Result<Idea, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_uses_rfc3339() {
        let idea = Idea::new(1, "Test", at(12, 0, 0));
        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["created_at"], "2024-01-01T12:00:00Z");
    }

    #[test]
    fn timestamp_in_formats_for_display() {
        let idea = Idea::new(1, "Test", at(23, 5, 9));
        assert_eq!(idea.timestamp_in(&Utc), "2024-01-01 23:05:09");
    }

    #[test]
    fn new_idea_trims_content() {
        let idea = NewIdea::new("  hello world \n").unwrap();
        assert_eq!(idea.content, "hello world");
    }

    #[test]
    fn new_idea_json_body() {
        let idea = NewIdea::new(" hello ").unwrap();
        let json = serde_json::to_string(&idea).unwrap();
        assert_eq!(json, r#"{"content":"hello"}"#);
    }

    #[test]
    fn new_idea_rejects_empty() {
        assert_eq!(NewIdea::new(""), Err(ProtocolError::EmptyContent));
        assert_eq!(NewIdea::new(" \t\n "), Err(ProtocolError::EmptyContent));
    }

    #[test]
    fn new_idea_accepts_max_length() {
        let content = "a".repeat(MAX_IDEA_LENGTH);
        assert!(NewIdea::new(&content).is_ok());
    }

    #[test]
    fn new_idea_rejects_too_long() {
        let content = "a".repeat(MAX_IDEA_LENGTH + 1);
        assert_eq!(
            NewIdea::new(&content),
            Err(ProtocolError::ContentTooLong {
                length: MAX_IDEA_LENGTH + 1
            })
        );
    }

    #[test]
    fn new_idea_length_counts_characters_not_bytes() {
        let content = "é".repeat(MAX_IDEA_LENGTH);
        assert!(content.len() > MAX_IDEA_LENGTH);
        assert!(NewIdea::new(&content).is_ok());
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whitespace-only input never produces a submission.
        #[test]
        fn whitespace_only_is_rejected(input in "[ \t\r\n]{0,40}") {
            prop_assert_eq!(NewIdea::new(&input), Err(ProtocolError::EmptyContent));
        }

        /// Surrounding whitespace is stripped and the core text is kept verbatim.
        #[test]
        fn surrounding_whitespace_is_trimmed(
            lead in "[ \t\n]{0,8}",
            core in "[a-zA-Z0-9]([a-zA-Z0-9 .,!?]{0,200}[a-zA-Z0-9])?",
            trail in "[ \t\n]{0,8}",
        ) {
            let input = format!("{lead}{core}{trail}");
            let idea = NewIdea::new(&input).expect("non-empty content");
            prop_assert_eq!(idea.content, core);
        }
    }
}
