//! # Article Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Article {
    /// Build an article from a draft with store-assigned fields
    pub fn from_draft(draft: ArticleDraft, id: Uuid, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind,
            content: draft.content,
            created,
        }
    }
}

/// Writer input for a new article.
///
/// Only the free-text fields exist here; `id` and `created` keys in an
/// inbound body are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: String,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_type_key_on_the_wire() {
        let article = Article::from_draft(
            ArticleDraft::new("Hello", "post", "body"),
            Uuid::nil(),
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        );

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["type"], "post");
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["created"], "2024-01-02T03:04:05Z");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_draft_ignores_server_fields() {
        let body = r#"{
            "id": "6f1c2f9e-8a57-4a57-9d3b-4f3f3a0f7e11",
            "title": "T",
            "type": "note",
            "content": "C",
            "created": "1999-01-01T00:00:00Z"
        }"#;

        let draft: ArticleDraft = serde_json::from_str(body).unwrap();
        assert_eq!(draft, ArticleDraft::new("T", "note", "C"));
    }

    #[test]
    fn test_draft_missing_fields_are_empty() {
        let draft: ArticleDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, ArticleDraft::default());
    }

    #[test]
    fn test_created_with_offset_normalizes_to_utc() {
        let body = r#"{
            "id": "6f1c2f9e-8a57-4a57-9d3b-4f3f3a0f7e11",
            "title": "",
            "type": "",
            "content": "",
            "created": "2021-03-04T10:00:00.123456789+02:00"
        }"#;

        let article: Article = serde_json::from_str(body).unwrap();
        assert_eq!(
            article.created.timestamp(),
            Utc.with_ymd_and_hms(2021, 3, 4, 8, 0, 0).unwrap().timestamp()
        );
    }
}
