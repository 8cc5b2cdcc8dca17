//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Wire format of post timestamps: ISO-8601 with six fractional digits, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Render a timestamp the way post bodies carry it.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Body of `POST /posts`. Both keys are required; presence is checked by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub content: Field<String>,
}

/// Body of `PUT /posts/{id}`. Absent keys leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub content: Field<String>,
}

impl UpdatePostRequest {
    /// True when the body named neither field.
    pub fn is_empty(&self) -> bool {
        self.title.is_missing() && self.content.is_missing()
    }
}

/// A post as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timestamp_always_has_microseconds() {
        let whole = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(9, 3, 7)
            .unwrap();
        assert_eq!(format_timestamp(&whole), "2024-05-17T09:03:07.000000");

        let fractional = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_micro_opt(9, 3, 7, 42)
            .unwrap();
        assert_eq!(format_timestamp(&fractional), "2024-05-17T09:03:07.000042");
    }

    #[test]
    fn test_update_request_emptiness() {
        let empty: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());

        let nulled: UpdatePostRequest = serde_json::from_str(r#"{"content": null}"#).unwrap();
        assert!(!nulled.is_empty());
    }
}
