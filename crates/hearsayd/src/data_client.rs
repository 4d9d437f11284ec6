//! Upstream message fetching.
//!
//! The upstream collection serves `{"total": N, "items": [...]}` where
//! each item carries `user_id`/`user_name`/`message`/`timestamp`. This
//! module owns that wire shape and maps it into `MemberMessage`; nothing
//! past this boundary sees upstream field names. Item order is preserved
//! as-is - the engine treats it as chronological, oldest first.

use chrono::{DateTime, Utc};
use hearsay_common::MemberMessage;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Upstream fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream payload was not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Wire envelope of the upstream messages endpoint
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    items: Vec<RawMessage>,
}

/// One message record as the upstream serves it
#[derive(Debug, Deserialize)]
struct RawMessage {
    user_id: Option<String>,
    user_name: Option<String>,
    #[serde(default)]
    message: String,
    timestamp: Option<String>,
}

impl RawMessage {
    fn into_member_message(self) -> MemberMessage {
        // An unparseable timestamp is dropped, not an error; the engine
        // never reads it for ordering anyway.
        let created_at = self.timestamp.as_deref().and_then(parse_timestamp);
        if self.timestamp.is_some() && created_at.is_none() {
            debug!("Dropping unparseable upstream timestamp");
        }

        MemberMessage {
            member_id: self.user_id,
            member_name: self.user_name,
            text: self.message,
            created_at,
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Client for the upstream message collection.
pub struct MessageClient {
    client: reqwest::Client,
    messages_url: String,
}

impl MessageClient {
    /// Create a client with the given endpoint and per-request timeout.
    pub fn new(messages_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            messages_url,
        }
    }

    /// Fetch the raw upstream JSON, for debug inspection.
    pub async fn fetch_raw(&self) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(&self.messages_url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetch the collection and map it into `MemberMessage` entities.
    pub async fn fetch_messages(&self) -> Result<Vec<MemberMessage>, FetchError> {
        let raw = self.fetch_raw().await?;
        let envelope: RawEnvelope = serde_json::from_value(raw)?;

        let messages: Vec<MemberMessage> = envelope
            .items
            .into_iter()
            .map(RawMessage::into_member_message)
            .collect();

        if messages.is_empty() {
            warn!("Upstream returned no messages");
        } else {
            debug!("Fetched {} messages from upstream", messages.len());
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_mapping() {
        let raw = serde_json::json!({
            "total": 2,
            "items": [
                {
                    "user_id": "u-1",
                    "user_name": "Layla Smith",
                    "message": "I have 2 cars",
                    "timestamp": "2025-06-01T10:00:00Z"
                },
                {
                    "user_id": null,
                    "user_name": null,
                    "message": "orphan",
                    "timestamp": null
                }
            ]
        });

        let envelope: RawEnvelope = serde_json::from_value(raw).unwrap();
        let messages: Vec<MemberMessage> = envelope
            .items
            .into_iter()
            .map(RawMessage::into_member_message)
            .collect();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].member_name.as_deref(), Some("Layla Smith"));
        assert_eq!(messages[0].text, "I have 2 cars");
        assert!(messages[0].created_at.is_some());
        assert_eq!(messages[1].member_name, None);
        assert_eq!(messages[1].created_at, None);
    }

    #[test]
    fn test_missing_message_field_becomes_empty_text() {
        let raw = serde_json::json!({
            "items": [{ "user_id": "u-1", "user_name": "Layla Smith" }]
        });

        let envelope: RawEnvelope = serde_json::from_value(raw).unwrap();
        let messages: Vec<MemberMessage> = envelope
            .items
            .into_iter()
            .map(RawMessage::into_member_message)
            .collect();

        assert_eq!(messages[0].text, "");
    }

    #[test]
    fn test_bad_timestamp_is_dropped() {
        let raw = serde_json::json!({
            "items": [{
                "user_name": "Layla Smith",
                "message": "hi",
                "timestamp": "yesterday-ish"
            }]
        });

        let envelope: RawEnvelope = serde_json::from_value(raw).unwrap();
        let message = envelope.items.into_iter().next().unwrap().into_member_message();
        assert_eq!(message.created_at, None);
    }

    #[test]
    fn test_empty_envelope() {
        let envelope: RawEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(envelope.items.is_empty());
    }
}
