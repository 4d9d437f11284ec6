//! Member message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message attributed (or not) to a community member.
///
/// The engine joins on `member_name` only; `member_id` is carried for
/// debugging but never used for matching. Collection order is the
/// supplier's responsibility: the engine assumes oldest-first and treats
/// the last element of any filtered sequence as the most recent message.
/// `created_at` is not consulted for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberMessage {
    pub member_id: Option<String>,
    pub member_name: Option<String>,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl MemberMessage {
    /// Convenience constructor for an attributed message.
    pub fn new(member_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            member_id: None,
            member_name: Some(member_name.into()),
            text: text.into(),
            created_at: None,
        }
    }
}
