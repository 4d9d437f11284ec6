//! Wire schemas shared between hearsayd and its clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for GET /v1/ask
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Response for GET /v1/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Response for GET /v1/debug/members
///
/// BTreeMap so the listing is stable across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCountsResponse {
    pub members: BTreeMap<String, usize>,
}
