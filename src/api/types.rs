//! Request and response types for the sync API.
//!
//! Task records, session payloads and statistics are server-defined JSON
//! and travel as `serde_json::Value`; only the auth exchange has a shape
//! this client depends on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`. `login_id` may be a username or email.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
///
/// The server may return more fields than these; they are kept so callers
/// can render them, but only `token` and `username` are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /BlockedSites`.
#[derive(Debug, Clone, Serialize)]
pub struct BlockedSiteRequest {
    pub site: String,
}

/// Body of `POST /FocusSessions`.
#[derive(Debug, Clone, Serialize)]
pub struct FocusSessionRequest {
    pub goals: String,
}
