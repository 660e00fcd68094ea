use serde::{Deserialize, Serialize};

use crate::models::{LinkEntry, SocialEntry};

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub redirect: String,
}

// -- Page data --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDataResponse {
    pub success: bool,
    /// The settings row, or `{}` when the row is missing.
    pub page_data: serde_json::Value,
    pub link_data: Vec<LinkEntry>,
    pub social_data: Vec<SocialEntry>,
}

// -- Generic envelopes --

/// `{success, message}` body shared by logout, update and every error.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Answer for any `/api/` route without a handler. Sent with status 200.
#[derive(Debug, Serialize, Deserialize)]
pub struct UnderConstructionResponse {
    pub success: bool,
    pub message: String,
    pub endpoint: String,
    pub method: String,
}
