use serde::{Deserialize, Serialize};

/// Fixed id of the single `pagedata` row.
pub const PAGE_ID: i64 = 1;

/// Page look and copy. Field names on the wire match the `pagedata` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    pub id: i64,
    pub handler_text: String,
    pub handler_description: String,
    pub avatar_url: String,
    pub bg_color: String,
    pub accent_color: String,
    pub handler_font_color: String,
    pub handler_description_font_color: String,
    pub font_family: String,
    pub footer_enabled: bool,
    pub footer_text: String,
    pub footer_text_color: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            id: PAGE_ID,
            handler_text: "Linkin".into(),
            handler_description: "Welcome to my link tree".into(),
            avatar_url: String::new(),
            bg_color: "#ffffff".into(),
            accent_color: "#007bff".into(),
            handler_font_color: "#000000".into(),
            handler_description_font_color: "#666666".into(),
            font_family: "Arial".into(),
            footer_enabled: true,
            footer_text: "Powered by Linkin".into(),
            footer_text_color: "#999999".into(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// The four fields the dashboard is allowed to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    pub handler_text: String,
    pub handler_description: String,
    pub bg_color: String,
    pub accent_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub active: bool,
    pub order_index: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialEntry {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub active: bool,
    pub order_index: i64,
}

/// Client-held session payload. Timestamps are milliseconds since the Unix epoch.
///
/// Nothing about this value is signed: whoever holds the encoded form can
/// rewrite the username or push `expires` into the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub username: String,
    pub timestamp: i64,
    pub expires: i64,
}

impl SessionToken {
    /// Lifetime of an issued session: 24 hours.
    pub const LIFETIME_MS: i64 = 24 * 60 * 60 * 1000;

    pub fn issue(username: &str, now_ms: i64) -> Self {
        Self {
            username: username.to_string(),
            timestamp: now_ms,
            expires: now_ms + Self::LIFETIME_MS,
        }
    }

    /// Same rule the admin and dashboard scripts apply in the browser.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.expires > now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_session_lasts_one_day() {
        let token = SessionToken::issue("admin", 1_700_000_000_000);
        assert_eq!(token.expires, token.timestamp + 86_400_000);
        assert!(token.is_valid_at(token.timestamp));
        assert!(token.is_valid_at(token.expires - 1));
        assert!(!token.is_valid_at(token.expires));
        assert!(!token.is_valid_at(token.expires + 1));
    }

    #[test]
    fn page_settings_use_column_names_on_the_wire() {
        let value = serde_json::to_value(PageSettings::default()).unwrap();
        assert_eq!(value["handlerText"], "Linkin");
        assert_eq!(value["bgColor"], "#ffffff");
        assert_eq!(value["footerEnabled"], true);
        assert!(value.get("created_at").is_some());
        assert!(value.get("handler_text").is_none());
    }
}
