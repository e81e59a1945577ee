//! Minimal Telegram Bot API client: long polling and file download.
//!
//! Only the handful of fields the mirror needs are modelled; everything
//! else in the Bot API payloads is ignored.

use serde::Deserialize;

const API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Bot API error: {0}")]
    Api(String),

    #[error("file has no downloadable path")]
    MissingFilePath,
}

/// Every Bot API response wraps its payload in this envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub channel_post: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Unix timestamp of the post.
    pub date: i64,
    pub chat: Chat,
    pub text: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    #[serde(rename = "type")]
    pub kind: String,
}

/// One size variant of a photo. Telegram orders variants smallest first,
/// so the last entry is the one worth mirroring.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
}

#[derive(Debug, Deserialize)]
struct File {
    file_path: Option<String>,
}

/// Thin HTTP client over the Bot API methods the mirror uses.
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        // Request timeout sits above the long-poll window.
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(40))
            .build()
            .expect("Failed to build HTTP client");
        Self { http, token: token.to_string() }
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T, TelegramError> {
        let url = format!("{API_BASE}/bot{}/{method}", self.token);
        let envelope: ApiEnvelope<T> =
            self.http.get(url).query(query).send().await?.json().await?;
        if !envelope.ok {
            return Err(TelegramError::Api(
                envelope.description.unwrap_or_else(|| "unknown error".into()),
            ));
        }
        envelope
            .result
            .ok_or_else(|| TelegramError::Api("empty result".into()))
    }

    /// Long-poll for channel updates past `offset`.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &[
                ("offset", offset.to_string()),
                ("timeout", timeout_secs.to_string()),
                ("allowed_updates", r#"["channel_post"]"#.to_string()),
            ],
        )
        .await
    }

    /// Download a file's bytes by `file_id`.
    pub async fn download_file(&self, file_id: &str) -> Result<Vec<u8>, TelegramError> {
        let file: File = self.call("getFile", &[("file_id", file_id.to_string())]).await?;
        let path = file.file_path.ok_or(TelegramError::MissingFilePath)?;
        let url = format!("{API_BASE}/file/bot{}/{path}", self.token);
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_payload_deserializes() {
        let raw = r##"{
            "update_id": 42,
            "channel_post": {
                "message_id": 7,
                "date": 1717400000,
                "chat": {"id": -100123, "type": "channel", "title": "Новости"},
                "caption": "#на_сайт\nЗаголовок",
                "photo": [
                    {"file_id": "small", "file_unique_id": "s", "width": 90, "height": 60},
                    {"file_id": "big", "file_unique_id": "b", "width": 1280, "height": 853}
                ]
            }
        }"##;

        let update: Update = serde_json::from_str(raw).unwrap();
        assert_eq!(update.update_id, 42);
        let post = update.channel_post.unwrap();
        assert_eq!(post.chat.kind, "channel");
        assert_eq!(post.text, None);
        assert_eq!(post.caption.as_deref(), Some("#на_сайт\nЗаголовок"));
        // Variants stay in API order, largest last.
        assert_eq!(post.photo.last().unwrap().file_id, "big");
    }

    #[test]
    fn error_envelope_surfaces_description() {
        let raw = r#"{"ok": false, "description": "Unauthorized"}"#;
        let envelope: ApiEnvelope<Vec<Update>> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.description.as_deref(), Some("Unauthorized"));
    }
}
