use std::path::PathBuf;

/// Worker configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Telegram Bot API token (required).
    pub bot_token: String,
    /// Database connection string (required).
    pub database_url: String,
    /// Directory mirrored images are written to. Must sit under the API
    /// server's upload root so `/uploads/news/...` paths resolve.
    pub upload_dir: PathBuf,
}

impl IngestConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default        |
    /// |-------------------|----------------|
    /// | `TG_BOT_TOKEN`    | (required)     |
    /// | `DATABASE_URL`    | (required)     |
    /// | `NEWS_UPLOAD_DIR` | `uploads/news` |
    pub fn from_env() -> Self {
        let bot_token = std::env::var("TG_BOT_TOKEN").expect("TG_BOT_TOKEN must be set");
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let upload_dir = PathBuf::from(
            std::env::var("NEWS_UPLOAD_DIR").unwrap_or_else(|_| "uploads/news".into()),
        );

        Self { bot_token, database_url, upload_dir }
    }
}
