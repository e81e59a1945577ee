//! The channel-post mirroring loop: poll, classify, download, insert.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use portal_core::channel_post::{self, NewsDraft};
use portal_db::models::news::CreateNews;
use portal_db::repositories::NewsRepo;
use portal_db::DbPool;

use crate::telegram::{Message, TelegramClient, TelegramError};

/// Long-poll window for `getUpdates`.
const POLL_TIMEOUT_SECS: u64 = 25;

/// Pause after a transport failure before polling again.
const RETRY_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error(transparent)]
    Telegram(#[from] TelegramError),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Mirrors marked channel posts into the `news` table.
pub struct Mirror {
    client: TelegramClient,
    pool: DbPool,
    upload_dir: PathBuf,
}

impl Mirror {
    pub fn new(client: TelegramClient, pool: DbPool, upload_dir: PathBuf) -> Self {
        Self { client, pool, upload_dir }
    }

    /// Poll until the process is stopped. Transport failures back off and
    /// retry; a bad post is logged and skipped, never fatal.
    pub async fn run(&self) {
        let mut offset = 0;
        loop {
            let updates = match self.client.get_updates(offset, POLL_TIMEOUT_SECS).await {
                Ok(updates) => updates,
                Err(err) => {
                    tracing::warn!(error = %err, "getUpdates failed, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                let Some(post) = update.channel_post else {
                    continue;
                };
                if let Err(err) = self.mirror_post(&post).await {
                    tracing::error!(
                        message_id = post.message_id,
                        error = %err,
                        "Failed to mirror channel post"
                    );
                }
            }
        }
    }

    async fn mirror_post(&self, post: &Message) -> Result<(), MirrorError> {
        if post.chat.kind != "channel" {
            return Ok(());
        }

        let raw = channel_post::combined_text(post.text.as_deref(), post.caption.as_deref());
        let Some(NewsDraft { title, description }) = channel_post::extract_draft(&raw) else {
            tracing::debug!(message_id = post.message_id, "Post not marked for the site");
            return Ok(());
        };

        let mut img = Vec::new();
        // Telegram lists photo sizes smallest first; mirror the largest.
        if let Some(best) = post.photo.last() {
            let bytes = self.client.download_file(&best.file_id).await?;
            let file_name = format!(
                "{}_{}.jpg",
                Utc::now().timestamp_millis(),
                rand::rng().random_range(0..100_000)
            );
            tokio::fs::create_dir_all(&self.upload_dir).await?;
            tokio::fs::write(self.upload_dir.join(&file_name), &bytes).await?;
            img.push(format!("/uploads/news/{file_name}"));
        }

        let date = DateTime::from_timestamp(post.date, 0).unwrap_or_else(Utc::now);
        let input = CreateNews {
            title,
            description: Some(description),
            img,
            date: Some(date),
        };
        let created = NewsRepo::create(&self.pool, &input).await?;
        tracing::info!(id = created.id, title = %created.title, "Mirrored channel post into news");
        Ok(())
    }
}
