use anyhow::Result;
use chrono::Local;
use reelchat_types::Message;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 Local time
    sender: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<&'a str>,
}

/// Appends transcript entries to a JSONL file, one line per message.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(logs_dir: &Path) -> Result<Self> {
        fs::create_dir_all(logs_dir).await?;

        let filename = format!("reelchat-{}.jsonl", Local::now().format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self { file_path, file: Some(file) })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single transcript entry.
    pub async fn log(&mut self, message: &Message, chat_id: Option<&str>, character: Option<&str>) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            sender: message.sender.as_str(),
            content: &message.content,
            chat_id: chat_id.filter(|s| !s.is_empty()),
            character: character.filter(|s| !s.is_empty()),
        };
        if let Some(file) = &mut self.file {
            let json = match serde_json::to_string(&entry) {
                Ok(json) => json,
                Err(e) => {
                    log::warn!("transcript entry could not be serialized: {}", e);
                    return;
                }
            };
            if let Err(e) = file.write_all(json.as_bytes()).await {
                log::warn!("transcript log write failed: {}", e);
            } else if let Err(e) = file.write_all(b"\n").await {
                log::warn!("transcript log write failed: {}", e);
            } else if let Err(e) = file.flush().await {
                log::warn!("transcript log flush failed: {}", e);
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = file.sync_all().await {
                log::warn!("transcript log sync failed: {}", e);
            }
        }
    }
}
