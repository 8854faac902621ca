//! Core types for reelchat
//!
//! Transcript messages, the wire shapes exchanged with the chat backend,
//! and the error taxonomy shared by every other crate.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod error;

pub use error::{server_message, ChatError, DEFAULT_SERVER_MESSAGE};

// ============================================================================
// Constants
// ============================================================================

/// Characters offered as suggestions on the creation screen
pub const POPULAR_CHARACTERS: [&str; 7] = [
    "Tony Stark (Iron Man)",
    "Hermione Granger",
    "Darth Vader",
    "Forrest Gump",
    "Wonder Woman",
    "Jack Sparrow",
    "Marty McFly",
];

// ============================================================================
// Transcript Types
// ============================================================================

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Character,
    System,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Character => "character",
            Sender::System => "system",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { sender: Sender::User, content: content.into() }
    }

    pub fn character(content: impl Into<String>) -> Self {
        Self { sender: Sender::Character, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self { sender: Sender::System, content: content.into() }
    }

    /// A system entry describing a failed operation
    pub fn from_error(err: &ChatError) -> Self {
        Self::system(err.to_string())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /user/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    pub user_id: String,
    pub title: String,
}

/// The identifier handed back by `POST /user/create`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChatResponse {
    pub chat_id: String,
}

impl CreateChatResponse {
    /// Locate the created chat id in a response body.
    ///
    /// Looks at `chatId`, then the nested `chat` record, then a top-level
    /// `_id` / `id`. Numeric ids are accepted and stringified.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        const NESTED: [&str; 3] = ["_id", "id", "chatId"];
        const TOP: [&str; 2] = ["_id", "id"];

        let pick = |v: &serde_json::Value, key: &str| -> Option<String> {
            match v.get(key)? {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }
        };

        let chat_id = pick(value, "chatId")
            .or_else(|| {
                let chat = value.get("chat")?;
                NESTED.iter().find_map(|key| pick(chat, key))
            })
            .or_else(|| TOP.iter().find_map(|key| pick(value, key)))?;

        Some(Self { chat_id })
    }
}

/// Body of `POST /first/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPromptRequest {
    pub chat_id: String,
    pub title: String,
    pub user_prompt: String,
}

/// Keeps string values only; null, numbers and objects become `None`
fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// One message of the chat record stored by the backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string", default)]
    pub content: Option<String>,
}

/// Chat record returned by the backend after a send
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRecord {
    #[serde(default)]
    pub messages: Vec<StoredMessage>,
}

/// Response of `POST /first/send`
#[derive(Debug, Clone, Deserialize)]
pub struct SendPromptResponse {
    pub chat: ChatRecord,
}

impl SendPromptResponse {
    /// The newest message of the record, which is the character's reply.
    /// `None` when the record is empty or its last entry has no string content.
    pub fn latest_reply(&self) -> Option<&str> {
        self.chat.messages.last().and_then(|m| m.content.as_deref())
    }
}
