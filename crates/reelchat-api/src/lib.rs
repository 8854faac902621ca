//! # reelchat-api
//!
//! Client side of the movie-character chat backend.
//!
//! The backend exposes two endpoints:
//! - `POST /user/create` creates a chat session for a user and a character
//! - `POST /first/send` sends one user prompt (bearer-authenticated) and
//!   returns the updated chat record
//!
//! Views talk to the backend only through the [`ChatBackend`] trait, so
//! tests can substitute a fake. [`HttpBackend`] is the reqwest
//! implementation and is where failures are classified into
//! [`ChatError`] variants.
//!
//! ## Example
//!
//! ```rust,no_run
//! use reelchat_api::{ChatBackend, HttpBackend};
//! use reelchat_types::SendPromptRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reelchat_types::ChatError> {
//!     let backend = HttpBackend::new("http://localhost:3000");
//!     let reply = backend
//!         .send_prompt(
//!             &SendPromptRequest {
//!                 chat_id: "abc123".to_string(),
//!                 title: "Darth Vader".to_string(),
//!                 user_prompt: "Who is my father?".to_string(),
//!             },
//!             "my-token",
//!         )
//!         .await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reelchat_types::{ChatError, CreateChatRequest, CreateChatResponse, SendPromptRequest};

pub mod http_client;

pub use http_client::{normalize_base_url, HttpBackend, CREATE_CHAT_PATH, SEND_PROMPT_PATH};

/// Remote chat backend
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Create a chat session and return its identifier
    async fn create_chat(&self, request: &CreateChatRequest) -> Result<CreateChatResponse, ChatError>;

    /// Send one user prompt and return the character's reply
    async fn send_prompt(&self, request: &SendPromptRequest, token: &str) -> Result<String, ChatError>;
}
