//! Reelchat Application Library
//!
//! Session state, navigation, and the login / creation / chat views that
//! drive the movie-character chat backend. The `reelchat-cli` binary is a
//! thin terminal front-end over this library.

// Re-export workspace crates
pub use reelchat_api::{self as api, ChatBackend, HttpBackend};
pub use reelchat_logging::{self as logging, ConversationLogger};
pub use reelchat_types::{self as types, ChatError, Message, Sender, POPULAR_CHARACTERS};

pub mod app;
pub mod cli;
pub mod context;
pub mod input;
pub mod navigation;
pub mod render;
pub mod session;
pub mod storage;
pub mod views;

pub use app::{build_context, init_logging, run_command, run_repl_mode, setup_from_cli, AppConfig};
pub use cli::{Cli, Commands};
pub use context::AppContext;
pub use navigation::{guard, Navigator, Route};
pub use session::SessionStore;
pub use storage::LocalStore;
pub use views::chat::{ChatView, PendingTurn, Phase, SendOutcome, TurnOutcome, TurnStart};
pub use views::create::CreateChatView;
pub use views::login::{login, logout};
