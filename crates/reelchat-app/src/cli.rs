use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for reelchat
#[derive(Parser, Debug)]
#[command(name = "reelchat")]
#[command(about = "Reelchat - talk with your favorite movie characters")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat backend (e.g., http://localhost:3000)
    /// Falls back to the BACKEND_URL environment variable
    #[arg(long, value_name = "URL", env = "REELCHAT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Directory holding local storage (default: ~/.reelchat)
    #[arg(long, value_name = "DIR", env = "REELCHAT_HOME")]
    pub storage_dir: Option<PathBuf>,

    /// Append every transcript entry to a JSONL file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with a user id and auth token
    Login {
        /// User id issued by the backend
        #[arg(long)]
        user_id: String,
        /// Bearer token used for sending messages
        #[arg(long)]
        token: String,
    },
    /// Forget the signed-in user and the current chat
    Logout,
    /// Show the current session
    Status,
    /// List suggested characters
    Characters,
    /// Start a chat with a character
    Create {
        /// Character name, or the number of a suggested character
        #[arg(required = true, num_args = 1..)]
        character: Vec<String>,
    },
    /// Send one message in the current chat and print the reply
    Send {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}
