// Logging module - transcript and request logging
pub mod conversation_logger;
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use conversation_logger::ConversationLogger;
pub use request_logger::{log_request, log_response, mask_token};

/// Name of the per-user application directory under `$HOME`
pub const APP_DIR_NAME: &str = ".reelchat";

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the application directory.
///
/// `override_dir` wins when given; otherwise `~/.reelchat` is used.
pub fn get_app_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let app_dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let home_dir = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .context("Failed to get home directory")?;
            PathBuf::from(home_dir).join(APP_DIR_NAME)
        }
    };

    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir)
            .with_context(|| format!("Failed to create app directory {}", app_dir.display()))?;
    }

    Ok(app_dir)
}

/// Get or create the logs directory inside the application directory
pub fn get_logs_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let logs_dir = get_app_dir(override_dir)?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate() {
        assert_eq!(safe_truncate("short", 10), "short");
        assert_eq!(safe_truncate("abcdefghij", 6), "abc...");
        assert_eq!(safe_truncate("héllo wörld", 8), "héllo...");
        assert_eq!(safe_truncate("abc", 2), "...");
    }

    #[test]
    fn test_get_logs_dir_creates_directories() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("nested");

        let logs = get_logs_dir(Some(&root)).unwrap();

        assert!(logs.is_dir());
        assert_eq!(logs, root.join("logs"));
    }
}
