use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use reelchat_api::{ChatBackend, HttpBackend};
use reelchat_logging::get_app_dir;

use crate::cli::Cli;
use crate::context::AppContext;
use crate::storage::LocalStore;

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: Option<String>,
    pub app_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
}

/// Route `log` output through env_logger.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default
/// is warnings only.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    // Precedence: --backend-url / REELCHAT_BACKEND_URL > BACKEND_URL
    let backend_url = cli
        .backend_url
        .clone()
        .or_else(|| env::var("BACKEND_URL").ok())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    if backend_url.is_none() {
        eprintln!(
            "{} No backend URL configured. Set --backend-url or REELCHAT_BACKEND_URL.",
            "⚠️".yellow()
        );
    }

    let app_dir = get_app_dir(cli.storage_dir.as_deref()).context("Failed to prepare app directory")?;

    Ok(AppConfig {
        backend_url,
        app_dir,
        log_dir: cli.log_dir.clone(),
        verbose: cli.verbose,
    })
}

/// Open local storage and wire up the HTTP backend
pub fn build_context(config: &AppConfig) -> Result<AppContext> {
    let storage = LocalStore::open(&config.app_dir)?;

    let backend = config.backend_url.as_deref().map(|url| {
        log::debug!("using backend {}", url);
        Arc::new(HttpBackend::new(url).with_verbose(config.verbose)) as Arc<dyn ChatBackend>
    });

    Ok(AppContext::new(storage, backend))
}
