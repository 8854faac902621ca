pub mod commands;
pub mod repl;
pub mod setup;

pub use commands::run_command;
pub use repl::run_repl_mode;
pub use setup::{build_context, init_logging, setup_from_cli, AppConfig};
