use anyhow::Result;
use clap::Parser;

use reelchat::{build_context, init_logging, run_command, run_repl_mode, setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app_config = setup_from_cli(&cli)?;
    let mut ctx = build_context(&app_config)?;

    match cli.command {
        Some(command) => run_command(command, &mut ctx).await,
        None => run_repl_mode(&app_config, &mut ctx).await,
    }
}
