use anyhow::{anyhow, bail, Result};
use colored::Colorize;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::navigation::{guard, Route};
use crate::render::{render_message, render_suggestions};
use crate::views::chat::{ChatView, SendOutcome};
use crate::views::create::CreateChatView;
use crate::views::login::{login, logout};

/// Execute a one-shot subcommand
pub async fn run_command(command: Commands, ctx: &mut AppContext) -> Result<()> {
    match command {
        Commands::Login { user_id, token } => {
            login(ctx, &user_id, &token)?;
            println!("{} Signed in as {}", "✓".green(), ctx.session.user_id().bold());
        }
        Commands::Logout => {
            logout(ctx)?;
            println!("{} Signed out", "✓".green());
        }
        Commands::Status => {
            println!("{}", ctx.session.summary());
            println!(
                "token:     {}",
                if ctx.auth_token().is_ok() { "stored" } else { "(none)" }
            );
            println!(
                "backend:   {}",
                if ctx.has_backend() { "configured" } else { "(not configured)" }
            );
        }
        Commands::Characters => {
            println!("{}", render_suggestions());
        }
        Commands::Create { character } => {
            let mut view = CreateChatView::new();
            view.choose(&character.join(" "));

            if let Err(err) = view.create_chat(ctx).await {
                let text = view.error().map(str::to_string).unwrap_or_else(|| err.to_string());
                if err.requires_login() {
                    bail!("{} Run `reelchat-cli login` first.", text);
                }
                bail!("{}", text);
            }

            println!(
                "{} Chat with {} started ({})",
                "✓".green(),
                ctx.session.character_title().bold(),
                ctx.session.chat_id().bright_black()
            );
        }
        Commands::Send { message } => {
            if guard(Route::Chat, &ctx.session) != Route::Chat {
                bail!("No active chat. Run `reelchat-cli create <character>` first.");
            }

            let mut view = ChatView::new();
            match view.send_message(ctx, &message.join(" ")).await {
                SendOutcome::Replied => {
                    if let Some(reply) = view.transcript().last() {
                        println!("{}", render_message(reply, ctx.session.character_title()));
                    }
                }
                SendOutcome::Failed(err) if err.requires_login() => {
                    bail!("{} Run `reelchat-cli login` to sign in.", err);
                }
                SendOutcome::Failed(err) => return Err(anyhow!(err)),
                SendOutcome::Ignored => bail!("Message is empty"),
                SendOutcome::Busy => bail!("A message is already being sent"),
            }
        }
    }

    Ok(())
}
