use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use reelchat_logging::ConversationLogger;
use reelchat_types::Sender;

use crate::app::AppConfig;
use crate::context::AppContext;
use crate::input::bind_keys;
use crate::navigation::Route;
use crate::render::{render_intro, render_message, render_suggestions};
use crate::views::chat::{ChatView, SendOutcome};
use crate::views::create::CreateChatView;
use crate::views::login::{login, logout};

/// What the REPL should do after a screen returns
enum Flow {
    Continue,
    Exit,
}

/// Read one line; Ctrl-C and Ctrl-D end the session
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &AppConfig, ctx: &mut AppContext) -> Result<()> {
    println!("{}", "🎬 Reelchat - Movie Character AI".bright_cyan().bold());
    println!("{}", "Have conversations with your favorite movie characters!".bright_black());
    println!("{}", "Type '/exit' to quit at any time.\n".bright_black());

    let mut rl = DefaultEditor::new()?;
    bind_keys(&mut rl);

    let mut logger = match &config.log_dir {
        Some(dir) => match ConversationLogger::new(dir).await {
            Ok(l) => {
                println!("{}", format!("📝 Transcript log: {}", l.file_path().display()).bright_blue());
                Some(l)
            }
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        },
        None => None,
    };

    loop {
        let route = ctx.navigator.navigate_guarded(ctx.navigator.current(), &ctx.session);

        let flow = match route {
            Route::Login => login_screen(&mut rl, ctx)?,
            Route::Create => create_screen(&mut rl, ctx).await?,
            Route::Chat => chat_screen(&mut rl, ctx, logger.as_mut()).await?,
        };

        if let Flow::Exit = flow {
            break;
        }
    }

    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }
    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}

fn login_screen(rl: &mut DefaultEditor, ctx: &mut AppContext) -> Result<Flow> {
    println!("{}", "🔑 Sign in".bold());

    let Some(user_id) = read_line(rl, &format!("{} ", "User id:".bright_green()))? else {
        return Ok(Flow::Exit);
    };
    if user_id.trim() == "/exit" {
        return Ok(Flow::Exit);
    }
    let Some(token) = read_line(rl, &format!("{} ", "Token:".bright_green()))? else {
        return Ok(Flow::Exit);
    };

    match login(ctx, &user_id, &token) {
        Ok(()) => println!("{} Signed in as {}\n", "✓".green(), ctx.session.user_id().bold()),
        Err(e) => eprintln!("{} {}\n", "✗".red(), e),
    }
    Ok(Flow::Continue)
}

async fn create_screen(rl: &mut DefaultEditor, ctx: &mut AppContext) -> Result<Flow> {
    println!("{}", "Who would you like to chat with?".bold());
    println!("{}", "Select a character below or enter your own favorite movie personality".bright_black());
    println!("{}\n", render_suggestions());

    let mut view = CreateChatView::new();

    loop {
        let Some(line) = read_line(rl, &format!("{} ", "Character:".bright_green()))? else {
            return Ok(Flow::Exit);
        };

        match line.trim() {
            "/exit" | "/quit" => return Ok(Flow::Exit),
            "/logout" => {
                logout(ctx)?;
                return Ok(Flow::Continue);
            }
            "" => continue,
            input => view.choose(input),
        }

        if !view.can_submit() {
            continue;
        }

        println!("{}", format!("Starting conversation with {}...", view.character().trim()).bright_black());
        match view.create_chat(ctx).await {
            Ok(()) => {
                println!();
                return Ok(Flow::Continue);
            }
            Err(err) => {
                if let Some(text) = view.error() {
                    eprintln!("{} {}", "✗".red(), text.red());
                }
                if err.requires_login() {
                    return Ok(Flow::Continue);
                }
            }
        }
    }
}

async fn chat_screen(
    rl: &mut DefaultEditor,
    ctx: &mut AppContext,
    mut logger: Option<&mut ConversationLogger>,
) -> Result<Flow> {
    let title = ctx.session.character_title().to_string();
    let mut view = ChatView::new();

    println!("{}", format!("🎭 {}", title).bright_cyan().bold());
    println!("{}\n", render_intro(&title));

    loop {
        let Some(line) = read_line(rl, &format!("{} ", "You:".bright_green().bold()))? else {
            return Ok(Flow::Exit);
        };

        match line.trim() {
            "/exit" | "/quit" => return Ok(Flow::Exit),
            "/new" => {
                ctx.navigator.navigate(Route::Create);
                return Ok(Flow::Continue);
            }
            "/logout" => {
                logout(ctx)?;
                return Ok(Flow::Continue);
            }
            "/help" => {
                println!("{}", "/new      pick another character".bright_black());
                println!("{}", "/logout   sign out".bright_black());
                println!("{}", "/exit     quit".bright_black());
                continue;
            }
            _ => {}
        }

        if !view.can_send(&line) {
            continue;
        }

        let before = view.transcript().len();
        println!("{}", format!("{} is typing...", title).bright_black());
        let outcome = view.send_message(ctx, &line).await;

        for message in &view.transcript()[before..] {
            if let Some(logger) = logger.as_deref_mut() {
                logger.log(message, Some(ctx.session.chat_id()), Some(title.as_str())).await;
            }
            if message.sender != Sender::User {
                println!("{}\n", render_message(message, &title));
            }
        }

        // A missing token sends us back to login
        if let SendOutcome::Failed(_) = outcome {
            if ctx.navigator.current() != Route::Chat {
                return Ok(Flow::Continue);
            }
        }
    }
}
