use colored::{ColoredString, Colorize};
use reelchat_types::{Message, Sender, POPULAR_CHARACTERS};

/// Speaker label for a transcript entry
pub fn label(sender: Sender, character_title: &str) -> ColoredString {
    match sender {
        Sender::User => "You:".bright_green().bold(),
        Sender::Character => {
            let name = if character_title.is_empty() { "Character" } else { character_title };
            format!("{}:", name).bright_cyan().bold()
        }
        Sender::System => "⚠️ System:".red().bold(),
    }
}

/// One transcript entry as a printable block
pub fn render_message(message: &Message, character_title: &str) -> String {
    let body = match message.sender {
        Sender::User => message.content.normal(),
        Sender::Character => message.content.white(),
        Sender::System => message.content.bright_red(),
    };
    format!("{} {}", label(message.sender, character_title), body)
}

/// Numbered character suggestions for the creation screen
pub fn render_suggestions() -> String {
    POPULAR_CHARACTERS
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  {} {}", format!("{}.", i + 1).bright_black(), name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greeting shown while the transcript is still empty
pub fn render_intro(character_title: &str) -> String {
    [
        format!("Start a conversation with {}", character_title).bold().to_string(),
        "Ask questions, discuss their movies, or imagine new adventures together!".to_string(),
        "Try asking:".bright_black().to_string(),
        "  • What was your most challenging moment?".bright_black().to_string(),
        "  • Tell me about your relationship with [other character]".bright_black().to_string(),
        "  • What would you do differently if you could?".bright_black().to_string(),
        "Enter sends; Shift+Enter or Alt+Enter adds a new line. Type /help for commands.".bright_black().to_string(),
    ]
    .join("\n")
}
