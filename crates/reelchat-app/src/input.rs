use rustyline::{Cmd, DefaultEditor, EventHandler, KeyCode, KeyEvent, Modifiers};

/// A key as seen by the message input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false, alt: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Send,
    InsertNewline,
    Edit,
}

/// Enter sends; Shift+Enter or Alt+Enter breaks the line.
///
/// Alt+Enter is accepted too since most terminals report Shift+Enter as
/// a plain Enter.
pub fn key_action(press: KeyPress) -> KeyAction {
    match press.key {
        Key::Enter if press.shift || press.alt => KeyAction::InsertNewline,
        Key::Enter => KeyAction::Send,
        Key::Char(_) | Key::Other => KeyAction::Edit,
    }
}

/// Install the newline bindings in a rustyline editor
pub fn bind_keys(editor: &mut DefaultEditor) {
    for modifiers in [Modifiers::SHIFT, Modifiers::ALT] {
        let press = KeyPress {
            key: Key::Enter,
            shift: modifiers.contains(Modifiers::SHIFT),
            alt: modifiers.contains(Modifiers::ALT),
        };
        if key_action(press) == KeyAction::InsertNewline {
            editor.bind_sequence(
                KeyEvent(KeyCode::Enter, modifiers),
                EventHandler::Simple(Cmd::Newline),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_enter_sends() {
        assert_eq!(key_action(KeyPress::plain(Key::Enter)), KeyAction::Send);
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let press = KeyPress { key: Key::Enter, shift: true, alt: false };
        assert_eq!(key_action(press), KeyAction::InsertNewline);

        let press = KeyPress { key: Key::Enter, shift: false, alt: true };
        assert_eq!(key_action(press), KeyAction::InsertNewline);
    }

    #[test]
    fn test_other_keys_edit() {
        assert_eq!(key_action(KeyPress::plain(Key::Char('a'))), KeyAction::Edit);
        let press = KeyPress { key: Key::Char('A'), shift: true, alt: false };
        assert_eq!(key_action(press), KeyAction::Edit);
    }
}
