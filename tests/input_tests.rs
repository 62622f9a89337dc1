use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist::tui::input::{InputMode, Key, LineAction, LineBuffer};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn chord(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn typed(text: &str) -> LineBuffer {
    let mut buffer = LineBuffer::new();
    for c in text.chars() {
        buffer.apply(press(KeyCode::Char(c)));
    }
    buffer
}

// === InputMode ===

#[test]
fn test_input_mode_default_is_insert() {
    assert_eq!(InputMode::default(), InputMode::Insert);
    assert_eq!(InputMode::Insert.as_str(), "insert");
    assert_eq!(InputMode::Command.as_str(), "command");
}

// === Key mapping ===

#[test]
fn test_key_from_named_codes() {
    assert_eq!(Key::from(press(KeyCode::Esc)), Key::Escape);
    assert_eq!(Key::from(press(KeyCode::Up)), Key::Up);
    assert_eq!(Key::from(press(KeyCode::Down)), Key::Down);
    assert_eq!(Key::from(press(KeyCode::Left)), Key::Left);
    assert_eq!(Key::from(press(KeyCode::Right)), Key::Right);
    assert_eq!(Key::from(press(KeyCode::Enter)), Key::Enter);
    assert_eq!(Key::from(press(KeyCode::Delete)), Key::Delete);
    assert_eq!(Key::from(press(KeyCode::Backspace)), Key::Backspace);
}

#[test]
fn test_key_from_chars() {
    assert_eq!(Key::from(press(KeyCode::Char(' '))), Key::Space);
    assert_eq!(Key::from(press(KeyCode::Char('i'))), Key::Char('i'));
    assert_eq!(
        Key::from(chord(KeyCode::Char('E'), KeyModifiers::SHIFT)),
        Key::Char('E')
    );
}

#[test]
fn test_key_from_unmapped_codes() {
    assert_eq!(Key::from(press(KeyCode::Tab)), Key::Other);
    assert_eq!(Key::from(press(KeyCode::F(5))), Key::Other);
    assert_eq!(Key::from(press(KeyCode::Home)), Key::Other);
}

#[test]
fn test_ctrl_c_maps_to_escape() {
    assert_eq!(
        Key::from(chord(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Key::Escape
    );
    assert_eq!(
        Key::from(chord(KeyCode::Char('e'), KeyModifiers::CONTROL)),
        Key::Other
    );
}

// === LineBuffer ===

#[test]
fn test_typing_appends() {
    let buffer = typed("hello");

    assert_eq!(buffer.as_str(), "hello");
    assert_eq!(buffer.cursor(), 5);
}

#[test]
fn test_enter_submits() {
    let mut buffer = typed("done");

    assert_eq!(buffer.apply(press(KeyCode::Enter)), LineAction::Submit);
    assert_eq!(buffer.into_string(), "done");
}

#[test]
fn test_enter_on_empty_buffer_submits_empty_line() {
    let mut buffer = LineBuffer::new();

    assert_eq!(buffer.apply(press(KeyCode::Enter)), LineAction::Submit);
    assert!(buffer.is_empty());
}

#[test]
fn test_ctrl_c_interrupts() {
    let mut buffer = typed("abc");

    assert_eq!(
        buffer.apply(chord(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        LineAction::Interrupt
    );
    assert_eq!(buffer.as_str(), "abc");
}

#[test]
fn test_insert_in_middle() {
    let mut buffer = typed("ac");
    buffer.apply(press(KeyCode::Left));
    buffer.apply(press(KeyCode::Char('b')));

    assert_eq!(buffer.as_str(), "abc");
    assert_eq!(buffer.cursor(), 2);
}

#[test]
fn test_backspace_and_delete() {
    let mut buffer = typed("abcd");

    buffer.apply(press(KeyCode::Backspace));
    assert_eq!(buffer.as_str(), "abc");

    buffer.apply(press(KeyCode::Home));
    buffer.apply(press(KeyCode::Delete));
    assert_eq!(buffer.as_str(), "bc");
    assert_eq!(buffer.cursor(), 0);

    // Nothing before the cursor
    buffer.apply(press(KeyCode::Backspace));
    assert_eq!(buffer.as_str(), "bc");

    buffer.apply(press(KeyCode::End));
    buffer.apply(press(KeyCode::Delete));
    assert_eq!(buffer.as_str(), "bc");
}

#[test]
fn test_cursor_movement_is_clamped() {
    let mut buffer = typed("ab");

    buffer.apply(press(KeyCode::Right));
    assert_eq!(buffer.cursor(), 2);

    buffer.apply(press(KeyCode::Left));
    buffer.apply(press(KeyCode::Left));
    buffer.apply(press(KeyCode::Left));
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn test_multibyte_chars() {
    let mut buffer = typed("café");
    assert_eq!(buffer.cursor(), 4);

    buffer.apply(press(KeyCode::Backspace));
    assert_eq!(buffer.as_str(), "caf");

    buffer.apply(press(KeyCode::Char('é')));
    buffer.apply(press(KeyCode::Left));
    buffer.apply(press(KeyCode::Char('ü')));
    assert_eq!(buffer.as_str(), "cafüé");
}

#[test]
fn test_word_jumps() {
    let mut buffer = typed("fix the bug");

    buffer.apply(chord(KeyCode::Left, KeyModifiers::ALT));
    assert_eq!(buffer.cursor(), 8);

    buffer.apply(chord(KeyCode::Left, KeyModifiers::ALT));
    assert_eq!(buffer.cursor(), 4);

    buffer.apply(chord(KeyCode::Char('b'), KeyModifiers::ALT));
    assert_eq!(buffer.cursor(), 0);

    buffer.apply(chord(KeyCode::Right, KeyModifiers::ALT));
    assert_eq!(buffer.cursor(), 4);

    buffer.apply(chord(KeyCode::Char('f'), KeyModifiers::ALT));
    assert_eq!(buffer.cursor(), 8);

    // Alt chords never insert text
    assert_eq!(buffer.as_str(), "fix the bug");
}

#[test]
fn test_ctrl_u_clears() {
    let mut buffer = typed("scratch");

    assert_eq!(
        buffer.apply(chord(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        LineAction::Continue
    );
    assert!(buffer.is_empty());
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn test_escape_is_ignored_while_typing() {
    let mut buffer = typed("keep");

    assert_eq!(buffer.apply(press(KeyCode::Esc)), LineAction::Continue);
    assert_eq!(buffer.as_str(), "keep");
}
