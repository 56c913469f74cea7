//! Hexadecimal code entry for the add-friend screen
//!
//! The editor is a small state machine nested inside the ADD_FRIEND screen.
//! It starts in [`AddFriendMode::Choosing`], where the user picks between
//! pasting a code and typing one digit at a time. Every operation returns a
//! fresh [`AddFriendState`]; nothing is edited in place.

use super::dispatcher::InputEvent;
use super::hex::{HexCode, CODE_LEN};

/// Last digit position
pub const LAST_DIGIT: usize = CODE_LEN - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFriendMode {
    /// Picking paste or manual entry
    Choosing,
    /// Typing digits one at a time
    Manual,
    /// Reviewing a code read from the clipboard
    PasteResult,
}

/// The two entry methods offered while choosing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMethod {
    Paste,
    Manual,
}

impl AddMethod {
    fn toggled(self) -> Self {
        match self {
            AddMethod::Paste => AddMethod::Manual,
            AddMethod::Manual => AddMethod::Paste,
        }
    }
}

/// Sub-state carried by the ADD_FRIEND screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendState {
    mode: AddFriendMode,
    digits: HexCode,
    digit_index: usize,
    method: AddMethod,
    paste_error: bool,
}

/// Result of feeding an input event to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Stay on the screen with this state
    Stay(AddFriendState),
    /// Stay with this state and read the clipboard before going further
    ReadClipboard(AddFriendState),
    /// The code is complete; send it and leave the screen
    Submit(HexCode),
    /// The editor has no rule for this event; the screen-level rules apply
    Unhandled,
}

impl AddFriendState {
    pub fn new() -> Self {
        AddFriendState {
            mode: AddFriendMode::Choosing,
            digits: HexCode::ZERO,
            digit_index: 0,
            method: AddMethod::Paste,
            paste_error: false,
        }
    }

    pub fn mode(&self) -> AddFriendMode {
        self.mode
    }

    pub fn digits(&self) -> HexCode {
        self.digits
    }

    pub fn digit_index(&self) -> usize {
        self.digit_index
    }

    pub fn method(&self) -> AddMethod {
        self.method
    }

    pub fn paste_error(&self) -> bool {
        self.paste_error
    }

    /// Route one input event through the editor.
    ///
    /// Menu and the reserved left/right events are never handled here.
    pub fn handle(&self, event: InputEvent) -> EditorOutcome {
        match self.mode {
            AddFriendMode::Choosing => self.handle_choosing(event),
            AddFriendMode::Manual | AddFriendMode::PasteResult => self.handle_editing(event),
        }
    }

    fn handle_choosing(&self, event: InputEvent) -> EditorOutcome {
        match event {
            InputEvent::Up | InputEvent::Down => EditorOutcome::Stay(AddFriendState {
                method: self.method.toggled(),
                paste_error: false,
                ..self.clone()
            }),
            InputEvent::Select => match self.method {
                AddMethod::Paste => EditorOutcome::ReadClipboard(self.clone()),
                AddMethod::Manual => EditorOutcome::Stay(AddFriendState {
                    mode: AddFriendMode::Manual,
                    digits: HexCode::ZERO,
                    digit_index: 0,
                    paste_error: false,
                    ..self.clone()
                }),
            },
            InputEvent::Back | InputEvent::Menu | InputEvent::Left | InputEvent::Right => {
                EditorOutcome::Unhandled
            }
        }
    }

    fn handle_editing(&self, event: InputEvent) -> EditorOutcome {
        match event {
            InputEvent::Up => EditorOutcome::Stay(self.with_cycled_digit(1)),
            InputEvent::Down => EditorOutcome::Stay(self.with_cycled_digit(-1)),
            InputEvent::Select if self.digit_index >= LAST_DIGIT => {
                EditorOutcome::Submit(self.digits)
            }
            InputEvent::Select => EditorOutcome::Stay(AddFriendState {
                digit_index: self.digit_index + 1,
                ..self.clone()
            }),
            InputEvent::Back => EditorOutcome::Stay(AddFriendState {
                digit_index: self.digit_index.saturating_sub(1),
                ..self.clone()
            }),
            InputEvent::Menu | InputEvent::Left | InputEvent::Right => EditorOutcome::Unhandled,
        }
    }

    fn with_cycled_digit(&self, delta: i8) -> Self {
        AddFriendState {
            digits: self.digits.cycled(self.digit_index, delta),
            ..self.clone()
        }
    }

    /// Apply a successfully validated clipboard code
    pub fn pasted(&self, code: HexCode) -> Self {
        AddFriendState {
            mode: AddFriendMode::PasteResult,
            digits: code,
            digit_index: LAST_DIGIT,
            paste_error: false,
            ..self.clone()
        }
    }

    /// Flag a failed or malformed clipboard read; the chooser stays open
    pub fn paste_failed(&self) -> Self {
        AddFriendState {
            mode: AddFriendMode::Choosing,
            paste_error: true,
            ..self.clone()
        }
    }
}

impl Default for AddFriendState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(outcome: EditorOutcome) -> AddFriendState {
        match outcome {
            EditorOutcome::Stay(state) => state,
            other => panic!("expected Stay, got {:?}", other),
        }
    }

    fn manual() -> AddFriendState {
        let chooser = stay(AddFriendState::new().handle(InputEvent::Down));
        assert_eq!(chooser.method(), AddMethod::Manual);
        stay(chooser.handle(InputEvent::Select))
    }

    #[test]
    fn test_initial_state() {
        let state = AddFriendState::new();
        assert_eq!(state.mode(), AddFriendMode::Choosing);
        assert_eq!(state.digits().to_string(), "00000000");
        assert_eq!(state.digit_index(), 0);
        assert_eq!(state.method(), AddMethod::Paste);
        assert!(!state.paste_error());
    }

    #[test]
    fn test_toggle_clears_paste_error() {
        let failed = AddFriendState::new().paste_failed();
        assert!(failed.paste_error());
        let toggled = stay(failed.handle(InputEvent::Up));
        assert_eq!(toggled.method(), AddMethod::Manual);
        assert!(!toggled.paste_error());
    }

    #[test]
    fn test_select_paste_requests_clipboard() {
        let state = AddFriendState::new();
        assert_eq!(
            state.handle(InputEvent::Select),
            EditorOutcome::ReadClipboard(state.clone())
        );
    }

    #[test]
    fn test_sixteen_ups_wrap_to_zero() {
        let mut state = manual();
        for _ in 0..16 {
            state = stay(state.handle(InputEvent::Up));
        }
        assert_eq!(state.digits(), HexCode::ZERO);
    }

    #[test]
    fn test_down_from_zero_wraps_to_f() {
        let state = stay(manual().handle(InputEvent::Down));
        assert_eq!(state.digits().digit(0), Some('F'));
    }

    #[test]
    fn test_select_advances_then_submits() {
        let mut state = manual();
        for expected in 1..=LAST_DIGIT {
            state = stay(state.handle(InputEvent::Select));
            assert_eq!(state.digit_index(), expected);
        }
        assert_eq!(
            state.handle(InputEvent::Select),
            EditorOutcome::Submit(HexCode::ZERO)
        );
    }

    #[test]
    fn test_back_at_first_digit_is_noop() {
        let state = manual();
        assert_eq!(stay(state.handle(InputEvent::Back)), state);
    }

    #[test]
    fn test_back_in_chooser_is_unhandled() {
        assert_eq!(
            AddFriendState::new().handle(InputEvent::Back),
            EditorOutcome::Unhandled
        );
    }

    #[test]
    fn test_pasted_code_submits_on_select() {
        let code = HexCode::parse("CAFEF00D").unwrap();
        let state = AddFriendState::new().pasted(code);
        assert_eq!(state.mode(), AddFriendMode::PasteResult);
        assert_eq!(state.digit_index(), LAST_DIGIT);
        assert_eq!(state.handle(InputEvent::Select), EditorOutcome::Submit(code));
    }
}
