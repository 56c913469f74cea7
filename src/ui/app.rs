//! Main TUI application state and event loop

use crate::nav::{Controller, HexCode, InputEvent, NavigationState, ScreenKind};
use crate::services::{ClipboardReader, FriendService, ListDataSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

/// What a key press means to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(InputEvent),
    Quit,
}

/// Map a terminal key to a pager button
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Input(InputEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Input(InputEvent::Down),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Input(InputEvent::Select),
        KeyCode::Backspace | KeyCode::Esc => KeyAction::Input(InputEvent::Back),
        KeyCode::Tab | KeyCode::Char('m') | KeyCode::Char('M') => {
            KeyAction::Input(InputEvent::Menu)
        }
        KeyCode::Left => KeyAction::Input(InputEvent::Left),
        KeyCode::Right => KeyAction::Input(InputEvent::Right),
        _ => return None,
    };
    Some(action)
}

/// The main application state
pub struct App<D, C, F> {
    /// Navigation controller; the only writer of the session state
    pub controller: Controller<D, C, F>,

    /// Own friend code for the MY CODE screen
    pub my_code: Option<HexCode>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<D, C, F> App<D, C, F>
where
    D: ListDataSource,
    C: ClipboardReader,
    F: FriendService,
{
    pub fn new(controller: Controller<D, C, F>, my_code: Option<HexCode>) -> Self {
        App {
            controller,
            my_code,
            should_quit: false,
            status_message: String::from("Ready"),
        }
    }

    /// Run the TUI application.
    ///
    /// Keys are read one at a time and each is fully handled, clipboard read
    /// included, before the next is taken off the terminal's queue.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        tick: Duration,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so list changes from spawned friend actions get redrawn
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key).await;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one key press
    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(action) = key_action(key) else {
            return;
        };
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Input(event) => {
                let before = self.controller.current_state();
                let after = self.controller.handle(event).await;
                debug!(?event, code = ?key.code, "key handled");
                self.status_message = status_for(&before, &after);
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let state = self.controller.current_state();
        super::panes::render_screen(
            frame,
            chunks[0],
            &super::panes::ScreenRenderData {
                state: &state,
                data: self.controller.data(),
                my_code: self.my_code,
            },
        );
        super::panes::render_status_bar(frame, chunks[1], &self.status_message, &state);
    }
}

/// One-line summary of what the last event did
fn status_for(before: &NavigationState, after: &NavigationState) -> String {
    match (before.add_friend(), after.kind()) {
        // Leaving the editor for the friends list only happens on submit
        (Some(add_friend), ScreenKind::Friends) => {
            format!("Request queued for {}", add_friend.digits())
        }
        _ if after.add_friend().is_some_and(|a| a.paste_error()) => "Paste failed".to_string(),
        _ if before.kind() != after.kind() => after.kind().title().to_string(),
        _ => String::new(),
    }
}
