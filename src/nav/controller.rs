//! The navigation controller
//!
//! Owns the single [`NavigationState`] of a session together with the
//! collaborator ports, and is the only thing that replaces that state.
//!
//! # Event ordering
//!
//! Input methods take `&mut self` and run to completion, including the
//! clipboard read on the paste path. A second event therefore cannot be
//! dispatched while a read is outstanding: hosts that keep receiving input
//! in the meantime must queue it and deliver it afterwards, in order.
//!
//! # Collaborator actions
//!
//! - `ReadClipboard` is awaited, bounded by a timeout, and its result folded
//!   into the state before the input method returns.
//! - Friend-service actions are started synchronously and their futures
//!   spawned on the tokio runtime. Their outcome is logged, never fed back.

use super::dispatcher::{self, Action, InputEvent};
use super::state::NavigationState;
use crate::services::{ClipboardError, ClipboardReader, FriendService, ListDataSource};
use std::time::Duration;
use tracing::{info, warn};

/// Default bound on a clipboard read
pub const DEFAULT_CLIPBOARD_TIMEOUT: Duration = Duration::from_millis(2_000);

pub struct Controller<D, C, F> {
    state: NavigationState,
    data: D,
    clipboard: C,
    friends: F,
    clipboard_timeout: Duration,
}

impl<D, C, F> Controller<D, C, F>
where
    D: ListDataSource,
    C: ClipboardReader,
    F: FriendService,
{
    /// Start a session on the main menu
    pub fn new(data: D, clipboard: C, friends: F) -> Self {
        Controller {
            state: NavigationState::new(),
            data,
            clipboard,
            friends,
            clipboard_timeout: DEFAULT_CLIPBOARD_TIMEOUT,
        }
    }

    pub fn with_clipboard_timeout(mut self, timeout: Duration) -> Self {
        self.clipboard_timeout = timeout;
        self
    }

    /// Read-only snapshot for the render layer, clamped to the current lists
    pub fn current_state(&self) -> NavigationState {
        self.state.clamped(self.data.counts())
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub async fn on_up(&mut self) -> NavigationState {
        self.handle(InputEvent::Up).await
    }

    pub async fn on_down(&mut self) -> NavigationState {
        self.handle(InputEvent::Down).await
    }

    pub async fn on_select(&mut self) -> NavigationState {
        self.handle(InputEvent::Select).await
    }

    pub async fn on_back(&mut self) -> NavigationState {
        self.handle(InputEvent::Back).await
    }

    pub async fn on_menu(&mut self) -> NavigationState {
        self.handle(InputEvent::Menu).await
    }

    /// Dispatch one event, run its action, and return the resulting state
    pub async fn handle(&mut self, event: InputEvent) -> NavigationState {
        let transition = dispatcher::dispatch(&self.state, event, &self.data);
        self.state = transition.state;

        if let Some(action) = transition.action {
            self.run_action(action).await;
        }
        self.state.clone()
    }

    async fn run_action(&mut self, action: Action) {
        match action {
            Action::ReadClipboard => {
                let read = self.read_clipboard().await;
                self.state = dispatcher::apply_paste(&self.state, read);
            }
            Action::SendRequest(code) => {
                info!(%code, "sending friend request");
                spawn_detached("send", self.friends.send_request(code));
            }
            Action::AcceptRequest(code) => {
                info!(%code, "accepting friend request");
                spawn_detached("accept", self.friends.accept_request(code));
            }
            Action::RejectRequest(code) => {
                info!(%code, "rejecting friend request");
                spawn_detached("reject", self.friends.reject_request(code));
            }
        }
    }

    async fn read_clipboard(&self) -> Result<String, ClipboardError> {
        match tokio::time::timeout(self.clipboard_timeout, self.clipboard.read_text()).await {
            Ok(read) => read,
            Err(_) => Err(ClipboardError::TimedOut {
                ms: self.clipboard_timeout.as_millis() as u64,
            }),
        }
    }
}

fn spawn_detached<Fut, E>(verb: &'static str, work: Fut)
where
    Fut: std::future::Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = work.await {
            warn!(error = %err, "friend service {} failed", verb);
        }
    });
}
