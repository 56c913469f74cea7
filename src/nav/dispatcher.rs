//! Event dispatch
//!
//! Pure transition functions: `(state, event, lists) -> (state, action)`.
//! Nothing here performs I/O. Collaborator work is described by an
//! [`Action`] and carried out by the [`Controller`](super::Controller).
//!
//! Rules are tried from most to least specific:
//!
//! 1. Left/right are reserved and change nothing.
//! 2. Screen-specific rules (main menu, friends list, add-friend editor,
//!    request list).
//! 3. Back on any screen but the main menu returns to the main menu.
//! 4. Menu on any screen returns to the main menu.

use super::digit_editor::EditorOutcome;
use super::errors::PasteError;
use super::hex::HexCode;
use super::registry::{self, FriendsEntry, ListCounts, ScreenKind, MAIN_MENU};
use super::state::{NavigationState, Screen};
use crate::services::{ClipboardError, ListDataSource};
use tracing::{debug, warn};

/// The five pager buttons plus the two reserved directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Up,
    Down,
    Select,
    Back,
    Menu,
    Left,
    Right,
}

/// Collaborator work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the clipboard and feed the result to [`apply_paste`]
    ReadClipboard,
    SendRequest(HexCode),
    AcceptRequest(HexCode),
    RejectRequest(HexCode),
}

/// Next state plus at most one collaborator action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    pub action: Option<Action>,
}

impl Transition {
    fn to(state: NavigationState) -> Self {
        Transition {
            state,
            action: None,
        }
    }

    fn with(state: NavigationState, action: Action) -> Self {
        Transition {
            state,
            action: Some(action),
        }
    }
}

pub fn on_up<D: ListDataSource + ?Sized>(state: &NavigationState, data: &D) -> Transition {
    dispatch(state, InputEvent::Up, data)
}

pub fn on_down<D: ListDataSource + ?Sized>(state: &NavigationState, data: &D) -> Transition {
    dispatch(state, InputEvent::Down, data)
}

pub fn on_select<D: ListDataSource + ?Sized>(state: &NavigationState, data: &D) -> Transition {
    dispatch(state, InputEvent::Select, data)
}

pub fn on_back<D: ListDataSource + ?Sized>(state: &NavigationState, data: &D) -> Transition {
    dispatch(state, InputEvent::Back, data)
}

pub fn on_menu<D: ListDataSource + ?Sized>(state: &NavigationState, data: &D) -> Transition {
    dispatch(state, InputEvent::Menu, data)
}

/// Interpret one input event against the current state
pub fn dispatch<D: ListDataSource + ?Sized>(
    state: &NavigationState,
    event: InputEvent,
    data: &D,
) -> Transition {
    let counts = data.counts();
    // Lists may have shrunk since the last event
    let state = state.clamped(counts);

    let transition = match event {
        InputEvent::Left | InputEvent::Right => Transition::to(state.clone()),
        _ => screen_rule(&state, event, counts, data)
            .unwrap_or_else(|| fallback_rule(&state, event)),
    };

    debug!(
        ?event,
        from = ?state.kind(),
        to = ?transition.state.kind(),
        selected = transition.state.selected_index(),
        action = ?transition.action,
        "dispatch"
    );
    transition
}

/// Screen-specific handling; `None` lets the generic back/menu rules apply
fn screen_rule<D: ListDataSource + ?Sized>(
    state: &NavigationState,
    event: InputEvent,
    counts: ListCounts,
    data: &D,
) -> Option<Transition> {
    match state.screen() {
        Screen::Main => main_rule(state, event, counts),
        Screen::Friends => friends_rule(state, event, counts),
        Screen::AddFriend(add_friend) => {
            if event == InputEvent::Menu {
                return None;
            }
            match add_friend.handle(event) {
                EditorOutcome::Stay(next) => {
                    Some(Transition::to(NavigationState::add_friend_with(next)))
                }
                EditorOutcome::ReadClipboard(next) => Some(Transition::with(
                    NavigationState::add_friend_with(next),
                    Action::ReadClipboard,
                )),
                EditorOutcome::Submit(code) => Some(Transition::with(
                    NavigationState::at(ScreenKind::Friends),
                    Action::SendRequest(code),
                )),
                EditorOutcome::Unhandled => None,
            }
        }
        Screen::FriendRequests => requests_rule(state, event, counts, data),
        Screen::Messages | Screen::MyCode | Screen::Settings => list_rule(state, event, counts),
    }
}

/// Up/down movement shared by every list screen
fn list_rule(state: &NavigationState, event: InputEvent, counts: ListCounts) -> Option<Transition> {
    match event {
        InputEvent::Up => Some(Transition::to(state.stepped(-1, counts))),
        InputEvent::Down => Some(Transition::to(state.stepped(1, counts))),
        _ => None,
    }
}

fn main_rule(state: &NavigationState, event: InputEvent, counts: ListCounts) -> Option<Transition> {
    match event {
        InputEvent::Select => {
            let item = MAIN_MENU.get(state.selected_index())?;
            Some(Transition::to(NavigationState::at(item.target)))
        }
        // Already at the root
        InputEvent::Back | InputEvent::Menu => Some(Transition::to(state.clone())),
        _ => list_rule(state, event, counts),
    }
}

fn friends_rule(
    state: &NavigationState,
    event: InputEvent,
    counts: ListCounts,
) -> Option<Transition> {
    if event != InputEvent::Select {
        return list_rule(state, event, counts);
    }
    match registry::friends_entry(state.selected_index(), counts)? {
        FriendsEntry::AddFriend => Some(Transition::to(NavigationState::at(ScreenKind::AddFriend))),
        FriendsEntry::Requests => Some(Transition::to(NavigationState::at(
            ScreenKind::FriendRequests,
        ))),
        FriendsEntry::Friend(index) => {
            debug!(friend = index, "friend entry selected; no action bound");
            Some(Transition::to(state.clone()))
        }
    }
}

fn requests_rule<D: ListDataSource + ?Sized>(
    state: &NavigationState,
    event: InputEvent,
    counts: ListCounts,
    data: &D,
) -> Option<Transition> {
    let make_action: fn(HexCode) -> Action = match event {
        InputEvent::Select => Action::AcceptRequest,
        InputEvent::Back => Action::RejectRequest,
        _ => return list_rule(state, event, counts),
    };
    // With nothing pending, back falls through to the main menu
    let request = data.pending_requests().into_iter().nth(state.selected_index());
    match (request, event) {
        (Some(request), _) => Some(Transition::with(state.clone(), make_action(request.code))),
        (None, InputEvent::Select) => Some(Transition::to(state.clone())),
        (None, _) => None,
    }
}

fn fallback_rule(state: &NavigationState, event: InputEvent) -> Transition {
    match event {
        InputEvent::Back | InputEvent::Menu => {
            Transition::to(NavigationState::at(ScreenKind::Main))
        }
        _ => Transition::to(state.clone()),
    }
}

/// Fold a finished clipboard read into the add-friend chooser.
///
/// Valid codes move the editor to review mode with the cursor on the last
/// digit; anything else raises the paste error flag. States that are not
/// waiting on a paste come back unchanged.
pub fn apply_paste(
    state: &NavigationState,
    read: Result<String, ClipboardError>,
) -> NavigationState {
    let Some(add_friend) = state.add_friend() else {
        warn!(screen = ?state.kind(), "clipboard result arrived off the add-friend screen");
        return state.clone();
    };

    let parsed = read
        .map_err(PasteError::from)
        .and_then(|text| HexCode::parse(&text).map_err(PasteError::from));

    let next = match parsed {
        Ok(code) => {
            debug!(%code, "pasted friend code");
            add_friend.pasted(code)
        }
        Err(err) => {
            warn!(error = %err, "paste rejected");
            add_friend.paste_failed()
        }
    };
    NavigationState::add_friend_with(next)
}
