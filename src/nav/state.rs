//! The navigation state record

use super::digit_editor::AddFriendState;
use super::registry::{self, ListCounts, ScreenKind};

/// Current screen; the add-friend screen carries its editor state so the
/// sub-state exists exactly while that screen is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Main,
    Messages,
    Friends,
    AddFriend(AddFriendState),
    FriendRequests,
    MyCode,
    Settings,
}

impl Screen {
    /// Fresh screen of the given kind
    pub fn enter(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Main => Screen::Main,
            ScreenKind::Messages => Screen::Messages,
            ScreenKind::Friends => Screen::Friends,
            ScreenKind::AddFriend => Screen::AddFriend(AddFriendState::new()),
            ScreenKind::FriendRequests => Screen::FriendRequests,
            ScreenKind::MyCode => Screen::MyCode,
            ScreenKind::Settings => Screen::Settings,
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Main => ScreenKind::Main,
            Screen::Messages => ScreenKind::Messages,
            Screen::Friends => ScreenKind::Friends,
            Screen::AddFriend(_) => ScreenKind::AddFriend,
            Screen::FriendRequests => ScreenKind::FriendRequests,
            Screen::MyCode => ScreenKind::MyCode,
            Screen::Settings => ScreenKind::Settings,
        }
    }
}

/// Screen plus cursor position.
///
/// Values are replaced wholesale on every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    screen: Screen,
    selected_index: usize,
}

impl NavigationState {
    /// Session start: main menu, first item
    pub fn new() -> Self {
        NavigationState {
            screen: Screen::Main,
            selected_index: 0,
        }
    }

    /// Land on `kind` with the cursor at the top
    pub fn at(kind: ScreenKind) -> Self {
        NavigationState {
            screen: Screen::enter(kind),
            selected_index: 0,
        }
    }

    pub(crate) fn add_friend_with(add_friend: AddFriendState) -> Self {
        NavigationState {
            screen: Screen::AddFriend(add_friend),
            selected_index: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn add_friend(&self) -> Option<&AddFriendState> {
        match &self.screen {
            Screen::AddFriend(state) => Some(state),
            _ => None,
        }
    }

    /// Same screen with the cursor moved to `index`, clamped to the screen's bounds
    pub fn with_selection(&self, index: usize, counts: ListCounts) -> Self {
        NavigationState {
            screen: self.screen.clone(),
            selected_index: registry::clamp_index(self.kind(), index, counts),
        }
    }

    /// Same screen with the cursor pulled back into range for `counts`
    pub fn clamped(&self, counts: ListCounts) -> Self {
        self.with_selection(self.selected_index, counts)
    }

    /// Cursor moved one step up (`-1`) or down (`+1`), stopping at the ends
    pub fn stepped(&self, delta: isize, counts: ListCounts) -> Self {
        let Some(max) = registry::max_index(self.kind(), counts) else {
            return self.clamped(counts);
        };
        let current = self.selected_index.min(max);
        let next = current.saturating_add_signed(delta).min(max);
        NavigationState {
            screen: self.screen.clone(),
            selected_index: next,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
