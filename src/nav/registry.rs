//! Static screen knowledge: which screens exist, what the main menu offers,
//! and how far the cursor may travel on each screen.

/// Identity of a screen, without any per-screen payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Main,
    Messages,
    Friends,
    AddFriend,
    FriendRequests,
    MyCode,
    Settings,
}

impl ScreenKind {
    #[cfg(test)]
    pub(crate) const ALL: [ScreenKind; 7] = [
        ScreenKind::Main,
        ScreenKind::Messages,
        ScreenKind::Friends,
        ScreenKind::AddFriend,
        ScreenKind::FriendRequests,
        ScreenKind::MyCode,
        ScreenKind::Settings,
    ];

    /// Header text shown by the host
    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Main => "MAIN MENU",
            ScreenKind::Messages => "MESSAGES",
            ScreenKind::Friends => "FRIENDS",
            ScreenKind::AddFriend => "ADD FRIEND",
            ScreenKind::FriendRequests => "REQUESTS",
            ScreenKind::MyCode => "MY CODE",
            ScreenKind::Settings => "SETTINGS",
        }
    }
}

/// One row of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: ScreenKind,
}

pub const MAIN_MENU: [MenuItem; 4] = [
    MenuItem {
        label: "MESSAGES",
        target: ScreenKind::Messages,
    },
    MenuItem {
        label: "FRIENDS",
        target: ScreenKind::Friends,
    },
    MenuItem {
        label: "MY CODE",
        target: ScreenKind::MyCode,
    },
    MenuItem {
        label: "SETTINGS",
        target: ScreenKind::Settings,
    },
];

/// Dynamic list lengths supplied by the data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCounts {
    pub friends: usize,
    pub pending: usize,
    pub messages: usize,
}

/// What a cursor position on the FRIENDS screen points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendsEntry {
    AddFriend,
    Requests,
    /// Index into the friends list
    Friend(usize),
}

/// Number of rows on the FRIENDS screen.
///
/// The add-friend row is always present; the requests row only when
/// something is pending.
pub fn friends_entry_count(counts: ListCounts) -> usize {
    1 + usize::from(counts.pending > 0) + counts.friends
}

/// Resolve a FRIENDS cursor position to the row it designates
pub fn friends_entry(index: usize, counts: ListCounts) -> Option<FriendsEntry> {
    let has_requests = counts.pending > 0;
    match index {
        0 => Some(FriendsEntry::AddFriend),
        1 if has_requests => Some(FriendsEntry::Requests),
        _ => {
            let offset = 1 + usize::from(has_requests);
            let friend = index - offset;
            (friend < counts.friends).then_some(FriendsEntry::Friend(friend))
        }
    }
}

/// Largest valid selection index for `kind`, or `None` if the screen has
/// nothing to select.
pub fn max_index(kind: ScreenKind, counts: ListCounts) -> Option<usize> {
    let len = match kind {
        ScreenKind::Main => MAIN_MENU.len(),
        ScreenKind::Messages => counts.messages,
        ScreenKind::Friends => friends_entry_count(counts),
        ScreenKind::FriendRequests => counts.pending,
        // No list; the add-friend flow keeps its own cursors
        ScreenKind::AddFriend | ScreenKind::MyCode | ScreenKind::Settings => 1,
    };
    len.checked_sub(1)
}

/// Pull `index` back into range for `kind`; empty lists pin it at 0.
pub fn clamp_index(kind: ScreenKind, index: usize, counts: ListCounts) -> usize {
    max_index(kind, counts).map_or(0, |max| index.min(max))
}
