// Integration tests for the navigation controller

use std::future::{self, Future};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pagerlink::nav::{AddFriendMode, Controller, HexCode, InputEvent, ScreenKind};
use pagerlink::services::{
    ClipboardError, ClipboardReader, FixedClipboard, Friend, FriendService, FriendServiceError,
    ListDataSource, MemoryStore, OnlineStatus,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Send(HexCode),
    Accept(HexCode),
    Reject(HexCode),
}

/// Friend service that only records what it was asked to do
#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        call: Call,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.calls.lock().unwrap().push(call);
        future::ready(Ok(()))
    }
}

impl FriendService for Recorder {
    fn send_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.record(Call::Send(code))
    }

    fn accept_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.record(Call::Accept(code))
    }

    fn reject_request(
        &self,
        code: HexCode,
    ) -> impl Future<Output = Result<(), FriendServiceError>> + Send + 'static {
        self.record(Call::Reject(code))
    }
}

/// Clipboard that never answers
struct StuckClipboard;

impl ClipboardReader for StuckClipboard {
    fn read_text(&self) -> impl Future<Output = Result<String, ClipboardError>> + Send {
        async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("12345678".to_string())
        }
    }
}

fn code(text: &str) -> HexCode {
    HexCode::parse(text).expect("valid test code")
}

fn store_with(friends: usize, requests: &[&str]) -> MemoryStore {
    let friends = (0..friends)
        .map(|i| Friend {
            code: code(&format!("F000000{}", i)),
            status: OnlineStatus::Online,
        })
        .collect();
    let store = MemoryStore::seeded(None, friends, Vec::new(), Vec::new());
    for request in requests {
        store.receive_request(code(request));
    }
    store
}

async fn press<D, C, F>(controller: &mut Controller<D, C, F>, events: &[InputEvent])
where
    D: ListDataSource,
    C: ClipboardReader,
    F: FriendService,
{
    for event in events {
        controller.handle(*event).await;
    }
}

use InputEvent::*;

/// Main menu → FRIENDS → ADD FRIEND
const OPEN_ADD_FRIEND: [InputEvent; 3] = [Down, Select, Select];

#[tokio::test]
async fn test_session_starts_on_main_menu() {
    let controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::empty(),
        Recorder::default(),
    );
    let state = controller.current_state();
    assert_eq!(state.kind(), ScreenKind::Main);
    assert_eq!(state.selected_index(), 0);
    assert!(state.add_friend().is_none());
}

#[tokio::test]
async fn test_paste_valid_code() {
    let mut controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::with_text("1a2b3c4d"),
        Recorder::default(),
    );
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    let state = controller.on_select().await;

    let add_friend = state.add_friend().expect("still on add friend");
    assert_eq!(add_friend.digits().to_string(), "1A2B3C4D");
    assert_eq!(add_friend.digit_index(), 7);
    assert_eq!(add_friend.mode(), AddFriendMode::PasteResult);
    assert!(!add_friend.paste_error());
}

#[tokio::test]
async fn test_paste_invalid_code_sets_error() {
    let mut controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::with_text("xyz"),
        Recorder::default(),
    );
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    let state = controller.on_select().await;

    let add_friend = state.add_friend().expect("still on add friend");
    assert!(add_friend.paste_error());
    assert_eq!(add_friend.mode(), AddFriendMode::Choosing);

    // Moving the cursor clears the flag
    let state = controller.on_down().await;
    assert!(!state.add_friend().unwrap().paste_error());
}

#[tokio::test]
async fn test_clipboard_failure_sets_error() {
    let mut controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::failing(ClipboardError::System("no display".into())),
        Recorder::default(),
    );
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    let state = controller.on_select().await;
    assert!(state.add_friend().unwrap().paste_error());
}

#[tokio::test(start_paused = true)]
async fn test_clipboard_timeout_sets_error() {
    let mut controller = Controller::new(MemoryStore::new(), StuckClipboard, Recorder::default())
        .with_clipboard_timeout(Duration::from_millis(100));
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    let state = controller.on_select().await;
    let add_friend = state.add_friend().unwrap();
    assert!(add_friend.paste_error());
    assert_eq!(add_friend.mode(), AddFriendMode::Choosing);
}

#[tokio::test]
async fn test_manual_entry_sends_once_and_returns_to_friends() {
    let recorder = Recorder::default();
    let mut controller =
        Controller::new(MemoryStore::new(), FixedClipboard::empty(), recorder.clone());
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    // Choose manual entry
    press(&mut controller, &[Down, Select]).await;

    // Dial C0FFEE00: C = 12 ups, 0, F = 1 down, F, E = 2 downs, E, 0, 0
    let plan: [&[InputEvent]; 8] = [
        &[Up; 12],
        &[],
        &[Down],
        &[Down],
        &[Down, Down],
        &[Down, Down],
        &[],
        &[],
    ];
    for (i, digit) in plan.iter().enumerate() {
        press(&mut controller, digit).await;
        if i < 7 {
            controller.on_select().await;
        }
    }
    assert_eq!(
        controller.current_state().add_friend().unwrap().digits(),
        code("C0FFEE00")
    );
    assert!(recorder.calls().is_empty());

    let state = controller.on_select().await;
    assert_eq!(recorder.calls(), vec![Call::Send(code("C0FFEE00"))]);
    assert_eq!(state.kind(), ScreenKind::Friends);
    assert_eq!(state.selected_index(), 0);
    assert!(state.add_friend().is_none());
}

#[tokio::test]
async fn test_sixteen_ups_return_digit_to_zero() {
    let mut controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::empty(),
        Recorder::default(),
    );
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    press(&mut controller, &[Down, Select]).await;
    press(&mut controller, &[Up; 16]).await;
    assert_eq!(
        controller.current_state().add_friend().unwrap().digits(),
        HexCode::ZERO
    );
}

#[tokio::test]
async fn test_menu_during_manual_entry_goes_home() {
    let mut controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::empty(),
        Recorder::default(),
    );
    press(&mut controller, &OPEN_ADD_FRIEND).await;
    press(&mut controller, &[Down, Select, Up, Select, Up, Select, Select, Select]).await;
    assert_eq!(controller.current_state().add_friend().unwrap().digit_index(), 4);

    let state = controller.on_menu().await;
    assert_eq!(state.kind(), ScreenKind::Main);
    assert_eq!(state.selected_index(), 0);
    assert!(state.add_friend().is_none());
}

#[tokio::test]
async fn test_back_on_requests_rejects_second() {
    let recorder = Recorder::default();
    let store = store_with(0, &["AAAA0001", "BBBB0002", "CCCC0003"]);
    let mut controller = Controller::new(store, FixedClipboard::empty(), recorder.clone());

    // FRIENDS → REQUESTS row → second request
    press(&mut controller, &[Down, Select, Down, Select, Down]).await;
    assert_eq!(controller.current_state().kind(), ScreenKind::FriendRequests);
    assert_eq!(controller.current_state().selected_index(), 1);

    let state = controller.on_back().await;
    assert_eq!(recorder.calls(), vec![Call::Reject(code("BBBB0002"))]);
    assert_eq!(state.kind(), ScreenKind::FriendRequests);

    let state = controller.on_select().await;
    assert_eq!(
        recorder.calls(),
        vec![Call::Reject(code("BBBB0002")), Call::Accept(code("BBBB0002"))]
    );
    assert_eq!(state.kind(), ScreenKind::FriendRequests);
}

#[tokio::test]
async fn test_friends_bounds_without_requests() {
    let store = store_with(3, &[]);
    assert_eq!(store.counts().friends, 3);
    let mut controller = Controller::new(store, FixedClipboard::empty(), Recorder::default());
    press(&mut controller, &[Down, Select]).await;
    press(&mut controller, &[Down; 10]).await;
    // add-friend row plus three friends
    assert_eq!(controller.current_state().selected_index(), 3);
}

#[tokio::test]
async fn test_accept_through_memory_store_updates_lists() {
    let store = store_with(0, &["AAAA0001", "BBBB0002"]);
    let mut controller = Controller::new(store.clone(), FixedClipboard::empty(), store.clone());
    press(&mut controller, &[Down, Select, Down, Select, Down]).await;

    controller.on_select().await;
    tokio::task::yield_now().await;

    assert_eq!(store.counts().pending, 1);
    assert_eq!(store.friends()[0].code, code("BBBB0002"));
    // The cursor is pulled back onto the remaining request
    assert_eq!(controller.current_state().selected_index(), 0);
}

#[tokio::test]
async fn test_reserved_directions_change_nothing() {
    let mut controller = Controller::new(
        MemoryStore::new(),
        FixedClipboard::empty(),
        Recorder::default(),
    );
    press(&mut controller, &[Down, Down]).await;
    let before = controller.current_state();
    press(&mut controller, &[Left, Right, Left]).await;
    assert_eq!(controller.current_state(), before);
}
