//! Navigation core: screens, session state, code entry, and event dispatch
//!
//! - **[`registry`]**: screen identities, the main menu, per-screen bounds
//! - **[`state`]**: [`NavigationState`], replaced on every input event
//! - **[`digit_editor`]**: hexadecimal code entry on the add-friend screen
//! - **[`dispatcher`]**: pure `(state, event) -> (state, action)` transitions
//! - **[`controller`]**: owns the state and runs collaborator actions

pub mod controller;
pub mod digit_editor;
pub mod dispatcher;
pub mod errors;
pub mod hex;
pub mod registry;
pub mod state;

pub use controller::Controller;
pub use digit_editor::{AddFriendMode, AddFriendState, AddMethod};
pub use dispatcher::{Action, InputEvent, Transition};
pub use errors::PasteError;
pub use hex::{HexCode, HexCodeError};
pub use registry::{ListCounts, ScreenKind};
pub use state::{NavigationState, Screen};
