//! Terminal host built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: key-to-button mapping and the event loop around the
//!   navigation [`Controller`]
//! - **[`panes`]**: stateless render functions for the pager body and status bar
//! - **[`theme`]**: the LCD color palette used by all panes
//!
//! [`Controller`]: crate::nav::Controller

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
