//! # Introduction
//!
//! pagerlink is a messaging client whose whole interface is driven by five
//! buttons (up, down, select, back, menu), the way a hardware pager is. The
//! library holds the navigation core; the binary wraps it in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Event pipeline
//!
//! ```text
//! Key → InputEvent → Dispatcher → (NavigationState, Action) → Controller → TUI
//! ```
//!
//! 1. [`nav`]: screens, session state, hexadecimal code entry, and the pure
//!    dispatcher; [`nav::Controller`] owns the state and runs actions.
//! 2. [`services`]: collaborator ports (lists, clipboard, friend requests) and
//!    their in-memory / system implementations.
//! 3. [`config`]: command-line options and TOML seed data for the host.
//! 4. [`ui`]: ratatui host; not part of the stable library API.
//!
//! ## Screens
//!
//! Main menu, messages, friends, add friend, friend requests, my code,
//! settings. Friends are identified by 8-digit hex codes, entered either by
//! pasting from the clipboard or digit by digit.

pub mod config;
pub mod nav;
pub mod services;
pub mod ui;
