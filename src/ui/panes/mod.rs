//! TUI pane rendering modules
//!
//! - [`screen`]: the pager body for whichever screen is current
//! - [`status`]: status bar with the screen name, last message and key hints
//!
//! Each module exports a `render_*` function; neither holds state of its own.

pub mod screen;
pub mod status;

pub use screen::{render_screen, screen_lines, ScreenRenderData};
pub use status::render_status_bar;
