//! TUI pane rendering modules
//!
//! Each pane module exports one stateless `render_*` function; scroll
//! offsets live in [`crate::ui::App`].
//!
//! # Pane Modules
//!
//! - [`list`]: the node chain with role labels, plus the raw slot table
//! - [`snippet`]: code for the selected operation with syntax highlighting
//! - [`history`]: completed operations, newest first
//! - [`info`]: operation description, inputs and progress
//! - [`status`]: status bar with keybindings and run state

pub mod history;
pub mod info;
pub mod list;
pub mod snippet;
pub mod status;

pub use history::render_history_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use list::render_list_pane;
pub use snippet::render_snippet_pane;
pub use status::render_status_bar;
