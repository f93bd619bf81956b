//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, input editing
//! - **[`panes`]**: stateless render functions for each visible pane (list, code,
//!   history, operation, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`RunController`] and call
//! [`App::run`] to start the event loop. The app only reads the engine through
//! [`RunController::snapshot`] and drives it through its control methods.
//!
//! [`RunController`]: crate::engine::RunController
//! [`RunController::snapshot`]: crate::engine::RunController::snapshot
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
