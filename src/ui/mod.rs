//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into five layers:
//!
//! - **[`app`]** — application state, keyboard event loop, field focus
//! - **[`input`]** — numeric input controls with min/max/step
//! - **[`panes`]** — stateless render functions for each visible pane (inputs,
//!   picture, answer, hint, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//! - **[`terminal`]** — raw mode and alternate screen setup/teardown
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`VisualizationSession`] and call [`App::run`] to start the event loop.
//!
//! [`VisualizationSession`]: crate::session::VisualizationSession
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
