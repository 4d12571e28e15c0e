//! # Introduction
//!
//! Timestiles helps elementary school learners see what a multiplication
//! means. The learner enters two numbers (0 to 12), picks a picture, and the
//! product is drawn as a grid of that picture: one row per unit of the first
//! number, one picture per unit of the second. Then the learner types the
//! product and gets told whether it is right.
//!
//! ## Flow
//!
//! ```text
//! Inputs → visualize → frozen Snapshot → Grid + answer → Grade
//! ```
//!
//! 1. [`session`] — the [`session::VisualizationSession`] with its pending
//!    inputs, frozen snapshot, grid layout and grading.
//! 2. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 3. [`config`] — command-line arguments and starting values.
//! 4. [`telemetry`] — optional file logging through `tracing`.
//! 5. [`errors`] — the application error type.

pub mod config;
pub mod errors;
pub mod session;
pub mod telemetry;
pub mod ui;
