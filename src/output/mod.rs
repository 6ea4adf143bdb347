//! Terminal output formatting
//!
//! Gallows art, display utilities and pretty-printing for the classic line mode.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{render_frame, render_prompt, render_reprompt, render_result};
