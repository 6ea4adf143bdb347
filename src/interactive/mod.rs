//! Full-screen terminal front end

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
