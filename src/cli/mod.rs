//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod input;
pub mod paste;

pub use input::{read_piped, resolve_body, stdin_is_piped};
pub use paste::{handle_paste, ConnectionArgs, PasteArgs, ShareLink};
