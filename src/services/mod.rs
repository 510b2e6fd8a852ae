//! Service layer for pasteme
//!
//! `paste` turns user input into an encrypted [`crate::models::Paste`];
//! `client` delivers it to the paste service.

pub mod client;
pub mod paste;

pub use client::{interpret_response, PasteClient};
pub use paste::{require_name, seal_paste, PasteDraft};
