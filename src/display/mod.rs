//! Display formatting for terminal output

pub mod share;

pub use share::{share_url, success_message};
