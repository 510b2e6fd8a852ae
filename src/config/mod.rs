//! Configuration module for pasteme
//!
//! - Config directory resolution
//! - Client settings (endpoints, timeout)

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
