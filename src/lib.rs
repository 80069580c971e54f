// Public API for integration tests and potential library usage

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod party;
pub mod protocol;
pub mod state;
pub mod types;
