// Library interface for wpdebug (used by main.rs and the integration tests)
pub mod commands;
pub mod debug_log;
pub mod error;
pub mod logging;
pub mod output;
pub mod settings;
pub mod store;
