//! Chat room HTTP server library.
//!
//! Participants join by name, keep their presence alive with periodic
//! heartbeats and exchange broadcast or private messages. A background
//! sweeper removes participants whose heartbeats stopped.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
