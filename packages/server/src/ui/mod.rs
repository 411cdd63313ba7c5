//! HTTP chat server: routes, handlers and background tasks.

mod error;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;
mod sweeper;

pub use error::ApiError;
pub use handler::USER_HEADER;
pub use router::build_router;
pub use runner::run;
pub use sweeper::spawn_sweeper;
