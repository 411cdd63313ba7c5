//! Shared utilities for Batepapo binaries and libraries.

pub mod logger;
pub mod time;
