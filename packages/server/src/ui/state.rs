//! Shared application state.

use std::sync::Arc;

use crate::domain::{ChatRepository, Clock};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ChatRepository>,
    pub clock: Arc<dyn Clock>,
    /// UTC offset used when formatting times for display
    pub utc_offset_minutes: i32,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        clock: Arc<dyn Clock>,
        utc_offset_minutes: i32,
    ) -> Self {
        Self {
            repository,
            clock,
            utc_offset_minutes,
        }
    }
}
