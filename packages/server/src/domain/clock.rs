//! Clock port.

use super::Timestamp;

/// Source of the current time. Use cases never read the system clock directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
