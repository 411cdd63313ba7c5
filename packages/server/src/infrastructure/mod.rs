//! Infrastructure 層
//!
//! ドメイン層が定義するポート（Repository, Clock）の実装と、HTTP の DTO を提供します。

pub mod clock;
pub mod dto;
pub mod repository;

pub use clock::{ManualClock, SystemClock};
pub use repository::InMemoryChatRepository;
