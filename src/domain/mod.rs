//! Domain layer: entities and reorder logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod board;
pub mod builder;
pub mod entities;
pub mod error;

pub use board::{Board, GroupPath, SearchDepth};
pub use builder::{BoardBuilder, GroupBuilder};
pub use entities::*;
pub use error::{DomainError, DomainResult};
