//! Application layer: sessions, gestures and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod drag;
pub mod error;
pub mod error_ext;
pub mod format;
pub mod script;
pub mod services;
pub mod session;

pub use drag::{DragItem, DragTracker};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use script::Operation;
pub use session::Session;
