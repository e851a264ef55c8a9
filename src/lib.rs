//! nestcol: nested, reorderable columns.
//!
//! A board is an ordered list of named groups ("columns"); each group holds
//! an ordered sequence of rows and nested groups. The crate locates groups,
//! reads and replaces nested sequences, and reorders entries or columns as
//! pure transforms committed to an owned [`application::Session`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use application::{DragTracker, Session};
pub use domain::{Board, Entry, Group, Leaf, SearchDepth};
