//! Pure core: entries, path tree, wildcard patterns, visibility, selection.
//!
//! Nothing in this module touches the terminal. All state transitions are
//! synchronous and run to completion, so every piece is testable without a
//! rendering environment.

pub mod debounce;
pub mod entry;
pub mod order;
pub mod pattern;
pub mod selection;
pub mod tree;
pub mod visibility;
