//! Internal graph accessors and low-level building blocks.
//!
//! Traversal bookkeeping lives here so the walker, the `Dfs` iterator and the
//! component enumeration all express visited logic in one place.

pub mod visited;

pub use visited::VisitedSet;
