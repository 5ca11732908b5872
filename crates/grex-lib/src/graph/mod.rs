//! Directed sparse multigraph storage.
//!
//! The store is deliberately dumb: vertices, labelled-edge bounds, and
//! per-vertex adjacency lists. All structural intelligence (copying,
//! merging, pruning) lives with the constructors in [`crate::grex`].
//!
//! Iteration order everywhere is insertion order, which is what makes path
//! lookups and DOT output deterministic for a given graph instance.

mod dot;
mod store;


pub use store::{Bounds, DiGraph};
