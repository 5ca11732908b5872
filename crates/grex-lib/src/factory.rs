//! Vertex and edge identity allocation.
//!
//! The library never manufactures identifiers itself: every vertex and every
//! edge comes from a [`Factory`] owned by the caller. This keeps the graph
//! store free to treat identities as opaque `Copy` indices while an embedder
//! decides what (if anything) rides along with them.

use std::fmt;
use std::hash::Hash;

/// Supplier of fresh vertex ids, fresh labelled edge ids, and edge clones.
///
/// Every call returns an identifier unequal to all previously returned ones;
/// ids are never reused. [`clone_edge`](Factory::clone_edge) preserves the
/// original edge's label under a fresh identity, which is what lets the
/// multigraph hold parallel occurrences of the same-labelled transition.
///
/// A factory may not be shared between two in-flight parses: each parse
/// borrows it exclusively for the duration of the call.
pub trait Factory {
    type Vertex: Copy + Eq + Hash + fmt::Debug + fmt::Display;
    type Edge: Copy + Eq + Hash + fmt::Debug;

    /// Mints a fresh vertex.
    fn new_vertex(&mut self) -> Self::Vertex;

    /// Mints a fresh edge carrying `label`, the symbol it matches.
    fn new_edge(&mut self, label: &str) -> Self::Edge;

    /// Mints a fresh edge with the same label as `edge`.
    fn clone_edge(&mut self, edge: Self::Edge) -> Self::Edge;

    /// The label `edge` was minted with. `edge` must come from this factory.
    fn edge_label(&self, edge: Self::Edge) -> &str;
}

/// Vertex identifier minted by [`IdFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge identifier minted by [`IdFactory`]; indexes the factory's label arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u32);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena-backed factory over integer indices.
///
/// Vertices are a bare counter; edge labels live in a `Vec` indexed by
/// [`EdgeId`], so label lookup is O(1) and cloning an edge is one push.
#[derive(Debug, Default)]
pub struct IdFactory {
    next_vertex: u32,
    labels: Vec<String>,
}

impl IdFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Factory for IdFactory {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn new_vertex(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        id
    }

    fn new_edge(&mut self, label: &str) -> EdgeId {
        let id = EdgeId(self.labels.len() as u32);
        self.labels.push(label.to_owned());
        id
    }

    fn clone_edge(&mut self, edge: EdgeId) -> EdgeId {
        let label = self.labels[edge.index()].clone();
        let id = EdgeId(self.labels.len() as u32);
        self.labels.push(label);
        id
    }

    fn edge_label(&self, edge: EdgeId) -> &str {
        &self.labels[edge.index()]
    }
}
