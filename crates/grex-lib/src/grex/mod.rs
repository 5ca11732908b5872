//! The graph-under-construction and its queries.
//!
//! A grex is a triple: one input vertex, a non-empty set of output vertices,
//! and the multigraph they live in. The input may itself be an output — that
//! is how a graph accepts the empty word, since there are no ε-edges to
//! express it otherwise.
//!
//! Grexes are built by [`terminal`] and the five algebraic constructors
//! re-exported here; once built, a grex exposes no mutators and can be read
//! freely, including from multiple threads.

mod construct;


pub use construct::{opt, plus, sel, seq, star, terminal};

use indexmap::{IndexMap, IndexSet};

use crate::factory::Factory;
use crate::graph::{Bounds, DiGraph};

/// A graph built from a regular expression.
///
/// Invariants, maintained by the constructors:
/// - the input vertex and every output vertex belong to the graph;
/// - the output set is non-empty;
/// - every vertex is reachable from the input;
/// - no edge is unlabelled.
#[derive(Debug)]
pub struct Grex<F: Factory> {
    pub(crate) input: F::Vertex,
    pub(crate) outputs: IndexSet<F::Vertex>,
    pub(crate) graph: DiGraph<F::Vertex, F::Edge>,
}

impl<F: Factory> Grex<F> {
    /// The single input vertex.
    pub fn input_vertex(&self) -> F::Vertex {
        self.input
    }

    /// The output vertices, in construction order.
    pub fn output_vertices(&self) -> impl Iterator<Item = F::Vertex> + '_ {
        self.outputs.iter().copied()
    }

    /// Whether `vertex` is an output. `input_vertex()` being an output means
    /// the graph accepts the empty word.
    pub fn is_output(&self, vertex: F::Vertex) -> bool {
        self.outputs.contains(&vertex)
    }

    /// Edges leaving `vertex`.
    pub fn out_edges(&self, vertex: F::Vertex) -> &[F::Edge] {
        self.graph.out_edges(vertex)
    }

    /// All vertices, in construction order.
    pub fn vertices(&self) -> impl Iterator<Item = F::Vertex> + '_ {
        self.graph.vertices()
    }

    /// All edges and their endpoints.
    pub fn edges(&self) -> &IndexMap<F::Edge, Bounds<F::Vertex>> {
        self.graph.edges()
    }

    /// The underlying graph store.
    pub fn graph(&self) -> &DiGraph<F::Vertex, F::Edge> {
        &self.graph
    }

    /// Follows a dot-separated label path from the input vertex.
    ///
    /// For each segment the first out-edge (in construction order) whose
    /// label matches is taken. If no edge matches, the traversal halts and
    /// the vertex reached so far is returned; callers that need to detect a
    /// dead end can compare the result against their expectation.
    pub fn vertex_by_path(&self, factory: &F, path: &str) -> F::Vertex {
        let mut current = self.input;
        for segment in path.split('.') {
            let Some(next) = self.follow(factory, current, segment) else {
                return current;
            };
            current = next;
        }
        current
    }

    fn follow(&self, factory: &F, from: F::Vertex, label: &str) -> Option<F::Vertex> {
        self.graph
            .out_edges(from)
            .iter()
            .find(|&&edge| factory.edge_label(edge) == label)
            .map(|&edge| self.graph.endpoints(edge).dest)
    }
}
