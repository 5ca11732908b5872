//! The multigraph store: vertex table, edge bounds, adjacency lists.

use std::hash::Hash;

use indexmap::IndexMap;

/// Endpoints of a directed edge. Source and destination may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<V> {
    pub source: V,
    pub dest: V,
}

/// Incident edges of a single vertex, both directions.
#[derive(Debug, Clone)]
struct Adjacency<E> {
    incoming: Vec<E>,
    outgoing: Vec<E>,
}

impl<E> Adjacency<E> {
    fn new() -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
}

/// A directed sparse multigraph.
///
/// Edges are unique objects: any number of them may share endpoints (and
/// labels — labels live with the factory, not here). The graph keeps forward
/// and reverse adjacency per vertex, so `in_edges`/`out_edges` are slice
/// borrows rather than scans over the whole edge table.
#[derive(Debug, Clone)]
pub struct DiGraph<V, E> {
    vertices: IndexMap<V, Adjacency<E>>,
    edges: IndexMap<E, Bounds<V>>,
}

impl<V, E> DiGraph<V, E>
where
    V: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Adds an unconnected vertex. Re-adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.entry(vertex).or_insert_with(Adjacency::new);
    }

    /// Inserts `edge` from `source` to `dest`, adding missing endpoints.
    ///
    /// `edge` must not currently be in the graph; identities are minted by a
    /// factory and never collide.
    pub fn add_edge(&mut self, edge: E, source: V, dest: V) {
        debug_assert!(
            !self.edges.contains_key(&edge),
            "an edge id may not be inserted twice"
        );
        self.add_vertex(source);
        self.add_vertex(dest);
        self.edges.insert(edge, Bounds { source, dest });
        self.vertices[&source].outgoing.push(edge);
        self.vertices[&dest].incoming.push(edge);
    }

    /// Removes an edge. No vertex is pruned.
    pub fn remove_edge(&mut self, edge: E) {
        if let Some(bounds) = self.edges.shift_remove(&edge) {
            if let Some(adjacency) = self.vertices.get_mut(&bounds.source) {
                adjacency.outgoing.retain(|&e| e != edge);
            }
            if let Some(adjacency) = self.vertices.get_mut(&bounds.dest) {
                adjacency.incoming.retain(|&e| e != edge);
            }
        }
    }

    /// Removes a vertex together with every incident edge.
    pub fn remove_vertex(&mut self, vertex: V) {
        let Some(adjacency) = self.vertices.get(&vertex) else {
            return;
        };
        let mut incident = adjacency.outgoing.clone();
        incident.extend(adjacency.incoming.iter().copied());
        for edge in incident {
            // A self-loop shows up in both lists; the second removal is a no-op.
            self.remove_edge(edge);
        }
        self.vertices.shift_remove(&vertex);
    }

    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// Edges terminating at `vertex`, in insertion order.
    pub fn in_edges(&self, vertex: V) -> &[E] {
        self.vertices
            .get(&vertex)
            .map(|a| a.incoming.as_slice())
            .unwrap_or(&[])
    }

    /// Edges starting at `vertex`, in insertion order.
    pub fn out_edges(&self, vertex: V) -> &[E] {
        self.vertices
            .get(&vertex)
            .map(|a| a.outgoing.as_slice())
            .unwrap_or(&[])
    }

    /// Source vertex of `edge`, if the edge is in the graph.
    pub fn source(&self, edge: E) -> Option<V> {
        self.edges.get(&edge).map(|b| b.source)
    }

    /// Destination vertex of `edge`, if the edge is in the graph.
    pub fn dest(&self, edge: E) -> Option<V> {
        self.edges.get(&edge).map(|b| b.dest)
    }

    /// Both endpoints of `edge`, if the edge is in the graph.
    pub fn bounds(&self, edge: E) -> Option<Bounds<V>> {
        self.edges.get(&edge).copied()
    }

    /// Endpoints of an edge the caller knows to be present.
    pub(crate) fn endpoints(&self, edge: E) -> Bounds<V> {
        self.bounds(edge)
            .expect("endpoints queried for an edge not in the graph")
    }

    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The full edge table: edge id → endpoints, in insertion order.
    pub fn edges(&self) -> &IndexMap<E, Bounds<V>> {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V, E> Default for DiGraph<V, E>
where
    V: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
