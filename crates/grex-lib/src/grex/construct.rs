//! The algebraic constructors.
//!
//! Every constructor copies its operand subgraphs into a fresh host graph
//! through the factory before doing any surgery: a fresh vertex per operand
//! vertex (recorded in a vertex map), a cloned edge per operand edge over
//! the mapped endpoints. Operands are therefore never mutated or aliased,
//! and the evaluator is free to drop them after each step.
//!
//! Fragments are glued without ε-edges. The key move is *merge-outbounds*:
//! cloning every out-edge of one vertex onto another, which replicates "what
//! can happen next" instead of linking "where to go next".

use indexmap::{IndexMap, IndexSet};

use crate::factory::Factory;
use crate::graph::DiGraph;

use super::Grex;

/// A two-vertex, one-edge grex matching exactly the symbol `label`.
pub fn terminal<F: Factory>(factory: &mut F, label: &str) -> Grex<F> {
    let mut graph = DiGraph::new();
    let edge = factory.new_edge(label);
    let source = factory.new_vertex();
    let dest = factory.new_vertex();
    graph.add_edge(edge, source, dest);

    let mut outputs = IndexSet::new();
    outputs.insert(dest);
    Grex {
        input: source,
        outputs,
        graph,
    }
}

/// Concatenation: `a , b`.
///
/// Rather than wiring `a`'s outputs to `b`'s input, the outgoing structure
/// of `b`'s input is replicated onto every output of `a`; the now-redundant
/// input copy is pruned. When `b` accepts the empty word, `a`'s outputs stay
/// accepting.
pub fn seq<F: Factory>(factory: &mut F, a: &Grex<F>, b: &Grex<F>) -> Grex<F> {
    let mut graph = DiGraph::new();
    let map_a = copy_into(a, &mut graph, factory);
    let map_b = copy_into(b, &mut graph, factory);

    let junction = map_b[&b.input];
    let accepts_empty = b.outputs.contains(&b.input);
    // Snapshot before attaching: the junction's edge list must not pick up
    // clones made for earlier outputs.
    let outbounds = outbound_snapshot(&graph, junction);

    let mut outputs = IndexSet::new();
    for out in &a.outputs {
        let host_out = map_a[out];
        attach_outbounds(&mut graph, factory, host_out, &outbounds);
        if accepts_empty {
            outputs.insert(host_out);
        }
    }
    for out in &b.outputs {
        outputs.insert(map_b[out]);
    }

    graph.remove_vertex(junction);
    outputs.shift_remove(&junction);

    Grex {
        input: map_a[&a.input],
        outputs,
        graph,
    }
}

/// Alternation: `a | b`.
///
/// Both operands' input vertices collapse into one fresh vertex carrying the
/// union of their incident edges; the outputs are the union of both output
/// sets (with collapsed inputs remapped).
pub fn sel<F: Factory>(factory: &mut F, a: &Grex<F>, b: &Grex<F>) -> Grex<F> {
    let mut graph = DiGraph::new();
    let mut map_a = copy_into(a, &mut graph, factory);
    let mut map_b = copy_into(b, &mut graph, factory);

    let merged = merge_inputs(&mut graph, factory, map_a[&a.input], map_b[&b.input]);
    map_a.insert(a.input, merged);
    map_b.insert(b.input, merged);

    let mut outputs = IndexSet::new();
    for out in &a.outputs {
        outputs.insert(map_a[out]);
    }
    for out in &b.outputs {
        outputs.insert(map_b[out]);
    }

    Grex {
        input: merged,
        outputs,
        graph,
    }
}

/// One or more: `a+`.
///
/// Every output can reach exactly what the input can reach, so each output
/// receives a clone of every out-edge of the input. The input does not
/// become an output: at least one match is required.
pub fn plus<F: Factory>(factory: &mut F, a: &Grex<F>) -> Grex<F> {
    let mut n = duplicate(a, factory);
    // One snapshot for the whole pass: when the input is itself an output,
    // attaching to it must not double up the clones just made.
    let outbounds = outbound_snapshot(&n.graph, n.input);
    let outputs: Vec<F::Vertex> = n.outputs.iter().copied().collect();
    for out in outputs {
        attach_outbounds(&mut n.graph, factory, out, &outbounds);
    }
    n
}

/// Zero or one: `a?`. The input joins the output set.
pub fn opt<F: Factory>(factory: &mut F, a: &Grex<F>) -> Grex<F> {
    let mut n = duplicate(a, factory);
    let input = n.input;
    n.outputs.insert(input);
    n
}

/// Zero or more: `a*`, built as `(a+)?`.
pub fn star<F: Factory>(factory: &mut F, a: &Grex<F>) -> Grex<F> {
    let repeated = plus(factory, a);
    opt(factory, &repeated)
}

/// Copies `src`'s whole graph into `host`, returning source→copy vertex map.
fn copy_into<F: Factory>(
    src: &Grex<F>,
    host: &mut DiGraph<F::Vertex, F::Edge>,
    factory: &mut F,
) -> IndexMap<F::Vertex, F::Vertex> {
    let mut map = IndexMap::new();
    for vertex in src.graph.vertices() {
        let copy = factory.new_vertex();
        host.add_vertex(copy);
        map.insert(vertex, copy);
    }
    for (&edge, &bounds) in src.graph.edges() {
        let clone = factory.clone_edge(edge);
        host.add_edge(clone, map[&bounds.source], map[&bounds.dest]);
    }
    map
}

/// A fresh grex with the same shape as `a`, all identities re-minted.
fn duplicate<F: Factory>(a: &Grex<F>, factory: &mut F) -> Grex<F> {
    let mut graph = DiGraph::new();
    let map = copy_into(a, &mut graph, factory);
    let outputs = a.outputs.iter().map(|out| map[out]).collect();
    Grex {
        input: map[&a.input],
        outputs,
        graph,
    }
}

/// The out-edges of `vertex` with their destinations, as an owned list that
/// survives later mutation of the graph.
fn outbound_snapshot<V, E>(graph: &DiGraph<V, E>, vertex: V) -> Vec<(E, V)>
where
    V: Copy + Eq + std::hash::Hash,
    E: Copy + Eq + std::hash::Hash,
{
    graph
        .out_edges(vertex)
        .iter()
        .map(|&edge| (edge, graph.endpoints(edge).dest))
        .collect()
}

/// Merge-outbounds: clones every snapshot edge onto `from`, keeping each
/// clone's original destination.
fn attach_outbounds<F: Factory>(
    graph: &mut DiGraph<F::Vertex, F::Edge>,
    factory: &mut F,
    from: F::Vertex,
    outbounds: &[(F::Edge, F::Vertex)],
) {
    for &(edge, dest) in outbounds {
        let clone = factory.clone_edge(edge);
        graph.add_edge(clone, from, dest);
    }
}

/// Replaces `u` and `v` with one fresh vertex carrying the union of their
/// incident edges. In-edges are rerouted first, so an edge between the pair
/// (or a loop on either) ends up as a loop on the merged vertex rather than
/// dangling.
fn merge_inputs<F: Factory>(
    graph: &mut DiGraph<F::Vertex, F::Edge>,
    factory: &mut F,
    u: F::Vertex,
    v: F::Vertex,
) -> F::Vertex {
    let merged = factory.new_vertex();
    graph.add_vertex(merged);

    let mut incoming: IndexSet<F::Edge> = IndexSet::new();
    incoming.extend(graph.in_edges(u).iter().copied());
    incoming.extend(graph.in_edges(v).iter().copied());
    for edge in incoming {
        let source = graph.endpoints(edge).source;
        graph.remove_edge(edge);
        graph.add_edge(edge, source, merged);
    }

    let mut outgoing: IndexSet<F::Edge> = IndexSet::new();
    outgoing.extend(graph.out_edges(u).iter().copied());
    outgoing.extend(graph.out_edges(v).iter().copied());
    for edge in outgoing {
        let dest = graph.endpoints(edge).dest;
        graph.remove_edge(edge);
        graph.add_edge(edge, merged, dest);
    }

    graph.remove_vertex(u);
    graph.remove_vertex(v);
    merged
}
