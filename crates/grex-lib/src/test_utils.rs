//! Shared helpers for unit tests.

use std::collections::BTreeMap;

use indexmap::IndexSet;

use crate::factory::Factory;
use crate::grex::Grex;

/// Word acceptance by direct NFA simulation.
///
/// The graph has no ε-edges, so one step is just "follow every out-edge
/// whose label matches the symbol"; a word is accepted when any reached
/// vertex is an output. The empty word is accepted exactly when the input
/// vertex is an output.
pub(crate) fn accepts<F: Factory>(grex: &Grex<F>, factory: &F, word: &[&str]) -> bool {
    let mut current: IndexSet<F::Vertex> = IndexSet::new();
    current.insert(grex.input_vertex());

    for symbol in word {
        let mut next = IndexSet::new();
        for &vertex in &current {
            for &edge in grex.out_edges(vertex) {
                if factory.edge_label(edge) == *symbol {
                    if let Some(dest) = grex.graph().dest(edge) {
                        next.insert(dest);
                    }
                }
            }
        }
        if next.is_empty() {
            return false;
        }
        current = next;
    }

    current.iter().any(|&vertex| grex.is_output(vertex))
}

/// Asserts that `grex` accepts every word in `accepted` and none in `rejected`.
pub(crate) fn assert_language<F: Factory>(
    grex: &Grex<F>,
    factory: &F,
    accepted: &[&[&str]],
    rejected: &[&[&str]],
) {
    for word in accepted {
        assert!(accepts(grex, factory, word), "should accept {word:?}");
    }
    for word in rejected {
        assert!(!accepts(grex, factory, word), "should reject {word:?}");
    }
}

/// Multiset of edge labels, as label → occurrence count.
pub(crate) fn label_counts<F: Factory>(grex: &Grex<F>, factory: &F) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for (&edge, _) in grex.edges() {
        *counts
            .entry(factory.edge_label(edge).to_owned())
            .or_insert(0) += 1;
    }
    counts
}

/// Number of vertices reachable from the input by following edges forward.
pub(crate) fn reachable_count<F: Factory>(grex: &Grex<F>) -> usize {
    let mut seen = IndexSet::new();
    let mut queue = vec![grex.input_vertex()];
    while let Some(vertex) = queue.pop() {
        if !seen.insert(vertex) {
            continue;
        }
        for &edge in grex.out_edges(vertex) {
            if let Some(dest) = grex.graph().dest(edge) {
                queue.push(dest);
            }
        }
    }
    seen.len()
}
