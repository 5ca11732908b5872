//! DOT serialisation for rendering a grex with Graphviz.
//!
//! Vertices default to unlabelled points; the input and output vertices are
//! re-declared as labelled boxes (`In`, `Out`, or `IO` when a vertex is
//! both). Every edge carries its symbol as the edge label.

use std::fmt::{self, Write};

use crate::factory::Factory;
use crate::grex::Grex;

impl<F: Factory> Grex<F> {
    /// Renders the graph in DOT format. `factory` resolves edge labels.
    pub fn to_dot(&self, factory: &F) -> String {
        let mut out = String::new();
        self.format_dot(factory, &mut out)
            .expect("String write never fails");
        out
    }

    fn format_dot(&self, factory: &F, w: &mut String) -> fmt::Result {
        writeln!(
            w,
            "digraph {{ size=\"6,4\"; rankdir=LR; ratio=fill; node [label=\"\",shape=point,style=filled];"
        )?;

        writeln!(w, "  {} [label=\"In\",shape=box];", self.input_vertex())?;
        for vertex in self.output_vertices() {
            let tag = if vertex == self.input_vertex() {
                "IO"
            } else {
                "Out"
            };
            writeln!(w, "  {vertex} [label=\"{tag}\",shape=box];")?;
        }

        for (&edge, bounds) in self.edges() {
            writeln!(
                w,
                "  {} -> {} [label=\"{}\"];",
                bounds.source,
                bounds.dest,
                factory.edge_label(edge)
            )?;
        }

        writeln!(w, "}}")
    }
}
