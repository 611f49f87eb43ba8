//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality: every vertex is drawn with its
//! label at its position, every edge with its weight, and the highlights of a [`StepEvent`] can be
//! colored on top.
//!
//! For example, rendering the state of a narrated algorithm:
//! ```
//! use graph_tutor::{prelude::*, algo::*, io::*};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex_at(0.0, 0.0);
//! let b = graph.add_vertex_at(72.0, 0.0);
//! graph.create_edge(a, b, Some(2.0)).unwrap();
//!
//! let step = graph.prim().unwrap().nth(1).unwrap();
//! let mut buffer = Vec::new();
//! DotWriter::new()
//!     .highlight(&step)
//!     .try_write_graph(&graph, &mut buffer)
//!     .unwrap();
//!
//! let dot = String::from_utf8(buffer).unwrap();
//! assert!(dot.contains("\"A\" -- \"B\" [label=\"2\", color=red, penwidth=2];"));
//! ```
use std::{fmt::Display, io::Write};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Draw edge weights as edge labels
    weights: bool,
    /// Emit vertex positions as pinned `pos` attributes
    positions: bool,
    highlight_color: DotColor,
    highlighted_vertices: Vec<Node>,
    highlighted_edges: Vec<EdgeId>,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            weights: true,
            positions: true,
            highlight_color: DotColor::Red,
            highlighted_vertices: Vec::new(),
            highlighted_edges: Vec::new(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, edge weights are not drawn
    pub fn weights(mut self, weights: bool) -> Self {
        self.weights = weights;
        self
    }

    /// If *false*, vertex positions are left to the layout engine
    pub fn positions(mut self, positions: bool) -> Self {
        self.positions = positions;
        self
    }

    /// Sets the color of highlighted vertices and edges (red by default)
    pub fn highlight_color(mut self, color: DotColor) -> Self {
        self.highlight_color = color;
        self
    }

    /// Highlights the vertices and edges of a narrated step
    pub fn highlight(mut self, step: &StepEvent) -> Self {
        self.highlighted_vertices = step.highlighted_vertices().to_vec();
        self.highlighted_edges = step.highlighted_edges().to_vec();
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")?;
        Ok(())
    }

    /// Writes all vertices with their labels (and positions)
    pub fn write_vertices<W>(&self, writer: &mut W, graph: &Graph) -> Result<()>
    where
        W: Write,
    {
        for u in graph.vertices() {
            let vertex = graph.vertex(u);
            let mut attributes = Vec::new();
            if self.positions {
                let (x, y) = vertex.position();
                // drawings grow downwards, Graphviz grows upwards
                let y = 0.0 - y;
                attributes.push(format!("pos=\"{x},{y}!\""));
            }
            if self.highlighted_vertices.contains(&u) {
                attributes.push(format!("style=filled, color={}", self.highlight_color));
            }
            writeln!(
                writer,
                "  {}{};",
                Self::format_label(vertex.label()),
                Self::format_attributes(&attributes)
            )?;
        }
        Ok(())
    }

    /// Writes all edges in creation order, colored if highlighted
    pub fn write_edges<W>(&self, writer: &mut W, graph: &Graph) -> Result<()>
    where
        W: Write,
    {
        for (e, edge) in graph.edge_ids().zip(graph.weighted_edges()) {
            let Edge(u, v) = edge.endpoints();
            let mut attributes = Vec::new();
            if let Some(weight) = edge.weight().filter(|_| self.weights) {
                attributes.push(format!("label=\"{weight}\""));
            }
            if self.highlighted_edges.contains(&e) {
                attributes.push(format!("color={}, penwidth=2", self.highlight_color));
            }
            writeln!(
                writer,
                "  {} -- {}{};",
                Self::format_label(graph.label_of(u)),
                Self::format_label(graph.label_of(v)),
                Self::format_attributes(&attributes)
            )?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")?;
        Ok(())
    }

    fn format_label(label: &str) -> String {
        format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
    }

    fn format_attributes(attributes: &[String]) -> String {
        if attributes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attributes.join(", "))
        }
    }
}

impl GraphWriter for DotWriter {
    fn try_write_graph<W>(&self, graph: &Graph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_vertices(&mut writer, graph)?;
        self.write_edges(&mut writer, graph)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl DotWrite for Graph {
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// A selection of the colors of Svg-Dot taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    DarkOrange,
    DodgerBlue,
    Gold,
    Gray,
    Green,
    Magenta,
    Orange,
    Purple,
    Red,
    SteelBlue,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algo::SpanningTree, testing::graph_from_edges};

    fn write(writer: &DotWriter, graph: &Graph) -> String {
        let mut buffer = Vec::new();
        writer.try_write_graph(graph, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain_graph() {
        let mut graph = graph_from_edges(3, &[(0, 1, 1.5), (1, 2, 2.0)]);
        graph.create_edge(2, 0, None).unwrap();

        assert_eq!(
            write(&DotWriter::new().positions(false), &graph),
            "graph {\n  \"A\";\n  \"B\";\n  \"C\";\n  \"A\" -- \"B\" [label=\"1.5\"];\n  \"B\" -- \"C\" [label=\"2\"];\n  \"C\" -- \"A\";\n}\n"
        );

        let dot = write(&DotWriter::new().weights(false), &graph);
        assert!(dot.contains("  \"B\" [pos=\"1,0!\"];\n"));
        assert!(!dot.contains("label="));
    }

    #[test]
    fn highlighted_step() {
        let graph = graph_from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)]);
        let step = graph.kruskal().unwrap().next().unwrap();

        let dot = write(
            &DotWriter::new()
                .positions(false)
                .highlight_color(DotColor::Blue)
                .highlight(&step),
            &graph,
        );
        assert!(dot.contains("  \"A\" [style=filled, color=blue];\n"));
        assert!(dot.contains("  \"C\";\n"));
        assert!(dot.contains("  \"A\" -- \"B\" [label=\"1\", color=blue, penwidth=2];\n"));
        assert!(dot.contains("  \"B\" -- \"C\" [label=\"2\"];\n"));
    }

    #[test]
    fn labels_are_quoted() {
        assert_eq!(DotWriter::format_label("a\"b"), "\"a\\\"b\"");
        assert_eq!(DotColor::DodgerBlue.to_string(), "dodgerblue");
    }
}
