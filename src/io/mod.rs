/*!
# IO

A graph leaves this crate in one of two shapes:
- [`json`]: the persisted record `{"vertices": [{"x", "y", "label"}], "edges": [{"v1", "v2", "weight"?}]}`.
  Edges name their endpoints by label. Reading a record back yields the same labels, exact positions,
  edges and weights in the same order.
- [`dot`]: a [GraphViz](https://graphviz.org/) drawing of the graph, optionally with the highlights of a
  narrated step. There is no way back from a drawing.

Both writers implement [`GraphWriter`], so callers can hand either one to code that only needs to
put a graph somewhere.
*/

pub mod dot;
pub mod json;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;
pub use json::*;

/// Something that can put a [`Graph`] into a byte sink
pub trait GraphWriter {
    /// Writes `graph` to `writer`.
    ///
    /// # Errors
    /// Fails if the sink rejects a write.
    fn try_write_graph<W>(&self, graph: &Graph, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) the file at `path` and writes `graph` into it
    fn try_write_graph_file<P>(&self, graph: &Graph, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

impl Graph {
    /// Reads a graph from the persisted JSON record in the file at `path`; see [`Graph::from_json`]
    pub fn read_json_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::read_json(BufReader::new(File::open(path)?))
    }

    /// Writes the persisted JSON record of the graph to the file at `path`
    pub fn write_json_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        JsonWriter::new().try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod test {
    use std::io::ErrorKind;

    use super::*;
    use crate::testing::graph_from_edges;

    #[test]
    fn writers_share_one_interface() {
        fn render<W: GraphWriter>(writer: &W, graph: &Graph) -> String {
            let mut buffer = Vec::new();
            writer.try_write_graph(graph, &mut buffer).unwrap();
            String::from_utf8(buffer).unwrap()
        }

        let graph = graph_from_edges(3, &[(0, 1, 1.5), (1, 2, 2.0)]);

        let json = render(&JsonWriter::new(), &graph);
        let read = Graph::read_json(json.as_bytes()).unwrap();
        assert_eq!(read.vertex_data(), graph.vertex_data());
        assert_eq!(read.weighted_edges(), graph.weighted_edges());

        assert!(render(&DotWriter::new(), &graph).starts_with("graph {"));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("graph-tutor-does-not-exist/graph.json");
        assert!(matches!(
            Graph::read_json_file(path),
            Err(GraphError::Io(e)) if e.kind() == ErrorKind::NotFound
        ));
    }
}
