//! # Json
//!
//! The persisted form of a graph. Vertices are stored with their position and label, edges refer to
//! their endpoints by label and carry their weight if they have one:
//! ```json
//! {
//!   "vertices": [{"x": 10.0, "y": 20.0, "label": "A"}, {"x": 30.0, "y": 20.0, "label": "B"}],
//!   "edges": [{"v1": "A", "v2": "B", "weight": 2.5}]
//! }
//! ```
//! Numeric labels (e.g. `1` instead of `"1"`) are accepted when reading; labels are always written
//! as strings.

use std::io::{Read, Write};

use serde::{Deserialize, Deserializer, Serialize};

use super::*;

/// The persisted form of a [`Graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub vertices: Vec<VertexRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub x: f64,
    pub y: f64,
    #[serde(deserialize_with = "label_from_json")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(deserialize_with = "label_from_json")]
    pub v1: String,
    #[serde(deserialize_with = "label_from_json")]
    pub v2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Number(serde_json::Number),
}

fn label_from_json<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawLabel::deserialize(deserializer)? {
        RawLabel::Text(label) => label,
        RawLabel::Number(label) => label.to_string(),
    })
}

impl From<&Graph> for GraphRecord {
    fn from(graph: &Graph) -> Self {
        Self {
            vertices: graph
                .vertex_data()
                .iter()
                .map(|vertex| {
                    let (x, y) = vertex.position();
                    VertexRecord {
                        x,
                        y,
                        label: vertex.label().to_string(),
                    }
                })
                .collect(),
            edges: graph
                .weighted_edges()
                .iter()
                .map(|edge| {
                    let Edge(u, v) = edge.endpoints();
                    EdgeRecord {
                        v1: graph.label_of(u).to_string(),
                        v2: graph.label_of(v).to_string(),
                        weight: edge.weight(),
                    }
                })
                .collect(),
        }
    }
}

impl TryFrom<GraphRecord> for Graph {
    type Error = GraphError;

    /// Rebuilds a graph; vertices and edges keep the order of the record.
    ///
    /// # Errors
    /// Fails if the record violates an invariant of [`Graph`] or an edge refers to an unknown label.
    fn try_from(record: GraphRecord) -> Result<Self> {
        let mut graph = Graph::new();
        for vertex in record.vertices {
            graph.add_vertex(Vertex::new(vertex.label, vertex.x, vertex.y))?;
        }

        for edge in record.edges {
            let endpoint = |label: String| {
                graph
                    .vertex_by_label(&label)
                    .ok_or(GraphError::UnknownLabel(label))
            };
            let u = endpoint(edge.v1)?;
            let v = endpoint(edge.v2)?;
            graph.create_edge(u, v, edge.weight)?;
        }

        Ok(graph)
    }
}

/// A writer for the persisted JSON form
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, the output is indented (compact by default)
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl GraphWriter for JsonWriter {
    fn try_write_graph<W>(&self, graph: &Graph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let record = GraphRecord::from(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &record)?;
        } else {
            serde_json::to_writer(&mut writer, &record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Graph {
    /// Serializes the graph into its persisted JSON form
    ///
    /// ```
    /// use graph_tutor::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_vertex_at(1.5, 2.0);
    /// let b = graph.add_vertex_at(3.0, 4.0);
    /// graph.create_edge(a, b, None).unwrap();
    ///
    /// let json = graph.to_json().unwrap();
    /// assert_eq!(
    ///     json,
    ///     r#"{"vertices":[{"x":1.5,"y":2.0,"label":"A"},{"x":3.0,"y":4.0,"label":"B"}],"edges":[{"v1":"A","v2":"B"}]}"#
    /// );
    /// assert_eq!(Graph::from_json(&json).unwrap().number_of_edges(), 1);
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&GraphRecord::from(self))?)
    }

    /// Parses a graph from its persisted JSON form; see [`Graph::try_from`]
    pub fn from_json(json: &str) -> Result<Self> {
        Graph::try_from(serde_json::from_str::<GraphRecord>(json)?)
    }

    /// Reads a graph in its persisted JSON form from `reader`
    pub fn read_json<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        Graph::try_from(serde_json::from_reader::<_, GraphRecord>(reader)?)
    }
}
