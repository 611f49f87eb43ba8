/*!
# Vertices and Labels

A [`Vertex`] is the user-facing identity of a [`Node`](crate::Node): a unique label plus the position
at which it was drawn. The position is pure presentation metadata and never read by any algorithm,
but it is part of the persisted form and must survive a round-trip exactly.

Vertices that are not given a custom label receive the next free *default label*:
`"A"`, `"B"`, ..., `"Z"` followed by `"1"`, `"2"`, `"3"`, ... (see [`DefaultLabels`]).
*/

use std::{fmt::Display, iter::FusedIterator};

/// A labelled point of a graph drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    label: String,
    x: f64,
    y: f64,
}

impl Vertex {
    /// Creates a new vertex at `(x, y)`
    pub fn new<S>(label: S, x: f64, y: f64) -> Self
    where
        S: Into<String>,
    {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    /// Returns the label of the vertex
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the position of the vertex
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Returns *true* if `label` is non-empty and consists of ASCII letters and digits only.
///
/// This is the check an editing frontend performs before accepting a custom label;
/// the graph itself only enforces uniqueness.
pub fn is_valid_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Infinite iterator over all default labels in order: `"A"` to `"Z"`, then `"1"`, `"2"`, ...
///
/// ```
/// use graph_tutor::vertex::DefaultLabels;
///
/// let labels: Vec<String> = DefaultLabels::new().skip(24).take(4).collect();
/// assert_eq!(labels, ["Y", "Z", "1", "2"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels {
    state: DefaultLabel,
}

#[derive(Debug, Clone, Copy)]
enum DefaultLabel {
    Letter(u8),
    Number(u64),
}

impl Default for DefaultLabel {
    fn default() -> Self {
        Self::Letter(b'A')
    }
}

impl DefaultLabels {
    /// Starts at `"A"`
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for DefaultLabels {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let (label, next) = match self.state {
            DefaultLabel::Letter(b'Z') => ("Z".to_string(), DefaultLabel::Number(1)),
            DefaultLabel::Letter(c) => ((c as char).to_string(), DefaultLabel::Letter(c + 1)),
            DefaultLabel::Number(i) => (i.to_string(), DefaultLabel::Number(i + 1)),
        };
        self.state = next;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for DefaultLabels {}
