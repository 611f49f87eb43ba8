/*!
# Step Narration

The teaching algorithms of this crate do not simply compute a result: they explain themselves.
Each of them is an iterator of [`StepEvent`]s, one per step, where every event carries a message
and the set of vertices/edges to highlight. The last event is marked as *final* and carries the
numeric result.

A [`Narrator`] drives such an iterator on behalf of a user interface. It is an explicit state
machine: every call to [`Narrator::resume`] runs the algorithm up to its next step and suspends
there. The collaborator may cancel a narration at any time (e.g. because the user switched to
another mode); afterwards the algorithm does not emit anything anymore and never completes.
There are no timers or threads involved: progress is made only when the caller resumes.

```
use graph_tutor::prelude::*;
use graph_tutor::narrate::Algorithm;

let mut graph = Graph::new();
let a = graph.add_vertex_at(0.0, 0.0);
let b = graph.add_vertex_at(1.0, 0.0);
graph.create_edge(a, b, Some(2.0)).unwrap();

let mut narrator = Algorithm::Prim.narrate(&graph).unwrap();
let first = narrator.resume().unwrap();
assert_eq!(first.message(), "First, we pick an arbitrary starting vertex: A");
assert!(!first.is_final());

narrator.cancel();
assert!(narrator.resume().is_none());
assert!(matches!(narrator.state(), NarratorState::Cancelled));
```
*/

use std::{cell::Cell, fmt::Display, rc::Rc};

use log::{debug, trace};

use crate::{algo::*, repr::*, *};

/// One narrated step of an algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct StepEvent {
    message: String,
    is_final: bool,
    vertices: Vec<Node>,
    edges: Vec<EdgeId>,
    result: Option<Weight>,
}

impl StepEvent {
    /// Creates an intermediate step highlighting the current content of `highlight`
    pub fn new<S>(message: S, highlight: &Highlight) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            is_final: false,
            vertices: highlight.vertices.clone(),
            edges: highlight.edges.clone(),
            result: None,
        }
    }

    /// Creates the terminal step of an algorithm carrying its `result`
    pub fn finish<S>(message: S, highlight: &Highlight, result: Weight) -> Self
    where
        S: Into<String>,
    {
        Self {
            is_final: true,
            result: Some(result),
            ..Self::new(message, highlight)
        }
    }

    /// Returns the explanation of the step
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns *true* if this is the last step of the algorithm
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Returns the vertices to highlight
    pub fn highlighted_vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// Returns the edges to highlight
    pub fn highlighted_edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the result of the algorithm; only the final step carries one
    pub fn result(&self) -> Option<Weight> {
        self.result
    }
}

impl Display for StepEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// The vertices and edges an algorithm currently wants to highlight.
///
/// Elements keep the order in which they were first added; adding an element twice has no effect.
///
/// ```
/// use graph_tutor::narrate::Highlight;
///
/// let mut highlight = Highlight::new();
/// highlight.add_vertex(2);
/// highlight.add_vertex(0);
/// highlight.add_vertex(2);
/// highlight.add_edge(1);
/// assert_eq!(highlight.vertices(), [2, 0]);
/// assert_eq!(highlight.edges(), [1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Highlight {
    vertices: Vec<Node>,
    edges: Vec<EdgeId>,
}

impl Highlight {
    /// Creates an empty highlight
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights `u` if it is not highlighted yet
    pub fn add_vertex(&mut self, u: Node) {
        if !self.vertices.contains(&u) {
            self.vertices.push(u);
        }
    }

    /// Highlights `e` if it is not highlighted yet
    pub fn add_edge(&mut self, e: EdgeId) {
        if !self.edges.contains(&e) {
            self.edges.push(e);
        }
    }

    /// Replaces the highlighted vertices by `vertices`; highlighted edges are removed as well
    pub fn set_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.vertices.clear();
        self.edges.clear();
        for u in vertices {
            self.add_vertex(u);
        }
    }

    /// Returns the highlighted vertices in the order they were added
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// Returns the highlighted edges in the order they were added
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// State of a [`Narrator`]
#[derive(Debug, Clone, PartialEq)]
pub enum NarratorState {
    /// The algorithm has not reached its first step yet
    Running,
    /// The algorithm waits at the contained (non-final) step for the caller to resume
    Suspended(StepEvent),
    /// The narration was cancelled and will not emit any further steps
    Cancelled,
    /// The algorithm completed; contains its final step (if it emitted one)
    Done(Option<StepEvent>),
}

/// A cloneable handle that cancels the narration it was obtained from
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Rc<Cell<bool>>);

impl CancelHandle {
    /// Requests cancellation; the narrator observes it before computing its next step
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Returns *true* if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Drives an iterator of [`StepEvent`]s one step at a time; see the [module documentation](self).
pub struct Narrator<I>
where
    I: Iterator<Item = StepEvent>,
{
    steps: I,
    state: NarratorState,
    cancelled: CancelHandle,
}

impl<I> Narrator<I>
where
    I: Iterator<Item = StepEvent>,
{
    /// Wraps the steps of an algorithm; nothing is computed until the first call to [`Narrator::resume`]
    pub fn new(steps: I) -> Self {
        Self {
            steps,
            state: NarratorState::Running,
            cancelled: CancelHandle::default(),
        }
    }

    /// Runs the algorithm up to its next step and returns it.
    ///
    /// Returns `None` once the narration is cancelled or done. A final step is returned exactly once;
    /// afterwards the narrator is [`NarratorState::Done`].
    pub fn resume(&mut self) -> Option<&StepEvent> {
        match self.state {
            NarratorState::Cancelled | NarratorState::Done(_) => return None,
            NarratorState::Running | NarratorState::Suspended(_) => {
                if self.cancelled.is_cancelled() {
                    debug!("narration cancelled");
                    self.state = NarratorState::Cancelled;
                    return None;
                }
            }
        }

        self.state = match self.steps.next() {
            Some(step) if step.is_final() => {
                debug!("narration completed: {}", step.message());
                NarratorState::Done(Some(step))
            }
            Some(step) => {
                trace!("narration suspended: {}", step.message());
                NarratorState::Suspended(step)
            }
            None => NarratorState::Done(None),
        };

        self.current_step()
    }

    /// Cancels the narration; no further steps are emitted
    pub fn cancel(&mut self) {
        self.cancelled.cancel();
        if !matches!(self.state, NarratorState::Done(_)) {
            debug!("narration cancelled");
            self.state = NarratorState::Cancelled;
        }
    }

    /// Returns a handle that can cancel this narration from elsewhere
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancelled.clone()
    }

    /// Returns the current state of the narration
    pub fn state(&self) -> &NarratorState {
        &self.state
    }

    /// Returns the step the narrator currently shows, if any
    pub fn current_step(&self) -> Option<&StepEvent> {
        match &self.state {
            NarratorState::Suspended(step) | NarratorState::Done(Some(step)) => Some(step),
            _ => None,
        }
    }

    /// Returns *true* if the narration will not emit any further steps
    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            NarratorState::Cancelled | NarratorState::Done(_)
        )
    }
}

/// Boxed steps of any narrated algorithm
pub type AlgorithmSteps<'a> = Box<dyn Iterator<Item = StepEvent> + 'a>;

/// The narrated algorithms a user can choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Prim,
    Kruskal,
    RouteInspection,
}

impl Algorithm {
    /// All narrated algorithms in the order they are offered
    pub const ALL: [Algorithm; 3] = [Self::Prim, Self::Kruskal, Self::RouteInspection];

    /// Returns the display name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prim => "Prim's Algorithm",
            Self::Kruskal => "Kruskal's Algorithm",
            Self::RouteInspection => "Route Inspection",
        }
    }

    /// Validates `graph` and returns the steps of the algorithm with default settings.
    ///
    /// # Errors
    /// Fails if `graph` is empty, disconnected or has unweighted edges (see [`WeightedGraph::new`]).
    pub fn steps<'a>(&self, graph: &'a Graph) -> Result<AlgorithmSteps<'a>> {
        Ok(match self {
            Self::Prim => Box::new(Prim::new().run(graph)?),
            Self::Kruskal => Box::new(Kruskal::new().run(graph)?),
            Self::RouteInspection => Box::new(RouteInspection::new().run(graph)?),
        })
    }

    /// Validates `graph` and wraps the steps of the algorithm into a [`Narrator`]
    pub fn narrate<'a>(&self, graph: &'a Graph) -> Result<Narrator<AlgorithmSteps<'a>>> {
        debug!("narrating {}", self.name());
        Ok(Narrator::new(self.steps(graph)?))
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
