use log::debug;

use crate::cancel::CancelFlag;
use crate::graph::{Color, Coloring, Graph};

/// Reasons a [`ColoringSolver`] may stop without a coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverFailure {
    /// Every color budget up to the node count was infeasible.
    ///
    /// A graph with N nodes always admits an N-coloring, so this can only arise from
    /// a malformed adjacency structure upstream. It indicates a bug in the caller,
    /// not a condition to handle at runtime.
    Exhausted,
    /// The solver observed its [`CancelFlag`] before finding a coloring.
    Cancelled,
}

/// Exact graph coloring by iterative deepening over the color budget.
///
/// For each budget k = 1, 2, ... a backtracking search looks for a proper coloring
/// using at most k colors; the first feasible budget is the chromatic number, so the
/// returned coloring is guaranteed minimal. Worst-case time is exponential in the
/// node count — the puzzle graphs this crate targets stay small enough for that to
/// be a non-issue, but see [`with_cancel_flag`](Self::with_cancel_flag) for bailing
/// out of a run that grew too expensive.
pub struct ColoringSolver<'a> {
    graph: &'a Graph,
    cancel: CancelFlag,
}

impl<'a> From<&'a Graph> for ColoringSolver<'a> {
    fn from(graph: &'a Graph) -> Self {
        Self {
            graph,
            cancel: CancelFlag::new(),
        }
    }
}

impl ColoringSolver<'_> {
    /// Attach a cancellation flag, checked once per color budget.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Find a proper coloring of the graph using the minimum number of colors.
    ///
    /// Nodes are visited in index order and colors tried in ascending order, so the
    /// result is deterministic for a given adjacency encoding: the same graph always
    /// yields the same coloring. An empty graph yields an empty coloring.
    pub fn solve(&self) -> Result<Coloring, SolverFailure> {
        let nodes = self.graph.node_count();
        if nodes == 0 {
            return Ok(Coloring::new(Vec::new()));
        }

        for budget in 1..=nodes {
            if self.cancel.is_cancelled() {
                return Err(SolverFailure::Cancelled);
            }
            debug!("searching for a {budget}-coloring of {nodes} nodes");
            if let Some(coloring) = self.coloring_within(budget) {
                return Ok(coloring);
            }
        }

        Err(SolverFailure::Exhausted)
    }

    /// Backtracking search for a proper coloring using colors `0..budget`.
    ///
    /// The search keeps an explicit cursor instead of recursing. Each slot holds the
    /// last color tried at that node; advancing resumes from the next one, so
    /// retreating and re-advancing never retries a rejected color. Only neighbors at
    /// or below the cursor are colored, which is exactly the set conflicts must be
    /// checked against.
    fn coloring_within(&self, budget: usize) -> Option<Coloring> {
        let nodes = self.graph.node_count();
        let mut slots: Vec<Option<Color>> = vec![None; nodes];
        let mut cursor = 0;

        loop {
            let resume_at = slots[cursor].map_or(0, |color| color + 1);
            let found = (resume_at..budget).find(|&candidate| {
                self.graph
                    .neighbors(cursor)
                    .iter()
                    .all(|&n| slots[n] != Some(candidate))
            });

            match found {
                Some(color) => {
                    slots[cursor] = Some(color);
                    cursor += 1;
                    if cursor == nodes {
                        return Some(Coloring::new(
                            slots.into_iter().map(|slot| slot.unwrap()).collect(),
                        ));
                    }
                }
                None => {
                    // budget exhausted at this node; retreat, or give up at node 0
                    slots[cursor] = None;
                    if cursor == 0 {
                        return None;
                    }
                    cursor -= 1;
                }
            }
        }
    }
}

/// Color the graph in a single pass, assigning each node the first color not used by
/// an already-colored neighbor.
///
/// The result is always proper but may use more colors than the chromatic number;
/// it is never worse than the maximum degree plus one. Later neighbors are still
/// uncolored when a node is visited and cannot conflict, so checking every neighbor
/// is safe. Used by the complexity estimator as the "naive player" strategy.
pub fn greedy_coloring(graph: &Graph) -> Coloring {
    let nodes = graph.node_count();
    let mut slots: Vec<Option<Color>> = vec![None; nodes];

    for node in 0..nodes {
        let mut candidate = 0;
        while graph
            .neighbors(node)
            .iter()
            .any(|&n| slots[n] == Some(candidate))
        {
            candidate += 1;
        }
        slots[node] = Some(candidate);
    }

    Coloring::new(slots.into_iter().flatten().collect())
}
