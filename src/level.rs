use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::estimator::ComplexityEstimator;
use crate::graph::{Color, Coloring, Graph};
use crate::solver::{ColoringSolver, SolverFailure};

/// A puzzle level: a set of named regions plus the adjacency between them.
///
/// A level owns the bijection between domain-side region ids and the node indices of
/// its compact [`Graph`], so the solver and estimator never touch string keys.
/// Region indices follow first-declaration order on the builder.
///
/// [`Level`]s should be built using a [`LevelBuilder`](crate::builder::LevelBuilder).
#[derive(Clone, Debug)]
pub struct Level {
    region_ids: Vec<String>,
    region_indices: HashMap<String, usize>,
    graph: Graph,
}

impl Level {
    pub(crate) fn new(
        region_ids: Vec<String>,
        region_indices: HashMap<String, usize>,
        graph: Graph,
    ) -> Self {
        Self {
            region_ids,
            region_indices,
            graph,
        }
    }

    /// The integer-indexed adjacency structure backing this level.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The number of regions.
    pub fn region_count(&self) -> usize {
        self.region_ids.len()
    }

    /// The region id at `index`, if in range.
    pub fn region_id(&self, index: usize) -> Option<&str> {
        self.region_ids.get(index).map(String::as_str)
    }

    /// The node index of region `id`, if declared.
    pub fn region_index(&self, id: &str) -> Option<usize> {
        self.region_indices.get(id).copied()
    }

    /// The ids of the regions adjacent to `id`, or `None` for an unknown id.
    pub fn neighbors_of(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.region_index(id)?;
        Some(
            self.graph
                .neighbors(index)
                .iter()
                .map(|&n| self.region_ids[n].as_str())
                .collect(),
        )
    }

    /// Color this level's graph with the minimum number of colors.
    ///
    /// The coloring is node-indexed; use [`region_colors`](Self::region_colors) to
    /// translate it back to region ids. Its
    /// [`color_count`](crate::Coloring::color_count) is the level's chromatic number.
    pub fn solve(&self) -> Result<Coloring, SolverFailure> {
        ColoringSolver::from(&self.graph).solve()
    }

    /// Translate a node-indexed coloring into a map from region id to color.
    pub fn region_colors(&self, coloring: &Coloring) -> HashMap<String, Color> {
        self.region_ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), coloring[index]))
            .collect()
    }

    /// Score this level's difficulty in `[0, 1]`.
    ///
    /// Solves exactly first, then hands the chromatic number to `estimator`.
    /// Cancelling the estimator surfaces as [`SolverFailure::Cancelled`].
    pub fn difficulty(&self, estimator: &ComplexityEstimator) -> Result<f64, SolverFailure> {
        let coloring = self.solve()?;
        estimator
            .estimate(&self.graph, coloring.color_count())
            .map_err(|_| SolverFailure::Cancelled)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, id) in self.region_ids.iter().enumerate() {
            let neighbors = self
                .graph
                .neighbors(index)
                .iter()
                .map(|&n| self.region_ids[n].as_str())
                .sorted()
                .join(" ");
            writeln!(f, "{id}: {neighbors}")?;
        }
        Ok(())
    }
}
