use itertools::Itertools;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cancel::{CancelFlag, Cancelled};
use crate::graph::Graph;
use crate::solver::greedy_coloring;

/// Monte-Carlo estimator of how hard a coloring puzzle feels to play.
///
/// The score is the estimated probability that a player using a naive first-fit
/// strategy fails to find an optimal coloring: each trial relabels the graph under a
/// random permutation, runs [`greedy_coloring`], and compares its color count to the
/// known chromatic number. A puzzle where greedy almost always lands on the optimum
/// is easy; one where it rarely does is hard.
///
/// Sampling uses a generator seeded per [`estimate`](Self::estimate) call, so equal
/// inputs always produce equal scores and concurrent runs never interfere.
#[derive(Clone, Debug)]
pub struct ComplexityEstimator {
    iterations: usize,
    seed: u64,
    strip_dangling: bool,
    cancel: CancelFlag,
}

impl Default for ComplexityEstimator {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: 0,
            strip_dangling: false,
            cancel: CancelFlag::new(),
        }
    }
}

impl ComplexityEstimator {
    /// An estimator with 10 000 iterations, seed 0 and dangling-node stripping off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sampling trials.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Seed the pseudo-random permutation stream.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Strip nodes of degree below 2 before sampling.
    ///
    /// A dangling node accepts whatever color is free and contributes no signal to
    /// the score, but stripping does change the result for graphs with many of them,
    /// so it is off by default and opt-in.
    pub fn strip_dangling(mut self, strip: bool) -> Self {
        self.strip_dangling = strip;
        self
    }

    /// Attach a cancellation flag, checked once per trial.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Estimate the difficulty of `graph`, whose chromatic number is
    /// `optimal_colors`, as a score in `[0, 1]`.
    ///
    /// `0.0` means greedy found the optimum on every sampled node order, `1.0` that
    /// it never did. A graph with no nodes (possibly after stripping) and a zero
    /// iteration count both short-circuit to `0.0` — there is nothing to get wrong.
    ///
    /// The graph must satisfy the usual invariants (symmetric, no self-loops);
    /// malformed input yields meaningless scores rather than an error.
    pub fn estimate(&self, graph: &Graph, optimal_colors: usize) -> Result<f64, Cancelled> {
        let stripped;
        let graph = if self.strip_dangling {
            stripped = graph.without_dangling();
            &stripped
        } else {
            graph
        };

        if graph.node_count() == 0 || self.iterations == 0 {
            return Ok(0.0);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut mapping = (0..graph.node_count()).collect_vec();
        let mut successes = 0usize;

        for _ in 0..self.iterations {
            if self.cancel.is_cancelled() {
                return Err(Cancelled);
            }
            mapping.shuffle(&mut rng);
            let shuffled = graph.relabeled(&mapping);
            if greedy_coloring(&shuffled).color_count() == optimal_colors {
                successes += 1;
            }
        }

        debug!(
            "greedy matched the optimum in {successes} of {} trials",
            self.iterations
        );
        Ok(1.0 - successes as f64 / self.iterations as f64)
    }
}
