#![warn(missing_docs)]

//! # `chromate`
//!
//! A graph coloring solver and difficulty estimator for region coloring puzzles: the
//! player is handed an image partitioned into regions and must color every region so
//! that no two neighboring regions share a color.
//! Begin by declaring regions and their adjacencies on a [`LevelBuilder`].
//! Convert it to a [`Level`] object, then call [`solve()`](Level::solve) for a
//! guaranteed-minimum coloring or [`difficulty()`](Level::difficulty) for a
//! playability score.
//!
//! The solver and estimator also work directly on a [`Graph`] for callers that
//! already hold an integer-indexed adjacency structure.
//!
//! # Internals
//! Exact coloring is iterative deepening over the color budget k = 1, 2, ...: for
//! each budget, a backtracking search with an explicit cursor either finds a proper
//! coloring or proves the budget infeasible. The first feasible budget is the
//! chromatic number, so results are minimal and, for a fixed adjacency encoding,
//! deterministic.
//!
//! Difficulty is estimated by Monte-Carlo sampling: many trials relabel the graph
//! under a seeded random permutation and run a single-pass first-fit (greedy)
//! coloring, standing in for a naive player. The score is the fraction of trials in
//! which greedy misses the chromatic number — 0 means a naive strategy always
//! succeeds, 1 that it never does. Sampling is seeded per call, so scores are
//! reproducible and safe to cache.
//!
//! Both computations are pure and synchronous; long runs can be cancelled
//! cooperatively through a shared [`CancelFlag`].

pub use builder::{BuilderInvalidReason, LevelBuilder};
pub use cancel::{CancelFlag, Cancelled};
pub use estimator::ComplexityEstimator;
pub use graph::{Color, Coloring, Graph};
pub use level::Level;
pub use solver::{greedy_coloring, ColoringSolver, SolverFailure};

pub mod builder;
pub(crate) mod cancel;
pub(crate) mod estimator;
pub(crate) mod graph;
pub(crate) mod level;
pub(crate) mod solver;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;
