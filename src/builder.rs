//! Building [`Level`]s from domain-side region ids and adjacency pairs.

use std::collections::HashMap;

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::graph::Graph;
use crate::level::Level;

/// Reasons a builder may become invalid while building.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// An adjacency referenced a region id never declared with
    /// [`add_region`](LevelBuilder::add_region).
    UnknownRegion(String),
}

/// Accumulates named puzzle regions and the adjacencies between them, producing a
/// [`Level`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their
/// state at some point. Once a call has made the builder invalid, every later call
/// does nothing and [`build`](Self::build) reports the collected reasons.
#[derive(Clone, Default)]
pub struct LevelBuilder {
    // first-seen declaration order; a region's position here is its node index
    region_ids: Vec<String>,
    region_indices: HashMap<String, usize>,
    adjacency: UnGraphMap<usize, ()>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl LevelBuilder {
    /// A builder with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a region. Redeclaring an id does nothing; the first declaration fixes
    /// the region's node index.
    pub fn add_region(&mut self, id: impl Into<String>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let id = id.into();
        if !self.region_indices.contains_key(&id) {
            let index = self.region_ids.len();
            self.region_indices.insert(id.clone(), index);
            self.region_ids.push(id);
            self.adjacency.add_node(index);
        }

        self
    }

    /// Mark two regions as neighbors. The order within the pair does not matter and
    /// repeating a pair does nothing.
    ///
    /// A pair naming the same region twice carries no adjacency information and is
    /// ignored. Both regions must already be declared; otherwise the builder enters
    /// an [`UnknownRegion`](BuilderInvalidReason::UnknownRegion) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_adjacency(&mut self, regions: UnorderedPair<&str>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let UnorderedPair(a, b) = regions;
        if a == b {
            return self;
        }

        for id in [a, b] {
            if !self.region_indices.contains_key(id) {
                self.invalid_reasons
                    .push(BuilderInvalidReason::UnknownRegion(id.to_owned()));
                return self;
            }
        }

        self.adjacency
            .add_edge(self.region_indices[a], self.region_indices[b], ());
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)`
    /// otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Level`], flattening the adjacency
    /// into the compact integer-indexed [`Graph`](crate::Graph) the solver and
    /// estimator consume.
    ///
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Level, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut graph = Graph::with_node_count(self.region_ids.len());
        for (a, b, _) in self.adjacency.all_edges() {
            graph.add_edge(a, b);
        }

        Ok(Level::new(
            self.region_ids.clone(),
            self.region_indices.clone(),
            graph,
        ))
    }
}
