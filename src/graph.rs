use std::ops::Index;

use itertools::Itertools;

/// A color assigned to a node, counted from 0.
pub type Color = usize;

/// An undirected graph over nodes identified by position, `0..node_count()`.
///
/// The adjacency structure is symmetric and free of self-loops; both are upheld by
/// [`add_edge`](Self::add_edge). Nodes carry no payload — callers that need to attach
/// domain identifiers keep their own mapping (see [`Level`](crate::Level)).
///
/// Graphs are plain values. Operations that change the node set return a new graph,
/// so one graph can back any number of solver or estimator runs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// An edgeless graph over `nodes` nodes.
    pub fn with_node_count(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Connect `a` and `b`, recording the edge in both adjacency lists.
    ///
    /// A self-edge is ignored, as is an edge already present. Out-of-range endpoints
    /// panic.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a == b || self.adjacency[a].contains(&b) {
            return;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// The number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The neighbors of `node`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// The number of edges incident to `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// The same graph with node `i` renamed to `mapping[i]`.
    ///
    /// `mapping` must be a permutation of `0..node_count()`.
    pub(crate) fn relabeled(&self, mapping: &[usize]) -> Self {
        let mut adjacency = vec![Vec::new(); self.node_count()];
        for (node, neighbors) in self.adjacency.iter().enumerate() {
            adjacency[mapping[node]] = neighbors.iter().map(|&n| mapping[n]).collect();
        }
        Self { adjacency }
    }

    /// Remove every node of degree below 2, cascading until none remain, then
    /// renumber the survivors contiguously.
    ///
    /// Removing a node lowers its neighbors' degrees, so a long pendant chain
    /// unravels entirely.
    pub(crate) fn without_dangling(&self) -> Self {
        let mut alive = vec![true; self.node_count()];
        loop {
            let doomed = (0..self.node_count())
                .filter(|&node| alive[node])
                .filter(|&node| {
                    self.adjacency[node].iter().filter(|&&n| alive[n]).count() < 2
                })
                .collect_vec();
            if doomed.is_empty() {
                break;
            }
            for node in doomed {
                alive[node] = false;
            }
        }

        let survivors = (0..self.node_count()).filter(|&n| alive[n]).collect_vec();
        let mut new_index = vec![usize::MAX; self.node_count()];
        for (renumbered, &old) in survivors.iter().enumerate() {
            new_index[old] = renumbered;
        }

        let adjacency = survivors
            .iter()
            .map(|&old| {
                self.adjacency[old]
                    .iter()
                    .filter(|&&n| alive[n])
                    .map(|&n| new_index[n])
                    .collect()
            })
            .collect();
        Self { adjacency }
    }
}

/// A total assignment of one [`Color`] per node of some [`Graph`].
///
/// Produced by [`ColoringSolver::solve`](crate::ColoringSolver::solve) and
/// [`greedy_coloring`](crate::greedy_coloring); both always return complete
/// assignments, never partial ones.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Coloring(Vec<Color>);

impl Coloring {
    pub(crate) fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// The number of distinct colors in use, derived as one past the highest color.
    ///
    /// For a coloring returned by the exact solver this is the graph's chromatic
    /// number. An empty coloring uses 0 colors.
    pub fn color_count(&self) -> usize {
        self.0.iter().copied().max().map_or(0, |c| c + 1)
    }

    /// The number of colored nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this coloring covers no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The assigned colors, indexed by node.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Whether no two adjacent nodes of `graph` share a color.
    ///
    /// Also requires the coloring to cover exactly the nodes of `graph`.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.0.len() == graph.node_count()
            && (0..graph.node_count()).all(|node| {
                graph
                    .neighbors(node)
                    .iter()
                    .all(|&n| self.0[n] != self.0[node])
            })
    }
}

impl Index<usize> for Coloring {
    type Output = Color;

    fn index(&self, node: usize) -> &Color {
        &self.0[node]
    }
}
