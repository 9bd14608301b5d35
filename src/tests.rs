#[cfg(test)]
mod tests {
    use unordered_pair::UnorderedPair;

    use crate::builder::{BuilderInvalidReason, LevelBuilder};
    use crate::cancel::{CancelFlag, Cancelled};
    use crate::estimator::ComplexityEstimator;
    use crate::graph::Graph;
    use crate::level::Level;
    use crate::solver::{greedy_coloring, ColoringSolver, SolverFailure};

    fn triangle() -> Graph {
        let mut graph = Graph::with_node_count(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(0, 2);
        graph
    }

    fn path(nodes: usize) -> Graph {
        let mut graph = Graph::with_node_count(nodes);
        for i in 1..nodes {
            graph.add_edge(i - 1, i);
        }
        graph
    }

    fn cycle(nodes: usize) -> Graph {
        let mut graph = path(nodes);
        graph.add_edge(nodes - 1, 0);
        graph
    }

    // Two parts of three nodes each, a_i at even indices and b_i at odd, with a_i
    // adjacent to b_j exactly when i != j. Chromatic number 2, but first-fit in
    // index order needs 3 colors.
    fn crown() -> Graph {
        let mut graph = Graph::with_node_count(6);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    graph.add_edge(2 * i, 2 * j + 1);
                }
            }
        }
        graph
    }

    fn two_triangles() -> Graph {
        let mut graph = Graph::with_node_count(6);
        for offset in [0, 3] {
            graph.add_edge(offset, offset + 1);
            graph.add_edge(offset + 1, offset + 2);
            graph.add_edge(offset, offset + 2);
        }
        graph
    }

    // triangle 0-1-2 with a chain 2-3-4 hanging off it
    fn triangle_with_tail() -> Graph {
        let mut graph = Graph::with_node_count(5);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(0, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph
    }

    fn triangle_level() -> Level {
        LevelBuilder::new()
            .add_region("A")
            .add_region("B")
            .add_region("C")
            .add_adjacency(UnorderedPair::from(("A", "B")))
            .add_adjacency(UnorderedPair::from(("B", "C")))
            .add_adjacency(UnorderedPair::from(("A", "C")))
            .build()
            .unwrap()
    }

    #[test]
    fn triangle_needs_three_colors() {
        let graph = triangle();
        let coloring = ColoringSolver::from(&graph).solve().unwrap();

        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.color_count(), 3);
        assert_ne!(coloring[0], coloring[1]);
        assert_ne!(coloring[1], coloring[2]);
        assert_ne!(coloring[0], coloring[2]);
    }

    #[test]
    fn path_of_four_needs_two_colors() {
        let graph = path(4);
        let coloring = ColoringSolver::from(&graph).solve().unwrap();

        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.color_count(), 2);
    }

    #[test]
    fn empty_graph_yields_empty_coloring() {
        let graph = Graph::with_node_count(0);
        let coloring = ColoringSolver::from(&graph).solve().unwrap();

        assert!(coloring.is_empty());
        assert_eq!(coloring.color_count(), 0);
    }

    #[test]
    fn single_node_needs_one_color() {
        let graph = Graph::with_node_count(1);
        let coloring = ColoringSolver::from(&graph).solve().unwrap();

        assert_eq!(coloring.color_count(), 1);
        assert_eq!(coloring[0], 0);
    }

    #[test]
    fn five_cycle_needs_three_colors() {
        let graph = cycle(5);
        let coloring = ColoringSolver::from(&graph).solve().unwrap();

        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.color_count(), 3);
    }

    #[test]
    fn two_disconnected_triangles_need_three_colors() {
        let graph = two_triangles();
        let coloring = ColoringSolver::from(&graph).solve().unwrap();

        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.color_count(), 3);
    }

    #[test]
    fn solver_is_deterministic() {
        let graph = crown();
        let first = ColoringSolver::from(&graph).solve().unwrap();
        let second = ColoringSolver::from(&graph).solve().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn exact_solver_beats_greedy_on_the_crown() {
        let graph = crown();

        let exact = ColoringSolver::from(&graph).solve().unwrap();
        assert_eq!(exact.color_count(), 2);

        // first-fit in index order pairs each a_i with its non-neighbor b_i and
        // paints itself into a third color
        let greedy = greedy_coloring(&graph);
        assert!(greedy.is_proper(&graph));
        assert_eq!(greedy.color_count(), 3);
    }

    #[test]
    fn greedy_is_proper_and_bounded() {
        for graph in [triangle(), path(4), cycle(5), crown(), two_triangles(), Graph::with_node_count(4)] {
            let greedy = greedy_coloring(&graph);
            let exact = ColoringSolver::from(&graph).solve().unwrap();
            let max_degree = (0..graph.node_count()).map(|n| graph.degree(n)).max().unwrap_or(0);

            assert!(greedy.is_proper(&graph));
            assert!(greedy.color_count() >= exact.color_count());
            assert!(greedy.color_count() <= max_degree + 1);
        }
    }

    #[test]
    fn greedy_colors_edgeless_graph_with_one_color() {
        let graph = Graph::with_node_count(7);
        let coloring = greedy_coloring(&graph);

        assert_eq!(coloring.len(), 7);
        assert_eq!(coloring.color_count(), 1);
    }

    #[test]
    fn estimator_is_reproducible() {
        let graph = crown();
        let estimator = ComplexityEstimator::new().iterations(200).seed(42);

        let first = estimator.estimate(&graph, 2).unwrap();
        let second = estimator.estimate(&graph, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn estimator_scores_the_crown_strictly_between_trivial_and_hopeless() {
        let graph = crown();
        let score = ComplexityEstimator::new()
            .iterations(500)
            .estimate(&graph, 2)
            .unwrap();

        // some node orders trip first-fit into a third color, some don't
        assert!(score > 0.0);
        assert!(score < 1.0);
    }

    #[test]
    fn estimator_scores_triangles_as_trivial() {
        // every node order colors a triangle optimally
        for graph in [triangle(), two_triangles()] {
            let score = ComplexityEstimator::new()
                .iterations(300)
                .estimate(&graph, 3)
                .unwrap();
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn estimator_scores_edgeless_graph_as_trivial() {
        let graph = Graph::with_node_count(5);
        let score = ComplexityEstimator::new()
            .iterations(100)
            .estimate(&graph, 1)
            .unwrap();

        assert_eq!(score, 0.0);
    }

    #[test]
    fn estimator_short_circuits_degenerate_inputs() {
        let empty = Graph::with_node_count(0);
        assert_eq!(ComplexityEstimator::new().estimate(&empty, 0).unwrap(), 0.0);

        let graph = crown();
        let score = ComplexityEstimator::new()
            .iterations(0)
            .estimate(&graph, 2)
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn stripping_changes_the_score_of_a_pendant_heavy_graph() {
        let graph = path(4);

        // some orders make first-fit spend a third color on a path
        let unstripped = ComplexityEstimator::new()
            .iterations(500)
            .estimate(&graph, 2)
            .unwrap();
        assert!(unstripped > 0.0);

        // the whole path unravels as dangling, leaving nothing to sample
        let stripped = ComplexityEstimator::new()
            .iterations(500)
            .strip_dangling(true)
            .estimate(&graph, 2)
            .unwrap();
        assert_eq!(stripped, 0.0);
    }

    #[test]
    fn stripping_keeps_the_cyclic_core() {
        let stripped = triangle_with_tail().without_dangling();

        assert_eq!(stripped.node_count(), 3);
        for node in 0..3 {
            assert_eq!(stripped.degree(node), 2);
        }

        let coloring = ColoringSolver::from(&stripped).solve().unwrap();
        assert_eq!(coloring.color_count(), 3);
    }

    #[test]
    fn relabeling_preserves_the_chromatic_number() {
        let graph = crown();
        let reversed = graph.relabeled(&[5, 4, 3, 2, 1, 0]);

        let coloring = ColoringSolver::from(&reversed).solve().unwrap();
        assert!(coloring.is_proper(&reversed));
        assert_eq!(coloring.color_count(), 2);
    }

    #[test]
    fn solver_reports_cancellation() {
        let graph = triangle();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = ColoringSolver::from(&graph)
            .with_cancel_flag(cancel)
            .solve();
        assert_eq!(result, Err(SolverFailure::Cancelled));
    }

    #[test]
    fn estimator_reports_cancellation() {
        let graph = triangle();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = ComplexityEstimator::new()
            .with_cancel_flag(cancel)
            .estimate(&graph, 3);
        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn builder_produces_the_declared_adjacency() {
        let level = triangle_level();

        assert_eq!(level.region_count(), 3);
        assert_eq!(level.region_index("A"), Some(0));
        assert_eq!(level.region_id(2), Some("C"));

        let mut neighbors = level.neighbors_of("B").unwrap();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["A", "C"]);
    }

    #[test]
    fn builder_latches_on_unknown_region() {
        let mut builder = LevelBuilder::new();
        builder
            .add_region("A")
            .add_adjacency(UnorderedPair::from(("A", "B")));

        assert!(builder.is_valid().is_some());

        // the builder is latched invalid; declaring "B" afterwards does nothing
        builder.add_region("B");
        assert_eq!(
            builder.build().unwrap_err(),
            &vec![BuilderInvalidReason::UnknownRegion("B".to_owned())]
        );
    }

    #[test]
    fn builder_collapses_duplicates_and_ignores_self_pairs() {
        let level = LevelBuilder::new()
            .add_region("A")
            .add_region("A")
            .add_region("B")
            .add_adjacency(UnorderedPair::from(("A", "B")))
            .add_adjacency(UnorderedPair::from(("B", "A")))
            .add_adjacency(UnorderedPair::from(("A", "A")))
            .build()
            .unwrap();

        assert_eq!(level.region_count(), 2);
        assert_eq!(level.graph().degree(0), 1);
        assert_eq!(level.graph().degree(1), 1);
    }

    #[test]
    fn empty_level_solves_trivially() {
        let level = LevelBuilder::new().build().unwrap();

        assert_eq!(level.region_count(), 0);
        let coloring = level.solve().unwrap();
        assert!(coloring.is_empty());

        let score = level.difficulty(&ComplexityEstimator::new()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn solved_level_round_trips_to_region_colors() {
        let level = triangle_level();
        let coloring = level.solve().unwrap();
        let colors = level.region_colors(&coloring);

        assert_eq!(colors.len(), 3);
        for id in ["A", "B", "C"] {
            assert!(colors.contains_key(id));
        }
        assert_ne!(colors["A"], colors["B"]);
        assert_ne!(colors["B"], colors["C"]);
        assert_ne!(colors["A"], colors["C"]);
    }

    #[test]
    fn level_difficulty_runs_the_whole_pipeline() {
        let level = triangle_level();
        let estimator = ComplexityEstimator::new().iterations(200);

        assert_eq!(level.difficulty(&estimator).unwrap(), 0.0);
    }

    #[test]
    fn level_display_lists_regions_with_neighbors() {
        let level = LevelBuilder::new()
            .add_region("coast")
            .add_region("plains")
            .add_region("island")
            .add_adjacency(UnorderedPair::from(("coast", "plains")))
            .build()
            .unwrap();

        let listing = format!("{level}");
        assert!(listing.contains("coast: plains"));
        assert!(listing.contains("plains: coast"));
        assert!(listing.contains("island:"));
    }
}
