//! Property tests for coverage walks and Held-Karp tours.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_coverage::coverage::{CoverageConfig, CoverageSearch};
use u_coverage::distance::DistanceMatrix;
use u_coverage::graph::Graph;
use u_coverage::tsp::{solve_tsp, tour_cost};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A connected graph: a random spanning tree plus random extra edges.
fn connected_graph() -> impl Strategy<Value = Graph<usize>> {
    (1usize..14)
        .prop_flat_map(|n| {
            let parents: Vec<BoxedStrategy<usize>> =
                (1..n).map(|i| (0..i).boxed()).collect();
            let extras = prop::collection::vec((0..n, 0..n, 1u32..5), 0..n * 2);
            (Just(n), parents, extras)
        })
        .prop_map(|(n, parents, extras)| {
            let mut graph = Graph::new();
            for i in 0..n {
                graph.add_node(i);
            }
            for (i, &p) in parents.iter().enumerate() {
                graph.add_unit_edge(i + 1, p).expect("tree edge");
            }
            for (a, b, w) in extras {
                if a != b {
                    graph.add_edge(a, b, f64::from(w)).expect("extra edge");
                }
            }
            graph
        })
}

/// A symmetric complete matrix with small integer weights.
fn symmetric_matrix(max_n: usize) -> impl Strategy<Value = DistanceMatrix> {
    (2usize..=max_n).prop_flat_map(|n| {
        prop::collection::vec(1u32..50, n * n).prop_map(move |raw| {
            let mut dm = DistanceMatrix::new(n);
            for i in 0..n {
                for j in (i + 1)..n {
                    let w = f64::from(raw[i * n + j]);
                    dm.set(i, j, w);
                    dm.set(j, i, w);
                }
            }
            dm
        })
    })
}

/// Exhaustive minimum over all cycles anchored at 0.
fn brute_force(dm: &DistanceMatrix) -> f64 {
    fn permute(rest: &mut [usize], k: usize, dm: &DistanceMatrix, best: &mut f64) {
        if k == rest.len() {
            let mut order = vec![0];
            order.extend_from_slice(rest);
            *best = best.min(tour_cost(dm, &order));
            return;
        }
        for i in k..rest.len() {
            rest.swap(k, i);
            permute(rest, k + 1, dm, best);
            rest.swap(k, i);
        }
    }
    let mut rest: Vec<usize> = (1..dm.size()).collect();
    let mut best = f64::INFINITY;
    permute(&mut rest, 0, dm, &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn coverage_visits_every_cell_once(graph in connected_graph(), seed in any::<u64>()) {
        init_logging();
        let config = CoverageConfig::default().with_seed(seed).with_max_attempts(5);
        let start = seed as usize % graph.num_nodes();
        let walk = CoverageSearch::new(&graph, config).run(start).expect("valid start");

        prop_assert_eq!(walk.len(), graph.num_nodes());
        prop_assert!(walk.covers(&graph));
        prop_assert_eq!(walk.cells[0], start);
    }

    #[test]
    fn coverage_cells_extend_from_covered_cells(graph in connected_graph(), seed in any::<u64>()) {
        let search = CoverageSearch::new(&graph, CoverageConfig::default().with_max_attempts(3));
        let mut rng = StdRng::seed_from_u64(seed);
        let walk = search.run_with_rng(0, &mut rng).expect("valid start");

        for (i, &cell) in walk.cells.iter().enumerate().skip(1) {
            prop_assert!(walk.cells[..i].iter().any(|&earlier| graph.are_adjacent(earlier, cell)));
        }
        prop_assert!(walk.is_drivable(&graph));
        prop_assert_eq!(walk.route.len(), walk.cells.len() + walk.extraneous_visits);
        prop_assert_eq!(walk.extraneous_visits, graph.num_nodes() - 1);
    }

    #[test]
    fn held_karp_matches_brute_force(dm in symmetric_matrix(7)) {
        init_logging();
        let tour = solve_tsp(&dm).expect("small matrix");
        prop_assert_eq!(tour.cost, brute_force(&dm));
    }

    #[test]
    fn held_karp_order_round_trips(dm in symmetric_matrix(9)) {
        let tour = solve_tsp(&dm).expect("small matrix");
        let n = dm.size();

        prop_assert_eq!(tour.order.len(), n);
        prop_assert_eq!(tour.order[0], 0);
        let mut sorted = tour.order.clone();
        sorted.sort();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(tour_cost(&dm, &tour.order), tour.cost);
    }

    #[test]
    fn held_karp_invariant_under_relabeling(
        (dm, perm) in symmetric_matrix(8).prop_flat_map(|dm| {
            let rest: Vec<usize> = (1..dm.size()).collect();
            (Just(dm), Just(rest).prop_shuffle())
        })
    ) {
        let n = dm.size();
        let mut label = vec![0];
        label.extend(perm);

        let mut relabeled = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                relabeled.set(label[i], label[j], dm.get(i, j));
            }
        }

        let a = solve_tsp(&dm).expect("small matrix");
        let b = solve_tsp(&relabeled).expect("small matrix");
        prop_assert_eq!(a.cost, b.cost);
    }

    #[test]
    fn held_karp_isolated_vertex_is_infeasible(dm in symmetric_matrix(7), pick in any::<usize>()) {
        let n = dm.size();
        let isolated = pick % n;
        let mut dm = dm;
        for other in 0..n {
            if other != isolated {
                dm.set(isolated, other, f64::INFINITY);
                dm.set(other, isolated, f64::INFINITY);
            }
        }
        let tour = solve_tsp(&dm).expect("small matrix");
        prop_assert!(tour.cost.is_infinite());
        prop_assert!(!tour.is_feasible());
    }
}

#[test]
fn graph_matrix_tour_pipeline() {
    init_logging();
    // Four waypoints on a 2x1 rectangle, fully connected by straight legs.
    let pts = [(0.0f64, 0.0f64), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)];
    let mut graph = Graph::new();
    for p in pts {
        graph.add_node(p);
    }
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let d = ((pts[i].0 - pts[j].0).powi(2) + (pts[i].1 - pts[j].1).powi(2)).sqrt();
            graph.add_edge(i, j, d).expect("valid edge");
        }
    }

    let dm = DistanceMatrix::from_graph(&graph);
    assert!(dm.is_complete());
    assert!(dm.is_symmetric(1e-12));

    let tour = solve_tsp(&dm).expect("small matrix");
    assert!((tour.cost - 6.0).abs() < 1e-10);
    assert!((tour_cost(&dm, &tour.order) - tour.cost).abs() < 1e-10);
}

