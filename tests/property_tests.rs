//! Property-based tests for the search and diversification invariants.
//!
//! These hold regardless of input:
//! - Squared L2 is a non-negative, symmetric form with zero self-distance
//! - recall@k stays in [0, 1]
//! - Diversification respects the degree cap and keeps the nearest raw
//!   neighbor
//! - Search returns at most topk distinct, distance-sorted ids

use proptest::prelude::*;

use nigh::benchmark::{build_knn_graph, recall_at_k};
use nigh::distance::l2_sq;
use nigh::{DiversifyParams, GraphDiversifier, GraphSearcher, VectorStore};

prop_compose! {
    fn arb_vector(dim: usize)(vec in prop::collection::vec(-10.0f32..10.0, dim)) -> Vec<f32> {
        vec
    }
}

prop_compose! {
    fn arb_points(dim: usize)(rows in prop::collection::vec(arb_vector(dim), 8..30)) -> Vec<Vec<f32>> {
        rows
    }
}

mod distance_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn l2_sq_non_negative(a in arb_vector(32), b in arb_vector(32)) {
            prop_assert!(l2_sq(&a, &b) >= 0.0);
        }

        #[test]
        fn l2_sq_symmetric(a in arb_vector(16), b in arb_vector(16)) {
            prop_assert_eq!(l2_sq(&a, &b), l2_sq(&b, &a));
        }

        #[test]
        fn l2_sq_zero_on_self(a in arb_vector(16)) {
            prop_assert_eq!(l2_sq(&a, &a), 0.0);
        }
    }
}

mod recall_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn recall_stays_in_unit_interval(
            gt in prop::collection::vec(0u32..100, 1..20),
            ret in prop::collection::vec(0u32..100, 0..20),
            k in 1usize..20,
        ) {
            let r = recall_at_k(&gt, &ret, k);
            prop_assert!((0.0..=1.0).contains(&r));
        }
    }
}

mod diversify_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn cap_and_nearest_neighbor_invariants(rows in arb_points(3)) {
            let store = VectorStore::from_rows(&rows).unwrap();
            let k = 4.min(rows.len() - 1).max(1);
            let raw = build_knn_graph(&store, k).unwrap();

            let cap = 6;
            let result = GraphDiversifier::new(DiversifyParams { max_degree: cap })
                .diversify(&raw, &store)
                .unwrap();

            prop_assert_eq!(result.len(), rows.len());
            for i in 0..result.len() as u32 {
                let row = result.neighbors(i);
                prop_assert!(!row.is_empty());
                prop_assert!(row.len() <= cap);
                prop_assert_eq!(row[0], raw.neighbors(i)[0]);
                prop_assert!(row.iter().all(|&nb| (nb as usize) < rows.len()));
            }
        }
    }
}

mod search_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn results_bounded_and_sorted(
            rows in arb_points(3),
            query in arb_vector(3),
            topk in 1usize..8,
        ) {
            let store = VectorStore::from_rows(&rows).unwrap();
            let k = 4.min(rows.len() - 1).max(1);
            let raw = build_knn_graph(&store, k).unwrap();
            let mut searcher = GraphSearcher::new(raw, store).unwrap();

            let result = searcher.search(&query, topk, 16).unwrap();
            prop_assert!(result.len() <= topk);

            let dists: Vec<f32> = result
                .iter()
                .map(|&id| l2_sq(&query, &rows[id as usize]))
                .collect();
            for w in dists.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
        }
    }
}
