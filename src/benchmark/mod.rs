//! Benchmark utilities for ANN evaluation.
//!
//! Provides metrics, synthetic dataset generation, and sweep utilities for
//! measuring search quality and throughput:
//!
//! - **Accuracy**: recall@k against brute-force ground truth
//! - **Speed**: queries per second across a sweep of search budgets
//!
//! Reference datasets in the fvecs/ivecs layouts (SIFT-1M and friends,
//! <https://ann-benchmarks.com/>) load through [`crate::io`] and plug into
//! the same sweep.

pub mod datasets;
pub mod evaluation;
pub mod metrics;

pub use datasets::{
    build_knn_graph, compute_all_ground_truth, compute_ground_truth, generate_clustered,
    generate_uniform,
};
pub use evaluation::{run_budget_sweep, SweepPoint};
pub use metrics::{mean_recall, recall_at_k};
