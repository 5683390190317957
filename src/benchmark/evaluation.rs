//! Throughput/recall sweeps across search budgets.
//!
//! Measures the fundamental graph-ANN tradeoff: each budget point trades
//! queries-per-second against recall@k. Rounds are repeated and the best
//! QPS and recall per point are reported, which irons out warm-up noise.

use std::time::Instant;

use crate::error::ConfigError;
use crate::search::GraphSearcher;
use crate::store::VectorStore;

use super::metrics::mean_recall;

/// One measured point of a budget sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepPoint {
    /// Search budget used for every query at this point.
    pub budget: usize,
    /// Best observed queries per second across rounds.
    pub qps: f64,
    /// Best observed mean recall@topk across rounds.
    pub recall: f32,
}

/// Run every query at every budget for `rounds` rounds, keeping the best
/// QPS and recall observed per budget.
pub fn run_budget_sweep(
    searcher: &mut GraphSearcher,
    queries: &VectorStore,
    ground_truth: &[Vec<u32>],
    topk: usize,
    budgets: &[usize],
    rounds: usize,
) -> Result<Vec<SweepPoint>, ConfigError> {
    let mut points: Vec<SweepPoint> = budgets
        .iter()
        .map(|&budget| SweepPoint {
            budget,
            qps: 0.0,
            recall: 0.0,
        })
        .collect();

    let n_queries = queries.n_rows();
    let mut retrieved: Vec<Vec<u32>> = vec![Vec::new(); n_queries];

    for _ in 0..rounds.max(1) {
        for (point, &budget) in points.iter_mut().zip(budgets) {
            let start = Instant::now();
            for q in 0..n_queries as u32 {
                retrieved[q as usize] = searcher.search(queries.get(q), topk, budget)?;
            }
            let elapsed = start.elapsed().as_secs_f64();

            let qps = if elapsed > 0.0 {
                n_queries as f64 / elapsed
            } else {
                0.0
            };
            let recall = mean_recall(ground_truth, &retrieved, topk);
            point.qps = point.qps.max(qps);
            point.recall = point.recall.max(recall);
        }
    }

    Ok(points)
}
