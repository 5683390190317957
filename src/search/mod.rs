//! Greedy best-first traversal over a proximity graph.
//!
//! The searcher answers approximate top-k queries by walking a precomputed
//! neighbor graph: score a handful of pseudo-random seeds, start from the
//! best one, then repeatedly expand the closest unexpanded candidate and
//! admit improving neighbors into a bounded result set.
//!
//! The `search_budget` argument is the exploration-factor knob common to
//! graph ANN methods: the effective beam `ef = max(search_budget, topk)`
//! bounds the result set, and the frontier only receives nodes that were
//! admitted into it, so a larger budget explores more of the graph and
//! trades throughput for recall.

mod visited;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::path::Path;

use crate::distance::l2_sq;
use crate::error::ConfigError;
use crate::graph::NeighborGraph;
use crate::io::{self, LoadError};
use crate::store::VectorStore;
use visited::VisitedMarks;

/// Number of pseudo-random seed candidates scored before traversal.
const SEED_ATTEMPTS: usize = 32;

/// Candidate node during traversal.
#[derive(Clone, Copy, PartialEq)]
struct Candidate {
    id: u32,
    distance: f32,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Max-heap: the worst retained result sits on top for eviction.
        // total_cmp gives IEEE 754 total ordering (NaN-safe).
        self.distance.total_cmp(&other.distance)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// xorshift*-style mixer turning a running counter into a seed id.
#[inline]
fn mix(mut x: u64) -> u64 {
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

/// Greedy searcher over a proximity graph and its vector store.
///
/// Holds its own visited-flag scratch buffer; `search` takes `&mut self`,
/// which makes exclusive ownership of that scratch a compile-time fact.
/// Concurrent serving means one searcher per thread over shared read-only
/// graph and store data.
pub struct GraphSearcher {
    graph: NeighborGraph,
    store: VectorStore,
    visited: VisitedMarks,
}

impl GraphSearcher {
    /// Build a searcher from an in-memory graph and store.
    ///
    /// Rejects an empty graph and a node-count/row-count mismatch.
    pub fn new(graph: NeighborGraph, store: VectorStore) -> Result<Self, ConfigError> {
        if graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }
        if graph.len() != store.n_rows() {
            return Err(ConfigError::RowCountMismatch {
                graph: graph.len(),
                store: store.n_rows(),
            });
        }
        let visited = VisitedMarks::new(store.n_rows());
        Ok(Self {
            graph,
            store,
            visited,
        })
    }

    /// Load a searcher from an ivecs graph file and an fvecs vector file.
    pub fn open(
        graph_path: impl AsRef<Path>,
        vectors_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let rows = io::load_ivecs(graph_path)?;
        let graph = NeighborGraph::new(rows)?;
        let store = io::load_fvecs(vectors_path)?;
        Ok(Self::new(graph, store)?)
    }

    /// Dimensionality of the indexed vectors.
    pub fn dim(&self) -> usize {
        self.store.dim()
    }

    /// Number of indexed vectors.
    pub fn n_rows(&self) -> usize {
        self.store.n_rows()
    }

    /// Approximate top-k nearest neighbors of `query`, ascending by
    /// distance.
    ///
    /// Returns up to `topk` ids; fewer when the reachable component is
    /// smaller than that. Identical calls on an unmutated searcher return
    /// identical sequences: the seed mixer restarts its counter every call
    /// and the visited scratch is restored on every exit path.
    pub fn search(
        &mut self,
        query: &[f32],
        topk: usize,
        search_budget: usize,
    ) -> Result<Vec<u32>, ConfigError> {
        if topk == 0 {
            return Err(ConfigError::InvalidParameter(
                "topk must be at least 1".to_string(),
            ));
        }
        if query.len() != self.store.dim() {
            return Err(ConfigError::DimensionMismatch {
                expected: self.store.dim(),
                actual: query.len(),
            });
        }

        let ef = search_budget.max(topk);
        let n_rows = self.store.n_rows() as u64;

        let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(ef);
        let mut results: BinaryHeap<Candidate> = BinaryHeap::with_capacity(ef + 1);

        // Score up to SEED_ATTEMPTS mixed-counter ids and keep the best as
        // the traversal entry point. Every scored seed is marked visited.
        let mut best = Candidate {
            id: 0,
            distance: f32::INFINITY,
        };
        for i in 0..SEED_ATTEMPTS {
            let id = (mix(i as u64) % n_rows) as u32;
            if !self.visited.mark(id) {
                continue;
            }
            let distance = l2_sq(query, self.store.get(id));
            if distance < best.distance {
                best = Candidate { id, distance };
            }
        }

        frontier.push(Reverse(best));
        results.push(best);

        while let Some(Reverse(current)) = frontier.pop() {
            for &neighbor in self.graph.neighbors(current.id) {
                if !self.visited.mark(neighbor) {
                    continue;
                }
                let distance = l2_sq(query, self.store.get(neighbor));
                let worst = results.peek().map_or(f32::INFINITY, |c| c.distance);
                if results.len() < ef || distance < worst {
                    let candidate = Candidate {
                        id: neighbor,
                        distance,
                    };
                    frontier.push(Reverse(candidate));
                    results.push(candidate);
                    if results.len() > ef {
                        results.pop();
                    }
                }
            }
        }

        self.visited.reset();

        // Drain worst-first, filling from the tail so ids come out ascending
        // by distance, then keep the best topk.
        let mut out = vec![0u32; results.len()];
        let mut slot = results.len();
        while let Some(candidate) = results.pop() {
            slot -= 1;
            out[slot] = candidate.id;
        }
        out.truncate(topk);
        Ok(out)
    }
}
