//! Occlusion-based graph diversification.
//!
//! Rewrites a raw k-NN graph into a degree-bounded graph that navigates
//! better under greedy search. Dense k-NN rows are redundant: many entries
//! sit behind a nearer neighbor in the same direction and add nothing to
//! routing. The rewrite runs in three phases over the whole graph:
//!
//! 1. **Forward pruning** — per node, keep the nearest neighbor
//!    unconditionally, then keep each further neighbor `y` only if no
//!    already-kept `x` satisfies `dist(x, y) < dist(host, y)`.
//! 2. **Reverse edges** — record `nb -> i` whenever `i` keeps `nb` but lies
//!    outside `nb`'s original neighborhood radius, a long-range relation
//!    `nb`'s own forward list cannot express.
//! 3. **Augmentation** — re-rank kept and reverse candidates together by
//!    distance (ties by id) and append the non-occluded remainder until the
//!    degree cap is reached.
//!
//! All distances are squared L2; the input graph is never mutated.

use std::path::Path;

use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::graph::NeighborGraph;
use crate::io::{self, LoadError};
use crate::store::VectorStore;

/// Working adjacency row; inline capacity sized for typical kept degrees.
type NeighborRow = SmallVec<[u32; 32]>;

/// Parameters for one diversification run.
#[derive(Clone, Debug)]
pub struct DiversifyParams {
    /// Maximum neighbors retained per node after augmentation.
    pub max_degree: usize,
}

impl Default for DiversifyParams {
    fn default() -> Self {
        Self { max_degree: 64 }
    }
}

/// Candidate neighbor ranked by distance to its host, ties by id.
#[derive(Clone, Copy)]
struct RankedNeighbor {
    id: u32,
    distance: f32,
}

/// Offline pass converting a raw k-NN graph into a diversified one.
pub struct GraphDiversifier {
    params: DiversifyParams,
}

impl GraphDiversifier {
    pub fn new(params: DiversifyParams) -> Self {
        Self { params }
    }

    /// Diversify `graph` against `store`, returning the rewritten graph.
    ///
    /// Requires a non-empty graph whose node count matches the store and
    /// whose every row holds at least one neighbor, with rows sorted
    /// ascending by distance to their owning node.
    pub fn diversify(
        &self,
        graph: &NeighborGraph,
        store: &VectorStore,
    ) -> Result<NeighborGraph, ConfigError> {
        if self.params.max_degree == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_degree must be at least 1".to_string(),
            ));
        }
        if graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }
        if graph.len() != store.n_rows() {
            return Err(ConfigError::RowCountMismatch {
                graph: graph.len(),
                store: store.n_rows(),
            });
        }
        for (node, row) in graph.rows().iter().enumerate() {
            if row.is_empty() {
                return Err(ConfigError::InvalidParameter(format!(
                    "node {node} has an empty neighbor list"
                )));
            }
        }

        let n = graph.len();
        let cap = self.params.max_degree;
        let mut diversified: Vec<NeighborRow> = (0..n).map(|_| NeighborRow::new()).collect();
        let mut radius = vec![0f32; n];

        // Forward occlusion pruning; each node is independent.
        for i in 0..n {
            let host = i as u32;
            let neighbors = graph.neighbors(host);
            let host2nbs: Vec<f32> = neighbors.iter().map(|&nb| store.dist(host, nb)).collect();
            // Radius of the original neighborhood, not the pruned one.
            radius[i] = host2nbs[host2nbs.len() - 1];

            let kept = &mut diversified[i];
            kept.push(neighbors[0]);
            for (j, &y) in neighbors.iter().enumerate().skip(1) {
                let occluded = kept.iter().any(|&x| store.dist(x, y) < host2nbs[j]);
                if !occluded {
                    kept.push(y);
                }
            }
        }

        // Reverse edges for relations outside the target's original radius.
        let mut reverse: Vec<Vec<u32>> = vec![Vec::new(); n];
        for i in 0..n {
            let host = i as u32;
            for &nb in &diversified[i] {
                let dist = store.dist(nb, host);
                if dist > radius[nb as usize] {
                    reverse[nb as usize].push(host);
                }
            }
        }

        // Augmentation: re-rank kept + reverse candidates and append the
        // non-occluded remainder up to the degree cap.
        for i in 0..n {
            let host = i as u32;
            let kept_len = diversified[i].len();
            if kept_len >= cap {
                diversified[i].truncate(cap);
                continue;
            }

            let mut ranked: Vec<RankedNeighbor> = diversified[i]
                .iter()
                .chain(reverse[i].iter())
                .map(|&nb| RankedNeighbor {
                    id: nb,
                    distance: store.dist(host, nb),
                })
                .collect();
            ranked.sort_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| a.id.cmp(&b.id))
            });

            let row = &mut diversified[i];
            for candidate in &ranked[kept_len..] {
                let occluded = row
                    .iter()
                    .any(|&x| store.dist(x, candidate.id) < candidate.distance);
                if !occluded {
                    row.push(candidate.id);
                    if row.len() >= cap {
                        break;
                    }
                }
            }
        }

        NeighborGraph::new(diversified.into_iter().map(|row| row.into_vec()).collect())
    }

    /// File-level convenience: load an ivecs k-NN graph and an fvecs vector
    /// file, diversify, and write the result in the variable-width ivecs
    /// layout.
    pub fn diversify_files(
        &self,
        knn_path: impl AsRef<Path>,
        vectors_path: impl AsRef<Path>,
        out_path: impl AsRef<Path>,
    ) -> Result<(), LoadError> {
        let graph = NeighborGraph::new(io::load_ivecs(knn_path)?)?;
        let store = io::load_fvecs(vectors_path)?;
        let diversified = self.diversify(&graph, &store)?;
        io::save_ivecs(out_path, diversified.rows())
    }
}
