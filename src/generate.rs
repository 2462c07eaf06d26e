//! Random graph generation with the Barabási–Albert preferential attachment
//! model.

use fxhash::{FxHashMap, FxHashSet};
use rand::{thread_rng, Rng, SeedableRng};
use rand::rngs::StdRng;
use crate::graph::Graph;
use crate::cust_error::ProcessingError;

/// Generates a preferential attachment graph with `n` vertices where every
/// vertex after the first `m` attaches to `m` existing vertices, picked with
/// probability proportional to their current degree.
///
/// Vertex identifiers are `1..=n`; the result always holds `(n - m) * m`
/// edges.
pub fn barabasi_albert(n: usize, m: usize) -> Result<Graph, ProcessingError> {
    generate(n, m, &mut thread_rng())
}

/// Seeded variant of `barabasi_albert` for reproducible instances.
pub fn barabasi_albert_seeded(n: usize, m: usize, seed: u64) -> Result<Graph, ProcessingError> {
    generate(n, m, &mut StdRng::seed_from_u64(seed))
}

fn generate<R: Rng>(n: usize, m: usize, rng: &mut R) -> Result<Graph, ProcessingError> {
    if m < 1 || m >= n {
        return Err(ProcessingError::InvalidParameter(
            format!("Preferential attachment requires 1 <= m < n, got n = {} and m = {}.", n, m)));
    }
    let mut adj: FxHashMap<usize, Vec<usize>> = (1..=n).map(|node| (node, Vec::new())).collect();
    let mut num_edges = 0;
    // Attachment pool: one entry per edge endpoint, so uniform draws from it
    // are degree-proportional.
    let mut pool: Vec<usize> = Vec::new();
    let mut targets: Vec<usize> = (1..=m).collect();
    for source in (m + 1)..=n {
        for &target in &targets {
            adj.get_mut(&source).expect("`source` was preallocated").push(target);
            adj.get_mut(&target).expect("`target` was preallocated").push(source);
            num_edges += 1;
        }
        pool.extend(&targets);
        pool.extend(std::iter::repeat(source).take(m));
        let mut next: FxHashSet<usize> = FxHashSet::default();
        while next.len() < m {
            next.insert(pool[rng.gen_range(0..pool.len())]);
        }
        let mut next: Vec<usize> = next.into_iter().collect();
        next.sort_unstable();
        targets = next;
    }
    Ok(Graph::from_parts(adj, num_edges).expect("generated adjacency is symmetric"))
}
