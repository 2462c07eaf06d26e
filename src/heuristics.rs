//! Greedy approximation used to seed the exact search with an upper bound.

use fxhash::FxHashSet;
use crate::graph::Graph;
use crate::reduction::reduce;
use crate::cust_error::ProcessingError;

/// Picks the branch vertex: a vertex of maximum degree.
pub fn max_degree_vertex(graph: &Graph) -> Option<usize> {
    graph.highest_degree().map(|(node, _)| node)
}

/// Computes an upper bound on the minimum vertex cover size by reducing the
/// graph once and then repeatedly moving the vertex of highest degree into a
/// working cover until no edge remains.
///
/// The reduction pass is seeded with the edge count as a placeholder bound;
/// no degree can exceed the number of edges, so the high-degree rule stays
/// silent during this pass. The returned size is a greedy bound, not a tight
/// one.
pub fn high_degree_heuristic(graph: &Graph) -> Result<usize, ProcessingError> {
    let (mut g, mut solution) = reduce(graph, &FxHashSet::default(), graph.num_edges())?;
    while g.num_edges() > 0 {
        let v_max = max_degree_vertex(&g).expect("`g` still has edges");
        g = g.remove(v_max)?;
        solution.insert(v_max);
    }
    Ok(solution.len())
}
