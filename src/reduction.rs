//! Reduction rules for the minimum vertex cover search.
//! Three rules are applied to a fixpoint:
//! * Degree-1: the sole neighbor of a pendant vertex goes into the cover.
//! * Degree-2 (simplified): both neighbors of a degree-2 vertex go into the
//!   cover. This is the blunt variant of the textbook folding rule; it keeps
//!   the cover valid but does not attempt vertex folding.
//! * High-degree: any vertex whose degree exceeds the incumbent bound goes
//!   into the cover, since no cover below the bound can leave that many
//!   incident edges to its neighbors.

use fxhash::FxHashSet;
use crate::graph::Graph;
use crate::cust_error::ProcessingError;

/// Picks the smallest identifier of `set`, so rule application order is
/// reproducible.
fn smallest(set: &FxHashSet<usize>) -> Option<usize> {
    set.iter().min().copied()
}

/// Exhaustively applies the three reduction rules to `graph` under the
/// incumbent bound `best`.
///
/// Returns the reduced graph and `solution` augmented with every vertex the
/// rules forced into the cover. The rules fire in order degree-1, degree-2,
/// high-degree; whenever a full pass fires at least once, the pass restarts.
pub fn reduce(graph: &Graph, solution: &FxHashSet<usize>, best: usize)
    -> Result<(Graph, FxHashSet<usize>), ProcessingError>
{
    let mut g = graph.clone();
    let mut s = solution.clone();
    let mut changed = true;
    while changed {
        changed = false;

        while let Some(pendant) = smallest(&g.degree_exactly(1)) {
            let neighbor = g.neighbors(pendant)?[0];
            g = g.remove(neighbor)?;
            s.insert(neighbor);
            changed = true;
        }

        while let Some(node) = smallest(&g.degree_exactly(2)) {
            let neighbors: FxHashSet<usize> = g.neighbors(node)?.iter().copied().collect();
            g = g.remove_all(&neighbors)?;
            s.extend(neighbors);
            changed = true;
        }

        while let Some(node) = smallest(&g.degree_above(best)) {
            g = g.remove(node)?;
            s.insert(node);
            changed = true;
        }
    }
    Ok((g, s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn degree_one_rule_test() {
        // Path 1-2-3: the pendant rule must cover the middle vertex only.
        let gr = Cursor::new("3 2\n2\n1 3\n2\n");
        let graph = Graph::read_adjacency(gr).unwrap();
        let (g, s) = reduce(&graph, &FxHashSet::default(), graph.num_edges()).unwrap();
        assert_eq!(g.num_edges(), 0);
        assert_eq!(s, vec![2].into_iter().collect());
    }

    #[test]
    fn degree_two_rule_test() {
        // Triangle: both neighbors of a degree-2 vertex enter the cover.
        let gr = Cursor::new("3 3\n2 3\n1 3\n1 2\n");
        let graph = Graph::read_adjacency(gr).unwrap();
        let (g, s) = reduce(&graph, &FxHashSet::default(), graph.num_edges()).unwrap();
        assert_eq!(g.num_edges(), 0);
        assert_eq!(s, vec![2, 3].into_iter().collect());
    }

    #[test]
    fn high_degree_rule_test() {
        // K5 under a bound of 3: every vertex has degree 4, the rule forces
        // the smallest one, and the remaining K4 (degree 3 each) is exempt
        // from all three rules.
        let gr = Cursor::new("5 10\n2 3 4 5\n1 3 4 5\n1 2 4 5\n1 2 3 5\n1 2 3 4\n");
        let graph = Graph::read_adjacency(gr).unwrap();
        let (g, s) = reduce(&graph, &FxHashSet::default(), 3).unwrap();
        assert_eq!(s, vec![1].into_iter().collect());
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 6);
    }

    #[test]
    fn solution_is_augmented_test() {
        let gr = Cursor::new("3 2\n2\n1 3\n2\n");
        let graph = Graph::read_adjacency(gr).unwrap();
        let seed: FxHashSet<usize> = vec![7].into_iter().collect();
        let (_, s) = reduce(&graph, &seed, graph.num_edges()).unwrap();
        assert_eq!(s, vec![7, 2].into_iter().collect());
    }

    #[test]
    fn reduce_idempotent_test() {
        // Triangle with a pendant tail: reducing twice under the same bound
        // changes nothing the second time.
        let gr = Cursor::new("5 5\n2 3\n1 3\n1 2 4\n3 5\n4\n");
        let graph = Graph::read_adjacency(gr).unwrap();
        let best = graph.num_edges();
        let (g1, s1) = reduce(&graph, &FxHashSet::default(), best).unwrap();
        let (g2, s2) = reduce(&g1, &s1, best).unwrap();
        assert_eq!(g1, g2);
        assert_eq!(s1, s2);
    }

}
