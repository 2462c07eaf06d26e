//! Implementation of a simple, undirected graph data structure where every
//! structural change derives a new graph value.

use fxhash::{FxHashMap, FxHashSet};
use std::io::BufRead;
use crate::cust_error::{ImportError, ProcessingError};

/// A simple undirected graph stored as an adjacency list keyed by stable
/// vertex identifiers. Removal never repacks identifiers and never mutates
/// `self`; it returns a fresh `Graph`, so recursion frames can hold
/// independently derived values without aliasing.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Graph {
    adj: FxHashMap<usize, Vec<usize>>,
    num_edges: usize,
}

// Queries
impl Graph {

    /// Returns an `Iterator` over all vertex identifiers.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj.keys().copied()
    }

    /// Returns the number of vertices of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Checks if `self` holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Returns the degree of `node`.
    pub fn degree(&self, node: usize) -> Result<usize, ProcessingError> {
        self.adj.get(&node)
            .map(|neighbors| neighbors.len())
            .ok_or(ProcessingError::UnknownVertex(node))
    }

    /// Returns the neighborhood of `node` as a read-only view.
    pub fn neighbors(&self, node: usize) -> Result<&[usize], ProcessingError> {
        self.adj.get(&node)
            .map(|neighbors| neighbors.as_slice())
            .ok_or(ProcessingError::UnknownVertex(node))
    }

    /// Returns the vertex with the highest degree and its degree, or `None`
    /// if `self` is empty. Ties are broken towards the smallest vertex
    /// identifier, so branch order is reproducible.
    pub fn highest_degree(&self) -> Option<(usize, usize)> {
        let mut max: Option<(usize, usize)> = None;
        for (&node, neighbors) in &self.adj {
            let degree = neighbors.len();
            match max {
                Some((best_node, best_degree))
                    if degree < best_degree
                        || (degree == best_degree && node > best_node) => {},
                _ => max = Some((node, degree)),
            }
        }
        max
    }

    /// Returns the set of all vertices whose degree equals `n`.
    pub fn degree_exactly(&self, n: usize) -> FxHashSet<usize> {
        self.adj.iter()
            .filter(|(_, neighbors)| neighbors.len() == n)
            .map(|(node, _)| *node)
            .collect()
    }

    /// Returns the set of all vertices whose degree is strictly greater
    /// than `n`.
    pub fn degree_above(&self, n: usize) -> FxHashSet<usize> {
        self.adj.iter()
            .filter(|(_, neighbors)| neighbors.len() > n)
            .map(|(node, _)| *node)
            .collect()
    }

    /// Returns all edges as `(src, trg)` pairs with `src < trg`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj.iter()
            .flat_map(|(&node, neighbors)| {
                neighbors.iter()
                    .filter(move |&&neigh| node < neigh)
                    .map(move |&neigh| (node, neigh))
            })
    }

}

// Derivations
impl Graph {

    /// Derives a new graph with `node` removed. The vertex is deleted from
    /// the key set, every surviving neighborhood is stripped of references
    /// to it and the edge count drops by its degree.
    pub fn remove(&self, node: usize) -> Result<Graph, ProcessingError> {
        let batch: FxHashSet<usize> = std::iter::once(node).collect();
        self.remove_all(&batch)
    }

    /// Derives a new graph with every vertex of `batch` removed.
    ///
    /// Edge accounting is two-phase: incident edges are counted over the
    /// intact graph before any vertex is deleted, so an edge whose both
    /// endpoints sit in `batch` is subtracted exactly once.
    pub fn remove_all(&self, batch: &FxHashSet<usize>) -> Result<Graph, ProcessingError> {
        let mut removed_edges = 0;
        let mut internal_ends = 0;
        for node in batch {
            let neighbors = self.adj.get(node)
                .ok_or(ProcessingError::InconsistentRemoval(*node))?;
            for neigh in neighbors {
                if batch.contains(neigh) {
                    internal_ends += 1;
                } else {
                    removed_edges += 1;
                }
            }
        }
        // Each batch-internal edge was seen from both of its endpoints.
        removed_edges += internal_ends / 2;

        let adj: FxHashMap<usize, Vec<usize>> = self.adj.iter()
            .filter(|(node, _)| !batch.contains(node))
            .map(|(&node, neighbors)| {
                let kept: Vec<usize> = neighbors.iter()
                    .filter(|neigh| !batch.contains(neigh))
                    .copied()
                    .collect();
                (node, kept)
            })
            .collect();
        Ok(Graph {
            adj,
            num_edges: self.num_edges - removed_edges,
        })
    }

}

// Construction
impl Graph {

    /// Builds a graph from an explicit adjacency mapping and edge count.
    /// Rejects asymmetric adjacency data, dangling neighbor references and
    /// edge counts that do not match the lists.
    pub fn from_parts(adj: FxHashMap<usize, Vec<usize>>, num_edges: usize) -> Result<Self, ImportError> {
        let mut degree_sum = 0;
        for (node, neighbors) in &adj {
            degree_sum += neighbors.len();
            for neigh in neighbors {
                let back = adj.get(neigh).ok_or(ImportError::InputMalformedError)?;
                if !back.contains(node) {
                    return Err(ImportError::InputMalformedError);
                }
            }
        }
        if degree_sum != 2 * num_edges {
            return Err(ImportError::EdgeCountMismatch { declared: num_edges, found: degree_sum / 2 });
        }
        Ok(Graph { adj, num_edges })
    }

    /// Reads an adjacency-list instance and creates a `Graph`.
    ///
    /// The first line holds the vertex and edge counts, followed by one
    /// line per vertex `1..=n` listing its neighbors (possibly empty).
    pub fn read_adjacency<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut lines = input.lines();
        // <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split_whitespace();
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut adj: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for node in 1..=n {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let neighbors = line.split_whitespace()
                .map(|tok| tok.parse::<usize>())
                .collect::<Result<Vec<usize>, _>>()?;
            if neighbors.iter().any(|neigh| *neigh < 1 || *neigh > n) {
                return Err(ImportError::InputMalformedError);
            }
            adj.insert(node, neighbors);
        }
        Self::from_parts(adj, m)
    }

}
