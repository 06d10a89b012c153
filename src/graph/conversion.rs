//! Convert between adjacency-matrix graphs and `petgraph` graphs

use ndarray::Array2;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use super::Graph;
use crate::{Result, SlashError};

/// Edge index representation for sparse adjacency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeIndex {
    /// Source vertex of each edge
    pub src: Vec<usize>,
    /// Destination vertex of each edge
    pub dst: Vec<usize>,
}

impl EdgeIndex {
    /// Get number of edges
    pub fn num_edges(&self) -> usize {
        self.src.len()
    }

    /// Add the reverse of every edge
    pub fn to_undirected(&self) -> Self {
        let mut src = self.src.clone();
        let mut dst = self.dst.clone();
        src.extend(&self.dst);
        dst.extend(&self.src);
        EdgeIndex { src, dst }
    }

    /// Iterate over `(src, dst)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.src.iter().copied().zip(self.dst.iter().copied())
    }
}

/// Edge list as parallel `src`/`dst` vectors, one entry per edge
///
/// Edges follow the canonical `(min, max)` order of [`Graph::edges`], so
/// `src[k] < dst[k]` and position `k` is the `k`-th edge a slash product
/// splices into.
pub fn to_edge_index(graph: &Graph) -> EdgeIndex {
    let (src, dst) = graph.edges().into_iter().unzip();
    EdgeIndex { src, dst }
}

/// Convert to a `petgraph` undirected graph
///
/// Node index `i` is vertex `i`; edges are added in canonical order.
pub fn to_petgraph(graph: &Graph) -> UnGraph<(), ()> {
    let n = graph.num_vertices();
    let edges = graph.edges();
    let mut pg = UnGraph::with_capacity(n, edges.len());

    for _ in 0..n {
        pg.add_node(());
    }
    for (u, v) in edges {
        pg.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    pg
}

/// Convert from a `petgraph` undirected graph, dropping weights
///
/// Parallel edges collapse into one; self-loops are rejected.
pub fn from_petgraph<N, E>(pg: &UnGraph<N, E>) -> Result<Graph> {
    let n = pg.node_count();
    let mut adjacency = Array2::zeros((n, n));

    for edge in pg.edge_references() {
        let (u, v) = (edge.source().index(), edge.target().index());
        if u == v {
            return Err(SlashError::InvalidArgument(format!(
                "Self-loop at vertex {} not allowed",
                u
            )));
        }
        adjacency[[u, v]] = 1;
        adjacency[[v, u]] = 1;
    }

    Ok(Graph::from_adjacency_unchecked(adjacency))
}
