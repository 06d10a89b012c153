//! Undirected simple graphs stored as dense 0/1 adjacency matrices

use std::fmt;

use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::{Result, SlashError};

/// An undirected, unweighted, loop-free graph over vertices `0..N`
///
/// - Row/column `i` of the adjacency matrix is vertex `i`
/// - The matrix is symmetric with a zero diagonal and 0/1 entries
/// - Instances are immutable once built; every constructor validates
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<u8>", into = "Array2<u8>")]
pub struct Graph {
    adjacency: Array2<u8>,
}

impl Graph {
    /// Create a graph from a square 0/1 adjacency matrix
    pub fn from_adjacency(adjacency: Array2<u8>) -> Result<Self> {
        validate_adjacency(adjacency.view())?;
        Ok(Graph { adjacency })
    }

    /// Create a graph from row vectors of a square 0/1 matrix
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let n = rows.len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SlashError::InvalidArgument(format!(
                    "Adjacency matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }

        let flat: Vec<u8> = rows.into_iter().flatten().collect();
        let adjacency = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| SlashError::InvalidArgument(format!("Bad matrix shape: {}", e)))?;

        Self::from_adjacency(adjacency)
    }

    /// Create a graph with `n` vertices from an undirected edge list
    ///
    /// Duplicate edges (in either orientation) collapse into one.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adjacency = Array2::zeros((n, n));

        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(SlashError::InvalidArgument(format!(
                    "Edge ({}, {}) out of bounds for {} vertices",
                    u, v, n
                )));
            }
            if u == v {
                return Err(SlashError::InvalidArgument(format!(
                    "Self-loop at vertex {} not allowed",
                    u
                )));
            }
            adjacency[[u, v]] = 1;
            adjacency[[v, u]] = 1;
        }

        Ok(Graph { adjacency })
    }

    /// Create a graph with `n` isolated vertices
    pub fn empty(n: usize) -> Self {
        Graph {
            adjacency: Array2::zeros((n, n)),
        }
    }

    /// Wrap a matrix the caller has built to satisfy the invariants
    pub(crate) fn from_adjacency_unchecked(adjacency: Array2<u8>) -> Self {
        debug_assert!(validate_adjacency(adjacency.view()).is_ok());
        Graph { adjacency }
    }

    /// Number of vertices
    pub fn num_vertices(&self) -> usize {
        self.adjacency.nrows()
    }

    /// Number of (undirected) edges
    pub fn num_edges(&self) -> usize {
        let n = self.num_vertices();
        (0..n)
            .map(|u| ((u + 1)..n).filter(|&v| self.adjacency[[u, v]] != 0).count())
            .sum()
    }

    /// Edges as normalized `(min, max)` pairs in lexicographic order
    ///
    /// This is the canonical enumeration order used by the slash product,
    /// so it fixes the numbering of inserted vertices.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.num_vertices();
        let mut edges = Vec::new();

        for u in 0..n {
            for v in (u + 1)..n {
                if self.adjacency[[u, v]] != 0 {
                    edges.push((u, v));
                }
            }
        }

        edges
    }

    /// Check whether `u` and `v` are adjacent (false when out of range)
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get([u, v]).map_or(false, |&x| x != 0)
    }

    /// Degree of a vertex
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.row(vertex).iter().filter(|&&x| x != 0).count()
    }

    /// Degree of every vertex
    pub fn degrees(&self) -> Array1<usize> {
        (0..self.num_vertices()).map(|v| self.degree(v)).collect()
    }

    /// Neighbours of a vertex in increasing order
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.adjacency
            .row(vertex)
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x != 0)
            .map(|(v, _)| v)
            .collect()
    }

    /// The two terminals `(s, t)` of this graph read as an st-graph
    ///
    /// `s` is the first vertex and `t` the last; `None` with fewer than two
    /// vertices.
    pub fn terminals(&self) -> Option<(usize, usize)> {
        let n = self.num_vertices();
        if n >= 2 {
            Some((0, n - 1))
        } else {
            None
        }
    }

    /// Borrow the adjacency matrix
    pub fn adjacency(&self) -> &Array2<u8> {
        &self.adjacency
    }

    /// Take ownership of the adjacency matrix
    pub fn into_adjacency(self) -> Array2<u8> {
        self.adjacency
    }

    /// Copy the adjacency matrix out as row vectors
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.adjacency.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

/// Check the adjacency-matrix invariants: square, 0/1, symmetric, no loops
pub fn validate_adjacency(adjacency: ArrayView2<u8>) -> Result<()> {
    let (rows, cols) = adjacency.dim();
    if rows != cols {
        return Err(SlashError::InvalidArgument(format!(
            "Adjacency matrix is not square: {}x{}",
            rows, cols
        )));
    }

    for ((i, j), &x) in adjacency.indexed_iter() {
        if x > 1 {
            return Err(SlashError::InvalidArgument(format!(
                "Entry ({}, {}) is {}, expected 0 or 1",
                i, j, x
            )));
        }
        if i == j && x != 0 {
            return Err(SlashError::InvalidArgument(format!(
                "Self-loop at vertex {} not allowed",
                i
            )));
        }
        if j > i && adjacency[[j, i]] != x {
            return Err(SlashError::InvalidArgument(format!(
                "Adjacency matrix is not symmetric at ({}, {})",
                i, j
            )));
        }
    }

    Ok(())
}

impl TryFrom<Array2<u8>> for Graph {
    type Error = SlashError;

    fn try_from(adjacency: Array2<u8>) -> Result<Self> {
        Graph::from_adjacency(adjacency)
    }
}

impl From<Graph> for Array2<u8> {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.adjacency.rows() {
            let line: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.num_vertices())
            .field("edges", &self.edges())
            .finish()
    }
}
