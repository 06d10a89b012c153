//! Standard st-graphs used as slash operands

use ndarray::Array2;
use rand::Rng;

use super::Graph;
use crate::{Result, SlashError};

/// The 4-vertex diamond: edges (0,1), (0,2), (1,3), (2,3)
///
/// Terminals are 0 and 3, the two opposite corners.
pub fn diamond() -> Graph {
    Graph::from_adjacency_unchecked(ndarray::array![
        [0, 1, 1, 0],
        [1, 0, 0, 1],
        [1, 0, 0, 1],
        [0, 1, 1, 0],
    ])
}

/// A single edge (K2), the right identity of the slash product
pub fn edge() -> Graph {
    Graph::from_adjacency_unchecked(ndarray::array![[0, 1], [1, 0]])
}

/// The path 0 - 1 - ... - (n-1)
pub fn path(n: usize) -> Graph {
    let mut adjacency = Array2::zeros((n, n));
    for i in 1..n {
        adjacency[[i - 1, i]] = 1;
        adjacency[[i, i - 1]] = 1;
    }
    Graph::from_adjacency_unchecked(adjacency)
}

/// The cycle on `n >= 3` vertices, closed by the edge (0, n-1)
pub fn cycle(n: usize) -> Result<Graph> {
    if n < 3 {
        return Err(SlashError::InvalidArgument(format!(
            "A cycle needs at least 3 vertices, got {}",
            n
        )));
    }

    let mut adjacency = path(n).into_adjacency();
    adjacency[[0, n - 1]] = 1;
    adjacency[[n - 1, 0]] = 1;
    Ok(Graph::from_adjacency_unchecked(adjacency))
}

/// The complete graph on `n` vertices
pub fn complete(n: usize) -> Graph {
    let adjacency = Array2::from_shape_fn((n, n), |(i, j)| u8::from(i != j));
    Graph::from_adjacency_unchecked(adjacency)
}

/// An Erdős–Rényi graph: each pair is joined with probability `p`
pub fn random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Result<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SlashError::InvalidArgument(format!(
            "Edge probability must be in [0, 1], got {}",
            p
        )));
    }

    let mut adjacency = Array2::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                adjacency[[i, j]] = 1;
                adjacency[[j, i]] = 1;
            }
        }
    }
    Ok(Graph::from_adjacency_unchecked(adjacency))
}

/// The nested diamond of the given level: the `level`-th slash power of
/// [`diamond`]
pub fn nested_diamond(level: u32) -> Result<Graph> {
    crate::slash::slash_power(&diamond(), level)
}
