//! Closed-form vertex and edge counts of slash products and slash powers
//!
//! All counts use checked arithmetic: a count that does not fit in `usize`
//! is reported as [`SlashError::ArithmeticOverflow`] rather than wrapping.

use crate::{Result, SlashError};

/// Vertex count of `G⊘H`: `|V_G| + |E_G| * (|V_H| - 2)`
///
/// `_h_edges` does not enter the count; it is accepted so the signature
/// mirrors the pairing of vertices and edges in [`slash_power_vertex_count`].
///
/// # Errors
/// `InvalidArgument` if `h_vertices < 2`, `ArithmeticOverflow` if the count
/// does not fit in `usize`.
pub fn slash_vertex_count(
    g_vertices: usize,
    g_edges: usize,
    h_vertices: usize,
    _h_edges: usize,
) -> Result<usize> {
    if h_vertices < 2 {
        return Err(SlashError::InvalidArgument(format!(
            "Spliced graph needs two terminals, got {} vertices",
            h_vertices
        )));
    }

    g_edges
        .checked_mul(h_vertices - 2)
        .and_then(|inserted| inserted.checked_add(g_vertices))
        .ok_or_else(|| {
            SlashError::ArithmeticOverflow(format!(
                "Vertex count {} + {} * ({} - 2)",
                g_vertices, g_edges, h_vertices
            ))
        })
}

/// Edge count of `G⊘H`: every edge of `G` becomes `|E_H|` edges
pub fn slash_edge_count(g_edges: usize, h_edges: usize) -> Result<usize> {
    g_edges.checked_mul(h_edges).ok_or_else(|| {
        SlashError::ArithmeticOverflow(format!("Edge count {} * {}", g_edges, h_edges))
    })
}

/// Vertex count of the `iteration`-th slash power of a graph
///
/// `2 + (V - 2) * (E^n - 1) / (E - 1)`, the geometric series
/// `2 + (V - 2) * (1 + E + ... + E^(n-1))`.
///
/// # Errors
/// - `InvalidArgument` if `iteration == 0`, if `initial_edges == 1` (the
///   series degenerates to `2 + (V - 2) * n`, which callers must handle
///   themselves) or if the count is not a non-negative integer.
/// - `ArithmeticOverflow` if an intermediate or the result overflows.
pub fn slash_power_vertex_count(
    initial_vertices: usize,
    initial_edges: usize,
    iteration: u32,
) -> Result<usize> {
    if iteration == 0 {
        return Err(SlashError::InvalidArgument(
            "Slash power iteration must be at least 1".to_string(),
        ));
    }
    if initial_edges == 1 {
        return Err(SlashError::InvalidArgument(
            "Power vertex count is undefined for a single-edge graph".to_string(),
        ));
    }

    let overflow = || {
        SlashError::ArithmeticOverflow(format!(
            "Vertex count of power {} of a graph with {} vertices and {} edges",
            iteration, initial_vertices, initial_edges
        ))
    };

    let v = initial_vertices as i128;
    let e = initial_edges as i128;

    let numerator = e
        .checked_pow(iteration)
        .map(|p| p - 1)
        .and_then(|p| p.checked_mul(v - 2))
        .ok_or_else(overflow)?;
    let denominator = e - 1;

    if numerator % denominator != 0 {
        return Err(SlashError::InvalidArgument(format!(
            "Power vertex count {} / {} is not an integer",
            numerator, denominator
        )));
    }

    let count = 2 + numerator / denominator;
    if count < 0 {
        return Err(SlashError::InvalidArgument(format!(
            "Power vertex count is negative ({})",
            count
        )));
    }

    usize::try_from(count).map_err(|_| overflow())
}

/// Edge count of the `iteration`-th slash power: `E^n`
pub fn slash_power_edge_count(initial_edges: usize, iteration: u32) -> Result<usize> {
    initial_edges.checked_pow(iteration).ok_or_else(|| {
        SlashError::ArithmeticOverflow(format!("Edge count {}^{}", initial_edges, iteration))
    })
}

/// Number of cells in a `vertices x vertices` adjacency matrix
///
/// # Errors
/// `ArithmeticOverflow` if the cell count exceeds `isize::MAX`, the largest
/// array `ndarray` can allocate.
pub fn adjacency_cells(vertices: usize) -> Result<usize> {
    vertices
        .checked_mul(vertices)
        .filter(|&cells| cells <= isize::MAX as usize)
        .ok_or_else(|| {
            SlashError::ArithmeticOverflow(format!(
                "Adjacency matrix of {} vertices has too many cells",
                vertices
            ))
        })
}

/// Vertex count of a slash power for any edge count
///
/// Falls back to `2 + (V - 2) * n` when the graph has a single edge.
pub(crate) fn predicted_power_vertices(
    initial_vertices: usize,
    initial_edges: usize,
    iteration: u32,
) -> Result<usize> {
    if initial_edges != 1 {
        return slash_power_vertex_count(initial_vertices, initial_edges, iteration);
    }

    // A single-edge graph has at least the edge's two endpoints.
    (initial_vertices - 2)
        .checked_mul(iteration as usize)
        .and_then(|inserted| inserted.checked_add(2))
        .ok_or_else(|| {
            SlashError::ArithmeticOverflow(format!(
                "Vertex count of power {} of a single-edge graph",
                iteration
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_vertex_count() {
        assert_eq!(slash_vertex_count(4, 4, 4, 4).unwrap(), 12);
        assert_eq!(slash_vertex_count(3, 2, 2, 1).unwrap(), 3);
        assert_eq!(slash_vertex_count(0, 0, 5, 3).unwrap(), 0);
    }

    #[test]
    fn test_slash_vertex_count_needs_terminals() {
        assert!(matches!(
            slash_vertex_count(4, 4, 1, 0),
            Err(SlashError::InvalidArgument(_))
        ));
        assert!(slash_vertex_count(4, 4, 0, 0).is_err());
    }

    #[test]
    fn test_slash_vertex_count_overflow() {
        assert!(matches!(
            slash_vertex_count(1, usize::MAX, 4, 4),
            Err(SlashError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            slash_vertex_count(usize::MAX, 1, 3, 2),
            Err(SlashError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn test_power_vertex_count() {
        assert_eq!(slash_power_vertex_count(4, 4, 1).unwrap(), 4);
        assert_eq!(slash_power_vertex_count(4, 4, 2).unwrap(), 12);
        assert_eq!(slash_power_vertex_count(4, 4, 3).unwrap(), 44);
        // Triangle: 3 + 3 * 1 = 6
        assert_eq!(slash_power_vertex_count(3, 3, 2).unwrap(), 6);
        // No edges: the graph never grows
        assert_eq!(slash_power_vertex_count(5, 0, 4).unwrap(), 5);
    }

    #[test]
    fn test_power_vertex_count_degenerate_inputs() {
        assert!(matches!(
            slash_power_vertex_count(4, 1, 3),
            Err(SlashError::InvalidArgument(_))
        ));
        assert!(matches!(
            slash_power_vertex_count(4, 4, 0),
            Err(SlashError::InvalidArgument(_))
        ));
        // Edges on fewer than two vertices drive the count negative
        assert!(slash_power_vertex_count(0, 3, 2).is_err());
    }

    #[test]
    fn test_power_vertex_count_overflow() {
        assert!(matches!(
            slash_power_vertex_count(4, 4, 200),
            Err(SlashError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            slash_power_vertex_count(4, 4, 40),
            Err(SlashError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn test_edge_counts() {
        assert_eq!(slash_edge_count(4, 4).unwrap(), 16);
        assert_eq!(slash_power_edge_count(4, 3).unwrap(), 64);
        assert_eq!(slash_power_edge_count(4, 1).unwrap(), 4);
        assert!(slash_power_edge_count(4, 64).is_err());
    }

    #[test]
    fn test_adjacency_cells() {
        assert_eq!(adjacency_cells(12).unwrap(), 144);
        assert_eq!(adjacency_cells(0).unwrap(), 0);
        assert!(matches!(
            adjacency_cells(usize::MAX),
            Err(SlashError::ArithmeticOverflow(_))
        ));
        // Fits in usize but not in isize
        assert!(adjacency_cells(1 << 32).is_err());
        assert!(adjacency_cells(3_000_000_000).is_ok());
    }

    #[test]
    fn test_predicted_power_vertices_single_edge() {
        assert_eq!(predicted_power_vertices(2, 1, 5).unwrap(), 2);
        assert_eq!(predicted_power_vertices(4, 1, 3).unwrap(), 8);
        assert_eq!(predicted_power_vertices(4, 4, 2).unwrap(), 12);
    }
}
