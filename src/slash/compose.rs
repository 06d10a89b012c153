//! Slash product construction: splice a copy of `H` into every edge of `G`

use ndarray::Array2;
use tracing::{debug, trace};

use super::counts::{
    adjacency_cells, predicted_power_vertices, slash_edge_count, slash_vertex_count,
};
use crate::config::SlashConfig;
use crate::graph::Graph;
use crate::{Result, SlashError};

/// Which endpoint of each `G` edge receives `H`'s first terminal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Edge `(u, v)` with `u < v` maps `u` to `H`'s vertex 0 and `v` to its last
    #[default]
    Forward,
    /// `v` takes `H`'s vertex 0 and `u` its last vertex
    Reversed,
}

/// Builds slash products and slash powers under a [`SlashConfig`]
#[derive(Clone, Debug, Default)]
pub struct SlashComposer {
    config: SlashConfig,
}

impl SlashComposer {
    /// Create a composer with the given configuration
    ///
    /// # Errors
    /// `InvalidArgument` if the configuration fails [`SlashConfig::validate`].
    pub fn new(config: SlashConfig) -> Result<Self> {
        config.validate()?;
        Ok(SlashComposer { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &SlashConfig {
        &self.config
    }

    /// Compute `G⊘H` with the forward orientation
    pub fn slash_into(&self, g: &Graph, h: &Graph) -> Result<Graph> {
        self.slash_into_with_orientation(g, h, Orientation::Forward)
    }

    /// Compute `G⊘H`, replacing every edge of `g` by a copy of `h`
    ///
    /// Edges of `g` are visited in canonical `(min, max)` lexicographic
    /// order. Edge number `k` receives the fresh vertices
    /// `|V_G| + k * (|V_H| - 2) ..` for `h`'s inner vertices `1..|V_H| - 1`,
    /// in order, while `h`'s first and last vertices land on the edge's
    /// endpoints.
    pub fn slash_into_with_orientation(
        &self,
        g: &Graph,
        h: &Graph,
        orientation: Orientation,
    ) -> Result<Graph> {
        let h_vertices = h.num_vertices();
        let h_edges = h.num_edges();
        let g_edges = g.num_edges();

        let total = slash_vertex_count(g.num_vertices(), g_edges, h_vertices, h_edges)?;
        adjacency_cells(total)?;
        self.config.check_vertex_budget(total)?;

        debug!(
            g_vertices = g.num_vertices(),
            g_edges,
            h_vertices,
            h_edges,
            total,
            "composing slash product"
        );

        let inserted_per_edge = h_vertices - 2;
        let h_adj = h.adjacency();
        let edges = g.edges();
        let mut adjacency = Array2::<u8>::zeros((total, total));
        let mut next_id = g.num_vertices();
        let mut block = Vec::with_capacity(h_vertices);

        for &(u, v) in &edges {
            let (s, t) = match orientation {
                Orientation::Forward => (u, v),
                Orientation::Reversed => (v, u),
            };

            block.clear();
            block.push(s);
            block.extend(next_id..next_id + inserted_per_edge);
            block.push(t);
            trace!(u, v, first_inserted = next_id, "splicing copy of H");
            next_id += inserted_per_edge;

            for (i, &row) in block.iter().enumerate() {
                for (j, &col) in block.iter().enumerate() {
                    adjacency[[row, col]] = h_adj[[i, j]];
                }
            }
        }

        let result = Graph::from_adjacency_unchecked(adjacency);

        if self.config.verify_counts {
            let expected_edges = slash_edge_count(g_edges, h_edges)?;
            if next_id != total || result.num_edges() != expected_edges {
                return Err(SlashError::InvalidArgument(format!(
                    "Slash product has {} vertices and {} edges, expected {} and {}",
                    next_id,
                    result.num_edges(),
                    total,
                    expected_edges
                )));
            }
        }

        Ok(result)
    }

    /// Compute the `n`-th slash power `G⊘(n)`
    ///
    /// `G⊘(1)` is `g` itself and `G⊘(k)` is `G⊘(k-1) ⊘ G`. Every call
    /// rebuilds all lower powers; use [`SlashPowers`](super::SlashPowers) to
    /// walk through successive powers without recomputing them.
    ///
    /// The vertex count grows like `|E_G|^n`. The final size is checked
    /// against the matrix size limit and `max_vertices` before any
    /// construction starts.
    pub fn slash_power(&self, g: &Graph, n: u32) -> Result<Graph> {
        if n == 0 {
            return Err(SlashError::InvalidArgument(
                "Slash power exponent must be at least 1".to_string(),
            ));
        }
        if n == 1 {
            return Ok(g.clone());
        }

        let predicted = predicted_power_vertices(g.num_vertices(), g.num_edges(), n)?;
        adjacency_cells(predicted)?;
        self.config.check_vertex_budget(predicted)?;

        debug!(vertices = g.num_vertices(), n, predicted, "computing slash power");

        let mut result = g.clone();
        for _ in 1..n {
            result = self.slash_into(&result, g)?;
        }

        if self.config.verify_counts && result.num_vertices() != predicted {
            return Err(SlashError::InvalidArgument(format!(
                "Slash power has {} vertices, formula predicts {}",
                result.num_vertices(),
                predicted
            )));
        }

        Ok(result)
    }
}
