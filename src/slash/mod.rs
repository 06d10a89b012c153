//! The slash product `G⊘H` and slash powers `G⊘(n)`
//!
//! The free functions here use a [`SlashComposer`] with the default
//! [`SlashConfig`](crate::SlashConfig): no vertex cap, output counts
//! verified against the closed-form formulas.

mod counts;
mod compose;
mod power;

use crate::graph::Graph;
use crate::Result;

pub use counts::{
    adjacency_cells, slash_vertex_count, slash_edge_count, slash_power_vertex_count,
    slash_power_edge_count,
};
pub use compose::{Orientation, SlashComposer};
pub use power::SlashPowers;

/// Replace every edge of `g` by a copy of `h`
///
/// `h`'s vertex 0 and last vertex are its terminals; for an edge `(u, v)`
/// with `u < v` they are identified with `u` and `v` respectively.
pub fn slash_into(g: &Graph, h: &Graph) -> Result<Graph> {
    SlashComposer::default().slash_into(g, h)
}

/// The `n`-th slash power of `g` (`n >= 1`), rebuilt from scratch
pub fn slash_power(g: &Graph, n: u32) -> Result<Graph> {
    SlashComposer::default().slash_power(g, n)
}
