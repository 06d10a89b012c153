//! Adjacency-matrix graphs, standard families and `petgraph` interop

mod graph_data;
mod conversion;
pub mod families;

pub use graph_data::{Graph, validate_adjacency};
pub use conversion::{to_petgraph, from_petgraph, to_edge_index, EdgeIndex};
