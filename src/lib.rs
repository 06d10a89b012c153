//! # Slash-Graphs: self-similar graphs by edge substitution
//!
//! This library builds the slash product `G⊘H` of two st-graphs: every edge
//! of `G` is replaced by a copy of `H`, with `H`'s first vertex spliced onto
//! one endpoint of the edge and `H`'s last vertex onto the other. Iterating
//! the product of a graph with itself gives its slash powers, e.g. the
//! nested diamond graphs.
//!
//! ## Features
//!
//! - **Graphs**: validated 0/1 adjacency matrices over vertices `0..N`
//! - **Slash product**: closed-form vertex counts, composition, powers
//! - **Families**: diamond, path, cycle, complete and random st-graphs
//! - **Interop**: `petgraph` conversion, text and JSON matrix exchange

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Adjacency-matrix graphs and standard graph families
pub mod graph;

/// Slash product construction and vertex count formulas
pub mod slash;

/// Composer configuration
pub mod config;

/// Matrix text and JSON exchange
pub mod io;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use config::SlashConfig;
pub use graph::{Graph, to_petgraph, from_petgraph};
pub use slash::{
    slash_into, slash_power, slash_power_vertex_count, slash_vertex_count,
    Orientation, SlashComposer, SlashPowers,
};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum SlashError {
    /// Malformed matrix, undersized st-graph or degenerate formula input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex or edge count does not fit the integer range
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// Output would exceed the configured vertex cap
    #[error("Vertex limit exceeded: {requested} vertices requested, limit is {limit}")]
    VertexLimitExceeded {
        /// Vertex count the operation would have produced
        requested: usize,
        /// Configured cap
        limit: usize,
    },

    /// Malformed adjacency matrix text
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, SlashError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        graph::{families, Graph},
        slash::{
            slash_into, slash_power, slash_power_vertex_count, slash_vertex_count,
            Orientation, SlashComposer, SlashPowers,
        },
        config::SlashConfig,
        Result, SlashError,
    };
}
