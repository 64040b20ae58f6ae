//! # gridtopo-core: Radial Grid Topology Engine
//!
//! Validates the switching state of an electrical distribution network and
//! answers outage questions against it.
//!
//! ## Design Philosophy
//!
//! Networks are modeled as **undirected multigraphs** where:
//! - **Vertices**: grid nodes (busbars, cable junctions, house connections)
//! - **Edges**: lines and transformers, each with its own enabled flag
//!
//! A network is accepted only when its enabled edges form a spanning tree:
//! every vertex is reachable from the source and no loop exists. Disabled edges
//! are normally-open switching points that can be closed to restore supply.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridtopo_core::*;
//!
//! let graph = TopologyGraph::from_config(NetworkConfig::from_raw(
//!     &[0, 2, 4, 6, 10],
//!     &[1, 3, 5, 7, 8, 9],
//!     &[(0, 2), (0, 4), (0, 6), (2, 4), (4, 6), (2, 10)],
//!     &[true, true, true, false, false, true],
//!     10,
//! ))?;
//!
//! // Which nodes lose supply when line 1 trips?
//! let isolated = graph.downstream_vertices(EdgeId::new(1))?;
//! assert_eq!(isolated, vec![VertexId::new(0), VertexId::new(4), VertexId::new(6)]);
//!
//! // Which open points can be closed instead?
//! assert_eq!(graph.alternative_edges(EdgeId::new(1))?, vec![EdgeId::new(7)]);
//! # Ok::<(), TopologyError>(())
//! ```
//!
//! ## Modules
//!
//! - [`ids`] - Typed vertex and edge identifiers
//! - [`config`] - The raw network description supplied by loaders
//! - [`topology`] - Validated [`TopologyGraph`] and its queries
//! - [`error`] - [`TopologyError`] taxonomy

pub mod config;
pub mod error;
pub mod ids;
pub mod topology;
mod traversal;

pub use config::NetworkConfig;
pub use error::{IdKind, TopologyError, TopologyResult};
pub use ids::{EdgeId, VertexId};
pub use topology::{TopologyGraph, TopologyStats};
