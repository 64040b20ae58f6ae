//! # gridtopo-algo: Batch Outage Analyses
//!
//! Builds on the single-edge queries of [`gridtopo_core::TopologyGraph`]:
//!
//! - [`contingency`]: N-1 sweep pairing every outage with the vertices it
//!   isolates and the open points that can restore supply
//! - [`feeders`]: which vertices each low-voltage feeder supplies
//!
//! ## Example
//!
//! ```rust
//! use gridtopo_algo::{ContingencySweep, ContingencySweepConfig};
//! use gridtopo_core::{EdgeId, NetworkConfig, TopologyGraph};
//!
//! let graph = TopologyGraph::from_config(NetworkConfig::from_raw(
//!     &[0, 2, 4, 6, 10],
//!     &[1, 3, 5, 7, 8, 9],
//!     &[(0, 2), (0, 4), (0, 6), (2, 4), (4, 6), (2, 10)],
//!     &[true, true, true, false, false, true],
//!     10,
//! ))?;
//!
//! let results = ContingencySweep::new(&graph, ContingencySweepConfig::default()).run()?;
//! assert_eq!(results.outcomes.len(), 4);
//! assert_eq!(results.unrecoverable().next().map(|o| o.edge), Some(EdgeId::new(9)));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod contingency;
pub mod feeders;

pub use contingency::{
    ContingencyOutcome, ContingencySweep, ContingencySweepConfig, ContingencySweepResults,
};
pub use feeders::{feeder_downstream_map, vertex_feeder_assignment, FeederSupply};
