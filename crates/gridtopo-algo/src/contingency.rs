//! N-1 contingency sweep over a radial topology.
//!
//! For each outaged edge the sweep records:
//!
//! 1. **Isolated vertices:** everything downstream of the edge, cut off from the source
//! 2. **Alternatives:** normally-open edges whose closing restores a spanning tree
//!
//! Both come straight from [`TopologyGraph`] queries, so the sweep never
//! modifies the graph and outages can be evaluated in parallel.

use anyhow::{Context, Result};
use gridtopo_core::{EdgeId, TopologyError, TopologyGraph, TopologyResult, VertexId};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Configuration for an N-1 sweep.
#[derive(Debug, Clone)]
pub struct ContingencySweepConfig {
    /// Edges to outage, in evaluation order (`None` = every enabled edge)
    pub edges: Option<Vec<EdgeId>>,
    /// Evaluate outages on the rayon pool when the `parallel` feature is on
    pub parallel: bool,
}

impl Default for ContingencySweepConfig {
    fn default() -> Self {
        Self {
            edges: None,
            parallel: true,
        }
    }
}

impl ContingencySweepConfig {
    pub fn with_edges(mut self, edges: Vec<EdgeId>) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn serial(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Result of outaging a single edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContingencyOutcome {
    pub edge: EdgeId,
    /// Vertices losing supply, sorted ascending
    pub isolated: Vec<VertexId>,
    /// Disabled edges that restore a valid topology, in declaration order
    pub alternatives: Vec<EdgeId>,
}

impl ContingencyOutcome {
    pub fn is_recoverable(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

/// Results from an N-1 sweep, in evaluation order.
#[derive(Debug, Clone, Serialize)]
pub struct ContingencySweepResults {
    pub outcomes: Vec<ContingencyOutcome>,
}

impl ContingencySweepResults {
    pub fn get(&self, edge: EdgeId) -> Option<&ContingencyOutcome> {
        self.outcomes.iter().find(|o| o.edge == edge)
    }

    /// Outages no single switching action can recover from.
    pub fn unrecoverable(&self) -> impl Iterator<Item = &ContingencyOutcome> {
        self.outcomes.iter().filter(|o| !o.is_recoverable())
    }

    pub fn summary(&self) -> String {
        let total = self.outcomes.len();
        let unrecoverable = self.unrecoverable().count();
        let max_isolated = self
            .outcomes
            .iter()
            .map(|o| o.isolated.len())
            .max()
            .unwrap_or(0);
        format!(
            "N-1 sweep: {}/{} outages recoverable, worst outage isolates {} vertices",
            total - unrecoverable,
            total,
            max_isolated
        )
    }
}

/// Runs N-1 outages against one topology snapshot.
pub struct ContingencySweep<'a> {
    graph: &'a TopologyGraph,
    config: ContingencySweepConfig,
}

impl<'a> ContingencySweep<'a> {
    pub fn new(graph: &'a TopologyGraph, config: ContingencySweepConfig) -> Self {
        Self { graph, config }
    }

    pub fn run(&self) -> Result<ContingencySweepResults> {
        let edges = match &self.config.edges {
            Some(edges) => {
                for &edge in edges {
                    if !self
                        .graph
                        .is_enabled(edge)
                        .with_context(|| format!("selecting {edge} for N-1 sweep"))?
                    {
                        return Err(TopologyError::EdgeAlreadyDisabled(edge))
                            .with_context(|| format!("selecting {edge} for N-1 sweep"));
                    }
                }
                edges.clone()
            }
            None => self.graph.enabled_edges(),
        };

        debug!(
            count = edges.len(),
            parallel = self.config.parallel,
            "starting N-1 sweep"
        );
        let outcomes = if self.config.parallel {
            self.evaluate_parallel(&edges)
        } else {
            self.evaluate_serial(&edges)
        }
        .context("evaluating N-1 outages")?;

        let results = ContingencySweepResults { outcomes };
        info!("{}", results.summary());
        Ok(results)
    }

    /// Outage a single enabled edge.
    pub fn evaluate(&self, edge: EdgeId) -> TopologyResult<ContingencyOutcome> {
        Ok(ContingencyOutcome {
            edge,
            isolated: self.graph.downstream_vertices(edge)?,
            alternatives: self.graph.alternative_edges(edge)?,
        })
    }

    fn evaluate_serial(&self, edges: &[EdgeId]) -> TopologyResult<Vec<ContingencyOutcome>> {
        edges.iter().map(|&edge| self.evaluate(edge)).collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(&self, edges: &[EdgeId]) -> TopologyResult<Vec<ContingencyOutcome>> {
        edges.par_iter().map(|&edge| self.evaluate(edge)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel(&self, edges: &[EdgeId]) -> TopologyResult<Vec<ContingencyOutcome>> {
        self.evaluate_serial(edges)
    }
}
