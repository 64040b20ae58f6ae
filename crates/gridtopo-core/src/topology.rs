//! Validated radial topology and its outage queries.
//!
//! A [`TopologyGraph`] is only ever created from a configuration whose enabled
//! edges form a spanning tree over all vertices. After construction it is
//! immutable: every query works on the stored snapshot or on a throwaway trial
//! adjacency, so one instance can be shared across threads and queried
//! concurrently.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::traversal::{Adjacency, TreeViolation};
use crate::{EdgeId, NetworkConfig, TopologyError, TopologyResult, VertexId};

#[derive(Debug, Clone)]
struct EdgeRecord {
    id: EdgeId,
    endpoints: (usize, usize),
    enabled: bool,
}

/// Summary counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyStats {
    pub vertex_count: usize,
    pub enabled_edge_count: usize,
    pub disabled_edge_count: usize,
    /// Vertices with exactly one enabled edge
    pub leaf_count: usize,
    pub max_degree: usize,
}

/// Radial grid topology: vertices, switchable edges and one supply source.
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    vertices: Vec<VertexId>,
    vertex_index: HashMap<VertexId, usize>,
    edges: Vec<EdgeRecord>,
    edge_index: HashMap<EdgeId, usize>,
    source: usize,
    adjacency: Adjacency,
}

impl TopologyGraph {
    /// Validate the five positional inputs and build the topology.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// identifier uniqueness, endpoint-list length, endpoint existence,
    /// enabled-list length, source existence, connectivity, acyclicity.
    pub fn new(
        vertex_ids: Vec<VertexId>,
        edge_ids: Vec<EdgeId>,
        edge_vertex_id_pairs: Vec<(VertexId, VertexId)>,
        edge_enabled: Vec<bool>,
        source_vertex_id: VertexId,
    ) -> TopologyResult<Self> {
        let mut seen = HashSet::with_capacity(vertex_ids.len() + edge_ids.len());
        for raw in vertex_ids
            .iter()
            .map(VertexId::value)
            .chain(edge_ids.iter().map(EdgeId::value))
        {
            if !seen.insert(raw) {
                return Err(TopologyError::IdentifierCollision { id: raw });
            }
        }

        if edge_vertex_id_pairs.len() != edge_ids.len() {
            return Err(TopologyError::LengthMismatch {
                list: "edge_vertex_id_pairs",
                expected: edge_ids.len(),
                actual: edge_vertex_id_pairs.len(),
            });
        }

        let vertex_index: HashMap<VertexId, usize> = vertex_ids
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect();
        let lookup = |id: VertexId| {
            vertex_index
                .get(&id)
                .copied()
                .ok_or_else(|| TopologyError::unknown_vertex(id))
        };
        let endpoints = edge_vertex_id_pairs
            .iter()
            .map(|&(a, b)| -> TopologyResult<(usize, usize)> {
                Ok((lookup(a)?, lookup(b)?))
            })
            .collect::<TopologyResult<Vec<_>>>()?;

        if edge_enabled.len() != edge_ids.len() {
            return Err(TopologyError::LengthMismatch {
                list: "edge_enabled",
                expected: edge_ids.len(),
                actual: edge_enabled.len(),
            });
        }

        let source = *vertex_index
            .get(&source_vertex_id)
            .ok_or_else(|| TopologyError::unknown_source(source_vertex_id))?;

        let adjacency = Adjacency::build(vertex_ids.len(), &endpoints, &edge_enabled);
        match adjacency.check_spanning_tree() {
            Some(TreeViolation::Disconnected { unreached }) => {
                debug!(unreached, "rejecting topology: not fully connected");
                return Err(TopologyError::NotFullyConnected { unreached });
            }
            Some(TreeViolation::Cycle { edge }) => {
                debug!(edge = %edge_ids[edge], "rejecting topology: cycle");
                return Err(TopologyError::ContainsCycle {
                    edge: edge_ids[edge],
                });
            }
            None => {}
        }

        let edge_index = edge_ids
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect();
        let edges = edge_ids
            .into_iter()
            .zip(endpoints)
            .zip(edge_enabled)
            .map(|((id, endpoints), enabled)| EdgeRecord {
                id,
                endpoints,
                enabled,
            })
            .collect::<Vec<_>>();

        debug!(
            vertices = vertex_ids.len(),
            edges = edges.len(),
            enabled = adjacency.edge_count(),
            source = %source_vertex_id,
            "topology validated"
        );

        Ok(Self {
            vertices: vertex_ids,
            vertex_index,
            edges,
            edge_index,
            source,
            adjacency,
        })
    }

    pub fn from_config(config: NetworkConfig) -> TopologyResult<Self> {
        Self::new(
            config.vertex_ids,
            config.edge_ids,
            config.edge_vertex_id_pairs,
            config.edge_enabled,
            config.source_vertex_id,
        )
    }

    /// The declared configuration this topology was built from.
    pub fn to_config(&self) -> NetworkConfig {
        NetworkConfig {
            vertex_ids: self.vertices.clone(),
            edge_ids: self.edges.iter().map(|e| e.id).collect(),
            edge_vertex_id_pairs: self
                .edges
                .iter()
                .map(|e| (self.vertices[e.endpoints.0], self.vertices[e.endpoints.1]))
                .collect(),
            edge_enabled: self.edges.iter().map(|e| e.enabled).collect(),
            source_vertex_id: self.source_vertex(),
        }
    }

    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|e| e.id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn source_vertex(&self) -> VertexId {
        self.vertices[self.source]
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex_index.contains_key(&vertex)
    }

    pub fn is_enabled(&self, edge: EdgeId) -> TopologyResult<bool> {
        Ok(self.edges[self.edge_position(edge)?].enabled)
    }

    pub fn endpoints(&self, edge: EdgeId) -> TopologyResult<(VertexId, VertexId)> {
        let (a, b) = self.edges[self.edge_position(edge)?].endpoints;
        Ok((self.vertices[a], self.vertices[b]))
    }

    /// Enabled edges in declaration order.
    pub fn enabled_edges(&self) -> Vec<EdgeId> {
        self.edges.iter().filter(|e| e.enabled).map(|e| e.id).collect()
    }

    /// Disabled edges in declaration order.
    pub fn disabled_edges(&self) -> Vec<EdgeId> {
        self.edges.iter().filter(|e| !e.enabled).map(|e| e.id).collect()
    }

    pub fn stats(&self) -> TopologyStats {
        let degrees = (0..self.vertex_count()).map(|v| self.adjacency.degree(v));
        let (leaf_count, max_degree) =
            degrees.fold((0, 0), |(leaves, max), d| (leaves + usize::from(d == 1), max.max(d)));
        TopologyStats {
            vertex_count: self.vertex_count(),
            enabled_edge_count: self.adjacency.edge_count(),
            disabled_edge_count: self.edges.len() - self.adjacency.edge_count(),
            leaf_count,
            max_degree,
        }
    }

    /// Vertices cut off from the source if `edge` were removed, sorted ascending.
    ///
    /// A disabled edge carries no flow, so its removal isolates nothing and the
    /// result is empty.
    pub fn downstream_vertices(&self, edge: EdgeId) -> TopologyResult<Vec<VertexId>> {
        let position = self.edge_position(edge)?;
        if !self.edges[position].enabled {
            debug!(%edge, "edge disabled, nothing downstream");
            return Ok(Vec::new());
        }

        let mut downstream: Vec<VertexId> = self
            .adjacency
            .components(Some(position))
            .into_iter()
            .filter(|members| !members.contains(&self.source))
            .flatten()
            .map(|v| self.vertices[v])
            .collect();
        downstream.sort_unstable();

        debug!(%edge, count = downstream.len(), "downstream vertices computed");
        Ok(downstream)
    }

    /// Disabled edges that restore a spanning tree once `edge` is switched off.
    ///
    /// Every candidate is checked on its own freshly built trial adjacency.
    /// Results follow declaration order.
    pub fn alternative_edges(&self, edge: EdgeId) -> TopologyResult<Vec<EdgeId>> {
        let target = self.edge_position(edge)?;
        if !self.edges[target].enabled {
            return Err(TopologyError::EdgeAlreadyDisabled(edge));
        }

        let endpoints: Vec<(usize, usize)> = self.edges.iter().map(|e| e.endpoints).collect();
        let mut trial: Vec<bool> = self.edges.iter().map(|e| e.enabled).collect();
        trial[target] = false;

        let mut alternatives = Vec::new();
        for (candidate, record) in self.edges.iter().enumerate() {
            if record.enabled || candidate == target {
                continue;
            }
            trial[candidate] = true;
            let violation =
                Adjacency::build(self.vertex_count(), &endpoints, &trial).check_spanning_tree();
            trial[candidate] = false;

            trace!(%edge, candidate = %record.id, ?violation, "evaluated alternative");
            if violation.is_none() {
                alternatives.push(record.id);
            }
        }

        debug!(%edge, count = alternatives.len(), "alternative edges computed");
        Ok(alternatives)
    }

    /// Switch `open` off and `close` on, returning the re-validated topology.
    ///
    /// `self` is left untouched.
    pub fn switch_edges(&self, open: EdgeId, close: EdgeId) -> TopologyResult<Self> {
        if !self.is_enabled(open)? {
            return Err(TopologyError::EdgeAlreadyDisabled(open));
        }
        self.edge_position(close)?;

        let mut config = self.to_config();
        config.set_enabled(open, false);
        config.set_enabled(close, true);
        Self::from_config(config)
    }

    fn edge_position(&self, edge: EdgeId) -> TopologyResult<usize> {
        self.edge_index
            .get(&edge)
            .copied()
            .ok_or_else(|| TopologyError::unknown_edge(edge))
    }
}
