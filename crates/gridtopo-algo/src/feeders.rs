//! Feeder supply areas.
//!
//! A feeder is an edge leaving the low-voltage busbar; the vertices it
//! supplies are exactly the vertices downstream of it. Load allocation stages
//! use this to decide which connections hang off which feeder.

use std::collections::BTreeMap;

use anyhow::{anyhow, ensure, Context, Result};
use gridtopo_core::{EdgeId, TopologyGraph, VertexId};
use serde::Serialize;
use tracing::debug;

/// Vertices supplied through one feeder edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeederSupply {
    pub feeder: EdgeId,
    /// Sorted ascending; empty for a feeder that is switched open
    pub vertices: Vec<VertexId>,
}

/// Downstream vertex set of every feeder, in the order the feeders are given.
///
/// Every feeder must be a declared edge of `graph` with `busbar` as one of its
/// endpoints; an interior cable is not a feeder.
pub fn feeder_downstream_map(
    graph: &TopologyGraph,
    busbar: VertexId,
    feeders: &[EdgeId],
) -> Result<Vec<FeederSupply>> {
    ensure!(
        graph.contains_vertex(busbar),
        "LV busbar {busbar} is not a vertex of the network"
    );
    feeders
        .iter()
        .map(|&feeder| -> Result<FeederSupply> {
            let context = || format!("resolving supply area of feeder {feeder}");
            let (a, b) = graph.endpoints(feeder).with_context(context)?;
            if a != busbar && b != busbar {
                return Err(anyhow!("{feeder} runs {a}-{b} and does not leave {busbar}"))
                    .with_context(context);
            }
            let vertices = graph.downstream_vertices(feeder).with_context(context)?;
            debug!(%feeder, vertices = vertices.len(), "feeder supply area");
            Ok(FeederSupply { feeder, vertices })
        })
        .collect()
}

/// Invert feeder supply areas into a vertex → feeder lookup.
///
/// When feeders are nested the first listed feeder keeps the vertex.
pub fn vertex_feeder_assignment(supplies: &[FeederSupply]) -> BTreeMap<VertexId, EdgeId> {
    let mut assignment = BTreeMap::new();
    for supply in supplies {
        for &vertex in &supply.vertices {
            assignment.entry(vertex).or_insert(supply.feeder);
        }
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtopo_core::{NetworkConfig, TopologyError};

    // source 0 -- busbar 1 via transformer 10, feeders 11 and 12, spare feeder 15 open
    fn lv_grid() -> TopologyGraph {
        TopologyGraph::from_config(NetworkConfig::from_raw(
            &[0, 1, 2, 3, 4, 5],
            &[10, 11, 12, 13, 14, 15],
            &[(0, 1), (1, 2), (1, 4), (2, 3), (4, 5), (1, 3)],
            &[true, true, true, true, true, false],
            0,
        ))
        .unwrap()
    }

    const BUSBAR: VertexId = VertexId::new(1);

    fn vertices(raw: &[i64]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn test_feeder_areas() {
        let graph = lv_grid();
        let feeders = [EdgeId::new(11), EdgeId::new(12)];
        let supplies = feeder_downstream_map(&graph, BUSBAR, &feeders).unwrap();
        assert_eq!(supplies.len(), 2);
        assert_eq!(supplies[0].vertices, vertices(&[2, 3]));
        assert_eq!(supplies[1].vertices, vertices(&[4, 5]));
    }

    #[test]
    fn test_open_feeder_supplies_nothing() {
        let graph = lv_grid();
        let supplies = feeder_downstream_map(&graph, BUSBAR, &[EdgeId::new(15)]).unwrap();
        assert!(supplies[0].vertices.is_empty());
    }

    #[test]
    fn test_unknown_feeder() {
        let graph = lv_grid();
        let feeders = [EdgeId::new(11), EdgeId::new(99)];
        let err = feeder_downstream_map(&graph, BUSBAR, &feeders).unwrap_err();
        assert!(err.to_string().contains("Edge#99"));
        assert!(matches!(
            err.downcast_ref::<TopologyError>(),
            Some(TopologyError::UnknownIdentifier { id: 99, .. })
        ));
    }

    #[test]
    fn test_off_busbar_feeder_rejected() {
        let graph = lv_grid();
        // cable 13 runs 2-3, inside feeder 11
        let feeders = [EdgeId::new(11), EdgeId::new(13)];
        let err = feeder_downstream_map(&graph, BUSBAR, &feeders).unwrap_err();
        assert_eq!(err.to_string(), "resolving supply area of feeder Edge#13");
        assert!(err.root_cause().to_string().contains("does not leave Vertex#1"));
    }

    #[test]
    fn test_unknown_busbar() {
        let graph = lv_grid();
        let err =
            feeder_downstream_map(&graph, VertexId::new(42), &[EdgeId::new(11)]).unwrap_err();
        assert!(err.to_string().contains("Vertex#42"));
    }

    #[test]
    fn test_assignment_first_feeder_wins() {
        let graph = lv_grid();
        // transformer 10 supplies everything below the busbar, feeder 11 is nested inside it
        let feeders = [EdgeId::new(11), EdgeId::new(10)];
        let supplies = feeder_downstream_map(&graph, BUSBAR, &feeders).unwrap();
        let assignment = vertex_feeder_assignment(&supplies);
        assert_eq!(assignment[&VertexId::new(2)], EdgeId::new(11));
        assert_eq!(assignment[&VertexId::new(3)], EdgeId::new(11));
        assert_eq!(assignment[&VertexId::new(5)], EdgeId::new(10));
        assert_eq!(assignment[&VertexId::new(1)], EdgeId::new(10));
        assert!(!assignment.contains_key(&VertexId::new(0)));
    }
}
