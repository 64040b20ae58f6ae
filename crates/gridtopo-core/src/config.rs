//! Network configuration handed over by the loader stage.
//!
//! [`NetworkConfig`] is plain data: five positional lists exactly as the
//! surrounding pipeline extracts them. Nothing is checked until it is passed
//! to [`TopologyGraph::from_config`](crate::TopologyGraph::from_config).

use crate::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub vertex_ids: Vec<VertexId>,
    pub edge_ids: Vec<EdgeId>,
    /// Endpoint pair per edge, positionally aligned with `edge_ids`
    pub edge_vertex_id_pairs: Vec<(VertexId, VertexId)>,
    /// Enabled flag per edge, positionally aligned with `edge_ids`
    pub edge_enabled: Vec<bool>,
    pub source_vertex_id: VertexId,
}

impl NetworkConfig {
    /// Build a config from raw integer ids, the shape most loaders produce.
    pub fn from_raw(
        vertex_ids: &[i64],
        edge_ids: &[i64],
        edge_vertex_id_pairs: &[(i64, i64)],
        edge_enabled: &[bool],
        source_vertex_id: i64,
    ) -> Self {
        Self {
            vertex_ids: vertex_ids.iter().copied().map(VertexId::new).collect(),
            edge_ids: edge_ids.iter().copied().map(EdgeId::new).collect(),
            edge_vertex_id_pairs: edge_vertex_id_pairs
                .iter()
                .map(|&(a, b)| (VertexId::new(a), VertexId::new(b)))
                .collect(),
            edge_enabled: edge_enabled.to_vec(),
            source_vertex_id: VertexId::new(source_vertex_id),
        }
    }

    /// Set the enabled flag of `edge`. Returns `false` if the edge is not declared.
    pub fn set_enabled(&mut self, edge: EdgeId, enabled: bool) -> bool {
        match self.edge_ids.iter().position(|&e| e == edge) {
            Some(pos) if pos < self.edge_enabled.len() => {
                self.edge_enabled[pos] = enabled;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_wraps_ids() {
        let config = NetworkConfig::from_raw(&[0, 2], &[1], &[(0, 2)], &[true], 0);
        assert_eq!(config.vertex_ids, vec![VertexId::new(0), VertexId::new(2)]);
        assert_eq!(config.edge_vertex_id_pairs[0].1, VertexId::new(2));
        assert_eq!(config.source_vertex_id, VertexId::new(0));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "vertex_ids": [0, 2, 4],
            "edge_ids": [1, 3],
            "edge_vertex_id_pairs": [[0, 2], [2, 4]],
            "edge_enabled": [true, false],
            "source_vertex_id": 0
        }"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.edge_ids, vec![EdgeId::new(1), EdgeId::new(3)]);
        assert_eq!(config.edge_enabled, vec![true, false]);

        let back = serde_json::to_string(&config).unwrap();
        let again: NetworkConfig = serde_json::from_str(&back).unwrap();
        assert_eq!(again, config);
    }

    #[test]
    fn test_set_enabled() {
        let mut config = NetworkConfig::from_raw(&[0, 2], &[1], &[(0, 2)], &[true], 0);
        assert!(config.set_enabled(EdgeId::new(1), false));
        assert_eq!(config.edge_enabled, vec![false]);
        assert!(!config.set_enabled(EdgeId::new(5), true));
    }
}
