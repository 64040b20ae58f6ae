//! Typed identifiers for grid vertices (nodes) and edges (lines, transformers).
//!
//! Both wrap an `i64` and live in one shared numeric space: a network is only
//! valid when no vertex and edge share a raw value.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(i64);

impl VertexId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        VertexId(value)
    }
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl EdgeId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        EdgeId(value)
    }
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(value: i64) -> Self {
        VertexId(value)
    }
}

impl From<i64> for EdgeId {
    fn from(value: i64) -> Self {
        EdgeId(value)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex#{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(VertexId::new(4).to_string(), "Vertex#4");
        assert_eq!(EdgeId::new(7).to_string(), "Edge#7");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&EdgeId::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: VertexId = serde_json::from_str("-3").unwrap();
        assert_eq!(back.value(), -3);
    }
}
