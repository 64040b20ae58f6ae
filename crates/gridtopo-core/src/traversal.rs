//! Breadth-first traversal over an owned adjacency list.
//!
//! Vertices are addressed by their position in the declared vertex list and
//! every adjacency entry carries the position of the edge that produced it, so
//! parallel edges between the same pair stay distinct.

use std::collections::VecDeque;

/// Why an enabled-edge subgraph is not a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TreeViolation {
    /// Number of vertices the traversal could not reach.
    Disconnected { unreached: usize },
    /// Position of the first edge found closing a loop.
    Cycle { edge: usize },
}

/// Undirected adjacency list restricted to enabled edges.
#[derive(Debug, Clone)]
pub(crate) struct Adjacency {
    neighbors: Vec<Vec<(usize, usize)>>,
    edge_count: usize,
}

impl Adjacency {
    /// Build from positional endpoints; only edges whose flag is `true` are linked.
    pub(crate) fn build(
        vertex_count: usize,
        endpoints: &[(usize, usize)],
        enabled: &[bool],
    ) -> Self {
        let mut neighbors = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;
        for (edge, (&(a, b), &on)) in endpoints.iter().zip(enabled).enumerate() {
            if !on {
                continue;
            }
            neighbors[a].push((b, edge));
            if a != b {
                neighbors[b].push((a, edge));
            }
            edge_count += 1;
        }
        Self {
            neighbors,
            edge_count,
        }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn degree(&self, vertex: usize) -> usize {
        self.neighbors[vertex].len()
    }

    /// Single BFS from vertex 0 with parent-edge tracking.
    ///
    /// Connectivity is reported before cycles: a disconnected graph is
    /// `Disconnected` even if the reached part also contains a loop.
    pub(crate) fn check_spanning_tree(&self) -> Option<TreeViolation> {
        let n = self.vertex_count();
        if n == 0 {
            return None;
        }
        let mut visited = vec![false; n];
        let mut parent_edge: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::new();
        let mut reached = 1;
        let mut first_cycle = None;

        visited[0] = true;
        queue.push_back(0);
        while let Some(vertex) = queue.pop_front() {
            for &(next, edge) in &self.neighbors[vertex] {
                if parent_edge[vertex] == Some(edge) {
                    continue;
                }
                if visited[next] {
                    // In a tree every non-parent edge leads somewhere new.
                    first_cycle.get_or_insert(edge);
                    continue;
                }
                visited[next] = true;
                parent_edge[next] = Some(edge);
                reached += 1;
                queue.push_back(next);
            }
        }

        if reached < n {
            Some(TreeViolation::Disconnected {
                unreached: n - reached,
            })
        } else {
            first_cycle.map(|edge| TreeViolation::Cycle { edge })
        }
    }

    /// Connected components in BFS order, optionally ignoring one edge.
    ///
    /// Components are discovered in ascending order of their lowest vertex
    /// position; members are listed in visit order.
    pub(crate) fn components(&self, skip_edge: Option<usize>) -> Vec<Vec<usize>> {
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut components = Vec::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut queue = VecDeque::from([start]);
            let mut members = Vec::new();
            while let Some(vertex) = queue.pop_front() {
                members.push(vertex);
                for &(next, edge) in &self.neighbors[vertex] {
                    if Some(edge) == skip_edge || visited[next] {
                        continue;
                    }
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
            components.push(members);
        }
        components
    }
}
