use crate::graph::network::{FlowNetwork, VertexId};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Finds augmenting paths in a residual graph.
///
/// A path is returned as the arcs to push along, ordered from `source` to
/// `sink`. Every returned arc must have positive residual capacity. Terminals
/// outside the network have no path.
pub trait PathSearch: Send + Sync {
    fn find_path(&self, network: &FlowNetwork, source: VertexId, sink: VertexId) -> Option<Vec<usize>>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
    fn find_path(&self, network: &FlowNetwork, source: VertexId, sink: VertexId) -> Option<Vec<usize>> {
        if !has_terminals(network, source, sink) {
            return None;
        }
        let mut parent: Vec<Option<usize>> = vec![None; network.vertex_count()];
        let mut visited = bitvec![0; network.vertex_count()];
        let mut queue = VecDeque::new();
        visited.set(source, true);
        queue.push_back(source);

        while let Some(vertex) = queue.pop_front() {
            if vertex == sink {
                break;
            }
            for &arc in network.arcs_from(vertex) {
                let head = network.head(arc);
                if !visited[head] && network.has_residual(arc) {
                    visited.set(head, true);
                    parent[head] = Some(arc);
                    queue.push_back(head);
                }
            }
        }

        trace_back(network, &parent, source, sink)
    }

    fn name(&self) -> &'static str {
        "breadth-first"
    }
}

/// Depth-first variant driven by an explicit stack.
///
/// A vertex is settled when it is popped, so arcs are explored in adjacency
/// order along the deepest branch first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    fn find_path(&self, network: &FlowNetwork, source: VertexId, sink: VertexId) -> Option<Vec<usize>> {
        if !has_terminals(network, source, sink) {
            return None;
        }
        let mut parent: Vec<Option<usize>> = vec![None; network.vertex_count()];
        let mut visited = bitvec![0; network.vertex_count()];
        let mut stack: Vec<(VertexId, Option<usize>)> = vec![(source, None)];

        while let Some((vertex, via)) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited.set(vertex, true);
            parent[vertex] = via;
            if vertex == sink {
                break;
            }
            for &arc in network.arcs_from(vertex).iter().rev() {
                let head = network.head(arc);
                if !visited[head] && network.has_residual(arc) {
                    stack.push((head, Some(arc)));
                }
            }
        }

        trace_back(network, &parent, source, sink)
    }

    fn name(&self) -> &'static str {
        "depth-first"
    }
}

fn has_terminals(network: &FlowNetwork, source: VertexId, sink: VertexId) -> bool {
    source < network.vertex_count() && sink < network.vertex_count()
}

fn trace_back(
    network: &FlowNetwork,
    parent: &[Option<usize>],
    source: VertexId,
    sink: VertexId,
) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut vertex = sink;
    while vertex != source {
        let arc = parent[vertex]?;
        path.push(arc);
        vertex = network.tail(arc);
    }
    path.reverse();
    Some(path)
}

/// Vertices reachable from `source` through arcs with positive residual.
/// Empty when `source` is not in the network.
pub fn residual_reachable(network: &FlowNetwork, source: VertexId) -> BitVec {
    let mut reachable = bitvec![0; network.vertex_count()];
    if source >= network.vertex_count() {
        return reachable;
    }
    let mut queue = VecDeque::new();
    reachable.set(source, true);
    queue.push_back(source);

    while let Some(vertex) = queue.pop_front() {
        for &arc in network.arcs_from(vertex) {
            let head = network.head(arc);
            if !reachable[head] && network.has_residual(arc) {
                reachable.set(head, true);
                queue.push_back(head);
            }
        }
    }
    reachable
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl SearchStrategy {
    pub fn searcher(self) -> Box<dyn PathSearch> {
        match self {
            SearchStrategy::BreadthFirst => Box::new(default_path_search()),
            SearchStrategy::DepthFirst => Box::new(DepthFirst),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::BreadthFirst => write!(f, "breadth-first"),
            SearchStrategy::DepthFirst => write!(f, "depth-first"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth" => Ok(SearchStrategy::BreadthFirst),
            "dfs" | "depth-first" | "depth" => Ok(SearchStrategy::DepthFirst),
            other => Err(format!("unknown search strategy '{other}'")),
        }
    }
}

pub fn default_path_search() -> BreadthFirst {
    BreadthFirst
}
