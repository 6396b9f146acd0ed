//! Augmenting-path maximum flow (Ford-Fulkerson with a pluggable path search).
//!
//! With [`BreadthFirst`](crate::graph::search::BreadthFirst) this is
//! Edmonds-Karp. When no augmenting path is left, the vertices still reachable
//! from the source form the source side of a minimum cut.

use crate::error::{EliminationError, Result};
use crate::graph::cut;
use crate::graph::network::{Capacity, FlowNetwork, VertexId};
use crate::graph::search::{residual_reachable, PathSearch};
use bitvec::prelude::*;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct MaxFlow {
    value: u64,
    augmentations: usize,
    source_side: BitVec,
}

impl MaxFlow {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Whether `vertex` is on the source side of the minimum cut.
    pub fn in_cut(&self, vertex: VertexId) -> bool {
        self.source_side.get(vertex).map(|bit| *bit).unwrap_or(false)
    }

    pub fn source_side(&self) -> &BitSlice {
        &self.source_side
    }

    pub fn cut_capacity(&self, network: &FlowNetwork) -> Capacity {
        cut::cut_capacity(network, &self.source_side)
    }
}

/// Runs max-flow from `source` to `sink`, discarding any flow already on `network`.
pub fn max_flow(
    network: &mut FlowNetwork,
    source: VertexId,
    sink: VertexId,
    search: &dyn PathSearch,
) -> Result<MaxFlow> {
    let vertex_count = network.vertex_count();
    if source >= vertex_count || sink >= vertex_count {
        return Err(EliminationError::invalid(format!(
            "terminals ({source}, {sink}) outside network of {vertex_count} vertices"
        )));
    }
    if source == sink {
        return Err(EliminationError::DisconnectedInput(source));
    }

    network.reset_flow();
    let mut value = 0u64;
    let mut augmentations = 0usize;

    while let Some(path) = search.find_path(network, source, sink) {
        let bottleneck = path
            .iter()
            .filter_map(|&arc| network.residual(arc).finite())
            .min()
            .ok_or(EliminationError::UnboundedFlow {
                from: source,
                to: sink,
            })?;
        for &arc in &path {
            network.push(arc, bottleneck);
        }
        value += bottleneck;
        augmentations += 1;
        trace!(
            search = search.name(),
            length = path.len(),
            bottleneck,
            total = value,
            "augmented"
        );
    }

    let source_side = residual_reachable(network, source);
    debug_assert!(!source_side[sink], "sink reachable after max-flow terminated");

    Ok(MaxFlow {
        value,
        augmentations,
        source_side,
    })
}
