use crate::graph::network::{Capacity, FlowNetwork, VertexId};
use bitvec::prelude::*;

pub const MAX_ENUMERATION_VERTICES: usize = 20;

/// Total capacity of edges leaving `source_side`. Vertices past the end of
/// `source_side` count as sink side.
pub fn cut_capacity(network: &FlowNetwork, source_side: &BitSlice) -> Capacity {
    let on_source_side = |vertex: VertexId| source_side.get(vertex).map_or(false, |bit| *bit);
    network
        .edges()
        .filter(|edge| on_source_side(edge.from) && !on_source_side(edge.to))
        .fold(Capacity::Finite(0), |total, edge| total + edge.capacity)
}

/// Minimum s-t cut found by trying every vertex partition.
///
/// Exponential in the vertex count; returns `None` for networks larger than
/// [`MAX_ENUMERATION_VERTICES`] or when `source == sink`.
pub fn min_cut_by_enumeration(
    network: &FlowNetwork,
    source: VertexId,
    sink: VertexId,
) -> Option<Capacity> {
    let n = network.vertex_count();
    if source == sink || source >= n || sink >= n || n > MAX_ENUMERATION_VERTICES {
        return None;
    }

    let free: Vec<VertexId> = (0..n).filter(|&v| v != source && v != sink).collect();
    let mut best: Option<Capacity> = None;
    for mask in 0u32..(1u32 << free.len()) {
        let mut side = bitvec![0; n];
        side.set(source, true);
        for (bit, &vertex) in free.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                side.set(vertex, true);
            }
        }
        let capacity = cut_capacity(network, &side);
        best = Some(best.map_or(capacity, |current| current.min(capacity)));
    }
    best
}
