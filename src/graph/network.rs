use crate::error::{EliminationError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Add;

pub type VertexId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capacity {
    Finite(u64),
    Unbounded,
}

impl Capacity {
    pub fn is_unbounded(self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Capacity::Finite(value) => Some(value),
            Capacity::Unbounded => None,
        }
    }
}

impl Ord for Capacity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Capacity::Finite(a), Capacity::Finite(b)) => a.cmp(b),
            (Capacity::Finite(_), Capacity::Unbounded) => Ordering::Less,
            (Capacity::Unbounded, Capacity::Finite(_)) => Ordering::Greater,
            (Capacity::Unbounded, Capacity::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Capacity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Capacity {
    type Output = Capacity;

    fn add(self, rhs: Capacity) -> Capacity {
        match (self, rhs) {
            (Capacity::Finite(a), Capacity::Finite(b)) => Capacity::Finite(a.saturating_add(b)),
            _ => Capacity::Unbounded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Read-only view of one edge and the flow currently assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub capacity: Capacity,
    pub flow: u64,
}

#[derive(Debug, Clone)]
struct Arc {
    head: VertexId,
    residual: u64,
    unbounded: bool,
}

/// Directed capacitated graph stored as an arena of residual arcs.
///
/// Every edge owns two arcs: `2 * id` runs forward and `2 * id + 1` runs
/// backward, so the partner of arc `a` is always `a ^ 1`. A reverse arc's
/// residual is exactly the flow pushed along its edge.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    adjacency: Vec<Vec<usize>>,
    arcs: Vec<Arc>,
    capacities: Vec<Capacity>,
}

impl FlowNetwork {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        FlowNetwork {
            adjacency: vec![Vec::new(); vertex_count],
            arcs: Vec::with_capacity(edge_count * 2),
            capacities: Vec::with_capacity(edge_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.capacities.len()
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId, capacity: u64) -> Result<EdgeId> {
        self.insert(from, to, Capacity::Finite(capacity))
    }

    pub fn add_unbounded_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        self.insert(from, to, Capacity::Unbounded)
    }

    fn insert(&mut self, from: VertexId, to: VertexId, capacity: Capacity) -> Result<EdgeId> {
        if from >= self.vertex_count() || to >= self.vertex_count() {
            return Err(EliminationError::invalid(format!(
                "edge ({from}, {to}) outside network of {} vertices",
                self.vertex_count()
            )));
        }
        let id = EdgeId(self.capacities.len());
        let forward = self.arcs.len();
        self.arcs.push(Arc {
            head: to,
            residual: capacity.finite().unwrap_or(0),
            unbounded: capacity.is_unbounded(),
        });
        self.arcs.push(Arc {
            head: from,
            residual: 0,
            unbounded: false,
        });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(forward + 1);
        self.capacities.push(capacity);
        Ok(id)
    }

    /// `None` for an id this network never handed out.
    pub fn edge(&self, id: EdgeId) -> Option<FlowEdge> {
        let capacity = *self.capacities.get(id.0)?;
        let forward = id.0 * 2;
        Some(FlowEdge {
            from: self.arcs[forward + 1].head,
            to: self.arcs[forward].head,
            capacity,
            flow: self.arcs[forward + 1].residual,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = FlowEdge> + '_ {
        (0..self.edge_count()).filter_map(move |id| self.edge(EdgeId(id)))
    }

    /// Edges leaving `vertex`, in insertion order. Empty for an unknown vertex.
    pub fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.arcs_of(vertex)
            .filter(|&&arc| arc % 2 == 0)
            .map(|&arc| EdgeId(arc / 2))
    }

    pub fn incoming(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.arcs_of(vertex)
            .filter(|&&arc| arc % 2 == 1)
            .map(|&arc| EdgeId(arc / 2))
    }

    /// Net flow entering `vertex` minus flow leaving it.
    pub fn excess(&self, vertex: VertexId) -> i128 {
        let flow_on = |id| self.edge(id).map_or(0, |edge| edge.flow as i128);
        let inflow: i128 = self.incoming(vertex).map(flow_on).sum();
        let outflow: i128 = self.outgoing(vertex).map(flow_on).sum();
        inflow - outflow
    }

    fn arcs_of(&self, vertex: VertexId) -> impl Iterator<Item = &usize> + '_ {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    pub fn reset_flow(&mut self) {
        for (id, capacity) in self.capacities.iter().enumerate() {
            self.arcs[id * 2].residual = capacity.finite().unwrap_or(0);
            self.arcs[id * 2 + 1].residual = 0;
        }
    }

    pub(crate) fn arcs_from(&self, vertex: VertexId) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub(crate) fn head(&self, arc: usize) -> VertexId {
        self.arcs[arc].head
    }

    pub(crate) fn tail(&self, arc: usize) -> VertexId {
        self.arcs[arc ^ 1].head
    }

    pub(crate) fn residual(&self, arc: usize) -> Capacity {
        let arc = &self.arcs[arc];
        if arc.unbounded {
            Capacity::Unbounded
        } else {
            Capacity::Finite(arc.residual)
        }
    }

    pub(crate) fn has_residual(&self, arc: usize) -> bool {
        self.residual(arc) > Capacity::Finite(0)
    }

    pub(crate) fn push(&mut self, arc: usize, amount: u64) {
        if !self.arcs[arc].unbounded {
            debug_assert!(self.arcs[arc].residual >= amount, "push exceeds residual on arc {arc}");
            self.arcs[arc].residual -= amount;
        }
        self.arcs[arc ^ 1].residual += amount;
    }
}
