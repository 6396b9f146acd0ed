pub mod cut;
pub mod max_flow;
pub mod network;
pub mod search;

pub use cut::{cut_capacity, min_cut_by_enumeration};
pub use max_flow::{max_flow, MaxFlow};
pub use network::{Capacity, EdgeId, FlowEdge, FlowNetwork, VertexId};
pub use search::{default_path_search, BreadthFirst, DepthFirst, PathSearch, SearchStrategy};
