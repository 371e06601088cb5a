//! Graph storage for flow computations

pub mod flow_network;

pub use self::flow_network::{FlowEdge, FlowNetwork, NodeLabel};
