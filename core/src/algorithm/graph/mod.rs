//! Flow algorithms on residual networks
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod augmenting_path;
pub mod max_flow;
pub mod min_cut;

pub use self::augmenting_path::{AugmentingPath, DepthFirstSearch};
pub use self::max_flow::{max_flow, FlowMetrics, FordFulkerson, MaxFlowResult};
pub use self::min_cut::{min_cut, MinCut};
