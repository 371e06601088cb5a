//! Post-hoc verification of computed flows

pub mod correctness;

pub use self::correctness::{check_flow, FlowReport, InvariantViolation};
