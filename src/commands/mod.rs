//! CLI commands for qbank

pub mod dispatch;
pub mod failure_modes;
pub mod fix;
pub mod rebalance;
pub mod rebuild;
pub mod scan;
pub mod validate;
