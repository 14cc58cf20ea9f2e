pub mod support;

mod failure_modes;
mod fix;
mod logging;
mod rebalance;
mod rebuild;
mod validate;
