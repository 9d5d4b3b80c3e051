//! Local search for improving tours.
//!
//! - [`two_opt`] — First-improvement 2-opt segment reversal

mod config;
mod two_opt;

pub use config::TwoOptConfig;
pub use two_opt::{find_first_improving_exchange, two_opt, two_opt_with_config, Exchange};
