//! CLI command implementations.

mod check;
mod eval;
mod params;
mod select;

pub use check::{CheckArgs, run_check};
pub use eval::{EvalArgs, run_eval};
pub use select::{SelectArgs, run_select};
