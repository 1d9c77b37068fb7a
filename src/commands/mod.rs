//! Command implementations

pub mod generate;
pub mod score;
pub mod simple;
pub mod simulate;

pub use generate::generate_codes;
pub use score::{ScoreResult, score_codes};
pub use simple::run_simple;
pub use simulate::{SimulationResult, run_simulation};
