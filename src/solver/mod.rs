mod aas_asa;
mod classify;
mod engine;
mod error;
mod metrics;
mod sas_ssa;
mod slots;
mod spec;
mod sss;
mod tolerance;
mod triangle;

pub use classify::Case;
pub use engine::{Candidates, Solver, solve, solve_with_filter, ssa_candidates};
pub use error::SolveError;
pub use slots::{Slot, SlotKind, SlotLabels};
pub use spec::Specification;
pub use tolerance::{Closeness, Tolerance};
pub use triangle::Triangle;
