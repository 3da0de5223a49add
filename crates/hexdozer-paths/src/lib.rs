//! Leveling-aware route planning for ground units on hex grids.
//!
//! The planner searches for a cheap route from a start cell and facing to a
//! destination cell. Cells that cannot be entered as they are may still be
//! crossed if the unit levels them first, at an extra cost tracked apart
//! from ordinary movement.
//!
//! The search is best-first over [`Path`] values. Each expansion turns the
//! unit towards all six facings and steps forward once; a per-cell table
//! keeps only the best known path into every cell, and the cost of the best
//! route found so far bounds every later candidate.
//!
//! # Collaborators
//!
//! | Trait | Supplies |
//! |---|---|
//! | [`HexBoard`] | bounds and distance |
//! | [`HeuristicBoard`] : [`HexBoard`] | frontier heuristic terms |
//! | [`MovementProfile`] | step legality, step cost, leveling |
//!
//! # Optimality
//!
//! The per-cell table compares candidates with the same heuristic-bearing
//! order used for the frontier. A path that is cheaper so far but scores a
//! worse heuristic can therefore be evicted, and the returned route is not
//! guaranteed to be the cheapest one.

mod config;
mod dominance;
mod error;
mod expand;
mod frontier;
mod observer;
mod ordering;
mod path;
mod search;
mod traits;

#[cfg(test)]
mod testing;

pub use config::SearchConfig;
pub use dominance::{BestTable, CostBound, Verdict};
pub use error::PlanError;
pub use expand::{TURN_SEQUENCES, expand};
pub use frontier::Frontier;
pub use observer::{EventLog, SearchEvent, SearchObserver};
pub use ordering::{FrontierKey, FrontierOrdering};
pub use path::{Move, Path};
pub use search::{Planner, SearchOutcome, SearchStats, Termination, find_path};
pub use traits::{HeuristicBoard, HexBoard, MovementProfile, Step};
