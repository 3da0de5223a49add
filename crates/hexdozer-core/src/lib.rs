//! **hexdozer-core**: hex grid geometry shared by the hexdozer crates.
//!
//! This crate provides the foundational types used by the planner and the
//! reference board: axial hex cells, the six unit facings, and rhombus
//! shaped bounds.

pub mod facing;
pub mod geom;

pub use facing::Facing;
pub use geom::{Hex, HexRange, HexRangeIter};
