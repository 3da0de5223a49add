use hexdozer_core::{Facing, Hex, HexRange};

use crate::path::Path;

/// A single forward move out of `from` into the adjacent `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub from: Hex,
    pub to: Hex,
    /// Facing held while moving; `to == from.neighbor(facing)`.
    pub facing: Facing,
}

impl Step {
    /// The step taken by moving forward from `from` while facing `facing`.
    #[inline]
    pub fn forward(from: Hex, facing: Facing) -> Self {
        Self {
            from,
            to: from.neighbor(facing),
            facing,
        }
    }
}

/// Minimal board interface: which cells exist and how far apart they are.
pub trait HexBoard {
    /// Whether `cell` is part of the board.
    fn contains(&self, cell: Hex) -> bool;

    /// Grid distance between two cells.
    fn distance(&self, from: Hex, to: Hex) -> i32 {
        from.distance(to)
    }
}

/// Board able to score how far a path state is from the destination.
///
/// The planner only queries these for cells inside the board.
pub trait HeuristicBoard: HexBoard {
    /// Penalty for arriving at `cell` with `facing` when heading to `dest`.
    ///
    /// Zero at the destination. Elsewhere, the number of turns from `facing`
    /// to the direction of `dest`, plus one when `dest` is not on a straight
    /// hex line from `cell`.
    fn facing_penalty(&self, cell: Hex, facing: Facing, dest: Hex) -> i32 {
        if cell == dest {
            return 0;
        }
        let mut turns = i32::from(facing.turns_to(cell.direction_to(dest)));
        if !cell.on_spine(dest) {
            turns += 1;
        }
        turns
    }

    /// Penalty for the ground level difference between `cell` and `dest`.
    fn level_diff_penalty(&self, cell: Hex, dest: Hex) -> i32;

    /// Penalty for the elevation difference between `cell` and `dest`.
    fn elevation_diff_penalty(&self, cell: Hex, dest: Hex) -> i32;
}

/// Movement capabilities of one unit on a board of type `B`.
pub trait MovementProfile<B: ?Sized> {
    /// Whether `step` may be appended to `path` with the terrain as it is.
    ///
    /// `path` is the state just before the step: its cell is `step.from` and
    /// its facing is `step.facing`.
    fn is_legal_step(&self, board: &B, path: &Path, step: &Step) -> bool;

    /// Movement cost of `step`, excluding any leveling. Must be ≥ 0.
    ///
    /// For a step into a cell that has to be leveled first, this is the cost
    /// of entering the cell once leveled.
    fn step_cost(&self, board: &B, step: &Step) -> i32;

    /// Whether `cell` blocks this unit as-is but can be leveled by it.
    fn needs_leveling(&self, board: &B, cell: Hex) -> bool;

    /// Cost of leveling `cell`. Only queried when
    /// [`needs_leveling`](Self::needs_leveling) returns `true`.
    fn leveling_cost(&self, board: &B, cell: Hex) -> i32;
}

impl HexBoard for HexRange {
    #[inline]
    fn contains(&self, cell: Hex) -> bool {
        HexRange::contains(*self, cell)
    }
}
