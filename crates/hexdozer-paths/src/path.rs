//! Persistent, append-only candidate routes.

use std::rc::Rc;

use hexdozer_core::{Facing, Hex};

use crate::traits::{HexBoard, MovementProfile, Step};

/// A single unit move. Only [`Move::Forward`] changes the cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    TurnLeft,
    TurnRight,
    Forward,
}

/// Shared tail of a persistent singly linked list.
#[derive(Debug)]
struct Link<T> {
    value: T,
    prev: Option<Rc<Link<T>>>,
}

fn push<T>(tail: &Option<Rc<Link<T>>>, value: T) -> Option<Rc<Link<T>>> {
    Some(Rc::new(Link {
        value,
        prev: tail.clone(),
    }))
}

fn collect<T: Copy>(tail: &Option<Rc<Link<T>>>, len: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(len);
    let mut cur = tail.as_deref();
    while let Some(link) = cur {
        out.push(link.value);
        cur = link.prev.as_deref();
    }
    out.reverse();
    out
}

/// A candidate route from a fixed start cell and facing.
///
/// Paths are values: [`append`](Self::append) returns a new path and never
/// touches the receiver. The move log and the list of cells to level are
/// shared with every ancestor, so cloning and extending are O(1).
#[derive(Clone, Debug)]
pub struct Path {
    start: Hex,
    start_facing: Facing,
    cell: Hex,
    facing: Facing,
    mp_used: i32,
    leveling_cost: i32,
    hexes_moved: u32,
    len: usize,
    last_step_legal: bool,
    last_step_levels: bool,
    moves: Option<Rc<Link<Move>>>,
    to_level: Option<Rc<Link<Hex>>>,
    to_level_len: usize,
}

impl Path {
    /// The empty path standing at `start` with `facing`.
    pub fn new(start: Hex, facing: Facing) -> Self {
        Self {
            start,
            start_facing: facing,
            cell: start,
            facing,
            mp_used: 0,
            leveling_cost: 0,
            hexes_moved: 0,
            len: 0,
            last_step_legal: true,
            last_step_levels: false,
            moves: None,
            to_level: None,
            to_level_len: 0,
        }
    }

    /// Return a copy of this path extended by `mv`.
    ///
    /// Turns only change the facing and cost nothing. A forward move pays
    /// the unit's step cost and, when the step is not legal as-is but the
    /// target can be leveled, the leveling cost of the target cell.
    ///
    /// The unit profile is only consulted for targets inside the board. A
    /// forward move off the board records the new cell at no cost and is
    /// never feasible.
    pub fn append<B, M>(&self, mv: Move, board: &B, unit: &M) -> Path
    where
        B: HexBoard + ?Sized,
        M: MovementProfile<B> + ?Sized,
    {
        let mut next = self.clone();
        next.moves = push(&self.moves, mv);
        next.len += 1;
        match mv {
            Move::TurnLeft => next.facing = self.facing.turn_left(),
            Move::TurnRight => next.facing = self.facing.turn_right(),
            Move::Forward => {
                let step = Step::forward(self.cell, self.facing);
                next.cell = step.to;
                next.hexes_moved += 1;
                next.last_step_legal = false;
                next.last_step_levels = false;
                if board.contains(step.to) {
                    next.mp_used = next.mp_used.saturating_add(unit.step_cost(board, &step).max(0));
                    next.last_step_legal = unit.is_legal_step(board, self, &step);
                    if !next.last_step_legal && unit.needs_leveling(board, step.to) {
                        let cost = unit.leveling_cost(board, step.to).max(0);
                        next.leveling_cost = next.leveling_cost.saturating_add(cost);
                        next.to_level = push(&self.to_level, step.to);
                        next.to_level_len += 1;
                        next.last_step_levels = true;
                    }
                }
            }
        }
        next
    }

    /// Cell the path starts from.
    #[inline]
    pub fn start(&self) -> Hex {
        self.start
    }

    /// Facing the path starts with.
    #[inline]
    pub fn start_facing(&self) -> Facing {
        self.start_facing
    }

    /// Cell reached after the last move.
    #[inline]
    pub fn cell(&self) -> Hex {
        self.cell
    }

    /// Facing after the last move.
    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Accumulated movement cost, leveling excluded.
    #[inline]
    pub fn mp_used(&self) -> i32 {
        self.mp_used
    }

    /// Accumulated leveling cost.
    #[inline]
    pub fn leveling_cost(&self) -> i32 {
        self.leveling_cost
    }

    /// Movement cost plus leveling cost.
    #[inline]
    pub fn total_cost(&self) -> i32 {
        self.mp_used.saturating_add(self.leveling_cost)
    }

    /// Number of forward moves taken.
    #[inline]
    pub fn hexes_moved(&self) -> u32 {
        self.hexes_moved
    }

    /// Number of moves, turns included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no move has been taken. The planner returns such a path when
    /// there is no route.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the last forward move was legal with the terrain as-is.
    /// `true` for a path without forward moves.
    #[inline]
    pub fn last_step_legal(&self) -> bool {
        self.last_step_legal
    }

    /// Whether the last forward move entered a cell that has to be leveled.
    #[inline]
    pub fn requires_leveling(&self) -> bool {
        self.last_step_levels
    }

    /// The moves taken, in order.
    pub fn moves(&self) -> Vec<Move> {
        collect(&self.moves, self.len)
    }

    /// Cells the unit has to level along the way, in order.
    pub fn cells_to_level(&self) -> Vec<Hex> {
        collect(&self.to_level, self.to_level_len)
    }

    /// Every cell occupied along the path, the start included.
    pub fn cells(&self) -> Vec<Hex> {
        let mut out = Vec::with_capacity(self.hexes_moved as usize + 1);
        let mut cell = self.start;
        let mut facing = self.start_facing;
        out.push(cell);
        for mv in self.moves() {
            match mv {
                Move::TurnLeft => facing = facing.turn_left(),
                Move::TurnRight => facing = facing.turn_right(),
                Move::Forward => {
                    cell = cell.neighbor(facing);
                    out.push(cell);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestBoard, TestUnit};
    use hexdozer_core::HexRange;

    fn board() -> TestBoard {
        TestBoard::new(HexRange::with_size(6, 6))
    }

    #[test]
    fn new_path_is_empty() {
        let p = Path::new(Hex::new(1, 1), Facing::SE);
        assert!(p.is_empty());
        assert_eq!(p.cell(), Hex::new(1, 1));
        assert_eq!(p.facing(), Facing::SE);
        assert_eq!(p.total_cost(), 0);
        assert_eq!(p.hexes_moved(), 0);
        assert!(p.moves().is_empty());
        assert_eq!(p.cells(), vec![Hex::new(1, 1)]);
    }

    #[test]
    fn turns_cost_nothing() {
        let b = board();
        let p = Path::new(Hex::new(2, 2), Facing::N)
            .append(Move::TurnLeft, &b, &TestUnit)
            .append(Move::TurnLeft, &b, &TestUnit);
        assert_eq!(p.facing(), Facing::SW);
        assert_eq!(p.cell(), Hex::new(2, 2));
        assert_eq!(p.total_cost(), 0);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn forward_pays_step_cost() {
        let mut b = board();
        b.set_cost(Hex::new(2, 1), 3);
        let p = Path::new(Hex::new(2, 2), Facing::N).append(Move::Forward, &b, &TestUnit);
        assert_eq!(p.cell(), Hex::new(2, 1));
        assert_eq!(p.mp_used(), 3);
        assert_eq!(p.leveling_cost(), 0);
        assert_eq!(p.hexes_moved(), 1);
        assert!(p.last_step_legal());
        assert!(!p.requires_leveling());
    }

    #[test]
    fn blocked_levelable_cell_adds_leveling_cost() {
        let mut b = board();
        b.set_levelable(Hex::new(2, 1), 4);
        let p = Path::new(Hex::new(2, 2), Facing::N).append(Move::Forward, &b, &TestUnit);
        assert!(!p.last_step_legal());
        assert!(p.requires_leveling());
        assert_eq!(p.mp_used(), 1);
        assert_eq!(p.leveling_cost(), 4);
        assert_eq!(p.total_cost(), 5);
        assert_eq!(p.cells_to_level(), vec![Hex::new(2, 1)]);
    }

    #[test]
    fn append_leaves_parent_untouched() {
        let b = board();
        let parent = Path::new(Hex::new(2, 2), Facing::N).append(Move::Forward, &b, &TestUnit);
        let before = parent.moves();
        let a = parent.append(Move::TurnRight, &b, &TestUnit);
        let c = parent.append(Move::Forward, &b, &TestUnit);
        assert_eq!(parent.moves(), before);
        assert_eq!(parent.cell(), Hex::new(2, 1));
        assert_eq!(a.moves(), vec![Move::Forward, Move::TurnRight]);
        assert_eq!(c.moves(), vec![Move::Forward, Move::Forward]);
    }

    #[test]
    fn replaying_moves_reaches_final_state() {
        let b = board();
        let p = Path::new(Hex::new(0, 3), Facing::NE)
            .append(Move::Forward, &b, &TestUnit)
            .append(Move::TurnRight, &b, &TestUnit)
            .append(Move::Forward, &b, &TestUnit)
            .append(Move::TurnLeft, &b, &TestUnit)
            .append(Move::TurnLeft, &b, &TestUnit)
            .append(Move::Forward, &b, &TestUnit);
        let cells = p.cells();
        assert_eq!(cells.len(), 4);
        assert_eq!(*cells.last().unwrap(), p.cell());
        assert_eq!(cells[1], Hex::new(1, 2));
        assert_eq!(cells[2], Hex::new(2, 2));
        assert_eq!(p.facing(), Facing::N);
        assert_eq!(p.cell(), Hex::new(2, 1));
    }

    #[test]
    fn forward_off_board_is_never_legal() {
        let b = board();
        let p = Path::new(Hex::new(0, 0), Facing::N).append(Move::Forward, &b, &TestUnit);
        assert_eq!(p.cell(), Hex::new(0, -1));
        assert!(!p.last_step_legal());
        assert!(!p.requires_leveling());
        assert_eq!(p.total_cost(), 0);
    }
}
