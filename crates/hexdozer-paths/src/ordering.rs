//! Frontier ordering: heuristic score and tie-break.

use std::cmp::Ordering;

use hexdozer_core::Hex;

use crate::path::Path;
use crate::traits::HeuristicBoard;

/// Sort key of a path: `(score, hexes_moved)`, lower first.
///
/// `score` is the total cost plus the heuristic estimate to the
/// destination. Equal scores prefer the path with fewer forward moves. Two
/// keys with the same score and the same move count are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierKey {
    pub score: i32,
    pub hexes_moved: u32,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.hexes_moved.cmp(&other.hexes_moved))
    }
}

/// The total order over paths towards one destination.
///
/// Used both to pick the next path to expand and to decide whether a new
/// path into a cell beats the recorded one.
pub struct FrontierOrdering<'a, B: ?Sized> {
    board: &'a B,
    dest: Hex,
}

impl<'a, B: HeuristicBoard + ?Sized> FrontierOrdering<'a, B> {
    pub fn new(board: &'a B, dest: Hex) -> Self {
        Self { board, dest }
    }

    #[inline]
    pub fn board(&self) -> &'a B {
        self.board
    }

    #[inline]
    pub fn destination(&self) -> Hex {
        self.dest
    }

    /// Estimated remaining effort from the end of `p` to the destination.
    pub fn heuristic(&self, p: &Path) -> i32 {
        let cell = p.cell();
        self.board
            .distance(cell, self.dest)
            .saturating_add(self.board.facing_penalty(cell, p.facing(), self.dest))
            .saturating_add(self.board.level_diff_penalty(cell, self.dest))
            .saturating_add(self.board.elevation_diff_penalty(cell, self.dest))
    }

    /// Total cost plus heuristic.
    #[inline]
    pub fn score(&self, p: &Path) -> i32 {
        p.total_cost().saturating_add(self.heuristic(p))
    }

    #[inline]
    pub fn key(&self, p: &Path) -> FrontierKey {
        FrontierKey {
            score: self.score(p),
            hexes_moved: p.hexes_moved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Move;
    use crate::testing::{TestBoard, TestUnit};
    use hexdozer_core::{Facing, HexRange};

    fn board() -> TestBoard {
        TestBoard::new(HexRange::with_size(8, 8))
    }

    #[test]
    fn heuristic_sums_all_terms() {
        let mut b = board();
        b.set_level(Hex::new(4, 1), 2);
        let ord = FrontierOrdering::new(&b, Hex::new(4, 1));
        // Three hexes north, facing south: distance 3, three turns, level 2.
        let p = Path::new(Hex::new(4, 4), Facing::S);
        assert_eq!(ord.heuristic(&p), 3 + 3 + 2);
        assert_eq!(ord.score(&p), 8);
    }

    #[test]
    fn heuristic_zero_at_destination() {
        let b = board();
        let d = Hex::new(2, 2);
        let ord = FrontierOrdering::new(&b, d);
        let p = Path::new(d, Facing::SW);
        assert_eq!(ord.heuristic(&p), 0);
    }

    #[test]
    fn lower_score_first() {
        let b = board();
        let ord = FrontierOrdering::new(&b, Hex::new(4, 0));
        let near = Path::new(Hex::new(4, 2), Facing::N);
        let far = Path::new(Hex::new(4, 5), Facing::N);
        assert!(ord.key(&near) < ord.key(&far));
    }

    #[test]
    fn equal_scores_prefer_fewer_hexes() {
        let a = FrontierKey {
            score: 5,
            hexes_moved: 2,
        };
        let b = FrontierKey {
            score: 5,
            hexes_moved: 3,
        };
        assert!(a < b);
        let c = FrontierKey {
            score: 4,
            hexes_moved: 9,
        };
        assert!(c < a);
    }

    #[test]
    fn equal_keys_compare_equal() {
        let b = board();
        let ord = FrontierOrdering::new(&b, Hex::new(4, 0));
        // Mirror-image routes: same cost, same distance, same move count.
        let left = Path::new(Hex::new(4, 4), Facing::N)
            .append(Move::TurnLeft, &b, &TestUnit)
            .append(Move::Forward, &b, &TestUnit);
        let right = Path::new(Hex::new(4, 4), Facing::N)
            .append(Move::TurnRight, &b, &TestUnit)
            .append(Move::Forward, &b, &TestUnit);
        assert_ne!(left.cell(), right.cell());
        assert_eq!(ord.score(&left), 7);
        assert_eq!(ord.key(&left).cmp(&ord.key(&right)), Ordering::Equal);
    }
}
