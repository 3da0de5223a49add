use crate::path::Move::{Forward, TurnLeft, TurnRight};
use crate::path::{Move, Path};
use crate::traits::{HexBoard, MovementProfile};

/// Turns applied before the forward move of each child, one per resulting
/// facing. The about-face is generated once, turning right.
pub const TURN_SEQUENCES: [&[Move]; 6] = [
    &[TurnLeft],
    &[TurnLeft, TurnLeft],
    &[],
    &[TurnRight],
    &[TurnRight, TurnRight],
    &[TurnRight, TurnRight, TurnRight],
];

/// Produce the one-step continuations of `parent`: turn to each of the six
/// facings and move forward once.
///
/// Children whose target lies off the board are not materialized; the
/// remaining ones still have to pass the dominance filter.
pub fn expand<B, M>(parent: &Path, board: &B, unit: &M) -> Vec<Path>
where
    B: HexBoard + ?Sized,
    M: MovementProfile<B> + ?Sized,
{
    let mut children = Vec::with_capacity(TURN_SEQUENCES.len());
    for turns in TURN_SEQUENCES {
        let facing = turns.iter().fold(parent.facing(), |f, mv| match mv {
            TurnLeft => f.turn_left(),
            TurnRight => f.turn_right(),
            Forward => f,
        });
        if !board.contains(parent.cell().neighbor(facing)) {
            continue;
        }
        let mut child = parent.clone();
        for &mv in turns.iter() {
            child = child.append(mv, board, unit);
        }
        children.push(child.append(Forward, board, unit));
    }
    children
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::testing::{TestBoard, TestUnit};
    use hexdozer_core::{Facing, Hex, HexRange};

    #[test]
    fn interior_cell_yields_all_six_neighbors() {
        let b = TestBoard::new(HexRange::with_size(5, 5));
        let parent = Path::new(Hex::new(2, 2), Facing::SE);
        let children = expand(&parent, &b, &TestUnit);
        assert_eq!(children.len(), 6);

        let cells: HashSet<Hex> = children.iter().map(Path::cell).collect();
        let expected: HashSet<Hex> = Hex::new(2, 2).neighbors().into_iter().collect();
        assert_eq!(cells, expected);

        let facings: HashSet<Facing> = children.iter().map(Path::facing).collect();
        assert_eq!(facings.len(), 6);
    }

    #[test]
    fn children_follow_turn_order() {
        let b = TestBoard::new(HexRange::with_size(5, 5));
        let parent = Path::new(Hex::new(2, 2), Facing::N);
        let facings: Vec<Facing> = expand(&parent, &b, &TestUnit)
            .iter()
            .map(Path::facing)
            .collect();
        assert_eq!(
            facings,
            vec![
                Facing::NW,
                Facing::SW,
                Facing::N,
                Facing::NE,
                Facing::SE,
                Facing::S
            ]
        );
    }

    #[test]
    fn every_child_moves_exactly_once() {
        let b = TestBoard::new(HexRange::with_size(5, 5));
        let parent = Path::new(Hex::new(2, 2), Facing::SW);
        for child in expand(&parent, &b, &TestUnit) {
            assert_eq!(child.hexes_moved(), 1);
            assert_eq!(child.moves().last(), Some(&Move::Forward));
            assert!(child.len() <= 4);
        }
    }

    #[test]
    fn corner_skips_off_board_targets() {
        let b = TestBoard::new(HexRange::with_size(5, 5));
        let parent = Path::new(Hex::new(0, 0), Facing::N);
        let children = expand(&parent, &b, &TestUnit);
        // Only SE and S stay on the board from the top-left corner.
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| b.range.contains(c.cell())));
    }

    #[test]
    fn parent_is_not_modified() {
        let b = TestBoard::new(HexRange::with_size(5, 5));
        let parent = Path::new(Hex::new(2, 2), Facing::N);
        let _ = expand(&parent, &b, &TestUnit);
        assert!(parent.is_empty());
        assert_eq!(parent.facing(), Facing::N);
    }

    #[test]
    fn each_child_steps_along_its_final_facing() {
        let b = TestBoard::new(HexRange::with_size(5, 5));
        for facing in Facing::ALL {
            let parent = Path::new(Hex::new(2, 2), facing);
            for child in expand(&parent, &b, &TestUnit) {
                assert_eq!(parent.cell().neighbor(child.facing()), child.cell());
                let turns = child.len() - 1;
                assert_eq!(usize::from(facing.turns_to(child.facing())), turns.min(6 - turns));
            }
        }
    }
}
