//! Small board and unit used by the unit tests of this crate.

use std::collections::{HashMap, HashSet};

use hexdozer_core::{Hex, HexRange};

use crate::path::Path;
use crate::traits::{HeuristicBoard, HexBoard, MovementProfile, Step};

/// Flat board: every cell costs 1 unless overridden.
#[derive(Debug, Clone)]
pub(crate) struct TestBoard {
    pub(crate) range: HexRange,
    costs: HashMap<Hex, i32>,
    walls: HashSet<Hex>,
    levelable: HashMap<Hex, i32>,
    levels: HashMap<Hex, i32>,
}

impl TestBoard {
    pub(crate) fn new(range: HexRange) -> Self {
        Self {
            range,
            costs: HashMap::new(),
            walls: HashSet::new(),
            levelable: HashMap::new(),
            levels: HashMap::new(),
        }
    }

    pub(crate) fn set_cost(&mut self, h: Hex, cost: i32) {
        self.costs.insert(h, cost);
    }

    /// Impassable and cannot be leveled.
    pub(crate) fn set_wall(&mut self, h: Hex) {
        self.walls.insert(h);
    }

    /// Impassable unless leveled for `cost`.
    pub(crate) fn set_levelable(&mut self, h: Hex, cost: i32) {
        self.levelable.insert(h, cost);
    }

    pub(crate) fn set_level(&mut self, h: Hex, level: i32) {
        self.levels.insert(h, level);
    }

    fn level(&self, h: Hex) -> i32 {
        self.levels.get(&h).copied().unwrap_or(0)
    }
}

impl HexBoard for TestBoard {
    fn contains(&self, cell: Hex) -> bool {
        self.range.contains(cell)
    }
}

impl HeuristicBoard for TestBoard {
    fn level_diff_penalty(&self, cell: Hex, dest: Hex) -> i32 {
        (self.level(dest) - self.level(cell)).abs()
    }

    fn elevation_diff_penalty(&self, _cell: Hex, _dest: Hex) -> i32 {
        0
    }
}

/// Unit that enters any open cell and levels whatever the board allows.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestUnit;

impl MovementProfile<TestBoard> for TestUnit {
    fn is_legal_step(&self, board: &TestBoard, _path: &Path, step: &Step) -> bool {
        board.contains(step.to)
            && !board.walls.contains(&step.to)
            && !board.levelable.contains_key(&step.to)
    }

    fn step_cost(&self, board: &TestBoard, step: &Step) -> i32 {
        board.costs.get(&step.to).copied().unwrap_or(1)
    }

    fn needs_leveling(&self, board: &TestBoard, cell: Hex) -> bool {
        board.levelable.contains_key(&cell)
    }

    fn leveling_cost(&self, board: &TestBoard, cell: Hex) -> i32 {
        board.levelable.get(&cell).copied().unwrap_or(0)
    }
}
