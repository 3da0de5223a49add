//! Ground unit movement rules over a [`HexMap`].

use hexdozer_core::Hex;
use hexdozer_paths::{MovementProfile, Path, Step};

use crate::map::HexMap;
use crate::terrain::Terrain;

/// How a ground unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveMode {
    #[default]
    Tracked,
    Wheeled,
}

/// A ground unit: how it moves, how steep a step it can climb, and whether
/// it can clear terrain out of its way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundUnit {
    pub mode: MoveMode,
    /// Largest level change a single step may make, up or down.
    pub max_climb: i32,
    /// Whether the unit can reduce woods and buildings to rubble.
    pub can_level: bool,
}

impl Default for GroundUnit {
    fn default() -> Self {
        Self::tracked()
    }
}

impl GroundUnit {
    pub const fn tracked() -> Self {
        Self {
            mode: MoveMode::Tracked,
            max_climb: 1,
            can_level: false,
        }
    }

    pub const fn wheeled() -> Self {
        Self {
            mode: MoveMode::Wheeled,
            max_climb: 1,
            can_level: false,
        }
    }

    /// The same unit, able to level terrain.
    pub const fn with_leveling(mut self) -> Self {
        self.can_level = true;
        self
    }

    pub const fn with_max_climb(mut self, max_climb: i32) -> Self {
        self.max_climb = max_climb;
        self
    }

    /// Whether the unit can drive into `terrain` as it stands.
    pub fn can_enter(&self, terrain: Terrain) -> bool {
        match terrain {
            Terrain::Building | Terrain::Water => false,
            Terrain::Woods | Terrain::HeavyWoods => self.mode == MoveMode::Tracked,
            Terrain::Clear | Terrain::Rough | Terrain::Rubble => true,
        }
    }

    fn entry_cost(&self, terrain: Terrain) -> i32 {
        match (self.mode, terrain) {
            (MoveMode::Wheeled, Terrain::Rough | Terrain::Rubble) => terrain.move_cost() + 1,
            _ => terrain.move_cost(),
        }
    }
}

impl MovementProfile<HexMap> for GroundUnit {
    fn is_legal_step(&self, map: &HexMap, _path: &Path, step: &Step) -> bool {
        let (Some(from), Some(to)) = (map.tile(step.from), map.tile(step.to)) else {
            return false;
        };
        self.can_enter(to.terrain) && (to.level - from.level).abs() <= self.max_climb
    }

    /// Terrain cost of the target plus one per level climbed. A hex that has
    /// to be leveled first is entered as rubble.
    fn step_cost(&self, map: &HexMap, step: &Step) -> i32 {
        let (Some(from), Some(to)) = (map.tile(step.from), map.tile(step.to)) else {
            return 0;
        };
        let terrain = if self.needs_leveling(map, step.to) {
            Terrain::Rubble
        } else {
            to.terrain
        };
        self.entry_cost(terrain) + (to.level - from.level).max(0)
    }

    fn needs_leveling(&self, map: &HexMap, cell: Hex) -> bool {
        self.can_level
            && map
                .tile(cell)
                .is_some_and(|t| !self.can_enter(t.terrain) && t.terrain.leveling_cost().is_some())
    }

    fn leveling_cost(&self, map: &HexMap, cell: Hex) -> i32 {
        map.tile(cell)
            .and_then(|t| t.terrain.leveling_cost())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexdozer_core::Facing;

    fn step_east(q: i32) -> Step {
        Step::forward(Hex::new(q, 0), Facing::SE)
    }

    fn legal(unit: &GroundUnit, map: &HexMap, step: &Step) -> bool {
        unit.is_legal_step(map, &Path::new(step.from, step.facing), step)
    }

    #[test]
    fn wheels_cannot_enter_woods() {
        let m = HexMap::parse(". f F").unwrap();
        let tracked = GroundUnit::tracked();
        let wheeled = GroundUnit::wheeled();
        assert!(legal(&tracked, &m, &step_east(0)));
        assert!(legal(&tracked, &m, &step_east(1)));
        assert!(!legal(&wheeled, &m, &step_east(0)));
        assert_eq!(tracked.step_cost(&m, &step_east(1)), 3);
    }

    #[test]
    fn buildings_and_water_block_everyone() {
        let m = HexMap::parse(". # ~").unwrap();
        let u = GroundUnit::tracked();
        assert!(!legal(&u, &m, &step_east(0)));
        assert!(!legal(&u, &m, &step_east(1)));
    }

    #[test]
    fn climbs_are_limited() {
        let m = HexMap::parse(". .1 .3 .2").unwrap();
        let u = GroundUnit::tracked();
        assert!(legal(&u, &m, &step_east(0)));
        assert!(!legal(&u, &m, &step_east(1)));
        assert!(legal(&u.with_max_climb(2), &m, &step_east(1)));
        // Down one level.
        assert!(legal(&u, &m, &step_east(2)));
        assert_eq!(u.step_cost(&m, &step_east(0)), 2);
        assert_eq!(u.step_cost(&m, &step_east(2)), 1);
    }

    #[test]
    fn leveling_only_when_able_and_blocked() {
        let m = HexMap::parse(". # f ~").unwrap();
        let plain = GroundUnit::wheeled();
        let dozer = GroundUnit::wheeled().with_leveling();
        assert!(!plain.needs_leveling(&m, Hex::new(1, 0)));
        assert!(dozer.needs_leveling(&m, Hex::new(1, 0)));
        assert!(dozer.needs_leveling(&m, Hex::new(2, 0)));
        assert!(!dozer.needs_leveling(&m, Hex::new(3, 0)));
        assert!(!dozer.needs_leveling(&m, Hex::new(0, 0)));
        // Tracked units drive through woods, so there is nothing to level.
        assert!(!GroundUnit::tracked().with_leveling().needs_leveling(&m, Hex::new(2, 0)));
        assert_eq!(dozer.leveling_cost(&m, Hex::new(1, 0)), 8);
    }

    #[test]
    fn leveled_hex_is_entered_as_rubble() {
        let m = HexMap::parse(". #").unwrap();
        let dozer = GroundUnit::tracked().with_leveling();
        assert_eq!(dozer.step_cost(&m, &step_east(0)), 2);
        let p = Path::new(Hex::new(0, 0), Facing::SE).append(hexdozer_paths::Move::Forward, &m, &dozer);
        assert!(p.requires_leveling());
        assert_eq!(p.total_cost(), 10);
        assert_eq!(p.cells_to_level(), vec![Hex::new(1, 0)]);
    }
}
