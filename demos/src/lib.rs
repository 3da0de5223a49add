//! Shared scenario setup and rendering for the demo binaries.

use hexdozer_board::{GroundUnit, HexMap, MapError, Terrain, TerrainGen, TerrainMix, Tile};
use hexdozer_core::{Facing, Hex};
use hexdozer_paths::{Path, PlanError, Planner, SearchOutcome};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A map, a unit, and where it has to go.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub map: HexMap,
    pub unit: GroundUnit,
    pub start: Hex,
    pub facing: Facing,
    pub dest: Hex,
}

impl Scenario {
    /// A random `cols` × `rows` map crossed corner to corner by a wheeled
    /// unit that can level terrain.
    pub fn generated(seed: u64, cols: i32, rows: i32) -> Self {
        let mut mapgen = TerrainGen::new(StdRng::seed_from_u64(seed));
        let map = mapgen.generate(cols, rows, &TerrainMix::default(), 3, 2);
        info!("generated map from seed {seed}");
        Self::corner_to_corner(map)
    }

    /// Scenario over a map read with [`HexMap::parse`].
    pub fn from_text(text: &str) -> Result<Self, MapError> {
        Ok(Self::corner_to_corner(HexMap::parse(text)?))
    }

    fn corner_to_corner(mut map: HexMap) -> Self {
        let bounds = map.bounds();
        let start = bounds.min;
        let dest = Hex::new(bounds.max.q - 1, bounds.max.r - 1);
        for h in [start, dest] {
            let level = map.tile(h).map_or(0, |t| t.level);
            map.set(h, Tile::new(Terrain::Clear, level));
        }
        Self {
            map,
            unit: GroundUnit::wheeled().with_leveling().with_max_climb(2),
            start,
            facing: Facing::SE,
            dest,
        }
    }

    pub fn plan(&self, planner: &Planner) -> Result<SearchOutcome, PlanError> {
        planner.plan(&self.map, &self.unit, self.start, self.facing, self.dest)
    }
}

/// The map as text, one row per line, with the route drawn over it: `@`
/// for the start, `*` for cells driven through, `X` for cells leveled on
/// the way, `$` for the destination.
pub fn render(map: &HexMap, path: Option<&Path>) -> String {
    let cells = path.map(Path::cells).unwrap_or_default();
    let leveled = path.map(Path::cells_to_level).unwrap_or_default();
    let bounds = map.bounds();
    let mut out = String::new();
    for (h, tile) in map.iter() {
        if h.q == bounds.min.q && h.r > bounds.min.r {
            out.push('\n');
            // Shift each row by half a hex per row, so axial columns lean like the grid.
            out.extend(std::iter::repeat_n(' ', (h.r - bounds.min.r) as usize));
        } else if h.q > bounds.min.q {
            out.push(' ');
        }
        let ch = match path {
            Some(p) if h == p.start() => '@',
            Some(p) if h == p.cell() && !p.is_empty() => '$',
            _ if leveled.contains(&h) => 'X',
            _ if cells.contains(&h) => '*',
            _ => tile.terrain.symbol(),
        };
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_scenario_has_clear_endpoints() {
        let s = Scenario::generated(42, 10, 8);
        assert_eq!(s.start, Hex::new(0, 0));
        assert_eq!(s.dest, Hex::new(9, 7));
        assert_eq!(s.map.tile(s.start).map(|t| t.terrain), Some(Terrain::Clear));
        assert_eq!(s.map.tile(s.dest).map(|t| t.terrain), Some(Terrain::Clear));
    }

    #[test]
    fn render_marks_the_route() {
        let s = Scenario::from_text(". # .").unwrap();
        let outcome = s.plan(&Planner::default()).unwrap();
        assert_eq!(render(&s.map, outcome.best.as_ref()), "@ X $");
        assert_eq!(render(&s.map, None), ". # .");
    }

    #[test]
    fn render_shifts_each_row_by_half_a_hex() {
        let s = Scenario::from_text(". .\n. .\n. .").unwrap();
        assert_eq!(render(&s.map, None), ". .\n . .\n  . .");
    }
}
