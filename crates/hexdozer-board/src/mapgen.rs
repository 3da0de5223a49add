//! Random terrain generation.
//!
//! [`TerrainGen`] scatters terrain features over a [`HexMap`] and raises
//! hills. All randomness comes from the caller's RNG, so a seeded RNG gives
//! a reproducible map.

use hexdozer_core::Hex;
use log::debug;
use rand::{Rng, RngExt};

use crate::map::HexMap;
use crate::terrain::Terrain;

/// Probability of each feature per hex. Whatever is left over stays clear.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainMix {
    pub rough: f64,
    pub woods: f64,
    pub heavy_woods: f64,
    pub rubble: f64,
    pub building: f64,
    pub water: f64,
}

impl Default for TerrainMix {
    fn default() -> Self {
        Self {
            rough: 0.08,
            woods: 0.15,
            heavy_woods: 0.05,
            rubble: 0.03,
            building: 0.06,
            water: 0.04,
        }
    }
}

impl TerrainMix {
    /// No features at all.
    pub const CLEAR: Self = Self {
        rough: 0.0,
        woods: 0.0,
        heavy_woods: 0.0,
        rubble: 0.0,
        building: 0.0,
        water: 0.0,
    };

    fn pick(&self, roll: f64) -> Terrain {
        let table = [
            (self.rough, Terrain::Rough),
            (self.woods, Terrain::Woods),
            (self.heavy_woods, Terrain::HeavyWoods),
            (self.rubble, Terrain::Rubble),
            (self.building, Terrain::Building),
            (self.water, Terrain::Water),
        ];
        let mut acc = 0.0;
        for (p, terrain) in table {
            acc += p;
            if roll < acc {
                return terrain;
            }
        }
        Terrain::Clear
    }
}

/// Terrain generator driven by `rng`.
pub struct TerrainGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> TerrainGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A fresh `cols` × `rows` map with hills and scattered features.
    pub fn generate(&mut self, cols: i32, rows: i32, mix: &TerrainMix, peaks: usize, height: i32) -> HexMap {
        let mut map = HexMap::new(cols, rows);
        self.hills(&mut map, peaks, height);
        let features = self.scatter(&mut map, mix);
        debug!("generated {cols}x{rows} map: {features} features, {peaks} peaks");
        map
    }

    /// Overwrite the terrain of every hex with a draw from `mix`.
    ///
    /// Returns the number of hexes that did not end up clear.
    pub fn scatter(&mut self, map: &mut HexMap, mix: &TerrainMix) -> usize {
        let cells: Vec<Hex> = map.bounds().iter().collect();
        let mut count = 0;
        for h in cells {
            let roll: f64 = self.rng.random();
            let terrain = mix.pick(roll);
            if terrain != Terrain::Clear {
                count += 1;
            }
            map.set_terrain(h, terrain);
        }
        count
    }

    /// Raise `peaks` cone-shaped hills of the given `height` at random hexes.
    ///
    /// A hex at distance `d` from a peak is raised to at least
    /// `height - d`. Levels never go down.
    pub fn hills(&mut self, map: &mut HexMap, peaks: usize, height: i32) {
        let bounds = map.bounds();
        if bounds.is_empty() || height <= 0 {
            return;
        }
        for _ in 0..peaks {
            let peak = Hex::new(
                bounds.min.q + self.rng.random_range(0..bounds.cols()),
                bounds.min.r + self.rng.random_range(0..bounds.rows()),
            );
            let raised: Vec<(Hex, i32)> = map
                .iter()
                .filter_map(|(h, tile)| {
                    let level = height - h.distance(peak);
                    (level > tile.level).then_some((h, level))
                })
                .collect();
            for (h, level) in raised {
                map.set_level(h, level);
            }
        }
    }
}
