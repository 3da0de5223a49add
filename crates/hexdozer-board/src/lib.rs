//! Reference terrain board and unit profiles for the hexdozer planner.

pub mod map;
pub mod mapgen;
pub mod terrain;
pub mod unit;

pub use map::{HexMap, MapError};
pub use mapgen::{TerrainGen, TerrainMix};
pub use terrain::{Terrain, Tile};
pub use unit::{GroundUnit, MoveMode};
