//! Terrain map: a rhombus of [`Tile`]s that the planner can search.
//!
//! Maps can be built in code or read from text with [`HexMap::parse`]. The
//! text form is a grid of whitespace-separated tokens, one row per line.
//! The first character of a token picks the terrain (see
//! [`Terrain::symbol`]) and an optional signed integer after it gives the
//! ground level:
//!
//! ```text
//! .  .  f   #2
//! .  ,  .-1 ~
//! ```

use std::fmt;

use hexdozer_core::{Hex, HexRange};
use hexdozer_paths::{HeuristicBoard, HexBoard};
use thiserror::Error;

use crate::terrain::{Terrain, Tile};

/// Errors from building a [`HexMap`] out of text or raw tiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    InconsistentSize { row: i32, expected: usize, found: usize },
    #[error("unknown terrain '{ch}' at {pos}")]
    UnknownTerrain { ch: char, pos: Hex },
    #[error("bad level in \"{token}\" at {pos}")]
    BadLevel { token: String, pos: Hex },
    #[error("{found} tiles for {expected} hexes")]
    TileCount { expected: usize, found: usize },
}

/// A rectangular (in axial coordinates) terrain map.
///
/// Holds exactly one tile per hex of its bounds, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHexMap")
)]
pub struct HexMap {
    bounds: HexRange,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHexMap {
    bounds: HexRange,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHexMap> for HexMap {
    type Error = MapError;

    fn try_from(raw: RawHexMap) -> Result<Self, MapError> {
        HexMap::from_tiles(raw.bounds, raw.tiles)
    }
}

impl HexMap {
    /// A map of `cols` × `rows` clear hexes at level 0, anchored at the
    /// origin.
    pub fn new(cols: i32, rows: i32) -> Self {
        Self::filled(HexRange::with_size(cols, rows), Tile::default())
    }

    /// A map covering `bounds` with every hex set to `tile`.
    pub fn filled(bounds: HexRange, tile: Tile) -> Self {
        Self {
            bounds,
            tiles: vec![tile; bounds.len()],
        }
    }

    /// A map covering `bounds` with `tiles` given row by row.
    pub fn from_tiles(bounds: HexRange, tiles: Vec<Tile>) -> Result<Self, MapError> {
        if tiles.len() != bounds.len() {
            return Err(MapError::TileCount {
                expected: bounds.len(),
                found: tiles.len(),
            });
        }
        Ok(Self { bounds, tiles })
    }

    #[inline]
    pub fn bounds(&self) -> HexRange {
        self.bounds
    }

    /// Tile at `h`, or `None` off the map.
    #[inline]
    pub fn tile(&self, h: Hex) -> Option<Tile> {
        self.bounds.index_of(h).and_then(|i| self.tiles.get(i).copied())
    }

    /// Replace the tile at `h`. Returns `false` if `h` is off the map.
    pub fn set(&mut self, h: Hex, tile: Tile) -> bool {
        match self.bounds.index_of(h) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Change only the terrain at `h`.
    pub fn set_terrain(&mut self, h: Hex, terrain: Terrain) -> bool {
        match self.bounds.index_of(h) {
            Some(i) => {
                self.tiles[i].terrain = terrain;
                true
            }
            None => false,
        }
    }

    /// Change only the ground level at `h`.
    pub fn set_level(&mut self, h: Hex, level: i32) -> bool {
        match self.bounds.index_of(h) {
            Some(i) => {
                self.tiles[i].level = level;
                true
            }
            None => false,
        }
    }

    /// Every hex with its tile, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Hex, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// Parse a map from its text form.
    ///
    /// Leading and trailing blank lines are ignored. Every row must hold the
    /// same number of tokens. Row `r`, token `q` becomes hex `(q, r)`.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let rows: Vec<Vec<&str>> = s
            .trim()
            .lines()
            .map(|line| line.split_whitespace().collect())
            .collect();
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(cols * rows.len());
        for (r, row) in rows.iter().enumerate() {
            let r = r as i32;
            if row.len() != cols {
                return Err(MapError::InconsistentSize {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (q, token) in row.iter().enumerate() {
                tiles.push(parse_token(token, Hex::new(q as i32, r))?);
            }
        }

        Self::from_tiles(HexRange::with_size(cols as i32, rows.len() as i32), tiles)
    }
}

fn parse_token(token: &str, pos: Hex) -> Result<Tile, MapError> {
    let mut chars = token.chars();
    let Some(ch) = chars.next() else {
        return Err(MapError::Empty);
    };
    let terrain = Terrain::from_symbol(ch).ok_or(MapError::UnknownTerrain { ch, pos })?;
    let rest = chars.as_str();
    let level = if rest.is_empty() {
        0
    } else {
        rest.parse().map_err(|_| MapError::BadLevel {
            token: token.to_string(),
            pos,
        })?
    };
    Ok(Tile::new(terrain, level))
}

impl fmt::Display for HexMap {
    /// Writes the text form accepted by [`HexMap::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.bounds.cols().max(0) as usize;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(if i % cols == 0 { "\n" } else { " " })?;
            }
            write!(f, "{}", tile.terrain.symbol())?;
            if tile.level != 0 {
                write!(f, "{}", tile.level)?;
            }
        }
        Ok(())
    }
}

impl HexBoard for HexMap {
    #[inline]
    fn contains(&self, cell: Hex) -> bool {
        self.bounds.contains(cell)
    }
}

impl HeuristicBoard for HexMap {
    fn level_diff_penalty(&self, cell: Hex, dest: Hex) -> i32 {
        match (self.tile(cell), self.tile(dest)) {
            (Some(a), Some(b)) => (a.level - b.level).abs(),
            _ => 0,
        }
    }

    fn elevation_diff_penalty(&self, cell: Hex, dest: Hex) -> i32 {
        match (self.tile(cell), self.tile(dest)) {
            (Some(a), Some(b)) => (a.top() - b.top()).abs(),
            _ => 0,
        }
    }
}
