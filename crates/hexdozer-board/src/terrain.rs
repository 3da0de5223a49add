//! Terrain types and map tiles.

/// What covers a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Clear,
    Rough,
    Woods,
    HeavyWoods,
    Rubble,
    Building,
    Water,
}

impl Terrain {
    /// All terrain types, in map-symbol order.
    pub const ALL: [Terrain; 7] = [
        Terrain::Clear,
        Terrain::Rough,
        Terrain::Woods,
        Terrain::HeavyWoods,
        Terrain::Rubble,
        Terrain::Building,
        Terrain::Water,
    ];

    /// Base movement cost of entering the hex.
    pub const fn move_cost(self) -> i32 {
        match self {
            Terrain::Clear => 1,
            Terrain::Rough | Terrain::Woods | Terrain::Rubble => 2,
            Terrain::HeavyWoods => 3,
            Terrain::Building | Terrain::Water => 1,
        }
    }

    /// Height of the feature standing on the ground.
    pub const fn height(self) -> i32 {
        match self {
            Terrain::Woods | Terrain::HeavyWoods => 2,
            Terrain::Building => 3,
            _ => 0,
        }
    }

    /// Cost of reducing the hex to rubble, or `None` when it cannot be
    /// leveled.
    pub const fn leveling_cost(self) -> Option<i32> {
        match self {
            Terrain::Woods => Some(3),
            Terrain::HeavyWoods => Some(5),
            Terrain::Building => Some(8),
            _ => None,
        }
    }

    /// Map symbol.
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Clear => '.',
            Terrain::Rough => ',',
            Terrain::Woods => 'f',
            Terrain::HeavyWoods => 'F',
            Terrain::Rubble => ':',
            Terrain::Building => '#',
            Terrain::Water => '~',
        }
    }

    /// Terrain for a map symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == ch)
    }
}

/// One hex of a map: its terrain and ground level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub terrain: Terrain,
    pub level: i32,
}

impl Tile {
    pub const fn new(terrain: Terrain, level: i32) -> Self {
        Self { terrain, level }
    }

    /// Level of the top of whatever stands on the hex.
    #[inline]
    pub const fn top(self) -> i32 {
        self.level + self.terrain.height()
    }
}
