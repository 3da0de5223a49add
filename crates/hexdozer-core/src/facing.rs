//! The six discrete orientations a unit can point in.

use std::fmt;

/// A hex facing. `N` is zero and facings advance clockwise.
///
/// Turning right advances the facing by one step, turning left retreats it
/// by one step, both wrapping around after six.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    #[default]
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl Facing {
    /// All facings in clockwise order starting from north.
    pub const ALL: [Facing; 6] = [
        Facing::N,
        Facing::NE,
        Facing::SE,
        Facing::S,
        Facing::SW,
        Facing::NW,
    ];

    /// Facing for an arbitrary index, reduced modulo six.
    #[inline]
    pub const fn from_index(i: i32) -> Self {
        Self::ALL[i.rem_euclid(6) as usize]
    }

    /// Index of this facing in `0..6`.
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// One 60° step clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// One 60° step counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() - 1)
    }

    /// The facing pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotate by `steps` (positive is clockwise).
    #[inline]
    pub const fn rotate(self, steps: i32) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// Minimum number of single turns needed to go from `self` to `other`.
    ///
    /// Always in `0..=3`.
    #[inline]
    pub const fn turns_to(self, other: Facing) -> u8 {
        let d = (other.index() - self.index()).rem_euclid(6);
        if d > 3 { (6 - d) as u8 } else { d as u8 }
    }

    /// Axial `(dq, dr)` offset of the neighbouring cell in this direction
    /// (flat-top orientation).
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Facing::N => (0, -1),
            Facing::NE => (1, -1),
            Facing::SE => (1, 0),
            Facing::S => (0, 1),
            Facing::SW => (-1, 1),
            Facing::NW => (-1, 0),
        }
    }

    /// Bearing of this facing in degrees, clockwise from north.
    #[inline]
    pub const fn degrees(self) -> i32 {
        self.index() * 60
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Facing::N => "N",
            Facing::NE => "NE",
            Facing::SE => "SE",
            Facing::S => "S",
            Facing::SW => "SW",
            Facing::NW => "NW",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_wraps() {
        assert_eq!(Facing::N.turn_left(), Facing::NW);
        assert_eq!(Facing::NW.turn_right(), Facing::N);
        assert_eq!(Facing::SE.turn_right(), Facing::S);
        assert_eq!(Facing::from_index(-1), Facing::NW);
        assert_eq!(Facing::from_index(13), Facing::NE);
    }

    #[test]
    fn opposite_is_three_turns() {
        for f in Facing::ALL {
            assert_eq!(f.opposite(), f.rotate(3));
            assert_eq!(f.opposite(), f.rotate(-3));
            assert_eq!(f.turns_to(f.opposite()), 3);
        }
    }

    #[test]
    fn turns_to_takes_shorter_side() {
        assert_eq!(Facing::N.turns_to(Facing::N), 0);
        assert_eq!(Facing::N.turns_to(Facing::NE), 1);
        assert_eq!(Facing::N.turns_to(Facing::NW), 1);
        assert_eq!(Facing::N.turns_to(Facing::SW), 2);
        assert_eq!(Facing::SW.turns_to(Facing::N), 2);
    }

    #[test]
    fn offsets_are_distinct_and_opposed() {
        for f in Facing::ALL {
            let (dq, dr) = f.offset();
            let (oq, or) = f.opposite().offset();
            assert_eq!((dq + oq, dr + or), (0, 0), "{f} not opposed");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn facing_round_trip() {
        let json = serde_json::to_string(&Facing::SW).unwrap();
        let back: Facing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Facing::SW);
    }
}
