//! Board ranks (rows 1–8).

use std::fmt;

/// A rank on the board; `Rank1` is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index, `None` past rank 8.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        match index {
            0 => Some(Rank::Rank1),
            1 => Some(Rank::Rank2),
            2 => Some(Rank::Rank3),
            3 => Some(Rank::Rank4),
            4 => Some(Rank::Rank5),
            5 => Some(Rank::Rank6),
            6 => Some(Rank::Rank7),
            7 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Shift by `delta` ranks, `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Rank> {
        let target = self as i8 + delta;
        if target < 0 {
            return None;
        }
        Rank::from_index(target as u8)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_index_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_index(rank.index() as u8), Some(rank));
        }
        assert_eq!(Rank::from_index(8), None);
    }

    #[test]
    fn offset_clips_at_edges() {
        assert_eq!(Rank::Rank1.offset(-1), None);
        assert_eq!(Rank::Rank8.offset(1), None);
        assert_eq!(Rank::Rank2.offset(2), Some(Rank::Rank4));
        assert_eq!(Rank::Rank7.offset(-2), Some(Rank::Rank5));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rank::Rank1), "1");
        assert_eq!(format!("{}", Rank::Rank8), "8");
    }
}
