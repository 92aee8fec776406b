use super::strength::Strength;
use std::ops::RangeInclusive;

/// A poker hand's category.
///
/// Each category owns a contiguous band of the 7462 equivalence classes,
/// so the category of any Strength is a range check. Variants are ordered
/// weakest to strongest.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK,
    StraightFlush,
}

impl Ranking {
    pub const fn all() -> [Self; 9] {
        [
            Ranking::StraightFlush,
            Ranking::FourOAK,
            Ranking::FullHouse,
            Ranking::Flush,
            Ranking::Straight,
            Ranking::ThreeOAK,
            Ranking::TwoPair,
            Ranking::OnePair,
            Ranking::HighCard,
        ]
    }

    /// the band of hand ranks this category covers, best first
    pub const fn range(&self) -> RangeInclusive<u16> {
        match self {
            Ranking::StraightFlush => 1..=10,
            Ranking::FourOAK => 11..=166,
            Ranking::FullHouse => 167..=322,
            Ranking::Flush => 323..=1599,
            Ranking::Straight => 1600..=1609,
            Ranking::ThreeOAK => 1610..=2467,
            Ranking::TwoPair => 2468..=3325,
            Ranking::OnePair => 3326..=6185,
            Ranking::HighCard => 6186..=7462,
        }
    }

    /// number of distinct equivalence classes in this category
    pub fn classes(&self) -> usize {
        self.range().len()
    }
}

impl From<Strength> for Ranking {
    fn from(strength: Strength) -> Self {
        let rank = u16::from(strength);
        Self::all()
            .into_iter()
            .find(|ranking| ranking.range().contains(&rank))
            .expect("strength within 1..=7462")
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
