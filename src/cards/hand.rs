use super::card::Card;
use crate::error::NutsError;

/// Hand represents an unordered set of Cards, stored as the 52 LSBs of a u64.
/// Each bit is one physical card, so set algebra is a single instruction
/// and nothing here ever touches the heap.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// disjoint union. overlapping sets mean some card was dealt twice
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// disjoint union that reports the first shared card instead of panicking
    pub fn join(lhs: Self, rhs: Self) -> Result<Self, NutsError> {
        match Self(lhs.0 & rhs.0).lowest() {
            Some(card) => Err(NutsError::DuplicateCard(card)),
            None => Ok(Self(lhs.0 | rhs.0)),
        }
    }

    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn lowest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n.trailing_zeros() as u8)),
        }
    }
    /// unpack exactly N cards, lowest first, without touching the heap
    pub fn cards<const N: usize>(self) -> [Card; N] {
        assert!(self.size() == N);
        let mut cards = self;
        std::array::from_fn(|_| cards.next().expect("size checked"))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.lowest()?;
        self.remove(card);
        Some(card)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}

/// lossy: repeated cards collapse into one bit. see Hand::join for the checked path
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}

impl TryFrom<&str> for Hand {
    type Error = NutsError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s)?
            .into_iter()
            .map(Hand::from)
            .try_fold(Hand::empty(), Hand::join)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
