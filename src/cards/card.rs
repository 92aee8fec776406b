use super::rank::Rank;
use super::suit::Suit;
use crate::error::NutsError;

/// A playing card packed into the 29 LSBs of a u32.
///
/// ```text
/// xxx AKQJT98765432 shdc rrrr pppppppp
///     rank presence suit rank prime
/// ```
///
/// - `p` the rank's prime, so five cards multiply into a unique rank multiset
/// - `r` the rank ordinal 0..13
/// - `shdc` exactly one suit bit, so five cards AND to nonzero iff suited
/// - one bit at `16 + rank`, so five cards OR into a 13-bit rank mask
///
/// Every (Rank, Suit) pair maps to a distinct value.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u32);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(((self.0 >> 8) & 0xF) as u8)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(((self.0 >> 12) & 0xF).trailing_zeros() as u8)
    }
    /// the low byte, ready to be multiplied into a prime product
    pub const fn prime(&self) -> u32 {
        self.0 & 0xFF
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        let prime = r.prime() as u32;
        let order = (u8::from(r) as u32) << 8;
        let suit = u32::from(s);
        let bit = 1 << (16 + u8::from(r) as u32);
        Self(prime | order | suit | bit)
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank()) * 4 + u8::from(c.suit())
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self::from((Rank::from(n / 4), Suit::from(n % 4)))
    }
}

/// u32 isomorphism
/// the packed encoding itself
/// Ts
/// xxx 0000100000000 1000 1000 00010111
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        c.0
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = NutsError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(NutsError::InvalidCard(s.to_string())),
        }
    }
}

impl Card {
    /// Parses a list of cards separated by commas and/or whitespace.
    ///
    /// Adjacent cards may also be concatenated, so `"As,Kd"`, `"As Kd"`
    /// and `"AsKd"` all parse to the same two cards. Duplicates are kept;
    /// rejecting them is the caller's business.
    pub fn parse(s: &str) -> Result<Vec<Self>, NutsError> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| match token.len() % 2 {
                0 => Ok(token),
                _ => Err(NutsError::InvalidCard(token.to_string())),
            })
            .collect::<Result<Vec<&str>, _>>()?
            .into_iter()
            .flat_map(|token| {
                token
                    .chars()
                    .collect::<Vec<_>>()
                    .chunks(2)
                    .map(|pair| pair.iter().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .map(|pair| Self::try_from(pair.as_str()))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}
