use super::card::Card;
use super::combinations::combinations;
use super::hand::Hand;
use crate::error::NutsError;

/// A player's four private Omaha cards.
///
/// Kept in input order as an array so that pairs can be drawn with
/// `Combinations` straight from the slice; the set view is `Hand::from`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 4]);

impl Hole {
    pub const SIZE: usize = 4;

    pub fn cards(&self) -> &[Card; 4] {
        &self.0
    }

    /// the six ways to use exactly two hole cards
    pub fn pairs(&self) -> impl Iterator<Item = [Card; 2]> + '_ {
        combinations::<_, 2>(&self.0)
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = NutsError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let array = <[Card; 4]>::try_from(cards).map_err(|_| NutsError::HoleSize(cards.len()))?;
        array
            .iter()
            .map(|&card| Hand::from(card))
            .try_fold(Hand::empty(), Hand::join)?;
        Ok(Self(array))
    }
}

impl TryFrom<&str> for Hole {
    type Error = NutsError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(hole.0.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        use super::deck::Deck;
        let mut deck = Deck::new();
        Self(std::array::from_fn(|_| deck.draw()))
    }
}
