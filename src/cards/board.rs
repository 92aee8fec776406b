use super::card::Card;
use super::combinations::combinations;
use super::hand::Hand;
use super::street::Street;
use crate::error::NutsError;

/// The community cards, three to five of them, in deal order.
///
/// The street is derived from the card count and always agrees with it.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
    street: Street,
}

impl Board {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn street(&self) -> Street {
        self.street
    }

    /// the C(n, 3) ways to use exactly three community cards
    pub fn triples(&self) -> impl Iterator<Item = [Card; 3]> + '_ {
        combinations::<_, 3>(&self.cards)
    }

    /// deal the runout cards onto this board
    pub fn deal(&self, runout: Hand) -> Self {
        let mut cards = Vec::with_capacity(5);
        cards.extend_from_slice(&self.cards);
        cards.extend(runout);
        assert!(cards.len() <= Street::Rive.n_observed());
        let street = Street::try_from(cards.len()).expect("3..=5 cards");
        Self { cards, street }
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = NutsError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let street = Street::try_from(cards.len())?;
        cards
            .iter()
            .map(|&card| Hand::from(card))
            .try_fold(Hand::empty(), Hand::join)?;
        Ok(Self {
            cards: cards.to_vec(),
            street,
        })
    }
}

impl TryFrom<&str> for Board {
    type Error = NutsError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
