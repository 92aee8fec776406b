use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The 52 physical cards, minus whatever has already been seen.
///
/// Deck extends Hand with the ability to remove cards from itself.
/// Random selection via ::draw(), sequential enumeration via HandIterator.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub const SIZE: usize = 52;

    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    /// everything that is not dead. the unseen cards from one seat's view
    pub fn remaining(dead: Hand) -> Self {
        Self(dead.complement())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a random card from the deck
    pub fn draw(&mut self) -> Card {
        assert!(self.size() > 0);
        let i = rand::rng().random_range(0..self.size());
        let mut cards = self.0;
        let card = cards.nth(i).expect("i < size");
        self.remove(card);
        card
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            _ => Some(self.draw()),
        }
    }
}
