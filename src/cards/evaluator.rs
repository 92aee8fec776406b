use super::card::Card;
use super::lookup::Lookup;
use super::strength::Strength;
use crate::error::NutsError;

/// A constant-time evaluator for exactly five cards.
///
/// No comparisons, no sorting: the packed Card encoding lets three
/// table probes cover every hand.
/// 1. all five share a suit bit    -> flush table on the rank mask
/// 2. five distinct ranks          -> unique5 table on the rank mask
/// 3. anything paired              -> binary search on the prime product
///
/// Input order never matters since every step is an AND, OR or product.
pub struct Evaluator([Card; 5]);

impl From<[Card; 5]> for Evaluator {
    fn from(cards: [Card; 5]) -> Self {
        Self(cards)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Result<Strength, NutsError> {
        let lookup = Lookup::get();
        let [a, b, c, d, e] = self.0.map(u32::from);
        let ranks = ((a | b | c | d | e) >> 16) as u16;
        if a & b & c & d & e & 0xF000 != 0 {
            match lookup.flush(ranks) {
                0 => Err(NutsError::ImpossibleHand(self.product())),
                rank => Ok(Strength::from(rank)),
            }
        } else {
            match lookup.unique(ranks) {
                0 => self.paired(lookup),
                rank => Ok(Strength::from(rank)),
            }
        }
    }

    fn paired(&self, lookup: &Lookup) -> Result<Strength, NutsError> {
        let product = self.product();
        lookup
            .find(product)
            .map(|i| Strength::from(lookup.value(i)))
            .ok_or(NutsError::ImpossibleHand(product))
    }

    fn product(&self) -> u32 {
        self.0.iter().map(Card::prime).product()
    }
}

/// rank five cards. lower raw rank is stronger, see Strength
pub fn evaluate(cards: [Card; 5]) -> Result<Strength, NutsError> {
    Evaluator::from(cards).strength()
}
