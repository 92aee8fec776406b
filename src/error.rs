use crate::cards::Card;

/// Everything that can go wrong between a card token and a nuts tally.
///
/// None of these are transient. A query either produces an exact
/// tally or fails with one of these, and retrying the same inputs
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NutsError {
    #[error("invalid card: {0}")]
    InvalidCard(String),
    /// prime product with no table entry, i.e. a 5-card group that
    /// cannot be dealt from one deck
    #[error("impossible hand: prime product {0} not in lookup table")]
    ImpossibleHand(u32),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("board must hold 3, 4 or 5 cards, got {0}")]
    BoardSize(usize),
    #[error("omaha hole must hold exactly 4 cards, got {0}")]
    HoleSize(usize),
}
