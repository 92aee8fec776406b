use super::engine::beatable;
use super::engine::best;
use super::tally::Tally;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::Hole;
use crate::cards::Street;
use crate::error::NutsError;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// One seat's view of an Omaha hand: the board so far, our four cards,
/// and whatever else we know is out of the deck.
///
/// Construction guarantees every physical card appears at most once
/// across all three, so the unseen deck is always well defined.
#[derive(Debug, Clone)]
pub struct Scenario {
    board: Board,
    hole: Hole,
    discard: Hand,
}

impl Scenario {
    pub fn new(community: &[Card], hole: &[Card], discard: &[Card]) -> Result<Self, NutsError> {
        let board = Board::try_from(community)?;
        let hole = Hole::try_from(hole)?;
        let discard = discard
            .iter()
            .map(|&card| Hand::from(card))
            .try_fold(Hand::empty(), Hand::join)?;
        Hand::join(Hand::from(&board), Hand::from(hole))
            .and_then(|seen| Hand::join(seen, discard))?;
        Ok(Self {
            board,
            hole,
            discard,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }

    /// cards no rival can hold: ours and the known discards
    fn excluded(&self) -> Hand {
        Hand::add(Hand::from(self.hole), self.discard)
    }
    /// cards that can't come on a later street
    fn dead(&self) -> Hand {
        Hand::add(Hand::from(&self.board), self.excluded())
    }

    /// complete board: are we the nuts right now
    pub fn river(&self) -> Result<Tally, NutsError> {
        self.require(Street::Rive)?;
        self.runouts()
    }
    /// every river card: how often do we end up the nuts
    pub fn turn(&self) -> Result<Tally, NutsError> {
        self.require(Street::Turn)?;
        self.runouts()
    }
    /// every turn and river pair: how often do we end up the nuts
    pub fn flop(&self) -> Result<Tally, NutsError> {
        self.require(Street::Flop)?;
        self.runouts()
    }
    /// whichever of the above matches the board
    pub fn tally(&self) -> Result<Tally, NutsError> {
        self.runouts()
    }

    fn require(&self, street: Street) -> Result<(), NutsError> {
        match self.street() == street {
            true => Ok(()),
            false => Err(NutsError::BoardSize(self.board.cards().len())),
        }
    }

    /// deal every remaining runout and count the ones where we hold the nuts
    fn runouts(&self) -> Result<Tally, NutsError> {
        let n = self.street().n_pending();
        let tally = match n {
            0 => self.showdown(&self.board)?,
            n if Deck::remaining(self.dead()).size() < n => Tally::default(),
            n => HandIterator::from((n, self.dead()))
                .collect::<Vec<Hand>>()
                .into_par_iter()
                .map(|runout| self.showdown(&self.board.deal(runout)))
                .try_reduce(Tally::default, |a, b| Ok(a + b))?,
        };
        log::debug!("{} {} {} {}", self.street(), self.board, self.hole, tally);
        Ok(tally)
    }

    /// a single complete board
    fn showdown(&self, board: &Board) -> Result<Tally, NutsError> {
        let strength = best(board, &self.hole)?;
        let beaten = beatable(board, self.excluded(), strength)?;
        Ok(Tally::single(!beaten))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} | {}", self.board, self.hole, self.discard)
    }
}

/// nuts on a complete five-card board, a single scenario
pub fn nuts_at_river(community: &[Card], hole: &[Card], discard: &[Card]) -> Result<Tally, NutsError> {
    Scenario::new(community, hole, discard)?.river()
}
/// nuts over every river card after a four-card board
pub fn nuts_at_turn(community: &[Card], hole: &[Card], discard: &[Card]) -> Result<Tally, NutsError> {
    Scenario::new(community, hole, discard)?.turn()
}
/// nuts over every turn and river pair after a three-card board
pub fn nuts_at_flop(community: &[Card], hole: &[Card], discard: &[Card]) -> Result<Tally, NutsError> {
    Scenario::new(community, hole, discard)?.flop()
}
