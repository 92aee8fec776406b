use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::Hole;
use crate::cards::Strength;
use crate::cards::evaluate;
use crate::error::NutsError;

/// three from the board, two from the hand
fn assemble([a, b, c]: [Card; 3], [d, e]: [Card; 2]) -> [Card; 5] {
    [a, b, c, d, e]
}

/// The best Omaha hand this hole makes on this board.
///
/// Exactly two hole cards and exactly three community cards, so 60 hands
/// on the river, 24 on the turn, 6 on the flop.
pub fn best(board: &Board, hole: &Hole) -> Result<Strength, NutsError> {
    board
        .triples()
        .flat_map(|triple| hole.pairs().map(move |pair| assemble(triple, pair)))
        .try_fold(Strength::WORST, |best, cards| {
            evaluate(cards).map(|strength| best.max(strength))
        })
}

/// Could any unseen pair of cards make a strictly stronger hand on this board?
///
/// Rivals draw their two cards from everything that is neither on the board
/// nor excluded. Stops at the first stronger hand. Equal strength is a tie,
/// and a tie does not beat us.
pub fn beatable(board: &Board, excluded: Hand, strength: Strength) -> Result<bool, NutsError> {
    if strength == Strength::NUTS {
        return Ok(false);
    }
    let dead = Hand::join(Hand::from(board), excluded)?;
    if Deck::remaining(dead).size() < 2 {
        return Ok(false);
    }
    for triple in board.triples() {
        for rival in HandIterator::from((2, dead)) {
            if evaluate(assemble(triple, rival.cards::<2>()))? > strength {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Ranking;

    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }
    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }

    #[test]
    fn best_uses_two_and_three() {
        // two hearts from the hole and three from the board
        let strength = best(&board("2h 7h 9h Kd 3c"), &hole("Ah Qh 5c 5d")).unwrap();
        assert_eq!(u16::from(strength), 561);
        assert_eq!(strength.ranking(), Ranking::Flush);
        // quads in the hole count for nothing more than a pair
        let strength = best(&board("2c 7d 9h"), &hole("As Ah Ad Ac")).unwrap();
        assert_eq!(strength.ranking(), Ranking::OnePair);
        // a single suited hole card never makes a flush
        let strength = best(&board("2h 7h 9h Kh 3h"), &hole("Ah 5c 5d 6s")).unwrap();
        assert_ne!(strength.ranking(), Ranking::Flush);
    }

    #[test]
    fn best_is_monotone_in_board() {
        let flop = best(&board("As 7d 2c"), &hole("Ah Ad Kc Qc")).unwrap();
        let turn = best(&board("As 7d 2c 7s"), &hole("Ah Ad Kc Qc")).unwrap();
        assert!(turn >= flop);
        assert_eq!(flop.ranking(), Ranking::ThreeOAK);
        assert_eq!(turn.ranking(), Ranking::FullHouse);
    }

    #[test]
    fn nothing_beats_a_royal() {
        let excluded = Hand::try_from("Jh Th 4s 5s").unwrap();
        assert!(!beatable(&board("Ah Kh Qh 2c 3d"), excluded, Strength::NUTS).unwrap());
    }

    #[test]
    fn flush_board_beats_pocket_aces() {
        let river = board("2h 7h 9h Kd 3c");
        let hole = hole("As Ad Ac 4s");
        let strength = best(&river, &hole).unwrap();
        assert!(beatable(&river, Hand::from(hole), strength).unwrap());
    }

    #[test]
    fn ties_do_not_beat() {
        // broadway on a rainbow board: anyone holding AK ties, nobody wins
        let river = board("Qs Jd Tc 2h 3s");
        let hole = hole("Ac Kd 8h 8s");
        let strength = best(&river, &hole).unwrap();
        assert_eq!(u16::from(strength), 1600);
        assert!(!beatable(&river, Hand::from(hole), strength).unwrap());
    }

    #[test]
    fn excluded_cards_are_not_dealt() {
        // top set on an unpaired rainbow board, rivals can't hold our aces
        let river = board("2c 7d 9h Ks Ac");
        let hole = hole("As Ah 2s 2d");
        let strength = best(&river, &hole).unwrap();
        assert!(!beatable(&river, Hand::from(hole), strength).unwrap());
        let overlap = Hand::try_from("2c").unwrap();
        assert!(matches!(
            beatable(&river, overlap, strength),
            Err(NutsError::DuplicateCard(_))
        ));
    }
}
