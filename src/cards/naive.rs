//! Slow, obviously-correct hand comparison.
//!
//! Sorts ranks by multiplicity and checks shapes directly, with no tables.
//! Only compiled for tests, where it cross-checks the lookup evaluator and
//! the nuts search.
use super::card::Card;
use super::combinations::combinations;

/// category 0 (high card) ..= 8 (straight flush), then tiebreak ranks
/// from most to least significant. Compares the way the hands do.
pub type Key = (u8, [u8; 5]);

pub fn key(cards: [Card; 5]) -> Key {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[u8::from(card.rank()) as usize] += 1;
    }
    let mut groups = (0..13u8)
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect::<Vec<(u8, u8)>>();
    groups.sort_by(|a, b| b.cmp(a));
    let mut ranks = [0u8; 5];
    for (slot, (_, rank)) in ranks.iter_mut().zip(groups.iter()) {
        *slot = *rank;
    }
    let shape = groups.iter().map(|(n, _)| *n).collect::<Vec<u8>>();
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = match ranks {
        _ if groups.len() < 5 => None,
        [12, 3, 2, 1, 0] => Some(3),
        [hi, .., lo] if hi - lo == 4 => Some(hi),
        _ => None,
    };
    let category = match (straight, flush, shape.as_slice()) {
        (Some(_), true, _) => 8,
        (_, _, [4, 1]) => 7,
        (_, _, [3, 2]) => 6,
        (None, true, _) => 5,
        (Some(_), false, _) => 4,
        (_, _, [3, 1, 1]) => 3,
        (_, _, [2, 2, 1]) => 2,
        (_, _, [2, 1, 1, 1]) => 1,
        _ => 0,
    };
    match straight {
        Some(high) => (category, [high, 0, 0, 0, 0]),
        None => (category, ranks),
    }
}

/// best key using exactly two hole cards and three board cards
pub fn omaha(board: &[Card], hole: &[Card]) -> Key {
    combinations::<_, 3>(board)
        .flat_map(|[a, b, c]| combinations::<_, 2>(hole).map(move |[d, e]| key([a, b, c, d, e])))
        .max()
        .expect("at least three board and two hole cards")
}

/// no unseen pair of cards makes a strictly better hand on a full board
pub fn nuts(board: &[Card], hole: &[Card], discard: &[Card]) -> bool {
    let ours = omaha(board, hole);
    let unseen = (0..52u8)
        .map(Card::from)
        .filter(|c| !board.contains(c) && !hole.contains(c) && !discard.contains(c))
        .collect::<Vec<Card>>();
    combinations::<_, 2>(&unseen).all(|rival| omaha(board, &rival) <= ours)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Key {
        key(<[Card; 5]>::try_from(Card::parse(s).unwrap()).unwrap())
    }

    #[test]
    fn shapes() {
        assert_eq!(hand("As Ks Qs Js Ts"), (8, [12, 0, 0, 0, 0]));
        assert_eq!(hand("Ah 2d 3c 4s 5s"), (4, [3, 0, 0, 0, 0]));
        assert_eq!(hand("9s 9h 9d 4c 4s"), (6, [7, 2, 0, 0, 0]));
        assert_eq!(hand("Ks Kh 3d 3c As"), (2, [11, 1, 12, 0, 0]));
        assert_eq!(hand("7s 5h 4d 3c 2s"), (0, [5, 3, 2, 1, 0]));
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        assert!(hand("Ah 2d 3c 4s 5s") < hand("2h 3d 4c 5s 6s"));
        assert!(hand("Ah Kd Qc Js 9s") < hand("Ah 2d 3c 4s 5s"));
    }
}
