use super::ranking::Ranking;
use std::cmp::Ordering;

/// A 5-card hand's strength, one of 7462 equivalence classes.
///
/// Internally this is the classic hand rank, 1 for a royal flush down to
/// 7462 for 7-5-4-3-2 offsuit, and `u16::from` hands that number back out.
/// Ord is flipped so that stronger hands compare greater: `a > b` reads as
/// "a beats b", and equal ranks tie.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Strength(u16);

impl Strength {
    /// royal flush. nothing beats it
    pub const NUTS: Self = Self(1);
    /// 7-5-4-3-2 offsuit. it beats nothing
    pub const WORST: Self = Self(7462);

    pub fn ranking(&self) -> Ranking {
        Ranking::from(*self)
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// u16 isomorphism
impl From<u16> for Strength {
    fn from(rank: u16) -> Self {
        assert!((1..=7462).contains(&rank));
        Self(rank)
    }
}
impl From<Strength> for u16 {
    fn from(s: Strength) -> Self {
        s.0
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{:>5}", self.ranking(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_rank_is_stronger() {
        assert!(Strength::from(1) > Strength::from(2));
        assert!(Strength::from(7461) > Strength::WORST);
        assert_eq!(Strength::NUTS.max(Strength::from(300)), Strength::NUTS);
    }

    #[test]
    fn ties_are_equal() {
        assert_eq!(Strength::from(2468).cmp(&Strength::from(2468)), Ordering::Equal);
    }

    #[test]
    #[should_panic]
    fn zero_is_not_a_hand() {
        let _ = Strength::from(0);
    }
}
