use serde::Deserialize;
use serde::Serialize;

/// How many runouts were tried and in how many of them the hand was the nuts.
///
/// A river query is a single scenario. Tallies from disjoint runouts add up,
/// which is how parallel workers combine their counts.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub scenarios: usize,
    pub nuts: usize,
}

impl Tally {
    /// one runout, nuts or not
    pub fn single(nuts: bool) -> Self {
        Self {
            scenarios: 1,
            nuts: nuts as usize,
        }
    }

    /// share of runouts that are the nuts, as a percentage rounded to 2 decimals
    pub fn percentage(&self) -> f64 {
        match self.scenarios {
            0 => 0.,
            n => (10000. * self.nuts as f64 / n as f64).round() / 100.,
        }
    }

    /// unbeatable in every runout
    pub fn is_nuts(&self) -> bool {
        self.scenarios > 0 && self.nuts == self.scenarios
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        Self {
            scenarios: self.scenarios + other.scenarios,
            nuts: self.nuts + other.nuts,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.nuts, self.scenarios, self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_hundredths() {
        let tally = Tally { scenarios: 40, nuts: 3 };
        assert_eq!(tally.percentage(), 7.5);
        let tally = Tally { scenarios: 990, nuts: 26 };
        assert_eq!(tally.percentage(), 2.63);
        let tally = Tally { scenarios: 3, nuts: 1 };
        assert_eq!(tally.percentage(), 33.33);
        assert_eq!(Tally::default().percentage(), 0.);
    }

    #[test]
    fn sums_disjoint_runouts() {
        let total = [true, false, true, true]
            .into_iter()
            .map(Tally::single)
            .sum::<Tally>();
        assert_eq!(total, Tally { scenarios: 4, nuts: 3 });
        assert!(!total.is_nuts());
        assert!(Tally::single(true).is_nuts());
        assert!(!Tally::default().is_nuts());
    }

    #[test]
    fn serializes_as_plain_counts() {
        let json = serde_json::to_string(&Tally { scenarios: 44, nuts: 4 }).unwrap();
        assert_eq!(json, r#"{"scenarios":44,"nuts":4}"#);
    }
}
