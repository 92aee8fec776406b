use super::scenario::Scenario;
use super::tally::Tally;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Street;
use crate::error::NutsError;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every seat whose cards we can see, around one shared board.
///
/// Each player is judged against the cards nobody at the table has shown,
/// so everyone else's known cards are discards from their point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub community: Vec<Card>,
    pub players: BTreeMap<String, Vec<Card>>,
}

/// one player's line in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub tally: Tally,
    pub verdict: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub players: BTreeMap<String, Seat>,
}

impl Table {
    pub fn new(community: Vec<Card>) -> Self {
        Self {
            community,
            players: BTreeMap::new(),
        }
    }

    pub fn sit(&mut self, name: impl Into<String>, cards: Vec<Card>) {
        self.players.insert(name.into(), cards);
    }

    /// A verdict for every seat holding exactly four cards.
    ///
    /// A board that isn't a flop, turn or river yields an empty report
    /// rather than an error, as does a table where nobody shows four cards.
    pub fn report(&self) -> Result<Report, NutsError> {
        if Street::try_from(self.community.len()).is_err() {
            log::debug!("no report for a {}-card board", self.community.len());
            return Ok(Report::default());
        }
        let mut report = Report::default();
        for (name, hole) in self.players.iter() {
            if hole.len() != Hole::SIZE {
                log::debug!("skipping {} with {} cards", name, hole.len());
                continue;
            }
            let discard = self.discard(name);
            let scenario = Scenario::new(&self.community, hole, &discard)?;
            let tally = scenario.tally()?;
            let verdict = verdict(scenario.street(), tally);
            log::info!("{:<12} {}", name, verdict);
            report.players.insert(name.clone(), Seat { tally, verdict });
        }
        Ok(report)
    }

    /// everybody else's cards
    fn discard(&self, name: &str) -> Vec<Card> {
        self.players
            .iter()
            .filter(|(other, _)| other.as_str() != name)
            .flat_map(|(_, cards)| cards.iter().copied())
            .collect()
    }
}

fn verdict(street: Street, tally: Tally) -> String {
    match street {
        Street::Rive if tally.is_nuts() => format!("[{}] THE NUTS! :)", street),
        Street::Rive => format!("[{}] Not the nuts :(", street),
        _ => format!("[{}] River nuts = {}%", street, tally.percentage()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(community: &str) -> Table {
        let mut table = Table::new(Card::parse(community).unwrap());
        table.sit("alice", Card::parse("As Ah 2s 2d").unwrap());
        table.sit("bob", Card::parse("Kc Kh 8s 8d").unwrap());
        table
    }

    #[test]
    fn river_verdicts() {
        let report = table("2c 7d 9h Ks Ac").report().unwrap();
        assert_eq!(report.players.len(), 2);
        for seat in report.players.values() {
            assert_eq!(seat.tally, Tally { scenarios: 1, nuts: 1 });
            assert_eq!(seat.verdict, "[river] THE NUTS! :)");
        }
    }

    #[test]
    fn river_not_the_nuts() {
        let mut table = Table::new(Card::parse("2h 7h 9h Kd 3c").unwrap());
        table.sit("carol", Card::parse("As Ad Ac 4s").unwrap());
        let report = table.report().unwrap();
        assert_eq!(report.players["carol"].verdict, "[river] Not the nuts :(");
    }

    #[test]
    fn turn_verdicts_use_other_hands_as_discards() {
        let report = table("2c 7d 9h Ks").report().unwrap();
        let alice = &report.players["alice"];
        let bob = &report.players["bob"];
        assert_eq!(alice.tally, Tally { scenarios: 40, nuts: 3 });
        assert_eq!(bob.tally, Tally { scenarios: 40, nuts: 12 });
        assert_eq!(alice.verdict, "[turn] River nuts = 7.5%");
        assert_eq!(bob.verdict, "[turn] River nuts = 30%");
    }

    #[test]
    fn skips_incomplete_hands() {
        let mut table = table("2c 7d 9h Ks Ac");
        table.sit("dave", Card::parse("Qd Jd").unwrap());
        let report = table.report().unwrap();
        assert_eq!(report.players.len(), 2);
        assert!(!report.players.contains_key("dave"));
    }

    #[test]
    fn empty_report_without_a_board() {
        assert_eq!(table("").report().unwrap(), Report::default());
        assert_eq!(table("2c 7d").report().unwrap(), Report::default());
    }

    #[test]
    fn shared_cards_are_an_error() {
        let mut table = table("2c 7d 9h Ks Ac");
        table.sit("eve", Card::parse("As 3c 4c 5c").unwrap());
        let spade = Card::try_from("As").unwrap();
        assert_eq!(table.report(), Err(NutsError::DuplicateCard(spade)));
    }
}
