//! Omaha Nuts Binary
//!
//! Answers "am I the nuts" for one hand, or for every visible hand at a table.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use omaha_nuts::cards::Card;
use omaha_nuts::nuts::Report;
use omaha_nuts::nuts::Scenario;
use omaha_nuts::nuts::Table;
use omaha_nuts::nuts::Tally;

#[derive(Parser)]
#[command(author, version, about = "Exact Omaha nuts counting", long_about = None)]
struct Args {
    /// print results as json
    #[arg(long, global = true)]
    json: bool,
    /// size of the worker pool, all cores by default
    #[arg(long, global = true)]
    threads: Option<usize>,
    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand)]
enum Query {
    #[command(about = "Is this hand the nuts on a complete board", alias = "r")]
    River {
        #[command(flatten)]
        seat: Seat,
    },
    #[command(about = "How often is this hand the nuts after the river", alias = "t")]
    Turn {
        #[command(flatten)]
        seat: Seat,
    },
    #[command(about = "How often is this hand the nuts after turn and river", alias = "f")]
    Flop {
        #[command(flatten)]
        seat: Seat,
    },
    #[command(about = "Pick the street from the size of the board", alias = "a")]
    Auto {
        #[command(flatten)]
        seat: Seat,
    },
    #[command(about = "Report on every visible hand at a table", alias = "hud")]
    Table {
        #[arg(long, required = true)]
        community: String,
        /// name=cards, e.g. alice=AsAh2s2d
        #[arg(long = "player", required = true, value_parser = player)]
        players: Vec<(String, String)>,
    },
}

#[derive(clap::Args)]
struct Seat {
    /// four hole cards, e.g. As,Ah,2s,2d
    #[arg(long, required = true)]
    hole: String,
    /// three to five board cards
    #[arg(long, required = true)]
    community: String,
    /// other cards known to be out of the deck
    #[arg(long, default_value = "")]
    discard: String,
}

impl Seat {
    fn scenario(&self) -> anyhow::Result<Scenario> {
        let hole = Card::parse(&self.hole).context("parsing hole")?;
        let community = Card::parse(&self.community).context("parsing community")?;
        let discard = Card::parse(&self.discard).context("parsing discard")?;
        Ok(Scenario::new(&community, &hole, &discard)?)
    }
}

fn player(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, cards)| (name.trim().to_string(), cards.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=cards, got {}", arg))
}

fn main() -> anyhow::Result<()> {
    omaha_nuts::log();
    let args = Args::parse();
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("building thread pool")?;
    }
    let start = std::time::Instant::now();
    match args.query {
        Query::River { seat } => show(args.json, seat.scenario()?.river()?)?,
        Query::Turn { seat } => show(args.json, seat.scenario()?.turn()?)?,
        Query::Flop { seat } => show(args.json, seat.scenario()?.flop()?)?,
        Query::Auto { seat } => show(args.json, seat.scenario()?.tally()?)?,
        Query::Table { community, players } => {
            let mut table = Table::new(Card::parse(&community).context("parsing community")?);
            for (name, cards) in players {
                let cards = Card::parse(&cards).with_context(|| format!("parsing {}", name))?;
                table.sit(name, cards);
            }
            report(args.json, table.report()?)?
        }
    }
    log::info!("finished in {:?}", start.elapsed());
    Ok(())
}

fn show(json: bool, tally: Tally) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&tally)?);
    } else if tally.is_nuts() {
        println!("{}", format!("THE NUTS {}", tally).green());
    } else if tally.nuts > 0 {
        println!("{}", format!("sometimes {}", tally).yellow());
    } else {
        println!("{}", format!("never {}", tally).red());
    }
    Ok(())
}

fn report(json: bool, report: Report) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (name, seat) in report.players.iter() {
            println!("{:<12} {}", name.bold(), seat.verdict);
        }
    }
    Ok(())
}
