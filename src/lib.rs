//! Exact "is this the nuts" counting for Omaha.
//!
//! A constant-time 5-card evaluator feeds an exhaustive search over every
//! rival holding and every runout still to come. See [`nuts::Scenario`]
//! for the query and [`nuts::Table`] for a whole table at once.

pub mod cards;
pub mod error;
pub mod nuts;

pub use cards::evaluate;
pub use error::NutsError;
pub use nuts::nuts_at_flop;
pub use nuts::nuts_at_river;
pub use nuts::nuts_at_turn;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME
// ============================================================================
/// Initialize logging to the terminal at info and to logs/ at debug.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
