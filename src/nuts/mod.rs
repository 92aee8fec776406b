pub mod engine;
pub use engine::*;

pub mod scenario;
pub use scenario::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;
