pub mod date;
pub mod prune;

pub use date::*;
pub use prune::*;
