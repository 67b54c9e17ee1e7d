pub mod commands;
pub mod error;
pub mod output;
pub mod session;
pub mod setup;

pub use commands::*;
pub use error::*;
pub use output::*;
pub use session::*;
pub use setup::*;
