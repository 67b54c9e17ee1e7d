pub mod task;
pub mod quote;

pub use task::*;
pub use quote::*;
