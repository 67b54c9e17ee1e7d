// Core data models for Please
// These structs mirror the persisted config document

pub mod task;
pub mod config;
pub mod quote;

pub use task::*;
pub use config::*;
pub use quote::*;
