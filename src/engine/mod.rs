pub mod core;
pub mod errors;
pub mod simulation;

pub use errors::*;
