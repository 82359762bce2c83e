//! Command helpers shared across the CLI handlers.

pub mod utils;

pub use utils::*;
