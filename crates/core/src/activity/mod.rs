//! Transaction classification for the cash-flow statement.

pub mod classifier;

pub use classifier::{ActivityCategory, classify};
