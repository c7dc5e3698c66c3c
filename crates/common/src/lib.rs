//! Common utilities and types shared across deploypick crates.

pub mod error;
pub mod timestamp;
pub mod units;

pub use error::{Error, Result};
pub use timestamp::Timestamp;
