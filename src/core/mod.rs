//! Core lookup logic: dates, rates, caching and row formatting

pub mod cache;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use cache::RateCache;
pub use date::{Clock, DateKey, FixedClock, SystemClock, validate};
pub use error::{ErrorKind, LookupError};
pub use format::{format_row, header_row};
pub use rate::{RateProvider, RateRecord};
