#![allow(async_fn_in_trait)]

// Re-export modules
pub mod config;
pub mod consent;
pub mod dates;
pub mod extract;
pub mod offline;
pub mod page;
pub mod record;
pub mod selectors;
pub mod walker;
pub mod webdriver;

// Re-export commonly used types for convenience
pub use record::{RecordExtras, SpecRecord};
pub use walker::{WalkError, WalkSummary};

#[cfg(test)]
mod tests;
