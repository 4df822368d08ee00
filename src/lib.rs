// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod player;
pub mod presets;
pub mod ranking;
pub mod selection;
pub mod valuation;
