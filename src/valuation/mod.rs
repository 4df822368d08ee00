// Valuation engine: linear event weights to scalar value plus rate metrics.

pub mod batter;
pub mod pitcher;
pub mod weights;
