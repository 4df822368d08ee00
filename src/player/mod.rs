// Player data model: records, positions, and string-code parsing.

pub mod codes;
pub mod pool;
pub mod position;
pub mod record;
