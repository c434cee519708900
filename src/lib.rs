pub mod adapters;
pub mod serve;

pub use rosetta_api as api;
pub use rosetta_core as core;
pub use rosetta_postgres as postgres;
