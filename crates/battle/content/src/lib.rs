//! Data-driven combat content and loaders.
//!
//! This crate reads the files that parameterise a battle:
//! - Combat tables (TOML): formula variants and per-city caps
//! - Scenarios (RON): two unit snapshots plus a list of attack orders
//!
//! All loaders deserialize battle-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod scenario;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, ScenarioLoader, TablesLoader};

#[cfg(feature = "loaders")]
pub use scenario::Scenario;
