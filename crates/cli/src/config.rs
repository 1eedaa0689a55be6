//! Environment configuration for `warsim`.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use battle_content::TablesLoader;
use battle_core::CombatTables;

/// Settings read from the environment.
#[derive(Clone, Debug, Default)]
pub struct WarsimConfig {
    /// Combat tables used when neither the command line nor the scenario
    /// provides any.
    pub tables_path: Option<PathBuf>,
    /// Seed for Monte Carlo sampling.
    pub seed: Option<u64>,
}

impl WarsimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WARSIM_TABLES` - Path to a combat tables TOML file (default: built-in tables)
    /// - `WARSIM_SEED` - Monte Carlo seed (default: random per run)
    pub fn from_env() -> Self {
        Self {
            tables_path: env::var_os("WARSIM_TABLES").map(PathBuf::from),
            seed: read_env::<u64>("WARSIM_SEED"),
        }
    }

    /// Tables from `WARSIM_TABLES`, or the built-in defaults.
    pub fn tables(&self) -> Result<CombatTables> {
        match &self.tables_path {
            Some(path) => TablesLoader::load(path),
            None => Ok(CombatTables::default()),
        }
    }

    /// Explicit seed, else the configured one, else a fresh random seed.
    pub fn seed_or_random(&self, explicit: Option<u64>) -> u64 {
        explicit
            .or(self.seed)
            .unwrap_or_else(rand::random::<u64>)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
