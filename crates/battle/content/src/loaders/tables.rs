//! Combat tables loader.

use std::path::Path;

use battle_core::CombatTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tables from TOML files.
///
/// Every key is optional; missing keys keep their [`CombatTables::default`]
/// values.
///
/// ```toml
/// consumption = "tier_scaled"
/// air_losses = "standard"
/// tank_cap_per_city = 250
/// aircraft_cap_per_city = 15
/// fortify_multiplier = 1.25
/// ```
pub struct TablesLoader;

impl TablesLoader {
    /// Load combat tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse combat tables from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatTables> {
        let tables: CombatTables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        if !tables.fortify_multiplier.is_finite() || tables.fortify_multiplier < 1.0 {
            anyhow::bail!(
                "fortify_multiplier must be a finite value >= 1.0, got {}",
                tables.fortify_multiplier
            );
        }

        Ok(tables)
    }
}
