//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for battle scenarios from RON files.
///
/// ```ron
/// (
///     name: "border skirmish",
///     attacker: (soldiers: 20000, tanks: 500, aircraft: 60, action_points: 12),
///     defender: (soldiers: 8000, tanks: 100, money: 2000000.0, cities: 5, avg_infra: 1000.0),
///     orders: [
///         ground((soldiers: 20000, tanks: 500, use_munitions: true)),
///         air((aircraft: 60, target: infra)),
///     ],
/// )
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Both unit snapshots are validated before the scenario is returned.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        scenario
            .attacker
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid attacker: {}", e))?;
        scenario
            .defender
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid defender: {}", e))?;

        Ok(scenario)
    }
}
