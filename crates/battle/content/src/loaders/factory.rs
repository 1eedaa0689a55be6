//! Content factory for locating combat data files.

use std::path::{Path, PathBuf};

use battle_core::CombatTables;

use crate::loaders::{LoadResult, ScenarioLoader, TablesLoader};
use crate::scenario::Scenario;

/// Content factory that loads combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tables.toml
/// └── scenarios/
///     ├── border_skirmish.ron
///     └── air_raid.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat tables from `tables.toml`, or defaults when the file is absent.
    pub fn load_tables(&self) -> LoadResult<CombatTables> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            return Ok(CombatTables::default());
        }
        TablesLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let factory = ContentFactory::new("/nonexistent/warsim-data");
        assert_eq!(factory.load_tables().unwrap(), CombatTables::default());
    }
}
