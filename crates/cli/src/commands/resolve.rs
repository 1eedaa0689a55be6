//! Run a scenario file through the battle resolver.
//!
//! Orders execute in file order against the same pair of units, so later
//! orders see the losses of earlier ones. Orders the resolver rejects are
//! reported and skipped.

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_content::{Scenario, ScenarioLoader, TablesLoader};
use battle_core::{BattleUnit, VictoryType};
use battle_runtime::{BattleReport, BattleResolver};
use clap::Parser;
use console::style;
use serde::Serialize;

use crate::config::WarsimConfig;

/// Resolve every order in a scenario
#[derive(Parser)]
pub struct Resolve {
    /// Scenario file (RON)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Combat tables (TOML); takes precedence over the scenario and WARSIM_TABLES
    #[arg(short, long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Full JSON report with post-battle units
    Json,
    /// One line per order
    Summary,
}

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    scenario: &'a str,
    reports: Vec<BattleReport>,
    rejected: Vec<Rejection>,
    attacker: BattleUnit,
    defender: BattleUnit,
}

#[derive(Debug, Serialize)]
struct Rejection {
    order: usize,
    error: String,
}

impl Resolve {
    pub fn execute(self, config: &WarsimConfig) -> Result<()> {
        let scenario = ScenarioLoader::load(&self.scenario)?;
        let tables = match &self.tables {
            Some(path) => TablesLoader::load(path)?,
            None => scenario.tables_or(config.tables()?),
        };

        tracing::info!(
            "Resolving {} order(s) from {}",
            scenario.orders.len(),
            self.scenario.display()
        );

        let outcome = run(&scenario, BattleResolver::new(tables));

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&outcome)
                    .context("Failed to serialize battle report")?;
                println!("{}", json);
            }
            OutputFormat::Summary => print_summary(&outcome),
        }

        Ok(())
    }
}

fn run(scenario: &Scenario, resolver: BattleResolver) -> Outcome<'_> {
    let mut attacker = scenario.attacker;
    let mut defender = scenario.defender;
    let mut reports = Vec::new();
    let mut rejected = Vec::new();

    for (index, order) in scenario.orders.iter().enumerate() {
        match resolver.execute(&mut attacker, &mut defender, order) {
            Ok(report) => reports.push(report),
            Err(err) => {
                tracing::warn!("Order {} ({}) skipped: {}", index, order.kind(), err);
                rejected.push(Rejection {
                    order: index,
                    error: err.to_string(),
                });
            }
        }
    }

    Outcome {
        scenario: &scenario.name,
        reports,
        rejected,
        attacker,
        defender,
    }
}

fn print_summary(outcome: &Outcome<'_>) {
    if !outcome.scenario.is_empty() {
        println!("{}", style(outcome.scenario).bold());
    }

    for report in &outcome.reports {
        let label = match report.victory_type() {
            VictoryType::UtterFailure => style(report.label).red(),
            VictoryType::PyrrhicVictory => style(report.label).yellow(),
            VictoryType::ModerateSuccess => style(report.label).cyan(),
            VictoryType::ImmenseTriumph => style(report.label).green(),
        };
        println!(
            "  {:<7} {} (roll {:.2}) loot {:.2}, infra {:.2}",
            report.order.kind().to_string(),
            label,
            report.result.roll,
            report.result.loot,
            report.result.infra_destroyed
        );
    }

    for rejection in &outcome.rejected {
        println!(
            "  {} order {}: {}",
            style("rejected").dim(),
            rejection.order,
            rejection.error
        );
    }

    println!(
        "  attacker: {} soldiers, {} tanks, {} aircraft, {} ships, {} AP",
        outcome.attacker.soldiers,
        outcome.attacker.tanks,
        outcome.attacker.aircraft,
        outcome.attacker.ships,
        outcome.attacker.action_points
    );
    println!(
        "  defender: {} soldiers, {} tanks, {} aircraft, {} ships, infra {:.2}",
        outcome.defender.soldiers,
        outcome.defender.tanks,
        outcome.defender.aircraft,
        outcome.defender.ships,
        outcome.defender.avg_infra
    );
}
