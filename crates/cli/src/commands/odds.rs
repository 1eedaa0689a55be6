//! Victory odds for a pair of army strengths.

use anyhow::{Context, Result};
use battle_core::{MonteCarloEstimator, VictoryOdds, VictoryType, roll};
use clap::Parser;
use console::style;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::WarsimConfig;

const BAR_WIDTH: usize = 30;

/// Show victory odds
#[derive(Parser)]
pub struct Odds {
    /// Defending army strength
    #[arg(short, long, value_name = "STRENGTH")]
    defending: f64,

    /// Attacking army strength
    #[arg(short, long, value_name = "STRENGTH")]
    attacking: f64,

    /// Also estimate by sampling N three-round battles
    #[arg(long, value_name = "N")]
    monte_carlo: Option<u32>,

    /// Monte Carlo seed (overrides WARSIM_SEED)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Labelled bars
    Table,
    /// JSON object
    Json,
}

#[derive(Debug, Serialize)]
struct OddsReport {
    roll: f64,
    closed_form: VictoryOdds,
    monte_carlo: Option<SampledOdds>,
}

#[derive(Debug, Serialize)]
struct SampledOdds {
    seed: u64,
    iterations: u32,
    odds: VictoryOdds,
}

impl Odds {
    pub fn execute(self, config: &WarsimConfig) -> Result<()> {
        for (name, value) in [("defending", self.defending), ("attacking", self.attacking)] {
            anyhow::ensure!(
                value.is_finite() && value >= 0.0,
                "--{} must be a finite, non-negative strength",
                name
            );
        }

        let monte_carlo = self.monte_carlo.map(|iterations| {
            let seed = config.seed_or_random(self.seed);
            let estimator = MonteCarloEstimator::new(seed).with_iterations(iterations);
            tracing::debug!("Sampling {} battles with seed {}", estimator.iterations(), seed);
            SampledOdds {
                seed,
                iterations: estimator.iterations(),
                odds: estimator.estimate(self.defending, self.attacking),
            }
        });

        let report = OddsReport {
            roll: roll(self.defending, self.attacking),
            closed_form: VictoryOdds::from_strengths(self.defending, self.attacking),
            monte_carlo,
        };

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize odds")?;
                println!("{}", json);
            }
            OutputFormat::Table => print_table(&report),
        }

        Ok(())
    }
}

fn print_table(report: &OddsReport) {
    println!("{} {:.3}", style("roll").bold(), report.roll);
    print_odds("closed form", &report.closed_form);

    if let Some(sampled) = &report.monte_carlo {
        let heading = format!(
            "monte carlo ({} trials, seed {})",
            sampled.iterations, sampled.seed
        );
        print_odds(&heading, &sampled.odds);
    }
}

fn print_odds(heading: &str, odds: &VictoryOdds) {
    println!("{}", style(heading).bold());
    let likely = odds.most_likely();
    for tier in VictoryType::iter() {
        let p = odds.get(tier);
        let line = format!("  {:<17} {:>6.1}% {}", tier.label(), p * 100.0, bar(p));
        if tier == likely {
            println!("{}", style(line).green());
        } else {
            println!("{}", line);
        }
    }
}

fn bar(probability: f64) -> String {
    let filled = (probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled)
}
