//! Command-line parsing for the firing-rate model toolkit.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ConditionLabels, GridSpacing, ModelKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "spk", version, about = "Spike-train firing-rate models: simulate, score, profile")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw synthetic spike trains from a model and write a dataset JSON.
    Simulate(SimulateArgs),
    /// Score one parameter vector against a dataset (objective + per-bin rates).
    Eval(EvalArgs),
    /// Profile the objective along one parameter with the others held fixed.
    Scan(ScanArgs),
    /// Print a spike raster of a dataset.
    Raster(RasterArgs),
}

/// Model selection shared by every subcommand that evaluates a model.
#[derive(Debug, Args, Clone)]
pub struct ModelArgs {
    /// Which model to use.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::Time)]
    pub model: ModelKind,

    /// Parameter vector, comma separated, in the model's parameter order
    /// (const: a_0 | time: a_1,ut,st,a_0 | cat-time: a_1,a_2,ut,st,a_0).
    #[arg(
        short = 'p',
        long,
        required = true,
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub params: Vec<f64>,

    /// Condition label read as `c1` by the category model.
    #[arg(long, default_value = "1")]
    pub c1: String,

    /// Condition label read as `c2` by the category model.
    #[arg(long, default_value = "2")]
    pub c2: String,
}

impl ModelArgs {
    pub fn labels(&self) -> ConditionLabels {
        ConditionLabels {
            c1: self.c1.clone(),
            c2: self.c2.clone(),
        }
    }
}

/// Terminal plot options.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Window start (inclusive), e.g. ms after stimulus onset.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start: f64,

    /// Window end (exclusive).
    #[arg(long, default_value_t = 1000.0, allow_hyphen_values = true)]
    pub end: f64,

    /// Number of time bins across the window.
    #[arg(long, default_value_t = 100)]
    pub bins: usize,

    /// Number of trials.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub trials: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output dataset JSON.
    #[arg(short = 'o', long, value_name = "JSON")]
    pub out: PathBuf,
}

#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    /// Dataset JSON (from `spk simulate` or converted upstream).
    #[arg(short = 'd', long, value_name = "JSON")]
    pub data: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Show rates for trials of this condition only.
    #[arg(long)]
    pub condition: Option<String>,

    /// Gaussian smoothing of the observed rate, in bins (0 disables).
    #[arg(long, default_value_t = 2.0)]
    pub smooth: f64,

    /// Second model to score and overlay on the plot (uses the same `--c1/--c2`).
    #[arg(long, value_enum, requires = "vs_params")]
    pub vs_model: Option<ModelKind>,

    /// Parameter vector for `--vs-model`, comma separated.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "vs_model")]
    pub vs_params: Vec<f64>,

    #[command(flatten)]
    pub plot: PlotArgs,

    /// Export per-bin results to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct ScanArgs {
    /// Dataset JSON.
    #[arg(short = 'd', long, value_name = "JSON")]
    pub data: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Name of the parameter to sweep (e.g. `ut`).
    #[arg(long = "param", value_name = "NAME")]
    pub param: String,

    /// Grid minimum (defaults to the model's bound for this parameter).
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Grid maximum (defaults to the model's bound for this parameter).
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Number of grid points.
    #[arg(long, default_value_t = 41)]
    pub steps: usize,

    /// Grid spacing.
    #[arg(long, value_enum, default_value_t = GridSpacing::Lin)]
    pub spacing: GridSpacing,

    #[command(flatten)]
    pub plot: PlotArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct RasterArgs {
    /// Dataset JSON.
    #[arg(short = 'd', long, value_name = "JSON")]
    pub data: PathBuf,

    /// Show trials of this condition only.
    #[arg(long)]
    pub condition: Option<String>,

    /// Maximum raster width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_separated_params() {
        let cli = Cli::try_parse_from([
            "spk", "eval", "-d", "x.json", "-m", "cat-time", "-p", "0.4,0.1,500,-80,0.02",
        ])
        .unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.model.model, ModelKind::CatTime);
        assert_eq!(args.model.params, vec![0.4, 0.1, 500.0, -80.0, 0.02]);
        assert_eq!(args.model.labels(), ConditionLabels::default());
        assert!(!args.plot.no_plot);
    }

    #[test]
    fn comparison_model_needs_its_params() {
        let cli = Cli::try_parse_from([
            "spk", "eval", "-d", "x.json", "-p", "0.4,500,80,0.02", "--vs-model", "cat-time",
            "--vs-params", "0.4,0.1,500,80,0.02",
        ])
        .unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.vs_model, Some(ModelKind::CatTime));
        assert_eq!(args.vs_params.len(), 5);

        assert!(
            Cli::try_parse_from(["spk", "eval", "-d", "x.json", "-p", "0.1", "--vs-model", "time"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["spk", "eval", "-d", "x.json", "-p", "0.1", "--vs-params", "0.2"])
                .is_err()
        );
    }

    #[test]
    fn params_are_required() {
        assert!(Cli::try_parse_from(["spk", "simulate", "-o", "x.json"]).is_err());
    }
}
