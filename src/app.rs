//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads settings and installs logging
//! - runs the requested pipeline
//! - prints reports/plots and writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, RasterArgs, ScanArgs, SimulateArgs};
use crate::config::Settings;
use crate::domain::{Comparison, EvalConfig, ScanConfig, SimulationConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `spk` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    let settings = Settings::from_env()?;
    crate::logging::init_logging(&settings.log_filter)?;
    settings.apply_thread_pool()?;

    match cli.command {
        Command::Simulate(args) => handle_simulate(args),
        Command::Eval(args) => handle_eval(args),
        Command::Scan(args) => handle_scan(args),
        Command::Raster(args) => handle_raster(args),
    }
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = simulation_config_from_args(&args);
    let data = pipeline::run_simulate(&config, &args.out)?;

    let ctx = &data.context;
    let spikes = ctx.spikes().iter().filter(|v| **v > 0.0).count();
    println!(
        "Wrote {} ({} trials x {} bins, {} spikes, model {} {:?})",
        args.out.display(),
        ctx.n_trials(),
        ctx.n_bins(),
        spikes,
        data.truth.model.display_name(),
        data.truth.params
    );
    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = eval_config_from_args(&args);
    let run = pipeline::run_eval(&config)?;

    println!(
        "{}",
        crate::report::format_eval_summary(&run.evaluation, run.data.dataset.truth.as_ref())
    );
    if let Some(other) = &run.comparison {
        println!("{}", crate::report::format_comparison(&run.evaluation, other));
    }

    if config.plot {
        let times: Vec<f64> = run.evaluation.bins.iter().map(|b| b.time).collect();
        let predicted: Vec<f64> = run.evaluation.bins.iter().map(|b| b.predicted_rate).collect();
        let overlay: Option<Vec<f64>> = run
            .comparison
            .as_ref()
            .map(|other| other.bins.iter().map(|b| b.predicted_rate).collect());
        let plot = crate::plot::render_rate_plot(
            &times,
            &run.smoothed_rate,
            &predicted,
            overlay.as_deref(),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::export::write_eval_csv(path, &run.evaluation)?;
    }

    Ok(())
}

fn handle_scan(args: ScanArgs) -> Result<(), AppError> {
    let config = scan_config_from_args(&args);
    let run = pipeline::run_scan(&config)?;

    println!("{}", crate::report::format_profile(&run.profile));

    if config.plot {
        let plot = crate::plot::render_profile_plot(&run.profile, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    Ok(())
}

fn handle_raster(args: RasterArgs) -> Result<(), AppError> {
    let data = pipeline::load_data(&args.data)?;
    let raster = crate::plot::render_raster(&data.context, args.condition.as_deref(), args.width)?;
    print!("{raster}");
    Ok(())
}

pub fn simulation_config_from_args(args: &SimulateArgs) -> SimulationConfig {
    SimulationConfig {
        model: args.model.model,
        params: args.model.params.clone(),
        labels: args.model.labels(),
        window_start: args.start,
        window_end: args.end,
        bins: args.bins,
        trials: args.trials,
        seed: args.seed,
    }
}

pub fn eval_config_from_args(args: &EvalArgs) -> EvalConfig {
    EvalConfig {
        data_path: args.data.clone(),
        model: args.model.model,
        params: args.model.params.clone(),
        labels: args.model.labels(),
        condition: args.condition.clone(),
        smooth_sigma: args.smooth,
        compare: args.vs_model.map(|model| Comparison {
            model,
            params: args.vs_params.clone(),
        }),
        plot: !args.plot.no_plot,
        plot_width: args.plot.width,
        plot_height: args.plot.height,
        export: args.export.clone(),
    }
}

pub fn scan_config_from_args(args: &ScanArgs) -> ScanConfig {
    ScanConfig {
        data_path: args.data.clone(),
        model: args.model.model,
        params: args.model.params.clone(),
        labels: args.model.labels(),
        param: args.param.clone(),
        min: args.min,
        max: args.max,
        steps: args.steps,
        spacing: args.spacing,
        plot: !args.plot.no_plot,
        plot_width: args.plot.width,
        plot_height: args.plot.height,
    }
}
