use spikefit::app::pipeline::{load_data, run_eval, run_scan, run_simulate};
use spikefit::domain::{
    Comparison, ConditionLabels, EvalConfig, GridSpacing, ModelKind, ScanConfig, SimulationConfig,
};
use spikefit::error::EXIT_CONTRACT;

const TRUTH: [f64; 4] = [0.4, 500.0, 80.0, 0.02];

fn simulation(model: ModelKind, params: &[f64]) -> SimulationConfig {
    SimulationConfig {
        model,
        params: params.to_vec(),
        labels: ConditionLabels::default(),
        window_start: 0.0,
        window_end: 1000.0,
        bins: 50,
        trials: 200,
        seed: 11,
    }
}

fn eval_config(path: &std::path::Path, model: ModelKind, params: &[f64]) -> EvalConfig {
    EvalConfig {
        data_path: path.to_path_buf(),
        model,
        params: params.to_vec(),
        labels: ConditionLabels::default(),
        condition: None,
        smooth_sigma: 1.0,
        compare: None,
        plot: false,
        plot_width: 80,
        plot_height: 20,
        export: None,
    }
}

#[test]
fn simulated_snapshot_reloads_to_the_same_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let sim = run_simulate(&simulation(ModelKind::Time, &TRUTH), &path).unwrap();
    let loaded = load_data(&path).unwrap();

    assert_eq!(loaded.context, sim.context);
    let truth = loaded.dataset.truth.expect("simulator records truth");
    assert_eq!(truth.model, ModelKind::Time);
    assert_eq!(truth.params, TRUTH.to_vec());
}

#[test]
fn true_parameters_score_better_than_a_flat_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    run_simulate(&simulation(ModelKind::Time, &TRUTH), &path).unwrap();

    let at_truth = run_eval(&eval_config(&path, ModelKind::Time, &TRUTH)).unwrap();
    let flat = run_eval(&eval_config(&path, ModelKind::Const, &[0.3])).unwrap();

    assert!(at_truth.evaluation.objective.is_finite());
    assert!(at_truth.evaluation.objective > 0.0);
    assert!(at_truth.evaluation.objective < flat.evaluation.objective);
    assert_eq!(at_truth.evaluation.bins.len(), 50);
    assert_eq!(at_truth.smoothed_rate.len(), 50);
    assert_eq!(at_truth.evaluation.n_observations, 200 * 50);
}

#[test]
fn eval_exports_one_csv_row_per_bin() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    let csv = dir.path().join("eval.csv");
    run_simulate(&simulation(ModelKind::Time, &TRUTH), &data).unwrap();

    let run = run_eval(&eval_config(&data, ModelKind::Time, &TRUTH)).unwrap();
    spikefit::io::export::write_eval_csv(&csv, &run.evaluation).unwrap();

    let text = std::fs::read_to_string(&csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("model,condition,time,observed_rate,predicted_rate,nll")
    );
    assert_eq!(lines.count(), 50);
}

#[test]
fn profile_over_peak_time_bottoms_out_near_the_truth() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    run_simulate(&simulation(ModelKind::Time, &TRUTH), &path).unwrap();

    let config = ScanConfig {
        data_path: path,
        model: ModelKind::Time,
        params: TRUTH.to_vec(),
        labels: ConditionLabels::default(),
        param: "ut".to_string(),
        min: None,
        max: None,
        steps: 41,
        spacing: GridSpacing::Lin,
        plot: false,
        plot_width: 80,
        plot_height: 20,
    };
    let run = run_scan(&config).unwrap();

    assert_eq!(run.profile.points.len(), 41);
    assert_eq!(run.profile.points[0].value, 0.0);
    assert_eq!(run.profile.points[40].value, 980.0);
    let best = run.profile.best().expect("finite objective somewhere");
    assert!((best.value - 500.0).abs() <= 75.0, "best ut = {}", best.value);
}

#[test]
fn category_model_round_trips_through_the_pipeline() {
    let params = [0.5, 0.1, 400.0, 60.0, 0.02];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cat.json");
    run_simulate(&simulation(ModelKind::CatTime, &params), &path).unwrap();

    let right = run_eval(&eval_config(&path, ModelKind::CatTime, &params)).unwrap();
    let swapped = run_eval(&eval_config(
        &path,
        ModelKind::CatTime,
        &[0.1, 0.5, 400.0, 60.0, 0.02],
    ))
    .unwrap();
    assert!(right.evaluation.objective < swapped.evaluation.objective);

    let mut missing = eval_config(&path, ModelKind::CatTime, &params);
    missing.labels = ConditionLabels {
        c1: "1".to_string(),
        c2: "left".to_string(),
    };
    let err = run_eval(&missing).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_CONTRACT);
}

#[test]
fn wrong_parameter_count_is_a_contract_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    run_simulate(&simulation(ModelKind::Time, &TRUTH), &path).unwrap();

    let err = run_eval(&eval_config(&path, ModelKind::Time, &TRUTH[..3])).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_CONTRACT);
    assert!(err.to_string().contains("time expects 4 parameters, got 3"));
}

#[test]
fn richer_model_overlay_is_scored_on_the_same_trials() {
    let params = [0.5, 0.1, 400.0, 60.0, 0.02];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cat.json");
    run_simulate(&simulation(ModelKind::CatTime, &params), &path).unwrap();

    let mut config = eval_config(&path, ModelKind::Time, &[0.3, 400.0, 60.0, 0.02]);
    config.compare = Some(Comparison {
        model: ModelKind::CatTime,
        params: params.to_vec(),
    });
    let run = run_eval(&config).unwrap();

    let other = run.comparison.expect("comparison requested");
    assert_eq!(other.model, "cat_time");
    assert_eq!(other.bins.len(), run.evaluation.bins.len());
    assert_eq!(other.n_observations, run.evaluation.n_observations);
    assert!(other.objective < run.evaluation.objective);

    let mut bad = config.clone();
    bad.compare = Some(Comparison {
        model: ModelKind::CatTime,
        params: vec![0.5],
    });
    assert_eq!(run_eval(&bad).unwrap_err().exit_code(), EXIT_CONTRACT);
}

#[test]
fn huge_smoothing_width_still_returns_one_rate_per_bin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    run_simulate(&simulation(ModelKind::Time, &TRUTH), &path).unwrap();

    let mut config = eval_config(&path, ModelKind::Time, &TRUTH);
    config.smooth_sigma = 1e18;
    let run = run_eval(&config).unwrap();
    assert_eq!(run.smoothed_rate.len(), 50);
    assert!(run.smoothed_rate.iter().all(|r| r.is_finite()));
}
