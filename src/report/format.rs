//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model/math code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::domain::Truth;
use crate::report::Evaluation;
use crate::scan::Profile;

/// Format an evaluation summary: dataset shape, parameters, objective.
pub fn format_eval_summary(eval: &Evaluation, truth: Option<&Truth>) -> String {
    let mut out = String::new();

    out.push_str("=== spk - firing-rate model evaluation ===\n");
    out.push_str(&format!(
        "Data: trials={} | bins={} | observations={}\n",
        eval.n_trials,
        eval.bins.len(),
        eval.n_observations
    ));
    if let Some(c) = &eval.condition {
        out.push_str(&format!("Rates shown for condition: {c}\n"));
    }

    out.push_str(&format!("\nModel: {}\n", eval.model));
    out.push_str(&format_params(&eval.param_names, &eval.params));

    if let Some(t) = truth {
        out.push_str(&format!(
            "Truth: {} {}\n",
            t.model.display_name(),
            fmt_vec(&t.params)
        ));
    }

    out.push_str(&format!("\nObjective (NLL): {}\n", fmt_cost(eval.objective)));
    out.push_str(&format!(
        "Per observation: {}\n",
        fmt_cost(eval.objective_per_observation())
    ));

    out
}

/// Side-by-side objectives of the main model and a second one on the same data.
///
/// `delta` is `other - main`: negative means the second model fits better.
pub fn format_comparison(main: &Evaluation, other: &Evaluation) -> String {
    let mut out = String::new();

    out.push_str(&format!("Comparison model: {}\n", other.model));
    out.push_str(&format_params(&other.param_names, &other.params));
    out.push_str(&format!(
        "\n{:<10} {:>6} {:>18}\n",
        "model", "params", "objective (NLL)"
    ));
    for e in [main, other] {
        out.push_str(&format!(
            "{:<10} {:>6} {:>18}\n",
            e.model,
            e.params.len(),
            fmt_cost(e.objective)
        ));
    }
    out.push_str(&format!(
        "Delta ({} - {}): {}\n",
        other.model,
        main.model,
        fmt_cost(other.objective - main.objective)
    ));

    out
}

/// Format an objective profile as a table, marking the lowest finite point.
pub fn format_profile(profile: &Profile) -> String {
    let mut out = String::new();
    let best = profile.best();

    out.push_str(&format!(
        "Profile: {} along {} (base {})\n",
        profile.model,
        profile.param,
        fmt_vec(&profile.base)
    ));
    out.push_str(&format!("{:>3} {:>14} {:>18}\n", "", profile.param, "objective"));
    for p in &profile.points {
        let mark = if best.is_some_and(|b| b.value == p.value) { "*" } else { "" };
        out.push_str(&format!(
            "{mark:>3} {:>14.6} {:>18}\n",
            p.value,
            fmt_cost(p.objective)
        ));
    }

    match best {
        Some(b) => out.push_str(&format!(
            "\nLowest: {} = {:.6} (objective {})\n",
            profile.param,
            b.value,
            fmt_cost(b.objective)
        )),
        None => out.push_str("\nLowest: none (objective diverged at every grid point)\n"),
    }
    let diverged = profile.non_finite_count();
    if diverged > 0 {
        out.push_str(&format!("Diverged at {diverged} grid point(s).\n"));
    }

    out
}

fn format_params(names: &[&str], values: &[f64]) -> String {
    let mut out = String::new();
    for (name, value) in names.iter().zip(values.iter()) {
        out.push_str(&format!("- {name:<4} = {value:.6}\n"));
    }
    out
}

fn fmt_cost(v: f64) -> String {
    if v.is_finite() { format!("{v:.6}") } else { format!("{v} (diverged)") }
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.4}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;
    use crate::scan::ProfilePoint;

    fn eval(objective: f64) -> Evaluation {
        Evaluation {
            model: "const",
            param_names: vec!["a_0"],
            params: vec![0.25],
            objective,
            n_trials: 2,
            n_observations: 8,
            condition: None,
            bins: Vec::new(),
        }
    }

    #[test]
    fn summary_lists_params_and_objective() {
        let truth = Truth {
            model: ModelKind::Const,
            params: vec![0.2],
        };
        let txt = format_eval_summary(&eval(4.0), Some(&truth));
        assert!(txt.contains("- a_0  = 0.250000\n"));
        assert!(txt.contains("Truth: const [0.2000]\n"));
        assert!(txt.contains("Objective (NLL): 4.000000\n"));
        assert!(txt.contains("Per observation: 0.500000\n"));
    }

    #[test]
    fn divergence_is_labelled() {
        let txt = format_eval_summary(&eval(f64::INFINITY), None);
        assert!(txt.contains("Objective (NLL): inf (diverged)"));
    }

    #[test]
    fn comparison_reports_both_objectives_and_delta() {
        let mut other = eval(3.5);
        other.model = "time";
        other.param_names = vec!["a_1", "ut", "st", "a_0"];
        other.params = vec![0.4, 500.0, 80.0, 0.02];

        let txt = format_comparison(&eval(4.0), &other);
        assert!(txt.starts_with("Comparison model: time\n"));
        assert!(txt.contains("- ut   = 500.000000\n"));
        assert!(txt.contains("const           1           4.000000\n"));
        assert!(txt.contains("time            4           3.500000\n"));
        assert!(txt.contains("Delta (time - const): -0.500000\n"));
    }

    #[test]
    fn profile_table_marks_lowest_point() {
        let profile = Profile {
            model: "const",
            param: "a_0".to_string(),
            base: vec![0.5],
            points: vec![
                ProfilePoint { value: 0.0, objective: f64::INFINITY },
                ProfilePoint { value: 0.25, objective: 2.0 },
                ProfilePoint { value: 0.5, objective: 3.0 },
            ],
        };
        let txt = format_profile(&profile);
        let marked: Vec<&str> = txt.lines().filter(|l| l.trim_start().starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("0.250000"));
        assert!(txt.contains("Lowest: a_0 = 0.250000 (objective 2.000000)"));
        assert!(txt.contains("Diverged at 1 grid point(s)."));
    }
}
