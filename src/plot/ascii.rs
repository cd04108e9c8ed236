//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed rate (smoothed PSTH): `o`
//! - predicted rate / objective profile: `-` line
//! - comparison model's predicted rate: `+` line
//! - profile minimum: `*`
//! - raster: `|` spike, `.` missing bin

use crate::models::{ModelContext, ModelError};
use crate::scan::Profile;

/// Observed vs predicted firing rate over the time window.
///
/// `overlay` is a second model's predicted rate. Where the two curves share a
/// cell, the main prediction is shown.
pub fn render_rate_plot(
    times: &[f64],
    observed: &[f64],
    predicted: &[f64],
    overlay: Option<&[f64]>,
    width: usize,
    height: usize,
) -> String {
    let points = finite_series(times, observed);
    let main = finite_series(times, predicted);
    let other = overlay.map(|o| finite_series(times, o)).unwrap_or_default();

    let curves = [(main.as_slice(), '-'), (other.as_slice(), '+')];
    render_plot(&points, &curves, None, ("time", "rate"), width, height)
}

fn finite_series(times: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    times
        .iter()
        .zip(values.iter())
        .filter(|(_, y)| y.is_finite())
        .map(|(&t, &y)| (t, y))
        .collect()
}

/// Objective along one parameter, with the lowest finite point marked.
pub fn render_profile_plot(profile: &Profile, width: usize, height: usize) -> String {
    let curve: Vec<(f64, f64)> = profile
        .points
        .iter()
        .filter(|p| p.objective.is_finite())
        .map(|p| (p.value, p.objective))
        .collect();
    let best = profile.best().map(|b| (b.value, b.objective));

    render_plot(
        &[],
        &[(curve.as_slice(), '-')],
        best,
        (profile.param.as_str(), "objective"),
        width,
        height,
    )
}

/// Spike raster: one row per trial, bins packed into at most `width` columns.
///
/// With `condition`, only trials whose indicator is non-zero are drawn.
pub fn render_raster(ctx: &ModelContext, condition: Option<&str>, width: usize) -> Result<String, ModelError> {
    let trials: Vec<usize> = match condition {
        None => (0..ctx.n_trials()).collect(),
        Some(label) => {
            let indicator = ctx.condition(label)?;
            (0..ctx.n_trials()).filter(|&i| indicator[i] != 0.0).collect()
        }
    };

    let n_bins = ctx.n_bins();
    let cols = width.max(1).min(n_bins);
    let (t_min, t_max) = ctx.window_range();

    let mut out = String::new();
    out.push_str(&format!(
        "Raster: trials={}{} | time=[{t_min:.3}, {t_max:.3}]\n",
        trials.len(),
        condition.map(|c| format!(" (condition {c})")).unwrap_or_default(),
    ));

    let spikes = ctx.spikes();
    for &i in &trials {
        let row: String = (0..cols)
            .map(|c| {
                let lo = c * n_bins / cols;
                let hi = ((c + 1) * n_bins / cols).max(lo + 1);
                let cell: Vec<f64> = (lo..hi).map(|j| spikes[(i, j)]).collect();
                if cell.iter().any(|v| v.is_finite() && *v > 0.0) {
                    '|'
                } else if cell.iter().all(|v| !v.is_finite()) {
                    '.'
                } else {
                    ' '
                }
            })
            .collect();
        out.push_str(&row);
        out.push('\n');
    }

    Ok(out)
}

fn render_plot(
    points: &[(f64, f64)],
    curves: &[(&[(f64, f64)], char)],
    highlight: Option<(f64, f64)>,
    labels: (&str, &str),
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all: Vec<(f64, f64)> = curves
        .iter()
        .flat_map(|(c, _)| c.iter().copied())
        .chain(points.iter().copied())
        .collect();
    let (x_min, x_max) = x_range(&all).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(&all).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curves first (so points can overlay); earlier curves win shared cells.
    for &(curve, ch) in curves {
        draw_curve(&mut grid, curve, ch, x_min, x_max, y_min, y_max);
    }

    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    if let Some((x, y)) = highlight {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = '*';
    }

    let (x_label, y_label) = labels;
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {x_label}=[{x_min:.3}, {x_max:.3}] | {y_label}=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let (min_x, max_x) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let (min_y, max_y) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    ch: char,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if curve.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, ch);
        } else if grid[row][col] == ' ' {
            grid[row][col] = ch;
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
