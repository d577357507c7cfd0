//! Tick placement.
//!
//! Numeric axes use the extended Wilkinson search (Talbot, Lin and Hanrahan,
//! "An Extension of Wilkinson's Algorithm for Positioning Tick Labels on
//! Axes"), restricted to label ranges that fit inside the data range.

use crate::core::Range;
use crate::error::PlotResult;

const NICE_STEPS: [f64; 6] = [1.0, 5.0, 2.0, 2.5, 4.0, 3.0];
// simplicity, coverage, density, legibility
const WEIGHTS: [f64; 4] = [0.25, 0.2, 0.5, 0.05];

const MAX_SKIP: usize = 24;
const MAX_TICKS: usize = 48;
const MAX_EXPONENT_STEPS: usize = 32;
const MAX_START_MAGNITUDE: f64 = 1e15;
// Past the f64 exponent range in both directions.
const MAX_DECIMAL_EXPONENT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    first: f64,
    step: f64,
    count: usize,
}

/// Picks "nice" tick positions inside `range`, aiming for `target_count` ticks.
///
/// Inverted ranges are searched in normalized order. A zero-span range yields
/// its single value. Non-finite bounds are rejected; finite bounds whose span
/// overflows `f64` get evenly spaced ticks.
pub fn nice_ticks(range: Range, target_count: usize) -> PlotResult<Vec<f64>> {
    let range = range.ensure_finite("tick")?.normalized();
    if target_count == 0 {
        return Ok(Vec::new());
    }
    if range.span() == 0.0 {
        return Ok(vec![range.min]);
    }

    let candidate = if range.span().is_finite() {
        search(range.min, range.max, target_count.max(2))
    } else {
        None
    };
    let ticks: Vec<f64> = match candidate {
        Some(candidate) => (0..candidate.count)
            .map(|index| candidate.first + candidate.step * index as f64)
            .collect(),
        None => evenly_spaced_ticks(range, target_count),
    };
    // Both paths can land within a rounding error outside the bounds.
    Ok(ticks
        .into_iter()
        .map(|tick| tick.clamp(range.min, range.max))
        .collect())
}

/// Positions `tick_count` ticks at equal distances from `range.min` to `range.max`.
#[must_use]
pub fn evenly_spaced_ticks(range: Range, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    if tick_count == 1 {
        return vec![range.min];
    }

    let span = range.span();
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            if span.is_finite() {
                range.min + span * ratio
            } else {
                // Interpolate from both ends so an overflowing span stays finite.
                range.min * (1.0 - ratio) + range.max * ratio
            }
        })
        .collect()
}

/// Smallest strictly positive gap between consecutive values, `0.0` if none.
#[must_use]
pub fn tick_step_hint_from_values(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}

fn weighted(simplicity: f64, coverage: f64, density: f64, legibility: f64) -> f64 {
    WEIGHTS[0] * simplicity + WEIGHTS[1] * coverage + WEIGHTS[2] * density + WEIGHTS[3] * legibility
}

fn search(data_min: f64, data_max: f64, target: usize) -> Option<Candidate> {
    let span = data_max - data_min;
    let tolerance = span * 1e-10;
    let mut best: Option<Candidate> = None;
    let mut best_score = -2.0;

    'skip: for skip in 1..=MAX_SKIP {
        let skip_f = skip as f64;
        for (q_index, &q) in NICE_STEPS.iter().enumerate() {
            let simplicity_bound = simplicity_max(q_index, skip_f);
            if weighted(simplicity_bound, 1.0, 1.0, 1.0) < best_score {
                break 'skip;
            }

            for count in 2..=MAX_TICKS {
                let density_bound = density_max(count, target);
                if weighted(simplicity_bound, 1.0, density_bound, 1.0) < best_score {
                    break;
                }

                let delta = span / (count as f64 + 1.0) / skip_f / q;
                let Some(mut exponent) = step_exponent(delta) else {
                    continue;
                };

                for _ in 0..MAX_EXPONENT_STEPS {
                    let step = skip_f * q * 10f64.powi(exponent);
                    exponent += 1;
                    if !step.is_finite() || step == 0.0 {
                        break;
                    }
                    let coverage_bound =
                        coverage_max(data_min, data_max, step * (count as f64 - 1.0));
                    if weighted(simplicity_bound, coverage_bound, density_bound, 1.0) < best_score
                    {
                        break;
                    }
                    if (data_max / step).abs() > MAX_START_MAGNITUDE
                        || (data_min / step).abs() > MAX_START_MAGNITUDE
                    {
                        continue;
                    }

                    let skip_i = skip as i64;
                    let min_start =
                        (data_max / step).floor() as i64 * skip_i - (count as i64 - 1) * skip_i;
                    let max_start = (data_min / step).ceil() as i64 * skip_i;

                    for start in min_start..=max_start {
                        let label_min = start as f64 * (step / skip_f);
                        let label_max = label_min + step * (count as f64 - 1.0);
                        if label_min < data_min - tolerance || label_max > data_max + tolerance {
                            continue;
                        }

                        let score = weighted(
                            simplicity(q_index, skip_f, label_min, label_max, step),
                            coverage(data_min, data_max, label_min, label_max),
                            density(count, target, data_min, data_max, label_min, label_max),
                            1.0,
                        );
                        if score > best_score {
                            best_score = score;
                            best = Some(Candidate {
                                first: label_min,
                                step,
                                count,
                            });
                        }
                    }
                }
            }
        }
    }

    best
}

/// Decimal exponent of the first step to try for `delta`, `None` when no
/// finite positive step exists.
fn step_exponent(delta: f64) -> Option<i32> {
    if !delta.is_finite() || delta <= 0.0 {
        return None;
    }
    let exponent = delta.log10().ceil();
    Some(exponent.clamp(-MAX_DECIMAL_EXPONENT, MAX_DECIMAL_EXPONENT) as i32)
}

fn simplicity(q_index: usize, skip: f64, label_min: f64, label_max: f64, step: f64) -> f64 {
    let n = NICE_STEPS.len() as f64;
    let remainder = label_min.rem_euclid(step);
    let eps = step * 1e-10;
    let includes_zero = (remainder < eps || step - remainder < eps)
        && label_min <= 0.0
        && label_max >= 0.0;
    let zero_bonus = if includes_zero { 1.0 } else { 0.0 };
    1.0 - (q_index as f64) / (n - 1.0) - skip + zero_bonus
}

fn simplicity_max(q_index: usize, skip: f64) -> f64 {
    let n = NICE_STEPS.len() as f64;
    1.0 - (q_index as f64) / (n - 1.0) - skip + 1.0
}

fn coverage(data_min: f64, data_max: f64, label_min: f64, label_max: f64) -> f64 {
    let range = data_max - data_min;
    1.0 - 0.5 * ((data_max - label_max).powi(2) + (data_min - label_min).powi(2))
        / (0.1 * range).powi(2)
}

fn coverage_max(data_min: f64, data_max: f64, label_span: f64) -> f64 {
    let range = data_max - data_min;
    if label_span > range {
        let half = (label_span - range) / 2.0;
        1.0 - 0.5 * (2.0 * half.powi(2)) / (0.1 * range).powi(2)
    } else {
        1.0
    }
}

fn density(
    count: usize,
    target: usize,
    data_min: f64,
    data_max: f64,
    label_min: f64,
    label_max: f64,
) -> f64 {
    let ratio = (count as f64 - 1.0) / (label_max - label_min);
    let target_ratio =
        (target as f64 - 1.0) / (label_max.max(data_max) - data_min.min(label_min));
    2.0 - (ratio / target_ratio).max(target_ratio / ratio)
}

fn density_max(count: usize, target: usize) -> f64 {
    if count >= target {
        2.0 - (count as f64 - 1.0) / (target as f64 - 1.0)
    } else {
        1.0
    }
}
