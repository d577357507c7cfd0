use chrono::{DateTime, NaiveDate, Utc};

use crate::core::{PrecisionUnit, Range, coarsest_exceeded, whole_epoch_seconds};
use crate::error::{PlotError, PlotResult};

use super::LabelFormatter;
use super::ticks::nice_ticks;

const SECONDS_PER_DAY: i64 = 86_400;

/// Units that collapse every label to a single coarse field once the view
/// spans more than `SHORT_CIRCUIT_COUNT` of them, coarsest first.
const SHORT_CIRCUIT_UNITS: [PrecisionUnit; 2] = [PrecisionUnit::Year, PrecisionUnit::Day];
const SHORT_CIRCUIT_COUNT: i64 = 10;

// 1 s .. 14 d, each a whole number of the next coarser field where possible.
const CALENDAR_STEPS_SECONDS: [i64; 21] = [
    1, 2, 5, 10, 15, 30, 60, 120, 300, 600, 900, 1_800, 3_600, 7_200, 10_800, 21_600, 43_200,
    86_400, 172_800, 604_800, 1_209_600,
];

/// Labels epoch-second ticks with the shortest datetime text that still
/// tells them apart.
///
/// - view wider than 10 years: year only (`2023`);
/// - wider than 10 days: day only (`2023-06-01`);
/// - otherwise `2023-06-01T10:00:00`, with the date dropped when every tick
///   falls on the same calendar day.
///
/// Ticks and bounds are truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatetimeLabelFormatter;

impl DatetimeLabelFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Unit every label is rendered at for a view over `range`.
    pub fn resolve_unit(range: Range) -> PlotResult<PrecisionUnit> {
        let unit = coarsest_exceeded(range, SHORT_CIRCUIT_COUNT, &SHORT_CIRCUIT_UNITS)?;
        Ok(unit.unwrap_or(PrecisionUnit::Second))
    }
}

impl LabelFormatter for DatetimeLabelFormatter {
    fn place_ticks(&self, range: Range, target_count: usize) -> PlotResult<Vec<f64>> {
        datetime_ticks(range, target_count)
    }

    fn format_labels(&self, ticks: &[f64], range: Range) -> PlotResult<Vec<String>> {
        let unit = Self::resolve_unit(range)?;
        let times = ticks
            .iter()
            .map(|tick| epoch_to_datetime(*tick))
            .collect::<PlotResult<Vec<_>>>()?;

        let labels: Vec<String> = times
            .iter()
            .map(|time| format_datetime_at(*time, unit))
            .collect();
        if unit < PrecisionUnit::Second {
            return Ok(labels);
        }
        Ok(strip_shared_date(labels, &times))
    }
}

/// Converts epoch seconds (truncated toward zero) into a UTC timestamp.
pub fn epoch_to_datetime(value: f64) -> PlotResult<DateTime<Utc>> {
    let seconds = whole_epoch_seconds(value)?;
    DateTime::<Utc>::from_timestamp(seconds, 0).ok_or(PlotError::DatetimeOutOfRange { value })
}

/// Formats `value` as ISO 8601 text truncated to `unit`.
pub fn format_datetime(value: f64, unit: PrecisionUnit) -> PlotResult<String> {
    Ok(format_datetime_at(epoch_to_datetime(value)?, unit))
}

fn format_datetime_at(time: DateTime<Utc>, unit: PrecisionUnit) -> String {
    let pattern = match unit {
        PrecisionUnit::Year => "%Y",
        PrecisionUnit::Month => "%Y-%m",
        PrecisionUnit::Day => "%Y-%m-%d",
        PrecisionUnit::Hour => "%Y-%m-%dT%H",
        PrecisionUnit::Minute => "%Y-%m-%dT%H:%M",
        PrecisionUnit::Second => "%Y-%m-%dT%H:%M:%S",
        PrecisionUnit::Millisecond => "%Y-%m-%dT%H:%M:%S%.3f",
        PrecisionUnit::Microsecond => "%Y-%m-%dT%H:%M:%S%.6f",
        PrecisionUnit::Nanosecond
        | PrecisionUnit::Picosecond
        | PrecisionUnit::Femtosecond
        | PrecisionUnit::Attosecond => "%Y-%m-%dT%H:%M:%S%.9f",
    };
    let mut text = time.format(pattern).to_string();
    // chrono stops at nanoseconds; finer units only add zero digits.
    let extra_zeros = match unit {
        PrecisionUnit::Picosecond => 3,
        PrecisionUnit::Femtosecond => 6,
        PrecisionUnit::Attosecond => 9,
        _ => 0,
    };
    text.extend(std::iter::repeat_n('0', extra_zeros));
    text
}

/// Drops the `YYYY-MM-DDT` prefix from every label when all share one date.
fn strip_shared_date(labels: Vec<String>, times: &[DateTime<Utc>]) -> Vec<String> {
    let mut dates = times.iter().map(DateTime::<Utc>::date_naive);
    let Some(first) = dates.next() else {
        return labels;
    };
    if !dates.all(|date: NaiveDate| date == first) {
        return labels;
    }

    labels
        .into_iter()
        .map(|label| match label.split_once('T') {
            Some((_, time_of_day)) => time_of_day.to_owned(),
            None => label,
        })
        .collect()
}

/// Tick positions aligned to calendar-friendly steps since the epoch.
///
/// Steps come from `CALENDAR_STEPS_SECONDS`; views too wide for the table use
/// the numeric search over whole days.
pub fn datetime_ticks(range: Range, target_count: usize) -> PlotResult<Vec<f64>> {
    let range = range.ensure_finite("datetime")?.normalized();
    if target_count == 0 {
        return Ok(Vec::new());
    }
    if range.span() == 0.0 {
        return Ok(vec![range.min]);
    }

    let raw_step = range.span() / (target_count.max(2) - 1) as f64;
    let mut ticks = match CALENDAR_STEPS_SECONDS
        .iter()
        .find(|step| **step as f64 >= raw_step)
    {
        Some(step) => {
            let step = *step as f64;
            let first = (range.min / step).ceil() * step;
            let mut ticks = Vec::new();
            let mut index = 0.0;
            loop {
                let tick = first + step * index;
                if tick > range.max {
                    break;
                }
                ticks.push(tick);
                index += 1.0;
            }
            ticks
        }
        None => {
            let day = SECONDS_PER_DAY as f64;
            let days = Range::new(range.min / day, range.max / day);
            let mut ticks: Vec<f64> = nice_ticks(days, target_count)?
                .into_iter()
                .map(|days| days.round() * day)
                .filter(|tick| range.contains(*tick))
                .collect();
            ticks.dedup();
            ticks
        }
    };

    if ticks.len() < 2 {
        let first = range.min.ceil();
        let last = range.max.floor();
        ticks = if first < last {
            vec![first, last]
        } else {
            vec![range.min]
        };
    }
    Ok(ticks)
}
