use serde::{Deserialize, Serialize};

use crate::core::range::Range;
use crate::error::{PlotError, PlotResult};

const ATTOSECONDS_PER_SECOND: i128 = 1_000_000_000_000_000_000;
const SECONDS_PER_DAY: i128 = 86_400;
// Gregorian mean year: 365.2425 days.
const SECONDS_PER_YEAR: i128 = 31_556_952;

/// Calendar/time granularity, ordered from coarsest to finest.
///
/// The derived `Ord` follows declaration order, so `Year < Day < Second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrecisionUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
    Picosecond,
    Femtosecond,
    Attosecond,
}

impl PrecisionUnit {
    pub const ALL: [Self; 12] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
        Self::Microsecond,
        Self::Nanosecond,
        Self::Picosecond,
        Self::Femtosecond,
        Self::Attosecond,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Year => "Y",
            Self::Month => "M",
            Self::Day => "D",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
            Self::Millisecond => "ms",
            Self::Microsecond => "us",
            Self::Nanosecond => "ns",
            Self::Picosecond => "ps",
            Self::Femtosecond => "fs",
            Self::Attosecond => "as",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.code() == code)
    }

    /// Fixed calendar length of one unit in attoseconds.
    ///
    /// Years use the Gregorian mean (365.2425 days) and months a twelfth of it.
    #[must_use]
    pub fn attoseconds(self) -> i128 {
        match self {
            Self::Year => SECONDS_PER_YEAR * ATTOSECONDS_PER_SECOND,
            Self::Month => SECONDS_PER_YEAR / 12 * ATTOSECONDS_PER_SECOND,
            Self::Day => SECONDS_PER_DAY * ATTOSECONDS_PER_SECOND,
            Self::Hour => 3_600 * ATTOSECONDS_PER_SECOND,
            Self::Minute => 60 * ATTOSECONDS_PER_SECOND,
            Self::Second => ATTOSECONDS_PER_SECOND,
            Self::Millisecond => 1_000_000_000_000_000,
            Self::Microsecond => 1_000_000_000_000,
            Self::Nanosecond => 1_000_000_000,
            Self::Picosecond => 1_000_000,
            Self::Femtosecond => 1_000,
            Self::Attosecond => 1,
        }
    }

    /// Length of `count` units in whole seconds, truncated toward zero.
    #[must_use]
    pub fn whole_seconds(self, count: i64) -> i128 {
        i128::from(count).saturating_mul(self.attoseconds()) / ATTOSECONDS_PER_SECOND
    }
}

/// Truncates an epoch-seconds value toward zero.
pub fn whole_epoch_seconds(value: f64) -> PlotResult<i64> {
    if !value.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "datetime value must be finite, got {value}"
        )));
    }
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; the upper bound is exclusive.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(PlotError::DatetimeOutOfRange { value });
    }
    Ok(truncated as i64)
}

/// Whether the bounds of `range`, truncated to whole seconds, lie more than
/// `count` units apart.
///
/// Inverted ranges yield a negative difference and never exceed a positive
/// threshold.
pub fn span_exceeds(range: Range, count: i64, unit: PrecisionUnit) -> PlotResult<bool> {
    let start = whole_epoch_seconds(range.min)?;
    let end = whole_epoch_seconds(range.max)?;
    let difference = i128::from(end) - i128::from(start);
    Ok(difference > unit.whole_seconds(count))
}

/// Returns the first unit of `candidates` whose `count`-unit span is exceeded.
///
/// Candidates are evaluated in order and the search stops at the first hit,
/// so callers pass them coarsest first.
pub fn coarsest_exceeded(
    range: Range,
    count: i64,
    candidates: &[PrecisionUnit],
) -> PlotResult<Option<PrecisionUnit>> {
    for &unit in candidates {
        if span_exceeds(range, count, unit)? {
            return Ok(Some(unit));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{PrecisionUnit, coarsest_exceeded, span_exceeds, whole_epoch_seconds};
    use crate::core::Range;

    #[test]
    fn units_are_ordered_coarsest_first() {
        let mut sorted = PrecisionUnit::ALL;
        sorted.sort();
        assert_eq!(sorted, PrecisionUnit::ALL);
        assert!(PrecisionUnit::Year < PrecisionUnit::Attosecond);
    }

    #[test]
    fn codes_round_trip() {
        for unit in PrecisionUnit::ALL {
            assert_eq!(PrecisionUnit::from_code(unit.code()), Some(unit));
        }
        assert_eq!(PrecisionUnit::from_code("W"), None);
    }

    #[test]
    fn ten_years_use_mean_gregorian_length() {
        assert_eq!(PrecisionUnit::Year.whole_seconds(10), 315_569_520);
        assert_eq!(PrecisionUnit::Day.whole_seconds(10), 864_000);
        assert_eq!(PrecisionUnit::Millisecond.whole_seconds(10), 0);
    }

    #[test]
    fn span_comparison_is_strict() {
        let exactly_ten_days = Range::new(0.0, 864_000.0);
        assert!(!span_exceeds(exactly_ten_days, 10, PrecisionUnit::Day).expect("finite"));

        let just_over = Range::new(0.0, 864_001.0);
        assert!(span_exceeds(just_over, 10, PrecisionUnit::Day).expect("finite"));
    }

    #[test]
    fn bounds_are_truncated_toward_zero() {
        let range = Range::new(-0.9, 864_000.9);
        assert!(!span_exceeds(range, 10, PrecisionUnit::Day).expect("finite"));
        assert_eq!(whole_epoch_seconds(-0.9).expect("finite"), 0);
    }

    #[test]
    fn inverted_range_never_exceeds() {
        let range = Range::new(1_000_000_000.0, 0.0);
        let hit = coarsest_exceeded(range, 10, &[PrecisionUnit::Year, PrecisionUnit::Day])
            .expect("finite");
        assert_eq!(hit, None);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(span_exceeds(Range::new(f64::NAN, 1.0), 10, PrecisionUnit::Day).is_err());
        assert!(whole_epoch_seconds(1e30).is_err());
    }
}
