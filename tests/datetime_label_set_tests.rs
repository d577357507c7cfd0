use termplot::axis_labels::{DatetimeLabelFormatter, LabelSet};
use termplot::core::{PrecisionUnit, Range};
use termplot::PlotError;

// 2023-06-01T00:00:00Z
const JUNE_FIRST: f64 = 1_685_577_600.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

fn labels_for(range: Range, ticks: Vec<f64>) -> Vec<String> {
    LabelSet::from_ticks(range, ticks, &DatetimeLabelFormatter::new())
        .expect("representable ticks")
        .labels()
        .to_vec()
}

#[test]
fn same_day_ticks_drop_the_shared_date() {
    let ten = JUNE_FIRST + 10.0 * HOUR;
    let fourteen = JUNE_FIRST + 14.0 * HOUR;
    let labels = labels_for(Range::new(ten, fourteen), vec![ten, fourteen]);
    assert_eq!(labels, vec!["10:00:00", "14:00:00"]);
}

#[test]
fn multi_year_views_print_years_only() {
    let start = 1_262_304_000.0; // 2010-01-01
    let middle = 1_420_070_400.0; // 2015-01-01
    let end = 1_672_531_200.0; // 2023-01-01
    let labels = labels_for(Range::new(start, end), vec![start, middle, end]);
    assert_eq!(labels, vec!["2010", "2015", "2023"]);
}

#[test]
fn multi_week_views_print_days_only() {
    let end = JUNE_FIRST + 30.0 * DAY;
    let labels = labels_for(
        Range::new(JUNE_FIRST, end),
        vec![JUNE_FIRST, JUNE_FIRST + 16.0 * DAY, end],
    );
    assert_eq!(labels, vec!["2023-06-01", "2023-06-17", "2023-07-01"]);
}

#[test]
fn differing_dates_keep_full_timestamps() {
    let evening = JUNE_FIRST + 20.0 * HOUR;
    let early = JUNE_FIRST + DAY + 4.0 * HOUR;
    let labels = labels_for(Range::new(evening, early), vec![evening, early]);
    assert_eq!(labels, vec!["2023-06-01T20:00:00", "2023-06-02T04:00:00"]);
}

#[test]
fn exactly_ten_days_is_not_a_day_view() {
    let end = JUNE_FIRST + 10.0 * DAY;
    let range = Range::new(JUNE_FIRST, end);
    assert_eq!(
        DatetimeLabelFormatter::resolve_unit(range).expect("finite range"),
        PrecisionUnit::Second
    );
    let labels = labels_for(range, vec![JUNE_FIRST, end]);
    assert_eq!(labels, vec!["2023-06-01T00:00:00", "2023-06-11T00:00:00"]);
}

#[test]
fn inverted_views_fall_through_to_full_precision() {
    let later = JUNE_FIRST + 20.0 * DAY;
    let labels = labels_for(Range::new(later, JUNE_FIRST), vec![JUNE_FIRST, later]);
    assert_eq!(labels, vec!["2023-06-01T00:00:00", "2023-06-21T00:00:00"]);
}

#[test]
fn fractional_seconds_are_truncated() {
    let tick = JUNE_FIRST + 10.0 * HOUR + 0.9;
    let labels = labels_for(Range::new(tick, tick + HOUR), vec![tick]);
    assert_eq!(labels, vec!["10:00:00"]);
}

#[test]
fn built_label_set_places_calendar_ticks() {
    let range = Range::new(JUNE_FIRST + 10.0 * HOUR, JUNE_FIRST + 14.0 * HOUR);
    let set = LabelSet::datetime(range, 3).expect("representable range");
    assert_eq!(set.labels(), ["10:00:00", "12:00:00", "14:00:00"]);
    assert_eq!(set.len(), set.ticks().len());
}

#[test]
fn unrepresentable_ticks_are_errors() {
    let range = Range::new(JUNE_FIRST, JUNE_FIRST + DAY);
    let formatter = DatetimeLabelFormatter::new();

    let err = LabelSet::from_ticks(range, vec![1e17], &formatter).expect_err("beyond chrono");
    assert!(matches!(err, PlotError::DatetimeOutOfRange { .. }));

    let err = LabelSet::from_ticks(range, vec![1e20], &formatter).expect_err("beyond i64");
    assert!(matches!(err, PlotError::DatetimeOutOfRange { .. }));

    let err = LabelSet::from_ticks(range, vec![f64::NAN], &formatter).expect_err("nan tick");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn non_finite_view_bounds_are_errors() {
    let err = LabelSet::datetime(Range::new(JUNE_FIRST, f64::INFINITY), 4)
        .expect_err("infinite bound");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn overflowing_views_report_out_of_range_instead_of_panicking() {
    let err = LabelSet::datetime(Range::new(-1e308, 1e308), 5).expect_err("beyond chrono");
    assert!(matches!(err, PlotError::DatetimeOutOfRange { .. }));
}
