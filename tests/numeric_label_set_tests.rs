use approx::assert_abs_diff_eq;
use termplot::axis_labels::{LabelSet, NumericLabelFormatter};
use termplot::core::Range;
use termplot::PlotError;

#[test]
fn unit_interval_gets_three_aligned_labels() {
    let set = LabelSet::numeric(Range::new(0.0, 1.0), 3).expect("finite range");
    assert_eq!(set.ticks(), [0.0, 0.5, 1.0]);
    assert_eq!(set.labels(), ["0.0", "0.5", "1.0"]);
    assert_eq!(set.max_label_width(), 3);
}

#[test]
fn ticks_stay_inside_the_view() {
    let range = Range::new(-3.7, 12.2);
    let set = LabelSet::numeric(range, 6).expect("finite range");
    assert!(!set.is_empty());
    for (tick, label) in set.iter() {
        assert!(range.contains(tick), "{tick} outside view");
        assert!(!label.is_empty());
    }
}

#[test]
fn zero_span_view_gets_one_label() {
    let set = LabelSet::numeric(Range::new(4.0, 4.0), 5).expect("finite range");
    assert_eq!(set.ticks(), [4.0]);
    assert_eq!(set.labels(), ["4"]);
}

#[test]
fn inverted_view_is_labelled_in_ascending_order() {
    let set = LabelSet::numeric(Range::new(1.0, 0.0), 3).expect("finite range");
    assert_eq!(set.ticks(), [0.0, 0.5, 1.0]);
}

#[test]
fn zero_target_yields_no_labels() {
    let set = LabelSet::numeric(Range::new(0.0, 10.0), 0).expect("finite range");
    assert!(set.is_empty());
    assert_eq!(set.max_label_width(), 0);
}

#[test]
fn units_follow_every_label() {
    let formatter = NumericLabelFormatter::new().with_unit("°C");
    let set = LabelSet::build(Range::new(0.0, 1.0), 3, &formatter).expect("finite range");
    assert_eq!(set.labels(), ["0.0°C", "0.5°C", "1.0°C"]);
}

#[test]
fn log_axis_labels_are_powers_of_ten() {
    let formatter = NumericLabelFormatter::new().with_log10(true);
    let set = LabelSet::build(Range::new(-2.0, 1.0), 4, &formatter).expect("finite range");
    assert_eq!(set.labels(), ["0.01", "0.1", "1", "10"]);
}

#[test]
fn labels_are_distinct_for_a_narrow_view_far_from_zero() {
    let set = LabelSet::numeric(Range::new(1_000_000.0, 1_000_000.004), 5).expect("finite");
    let labels = set.labels();
    for pair in labels.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    let first: f64 = labels[0].parse().expect("plain decimal");
    assert_abs_diff_eq!(first, set.ticks()[0], epsilon = 1e-3);
}

#[test]
fn non_finite_views_are_rejected() {
    let err = LabelSet::numeric(Range::new(f64::NAN, 1.0), 3).expect_err("nan bound");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn horizontal_rendering_fills_the_line() {
    let set = LabelSet::numeric(Range::new(0.0, 1.0), 3).expect("finite range");
    assert_eq!(set.render_horizontal(11), "0.0 0.5 1.0");
    let rows = set.render_vertical(3);
    assert_eq!(rows, vec!["1.0", "0.5", "0.0"]);
}

#[test]
fn spans_that_overflow_get_finite_scientific_labels() {
    let range = Range::new(-1e308, 1e308);
    let set = LabelSet::numeric(range, 5).expect("finite bounds");
    assert!(set.ticks().iter().all(|tick| tick.is_finite()));
    assert_eq!(set.labels(), ["-1e308", "-5e307", "0e0", "5e307", "1e308"]);
    assert_eq!(set.render_horizontal(20).chars().count(), 20);
}
