use termplot::api::{PlotOptions, ViewportState};
use termplot::PlotError;

#[test]
fn empty_json_object_yields_defaults() {
    let options = PlotOptions::from_json_str("{}").expect("empty object");
    assert_eq!(options, PlotOptions::default());
    assert_eq!(options.width, 60);
    assert_eq!(options.height, 17);
    assert_eq!(options.x_gridlines, vec![0.0]);
    assert_eq!(options.y_gridlines, vec![0.0]);
    assert_eq!(options.lines, vec![false]);
    assert_eq!((options.x_min, options.x_max), (0.0, 1.0));
    assert_eq!((options.y_min, options.y_max), (0.0, 1.0));
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let options = PlotOptions::from_json_str(
        r#"{ "width": 80, "x_unit": "s", "title": "latency", "x_as_datetime": true }"#,
    )
    .expect("partial options");
    assert_eq!(options.width, 80);
    assert_eq!(options.x_unit, "s");
    assert_eq!(options.title.as_deref(), Some("latency"));
    assert!(options.x_as_datetime);
    assert_eq!(options.height, 17);
    assert!(options.legend_labels.is_none());
}

#[test]
fn pretty_json_round_trips() {
    let options = PlotOptions::new()
        .with_x_bounds(-1.5, 2.5)
        .with_y_bounds(10.0, 20.0)
        .with_title("cpu")
        .with_legend_labels(vec!["user".to_owned(), "system".to_owned()])
        .with_lines(vec![true, false])
        .with_line_length_hard_cap(Some(120))
        .with_color(true);
    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"title\": \"cpu\""));
    let parsed = PlotOptions::from_json_str(&json).expect("parse");
    assert_eq!(parsed, options);
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = PlotOptions::from_json_str("{ width: }").expect_err("malformed");
    assert!(matches!(err, PlotError::InvalidData(message) if message.contains("parse")));
}

#[test]
fn validate_rejects_unusable_options() {
    assert!(PlotOptions::default().validate().is_ok());

    assert!(matches!(
        PlotOptions::new().with_grid_size(0, 0).validate(),
        Err(PlotError::InvalidGridSize { .. })
    ));
    assert!(matches!(
        PlotOptions::new()
            .with_log_axes(true, false)
            .with_x_as_datetime(true)
            .validate(),
        Err(PlotError::InvalidData(_))
    ));
    assert!(matches!(
        PlotOptions::new().with_line_length_hard_cap(Some(0)).validate(),
        Err(PlotError::InvalidData(_))
    ));
    assert!(matches!(
        PlotOptions::new().with_lines(Vec::new()).validate(),
        Err(PlotError::InvalidData(_))
    ));
    assert!(matches!(
        PlotOptions::new()
            .with_gridlines(vec![f64::INFINITY], vec![0.0])
            .validate(),
        Err(PlotError::InvalidData(_))
    ));
}

#[test]
fn navigated_view_persists_through_into_options() {
    let mut state = ViewportState::new(
        PlotOptions::new()
            .with_x_bounds(0.0, 100.0)
            .with_y_bounds(0.0, 10.0)
            .with_title("disk"),
    )
    .expect("state");
    state.shift_right();
    state.set_width(40).expect("width");

    let json = state.into_options().to_json_pretty().expect("serialize");
    let restored = PlotOptions::from_json_str(&json).expect("parse");
    assert_eq!((restored.x_min, restored.x_max), (10.0, 110.0));
    assert_eq!((restored.y_min, restored.y_max), (0.0, 10.0));
    assert_eq!(restored.width, 40);
    assert_eq!(restored.title.as_deref(), Some("disk"));

    let reopened = ViewportState::new(restored).expect("reopened");
    assert_eq!(reopened.initial_bounds().x.min, 10.0);
}
