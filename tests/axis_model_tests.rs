use std::cell::RefCell;
use std::rc::Rc;

use axis_scale::api::{AxisEvent, AxisModel, AxisModelConfig};
use axis_scale::core::AxisScaleTuning;

#[test]
fn set_values_recomputes_scale_eagerly() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_values(&[12.0, 3.0, 87.0]).expect("set values");

    let scale = model.scale().expect("scale present");
    assert_eq!(scale.nice_min(), 0.0);
    assert_eq!(scale.nice_max(), 90.0);
    assert_eq!(model.data_range(), Some((3.0, 87.0)));
}

#[test]
fn model_without_data_has_no_scale() {
    let model = AxisModel::new(AxisModelConfig::default());
    assert!(model.scale().is_none());
    assert!(model.data_range().is_none());
}

#[test]
fn subscribers_observe_data_and_scale_changes() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut model = AxisModel::new(AxisModelConfig::default());
    model.subscribe(move |event| sink.borrow_mut().push(event));
    model.set_values(&[0.0, 87.0]).expect("set values");

    let events = events.borrow();
    assert!(
        events
            .iter()
            .any(|event| matches!(event, AxisEvent::DataUpdated { sample_count: 2 }))
    );
    assert!(
        events
            .iter()
            .any(|event| matches!(event, AxisEvent::ScaleChanged { .. }))
    );
}

#[test]
fn unchanged_scale_is_not_re_emitted() {
    let changes = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&changes);

    let mut model = AxisModel::new(AxisModelConfig::default());
    model.subscribe(move |event| {
        if matches!(event, AxisEvent::ScaleChanged { .. }) {
            *sink.borrow_mut() += 1;
        }
    });

    model.set_data_range(0.0, 87.0).expect("first range");
    model.set_data_range(0.0, 87.0).expect("same range");
    // A slightly different data range that still derives the same scale.
    model.set_data_range(0.0, 86.0).expect("similar range");

    assert_eq!(*changes.borrow(), 1);
}

#[test]
fn fixed_bounds_disable_auto_scaling() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_fixed_bounds(3.0, 97.0).expect("fixed bounds");

    assert!(!model.auto_scale());
    let scale = model.scale().expect("scale present");
    assert_eq!(scale.nice_min(), 3.0);
    assert_eq!(scale.nice_max(), 97.0);

    // Re-enabling auto-scale rescales from the same range.
    model.set_auto_scale(true).expect("auto scale");
    let scale = model.scale().expect("scale present");
    assert_eq!(scale.nice_min(), 0.0);
    assert_eq!(scale.nice_max(), 100.0);
}

#[test]
fn degenerate_data_still_produces_a_scale() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_values(&[42.0, 42.0, 42.0]).expect("flat data");

    let scale = model.scale().expect("scale present");
    assert!(scale.nice_min() <= 42.0);
    assert!(scale.nice_max() >= 42.0);
    assert!(scale.nice_max() > scale.nice_min());
}

#[test]
fn tuning_changes_rescale_immediately() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_data_range(0.0, 87.0).expect("set range");
    assert_eq!(model.scale().expect("scale").major_step(), 10.0);

    let tuning = AxisScaleTuning {
        max_major_ticks: 5,
        ..AxisScaleTuning::default()
    };
    model.set_tuning(tuning).expect("set tuning");
    assert_eq!(model.scale().expect("scale").major_step(), 20.0);
}

#[test]
fn invalid_inputs_leave_state_untouched() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_data_range(0.0, 87.0).expect("set range");

    assert!(model.set_data_range(5.0, 1.0).is_err());
    assert!(model.set_values(&[]).is_err());
    assert!(model.set_values(&[1.0, f64::NAN]).is_err());

    assert_eq!(model.data_range(), Some((0.0, 87.0)));
    assert_eq!(model.scale().expect("scale").nice_max(), 90.0);
}

#[test]
fn format_tick_uses_the_model_step() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_data_range(0.0, 1.0).expect("set range");

    // Major step 0.1 drives one adaptive decimal place.
    assert_eq!(model.format_tick(0.3), "0.3");
    assert_eq!(model.format_tick(1.0), "1.0");
}

#[test]
fn snapshot_json_is_deterministic() {
    let mut model = AxisModel::new(AxisModelConfig::default());
    model.set_data_range(0.0, 87.0).expect("set range");

    let first = model.snapshot_json_pretty().expect("snapshot");
    let second = model.snapshot_json_pretty().expect("snapshot");
    assert_eq!(first, second);
    assert!(first.contains("nice_max"));
    assert!(first.contains("auto_scale"));
}
