use axis_scale::core::AxisScale;

#[test]
fn pixels_per_unit_divides_extent_by_nice_span() {
    let scale = AxisScale::from_range(0.0, 87.0).expect("valid scale");
    let mapper = scale.mapper(450.0).expect("mapper");

    // Nice span is 0..90, so 450 px / 90 units.
    assert!((mapper.pixels_per_unit() - 5.0).abs() <= 1e-12);
}

#[test]
fn value_round_trip_within_tolerance() {
    let scale = AxisScale::from_range(10.0, 110.0).expect("valid scale");
    let mapper = scale.mapper(1000.0).expect("mapper");

    let original = 42.5;
    let px = mapper.value_to_pixel(original).expect("to pixel");
    let recovered = mapper.pixel_to_value(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn nice_bounds_map_onto_the_extent_edges() {
    let scale = AxisScale::from_range(0.0, 87.0).expect("valid scale");
    let mapper = scale.mapper(900.0).expect("mapper");

    assert_eq!(mapper.value_to_pixel(0.0).expect("min pixel"), 0.0);
    assert_eq!(mapper.value_to_pixel(90.0).expect("max pixel"), 900.0);
}

#[test]
fn out_of_range_values_map_beyond_the_extent() {
    let scale = AxisScale::from_range(0.0, 87.0).expect("valid scale");
    let mapper = scale.mapper(900.0).expect("mapper");

    let below = mapper.value_to_pixel(-9.0).expect("below pixel");
    let above = mapper.value_to_pixel(99.0).expect("above pixel");
    assert!(below < 0.0);
    assert!(above > 900.0);
}

#[test]
fn invalid_extents_are_rejected() {
    let scale = AxisScale::from_range(0.0, 87.0).expect("valid scale");

    assert!(scale.mapper(0.0).is_err());
    assert!(scale.mapper(-100.0).is_err());
    assert!(scale.mapper(f64::NAN).is_err());
}

#[test]
fn non_finite_inputs_are_rejected() {
    let scale = AxisScale::from_range(0.0, 87.0).expect("valid scale");
    let mapper = scale.mapper(900.0).expect("mapper");

    assert!(mapper.value_to_pixel(f64::NAN).is_err());
    assert!(mapper.pixel_to_value(f64::INFINITY).is_err());
}
