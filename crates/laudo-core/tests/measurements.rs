use laudo_core::Measurement;
use laudo_core::format::{cm, decimal_br};

#[test]
fn max_dimension_takes_the_largest_axis() {
    let m = Measurement::new(1.0, 0.8, 1.6);
    assert_eq!(m.max_dimension(), 1.6);
}

#[test]
fn zero_measurement_means_not_entered() {
    let m = Measurement::default();
    assert!(m.is_empty());
    assert_eq!(m.max_dimension(), 0.0);
    assert_eq!(m.format_cm(), "");
}

#[test]
fn formats_with_comma_separator() {
    let m = Measurement::new(1.0, 0.8, 0.6);
    assert_eq!(m.format_cm(), "1,0 x 0,8 x 0,6 cm");
}

#[test]
fn decimal_br_rendering() {
    assert_eq!(decimal_br(1.25, 2), "1,25");
    assert_eq!(cm(2.5), "2,5");
    assert_eq!(cm(3.0), "3,0");
}
