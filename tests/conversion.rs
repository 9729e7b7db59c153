//! 단위 변환 회귀 테스트.
use pipe_hydraulics_toolbox::conversion::{convert, ConversionError, QuantityKind};
use pipe_hydraulics_toolbox::units::{convert_length, LengthUnit};

#[test]
fn gpm_to_cubic_meter_per_hour() {
    let m3h = convert(QuantityKind::Flow, 100.0, "gpm", "m3/h").expect("flow conversion");
    assert!((m3h - 22.712).abs() < 1e-2);
}

#[test]
fn flow_roundtrip() {
    let there = convert(QuantityKind::Flow, 42.0, "gpm", "l/min").expect("to l/min");
    let back = convert(QuantityKind::Flow, there, "l/min", "gpm").expect("back to gpm");
    assert!((back - 42.0).abs() < 1e-9);
}

#[test]
fn inch_to_millimeter_exact_factor() {
    assert!((convert_length(4.0, LengthUnit::Inch, LengthUnit::Millimeter) - 101.6).abs() < 1e-9);
}

#[test]
fn centipoise_to_pascal_second() {
    let pas = convert(QuantityKind::Viscosity, 1.0, "cP", "Pa.s").expect("viscosity conversion");
    assert!((pas - 0.001).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_rejected() {
    match convert(QuantityKind::Length, 1.0, "furlong", "ft") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "furlong"),
        other => panic!("예상치 못한 결과: {other:?}"),
    }
}
