//! 기하/유동 기초량 회귀 테스트.
use pipe_hydraulics_toolbox::piping::geometry::*;

#[test]
fn diameter_roundtrip() {
    assert_eq!(diameter_in_feet(12.0), 1.0);
    assert!((diameter_in_feet(4.0) - 0.3333).abs() < 1e-12);
    assert!((diameter_in_feet(6.0) - 0.5).abs() < 1e-12);
}

#[test]
fn kinematic_viscosity_of_water() {
    // 물(1 cP, 비중 1)의 동점성계수.
    assert!((kinematic_viscosity(1.0, 1.0) - 1.077393e-5).abs() < 1e-12);
}

#[test]
fn flow_primitives_reference_case() {
    assert!((flow_area(0.3333) - 0.0872).abs() < 1e-12);
    assert!((flow_rate_cfs(100.0) - 0.2228).abs() < 1e-12);
    assert!((velocity(0.2228, 0.0872) - 2.56).abs() < 1e-12);
    assert!((shear_rate(100.0, 4.0) - 61.25).abs() < 1e-9);
}

#[test]
fn relative_roughness_mostly_rounds_to_zero() {
    // ε/D는 소수점 4자리 고정이라 보통 관경에서는 0으로 떨어진다.
    assert_eq!(relative_roughness(0.3333), 0.0);
    assert!((relative_roughness(0.1667) - 0.0001).abs() < 1e-12);
}

#[test]
fn reynolds_reference_case() {
    assert!((reynolds_number(0.3333, 2.56, 1.077393e-5) - 79200.0).abs() < 1e-6);
}
