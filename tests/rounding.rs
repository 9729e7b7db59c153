//! 유효숫자/고정소수 반올림 회귀 테스트.
use pipe_hydraulics_toolbox::rounding::{round_fixed, round_significant};

#[test]
fn significant_basic() {
    assert!((round_significant(0.0872489, 3) - 0.0872).abs() < 1e-12);
    assert!((round_significant(2.5550458, 3) - 2.56).abs() < 1e-12);
    assert!((round_significant(123456.0, 3) - 123000.0).abs() < 1e-6);
    assert_eq!(round_significant(0.0, 4), 0.0);
}

#[test]
fn significant_half_away_from_zero() {
    // 경계의 5는 0에서 먼 쪽으로 올린다.
    assert!((round_significant(1.25, 2) - 1.3).abs() < 1e-12);
    assert!((round_significant(-1.25, 2) + 1.3).abs() < 1e-12);
}

#[test]
fn significant_negative_value() {
    assert!((round_significant(-0.0123449, 3) + 0.0123).abs() < 1e-12);
}

#[test]
fn fixed_decimal_places() {
    // 상대 조도가 소수점 4자리에서 0으로 떨어지는 사례 그대로.
    assert_eq!(round_fixed(0.000045, 4), 0.0);
    assert!((round_fixed(0.000145, 4) - 0.0001).abs() < 1e-12);
    assert!((round_fixed(836.615, 0) - 837.0).abs() < 1e-12);
    assert!((round_fixed(2.5, 0) - 3.0).abs() < 1e-12);
}
