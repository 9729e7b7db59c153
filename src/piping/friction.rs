//! Colebrook-White 잔차표 기반 Darcy 마찰계수 탐색.
//!
//! 난류 마찰계수는 해석적 역함수 대신, 후보값 수열에 대해 음함수 잔차를
//! 평가한 차트를 오름차순으로 스캔해 결정한다. 원본 스프레드시트의 수직
//! 조회와 결과가 일치해야 하므로 후보 수열과 문턱값을 그대로 유지한다.

use once_cell::sync::Lazy;

use crate::rounding::round_significant;

/// 배관 절대 조도 [ft].
pub const PIPE_ROUGHNESS_FT: f64 = 0.000015;

/// 층류/난류 경계 레이놀즈수.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// 잔차 스캔의 문턱값. 이 값을 처음 넘기 직전의 후보가 답이 된다.
const FRICTION_FACTOR_KEY: f64 = 1.003;

const CANDIDATE_FIRST: f64 = 0.007;
const CANDIDATE_LIMIT: f64 = 0.0919;
const CANDIDATE_STEP: f64 = 0.0001;

/// 후보 마찰계수 수열. 입력과 무관하므로 프로세스에서 한 번만 만들고
/// 이후에는 읽기 전용으로 공유한다.
static CANDIDATES: Lazy<Vec<f64>> = Lazy::new(build_candidates);

fn build_candidates() -> Vec<f64> {
    let mut values = Vec::new();
    // 누적 합은 반올림하지 않은 채 진행하고, 저장 시점에만 유효숫자 3자리로
    // 정리한다. 루프 조건도 누적 값 기준이다.
    let mut next = CANDIDATE_FIRST;
    while next < CANDIDATE_LIMIT {
        values.push(round_significant(next, 3));
        next += CANDIDATE_STEP;
    }
    values
}

/// 후보 마찰계수 수열을 반환한다.
pub fn candidate_factors() -> &'static [f64] {
    CANDIDATES.as_slice()
}

/// 후보 마찰계수 하나에 대한 Colebrook-White 잔차. 유효숫자 10자리.
pub fn colebrook_residual(candidate: f64, diameter_ft: f64, reynolds: f64) -> f64 {
    let sqrt_f = candidate.sqrt();
    let log_arg = PIPE_ROUGHNESS_FT / (3.7 * diameter_ft) + 2.51 / (reynolds * sqrt_f);
    round_significant(-2.0 * sqrt_f * log_arg.log10(), 10)
}

/// 후보 수열 전체의 잔차를 평가해 Darcy 차트를 만든다.
///
/// 레이놀즈수와 내경에 의존하므로 계산 호출마다 다시 만들며, (후보, 잔차)
/// 순서쌍의 오름차순 목록으로 반환한다.
pub fn build_darcy_chart(diameter_ft: f64, reynolds: f64) -> Vec<(f64, f64)> {
    candidate_factors()
        .iter()
        .map(|&f| (f, colebrook_residual(f, diameter_ft, reynolds)))
        .collect()
}

/// 차트를 스캔해 Darcy 마찰계수를 결정한다.
///
/// 층류(Re < 2000)는 차트를 쓰지 않고 64/Re 닫힌식을 유효숫자 3자리로
/// 반환한다. 난류는 잔차가 문턱값을 처음 넘는 지점 직전의 후보를 반환한다.
/// 스캔이 끝까지 문턱을 넘지 못하면 -1을 반환해, 오류 대신 하류 결과가
/// 명백히 틀린 값이 되게 한다.
pub fn find_friction_factor(reynolds: f64, chart: &[(f64, f64)]) -> f64 {
    if reynolds < LAMINAR_LIMIT {
        return round_significant(64.0 / reynolds, 3);
    }
    let mut last_value = CANDIDATE_FIRST;
    for &(candidate, residual) in chart {
        if residual > FRICTION_FACTOR_KEY {
            return last_value;
        }
        last_value = candidate;
    }
    -1.0
}
