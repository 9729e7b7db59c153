//! 기하/유동 기초량 계산.
//!
//! 내부 기준 단위는 영국식(GPM, in, ft, cP)이며 각 함수는 스프레드시트와
//! 동일한 유효숫자로 반올림해 반환한다.

use crate::rounding::{round_fixed, round_significant};

use super::friction::PIPE_ROUGHNESS_FT;

/// 내경을 인치에서 피트로 환산한다. 유효숫자 4자리.
pub fn diameter_in_feet(diameter_in: f64) -> f64 {
    round_significant(diameter_in / 12.0, 4)
}

/// 동점성계수 [ft²/s]. 점도[cP]와 비중으로부터 환산한다. 유효숫자 8자리.
pub fn kinematic_viscosity(viscosity_cp: f64, specific_gravity: f64) -> f64 {
    round_significant((0.00067197 * viscosity_cp) / (62.37 * specific_gravity), 8)
}

/// 유동 단면적 [ft²]. 유효숫자 3자리.
pub fn flow_area(diameter_ft: f64) -> f64 {
    let radius = diameter_ft / 2.0;
    round_significant(std::f64::consts::PI * radius * radius, 3)
}

/// 체적 유량을 GPM에서 ft³/s로 환산한다. 유효숫자 4자리.
pub fn flow_rate_cfs(flow_gpm: f64) -> f64 {
    round_significant(flow_gpm * 0.002228, 4)
}

/// 평균 유속 [ft/s]. 유효숫자 3자리.
pub fn velocity(flow_cfs: f64, area_ft2: f64) -> f64 {
    round_significant(flow_cfs / area_ft2, 3)
}

/// 관벽 전단율 [1/s]. 내경은 인치 기준이다. 유효숫자 5자리.
pub fn shear_rate(flow_gpm: f64, diameter_in: f64) -> f64 {
    let radius_cubed = (diameter_in / 2.0).powi(3);
    round_significant(flow_gpm / radius_cubed * 4.9, 5)
}

/// 상대 조도 ε/D. 소수점 이하 4자리 고정.
pub fn relative_roughness(diameter_ft: f64) -> f64 {
    round_fixed(PIPE_ROUGHNESS_FT / diameter_ft, 4)
}

/// 레이놀즈수. 유효숫자 4자리.
pub fn reynolds_number(diameter_ft: f64, velocity_fps: f64, kinematic_viscosity_ft2_s: f64) -> f64 {
    round_significant(diameter_ft * velocity_fps / kinematic_viscosity_ft2_s, 4)
}
