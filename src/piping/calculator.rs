//! 입력을 받아 모든 파생량을 의존 순서대로 계산해 하나의 결과 레코드로 조립한다.

use serde::Serialize;

use super::fittings::{FittingCounts, FittingKind};
use super::friction;
use super::geometry;
use super::losses;

/// 단일 배관 계산 입력. 계산기 내부 기준 단위(영국식)로 받는다.
#[derive(Debug, Clone, Copy)]
pub struct PipeFlowInput {
    /// 체적 유량 [GPM]
    pub flow_gpm: f64,
    /// 배관 내경 [in]
    pub diameter_in: f64,
    /// 직관 길이 [ft]
    pub straight_length_ft: f64,
    /// 점도 [cP]
    pub viscosity_cp: f64,
    /// 비중 (물 = 1)
    pub specific_gravity: f64,
    /// 수직 상승 [ft]
    pub vertical_rise_ft: f64,
    /// 피팅 개수
    pub fittings: FittingCounts,
}

/// 피팅 종류별 등가 길이 [ft].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquivalentLengths {
    pub nineties_ft: f64,
    pub fortyfives_ft: f64,
    pub tee_branches_ft: f64,
    pub tee_lines_ft: f64,
    pub globe_valves_ft: f64,
    pub gate_valves_ft: f64,
    pub swing_checks_ft: f64,
    pub angle_valves_ft: f64,
}

impl EquivalentLengths {
    /// 여덟 항목의 합 [ft]. 항목별로 이미 반올림된 값을 고정 순서로 더한다.
    pub fn sum(&self) -> f64 {
        self.nineties_ft
            + self.fortyfives_ft
            + self.tee_branches_ft
            + self.tee_lines_ft
            + self.globe_valves_ft
            + self.gate_valves_ft
            + self.swing_checks_ft
            + self.angle_valves_ft
    }
}

/// 한 번의 계산으로 전부 채워 반환하는 결과 레코드.
#[derive(Debug, Clone, Serialize)]
pub struct PipeFlowResult {
    /// 동점성계수 [ft²/s]
    pub kinematic_viscosity_ft2_per_s: f64,
    /// 내경 [ft]
    pub diameter_ft: f64,
    /// 유동 단면적 [ft²]
    pub flow_area_ft2: f64,
    /// 체적 유량 [ft³/s]
    pub flow_rate_cfs: f64,
    /// 평균 유속 [ft/s]
    pub velocity_ft_per_s: f64,
    /// 관벽 전단율 [1/s]
    pub shear_rate_per_s: f64,
    /// 상대 조도 ε/D
    pub relative_roughness: f64,
    /// 레이놀즈수
    pub reynolds_number: f64,
    /// 후보 마찰계수별 Colebrook-White 잔차 차트 (진단용)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub darcy_chart: Vec<(f64, f64)>,
    /// Darcy 마찰계수. 차트 스캔이 실패하면 -1.
    pub friction_factor: f64,
    /// 피팅 종류별 등가 길이
    pub equivalent_lengths: EquivalentLengths,
    /// 피팅 등가 길이 합 [ft]
    pub total_fitting_length_ft: f64,
    /// 전체 길이 [ft]
    pub total_length_ft: f64,
    /// 수두손실 [ft]
    pub head_loss_ft: f64,
    /// 압력강하 [psi]
    pub pressure_drop_psi: f64,
}

/// 한 운전점의 전체 수리 계산을 수행한다.
///
/// 입력 불변식(내경 > 0, 점도 > 0 등)의 검증은 호출자 몫이며 계산 자체는
/// 실패하지 않는다. 마찰계수 스캔이 소진된 경우에만 -1 센티널이 결과에 실려
/// 하류 값들이 눈에 띄게 틀린 수치로 전파된다.
pub fn calculate(input: &PipeFlowInput) -> PipeFlowResult {
    let kinematic_viscosity_ft2_per_s =
        geometry::kinematic_viscosity(input.viscosity_cp, input.specific_gravity);
    let diameter_ft = geometry::diameter_in_feet(input.diameter_in);
    let flow_area_ft2 = geometry::flow_area(diameter_ft);
    let flow_rate_cfs = geometry::flow_rate_cfs(input.flow_gpm);
    let velocity_ft_per_s = geometry::velocity(flow_rate_cfs, flow_area_ft2);
    let shear_rate_per_s = geometry::shear_rate(input.flow_gpm, input.diameter_in);
    let relative_roughness = geometry::relative_roughness(diameter_ft);
    let reynolds_number =
        geometry::reynolds_number(diameter_ft, velocity_ft_per_s, kinematic_viscosity_ft2_per_s);

    let darcy_chart = friction::build_darcy_chart(diameter_ft, reynolds_number);
    let friction_factor = friction::find_friction_factor(reynolds_number, &darcy_chart);

    // 등가 길이는 마찰계수와 내경이 정해진 뒤에 계산한다.
    let equivalent = |kind: FittingKind| {
        losses::equivalent_length(
            kind.coefficient(),
            diameter_ft,
            friction_factor,
            input.fittings.count(kind),
        )
    };
    let equivalent_lengths = EquivalentLengths {
        nineties_ft: equivalent(FittingKind::NinetyEll),
        fortyfives_ft: equivalent(FittingKind::FortyFiveEll),
        tee_branches_ft: equivalent(FittingKind::TeeBranch),
        tee_lines_ft: equivalent(FittingKind::TeeLine),
        globe_valves_ft: equivalent(FittingKind::GlobeValve),
        gate_valves_ft: equivalent(FittingKind::GateValve),
        swing_checks_ft: equivalent(FittingKind::SwingCheck),
        angle_valves_ft: equivalent(FittingKind::AngleValve),
    };
    let total_fitting_length_ft = equivalent_lengths.sum();
    let total_length_ft = losses::total_length(input.straight_length_ft, total_fitting_length_ft);

    // 수두손실과 압력강하는 마지막에 계산한다.
    let head_loss_ft = losses::head_loss(
        friction_factor,
        total_length_ft,
        velocity_ft_per_s,
        diameter_ft,
        input.vertical_rise_ft,
    );
    let pressure_drop_psi = losses::pressure_drop(head_loss_ft, input.specific_gravity);

    PipeFlowResult {
        kinematic_viscosity_ft2_per_s,
        diameter_ft,
        flow_area_ft2,
        flow_rate_cfs,
        velocity_ft_per_s,
        shear_rate_per_s,
        relative_roughness,
        reynolds_number,
        darcy_chart,
        friction_factor,
        equivalent_lengths,
        total_fitting_length_ft,
        total_length_ft,
        head_loss_ft,
        pressure_drop_psi,
    }
}
