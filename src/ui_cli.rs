use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::conversion;
use crate::conversion::QuantityKind;
use crate::piping::{self, FittingCounts, PipeFlowInput, PipeFlowResult};
use crate::units::{
    convert_flow, convert_length, convert_viscosity, FlowUnit, LengthUnit, ViscosityUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    HeadLoss,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Pipe Hydraulics Toolbox ===");
    println!("1) 배관 수두손실/압력강하 계산");
    println!("2) 단위 변환기");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::HeadLoss),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 수두손실 계산 메뉴를 처리한다.
///
/// 설정된 기본 단위로 입력을 받아 계산기 내부 단위(GPM, in, ft, cP)로 환산한
/// 뒤 계산을 호출하고 결과 레코드를 출력한다.
pub fn handle_head_loss(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 배관 수두손실 계산 --");
    let units = &cfg.default_units;

    let flow = read_f64(&format!("유량 [{}]: ", units.flow.label()))?;
    let flow_gpm = convert_flow(flow, units.flow, FlowUnit::GalPerMin);

    let diameter = read_f64(&format!("배관 내경 [{}]: ", units.diameter.label()))?;
    let diameter_in = convert_length(diameter, units.diameter, LengthUnit::Inch);

    let length = read_f64(&format!("직관 길이 [{}]: ", units.length.label()))?;
    let straight_length_ft = convert_length(length, units.length, LengthUnit::Foot);

    let viscosity = read_f64(&format!("점도 [{}]: ", units.viscosity.label()))?;
    let viscosity_cp = convert_viscosity(viscosity, units.viscosity, ViscosityUnit::Centipoise);

    let specific_gravity = read_f64("비중 (물=1): ")?;

    let rise = read_f64(&format!("수직 상승 [{}]: ", units.length.label()))?;
    let vertical_rise_ft = convert_length(rise, units.length, LengthUnit::Foot);

    println!("피팅 개수를 입력하세요 (없으면 0):");
    let fittings = FittingCounts {
        nineties: read_f64("  90° 엘보: ")?,
        fortyfives: read_f64("  45° 엘보: ")?,
        tee_branches: read_f64("  티(분기류): ")?,
        tee_lines: read_f64("  티(직통류): ")?,
        globe_valves: read_f64("  글로브 밸브: ")?,
        gate_valves: read_f64("  게이트 밸브: ")?,
        swing_checks: read_f64("  스윙 체크 밸브: ")?,
        angle_valves: read_f64("  앵글 밸브: ")?,
    };

    let input = PipeFlowInput {
        flow_gpm,
        diameter_in,
        straight_length_ft,
        viscosity_cp,
        specific_gravity,
        vertical_rise_ft,
        fittings,
    };
    app::validate_input(&input)?;
    let result = piping::calculate(&input);
    print_result(&result);
    Ok(())
}

fn print_result(result: &PipeFlowResult) {
    println!("\n[기초량]");
    println!("  동점성계수: {} ft²/s", result.kinematic_viscosity_ft2_per_s);
    println!("  내경: {} ft", result.diameter_ft);
    println!("  유동 단면적: {} ft²", result.flow_area_ft2);
    println!("  유량: {} ft³/s", result.flow_rate_cfs);
    println!("  유속: {} ft/s", result.velocity_ft_per_s);
    println!("  전단율: {} 1/s", result.shear_rate_per_s);
    println!("  상대 조도 ε/D: {}", result.relative_roughness);
    println!("  레이놀즈수: {}", result.reynolds_number);
    println!("[마찰계수]");
    if result.friction_factor < 0.0 {
        println!("  탐색 실패: 센티널 {} (결과를 신뢰하지 마세요)", result.friction_factor);
    } else {
        println!("  Darcy 마찰계수: {}", result.friction_factor);
    }
    println!("[등가 길이]");
    println!("  90° 엘보: {} ft", result.equivalent_lengths.nineties_ft);
    println!("  45° 엘보: {} ft", result.equivalent_lengths.fortyfives_ft);
    println!("  티(분기류): {} ft", result.equivalent_lengths.tee_branches_ft);
    println!("  티(직통류): {} ft", result.equivalent_lengths.tee_lines_ft);
    println!("  글로브 밸브: {} ft", result.equivalent_lengths.globe_valves_ft);
    println!("  게이트 밸브: {} ft", result.equivalent_lengths.gate_valves_ft);
    println!("  스윙 체크 밸브: {} ft", result.equivalent_lengths.swing_checks_ft);
    println!("  앵글 밸브: {} ft", result.equivalent_lengths.angle_valves_ft);
    println!("  피팅 합계: {} ft", result.total_fitting_length_ft);
    println!("[손실]");
    println!("  전체 길이: {} ft", result.total_length_ft);
    println!("  수두손실: {} ft", result.head_loss_ft);
    println!("  압력강하: {} psi", result.pressure_drop_psi);
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 유량  2) 길이  3) 점도");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        match sel.trim() {
            "1" => break QuantityKind::Flow,
            "2" => break QuantityKind::Length,
            "3" => break QuantityKind::Viscosity,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: gpm, in, cP): ")?;
    let to_unit = read_line("변환 단위(ex: m3/h, mm, Pa.s): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 기본 단위: 유량 {}, 내경 {}, 길이 {}, 점도 {}",
        cfg.default_units.flow.label(),
        cfg.default_units.diameter.label(),
        cfg.default_units.length.label(),
        cfg.default_units.viscosity.label()
    );
    println!("1) 영국식 (GPM / in / ft / cP)");
    println!("2) 미터법 (m3/h / mm / m / Pa·s)");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            cfg.default_units.flow = FlowUnit::GalPerMin;
            cfg.default_units.diameter = LengthUnit::Inch;
            cfg.default_units.length = LengthUnit::Foot;
            cfg.default_units.viscosity = ViscosityUnit::Centipoise;
        }
        "2" => {
            cfg.default_units.flow = FlowUnit::CubicMeterPerHour;
            cfg.default_units.diameter = LengthUnit::Millimeter;
            cfg.default_units.length = LengthUnit::Meter;
            cfg.default_units.viscosity = ViscosityUnit::PascalSecond;
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
