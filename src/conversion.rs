use crate::units::*;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Flow,
    Length,
    Viscosity,
}

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `gpm`, `m3/h`, `in`, `mm`, `cP` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Flow => {
            let from = parse_flow_unit(from_unit_str)?;
            let to = parse_flow_unit(to_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
    }
}

fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "gpm" | "gal/min" => Ok(FlowUnit::GalPerMin),
        "m3/h" | "m^3/h" | "cmh" => Ok(FlowUnit::CubicMeterPerHour),
        "l/min" | "lpm" => Ok(FlowUnit::LiterPerMin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "ft" | "foot" => Ok(LengthUnit::Foot),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "cp" | "cps" => Ok(ViscosityUnit::Centipoise),
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
