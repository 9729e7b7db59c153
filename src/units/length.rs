use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 피트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Foot,
    Inch,
    Meter,
    Millimeter,
}

impl LengthUnit {
    /// 프롬프트 표기용 단위 기호.
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
        }
    }
}

fn to_feet(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Inch => value / 12.0,
        LengthUnit::Meter => value / 0.3048,
        LengthUnit::Millimeter => value / 304.8,
    }
}

fn from_feet(value_ft: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value_ft,
        LengthUnit::Inch => value_ft * 12.0,
        LengthUnit::Meter => value_ft * 0.3048,
        LengthUnit::Millimeter => value_ft * 304.8,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let ft = to_feet(value, from);
    from_feet(ft, to)
}
