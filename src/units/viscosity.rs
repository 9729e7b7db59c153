use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 센티푸아즈(cP)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    Centipoise,
    PascalSecond,
}

impl ViscosityUnit {
    /// 프롬프트 표기용 단위 기호.
    pub fn label(self) -> &'static str {
        match self {
            ViscosityUnit::Centipoise => "cP",
            ViscosityUnit::PascalSecond => "Pa·s",
        }
    }
}

fn to_centipoise(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        ViscosityUnit::PascalSecond => value * 1000.0,
    }
}

fn from_centipoise(value_cp: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value_cp,
        ViscosityUnit::PascalSecond => value_cp / 1000.0,
    }
}

/// 점도를 다른 단위로 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let cp = to_centipoise(value, from);
    from_centipoise(cp, to)
}
