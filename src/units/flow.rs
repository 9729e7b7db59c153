use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 GPM(미국 갤런/분)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    GalPerMin,
    CubicMeterPerHour,
    LiterPerMin,
}

impl FlowUnit {
    /// 프롬프트 표기용 단위 기호.
    pub fn label(self) -> &'static str {
        match self {
            FlowUnit::GalPerMin => "GPM",
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::LiterPerMin => "L/min",
        }
    }
}

fn to_gpm(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::GalPerMin => value,
        FlowUnit::CubicMeterPerHour => value * 4.402868,
        FlowUnit::LiterPerMin => value / 3.785412,
    }
}

fn from_gpm(value_gpm: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::GalPerMin => value_gpm,
        FlowUnit::CubicMeterPerHour => value_gpm / 4.402868,
        FlowUnit::LiterPerMin => value_gpm * 3.785412,
    }
}

/// 체적 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let gpm = to_gpm(value, from);
    from_gpm(gpm, to)
}
