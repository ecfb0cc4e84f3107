use serde::{Deserialize, Serialize};

/// US gpm 1 당 m³/s. 계산 결과 호환을 위해 유효숫자 4자리 값을 그대로 쓴다.
pub const M3S_PER_US_GPM: f64 = 0.00006309;

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    /// US gallon per minute
    UsGpm,
}

/// 주어진 유량을 m³/s 로 환산한다.
pub fn to_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::UsGpm => value * M3S_PER_US_GPM,
    }
}

fn from_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value * 3600.0,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::UsGpm => value / M3S_PER_US_GPM,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_cubic_meter_per_second(to_cubic_meter_per_second(value, from), to)
}
