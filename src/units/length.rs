use serde::{Deserialize, Serialize};

/// 1 in 당 미터.
pub const METERS_PER_INCH: f64 = 0.0254;
/// 1 ft 당 미터.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Inch,
    Foot,
}

/// 주어진 길이를 미터로 환산한다.
pub fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Inch => value * METERS_PER_INCH,
        LengthUnit::Foot => value * METERS_PER_FOOT,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Inch => value_m / METERS_PER_INCH,
        LengthUnit::Foot => value_m / METERS_PER_FOOT,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_meter(to_meter(value, from), to)
}
