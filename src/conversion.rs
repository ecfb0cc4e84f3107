use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `in`, `ft`, `gpm`, `m3/s`, `psi`, `kPa`, `ms` 등을 사용할 수 있다.
/// 대소문자는 구분하지 않는다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::VolumeFlow => {
            let from = parse_flow_unit(from_unit_str)?;
            let to = parse_flow_unit(to_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('³', "3")
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match normalize(s).as_str() {
        "m" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        "ft" | "feet" | "'" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match normalize(s).as_str() {
        "m3/s" | "cms" => Ok(FlowUnit::CubicMeterPerSecond),
        "m3/h" | "cmh" => Ok(FlowUnit::CubicMeterPerHour),
        "l/s" | "lps" => Ok(FlowUnit::LiterPerSecond),
        "gpm" | "usgpm" => Ok(FlowUnit::UsGpm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match normalize(s).as_str() {
        "pa" => Ok(PressureUnit::Pascal),
        "kpa" => Ok(PressureUnit::KiloPascal),
        "mpa" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match normalize(s).as_str() {
        "s" | "sec" => Ok(TimeUnit::Second),
        "ms" => Ok(TimeUnit::Millisecond),
        "min" => Ok(TimeUnit::Minute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
