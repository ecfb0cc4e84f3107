use crate::units::{flow, length, time, FlowUnit, LengthUnit, TimeUnit};

use super::inputs::{HammerError, SimulationInputs};

/// SI 기준으로 환산된 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiInputs {
    /// 내경 [m]
    pub diameter_m: f64,
    /// 두께 [m]
    pub wall_thickness_m: f64,
    /// 배관 길이 [m]
    pub pipe_length_m: f64,
    /// 체적 유량 [m³/s]
    pub flow_rate_m3_s: f64,
    /// 밸브 폐쇄 시간 [s]
    pub closure_time_s: f64,
}

/// 관용 단위 입력을 검증한 뒤 SI 로 환산한다.
pub fn to_si(inputs: &SimulationInputs) -> Result<SiInputs, HammerError> {
    inputs.validate()?;
    Ok(SiInputs {
        diameter_m: length::to_meter(inputs.diameter_in, LengthUnit::Inch),
        wall_thickness_m: length::to_meter(inputs.wall_thickness_in, LengthUnit::Inch),
        pipe_length_m: length::to_meter(inputs.pipe_length_ft, LengthUnit::Foot),
        flow_rate_m3_s: flow::to_cubic_meter_per_second(inputs.flow_rate_gpm, FlowUnit::UsGpm),
        closure_time_s: time::to_second(inputs.closure_time_ms, TimeUnit::Millisecond),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customary_units_map_to_si() {
        let si = to_si(&SimulationInputs::default()).unwrap();
        assert!((si.diameter_m - 0.1016).abs() < 1e-12);
        assert!((si.wall_thickness_m - 0.00635).abs() < 1e-12);
        assert!((si.pipe_length_m - 30.48).abs() < 1e-9);
        assert!((si.flow_rate_m3_s - 0.006309).abs() < 1e-12);
        assert!((si.closure_time_s - 0.1).abs() < 1e-12);
    }
}
