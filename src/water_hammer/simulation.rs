use tracing::debug;

use super::inputs::{HammerError, SimulationInputs};
use super::joukowsky::{pa_to_psi, surge_pressure_pa};
use super::transient::{oscillation_frequency, TransientModel, TransientSeries, DAMPING_PER_S};
use super::unit_conversion::{to_si, SiInputs};
use super::valve_closure::{effective_factor, effective_velocity, is_rapid_closure};
use super::wave_speed::{flow_velocity, korteweg_wave_speed, pipe_area};

/// 계산 과정에서 얻는 중간 파생량. 진단 표시/로그용이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// 단면적 [m²]
    pub area_m2: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_s: f64,
    /// 압력파 속도 [m/s]
    pub speed_of_sound_m_s: f64,
    /// 폐쇄 시간 보정 계수 (0, 1]
    pub effective_factor: f64,
    /// 유효 속도 변화 [m/s]
    pub effective_velocity_m_s: f64,
    /// 압력 상승 [Pa]
    pub delta_p_pa: f64,
    /// 압력 상승 [psi]
    pub delta_p_psi: f64,
    /// 진동 주파수 [Hz]
    pub frequency_hz: f64,
    /// 감쇠 상수 [1/s]
    pub damping_per_s: f64,
    /// 참고용 임계 시간 2L/c [s]. 길이 0 이면 None. 계산에는 쓰지 않는다.
    pub critical_time_s: Option<f64>,
}

impl DerivedQuantities {
    /// SI 입력으로부터 파생량을 계산한다.
    pub fn from_si(si: &SiInputs) -> Self {
        let area_m2 = pipe_area(si.diameter_m);
        let velocity_m_s = flow_velocity(si.flow_rate_m3_s, area_m2);
        let speed_of_sound_m_s = korteweg_wave_speed(si.diameter_m, si.wall_thickness_m);
        let effective_velocity_m_s = effective_velocity(velocity_m_s, si.closure_time_s);
        let delta_p_pa = surge_pressure_pa(speed_of_sound_m_s, effective_velocity_m_s);
        let critical_time_s = if si.pipe_length_m > 0.0 {
            Some(2.0 * si.pipe_length_m / speed_of_sound_m_s)
        } else {
            None
        };
        Self {
            area_m2,
            velocity_m_s,
            speed_of_sound_m_s,
            effective_factor: effective_factor(si.closure_time_s),
            effective_velocity_m_s,
            delta_p_pa,
            delta_p_psi: pa_to_psi(delta_p_pa),
            frequency_hz: oscillation_frequency(speed_of_sound_m_s, si.pipe_length_m),
            damping_per_s: DAMPING_PER_S,
            critical_time_s,
        }
    }

    fn ensure_finite(&self) -> Result<(), HammerError> {
        let checks = [
            ("area", self.area_m2),
            ("velocity", self.velocity_m_s),
            ("speedOfSound", self.speed_of_sound_m_s),
            ("effectiveVelocity", self.effective_velocity_m_s),
            ("deltaP", self.delta_p_pa),
            ("deltaP_psi", self.delta_p_psi),
            ("frequency", self.frequency_hz),
        ];
        for (quantity, value) in checks {
            if !value.is_finite() {
                return Err(HammerError::NonFiniteResult { quantity });
            }
        }
        Ok(())
    }
}

/// 결과와 함께 사용자에게 보여줄 참고 사항. 계산값은 바꾸지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// 0.5 s 초과 폐쇄: 0.5 / t 근사 적용
    SlowClosureHeuristic { effective_factor: f64 },
    /// 급폐쇄 근사를 적용했지만 폐쇄 시간이 2L/c 보다 김
    ClosureSlowerThanCriticalTime {
        closure_time_s: f64,
        critical_time_s: f64,
    },
    /// 배관 길이 0: 1 Hz 대체 주파수 사용
    ZeroLengthFallback,
}

/// 한 번의 계산 결과. 요청마다 새로 만들고 보관하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub inputs: SimulationInputs,
    pub inputs_si: SiInputs,
    pub derived: DerivedQuantities,
    pub series: TransientSeries,
    pub advisories: Vec<Advisory>,
}

impl Simulation {
    /// 결과를 만든 과도 응답 모델. 샘플을 다시 지연 생성할 때 쓴다.
    pub fn transient_model(&self) -> TransientModel {
        TransientModel::new(self.derived.delta_p_psi, self.derived.frequency_hz)
    }
}

/// 입력값으로부터 수격 압력 과도 응답을 계산한다.
///
/// 입력 검증 → SI 환산 → 파생량 → 시계열 순으로 진행하며, 잘못된 입력은 파생량 계산 전에
/// `HammerError::InvalidInput` 으로 거부한다. 같은 입력이면 항상 같은 결과를 돌려준다.
pub fn simulate(inputs: &SimulationInputs) -> Result<Simulation, HammerError> {
    let inputs_si = to_si(inputs)?;
    let derived = DerivedQuantities::from_si(&inputs_si);
    derived.ensure_finite()?;
    debug!(
        area_m2 = derived.area_m2,
        velocity_m_s = derived.velocity_m_s,
        speed_of_sound_m_s = derived.speed_of_sound_m_s,
        effective_factor = derived.effective_factor,
        delta_p_psi = derived.delta_p_psi,
        frequency_hz = derived.frequency_hz,
        "water hammer derived quantities"
    );

    let series = TransientModel::new(derived.delta_p_psi, derived.frequency_hz).series();
    let advisories = advisories_for(&inputs_si, &derived);
    Ok(Simulation {
        inputs: *inputs,
        inputs_si,
        derived,
        series,
        advisories,
    })
}

fn advisories_for(si: &SiInputs, derived: &DerivedQuantities) -> Vec<Advisory> {
    let mut out = Vec::new();
    if !is_rapid_closure(si.closure_time_s) {
        out.push(Advisory::SlowClosureHeuristic {
            effective_factor: derived.effective_factor,
        });
    }
    match derived.critical_time_s {
        Some(critical_time_s)
            if is_rapid_closure(si.closure_time_s) && si.closure_time_s > critical_time_s =>
        {
            out.push(Advisory::ClosureSlowerThanCriticalTime {
                closure_time_s: si.closure_time_s,
                critical_time_s,
            });
        }
        None => out.push(Advisory::ZeroLengthFallback),
        _ => {}
    }
    out
}
