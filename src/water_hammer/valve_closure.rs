//! 밸브 폐쇄 시간에 따른 유효 속도 변화.
//!
//! 2L/c 임계시간 기준이 아닌 2구간 근사를 쓴다. 기존 계산 결과와의 호환을 위해
//! 임계값(0.5 s)과 완폐쇄 식(0.5 / t)은 그대로 유지해야 한다.

/// 급폐쇄로 간주하는 최대 폐쇄 시간 [s]
pub const RAPID_CLOSURE_LIMIT_S: f64 = 0.5;

/// 폐쇄 시간 동안 차단되는 속도의 비율.
///
/// 0.5 s 이하면 1(순간 폐쇄), 그보다 길면 `0.5 / t`. 경계에서 두 식 모두 1 이다.
pub fn effective_factor(closure_time_s: f64) -> f64 {
    if closure_time_s <= RAPID_CLOSURE_LIMIT_S {
        1.0
    } else {
        RAPID_CLOSURE_LIMIT_S / closure_time_s
    }
}

/// 급폐쇄 구간인지 여부.
pub fn is_rapid_closure(closure_time_s: f64) -> bool {
    closure_time_s <= RAPID_CLOSURE_LIMIT_S
}

/// 유효 속도 변화 [m/s]
pub fn effective_velocity(velocity_m_s: f64, closure_time_s: f64) -> f64 {
    velocity_m_s * effective_factor(closure_time_s)
}
