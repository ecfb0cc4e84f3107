//! 유속과 배관 탄성을 고려한 압력파 전파 속도.

use std::f64::consts::PI;

/// 물 밀도 [kg/m³]
pub const WATER_DENSITY: f64 = 1000.0;
/// 물 체적탄성계수 [Pa]
pub const WATER_BULK_MODULUS: f64 = 2.2e9;
/// 배관 재질(강관) 영률 [Pa]. 사용자 설정 대상이 아니다.
pub const PIPE_YOUNGS_MODULUS: f64 = 200e9;

/// 원형 단면적 [m²]
pub fn pipe_area(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    PI * radius * radius
}

/// 평균 유속 [m/s]
pub fn flow_velocity(flow_rate_m3_s: f64, area_m2: f64) -> f64 {
    flow_rate_m3_s / area_m2
}

/// Korteweg 식으로 탄성 배관 내 압력파 속도 [m/s]를 구한다.
///
/// `c = sqrt(K / (ρ (1 + K D / (E e))))`
///
/// 두께 `wall_thickness_m` 는 0보다 커야 한다. 입력 검증 단계에서 보장된다.
pub fn korteweg_wave_speed(diameter_m: f64, wall_thickness_m: f64) -> f64 {
    let elasticity = (WATER_BULK_MODULUS * diameter_m) / (PIPE_YOUNGS_MODULUS * wall_thickness_m);
    (WATER_BULK_MODULUS / (WATER_DENSITY * (1.0 + elasticity))).sqrt()
}

/// 강체 배관 한계 파속 sqrt(K/ρ) ≈ 1483 m/s.
pub fn rigid_pipe_wave_speed() -> f64 {
    (WATER_BULK_MODULUS / WATER_DENSITY).sqrt()
}
