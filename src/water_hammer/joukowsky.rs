use crate::units::pressure::{from_pascal, PressureUnit};

use super::wave_speed::WATER_DENSITY;

/// Joukowsky 식 ΔP = ρ c Δv [Pa]
pub fn surge_pressure_pa(wave_speed_m_s: f64, effective_velocity_m_s: f64) -> f64 {
    WATER_DENSITY * wave_speed_m_s * effective_velocity_m_s
}

/// Pa → psi (1 psi = 6894.76 Pa)
pub fn pa_to_psi(pressure_pa: f64) -> f64 {
    from_pascal(pressure_pa, PressureUnit::Psi)
}
