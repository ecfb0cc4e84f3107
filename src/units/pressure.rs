use serde::{Deserialize, Serialize};

/// 1 psi 당 Pa. Joukowsky 결과를 psi 로 표시할 때 쓰는 값과 동일하다.
pub const PA_PER_PSI: f64 = 6894.76;
const PA_PER_BAR: f64 = 100_000.0;

/// 압력 단위. 서지 압력은 상승분(차압)이므로 게이지/절대 구분 없이 Pa 기준으로 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
}

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pascal(to_pascal(value, from), to)
}
