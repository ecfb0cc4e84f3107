use serde::{Deserialize, Serialize};

/// 입력 폼의 다섯 항목. 폼 필드명(`diameter`, `flowRate` 등)과 1:1 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Diameter,
    FlowRate,
    PipeLength,
    WallThickness,
    ClosureTime,
}

impl InputField {
    /// 폼에 표시되는 순서.
    pub const ALL: [InputField; 5] = [
        InputField::Diameter,
        InputField::FlowRate,
        InputField::PipeLength,
        InputField::WallThickness,
        InputField::ClosureTime,
    ];

    /// 입력 폼 필드명.
    pub fn form_name(self) -> &'static str {
        match self {
            InputField::Diameter => "diameter",
            InputField::FlowRate => "flowRate",
            InputField::PipeLength => "pipeLength",
            InputField::WallThickness => "wallThickness",
            InputField::ClosureTime => "closureTime",
        }
    }

    /// 입력 단위 표기.
    pub fn unit_label(self) -> &'static str {
        match self {
            InputField::Diameter | InputField::WallThickness => "in",
            InputField::FlowRate => "gpm",
            InputField::PipeLength => "ft",
            InputField::ClosureTime => "ms",
        }
    }

    /// 배관 길이만 0 을 허용한다(0 이면 대체 주파수 사용).
    pub fn allows_zero(self) -> bool {
        matches!(self, InputField::PipeLength)
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.form_name())
    }
}

/// 입력값이 거부된 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// 값이 비어 있음
    Missing,
    /// 숫자로 해석할 수 없음
    NotANumber,
    /// NaN 또는 무한대
    NotFinite,
    /// 0 이하
    NotPositive,
    /// 음수
    Negative,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "값이 비어 있습니다."),
            InvalidReason::NotANumber => write!(f, "숫자를 입력하세요."),
            InvalidReason::NotFinite => write!(f, "유한한 숫자여야 합니다."),
            InvalidReason::NotPositive => write!(f, "0보다 커야 합니다."),
            InvalidReason::Negative => write!(f, "0 이상이어야 합니다."),
        }
    }
}

/// 수격 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HammerError {
    /// 입력값이 잘못된 경우. 파생량 계산 전에 거부한다.
    #[error("입력 오류 [{field}]: {reason}")]
    InvalidInput {
        field: InputField,
        reason: InvalidReason,
    },
    /// 입력 크기가 지나쳐 파생량이 유한하지 않게 된 경우
    #[error("계산 결과가 유한하지 않습니다 ({quantity}). 입력 범위를 확인하세요.")]
    NonFiniteResult { quantity: &'static str },
}

impl HammerError {
    pub fn invalid(field: InputField, reason: InvalidReason) -> Self {
        HammerError::InvalidInput { field, reason }
    }

    /// 문제가 된 입력 항목. 특정 항목으로 귀속되지 않으면 None.
    pub fn field(&self) -> Option<InputField> {
        match self {
            HammerError::InvalidInput { field, .. } => Some(*field),
            HammerError::NonFiniteResult { .. } => None,
        }
    }
}

/// 관용 단위로 받은 시뮬레이션 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// 배관 내경 [in]
    pub diameter_in: f64,
    /// 체적 유량 [US gpm]
    pub flow_rate_gpm: f64,
    /// 배관 길이 [ft]
    pub pipe_length_ft: f64,
    /// 배관 두께 [in]
    pub wall_thickness_in: f64,
    /// 밸브 폐쇄 시간 [ms]
    pub closure_time_ms: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            diameter_in: 4.0,
            flow_rate_gpm: 100.0,
            pipe_length_ft: 100.0,
            wall_thickness_in: 0.25,
            closure_time_ms: 100.0,
        }
    }
}

impl SimulationInputs {
    /// 항목별 값을 꺼낸다.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Diameter => self.diameter_in,
            InputField::FlowRate => self.flow_rate_gpm,
            InputField::PipeLength => self.pipe_length_ft,
            InputField::WallThickness => self.wall_thickness_in,
            InputField::ClosureTime => self.closure_time_ms,
        }
    }

    /// 항목별 값을 설정한다.
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::Diameter => self.diameter_in = value,
            InputField::FlowRate => self.flow_rate_gpm = value,
            InputField::PipeLength => self.pipe_length_ft = value,
            InputField::WallThickness => self.wall_thickness_in = value,
            InputField::ClosureTime => self.closure_time_ms = value,
        }
    }

    /// 물리적 전제조건을 검사한다.
    ///
    /// 모든 값은 유한해야 하며, 배관 길이를 제외한 항목은 0보다 커야 한다.
    /// 두께 0 은 Korteweg 식에서 0 나눗셈이 되므로 여기서 거부된다.
    pub fn validate(&self) -> Result<(), HammerError> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(HammerError::invalid(field, InvalidReason::NotFinite));
            }
            if field.allows_zero() {
                if value < 0.0 {
                    return Err(HammerError::invalid(field, InvalidReason::Negative));
                }
            } else if value <= 0.0 {
                return Err(HammerError::invalid(field, InvalidReason::NotPositive));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_accepted() {
        let inputs = SimulationInputs {
            pipe_length_ft: 0.0,
            ..SimulationInputs::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn first_offending_field_is_reported() {
        let inputs = SimulationInputs {
            flow_rate_gpm: 0.0,
            closure_time_ms: f64::NAN,
            ..SimulationInputs::default()
        };
        let err = inputs.validate().unwrap_err();
        assert_eq!(
            err,
            HammerError::invalid(InputField::FlowRate, InvalidReason::NotPositive)
        );
        assert_eq!(err.to_string(), "입력 오류 [flowRate]: 0보다 커야 합니다.");
    }
}
