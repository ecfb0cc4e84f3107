//! 입력 폼 문자열을 시뮬레이션 입력값으로 해석한다.
//!
//! CLI 프롬프트와 GUI 텍스트 필드 모두 이 경로를 거친다. 폼 제출은 동기식
//! `FormInput::parse` → `water_hammer::simulate` 호출로 끝난다.

use crate::water_hammer::{HammerError, InputField, InvalidReason, SimulationInputs};

/// 폼 필드명(`diameter`, `flowRate`, `pipeLength`, `wallThickness`, `closureTime`)별 원시 문자열.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub diameter: String,
    pub flow_rate: String,
    pub pipe_length: String,
    pub wall_thickness: String,
    pub closure_time: String,
}

impl FormInput {
    /// 숫자 입력으로 폼을 채운다(설정 기본값 표시용).
    pub fn from_inputs(inputs: &SimulationInputs) -> Self {
        let mut form = Self::default();
        for field in InputField::ALL {
            *form.field_mut(field) = inputs.get(field).to_string();
        }
        form
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Diameter => &self.diameter,
            InputField::FlowRate => &self.flow_rate,
            InputField::PipeLength => &self.pipe_length,
            InputField::WallThickness => &self.wall_thickness,
            InputField::ClosureTime => &self.closure_time,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Diameter => &mut self.diameter,
            InputField::FlowRate => &mut self.flow_rate,
            InputField::PipeLength => &mut self.pipe_length,
            InputField::WallThickness => &mut self.wall_thickness,
            InputField::ClosureTime => &mut self.closure_time,
        }
    }

    /// 폼 필드명으로 값을 설정한다. 알 수 없는 이름이면 false.
    pub fn set_by_name(&mut self, name: &str, value: &str) -> bool {
        match InputField::ALL.iter().find(|f| f.form_name() == name) {
            Some(field) => {
                *self.field_mut(*field) = value.to_string();
                true
            }
            None => false,
        }
    }

    /// 다섯 항목을 숫자로 해석하고 물리적 전제조건까지 검사한다.
    pub fn parse(&self) -> Result<SimulationInputs, HammerError> {
        let mut inputs = SimulationInputs::default();
        for field in InputField::ALL {
            inputs.set(field, parse_field(field, self.field(field))?);
        }
        inputs.validate()?;
        Ok(inputs)
    }
}

/// 한 항목을 해석한다. 빈 값/숫자 아님/비유한값을 구분해 거부한다.
pub fn parse_field(field: InputField, raw: &str) -> Result<f64, HammerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HammerError::invalid(field, InvalidReason::Missing));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| HammerError::invalid(field, InvalidReason::NotANumber))?;
    if !value.is_finite() {
        return Err(HammerError::invalid(field, InvalidReason::NotFinite));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormInput {
        FormInput {
            diameter: "4".into(),
            flow_rate: " 100 ".into(),
            pipe_length: "100".into(),
            wall_thickness: "0.25".into(),
            closure_time: "100".into(),
        }
    }

    #[test]
    fn parses_trimmed_numbers() {
        let inputs = filled().parse().unwrap();
        assert_eq!(inputs, SimulationInputs::default());
    }

    #[test]
    fn empty_and_garbage_are_distinguished() {
        let mut form = filled();
        form.wall_thickness.clear();
        assert_eq!(
            form.parse().unwrap_err(),
            HammerError::invalid(InputField::WallThickness, InvalidReason::Missing)
        );
        form.wall_thickness = "abc".into();
        assert_eq!(
            form.parse().unwrap_err(),
            HammerError::invalid(InputField::WallThickness, InvalidReason::NotANumber)
        );
        form.wall_thickness = "inf".into();
        assert_eq!(
            form.parse().unwrap_err(),
            HammerError::invalid(InputField::WallThickness, InvalidReason::NotFinite)
        );
    }

    #[test]
    fn set_by_form_name() {
        let mut form = FormInput::default();
        assert!(form.set_by_name("closureTime", "250"));
        assert!(!form.set_by_name("closure_time", "250"));
        assert_eq!(form.closure_time, "250");
    }
}
