use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::water_hammer::{Advisory, HammerError, InputField, InvalidReason};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIMULATE: &str = "main_menu.simulate";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SIMULATE_HEADING: &str = "simulate.heading";
    pub const SIMULATE_NOTE: &str = "simulate.note";

    pub const FIELD_DIAMETER: &str = "field.diameter";
    pub const FIELD_FLOW_RATE: &str = "field.flow_rate";
    pub const FIELD_PIPE_LENGTH: &str = "field.pipe_length";
    pub const FIELD_WALL_THICKNESS: &str = "field.wall_thickness";
    pub const FIELD_CLOSURE_TIME: &str = "field.closure_time";

    pub const REASON_MISSING: &str = "reason.missing";
    pub const REASON_NOT_A_NUMBER: &str = "reason.not_a_number";
    pub const REASON_NOT_FINITE: &str = "reason.not_finite";
    pub const REASON_NOT_POSITIVE: &str = "reason.not_positive";
    pub const REASON_NEGATIVE: &str = "reason.negative";
    pub const ERROR_INVALID_INPUT: &str = "error.invalid_input";
    pub const ERROR_NON_FINITE: &str = "error.non_finite";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_AREA: &str = "result.area";
    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const RESULT_WAVE_SPEED: &str = "result.wave_speed";
    pub const RESULT_EFFECTIVE_FACTOR: &str = "result.effective_factor";
    pub const RESULT_EFFECTIVE_VELOCITY: &str = "result.effective_velocity";
    pub const RESULT_DELTA_P: &str = "result.delta_p";
    pub const RESULT_FREQUENCY: &str = "result.frequency";
    pub const RESULT_DAMPING: &str = "result.damping";
    pub const RESULT_CRITICAL_TIME: &str = "result.critical_time";

    pub const ADVISORY_SLOW_CLOSURE: &str = "advisory.slow_closure";
    pub const ADVISORY_CRITICAL_TIME: &str = "advisory.critical_time";
    pub const ADVISORY_ZERO_LENGTH: &str = "advisory.zero_length";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const QUANTITY_LENGTH: &str = "quantity.length";
    pub const QUANTITY_FLOW: &str = "quantity.flow";
    pub const QUANTITY_PRESSURE: &str = "quantity.pressure";
    pub const QUANTITY_TIME: &str = "quantity.time";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_APP_TITLE: &str = "gui.app_title";
    pub const GUI_TAB_SIMULATE: &str = "gui.tab.simulate";
    pub const GUI_TAB_CONVERTER: &str = "gui.tab.converter";
    pub const GUI_BUTTON_SIMULATE: &str = "gui.button.simulate";
    pub const GUI_BUTTON_RESET: &str = "gui.button.reset";
    pub const GUI_BUTTON_FORMULA: &str = "gui.button.formula";
    pub const GUI_BUTTON_SETTINGS: &str = "gui.button.settings";
    pub const GUI_INPUTS_HEADING: &str = "gui.inputs.heading";
    pub const GUI_DERIVED_HEADING: &str = "gui.derived.heading";
    pub const GUI_ADVISORIES_HEADING: &str = "gui.advisories.heading";
    pub const GUI_CHART_EMPTY: &str = "gui.chart.empty";
    pub const GUI_FORMULA_TITLE: &str = "gui.formula.title";
    pub const GUI_FORMULA_BODY: &str = "gui.formula.body";
    pub const GUI_SETTINGS_LANGUAGE: &str = "gui.settings.language";
    pub const GUI_SETTINGS_ALPHA: &str = "gui.settings.alpha";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings.save";
    pub const GUI_SETTINGS_SAVED: &str = "gui.settings.saved";
    pub const GUI_CONVERTER_QUANTITY: &str = "gui.converter.quantity";
    pub const GUI_CONVERTER_VALUE: &str = "gui.converter.value";
    pub const GUI_CONVERTER_CONVERT: &str = "gui.converter.convert";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 영어 번역이 없으면 한국어를 쓴다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
        .to_string()
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }

    pub fn field_label(&self, field: InputField) -> String {
        self.t(match field {
            InputField::Diameter => keys::FIELD_DIAMETER,
            InputField::FlowRate => keys::FIELD_FLOW_RATE,
            InputField::PipeLength => keys::FIELD_PIPE_LENGTH,
            InputField::WallThickness => keys::FIELD_WALL_THICKNESS,
            InputField::ClosureTime => keys::FIELD_CLOSURE_TIME,
        })
    }

    /// 계산 오류를 현재 언어로 설명한다.
    pub fn describe_error(&self, err: &HammerError) -> String {
        match err {
            HammerError::InvalidInput { field, reason } => {
                let reason_key = match reason {
                    InvalidReason::Missing => keys::REASON_MISSING,
                    InvalidReason::NotANumber => keys::REASON_NOT_A_NUMBER,
                    InvalidReason::NotFinite => keys::REASON_NOT_FINITE,
                    InvalidReason::NotPositive => keys::REASON_NOT_POSITIVE,
                    InvalidReason::Negative => keys::REASON_NEGATIVE,
                };
                self.tf(
                    keys::ERROR_INVALID_INPUT,
                    &[
                        ("field", self.field_label(*field)),
                        ("reason", self.t(reason_key)),
                    ],
                )
            }
            HammerError::NonFiniteResult { quantity } => {
                self.tf(keys::ERROR_NON_FINITE, &[("quantity", quantity.to_string())])
            }
        }
    }

    pub fn describe_advisory(&self, advisory: &Advisory) -> String {
        match advisory {
            Advisory::SlowClosureHeuristic { effective_factor } => self.tf(
                keys::ADVISORY_SLOW_CLOSURE,
                &[("factor", format!("{effective_factor:.3}"))],
            ),
            Advisory::ClosureSlowerThanCriticalTime {
                closure_time_s,
                critical_time_s,
            } => self.tf(
                keys::ADVISORY_CRITICAL_TIME,
                &[
                    ("closure", format!("{closure_time_s:.3}")),
                    ("critical", format!("{critical_time_s:.4}")),
                ],
            ),
            Advisory::ZeroLengthFallback => self.t(keys::ADVISORY_ZERO_LENGTH),
        }
    }
}

/// `{key}` 형태의 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 중첩 키.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Water Hammer Estimator ===",
        MAIN_MENU_SIMULATE => "1) 수격 압력 계산",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SIMULATE_HEADING => "\n-- 수격 압력 계산 --",
        SIMULATE_NOTE => "참고: 강관(E=200 GPa), 물(ρ=1000 kg/m³, K=2.2 GPa) 기준입니다.",
        FIELD_DIAMETER => "배관 내경 [in]",
        FIELD_FLOW_RATE => "유량 [gpm]",
        FIELD_PIPE_LENGTH => "배관 길이 [ft]",
        FIELD_WALL_THICKNESS => "배관 두께 [in]",
        FIELD_CLOSURE_TIME => "밸브 폐쇄 시간 [ms]",
        REASON_MISSING => "값이 비어 있습니다.",
        REASON_NOT_A_NUMBER => "숫자를 입력하세요.",
        REASON_NOT_FINITE => "유한한 숫자여야 합니다.",
        REASON_NOT_POSITIVE => "0보다 커야 합니다.",
        REASON_NEGATIVE => "0 이상이어야 합니다.",
        ERROR_INVALID_INPUT => "입력 오류 - {field}: {reason}",
        ERROR_NON_FINITE => "계산 결과가 유한하지 않습니다({quantity}). 입력 범위를 확인하세요.",
        RESULT_HEADING => "\n-- 계산 결과 --",
        RESULT_AREA => "단면적: {value} m²",
        RESULT_VELOCITY => "유속: {value} m/s",
        RESULT_WAVE_SPEED => "압력파 속도(Korteweg): {value} m/s",
        RESULT_EFFECTIVE_FACTOR => "폐쇄 보정 계수: {value}",
        RESULT_EFFECTIVE_VELOCITY => "유효 속도 변화: {value} m/s",
        RESULT_DELTA_P => "압력 상승(Joukowsky): {pa} Pa = {psi} psi",
        RESULT_FREQUENCY => "진동 주파수: {value} Hz",
        RESULT_DAMPING => "감쇠 상수: {value} 1/s",
        RESULT_CRITICAL_TIME => "참고 임계 시간 2L/c: {value} s",
        ADVISORY_SLOW_CLOSURE => {
            "폐쇄 시간이 0.5 s 를 넘어 완폐쇄 근사(0.5/t, 계수 {factor})를 적용했습니다."
        }
        ADVISORY_CRITICAL_TIME => {
            "폐쇄 시간 {closure} s 가 임계 시간 2L/c={critical} s 보다 길지만 급폐쇄 근사를 적용했습니다. 결과는 보수적입니다."
        }
        ADVISORY_ZERO_LENGTH => "배관 길이가 0 이므로 진동 주파수 1 Hz 를 사용했습니다.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 길이  2) 유량  3) 압력  4) 시간",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위({units}): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위({units}): ",
        UNIT_CONVERSION_RESULT => "변환 결과: {value} {unit}",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        QUANTITY_LENGTH => "길이",
        QUANTITY_FLOW => "유량",
        QUANTITY_PRESSURE => "압력",
        QUANTITY_TIME => "시간",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어: {lang}",
        SETTINGS_OPTIONS => "1) 자동  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 {lang} 로 설정되었습니다.",
        GUI_APP_TITLE => "Water Hammer Estimator",
        GUI_TAB_SIMULATE => "수격 계산",
        GUI_TAB_CONVERTER => "단위 변환",
        GUI_BUTTON_SIMULATE => "계산",
        GUI_BUTTON_RESET => "기본값",
        GUI_BUTTON_FORMULA => "공식 참고",
        GUI_BUTTON_SETTINGS => "설정",
        GUI_INPUTS_HEADING => "배관/유동 조건",
        GUI_DERIVED_HEADING => "파생량",
        GUI_ADVISORIES_HEADING => "참고 사항",
        GUI_CHART_EMPTY => "입력값을 넣고 계산을 누르세요.",
        GUI_FORMULA_TITLE => "공식 참고",
        GUI_FORMULA_BODY => {
            "A = π(D/2)²,  v = Q/A\n\
             c = √(K / (ρ(1 + K·D/(E·e))))   (Korteweg)\n\
             t ≤ 0.5 s: Δv = v,  t > 0.5 s: Δv = v·0.5/t\n\
             ΔP = ρ·c·Δv   (Joukowsky),  psi = Pa / 6894.76\n\
             f = c / 2L (L = 0 이면 1 Hz),  ζ = 3 1/s\n\
             p(t) = ΔP·e^(−ζt)·cos(2πft),  0 ≤ t ≤ 2 s,  Δt = 0.002 s"
        }
        GUI_SETTINGS_LANGUAGE => "언어",
        GUI_SETTINGS_ALPHA => "창 불투명도",
        GUI_SETTINGS_SAVE => "저장",
        GUI_SETTINGS_SAVED => "설정을 저장했습니다.",
        GUI_CONVERTER_QUANTITY => "물리량",
        GUI_CONVERTER_VALUE => "값",
        GUI_CONVERTER_CONVERT => "변환",
        _ => "??",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Water Hammer Estimator ===",
        MAIN_MENU_SIMULATE => "1) Water hammer estimate",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit Converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SIMULATE_HEADING => "\n-- Water Hammer Estimate --",
        SIMULATE_NOTE => "Note: steel pipe (E=200 GPa), water (ρ=1000 kg/m³, K=2.2 GPa).",
        FIELD_DIAMETER => "Pipe diameter [in]",
        FIELD_FLOW_RATE => "Flow rate [gpm]",
        FIELD_PIPE_LENGTH => "Pipe length [ft]",
        FIELD_WALL_THICKNESS => "Wall thickness [in]",
        FIELD_CLOSURE_TIME => "Valve closure time [ms]",
        REASON_MISSING => "value is empty.",
        REASON_NOT_A_NUMBER => "not a number.",
        REASON_NOT_FINITE => "must be a finite number.",
        REASON_NOT_POSITIVE => "must be greater than 0.",
        REASON_NEGATIVE => "must not be negative.",
        ERROR_INVALID_INPUT => "Invalid input - {field}: {reason}",
        ERROR_NON_FINITE => "Result is not finite ({quantity}). Check the input range.",
        RESULT_HEADING => "\n-- Results --",
        RESULT_AREA => "Area: {value} m²",
        RESULT_VELOCITY => "Velocity: {value} m/s",
        RESULT_WAVE_SPEED => "Wave speed (Korteweg): {value} m/s",
        RESULT_EFFECTIVE_FACTOR => "Closure factor: {value}",
        RESULT_EFFECTIVE_VELOCITY => "Effective velocity change: {value} m/s",
        RESULT_DELTA_P => "Pressure rise (Joukowsky): {pa} Pa = {psi} psi",
        RESULT_FREQUENCY => "Oscillation frequency: {value} Hz",
        RESULT_DAMPING => "Damping: {value} 1/s",
        RESULT_CRITICAL_TIME => "Reference critical time 2L/c: {value} s",
        ADVISORY_SLOW_CLOSURE => {
            "Closure slower than 0.5 s: slow-closure heuristic 0.5/t applied (factor {factor})."
        }
        ADVISORY_CRITICAL_TIME => {
            "Closure time {closure} s exceeds the critical time 2L/c={critical} s, but the rapid-closure approximation was applied. Result is conservative."
        }
        ADVISORY_ZERO_LENGTH => "Pipe length is 0; fallback oscillation frequency of 1 Hz used.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Length  2) Flow  3) Pressure  4) Time",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit ({units}): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit ({units}): ",
        UNIT_CONVERSION_RESULT => "Result: {value} {unit}",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported number.",
        QUANTITY_LENGTH => "Length",
        QUANTITY_FLOW => "Flow",
        QUANTITY_PRESSURE => "Pressure",
        QUANTITY_TIME => "Time",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language: {lang}",
        SETTINGS_OPTIONS => "1) Auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Language set to {lang}.",
        GUI_APP_TITLE => "Water Hammer Estimator",
        GUI_TAB_SIMULATE => "Water hammer",
        GUI_TAB_CONVERTER => "Unit converter",
        GUI_BUTTON_SIMULATE => "Simulate",
        GUI_BUTTON_RESET => "Defaults",
        GUI_BUTTON_FORMULA => "Formula reference",
        GUI_BUTTON_SETTINGS => "Settings",
        GUI_INPUTS_HEADING => "Pipe / flow conditions",
        GUI_DERIVED_HEADING => "Derived quantities",
        GUI_ADVISORIES_HEADING => "Notes",
        GUI_CHART_EMPTY => "Enter the inputs and press Simulate.",
        GUI_FORMULA_TITLE => "Formula reference",
        GUI_FORMULA_BODY => {
            "A = π(D/2)²,  v = Q/A\n\
             c = √(K / (ρ(1 + K·D/(E·e))))   (Korteweg)\n\
             t ≤ 0.5 s: Δv = v,  t > 0.5 s: Δv = v·0.5/t\n\
             ΔP = ρ·c·Δv   (Joukowsky),  psi = Pa / 6894.76\n\
             f = c / 2L (1 Hz when L = 0),  ζ = 3 1/s\n\
             p(t) = ΔP·e^(−ζt)·cos(2πft),  0 ≤ t ≤ 2 s,  Δt = 0.002 s"
        }
        GUI_SETTINGS_LANGUAGE => "Language",
        GUI_SETTINGS_ALPHA => "Window opacity",
        GUI_SETTINGS_SAVE => "Save",
        GUI_SETTINGS_SAVED => "Settings saved.",
        GUI_CONVERTER_QUANTITY => "Quantity",
        GUI_CONVERTER_VALUE => "Value",
        GUI_CONVERTER_CONVERT => "Convert",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[result]\nheading = \"Out\"\n").unwrap();
        assert_eq!(map.get("result.heading").map(String::as_str), Some("Out"));
    }

    #[test]
    fn errors_are_localized() {
        let err = HammerError::invalid(InputField::ClosureTime, InvalidReason::NotPositive);
        assert_eq!(
            Translator::new("en").describe_error(&err),
            "Invalid input - Valve closure time [ms]: must be greater than 0."
        );
    }
}
