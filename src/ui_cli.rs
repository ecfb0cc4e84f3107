use std::io::{self, Write};

use crate::app::AppError;
use crate::chart::{ChartData, ChartHandle, ChartRenderer, ChartSlot};
use crate::config::Config;
use crate::conversion;
use crate::form::FormInput;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::water_hammer::{self, InputField, Simulation, TransientSeries};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simulate,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIMULATE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Simulate),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 수격 계산 메뉴를 처리한다. 잘못된 입력이면 폼 전체를 다시 묻는다.
pub fn handle_simulate(
    tr: &Translator,
    cfg: &Config,
    renderer: &mut TextChart,
    chart: &mut ChartSlot<TextChartHandle>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIMULATE_HEADING));
    println!("{}", tr.t(keys::SIMULATE_NOTE));
    let defaults = FormInput::from_inputs(&cfg.defaults);
    let sim = loop {
        let mut form = FormInput::default();
        for field in InputField::ALL {
            let default = defaults.field(field);
            let raw = read_line(&format!("{} [{default}]: ", tr.field_label(field)))?;
            *form.field_mut(field) = if raw.trim().is_empty() {
                default.to_string()
            } else {
                raw.trim().to_string()
            };
        }
        match form.parse().and_then(|inputs| water_hammer::simulate(&inputs)) {
            Ok(sim) => break sim,
            Err(err) => {
                chart.clear();
                tracing::warn!(error = %err, "rejected simulation input");
                println!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.describe_error(&err));
            }
        }
    };
    print_simulation(tr, &sim);
    let handle = chart.show(renderer, &ChartData::from_series(&sim.series));
    println!("{}", handle.text());
    Ok(())
}

/// 파생량과 참고 사항을 출력한다.
pub fn print_simulation(tr: &Translator, sim: &Simulation) {
    let d = &sim.derived;
    let v = |key: &str, value: String| tr.tf(key, &[("value", value)]);
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{}", v(keys::RESULT_AREA, format!("{:.6}", d.area_m2)));
    println!("{}", v(keys::RESULT_VELOCITY, format!("{:.4}", d.velocity_m_s)));
    println!("{}", v(keys::RESULT_WAVE_SPEED, format!("{:.2}", d.speed_of_sound_m_s)));
    println!("{}", v(keys::RESULT_EFFECTIVE_FACTOR, format!("{:.4}", d.effective_factor)));
    println!(
        "{}",
        v(keys::RESULT_EFFECTIVE_VELOCITY, format!("{:.4}", d.effective_velocity_m_s))
    );
    println!(
        "{}",
        tr.tf(
            keys::RESULT_DELTA_P,
            &[
                ("pa", format!("{:.0}", d.delta_p_pa)),
                ("psi", format!("{:.2}", d.delta_p_psi)),
            ],
        )
    );
    println!("{}", v(keys::RESULT_FREQUENCY, format!("{:.3}", d.frequency_hz)));
    println!("{}", v(keys::RESULT_DAMPING, format!("{}", d.damping_per_s)));
    if let Some(tc) = d.critical_time_s {
        println!("{}", v(keys::RESULT_CRITICAL_TIME, format!("{tc:.4}")));
    }
    for advisory in &sim.advisories {
        println!("* {}", tr.describe_advisory(advisory));
    }
}

/// 전체 시계열을 `time_s,pressure_psi` CSV 로 쓴다.
pub fn write_csv<W: Write>(series: &TransientSeries, out: &mut W) -> io::Result<()> {
    writeln!(out, "time_s,pressure_psi")?;
    for s in series {
        writeln!(out, "{:.3},{}", s.time_s, s.pressure_psi)?;
    }
    out.flush()
}

/// 터미널용 차트. 시계열을 일정 간격으로 솎아 텍스트 표와 막대로 그린다.
#[derive(Debug, Clone)]
pub struct TextChart {
    /// 몇 샘플마다 한 줄을 출력할지
    pub stride: usize,
    /// 막대 최대 폭(문자 수)
    pub bar_width: usize,
}

impl Default for TextChart {
    fn default() -> Self {
        Self {
            stride: 50,
            bar_width: 30,
        }
    }
}

/// 렌더링된 텍스트 차트.
#[derive(Debug, Clone)]
pub struct TextChartHandle {
    text: String,
}

impl TextChartHandle {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ChartHandle for TextChartHandle {
    fn dispose(self) {
        tracing::trace!(bytes = self.text.len(), "text chart disposed");
    }
}

impl ChartRenderer for TextChart {
    type Handle = TextChartHandle;

    fn render(&mut self, data: &ChartData) -> TextChartHandle {
        let peak = data.values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let half = self.bar_width / 2;
        let mut text = format!("{}\n{:>8}  {:>12}\n", data.title, data.x_axis_title, data.y_axis_title);
        for (label, value) in data
            .labels
            .iter()
            .zip(&data.values)
            .step_by(self.stride.max(1))
        {
            let len = if peak > 0.0 {
                ((value.abs() / peak) * half as f64).round() as usize
            } else {
                0
            };
            let bar = if *value >= 0.0 {
                format!("{}|{}", " ".repeat(half), "#".repeat(len))
            } else {
                format!("{}{}|", " ".repeat(half - len.min(half)), "#".repeat(len.min(half)))
            };
            text.push_str(&format!("{label:>8}  {value:>12.3}  {bar}\n"));
        }
        TextChartHandle { text }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QuantityKind::ALL.get(i).copied())
        {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let units = kind.unit_codes().join(", ");
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.tf(
        keys::UNIT_CONVERSION_PROMPT_FROM_UNIT,
        &[("units", units.clone())],
    ))?;
    let to_unit = read_line(&tr.tf(keys::UNIT_CONVERSION_PROMPT_TO_UNIT, &[("units", units)]))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{}",
        tr.tf(
            keys::UNIT_CONVERSION_RESULT,
            &[("value", format!("{result}")), ("unit", to_unit.trim().to_string())],
        )
    );
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경이 있었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(keys::SETTINGS_CURRENT_LANGUAGE, &[("lang", cfg.language.clone())])
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let lang = match sel.trim() {
        "" => return Ok(false),
        "1" => "auto",
        "2" => "ko",
        "3" => "en",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = lang.to_string();
    println!("{}", tr.tf(keys::SETTINGS_SAVED, &[("lang", cfg.language.clone())]));
    Ok(true)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water_hammer::{simulate, SimulationInputs};

    #[test]
    fn csv_has_header_and_every_sample() {
        let sim = simulate(&SimulationInputs::default()).unwrap();
        let mut buf = Vec::new();
        write_csv(&sim.series, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1002);
        assert_eq!(lines[0], "time_s,pressure_psi");
        assert!(lines[1001].starts_with("2.000,"));
    }

    #[test]
    fn text_chart_thins_rows() {
        let sim = simulate(&SimulationInputs::default()).unwrap();
        let handle = TextChart::default().render(&ChartData::from_series(&sim.series));
        // 제목 + 머리글 + 1001/50 올림(21)행
        assert_eq!(handle.text().lines().count(), 23);
        assert!(handle.text().contains("0.000"));
    }

    #[test]
    fn text_chart_header_comes_from_chart_metadata() {
        let sim = simulate(&SimulationInputs::default()).unwrap();
        let handle = TextChart::default().render(&ChartData::from_series(&sim.series));
        let mut lines = handle.text().lines();
        assert_eq!(lines.next(), Some("Water Hammer Pressure Transient"));
        let header = lines.next().unwrap();
        assert!(header.contains("Time (s)"));
        assert!(header.contains("Pressure (psi)"));
    }
}
