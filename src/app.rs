use crate::chart::{ChartData, ChartSlot};
use crate::config::Config;
use crate::conversion;
use crate::form::FormInput;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice, TextChart, TextChartHandle};
use crate::water_hammer::{self, HammerError, InputField};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 수격 계산 오류
    #[error("수격 계산 오류: {0}")]
    Hammer(#[from] HammerError),
}

/// 명령행에서 받는 계산 입력값.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// 배관 내경 [in]
    #[arg(long)]
    pub diameter: Option<String>,
    /// 유량 [US gpm]
    #[arg(long)]
    pub flow_rate: Option<String>,
    /// 배관 길이 [ft]
    #[arg(long)]
    pub pipe_length: Option<String>,
    /// 배관 두께 [in]
    #[arg(long)]
    pub wall_thickness: Option<String>,
    /// 밸브 폐쇄 시간 [ms]
    #[arg(long)]
    pub closure_time: Option<String>,
    /// 전체 시계열을 CSV(time_s,pressure_psi)로 stdout에 출력(다섯 입력값이 모두 있을 때만)
    #[arg(long)]
    pub csv: bool,
}

impl InputArgs {
    fn values(&self) -> [(InputField, Option<&str>); 5] {
        [
            (InputField::Diameter, self.diameter.as_deref()),
            (InputField::FlowRate, self.flow_rate.as_deref()),
            (InputField::PipeLength, self.pipe_length.as_deref()),
            (InputField::WallThickness, self.wall_thickness.as_deref()),
            (InputField::ClosureTime, self.closure_time.as_deref()),
        ]
    }
}

/// 다섯 입력값이 모두 주어졌을 때만 비대화식 1회 계산용 폼을 만든다.
///
/// 하나라도 빠지면 `None` 이고 호출자는 대화식 메뉴로 간다.
pub fn one_shot_form(args: &InputArgs) -> Option<FormInput> {
    let values = args.values();
    let missing: Vec<&str> = values
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(field, _)| field.form_name())
        .collect();
    if !missing.is_empty() {
        if missing.len() < values.len() || args.csv {
            tracing::warn!(?missing, "incomplete command-line inputs, starting interactive menu");
        }
        return None;
    }
    let mut form = FormInput::default();
    for (field, value) in values {
        *form.field_mut(field) = value.unwrap_or_default().to_string();
    }
    Some(form)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 결과 표는 루프가 소유한 차트 슬롯 하나에만 살아 있고, 새 계산 전에 폐기된다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    let mut renderer = TextChart::default();
    let mut chart: ChartSlot<TextChartHandle> = ChartSlot::new();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Simulate => ui_cli::handle_simulate(tr, config, &mut renderer, &mut chart)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save()?;
                    let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                    tracing::info!(language = tr.language_code(), "language changed");
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 비대화식 1회 계산. `csv` 이면 전체 시계열을 CSV 로 stdout 에 쓴다.
pub fn run_once(form: &FormInput, tr: &Translator, csv: bool) -> Result<(), AppError> {
    let inputs = form.parse()?;
    let sim = water_hammer::simulate(&inputs)?;
    tracing::info!(
        delta_p_psi = sim.derived.delta_p_psi,
        samples = sim.series.len(),
        "simulation finished"
    );
    if csv {
        let stdout = std::io::stdout();
        ui_cli::write_csv(&sim.series, &mut stdout.lock())?;
    } else {
        ui_cli::print_simulation(tr, &sim);
        let mut renderer = TextChart::default();
        let mut chart: ChartSlot<TextChartHandle> = ChartSlot::new();
        let handle = chart.show(&mut renderer, &ChartData::from_series(&sim.series));
        println!("{}", handle.text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_given() -> InputArgs {
        InputArgs {
            diameter: Some("6".into()),
            flow_rate: Some("250".into()),
            pipe_length: Some("300".into()),
            wall_thickness: Some("0.28".into()),
            closure_time: Some("50".into()),
            csv: false,
        }
    }

    #[test]
    fn no_flags_starts_menu() {
        assert_eq!(one_shot_form(&InputArgs::default()), None);
    }

    #[test]
    fn some_flags_start_menu() {
        let args = InputArgs {
            diameter: Some("6".into()),
            ..InputArgs::default()
        };
        assert_eq!(one_shot_form(&args), None);

        let mut four = all_given();
        four.closure_time = None;
        assert_eq!(one_shot_form(&four), None);
    }

    #[test]
    fn csv_alone_starts_menu() {
        let args = InputArgs {
            csv: true,
            ..InputArgs::default()
        };
        assert_eq!(one_shot_form(&args), None);
    }

    #[test]
    fn all_flags_fill_the_form() {
        let form = one_shot_form(&all_given()).unwrap();
        assert_eq!(form.diameter, "6");
        assert_eq!(form.flow_rate, "250");
        assert_eq!(form.pipe_length, "300");
        assert_eq!(form.wall_thickness, "0.28");
        assert_eq!(form.closure_time, "50");

        let csv = InputArgs {
            csv: true,
            ..all_given()
        };
        assert_eq!(one_shot_form(&csv), Some(form));
    }
}
