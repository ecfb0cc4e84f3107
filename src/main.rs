use std::process::ExitCode;

use clap::Parser;
use water_hammer_estimator::{app, config, i18n, logging};

/// 밸브 급폐쇄 수격 압력 추정기 (CLI)
#[derive(Debug, Parser)]
#[command(name = "water_hammer_estimator_cli", version, about)]
struct Cli {
    #[command(flatten)]
    inputs: app::InputArgs,
    /// 언어(auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 로그 레벨(error/warn/info/debug/trace). 생략 시 설정 파일 값
    #[arg(long)]
    log_level: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    logging::init(cli.log_level.as_deref().unwrap_or(&cfg.log_level));

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(language = %lang, "translator ready");

    match app::one_shot_form(&cli.inputs) {
        Some(form) => app::run_once(&form, &tr, cli.inputs.csv),
        None => app::run(&mut cfg, &mut tr),
    }
}
