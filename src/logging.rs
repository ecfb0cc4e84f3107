//! tracing 구독자 초기화. 로그는 stderr 로 보내 stdout(CSV 출력 등)과 섞이지 않게 한다.

use std::io::IsTerminal;

use tracing::Level;

/// 설정 문자열을 로그 레벨로 해석한다. 알 수 없는 값이면 INFO.
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// 터미널일 때만 ANSI 색상을 쓴다. 파일/파이프로 돌린 로그는 평문.
pub fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

/// 전역 fmt 구독자를 설치한다. 이미 설치되어 있으면 무시한다.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_writer(std::io::stderr)
        .with_ansi(ansi_enabled(&std::io::stderr()))
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level(" DEBUG "), Level::DEBUG);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn redirected_output_has_no_colour() {
        let path = std::env::temp_dir().join("water_hammer_estimator_log_test.txt");
        let file = std::fs::File::create(&path).unwrap();
        assert!(!ansi_enabled(&file));
        drop(file);
        let _ = std::fs::remove_file(&path);
    }
}
