use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::water_hammer::SimulationInputs;

/// 설정 파일 기본 경로(작업 디렉터리 기준).
pub const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 계산 결과는 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드(auto/ko/en). auto 면 시스템 로케일을 따른다.
    pub language: String,
    /// 언어팩(<lang>.toml) 디렉터리
    pub language_pack_dir: Option<String>,
    /// 로그 레벨(error/warn/info/debug/trace)
    pub log_level: String,
    /// GUI 창 불투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 입력 폼 기본값
    pub defaults: SimulationInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            log_level: "info".to_string(),
            window_alpha: 1.0,
            defaults: SimulationInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_toml_str("language = \"ko\"\n").unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.defaults, SimulationInputs::default());
    }

    #[test]
    fn defaults_table_survives_serialization() {
        let mut cfg = Config::default();
        cfg.defaults.closure_time_ms = 750.0;
        cfg.language_pack_dir = Some("locales".into());
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("[defaults]"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = Config::from_toml_str("window_alpha = \"opaque\"").unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }
}
