//! 수격 압력 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 계산을 공유한다.

pub mod app;
pub mod chart;
pub mod config;
pub mod conversion;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;
pub mod water_hammer;
