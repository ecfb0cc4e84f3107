//! 단위 정의 및 변환 모듈 모음.
//!
//! 입력 폼은 관용 단위(in, ft, gpm, ms)를 쓰고 계산은 SI 기준으로 수행하므로,
//! 환산 계수는 모두 이곳에 모아 두고 계산 모듈과 단위 변환기가 함께 사용한다.

pub mod flow;
pub mod length;
pub mod pressure;
pub mod time;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use time::{convert_time, TimeUnit};
