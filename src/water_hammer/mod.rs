//! 밸브 급폐쇄 시 수격(water hammer) 압력 서지를 추정하는 핵심 계산 모듈.
//!
//! 계산 순서는 단위 환산 → 유속/파속(Korteweg) → 밸브 폐쇄 유효 속도 → Joukowsky 압력
//! 상승 → 감쇠 코사인 과도 응답이다. 모든 함수는 상태가 없고 I/O 를 하지 않는다.
//! 마찰손실, 다중 구간 배관, 공동현상 등 특성곡선법(MOC) 수준의 해석은 다루지 않는다.

pub mod inputs;
pub mod joukowsky;
pub mod simulation;
pub mod transient;
pub mod unit_conversion;
pub mod valve_closure;
pub mod wave_speed;

pub use inputs::{HammerError, InputField, InvalidReason, SimulationInputs};
pub use simulation::{simulate, Advisory, DerivedQuantities, Simulation};
pub use transient::{TransientModel, TransientSample, TransientSamples, TransientSeries};
pub use unit_conversion::SiInputs;
