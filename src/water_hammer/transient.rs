//! Joukowsky 피크 이후의 압력 감쇠를 감쇠 코사인 진동으로 근사한다.

use std::f64::consts::PI;

/// 시뮬레이션 구간 [s]
pub const SIMULATION_WINDOW_S: f64 = 2.0;
/// 샘플 간격 [s]
pub const TIME_STEP_S: f64 = 0.002;
/// 감쇠 상수 [1/s]. 사용자 설정 대상이 아니다.
pub const DAMPING_PER_S: f64 = 3.0;
/// 배관 길이가 0 일 때 쓰는 진동 주파수 [Hz]
pub const FALLBACK_FREQUENCY_HZ: f64 = 1.0;

/// t=0 을 포함한 샘플 개수. floor(2 / 0.002) + 1 = 1001.
pub fn sample_count() -> usize {
    (SIMULATION_WINDOW_S / TIME_STEP_S).floor() as usize + 1
}

/// 압력파 왕복 주파수 c / 2L [Hz]. 길이가 0 이하면 1 Hz 를 돌려준다.
pub fn oscillation_frequency(wave_speed_m_s: f64, pipe_length_m: f64) -> f64 {
    if pipe_length_m > 0.0 {
        wave_speed_m_s / (2.0 * pipe_length_m)
    } else {
        FALLBACK_FREQUENCY_HZ
    }
}

/// 한 시점의 압력 샘플.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientSample {
    /// 시간 [s]
    pub time_s: f64,
    /// 서지 압력 [psi]
    pub pressure_psi: f64,
}

/// 감쇠 코사인 과도 응답 모델.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientModel {
    pub peak_psi: f64,
    pub frequency_hz: f64,
    pub damping_per_s: f64,
    pub time_step_s: f64,
    pub sample_count: usize,
}

impl TransientModel {
    /// 고정 구간/간격/감쇠로 모델을 만든다.
    pub fn new(peak_psi: f64, frequency_hz: f64) -> Self {
        Self {
            peak_psi,
            frequency_hz,
            damping_per_s: DAMPING_PER_S,
            time_step_s: TIME_STEP_S,
            sample_count: sample_count(),
        }
    }

    /// p(t) = ΔP · exp(−ζt) · cos(2πft) [psi]
    pub fn pressure_at(&self, time_s: f64) -> f64 {
        self.peak_psi
            * (-self.damping_per_s * time_s).exp()
            * (2.0 * PI * self.frequency_hz * time_s).cos()
    }

    /// i 번째 샘플.
    pub fn sample(&self, index: usize) -> TransientSample {
        let time_s = index as f64 * self.time_step_s;
        TransientSample {
            time_s,
            pressure_psi: self.pressure_at(time_s),
        }
    }

    /// 처음부터 다시 읽을 수 있는 지연 샘플 시퀀스.
    pub fn samples(&self) -> TransientSamples {
        TransientSamples {
            model: *self,
            next: 0,
        }
    }

    pub fn series(&self) -> TransientSeries {
        TransientSeries {
            samples: self.samples().collect(),
        }
    }
}

/// `TransientModel::samples` 가 돌려주는 반복자.
#[derive(Debug, Clone)]
pub struct TransientSamples {
    model: TransientModel,
    next: usize,
}

impl Iterator for TransientSamples {
    type Item = TransientSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.model.sample_count {
            return None;
        }
        let sample = self.model.sample(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.model.sample_count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TransientSamples {}

/// 시간 순으로 정렬된 압력-시간 샘플 모음.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransientSeries {
    samples: Vec<TransientSample>,
}

impl TransientSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TransientSample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&TransientSample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransientSample> {
        self.samples.iter()
    }

    /// 압력 축 [psi]
    pub fn pressures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.pressure_psi).collect()
    }
}

impl<'a> IntoIterator for &'a TransientSeries {
    type Item = &'a TransientSample;
    type IntoIter = std::slice::Iter<'a, TransientSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_holds_1001_samples() {
        assert_eq!(sample_count(), 1001);
        let model = TransientModel::new(10.0, 5.0);
        assert_eq!(model.samples().len(), 1001);
    }

    #[test]
    fn samples_restart_from_zero() {
        let model = TransientModel::new(10.0, 5.0);
        let mut first = model.samples();
        first.nth(500);
        let again: Vec<_> = model.samples().take(2).collect();
        assert_eq!(again[0].time_s, 0.0);
        assert_eq!(again[0].pressure_psi, 10.0);
    }

    #[test]
    fn zero_length_uses_fallback() {
        assert_eq!(oscillation_frequency(1400.0, 0.0), FALLBACK_FREQUENCY_HZ);
        assert!((oscillation_frequency(1400.0, 70.0) - 10.0).abs() < 1e-12);
    }
}
