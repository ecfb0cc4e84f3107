//! 차트 데이터 준비와 렌더링 핸들 관리.
//!
//! 살아 있는 차트는 항상 하나뿐이어야 한다. 전역 "마지막 차트" 슬롯 대신 호출자가
//! `ChartSlot` 을 소유하고, 새 차트를 그리기 전에 이전 핸들을 명시적으로 폐기한다.

use crate::water_hammer::TransientSeries;

pub const SERIES_LABEL: &str = "Pressure (psi)";
pub const X_AXIS_TITLE: &str = "Time (s)";
pub const Y_AXIS_TITLE: &str = "Pressure (psi)";
pub const CHART_TITLE: &str = "Water Hammer Pressure Transient";

/// 차트 협력자에게 넘기는 데이터. 라벨과 값은 같은 길이의 평행 배열이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// 시간 라벨(소수점 3자리 문자열)
    pub labels: Vec<String>,
    /// 압력 [psi]
    pub values: Vec<f64>,
    pub series_label: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub title: &'static str,
}

impl ChartData {
    pub fn from_series(series: &TransientSeries) -> Self {
        Self {
            labels: series.iter().map(|s| format_time_label(s.time_s)).collect(),
            values: series.pressures(),
            series_label: SERIES_LABEL,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
            title: CHART_TITLE,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 플로터용 [t, p] 좌표. 라벨 문자열을 다시 숫자로 읽지 않도록 인덱스로 시간을 복원한다.
    pub fn points(&self, time_step_s: f64) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64 * time_step_s, *p])
            .collect()
    }
}

/// 시간 라벨 형식(초, 소수점 3자리).
pub fn format_time_label(time_s: f64) -> String {
    format!("{time_s:.3}")
}

/// 렌더링된 차트 하나를 가리키는 폐기 가능한 핸들.
pub trait ChartHandle {
    /// 차트를 해제한다. 호출 후 핸들은 사용할 수 없다.
    fn dispose(self);
}

/// 차트를 그리고 핸들을 돌려주는 렌더러.
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn render(&mut self, data: &ChartData) -> Self::Handle;
}

/// 호출자가 소유하는 단일 차트 슬롯.
#[derive(Debug)]
pub struct ChartSlot<H: ChartHandle> {
    current: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이전 차트를 먼저 폐기한 뒤 새 차트를 그린다.
    pub fn show<R>(&mut self, renderer: &mut R, data: &ChartData) -> &H
    where
        R: ChartRenderer<Handle = H>,
    {
        self.clear();
        self.current.insert(renderer.render(data))
    }

    /// 현재 차트를 폐기한다. 잘못된 입력으로 차트를 지워야 할 때도 쓴다.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.dispose();
        }
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: ChartHandle> Drop for ChartSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
        next_id: usize,
    }

    struct RecordedHandle {
        id: usize,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ChartHandle for RecordedHandle {
        fn dispose(self) {
            self.events.borrow_mut().push(format!("dispose {}", self.id));
        }
    }

    impl ChartRenderer for Recorder {
        type Handle = RecordedHandle;

        fn render(&mut self, data: &ChartData) -> RecordedHandle {
            self.next_id += 1;
            self.events
                .borrow_mut()
                .push(format!("render {} ({} pts)", self.next_id, data.len()));
            RecordedHandle {
                id: self.next_id,
                events: Rc::clone(&self.events),
            }
        }
    }

    fn data() -> ChartData {
        ChartData {
            labels: vec!["0.000".into(), "0.002".into()],
            values: vec![1.0, 0.5],
            series_label: SERIES_LABEL,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
            title: CHART_TITLE,
        }
    }

    #[test]
    fn previous_chart_is_disposed_before_next_render() {
        let mut renderer = Recorder::default();
        let events = Rc::clone(&renderer.events);
        let mut slot = ChartSlot::new();
        slot.show(&mut renderer, &data());
        slot.show(&mut renderer, &data());
        assert_eq!(slot.current().map(|h| h.id), Some(2));
        drop(slot);
        assert_eq!(
            *events.borrow(),
            vec![
                "render 1 (2 pts)",
                "dispose 1",
                "render 2 (2 pts)",
                "dispose 2"
            ]
        );
    }

    #[test]
    fn time_labels_use_three_decimals() {
        assert_eq!(format_time_label(0.0), "0.000");
        assert_eq!(format_time_label(0.002), "0.002");
        assert_eq!(format_time_label(2.0), "2.000");
    }
}
