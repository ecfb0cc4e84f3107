/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    VolumeFlow,
    Pressure,
    Time,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Length,
        QuantityKind::VolumeFlow,
        QuantityKind::Pressure,
        QuantityKind::Time,
    ];

    /// 선택 가능한 단위 문자열(입력 예시 겸용).
    pub fn unit_codes(self) -> &'static [&'static str] {
        match self {
            QuantityKind::Length => &["m", "mm", "in", "ft"],
            QuantityKind::VolumeFlow => &["m3/s", "m3/h", "L/s", "gpm"],
            QuantityKind::Pressure => &["Pa", "kPa", "MPa", "bar", "psi"],
            QuantityKind::Time => &["s", "ms", "min"],
        }
    }
}
