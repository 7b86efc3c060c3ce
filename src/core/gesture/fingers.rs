//! 手指伸展判定
//!
//! 单帧几何决定结果，无阈值、无跨帧平滑：
//! - 拇指：指尖 x > IP 关节 x（侧向伸展，不区分左右手）
//! - 其余四指：指尖 y < PIP 关节 y（画面坐标 y 向下增大）

use super::error::GestureError;
use super::landmarks::{self, HandPoint, LANDMARK_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// 0 = 拇指 … 4 = 小指
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn tip(self) -> usize {
        match self {
            Finger::Thumb => landmarks::THUMB_TIP,
            Finger::Index => landmarks::INDEX_TIP,
            Finger::Middle => landmarks::MIDDLE_TIP,
            Finger::Ring => landmarks::RING_TIP,
            Finger::Pinky => landmarks::PINKY_TIP,
        }
    }

    pub fn joint(self) -> usize {
        match self {
            Finger::Thumb => landmarks::THUMB_IP,
            Finger::Index => landmarks::INDEX_PIP,
            Finger::Middle => landmarks::MIDDLE_PIP,
            Finger::Ring => landmarks::RING_PIP,
            Finger::Pinky => landmarks::PINKY_PIP,
        }
    }

    fn is_extended(self, tip: &HandPoint, joint: &HandPoint) -> bool {
        match self {
            Finger::Thumb => tip.x > joint.x,
            _ => tip.y < joint.y,
        }
    }
}

/// 伸展手指集合（5 位位图）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExtendedFingerSet(u8);

impl ExtendedFingerSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn from_fingers(fingers: &[Finger]) -> Self {
        fingers.iter().fold(Self::empty(), |set, f| set.with(*f))
    }

    pub fn with(self, finger: Finger) -> Self {
        Self(self.0 | (1 << finger.index()))
    }

    pub fn contains(&self, finger: Finger) -> bool {
        self.0 & (1 << finger.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// 集合恰好等于给定手指
    pub fn is_exactly(&self, fingers: &[Finger]) -> bool {
        *self == Self::from_fingers(fingers)
    }

    pub fn iter(&self) -> impl Iterator<Item = Finger> + '_ {
        Finger::ALL.into_iter().filter(move |f| self.contains(*f))
    }

    pub fn indices(&self) -> Vec<usize> {
        self.iter().map(Finger::index).collect()
    }
}

impl fmt::Display for ExtendedFingerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.indices())
    }
}

pub(crate) fn extended_fingers_of(points: &[HandPoint; LANDMARK_COUNT]) -> ExtendedFingerSet {
    Finger::ALL
        .into_iter()
        .filter(|f| f.is_extended(&points[f.tip()], &points[f.joint()]))
        .fold(ExtendedFingerSet::empty(), ExtendedFingerSet::with)
}

/// 对未校验的关键点做判定；点数不是 21 时拒绝整帧
pub fn extended_fingers(points: &[HandPoint]) -> Result<ExtendedFingerSet, GestureError> {
    Ok(extended_fingers_of(landmarks::as_hand_points(points)?))
}

/// 构造指定手指伸展的合成手部关键点
#[cfg(test)]
pub(crate) fn synthetic_hand(extended: &[Finger]) -> Vec<HandPoint> {
    let mut points = vec![HandPoint::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    for finger in Finger::ALL {
        let on = extended.contains(&finger);
        let tip = &mut points[finger.tip()];
        match finger {
            Finger::Thumb => tip.x = if on { 0.6 } else { 0.4 },
            _ => tip.y = if on { 0.3 } else { 0.7 },
        }
    }
    points
}
