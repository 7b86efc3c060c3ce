//! 手部关键点 - 21 点手部骨架（与主流手部姿态模型编号一致）

use super::error::GestureError;
use super::fingers::{self, ExtendedFingerSet};
use serde::{Deserialize, Serialize};

/// 每只手的关键点数量
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// 单个关键点，x/y 为相对画面宽高的归一化坐标，z 为相对深度
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HandPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 点数校验，不复制关键点
pub fn as_hand_points(points: &[HandPoint]) -> Result<&[HandPoint; LANDMARK_COUNT], GestureError> {
    points
        .try_into()
        .map_err(|_| GestureError::MalformedHand {
            points: points.len(),
        })
}

/// 已校验的手：恰好 21 个关键点
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    points: [HandPoint; LANDMARK_COUNT],
}

impl Hand {
    pub fn from_points(points: Vec<HandPoint>) -> Result<Self, GestureError> {
        let points = *as_hand_points(&points)?;
        Ok(Self { points })
    }

    pub fn extended_fingers(&self) -> ExtendedFingerSet {
        fingers::extended_fingers_of(&self.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Handedness {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
            Some("left") => Handedness::Left,
            Some("right") => Handedness::Right,
            _ => Handedness::Unknown,
        }
    }
}

/// 关键点源每帧给出的一只手（未校验）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectedHand {
    pub landmarks: Vec<HandPoint>,
    pub handedness: Option<String>,
    pub score: f32,
}

impl DetectedHand {
    pub fn new(landmarks: Vec<HandPoint>) -> Self {
        Self {
            landmarks,
            handedness: None,
            score: 1.0,
        }
    }

    pub fn handedness(&self) -> Handedness {
        Handedness::from_label(self.handedness.as_deref())
    }
}

/// 一帧的识别输入，可能包含 0 只或多只手
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandFrame {
    pub hands: Vec<DetectedHand>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(hand: DetectedHand) -> Self {
        Self { hands: vec![hand] }
    }

    /// 只识别第一只手
    pub fn primary(&self) -> Option<&DetectedHand> {
        self.hands.first()
    }
}
