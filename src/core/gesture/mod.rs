//! 手语手势识别核心
//!
//! 数据流（逐帧）：
//! 1. 关键点源给出 21 点手部骨架
//! 2. 手指伸展判定
//! 3. 有序规则表分类
//! 4. 冷却期去重后写入会话历史

pub mod classifier;
pub mod config;
pub mod error;
pub mod fingers;
pub mod history;
pub mod landmarks;
pub mod session;
pub mod vocabulary;

pub use classifier::{classify, gesture_guide, GestureResult, GuideEntry};
pub use config::SessionConfig;
pub use error::GestureError;
pub use fingers::{extended_fingers, ExtendedFingerSet, Finger};
pub use history::{GestureHistory, HistoryConfig, HistoryDecision, HistoryState, RepeatPolicy};
pub use landmarks::{DetectedHand, Hand, HandFrame, HandPoint, Handedness};
pub use session::{FrameOutcome, SessionController, SessionStats, Transcript};
pub use vocabulary::{supported_languages, GestureKind, LanguageInfo, SignLanguage};
