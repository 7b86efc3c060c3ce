//! 手势分类器 - 有序规则表，首个命中即返回
//!
//! 新规则必须插入到正确的优先级位置。

use super::fingers::{ExtendedFingerSet, Finger};
use super::vocabulary::{GestureKind, SignLanguage};
use serde::{Deserialize, Serialize};

pub struct GestureRule {
    pub kind: GestureKind,
    pub confidence: u8,
    /// 给手势指南展示的手型描述
    pub pattern: &'static str,
    matches: fn(&ExtendedFingerSet) -> bool,
}

impl GestureRule {
    pub fn matches(&self, fingers: &ExtendedFingerSet) -> bool {
        (self.matches)(fingers)
    }
}

pub static RULES: [GestureRule; 6] = [
    GestureRule {
        kind: GestureKind::Hello,
        confidence: 95,
        pattern: "all five fingers extended",
        matches: |f| f.len() == 5,
    },
    GestureRule {
        kind: GestureKind::One,
        confidence: 92,
        pattern: "index finger only",
        matches: |f| f.is_exactly(&[Finger::Index]),
    },
    GestureRule {
        kind: GestureKind::Two,
        confidence: 90,
        pattern: "index and middle fingers",
        matches: |f| f.is_exactly(&[Finger::Index, Finger::Middle]),
    },
    GestureRule {
        kind: GestureKind::Good,
        confidence: 88,
        pattern: "thumb only",
        matches: |f| f.is_exactly(&[Finger::Thumb]),
    },
    GestureRule {
        kind: GestureKind::Yes,
        confidence: 85,
        pattern: "closed fist",
        matches: |f| f.is_empty(),
    },
    GestureRule {
        kind: GestureKind::ThankYou,
        confidence: 80,
        pattern: "four fingers extended, thumb folded",
        matches: |f| f.len() == 4 && !f.contains(Finger::Thumb),
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub kind: GestureKind,
    /// 目标语言的词，用于显示和朗读
    pub label: String,
    /// 英文释义
    pub source_text: String,
    /// (0, 100]
    pub confidence: u8,
    /// 单调时钟毫秒
    pub observed_at_ms: u64,
}

impl GestureResult {
    pub fn new(kind: GestureKind, confidence: u8, language: SignLanguage, observed_at_ms: u64) -> Self {
        Self {
            kind,
            label: language.word(kind).to_string(),
            source_text: kind.gloss().to_string(),
            confidence,
            observed_at_ms,
        }
    }
}

pub fn classify(
    fingers: &ExtendedFingerSet,
    language: SignLanguage,
    observed_at_ms: u64,
) -> Option<GestureResult> {
    RULES
        .iter()
        .find(|rule| rule.matches(fingers))
        .map(|rule| GestureResult::new(rule.kind, rule.confidence, language, observed_at_ms))
}

/// 手势指南条目，只列出分类器实际能识别的手势
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideEntry {
    pub kind: GestureKind,
    pub word: String,
    pub gloss: String,
    pub pattern: String,
    pub confidence: u8,
}

pub fn gesture_guide(language: SignLanguage) -> Vec<GuideEntry> {
    RULES
        .iter()
        .map(|rule| GuideEntry {
            kind: rule.kind,
            word: language.word(rule.kind).to_string(),
            gloss: rule.kind.gloss().to_string(),
            pattern: rule.pattern.to_string(),
            confidence: rule.confidence,
        })
        .collect()
}
