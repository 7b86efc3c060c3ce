use super::classifier::GestureResult;
use super::error::GestureError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_COOLDOWN_MS: u64 = 1500;

/// 冷却期过后，同一手势能否再次入队
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatPolicy {
    /// 与最后一条手势不同且超过冷却期才入队
    #[default]
    SuppressConsecutive,
    /// 只看冷却期，相同手势也可再次入队
    AfterCooldown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
    pub cooldown_ms: u64,
    pub repeat_policy: RepeatPolicy,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            repeat_policy: RepeatPolicy::default(),
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.capacity == 0 {
            return Err(GestureError::Config(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    NonEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDecision {
    Appended,
    /// 已满，最旧一条被挤出
    AppendedWithEviction,
    /// 与最后一条为同一手势
    DuplicateSuppressed,
    /// 距最后一条未超过冷却期
    CooldownActive,
}

impl HistoryDecision {
    pub fn is_appended(self) -> bool {
        matches!(
            self,
            HistoryDecision::Appended | HistoryDecision::AppendedWithEviction
        )
    }
}

/// 会话内已接受手势的滑动窗口
#[derive(Debug, Clone)]
pub struct GestureHistory {
    entries: VecDeque<GestureResult>,
    config: HistoryConfig,
}

impl GestureHistory {
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            config: HistoryConfig { capacity, ..config },
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// 只判定不修改
    pub fn decide(&self, result: &GestureResult) -> HistoryDecision {
        let Some(last) = self.entries.back() else {
            return HistoryDecision::Appended;
        };

        let same_gesture = last.kind == result.kind;
        if same_gesture && self.config.repeat_policy == RepeatPolicy::SuppressConsecutive {
            return HistoryDecision::DuplicateSuppressed;
        }

        let elapsed = result.observed_at_ms.saturating_sub(last.observed_at_ms);
        if elapsed <= self.config.cooldown_ms {
            return if same_gesture {
                HistoryDecision::DuplicateSuppressed
            } else {
                HistoryDecision::CooldownActive
            };
        }

        if self.entries.len() >= self.config.capacity {
            HistoryDecision::AppendedWithEviction
        } else {
            HistoryDecision::Appended
        }
    }

    pub fn push(&mut self, result: GestureResult) -> HistoryDecision {
        let decision = self.decide(&result);
        match decision {
            HistoryDecision::Appended | HistoryDecision::AppendedWithEviction => {
                while self.entries.len() >= self.config.capacity {
                    self.entries.pop_front();
                }
                debug!(
                    "📝 History += {} @{}ms ({}/{})",
                    result.label,
                    result.observed_at_ms,
                    self.entries.len() + 1,
                    self.config.capacity
                );
                self.entries.push_back(result);
            }
            HistoryDecision::DuplicateSuppressed | HistoryDecision::CooldownActive => {
                debug!(
                    "⏭️ History skip {} @{}ms: {:?}",
                    result.label, result.observed_at_ms, decision
                );
            }
        }
        decision
    }

    /// 返回是否入队
    pub fn accept(&mut self, result: GestureResult) -> bool {
        self.push(result).is_appended()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn state(&self) -> HistoryState {
        if self.entries.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::NonEmpty
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&GestureResult> {
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &GestureResult> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<GestureResult> {
        self.entries.iter().cloned().collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.label.clone()).collect()
    }

    pub fn to_json(&self) -> Result<String, GestureError> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::new()
    }
}
