use super::error::GestureError;
use super::history::HistoryConfig;
use super::vocabulary::SignLanguage;
use serde::{Deserialize, Serialize};

/// 无新识别结果时，当前手势的显示保留时间
pub const DEFAULT_DISPLAY_GRACE_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 语言代码，如 "ru-RU"
    pub language: String,
    pub history: HistoryConfig,
    pub display_grace_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: SignLanguage::default().code().to_string(),
            history: HistoryConfig::default(),
            display_grace_ms: DEFAULT_DISPLAY_GRACE_MS,
        }
    }
}

impl SessionConfig {
    pub fn for_language(code: &str) -> Self {
        Self {
            language: code.to_string(),
            ..Default::default()
        }
    }

    /// 解析宿主传入的 JSON5 配置，缺省字段取默认值
    pub fn from_json5(text: &str) -> Result<Self, GestureError> {
        let config: SessionConfig =
            json5::from_str(text).map_err(|e| GestureError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        self.sign_language()?;
        self.history.validate()
    }

    pub fn sign_language(&self) -> Result<SignLanguage, GestureError> {
        SignLanguage::from_code(&self.language)
    }
}
