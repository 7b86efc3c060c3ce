use thiserror::Error;

#[derive(Debug, Error)]
pub enum GestureError {
    #[error("Malformed hand: expected 21 landmarks, got {points}")]
    MalformedHand { points: usize },
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Session lock poisoned: {0}")]
    LockPoisoned(String),
}
