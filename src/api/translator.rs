//! 手语翻译器 - 手势识别会话

use crate::core::gesture::{
    self, DetectedHand, FrameOutcome, GestureError, GestureResult, GuideEntry, HandFrame,
    LanguageInfo, SessionConfig, SessionController, SessionStats, SignLanguage, Transcript,
};
use flutter_rust_bridge::frb;
use log::info;
use std::sync::{Mutex, MutexGuard};

/// 手语翻译器 - 逐帧识别手势并在结束时给出待朗读的句子
///
/// 帧回调与 UI 操作可能来自不同线程，会话状态由互斥锁串行化。
///
/// ```dart
/// final translator = SignTranslator.create(languageCode: "ru-RU");
/// translator.startRecording();
/// translator.processHands(hands: hands, nowMs: nowMs);
/// final transcript = translator.stopRecording();
/// await tts.speak(transcript.sentence, transcript.voiceCode);
/// ```
#[frb(opaque)]
pub struct SignTranslator {
    session: Mutex<SessionController>,
}

impl SignTranslator {
    /// 使用默认配置创建
    #[frb(sync)]
    pub fn create(language_code: String) -> Result<Self, GestureError> {
        Self::with_config(SessionConfig::for_language(&language_code))
    }

    /// 使用 JSON5 配置创建
    #[frb(sync)]
    pub fn create_with_config(config_json5: String) -> Result<Self, GestureError> {
        Self::with_config(SessionConfig::from_json5(&config_json5)?)
    }

    fn with_config(config: SessionConfig) -> Result<Self, GestureError> {
        crate::init_logging();
        let session = SessionController::with_config(config)?;
        info!(
            "🤟 SignTranslator: created ({})",
            session.language().code()
        );
        Ok(Self {
            session: Mutex::new(session),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionController>, GestureError> {
        self.session
            .lock()
            .map_err(|e| GestureError::LockPoisoned(e.to_string()))
    }

    /// 开始录制，清空上一次的历史
    #[frb(sync)]
    pub fn start_recording(&self) -> Result<(), GestureError> {
        self.lock()?.start();
        Ok(())
    }

    /// 停止录制，返回识别出的句子
    #[frb(sync)]
    pub fn stop_recording(&self) -> Result<Transcript, GestureError> {
        Ok(self.lock()?.stop())
    }

    /// 清空历史与当前手势，录制中也可调用
    #[frb(sync)]
    pub fn clear(&self) -> Result<(), GestureError> {
        self.lock()?.clear();
        Ok(())
    }

    /// 处理一帧关键点，now_ms 为单调时钟毫秒
    #[frb(sync)]
    pub fn process_hands(
        &self,
        hands: Vec<DetectedHand>,
        now_ms: u64,
    ) -> Result<FrameOutcome, GestureError> {
        let frame = HandFrame { hands };
        Ok(self.lock()?.process_frame(&frame, now_ms))
    }

    /// 当前显示的手势，超过保留时间返回 None
    #[frb(sync)]
    pub fn current_gesture(&self, now_ms: u64) -> Result<Option<GestureResult>, GestureError> {
        Ok(self.lock()?.current_gesture_at(now_ms).cloned())
    }

    #[frb(sync)]
    pub fn history(&self) -> Result<Vec<GestureResult>, GestureError> {
        Ok(self.lock()?.history().to_vec())
    }

    #[frb(sync)]
    pub fn history_json(&self) -> Result<String, GestureError> {
        self.lock()?.history().to_json()
    }

    #[frb(sync)]
    pub fn stats(&self) -> Result<SessionStats, GestureError> {
        Ok(self.lock()?.stats())
    }

    #[frb(sync)]
    pub fn set_language(&self, language_code: String) -> Result<(), GestureError> {
        self.lock()?.set_language(&language_code)
    }

    #[frb(sync)]
    pub fn language(&self) -> Result<LanguageInfo, GestureError> {
        Ok(self.lock()?.language().into())
    }
}

impl Drop for SignTranslator {
    fn drop(&mut self) {
        info!("🗑️ SignTranslator: released");
    }
}

/// 可选语言列表
#[frb(sync)]
pub fn supported_languages() -> Vec<LanguageInfo> {
    gesture::supported_languages()
}

/// 指定语言下可识别的手势
#[frb(sync)]
pub fn gesture_guide(language_code: String) -> Result<Vec<GuideEntry>, GestureError> {
    let language = SignLanguage::from_code(&language_code)?;
    Ok(gesture::gesture_guide(language))
}
