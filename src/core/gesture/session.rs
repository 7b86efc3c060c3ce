//! 识别会话 - 单帧驱动：关键点 → 手指状态 → 分类 → 历史

use super::classifier::{self, GestureResult};
use super::config::SessionConfig;
use super::error::GestureError;
use super::fingers::{self, ExtendedFingerSet};
use super::history::{GestureHistory, HistoryDecision};
use super::landmarks::HandFrame;
use super::vocabulary::SignLanguage;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    NotRecording,
    NoHand,
    MalformedHand { points: usize },
    NoMatch { fingers: ExtendedFingerSet },
    Detected {
        result: GestureResult,
        decision: HistoryDecision,
    },
}

impl FrameOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, FrameOutcome::Detected { decision, .. } if decision.is_appended())
    }
}

/// 会话结束时交给语音合成的内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub labels: Vec<String>,
    /// labels 以空格拼接
    pub sentence: String,
    pub voice_code: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub processed_frames: u64,
    pub malformed_frames: u64,
    pub detected_frames: u64,
    pub accepted_gestures: u64,
}

pub struct SessionController {
    language: SignLanguage,
    history: GestureHistory,
    current: Option<GestureResult>,
    display_grace_ms: u64,
    recording: bool,
    stats: SessionStats,
}

impl SessionController {
    pub fn new() -> Self {
        Self::from_parts(SignLanguage::default(), &SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, GestureError> {
        config.validate()?;
        let language = config.sign_language()?;
        Ok(Self::from_parts(language, &config))
    }

    fn from_parts(language: SignLanguage, config: &SessionConfig) -> Self {
        Self {
            language,
            history: GestureHistory::with_config(config.history.clone()),
            current: None,
            display_grace_ms: config.display_grace_ms,
            recording: false,
            stats: SessionStats::default(),
        }
    }

    pub fn start(&mut self) {
        info!("▶️ Session started ({})", self.language.code());
        self.clear();
        self.stats = SessionStats::default();
        self.recording = true;
    }

    pub fn stop(&mut self) -> Transcript {
        self.recording = false;
        self.current = None;

        let transcript = self.transcript();
        info!(
            "⏹️ Session stopped: {} gestures, \"{}\"",
            transcript.labels.len(),
            transcript.sentence
        );
        transcript
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.current = None;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn language(&self) -> SignLanguage {
        self.language
    }

    /// 切换语言会清空历史与当前手势，保证句子与 voice_code 同一语言
    pub fn set_language(&mut self, code: &str) -> Result<(), GestureError> {
        let language = SignLanguage::from_code(code)?;
        if language != self.language {
            self.clear();
            self.language = language;
        }
        info!("🌐 Language set to {}", self.language.code());
        Ok(())
    }

    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn current_gesture(&self) -> Option<&GestureResult> {
        self.current.as_ref()
    }

    /// 按给定时间判断显示中的手势是否已过期，不修改状态
    pub fn current_gesture_at(&self, now_ms: u64) -> Option<&GestureResult> {
        self.current
            .as_ref()
            .filter(|g| now_ms.saturating_sub(g.observed_at_ms) <= self.display_grace_ms)
    }

    pub fn transcript(&self) -> Transcript {
        let labels = self.history.labels();
        Transcript {
            sentence: labels.join(" "),
            labels,
            voice_code: self.language.voice_code().to_string(),
        }
    }

    pub fn process_frame(&mut self, frame: &HandFrame, now_ms: u64) -> FrameOutcome {
        if !self.recording {
            return FrameOutcome::NotRecording;
        }
        self.stats.processed_frames += 1;

        let Some(hand) = frame.primary() else {
            self.expire_current(now_ms);
            return FrameOutcome::NoHand;
        };

        let fingers = match fingers::extended_fingers(&hand.landmarks) {
            Ok(fingers) => fingers,
            Err(e) => {
                debug!("⚠️ Dropping frame: {}", e);
                self.stats.malformed_frames += 1;
                self.expire_current(now_ms);
                return FrameOutcome::MalformedHand {
                    points: hand.landmarks.len(),
                };
            }
        };
        debug!(
            "🖐️ {:?} hand ({:.2}), fingers {}",
            hand.handedness(),
            hand.score,
            fingers
        );

        let Some(result) = classifier::classify(&fingers, self.language, now_ms) else {
            debug!("🤷 No gesture for fingers {}", fingers);
            self.expire_current(now_ms);
            return FrameOutcome::NoMatch { fingers };
        };

        self.stats.detected_frames += 1;
        self.current = Some(result.clone());

        let decision = self.history.push(result.clone());
        if decision.is_appended() {
            self.stats.accepted_gestures += 1;
            info!(
                "✋ {} ({}%) accepted, history {}",
                result.label,
                result.confidence,
                self.history.len()
            );
        }

        FrameOutcome::Detected { result, decision }
    }

    fn expire_current(&mut self, now_ms: u64) {
        if let Some(current) = &self.current {
            if now_ms.saturating_sub(current.observed_at_ms) > self.display_grace_ms {
                debug!("⌛ Current gesture {} expired", current.label);
                self.current = None;
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gesture::fingers::{synthetic_hand, Finger};
    use crate::core::gesture::landmarks::{DetectedHand, HandPoint};
    use crate::core::gesture::vocabulary::GestureKind;

    fn frame_with(fingers: &[Finger]) -> HandFrame {
        HandFrame::single(DetectedHand::new(synthetic_hand(fingers)))
    }

    fn english_session() -> SessionController {
        let mut session =
            SessionController::with_config(SessionConfig::for_language("en-US")).unwrap();
        session.start();
        session
    }

    #[test]
    fn test_end_to_end_sequence() {
        let mut session = english_session();
        let frames: Vec<(Vec<Finger>, u64)> = vec![
            (vec![], 0),
            (vec![], 500),
            (vec![Finger::Index], 1000),
            (vec![Finger::Index], 3500),
            (vec![Finger::Index, Finger::Middle], 4000),
        ];

        let accepted: Vec<bool> = frames
            .iter()
            .map(|(fingers, at)| session.process_frame(&frame_with(fingers), *at).accepted())
            .collect();

        // 4000ms 的 "Two" 距 "One" 仅 500ms，仍在冷却期内
        assert_eq!(accepted, vec![true, false, false, true, false]);
        assert_eq!(session.history().labels(), vec!["Yes", "One"]);
        let times: Vec<u64> = session.history().entries().map(|r| r.observed_at_ms).collect();
        assert_eq!(times, vec![0, 3500]);

        let outcome = session.process_frame(&frame_with(&[Finger::Index, Finger::Middle]), 5001);
        assert!(outcome.accepted());
        assert_eq!(session.history().labels(), vec!["Yes", "One", "Two"]);
    }

    #[test]
    fn test_frames_ignored_when_not_recording() {
        let mut session = SessionController::new();
        let outcome = session.process_frame(&frame_with(&[]), 0);
        assert_eq!(outcome, FrameOutcome::NotRecording);
        assert!(session.history().is_empty());
        assert_eq!(session.stats().processed_frames, 0);
    }

    #[test]
    fn test_malformed_hand_skipped() {
        let mut session = english_session();
        let frame = HandFrame::single(DetectedHand::new(vec![HandPoint::default(); 12]));

        let outcome = session.process_frame(&frame, 0);
        assert_eq!(outcome, FrameOutcome::MalformedHand { points: 12 });
        assert!(session.history().is_empty());
        assert!(session.current_gesture().is_none());
        assert!(session.is_recording());
        assert_eq!(session.stats().malformed_frames, 1);

        assert!(session.process_frame(&frame_with(&[]), 100).accepted());
    }

    #[test]
    fn test_no_match_keeps_current_within_grace() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[Finger::Thumb]), 0);
        assert_eq!(session.current_gesture().unwrap().kind, GestureKind::Good);

        let outcome = session.process_frame(&frame_with(&[Finger::Thumb, Finger::Middle]), 1500);
        assert!(matches!(outcome, FrameOutcome::NoMatch { .. }));
        assert!(session.current_gesture().is_some());

        session.process_frame(&HandFrame::empty(), 2000);
        assert!(session.current_gesture().is_some());

        let outcome = session.process_frame(&HandFrame::empty(), 2001);
        assert_eq!(outcome, FrameOutcome::NoHand);
        assert!(session.current_gesture().is_none());
    }

    #[test]
    fn test_current_gesture_at() {
        let mut session = english_session();
        session.process_frame(&frame_with(&Finger::ALL), 1000);
        assert!(session.current_gesture_at(3000).is_some());
        assert!(session.current_gesture_at(3001).is_none());
    }

    #[test]
    fn test_detected_updates_current_even_when_suppressed() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[]), 0);
        let outcome = session.process_frame(&frame_with(&[Finger::Index]), 200);

        assert!(matches!(
            outcome,
            FrameOutcome::Detected {
                decision: HistoryDecision::CooldownActive,
                ..
            }
        ));
        assert_eq!(session.current_gesture().unwrap().label, "One");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_stop_produces_transcript() {
        let mut session = SessionController::new();
        session.start();
        session.process_frame(&frame_with(&Finger::ALL), 0);
        session.process_frame(
            &frame_with(&[Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]),
            2000,
        );

        let transcript = session.stop();
        assert_eq!(transcript.labels, vec!["Привет", "Спасибо"]);
        assert_eq!(transcript.sentence, "Привет Спасибо");
        assert_eq!(transcript.voice_code, "ru-RU");
        assert!(!session.is_recording());
        assert!(session.current_gesture().is_none());
        // 停止后保留历史，供 UI 展示
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_empty_session_transcript() {
        let mut session = english_session();
        let transcript = session.stop();
        assert!(transcript.labels.is_empty());
        assert_eq!(transcript.sentence, "");
    }

    #[test]
    fn test_clear_mid_session() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[]), 0);
        session.clear();

        assert!(session.history().is_empty());
        assert!(session.current_gesture().is_none());
        assert!(session.is_recording());
        assert!(session.process_frame(&frame_with(&[]), 100).accepted());
    }

    #[test]
    fn test_start_resets_previous_session() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[]), 0);
        session.stop();

        session.start();
        assert!(session.history().is_empty());
        assert_eq!(session.stats(), SessionStats::default());
    }

    #[test]
    fn test_language_switch_does_not_duplicate_held_sign() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[]), 0);
        session.set_language("ru-RU").unwrap();
        assert!(session.history().is_empty());
        assert!(session.current_gesture().is_none());

        session.process_frame(&frame_with(&[]), 2000);
        let transcript = session.stop();
        assert_eq!(transcript.labels, vec!["Да"]);
        assert_eq!(transcript.sentence, "Да");
        assert_eq!(transcript.voice_code, "ru-RU");
    }

    #[test]
    fn test_same_language_keeps_history() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[]), 0);
        session.set_language("EN-us").unwrap();
        assert_eq!(session.history().labels(), vec!["Yes"]);
    }

    #[test]
    fn test_set_language() {
        let mut session = english_session();
        session.set_language("de-DE").unwrap();
        session.process_frame(&frame_with(&[Finger::Thumb]), 0);
        assert_eq!(session.current_gesture().unwrap().label, "Gut");
        assert!(session.set_language("xx").is_err());
        assert_eq!(session.language(), SignLanguage::Dgs);
    }

    #[test]
    fn test_only_first_hand_classified() {
        let mut session = english_session();
        let frame = HandFrame {
            hands: vec![
                DetectedHand::new(synthetic_hand(&[Finger::Index])),
                DetectedHand::new(synthetic_hand(&Finger::ALL)),
            ],
        };
        session.process_frame(&frame, 0);
        assert_eq!(session.history().labels(), vec!["One"]);
    }

    #[test]
    fn test_stats_counts() {
        let mut session = english_session();
        session.process_frame(&frame_with(&[]), 0);
        session.process_frame(&frame_with(&[]), 100);
        session.process_frame(&HandFrame::empty(), 200);

        let stats = session.stats();
        assert_eq!(stats.processed_frames, 3);
        assert_eq!(stats.detected_frames, 2);
        assert_eq!(stats.accepted_gestures, 1);
    }
}
