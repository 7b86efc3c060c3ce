//! 手语词表 - 可识别手势与各语言词汇

use super::error::GestureError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 分类器能产出的全部手势
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    Hello,
    One,
    Two,
    Good,
    Yes,
    ThankYou,
}

impl GestureKind {
    pub const ALL: [GestureKind; 6] = [
        GestureKind::Hello,
        GestureKind::One,
        GestureKind::Two,
        GestureKind::Good,
        GestureKind::Yes,
        GestureKind::ThankYou,
    ];

    /// 英文释义
    pub fn gloss(self) -> &'static str {
        match self {
            GestureKind::Hello => "Hello",
            GestureKind::One => "One",
            GestureKind::Two => "Two",
            GestureKind::Good => "Good",
            GestureKind::Yes => "Yes",
            GestureKind::ThankYou => "Thank you",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignLanguage {
    Asl,
    #[default]
    Rsl,
    Kazakh,
    Lse,
    Lsf,
    Dgs,
    Lis,
    Jsl,
    Korean,
    Lgp,
    Ngt,
    Ssl,
}

static BY_CODE: Lazy<HashMap<String, SignLanguage>> = Lazy::new(|| {
    SignLanguage::ALL
        .iter()
        .map(|lang| (lang.code().to_ascii_lowercase(), *lang))
        .collect()
});

impl SignLanguage {
    pub const ALL: [SignLanguage; 12] = [
        SignLanguage::Asl,
        SignLanguage::Rsl,
        SignLanguage::Kazakh,
        SignLanguage::Lse,
        SignLanguage::Lsf,
        SignLanguage::Dgs,
        SignLanguage::Lis,
        SignLanguage::Jsl,
        SignLanguage::Korean,
        SignLanguage::Lgp,
        SignLanguage::Ngt,
        SignLanguage::Ssl,
    ];

    /// 按语言代码查找，大小写不敏感
    pub fn from_code(code: &str) -> Result<Self, GestureError> {
        BY_CODE
            .get(&code.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| GestureError::UnsupportedLanguage(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        match self {
            SignLanguage::Asl => "en-US",
            SignLanguage::Rsl => "ru-RU",
            SignLanguage::Kazakh => "kk-KZ",
            SignLanguage::Lse => "es-ES",
            SignLanguage::Lsf => "fr-FR",
            SignLanguage::Dgs => "de-DE",
            SignLanguage::Lis => "it-IT",
            SignLanguage::Jsl => "ja-JP",
            SignLanguage::Korean => "ko-KR",
            SignLanguage::Lgp => "pt-PT",
            SignLanguage::Ngt => "nl-NL",
            SignLanguage::Ssl => "sv-SE",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignLanguage::Asl => "English (ASL)",
            SignLanguage::Rsl => "Russian (RSL)",
            SignLanguage::Kazakh => "Kazakh (KSL)",
            SignLanguage::Lse => "Spanish (LSE)",
            SignLanguage::Lsf => "French (LSF)",
            SignLanguage::Dgs => "German (DGS)",
            SignLanguage::Lis => "Italian (LIS)",
            SignLanguage::Jsl => "Japanese (JSL)",
            SignLanguage::Korean => "Korean (KSL)",
            SignLanguage::Lgp => "Portuguese (LGP)",
            SignLanguage::Ngt => "Dutch (NGT)",
            SignLanguage::Ssl => "Swedish (SSL)",
        }
    }

    /// 语音合成使用的 voice 代码，目前与语言代码一致
    pub fn voice_code(self) -> &'static str {
        self.code()
    }

    /// 手势在该语言下的词
    pub fn word(self, kind: GestureKind) -> &'static str {
        let words: [&'static str; 6] = match self {
            SignLanguage::Asl => ["Hello", "One", "Two", "Good", "Yes", "Thank you"],
            SignLanguage::Rsl => ["Привет", "Один", "Два", "Хорошо", "Да", "Спасибо"],
            SignLanguage::Kazakh => ["Сәлем", "Бір", "Екі", "Жақсы", "Иә", "Рахмет"],
            SignLanguage::Lse => ["Hola", "Uno", "Dos", "Bien", "Sí", "Gracias"],
            SignLanguage::Lsf => ["Bonjour", "Un", "Deux", "Bien", "Oui", "Merci"],
            SignLanguage::Dgs => ["Hallo", "Eins", "Zwei", "Gut", "Ja", "Danke"],
            SignLanguage::Lis => ["Ciao", "Uno", "Due", "Bene", "Sì", "Grazie"],
            SignLanguage::Jsl => ["こんにちは", "一", "二", "良い", "はい", "ありがとう"],
            SignLanguage::Korean => ["안녕하세요", "하나", "둘", "좋아요", "네", "감사합니다"],
            SignLanguage::Lgp => ["Olá", "Um", "Dois", "Bom", "Sim", "Obrigado"],
            SignLanguage::Ngt => ["Hallo", "Een", "Twee", "Goed", "Ja", "Dank je"],
            SignLanguage::Ssl => ["Hej", "Ett", "Två", "Bra", "Ja", "Tack"],
        };
        words[kind as usize]
    }
}

/// 语言列表项（给 UI 的语言选择页）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub voice_code: String,
}

impl From<SignLanguage> for LanguageInfo {
    fn from(lang: SignLanguage) -> Self {
        Self {
            code: lang.code().to_string(),
            name: lang.name().to_string(),
            voice_code: lang.voice_code().to_string(),
        }
    }
}

pub fn supported_languages() -> Vec<LanguageInfo> {
    SignLanguage::ALL.into_iter().map(LanguageInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(SignLanguage::from_code("ru-RU").unwrap(), SignLanguage::Rsl);
        assert_eq!(SignLanguage::from_code("EN-us").unwrap(), SignLanguage::Asl);
        assert_eq!(SignLanguage::from_code(" kk-KZ ").unwrap(), SignLanguage::Kazakh);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(matches!(
            SignLanguage::from_code("xx-XX"),
            Err(GestureError::UnsupportedLanguage(code)) if code == "xx-XX"
        ));
    }

    #[test]
    fn test_codes_round_trip() {
        for lang in SignLanguage::ALL {
            assert_eq!(SignLanguage::from_code(lang.code()).unwrap(), lang);
        }
        assert_eq!(supported_languages().len(), 12);
    }

    #[test]
    fn test_words_per_language() {
        assert_eq!(SignLanguage::Rsl.word(GestureKind::Hello), "Привет");
        assert_eq!(SignLanguage::Rsl.word(GestureKind::ThankYou), "Спасибо");
        assert_eq!(SignLanguage::Asl.word(GestureKind::Yes), "Yes");
        assert_eq!(SignLanguage::Kazakh.word(GestureKind::Good), "Жақсы");
        for kind in GestureKind::ALL {
            assert_eq!(SignLanguage::Asl.word(kind), kind.gloss());
        }
    }
}
