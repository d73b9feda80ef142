//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};

use super::{SpeechError, TextValidationError};

/// 表单文本最少字符数
pub const MIN_TEXT_CHARS: usize = 5;

/// 表单文本最多字符数（输入框硬上限）
pub const MAX_TEXT_CHARS: usize = 5000;

/// 合成音频的 MIME 类型
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// 校验表单文本
///
/// 按原始长度判断，不做 trim
pub fn validate_text(text: &str) -> Result<(), TextValidationError> {
    let len = count_chars(text);
    if len == 0 {
        return Err(TextValidationError::Required);
    }
    if len < MIN_TEXT_CHARS {
        return Err(TextValidationError::TooShort);
    }
    if len > MAX_TEXT_CHARS {
        return Err(TextValidationError::TooLong);
    }
    Ok(())
}

/// 字数：以空白分隔的词数
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 字符数，按 UTF-16 码元计（与浏览器 `value.length` 一致）
pub fn count_chars(text: &str) -> usize {
    text.encode_utf16().count()
}

/// 截断到输入框上限，超出部分丢弃
///
/// 不拆分代理对：放不下的字符整个丢弃
pub fn cap_text(text: &str) -> String {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        units += c.len_utf16();
        if units > MAX_TEXT_CHARS {
            return text[..idx].to_string();
        }
    }
    text.to_string()
}

/// 服务端收到的合成文本
///
/// 不变量:
/// - 非空（缺失、null、空字符串均视为无效）
/// - 长度上下限只在客户端校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn parse(text: Option<String>) -> Result<Self, SpeechError> {
        match text {
            Some(text) if !text.is_empty() => Ok(Self(text)),
            _ => Err(SpeechError::TextRequired),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SpeechText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 固定的模型与音色选择，不对终端用户开放
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSelection {
    pub model: String,
    pub voice: String,
}

impl VoiceSelection {
    pub fn new(model: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            voice: voice.into(),
        }
    }
}

impl Default for VoiceSelection {
    fn default() -> Self {
        Self::new("tts-1-hd", "alloy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("Hello world testing"), 3);
        assert_eq!(count_words("  spaced   out \n words "), 3);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_char_count_includes_spaces() {
        assert_eq!(count_chars("Hello world testing"), 19);
        assert_eq!(count_chars(""), 0);
        assert_eq!(count_chars("héllo"), 5);
    }

    #[test]
    fn test_char_count_uses_utf16_units() {
        // 星际平面字符占两个码元
        assert_eq!(count_chars("😀😀😀"), 6);
        assert!(validate_text("😀😀😀").is_ok());
        assert_eq!(validate_text("😀😀"), Err(TextValidationError::TooShort));
    }

    #[test]
    fn test_validation_rules() {
        assert_eq!(validate_text(""), Err(TextValidationError::Required));
        assert_eq!(validate_text("Hi"), Err(TextValidationError::TooShort));
        assert_eq!(validate_text("    "), Err(TextValidationError::TooShort));
        assert!(validate_text("Hello").is_ok());
        assert!(validate_text(&"a".repeat(MAX_TEXT_CHARS)).is_ok());
        assert_eq!(
            validate_text(&"a".repeat(MAX_TEXT_CHARS + 1)),
            Err(TextValidationError::TooLong)
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(TextValidationError::Required.to_string(), "Text is Required");
        assert_eq!(
            TextValidationError::TooShort.to_string(),
            "Must be at least 5 characters long"
        );
        assert_eq!(
            TextValidationError::TooLong.to_string(),
            "Cannot exceed 5000 characters"
        );
    }

    #[test]
    fn test_cap_text() {
        let long = "é".repeat(MAX_TEXT_CHARS + 10);
        let capped = cap_text(&long);
        assert_eq!(count_chars(&capped), MAX_TEXT_CHARS);
        assert_eq!(cap_text("short"), "short");

        let emoji = "😀".repeat(MAX_TEXT_CHARS);
        let capped = cap_text(&emoji);
        assert_eq!(count_chars(&capped), MAX_TEXT_CHARS);
        assert_eq!(capped.chars().count(), MAX_TEXT_CHARS / 2);

        let odd = format!("{}😀", "a".repeat(MAX_TEXT_CHARS - 1));
        assert_eq!(count_chars(&cap_text(&odd)), MAX_TEXT_CHARS - 1);
    }

    #[test]
    fn test_speech_text_requires_content() {
        assert_eq!(SpeechText::parse(None), Err(SpeechError::TextRequired));
        assert_eq!(
            SpeechText::parse(Some(String::new())),
            Err(SpeechError::TextRequired)
        );

        // 服务端不校验长度
        let text = SpeechText::parse(Some("Hi".to_string())).unwrap();
        assert_eq!(text.as_str(), "Hi");
        let blank = SpeechText::parse(Some("   ".to_string()));
        assert!(blank.is_ok());
    }
}
