//! Speech Context - 语音合成限界上下文
//!
//! 职责:
//! - 表单文本规则（必填、最短 5、最长 5000）
//! - 字数 / 字符数统计
//! - 服务端请求文本（仅要求非空）
//! - 客户端 UI 状态

mod errors;
mod ui_state;
mod value_objects;

pub use errors::{SpeechError, TextValidationError};
pub use ui_state::{AudioUrl, UiState};
pub use value_objects::{
    cap_text, count_chars, count_words, validate_text, SpeechText, VoiceSelection, AUDIO_MPEG,
    MAX_TEXT_CHARS, MIN_TEXT_CHARS,
};
