//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Speech Context: 文本校验、计数、播放状态

pub mod speech;

pub use speech::{
    cap_text, count_chars, count_words, validate_text, AudioUrl, SpeechError, SpeechText,
    TextValidationError, UiState, VoiceSelection, AUDIO_MPEG, MAX_TEXT_CHARS, MIN_TEXT_CHARS,
};
