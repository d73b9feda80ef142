//! Speech Context - Errors

use thiserror::Error;

/// 表单文本校验错误
///
/// `Display` 即界面上展示的提示文案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextValidationError {
    #[error("Text is Required")]
    Required,

    #[error("Must be at least 5 characters long")]
    TooShort,

    #[error("Cannot exceed 5000 characters")]
    TooLong,
}

/// 服务端请求错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("Text is required")]
    TextRequired,
}
