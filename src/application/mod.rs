//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、SpeechApi、AudioUrl）
//! - commands: 代理端点的命令及处理器
//! - form: 客户端表单控制器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod form;
pub mod ports;

// Re-exports
pub use commands::{handlers::SynthesizeSpeechHandler, SynthesizeSpeech, SynthesizeSpeechResponse};

pub use error::ApplicationError;

pub use form::{FormError, FormView, PendingSpeech, SpeechForm};

pub use ports::{
    // Audio URL
    AudioUrlPort,
    // Speech API
    SpeechApiError,
    SpeechApiPort,
    // Speech synthesizer
    SpeechSynthesizerPort,
    SynthesisError,
    SynthesisRequest,
    SynthesizedAudio,
};
