//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_url;
mod speech_api;
mod speech_synthesizer;

pub use audio_url::AudioUrlPort;
pub use speech_api::{SpeechApiError, SpeechApiPort};
pub use speech_synthesizer::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesizedAudio,
};
