//! Speech Synthesizer Port - 外部语音合成服务抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 合成错误
///
/// `Display` 只输出底层消息本身，端点原样透传给调用方
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("{0}")]
    NetworkError(String),

    #[error("Request timed out")]
    Timeout,

    /// 服务方拒绝（鉴权失败、配额不足、参数错误等）
    #[error("{0}")]
    ProviderError(String),

    #[error("{0}")]
    InvalidResponse(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 模型选择
    pub model: String,
    /// 音色选择
    pub voice: String,
    /// 要合成的文本
    pub input: String,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 完整的音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// Speech Synthesizer Port
///
/// 每次调用都可能消耗服务方配额，调用方不做重试
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 执行一次语音合成
    async fn synthesize(&self, request: SynthesisRequest)
        -> Result<SynthesizedAudio, SynthesisError>;
}
