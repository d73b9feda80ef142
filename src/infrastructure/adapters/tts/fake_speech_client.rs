//! Fake Speech Client - 不调用外部服务的合成器
//!
//! 始终返回固定音频，或按配置返回固定错误

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesizedAudio,
};

/// 未指定文件时返回的数据（一个空的 MPEG 帧头）
const BUILTIN_AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00];

/// Fake Speech Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeSpeechClientConfig {
    /// 固定返回的音频文件路径
    pub audio_file_path: Option<PathBuf>,
    /// 设置后每次调用都返回该错误消息
    pub fail_with: Option<String>,
}

/// Fake Speech Client
pub struct FakeSpeechClient {
    config: FakeSpeechClientConfig,
    audio_data: Vec<u8>,
    calls: AtomicUsize,
}

impl FakeSpeechClient {
    pub fn new(config: FakeSpeechClientConfig) -> Result<Self, std::io::Error> {
        let audio_data = match &config.audio_file_path {
            Some(path) => std::fs::read(path)?,
            None => BUILTIN_AUDIO.to_vec(),
        };
        tracing::info!(
            path = ?config.audio_file_path,
            audio_size = audio_data.len(),
            "FakeSpeechClient initialized"
        );
        Ok(Self {
            config,
            audio_data,
            calls: AtomicUsize::new(0),
        })
    }

    /// 返回给定音频
    pub fn with_audio(audio_data: impl Into<Vec<u8>>) -> Self {
        Self {
            config: FakeSpeechClientConfig::default(),
            audio_data: audio_data.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// 每次调用都失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            config: FakeSpeechClientConfig {
                fail_with: Some(message.into()),
                ..Default::default()
            },
            audio_data: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// 已被调用的次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            text_len = request.input.len(),
            model = %request.model,
            voice = %request.voice,
            "FakeSpeechClient: returning fixed audio"
        );

        match &self.config.fail_with {
            Some(message) => Err(SynthesisError::ProviderError(message.clone())),
            None => Ok(SynthesizedAudio {
                audio_data: self.audio_data.clone(),
            }),
        }
    }
}
