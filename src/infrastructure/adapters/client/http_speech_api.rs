//! HTTP Speech API - 调用代理端点
//!
//! 实现 SpeechApiPort trait
//!
//! POST {base_url}/api/speech
//! Request: {"text": "..."}  (JSON)
//! Response: audio/mpeg binary；失败时为 JSON 错误体

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SpeechApiError, SpeechApiPort};

/// 请求体
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    text: &'a str,
}

/// 结构化错误体，两个字段都可能缺失
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// HTTP Speech API 配置
#[derive(Debug, Clone)]
pub struct HttpSpeechApiConfig {
    /// 代理服务基础 URL
    pub base_url: String,
    /// 请求超时（秒），None 表示不设置
    pub timeout_secs: Option<u64>,
}

impl Default for HttpSpeechApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpSpeechApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// HTTP Speech API 客户端
pub struct HttpSpeechApi {
    client: Client,
    config: HttpSpeechApiConfig,
}

impl HttpSpeechApi {
    pub fn new(config: HttpSpeechApiConfig) -> Result<Self, SpeechApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SpeechApiError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn speech_url(&self) -> String {
        format!("{}/api/speech", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechApiPort for HttpSpeechApi {
    async fn fetch_speech(&self, text: &str) -> Result<Vec<u8>, SpeechApiError> {
        tracing::debug!(url = %self.speech_url(), text_len = text.len(), "Requesting speech");

        let response = self
            .client
            .post(self.speech_url())
            .json(&SpeechHttpRequest { text })
            .send()
            .await
            .map_err(|e| SpeechApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default();
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(SpeechApiError::from_status(
                status.as_u16(),
                body.message,
                body.error,
                status_text,
            ));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SpeechApiError::Network(e.to_string()))?
            .to_vec();

        tracing::debug!(audio_size = audio_data.len(), "Speech received");

        Ok(audio_data)
    }
}
