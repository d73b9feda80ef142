//! Speech API Port - 客户端调用代理端点的抽象
//!
//! 表单控制器通过该端口提交文本，具体实现见 infrastructure/adapters/client

use async_trait::async_trait;
use thiserror::Error;

/// 请求代理端点失败
///
/// `Display` 即界面上展示的错误文案
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechApiError {
    /// 端点返回非 2xx
    #[error("Failed to fetch speech: {status} - {message}")]
    Status { status: u16, message: String },

    /// 连接失败、读取失败等
    #[error("Failed to fetch speech: {0}")]
    Network(String),
}

impl SpeechApiError {
    /// 由状态码与结构化错误体构造
    ///
    /// 消息优先级：`message` 字段 > `error` 字段 > 状态码原因短语
    pub fn from_status(
        status: u16,
        message: Option<String>,
        error: Option<String>,
        status_text: &str,
    ) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .or_else(|| error.filter(|e| !e.is_empty()))
            .unwrap_or_else(|| status_text.to_string());
        Self::Status { status, message }
    }
}

/// Speech API Port
#[async_trait]
pub trait SpeechApiPort: Send + Sync {
    /// 提交文本，返回完整的音频数据
    async fn fetch_speech(&self, text: &str) -> Result<Vec<u8>, SpeechApiError>;
}
