//! Speech Context - 客户端 UI 状态

use serde::{Deserialize, Serialize};

/// 本地可播放的音频引用（对象 URL）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioUrl(String);

impl AudioUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AudioUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 表单 UI 状态
///
/// 状态转换:
/// - Idle / Success / Error → Submitting（提交）
/// - Submitting → Success（收到音频）
/// - Submitting → Error（请求失败）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Success { audio_url: AudioUrl },
    Error { message: String },
}

impl UiState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn audio_url(&self) -> Option<&AudioUrl> {
        match self {
            Self::Success { audio_url } => Some(audio_url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}
