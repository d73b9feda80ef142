//! SpeechForm - 表单控制器
//!
//! 状态机见 [`UiState`]；同一时刻最多一个在途请求

use std::sync::Arc;

use thiserror::Error;

use super::view::{FormView, PROCESSING_LABEL, SUBMIT_LABEL};
use crate::application::ports::{AudioUrlPort, SpeechApiError, SpeechApiPort};
use crate::domain::{
    cap_text, count_chars, count_words, validate_text, AudioUrl, TextValidationError, UiState,
    AUDIO_MPEG,
};

/// 提交失败（未发出请求）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(TextValidationError),

    #[error("A speech request is already in flight")]
    InFlight,
}

/// 已进入 Submitting 状态、尚未发出的请求
pub struct PendingSpeech {
    api: Arc<dyn SpeechApiPort>,
    text: String,
}

impl PendingSpeech {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 发出唯一一次网络请求
    pub async fn send(self) -> Result<Vec<u8>, SpeechApiError> {
        self.api.fetch_speech(&self.text).await
    }
}

/// 文本转语音表单
pub struct SpeechForm {
    api: Arc<dyn SpeechApiPort>,
    audio_urls: Arc<dyn AudioUrlPort>,
    text: String,
    touched: bool,
    validation: Option<TextValidationError>,
    state: UiState,
    /// 提交期间仍在展示的上一段音频，响应到达后释放
    superseded_audio: Option<AudioUrl>,
}

impl SpeechForm {
    /// 挂载：初始为 Idle
    pub fn new(api: Arc<dyn SpeechApiPort>, audio_urls: Arc<dyn AudioUrlPort>) -> Self {
        Self {
            api,
            audio_urls,
            text: String::new(),
            touched: false,
            validation: None,
            state: UiState::Idle,
            superseded_audio: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 输入变化，超出上限的字符直接丢弃
    pub fn input(&mut self, value: &str) {
        self.text = cap_text(value);
        self.validation = validate_text(&self.text).err();
    }

    /// 失焦
    pub fn blur(&mut self) {
        self.touched = true;
        self.validation = validate_text(&self.text).err();
    }

    /// 校验并进入 Submitting 状态
    pub fn begin_submit(&mut self) -> Result<PendingSpeech, FormError> {
        if self.state.is_submitting() {
            tracing::warn!("Submit ignored: request already in flight");
            return Err(FormError::InFlight);
        }

        self.touched = true;
        if let Err(e) = validate_text(&self.text) {
            self.validation = Some(e);
            return Err(FormError::Invalid(e));
        }
        self.validation = None;

        let previous = std::mem::replace(&mut self.state, UiState::Submitting);
        if let UiState::Success { audio_url } = previous {
            self.superseded_audio = Some(audio_url);
        }

        tracing::debug!(text_len = self.text.len(), "Speech form submitting");

        Ok(PendingSpeech {
            api: self.api.clone(),
            text: self.text.clone(),
        })
    }

    /// 应用请求结果，退出 Submitting 状态
    pub fn finish(&mut self, result: Result<Vec<u8>, SpeechApiError>) {
        if !self.state.is_submitting() {
            tracing::warn!(state = self.state.name(), "Speech result ignored: no request in flight");
            return;
        }

        self.state = match result {
            Ok(audio_data) => {
                let audio_size = audio_data.len();
                let audio_url = self.audio_urls.create(audio_data, AUDIO_MPEG);
                tracing::debug!(url = %audio_url, audio_size, "Speech form received audio");
                UiState::Success { audio_url }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Speech form request failed");
                UiState::Error {
                    message: e.to_string(),
                }
            }
        };

        if let Some(url) = self.superseded_audio.take() {
            self.audio_urls.revoke(&url);
        }
    }

    /// 完整提交流程
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let pending = self.begin_submit()?;
        let result = pending.send().await;
        self.finish(result);
        Ok(())
    }

    pub fn view(&self) -> FormView {
        let submitting = self.state.is_submitting();
        let audio_src = match &self.state {
            UiState::Success { audio_url } => Some(audio_url.to_string()),
            UiState::Submitting => self.superseded_audio.as_ref().map(|u| u.to_string()),
            _ => None,
        };

        FormView {
            text: self.text.clone(),
            validation_message: self
                .validation
                .filter(|_| self.touched)
                .map(|e| e.to_string()),
            error_message: self.state.error_message().map(str::to_string),
            word_count: count_words(&self.text),
            char_count: count_chars(&self.text),
            button_label: if submitting { PROCESSING_LABEL } else { SUBMIT_LABEL },
            button_disabled: submitting || self.validation.is_some(),
            audio_src,
        }
    }
}

impl Drop for SpeechForm {
    fn drop(&mut self) {
        if let Some(url) = self.superseded_audio.take() {
            self.audio_urls.revoke(&url);
        }
        if let Some(url) = self.state.audio_url() {
            self.audio_urls.revoke(url);
        }
    }
}
