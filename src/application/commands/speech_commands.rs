//! Speech Commands

/// 合成语音命令
///
/// `text` 保持请求体原样，缺失即 None
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub text: Option<String>,
}

/// 合成语音响应
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub audio_data: Vec<u8>,
    pub content_type: String,
}
