//! Application State

use std::sync::Arc;

use crate::application::{SpeechSynthesizerPort, SynthesizeSpeechHandler};
use crate::domain::VoiceSelection;

/// 应用状态
///
/// 只读共享，请求之间互不影响
pub struct AppState {
    pub synthesize_speech_handler: SynthesizeSpeechHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>, selection: VoiceSelection) -> Self {
        Self {
            synthesize_speech_handler: SynthesizeSpeechHandler::new(synthesizer, selection),
        }
    }
}
