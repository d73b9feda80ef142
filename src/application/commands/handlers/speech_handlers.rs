//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::{SynthesizeSpeech, SynthesizeSpeechResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesizerPort, SynthesisRequest};
use crate::domain::{SpeechText, VoiceSelection, AUDIO_MPEG};

// ============================================================================
// SynthesizeSpeech
// ============================================================================

/// SynthesizeSpeech Handler
///
/// received → validating → (rejected | delegating) → (success | failed)
pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    selection: VoiceSelection,
}

impl SynthesizeSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>, selection: VoiceSelection) -> Self {
        Self {
            synthesizer,
            selection,
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let text = SpeechText::parse(command.text)?;

        let request = SynthesisRequest {
            model: self.selection.model.clone(),
            voice: self.selection.voice.clone(),
            input: text.into_inner(),
        };

        tracing::debug!(
            model = %request.model,
            voice = %request.voice,
            text_len = request.input.len(),
            "Delegating speech synthesis"
        );

        let audio = self.synthesizer.synthesize(request).await?;

        tracing::info!(audio_size = audio.audio_data.len(), "Speech synthesized");

        Ok(SynthesizeSpeechResponse {
            audio_data: audio.audio_data,
            content_type: AUDIO_MPEG.to_string(),
        })
    }
}
