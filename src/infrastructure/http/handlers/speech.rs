//! Speech Handler - 语音合成代理端点

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::SynthesizeSpeech;
use crate::infrastructure::http::dto::SpeechRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/speech
///
/// 成功时返回完整缓冲的 audio/mpeg 数据，失败时返回 `{"error": ...}`
///
/// 请求体无法解析（含 `null` 请求体）按服务端错误处理，返回 500
pub async fn synthesize_speech(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: SpeechRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    let command = SynthesizeSpeech {
        text: req.into_text()?,
    };
    let result = state.synthesize_speech_handler.handle(command).await?;

    let content_length = result.audio_data.len().to_string();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, result.content_type),
            (header::CONTENT_LENGTH, content_length),
        ],
        result.audio_data,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SpeechSynthesizerPort;
    use crate::domain::VoiceSelection;
    use crate::infrastructure::adapters::FakeSpeechClient;
    use crate::infrastructure::http::routes::create_routes;
    use axum::{body::Body, http::Request, Router};
    use tower::util::ServiceExt;

    fn app(synthesizer: Arc<FakeSpeechClient>) -> Router {
        let synthesizer: Arc<dyn SpeechSynthesizerPort> = synthesizer;
        let state = Arc::new(AppState::new(synthesizer, VoiceSelection::default()));
        create_routes().with_state(state)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/speech")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_text_returns_400() {
        let synthesizer = Arc::new(FakeSpeechClient::with_audio(b"audio data".to_vec()));
        let response = app(synthesizer.clone()).oneshot(post_json("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "Text is required" })
        );
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_text_returns_400() {
        let synthesizer = Arc::new(FakeSpeechClient::with_audio(b"audio data".to_vec()));
        let response = app(synthesizer.clone())
            .oneshot(post_json(r#"{"text": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_returns_audio() {
        let synthesizer = Arc::new(FakeSpeechClient::with_audio(b"audio data".to_vec()));
        let response = app(synthesizer.clone())
            .oneshot(post_json(r#"{"text": "Hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/mpeg"
        );
        let content_length: usize = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.len(), content_length);
        assert_eq!(&body[..], b"audio data");
        assert_eq!(synthesizer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_returns_500() {
        let synthesizer = Arc::new(FakeSpeechClient::failing("OpenAI Error"));
        let response = app(synthesizer.clone())
            .oneshot(post_json(r#"{"text": "Hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "OpenAI Error" })
        );
        assert_eq!(synthesizer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_falsy_text_returns_text_required() {
        for body in [r#"{"text": false}"#, r#"{"text": 0}"#, r#"{"text": null}"#] {
            let synthesizer = Arc::new(FakeSpeechClient::with_audio(b"audio data".to_vec()));
            let response = app(synthesizer.clone())
                .oneshot(post_json(body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                json_body(response).await,
                serde_json::json!({ "error": "Text is required" })
            );
            assert_eq!(synthesizer.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_non_string_text_returns_400() {
        let synthesizer = Arc::new(FakeSpeechClient::with_audio(b"audio data".to_vec()));
        let response = app(synthesizer.clone())
            .oneshot(post_json(r#"{"text": 42}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "Text must be a string" })
        );
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unparseable_body_returns_500() {
        for body in ["{not json", "null", ""] {
            let synthesizer = Arc::new(FakeSpeechClient::with_audio(b"audio data".to_vec()));
            let response = app(synthesizer.clone())
                .oneshot(post_json(body))
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "body: {:?}",
                body
            );
            let json = json_body(response).await;
            assert!(!json["error"].as_str().unwrap().is_empty());
            assert_eq!(synthesizer.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let synthesizer = Arc::new(FakeSpeechClient::with_audio(Vec::new()));
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();
        let response = app(synthesizer).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
