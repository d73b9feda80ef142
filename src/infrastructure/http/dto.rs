//! Data Transfer Objects

use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// POST /api/speech 请求体
///
/// 只读取 `text` 字段，其余字段忽略
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl SpeechRequest {
    /// 取出文本
    ///
    /// null / false / 0 / 缺失 视为未提供（空字符串交给领域层判断）；
    /// 其余非字符串值直接拒绝
    pub fn into_text(self) -> Result<Option<String>, ApiError> {
        match self.text {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ApiError::BadRequest("Text must be a string".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(body: &str) -> Result<Option<String>, ApiError> {
        serde_json::from_str::<SpeechRequest>(body).unwrap().into_text()
    }

    #[test]
    fn test_speech_request_tolerates_missing_and_extra_fields() {
        assert_eq!(text_of("{}").unwrap(), None);
        assert_eq!(text_of(r#"{"text": null}"#).unwrap(), None);
        assert_eq!(
            text_of(r#"{"text": "Hello", "voice": "echo"}"#).unwrap().as_deref(),
            Some("Hello")
        );
    }

    #[test]
    fn test_falsy_values_read_as_missing() {
        assert_eq!(text_of(r#"{"text": false}"#).unwrap(), None);
        assert_eq!(text_of(r#"{"text": 0}"#).unwrap(), None);
        assert_eq!(text_of(r#"{"text": 0.0}"#).unwrap(), None);
        assert_eq!(text_of(r#"{"text": ""}"#).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_truthy_non_string_is_rejected() {
        for body in [r#"{"text": true}"#, r#"{"text": 42}"#, r#"{"text": ["a"]}"#] {
            assert!(matches!(text_of(body), Err(ApiError::BadRequest(_))));
        }
    }
}
