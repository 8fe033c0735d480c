use std::collections::BTreeMap;

use axum::Json;
use classifier::{classify_with, Classification, Emotion, Sentiment};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

use super::timestamp;

/// Wire envelope for one classified text.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub text: String,
    pub emotion: Emotion,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub all_emotions: BTreeMap<Emotion, f64>,
    pub processing_time_ms: u32,
    pub timestamp: String,
}

impl Analysis {
    /// Wraps a classification with cosmetic processing-time jitter and the
    /// current timestamp.
    pub fn wrap<R: Rng>(result: Classification, rng: &mut R) -> Self {
        Self {
            text: result.text,
            emotion: result.emotion,
            sentiment: result.sentiment,
            confidence: result.confidence,
            all_emotions: result.scores,
            processing_time_ms: rng.gen_range(50..=200),
            timestamp: timestamp(),
        }
    }
}

pub async fn predict(body: Option<Json<Value>>) -> Result<Json<Analysis>, ApiError> {
    let data = body.map_or(Value::Null, |Json(v)| v);
    predict_impl(&data, &mut rand::thread_rng()).map(Json)
}

fn predict_impl<R: Rng>(data: &Value, rng: &mut R) -> Result<Analysis, ApiError> {
    let text = required_text(data)?;
    Ok(Analysis::wrap(classify_with(text, rng), rng))
}

fn required_text(data: &Value) -> Result<&str, ApiError> {
    let text = data
        .get("text")
        .ok_or_else(|| ApiError::validation("Missing text field"))?;
    let text = text
        .as_str()
        .ok_or_else(|| ApiError::validation("text must be a string"))?
        .trim();

    if text.is_empty() {
        return Err(ApiError::validation("Text cannot be empty"));
    }
    Ok(text)
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<Analysis>,
}

pub async fn batch_predict(body: Option<Json<Value>>) -> Result<Json<BatchResponse>, ApiError> {
    let data = body.map_or(Value::Null, |Json(v)| v);
    batch_impl(&data, &mut rand::thread_rng()).map(Json)
}

/// Classifies every valid entry of `texts` in order. Non-string and blank
/// entries are silently skipped, not reported.
fn batch_impl<R: Rng>(data: &Value, rng: &mut R) -> Result<BatchResponse, ApiError> {
    let texts = data
        .get("texts")
        .ok_or_else(|| ApiError::validation("Missing texts field"))?;
    let texts = texts
        .as_array()
        .filter(|list| !list.is_empty())
        .ok_or_else(|| ApiError::validation("texts must be a non-empty list"))?;

    let results = texts
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| Analysis::wrap(classify_with(text, rng), rng))
        .collect();

    Ok(BatchResponse { results })
}
