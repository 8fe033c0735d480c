use std::collections::BTreeMap;
use std::time::Duration;

use axum::Json;
use classifier::{classify_with, Emotion, FrameAggregate, Sentiment};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

use super::predict::Analysis;
use super::timestamp;

/// Stand-in for real frame sampling: the synthesized frame count is drawn
/// from this range, then capped by the caller's `max_frames`.
const FRAME_COUNT: std::ops::RangeInclusive<u64> = 3..=8;

const DEFAULT_FRAME_INTERVAL: i64 = 30;
const DEFAULT_MAX_FRAMES: i64 = 100;

/// Fixed pause modeling video decode time.
const PROCESSING_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize)]
pub struct VideoSummary {
    pub total_frames_analyzed: usize,
    pub dominant_emotion: Emotion,
    pub overall_sentiment: Sentiment,
    pub confidence: f64,
    pub emotion_distribution: BTreeMap<Emotion, usize>,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub video_url: String,
    pub frame_interval: i64,
    pub max_frames: i64,
    pub analysis_results: Vec<Analysis>,
    pub summary: VideoSummary,
    pub processing_time_ms: u32,
    pub timestamp: String,
}

pub async fn analyze_video(body: Option<Json<Value>>) -> Result<Json<VideoResponse>, ApiError> {
    let data = body.map_or(Value::Null, |Json(v)| v);
    let params = VideoParams::parse(&data)?;

    tokio::time::sleep(PROCESSING_DELAY).await;

    synthesize(params, &mut rand::thread_rng()).map(Json)
}

#[derive(Debug)]
struct VideoParams {
    video_url: String,
    frame_interval: i64,
    max_frames: i64,
}

impl VideoParams {
    fn parse(data: &Value) -> Result<Self, ApiError> {
        let video_url = data
            .get("video_url")
            .ok_or_else(|| ApiError::validation("Missing video_url field"))?
            .as_str()
            .ok_or_else(|| ApiError::validation("video_url must be a string"))?
            .to_owned();

        let frame_interval = optional_int(data, "frame_interval", DEFAULT_FRAME_INTERVAL)?;
        let max_frames = optional_int(data, "max_frames", DEFAULT_MAX_FRAMES)?;
        if max_frames < 1 {
            return Err(ApiError::validation("max_frames must be a positive integer"));
        }

        Ok(Self {
            video_url,
            frame_interval,
            max_frames,
        })
    }
}

fn optional_int(data: &Value, field: &str, default: i64) -> Result<i64, ApiError> {
    match data.get(field) {
        None => Ok(default),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| ApiError::validation(format!("{field} must be an integer"))),
    }
}

fn synthesize<R: Rng>(params: VideoParams, rng: &mut R) -> Result<VideoResponse, ApiError> {
    let num_frames = rng.gen_range(FRAME_COUNT).min(params.max_frames as u64);

    let results: Vec<_> = (1..=num_frames)
        .map(|n| {
            let frame_text = format!("Video frame {n}: Person showing mixed emotions");
            classify_with(&frame_text, rng)
        })
        .collect();

    let aggregate = FrameAggregate::from_results(&results)
        .ok_or_else(|| ApiError::internal("Video analysis", anyhow::anyhow!("No frames synthesized")))?;

    let summary = VideoSummary {
        total_frames_analyzed: aggregate.total_frames,
        dominant_emotion: aggregate.dominant_emotion,
        overall_sentiment: aggregate.overall_sentiment,
        confidence: aggregate.mean_confidence,
        description: aggregate.summary_line(),
        emotion_distribution: aggregate.emotion_counts,
    };

    Ok(VideoResponse {
        video_url: params.video_url,
        frame_interval: params.frame_interval,
        max_frames: params.max_frames,
        analysis_results: results.into_iter().map(|r| Analysis::wrap(r, rng)).collect(),
        summary,
        processing_time_ms: rng.gen_range(2000..=5000),
        timestamp: timestamp(),
    })
}
