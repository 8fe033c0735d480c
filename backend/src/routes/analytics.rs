use axum::Json;
use chrono::{Duration, Utc};
use classifier::{round3, Emotion};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

use super::{round1, timestamp};

const SAMPLE_TEXTS: &[&str] = &[
    "I'm so excited about this project!",
    "This is really frustrating me.",
    "I feel pretty good today.",
];

const TIME_RANGE_DAYS: i64 = 7;

/// Synthetic usage analytics over a rolling 7-day window.
pub async fn analytics() -> Json<Value> {
    Json(analytics_impl(&mut rand::thread_rng()))
}

fn analytics_impl<R: Rng>(rng: &mut R) -> Value {
    let popular_emotions: Vec<Value> = Emotion::ALL[..5]
        .iter()
        .map(|emotion| {
            json!({
                "emotion": emotion,
                "count": rng.gen_range(100..=800),
            })
        })
        .collect();

    let popular_texts: Vec<Value> = SAMPLE_TEXTS
        .iter()
        .map(|text| {
            json!({
                "text": text,
                "emotion": Emotion::ALL.choose(rng),
                "count": rng.gen_range(25..=150),
                "avg_confidence": round3(rng.gen_range(0.75..0.92)),
            })
        })
        .collect();

    let now = Utc::now();

    json!({
        "popular_emotions": popular_emotions,
        "popular_texts": popular_texts,
        "performance_stats": {
            "total_predictions": rng.gen_range(2000..=15000),
            "avg_processing_time": rng.gen_range(80..=250),
            "success_rate": round1(rng.gen_range(92.0..99.0)),
        },
        "time_range": {
            "start_date": (now - Duration::days(TIME_RANGE_DAYS)).to_rfc3339(),
            "end_date": now.to_rfc3339(),
            "days": TIME_RANGE_DAYS,
        },
        "timestamp": timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn lists_five_emotions_and_three_texts() {
        let sut = analytics_impl(&mut SmallRng::seed_from_u64(21));

        let emotions = sut["popular_emotions"].as_array().expect("popular_emotions");
        assert_eq!(emotions.len(), 5);
        assert_eq!(emotions[0]["emotion"], "joy");

        let texts = sut["popular_texts"].as_array().expect("popular_texts");
        assert_eq!(texts.len(), 3);
        for entry in texts {
            let confidence = entry["avg_confidence"].as_f64().expect("avg_confidence");
            assert!((0.75..=0.92).contains(&confidence));
        }
    }

    #[test]
    fn time_range_spans_seven_days() {
        let sut = analytics_impl(&mut SmallRng::seed_from_u64(22));
        assert_eq!(sut["time_range"]["days"], 7);
        assert!(sut["time_range"]["start_date"].is_string());
    }
}
