use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::round3;
use crate::{Classification, Emotion, Sentiment};

/// Summary over an ordered sequence of per-frame classifications.
#[derive(Debug, Clone, Serialize)]
pub struct FrameAggregate {
    pub total_frames: usize,
    pub emotion_counts: BTreeMap<Emotion, usize>,
    pub sentiment_counts: BTreeMap<Sentiment, usize>,
    pub dominant_emotion: Emotion,
    pub overall_sentiment: Sentiment,
    pub mean_confidence: f64,
}

impl FrameAggregate {
    /// Aggregates `results`, or `None` for an empty slice.
    ///
    /// Ties on the dominant emotion and overall sentiment go to the label
    /// encountered first in the sequence.
    #[must_use]
    pub fn from_results(results: &[Classification]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let mut emotions: Vec<(Emotion, usize)> = Vec::new();
        let mut sentiments: Vec<(Sentiment, usize)> = Vec::new();
        let mut total_confidence = 0.0;

        for result in results {
            bump(&mut emotions, result.emotion);
            bump(&mut sentiments, result.sentiment);
            total_confidence += result.confidence;
        }

        let dominant_emotion = stable_max(&emotions)?;
        let overall_sentiment = stable_max(&sentiments)?;

        Some(Self {
            total_frames: results.len(),
            emotion_counts: emotions.into_iter().collect(),
            sentiment_counts: sentiments.into_iter().collect(),
            dominant_emotion,
            overall_sentiment,
            mean_confidence: round3(total_confidence / results.len() as f64),
        })
    }

    /// One-line human-readable summary of the aggregate.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Dominant emotion across {} frames: {} ({:.0}% average confidence)",
            self.total_frames,
            self.dominant_emotion,
            self.mean_confidence * 100.0,
        )
    }
}

fn bump<T: PartialEq + Copy>(counts: &mut Vec<(T, usize)>, label: T) {
    match counts.iter_mut().find(|(l, _)| *l == label) {
        Some((_, count)) => *count += 1,
        None => counts.push((label, 1)),
    }
}

// `Iterator::max_by_key` keeps the last maximum, so a manual scan is needed
// to keep the first-encountered label on ties.
fn stable_max<T: Copy>(counts: &[(T, usize)]) -> Option<T> {
    counts
        .iter()
        .fold(None, |best: Option<(T, usize)>, &(label, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
        .map(|(label, _)| label)
}
