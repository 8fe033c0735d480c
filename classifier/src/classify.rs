use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::{Emotion, Sentiment};

/// Result of classifying a single piece of text.
///
/// `scores` always carries all seven emotions. The primary emotion's score
/// equals `confidence`; the rest are independently sampled filler values and
/// do not sum to 1.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub text: String,
    pub emotion: Emotion,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub scores: BTreeMap<Emotion, f64>,
}

struct Rule {
    keywords: &'static [&'static str],
    emotion: Emotion,
    sentiment: Sentiment,
    confidence: RangeInclusive<f64>,
}

/// Ordered rule table. The first rule with any keyword present as a
/// substring of the case-folded input wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["happy", "joy", "excited", "wonderful", "amazing", "great"],
        emotion: Emotion::Joy,
        sentiment: Sentiment::Positive,
        confidence: 0.85..=0.95,
    },
    Rule {
        keywords: &["sad", "disappointed", "terrible", "awful", "depressed"],
        emotion: Emotion::Sadness,
        sentiment: Sentiment::Negative,
        confidence: 0.80..=0.92,
    },
    Rule {
        keywords: &["angry", "furious", "mad", "irritated", "annoyed"],
        emotion: Emotion::Anger,
        sentiment: Sentiment::Negative,
        confidence: 0.75..=0.90,
    },
    Rule {
        keywords: &["scared", "afraid", "terrified", "frightened"],
        emotion: Emotion::Fear,
        sentiment: Sentiment::Negative,
        confidence: 0.70..=0.88,
    },
    Rule {
        keywords: &["surprised", "shocked", "amazed", "wow"],
        emotion: Emotion::Surprise,
        sentiment: Sentiment::Neutral,
        confidence: 0.75..=0.85,
    },
];

const FALLBACK_CONFIDENCE: RangeInclusive<f64> = 0.70..=0.85;

/// Filler range for non-primary emotion scores.
const SECONDARY_SCORE: RangeInclusive<f64> = 0.05..=0.3;

/// Round to 3 decimals, the precision every wire field uses.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Classifies `text` with an explicit random source.
///
/// Total over any string input. Blank input is not rejected here; it simply
/// falls through to the neutral rule. Callers that must reject blank text do
/// so before calling.
pub fn classify_with<R: Rng>(text: &str, rng: &mut R) -> Classification {
    let folded = text.to_lowercase();

    let (emotion, sentiment, range) = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| folded.contains(kw)))
        .map_or(
            (Emotion::Neutral, Sentiment::Neutral, FALLBACK_CONFIDENCE),
            |rule| (rule.emotion, rule.sentiment, rule.confidence.clone()),
        );

    let confidence = round3(rng.gen_range(range));

    let scores = Emotion::ALL
        .into_iter()
        .map(|e| {
            let score = if e == emotion {
                confidence
            } else {
                round3(rng.gen_range(SECONDARY_SCORE))
            };
            (e, score)
        })
        .collect();

    Classification {
        text: text.to_owned(),
        emotion,
        sentiment,
        confidence,
        scores,
    }
}

/// Classifies `text` with the thread-local random source.
pub fn classify(text: &str) -> Classification {
    classify_with(text, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn scores_always_cover_all_seven_emotions() {
        let mut rng = rng();
        for text in ["I am happy", "so sad", "whatever", "", "WOW!!!"] {
            let sut = classify_with(text, &mut rng);

            assert_eq!(sut.scores.len(), 7, "text={text:?}");
            for emotion in Emotion::ALL {
                let score = sut.scores[&emotion];
                assert!((0.0..=1.0).contains(&score), "emotion={emotion} score={score}");
            }
            assert_eq!(sut.scores[&sut.emotion], sut.confidence);
        }
    }

    #[test]
    fn happy_maps_to_joy_positive() {
        let mut rng = rng();
        for text in ["happy", "I am HAPPY today", "unhappy camper"] {
            let sut = classify_with(text, &mut rng);

            assert_eq!(sut.emotion, Emotion::Joy, "text={text:?}");
            assert_eq!(sut.sentiment, Sentiment::Positive);
            assert!((0.85..=0.95).contains(&sut.confidence));
        }
    }

    #[test]
    fn unmatched_text_is_neutral() {
        let mut rng = rng();
        for text in ["the weather report", "", "42"] {
            let sut = classify_with(text, &mut rng);

            assert_eq!(sut.emotion, Emotion::Neutral, "text={text:?}");
            assert_eq!(sut.sentiment, Sentiment::Neutral);
            assert!((0.70..=0.85).contains(&sut.confidence));
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        // "sad" and "angry" both present; the sadness rule comes first.
        let sut = classify_with("sad and angry at once", &mut rng());
        assert_eq!(sut.emotion, Emotion::Sadness);
        assert_eq!(sut.sentiment, Sentiment::Negative);
    }

    #[test]
    fn secondary_scores_stay_in_filler_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let sut = classify_with("terrified of spiders", &mut rng);
            assert_eq!(sut.emotion, Emotion::Fear);

            for (emotion, score) in &sut.scores {
                if *emotion != sut.emotion {
                    assert!((0.05..=0.3).contains(score), "emotion={emotion} score={score}");
                }
            }
        }
    }

    #[test]
    fn confidence_is_rounded_to_three_decimals() {
        let mut rng = rng();
        for _ in 0..100 {
            let sut = classify_with("great stuff", &mut rng);
            assert_eq!(sut.confidence, round3(sut.confidence));
        }
    }
}
