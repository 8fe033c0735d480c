use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Closed set of emotion labels the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub const ALL: [Self; 7] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Surprise,
        Self::Disgust,
        Self::Neutral,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Neutral => "neutral",
        }
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Emotion {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == value)
            .ok_or_else(|| format!("Unknown emotion: {value}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_serializes_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&Emotion::Joy).expect("Serialized"),
            r#""joy""#
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).expect("Serialized"),
            r#""negative""#
        );
    }

    #[test]
    fn emotion_round_trips_through_name() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::try_from(emotion.name()), Ok(emotion));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(Emotion::try_from("melancholy").is_err());
    }
}
