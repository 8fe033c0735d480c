//! Keyword-based mock emotion classifier.
//!
//! Maps input text to a primary emotion, a sentiment and a randomized
//! confidence score via an ordered keyword table. Produces plausible-looking
//! output for demos and client development; this is not a real NLP model.

mod aggregate;
mod classify;
mod emotion;

pub use aggregate::FrameAggregate;
pub use classify::{classify, classify_with, round3, Classification};
pub use emotion::{Emotion, Sentiment};
