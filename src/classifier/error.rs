//! Error types for the gesture classification core
//!
//! All variants are recoverable conditions: bad input is reported to the
//! caller, never panicked on, and the classifier state stays usable.

use crate::classifier::features::FEATURE_COUNT;

/// Errors surfaced by the classifier, store, and recorder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GestureError {
    /// Feature slice was not exactly 63 values (21 landmarks × 3 coords).
    #[error("invalid feature length: expected {FEATURE_COUNT}, got {got}")]
    InvalidFeatureLength { got: usize },

    /// Feature slice contained a NaN or infinite component.
    #[error("non-finite feature value at index {index}")]
    NonFiniteFeature { index: usize },

    /// Gesture label was empty.
    #[error("gesture label must not be empty")]
    InvalidLabel,

    /// Classify was called before any sample was learned.
    #[error("no training samples learned yet")]
    InsufficientTrainingData,

    /// Recording was stopped without any recorded frames.
    #[error("recording stopped with no frames captured")]
    EmptyRecording,
}
