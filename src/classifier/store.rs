//! Append-only training sample storage
//!
//! The store grows for the lifetime of the session and never forgets:
//! there is no deletion path, and the only reset is constructing a new
//! classifier. Insertion order is preserved because the k-NN tie-break
//! prefers earlier-learned samples.

use crate::classifier::error::GestureError;
use crate::classifier::features::{to_feature_vector, FeatureVector};

/// One labeled training example. Immutable after insertion.
#[derive(Clone, Debug)]
pub struct Sample {
    label: String,
    features: FeatureVector,
}

impl Sample {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }
}

/// Insertion-ordered collection of samples, owned exclusively by the
/// classifier.
#[derive(Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new sample. The label must be non-empty and the feature
    /// slice must pass the 63-length shape check.
    pub fn insert(&mut self, label: &str, features: &[f32]) -> Result<(), GestureError> {
        if label.is_empty() {
            return Err(GestureError::InvalidLabel);
        }
        let features = to_feature_vector(features)?;
        self.samples.push(Sample {
            label: label.to_owned(),
            features,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read-only traversal in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}
