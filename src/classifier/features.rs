//! Feature vector contract for hand gestures
//!
//! One hand pose is 21 MediaPipe landmarks, each contributing (x, y, z) in
//! landmark-index order, flattened to exactly 63 floats. Every boundary into
//! the core (learn, classify, record) validates against this shape; nothing
//! is ever truncated or padded.

use crate::classifier::error::GestureError;

/// Number of hand landmarks per detected hand
pub const LANDMARK_COUNT: usize = 21;

/// Coordinates per landmark (x, y, z)
pub const COORDS_PER_LANDMARK: usize = 3;

/// Length of a flattened feature vector
pub const FEATURE_COUNT: usize = LANDMARK_COUNT * COORDS_PER_LANDMARK;

/// One hand pose, flattened. Fixed size makes the length invariant
/// structural: a `FeatureVector` cannot exist with the wrong shape.
pub type FeatureVector = [f32; FEATURE_COUNT];

/// Validate a raw slice into a `FeatureVector`.
///
/// Rejects any length other than 63 and any NaN/infinite component.
pub fn to_feature_vector(data: &[f32]) -> Result<FeatureVector, GestureError> {
    if data.len() != FEATURE_COUNT {
        return Err(GestureError::InvalidFeatureLength { got: data.len() });
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(GestureError::NonFiniteFeature { index });
    }

    let mut features = [0.0; FEATURE_COUNT];
    features.copy_from_slice(data);
    Ok(features)
}
