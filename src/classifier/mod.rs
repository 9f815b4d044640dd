//! Classifier module - online k-NN gesture recognition
//!
//! Pure Rust, no JS dependencies. The bridge module feeds this from the
//! MediaPipe Hands pipeline running in JavaScript.

mod error;
mod features;
mod knn;
mod recorder;
mod store;

pub use error::GestureError;
pub use features::{
    to_feature_vector, FeatureVector, COORDS_PER_LANDMARK, FEATURE_COUNT, LANDMARK_COUNT,
};
pub use knn::{KnnClassifier, DEFAULT_K};
pub use recorder::GestureRecorder;
pub use store::{Sample, SampleStore};
