//! k-nearest-neighbor gesture classifier
//!
//! Online-trained k-NN over 63-float hand pose vectors: Euclidean distance,
//! full linear scan, majority vote among the k closest samples. Sample
//! counts stay in the tens-to-hundreds range, so a linear scan fits
//! comfortably inside a 30 fps frame budget and no index structure is used.

use std::num::NonZeroUsize;

use crate::classifier::error::GestureError;
use crate::classifier::features::{to_feature_vector, FeatureVector};
use crate::classifier::store::SampleStore;

/// k used by the game unless the caller picks another
pub const DEFAULT_K: usize = 3;

pub struct KnnClassifier {
    store: SampleStore,
    k: NonZeroUsize,
}

fn euclidean(a: &FeatureVector, b: &FeatureVector) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

impl KnnClassifier {
    /// `k` is fixed for the classifier's lifetime; construct a new instance
    /// to change it.
    pub fn new(k: NonZeroUsize) -> Self {
        Self {
            store: SampleStore::new(),
            k,
        }
    }

    pub fn k(&self) -> usize {
        self.k.get()
    }

    pub fn sample_count(&self) -> usize {
        self.store.len()
    }

    /// Add one labeled example. Preloaded dataset records and user-recorded
    /// prototypes go through the same path; the model does not distinguish
    /// them.
    pub fn learn(&mut self, label: &str, features: &[f32]) -> Result<(), GestureError> {
        self.store.insert(label, features)
    }

    /// Classify a pose by majority vote among the k nearest samples.
    ///
    /// Ties are resolved deterministically: highest vote count first, then
    /// the tied label whose closest neighbor is nearest to the query, then
    /// the label learned earliest.
    pub fn classify(&self, features: &[f32]) -> Result<String, GestureError> {
        let query = to_feature_vector(features)?;
        if self.store.is_empty() {
            return Err(GestureError::InsufficientTrainingData);
        }

        // Distance to every stored sample, tagged with insertion index.
        let mut candidates: Vec<(f32, usize, &str)> = self
            .store
            .iter()
            .enumerate()
            .map(|(index, sample)| (euclidean(&query, sample.features()), index, sample.label()))
            .collect();

        // total_cmp gives a total order; inputs are validated finite so no
        // NaN reaches this sort. Index breaks exact distance ties.
        candidates.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let k = self.k.get().min(candidates.len());
        let neighbors = &candidates[..k];

        // Tally votes. Each label's first occurrence in the sorted neighbor
        // list is its closest representative, which drives the tie-break.
        let mut tally: Vec<(&str, usize, f32, usize)> = Vec::with_capacity(k);
        for &(distance, index, label) in neighbors {
            match tally.iter_mut().find(|entry| entry.0 == label) {
                Some(entry) => entry.1 += 1,
                None => tally.push((label, 1, distance, index)),
            }
        }

        let winner = tally
            .iter()
            .max_by(|a, b| {
                a.1.cmp(&b.1)
                    .then(b.2.total_cmp(&a.2))
                    .then(b.3.cmp(&a.3))
            })
            .map(|entry| entry.0.to_owned());

        // Tally is non-empty whenever the store is.
        winner.ok_or(GestureError::InsufficientTrainingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(k: usize) -> KnnClassifier {
        KnnClassifier::new(NonZeroUsize::new(k).unwrap())
    }

    fn vector(first: f32) -> Vec<f32> {
        let mut v = vec![0.0; 63];
        v[0] = first;
        v
    }

    #[test]
    fn test_untrained_classifier_errors() {
        let knn = classifier(3);
        assert_eq!(
            knn.classify(&vector(0.5)),
            Err(GestureError::InsufficientTrainingData)
        );
    }

    #[test]
    fn test_wrong_length_query_rejected() {
        let mut knn = classifier(1);
        knn.learn("fist", &vector(0.0)).unwrap();
        assert_eq!(
            knn.classify(&[0.0; 62]),
            Err(GestureError::InvalidFeatureLength { got: 62 })
        );
    }

    #[test]
    fn test_exact_match_with_k_one() {
        let mut knn = classifier(1);
        knn.learn("fist", &vector(0.0)).unwrap();
        knn.learn("peace", &vector(1.0)).unwrap();
        assert_eq!(knn.classify(&vector(1.0)).unwrap(), "peace");
    }

    #[test]
    fn test_learned_vector_is_its_own_nearest() {
        // Distance to itself is 0, so the sample's own label must win
        // regardless of k.
        let mut knn = classifier(3);
        knn.learn("thumbs_up", &vector(0.2)).unwrap();
        knn.learn("thumbs_down", &vector(0.8)).unwrap();
        knn.learn("ok", &vector(0.5)).unwrap();
        assert_eq!(knn.classify(&vector(0.5)).unwrap(), "ok");
    }

    #[test]
    fn test_majority_vote_beats_single_closest() {
        let mut knn = classifier(3);
        knn.learn("fist", &vector(0.50)).unwrap();
        knn.learn("peace", &vector(0.60)).unwrap();
        knn.learn("peace", &vector(0.65)).unwrap();
        // Query nearest to the lone fist sample, but peace holds two of the
        // three neighbor slots.
        assert_eq!(knn.classify(&vector(0.52)).unwrap(), "peace");
    }

    #[test]
    fn test_k_clamps_to_store_size() {
        let mut knn = classifier(5);
        knn.learn("fist", &vector(0.0)).unwrap();
        knn.learn("peace", &vector(1.0)).unwrap();
        assert_eq!(knn.classify(&vector(0.1)).unwrap(), "fist");
    }

    #[test]
    fn test_vote_tie_prefers_closer_label() {
        let mut knn = classifier(2);
        knn.learn("far", &vector(1.0)).unwrap();
        knn.learn("near", &vector(0.4)).unwrap();
        // One vote each; "near" has the smaller distance to the query.
        assert_eq!(knn.classify(&vector(0.5)).unwrap(), "near");
    }

    #[test]
    fn test_exact_distance_tie_prefers_earliest_learned() {
        let mut knn = classifier(2);
        knn.learn("left", &vector(-0.5)).unwrap();
        knn.learn("right", &vector(0.5)).unwrap();
        // Both samples sit exactly 0.5 from the query.
        assert_eq!(knn.classify(&vector(0.0)).unwrap(), "left");
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let mut knn = classifier(2);
        knn.learn("left", &vector(-0.5)).unwrap();
        knn.learn("right", &vector(0.5)).unwrap();
        let first = knn.classify(&vector(0.0)).unwrap();
        let second = knn.classify(&vector(0.0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_is_always_a_learned_label() {
        let mut knn = classifier(3);
        let labels = ["fist", "peace", "ok", "thumbs_up"];
        for (i, label) in labels.iter().enumerate() {
            knn.learn(label, &vector(i as f32 * 0.25)).unwrap();
        }
        for q in 0..10 {
            let result = knn.classify(&vector(q as f32 * 0.1)).unwrap();
            assert!(labels.contains(&result.as_str()));
        }
    }
}
