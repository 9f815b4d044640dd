//! Classifier integration - connects the k-NN core with landmark data
//!
//! Holds the classifier and recorder state, runs the per-frame
//! classification path, and exposes the training/recording API the game
//! UI drives. Dataset loading stays in JavaScript; each record is passed
//! through `learn_sample` and bad records are reported back for the
//! caller to log and skip.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use wasm_bindgen::prelude::*;

use super::hand_landmarks::{flatten_landmarks, get_hand_landmarks};
use crate::classifier::{GestureError, GestureRecorder, KnnClassifier, DEFAULT_K};
use crate::console_log;

struct ClassifierState {
    classifier: KnnClassifier,
    recorder: GestureRecorder,
    last_result: Option<String>,
}

impl Default for ClassifierState {
    fn default() -> Self {
        Self {
            classifier: KnnClassifier::new(clamp_k(DEFAULT_K)),
            recorder: GestureRecorder::new(),
            last_result: None,
        }
    }
}

thread_local! {
    static CLASSIFIER_STATE: RefCell<ClassifierState> = RefCell::new(ClassifierState::default());
}

fn clamp_k(k: usize) -> NonZeroUsize {
    NonZeroUsize::new(k)
        .or(NonZeroUsize::new(DEFAULT_K))
        .unwrap_or(NonZeroUsize::MIN)
}

fn to_js(err: GestureError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// (Re)create the classifier with the given neighbor count. `k = 0` selects
/// the game default. Discards all learned samples, so this is also the
/// session reset path.
#[wasm_bindgen]
pub fn init_classifier(k: usize) {
    let k = clamp_k(k);
    CLASSIFIER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.classifier = KnnClassifier::new(k);
        state.recorder = GestureRecorder::new();
        state.last_result = None;
    });
    console_log!("Gesture classifier ready (k = {})", k);
}

/// Learn one labeled sample from the preloaded dataset.
///
/// Returns an error for the caller to log when the record is malformed;
/// the rest of the dataset keeps loading.
#[wasm_bindgen]
pub fn learn_sample(label: &str, features: &[f32]) -> Result<(), JsValue> {
    try_learn_sample(label, features).map_err(to_js)
}

/// Run classification for the current frame's hand.
///
/// Returns the winning gesture label, or `None` when no hand is visible or
/// the classifier has no training data yet (an expected transient state
/// during startup, not a fault). When recording is armed, the same frame
/// is buffered for prototype aggregation.
#[wasm_bindgen]
pub fn process_frame() -> Option<String> {
    let landmarks = get_hand_landmarks()?;
    let features = flatten_landmarks(&landmarks);

    CLASSIFIER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();

        if state.recorder.is_recording() {
            if let Err(err) = state.recorder.record(&features) {
                console_log!("Skipping recorded frame: {}", err);
            }
        }

        let result = match state.classifier.classify(&features) {
            Ok(label) => Some(label),
            Err(GestureError::InsufficientTrainingData) => None,
            Err(err) => {
                console_log!("Classification failed: {}", err);
                None
            }
        };
        state.last_result = result.clone();
        result
    })
}

/// Arm recording; every subsequent classified frame is buffered.
#[wasm_bindgen]
pub fn start_recording() {
    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().recorder.start();
    });
}

/// Stop recording and learn the averaged prototype under `label`.
///
/// Errors when no frames were captured or the label is empty; the session
/// buffer is discarded either way.
#[wasm_bindgen]
pub fn stop_recording(label: &str) -> Result<(), JsValue> {
    try_stop_recording(label).map_err(to_js)
}

/// Number of training samples learned so far
#[wasm_bindgen]
pub fn sample_count() -> usize {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().classifier.sample_count())
}

/// Whether a recording session is active
#[wasm_bindgen]
pub fn is_recording() -> bool {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().recorder.is_recording())
}

/// Frames buffered in the active recording session (for UI feedback)
#[wasm_bindgen]
pub fn recorded_frame_count() -> usize {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().recorder.frame_count())
}

/// Most recent classification result (for UI display)
#[wasm_bindgen]
pub fn last_classification() -> Option<String> {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().last_result.clone())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub fn try_learn_sample(label: &str, features: &[f32]) -> Result<(), GestureError> {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow_mut().classifier.learn(label, features))
}

pub fn try_stop_recording(label: &str) -> Result<(), GestureError> {
    CLASSIFIER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let prototype = state.recorder.stop()?;
        state.classifier.learn(label, &prototype)?;
        console_log!(
            "Learned gesture '{}' ({} samples total)",
            label,
            state.classifier.sample_count()
        );
        Ok(())
    })
}
