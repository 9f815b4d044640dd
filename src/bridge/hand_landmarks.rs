//! Hand landmark storage and JS bridge
//!
//! Receives MediaPipe Hands landmarks from JavaScript once per frame and
//! stores them for the classification path to read. Landmark order is fixed
//! by MediaPipe and must match the order used during training; the index
//! constants below document that contract.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::classifier::{FeatureVector, COORDS_PER_LANDMARK, FEATURE_COUNT, LANDMARK_COUNT};

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D landmark point in normalized image/depth space
#[derive(Clone, Copy, Default)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Internal storage for the current frame's hand
struct HandStore {
    landmarks: [HandLandmark; LANDMARK_COUNT],
    has_data: bool,
}

impl Default for HandStore {
    fn default() -> Self {
        Self {
            landmarks: [HandLandmark::default(); LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static HAND: RefCell<HandStore> = RefCell::new(HandStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values
/// (21 landmarks × 3 coordinates: x, y, z)
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    if data.len() != FEATURE_COUNT {
        web_sys::console::warn_1(
            &format!(
                "Invalid hand landmark data length: {} (expected {})",
                data.len(),
                FEATURE_COUNT
            )
            .into(),
        );
        return;
    }

    HAND.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        for i in 0..LANDMARK_COUNT {
            store.landmarks[i] = HandLandmark {
                x: data[i * COORDS_PER_LANDMARK],
                y: data[i * COORDS_PER_LANDMARK + 1],
                z: data[i * COORDS_PER_LANDMARK + 2],
            };
        }
        store.has_data = true;
    });
}

/// Called from JavaScript when the detector loses the hand
#[wasm_bindgen]
pub fn clear_hand_landmarks() {
    HAND.with(|store_cell| {
        store_cell.borrow_mut().has_data = false;
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Get the current frame's landmarks, if the detector reported a hand
pub fn get_hand_landmarks() -> Option<[HandLandmark; LANDMARK_COUNT]> {
    HAND.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.landmarks)
        } else {
            None
        }
    })
}

/// Flatten landmarks into a feature vector in (x, y, z) landmark-index
/// order, the same order used for every stored training sample.
pub fn flatten_landmarks(landmarks: &[HandLandmark; LANDMARK_COUNT]) -> FeatureVector {
    let mut features = [0.0; FEATURE_COUNT];
    for (i, lm) in landmarks.iter().enumerate() {
        features[i * COORDS_PER_LANDMARK] = lm.x;
        features[i * COORDS_PER_LANDMARK + 1] = lm.y;
        features[i * COORDS_PER_LANDMARK + 2] = lm.z;
    }
    features
}
