//! Gesture Web - hand gesture recognition game core
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - Console logging plumbing
//! - The wasm_bindgen start hook
//!
//! Video capture, MediaPipe Hands tracking, canvas drawing, and the
//! round/score/timer game loop all live in JavaScript and talk to this
//! crate through the `bridge` module.

mod bridge;
mod classifier;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_hand_landmarks, init_classifier, is_recording, last_classification, learn_sample,
    process_frame, recorded_frame_count, sample_count, start_recording, stop_recording,
    update_hand_landmarks,
};

pub use classifier::{GestureError, GestureRecorder, KnnClassifier, FEATURE_COUNT, LANDMARK_COUNT};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (crate::log(&format_args!($($t)*).to_string()))
}

// Native builds (tests) have no JS console; swallow the message.
#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {
        let _ = format_args!($($t)*);
    };
}

pub(crate) use console_log;

// ============================================================================
// WASM ENTRY POINT
// ============================================================================

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
