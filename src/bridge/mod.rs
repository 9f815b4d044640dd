//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod classifier_integration;
mod hand_landmarks;

pub use hand_landmarks::{
    // WASM entry points
    update_hand_landmarks,
    clear_hand_landmarks,
    // Internal API
    flatten_landmarks,
    get_hand_landmarks,
    HandLandmark,
    // Landmark order contract
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};

pub use classifier_integration::{
    // WASM entry points
    init_classifier,
    learn_sample,
    process_frame,
    start_recording,
    stop_recording,
    sample_count,
    is_recording,
    recorded_frame_count,
    last_classification,
    // Internal API
    try_learn_sample,
    try_stop_recording,
};
