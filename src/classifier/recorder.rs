//! Gesture recording and prototype aggregation
//!
//! While the record toggle is on, every classified frame's feature vector is
//! buffered. Stopping reduces the buffer to one prototype: the component-wise
//! mean. Every buffered frame contributes equally, including frames captured
//! before the pose stabilized; no outlier rejection is done.

use crate::classifier::error::GestureError;
use crate::classifier::features::{to_feature_vector, FeatureVector, FEATURE_COUNT};

#[derive(Default)]
pub struct GestureRecorder {
    buffer: Vec<FeatureVector>,
    recording: bool,
}

impl GestureRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Frames captured so far in the active session.
    pub fn frame_count(&self) -> usize {
        self.buffer.len()
    }

    /// Begin a recording session, discarding any leftover frames.
    pub fn start(&mut self) {
        self.buffer.clear();
        self.recording = true;
    }

    /// Buffer one frame. Silently ignored when recording is not active,
    /// mirroring the external record toggle; shape violations are still
    /// reported.
    pub fn record(&mut self, features: &[f32]) -> Result<(), GestureError> {
        let features = to_feature_vector(features)?;
        if self.recording {
            self.buffer.push(features);
        }
        Ok(())
    }

    /// End the session and return the prototype vector (component-wise
    /// mean of all buffered frames). The buffer is cleared whether or not
    /// a prototype was produced.
    pub fn stop(&mut self) -> Result<FeatureVector, GestureError> {
        self.recording = false;
        if self.buffer.is_empty() {
            return Err(GestureError::EmptyRecording);
        }

        let mut mean = [0.0f32; FEATURE_COUNT];
        for frame in &self.buffer {
            for (sum, value) in mean.iter_mut().zip(frame.iter()) {
                *sum += value;
            }
        }
        let count = self.buffer.len() as f32;
        for value in mean.iter_mut() {
            *value /= count;
        }

        self.buffer.clear();
        Ok(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(first: f32) -> Vec<f32> {
        let mut v = vec![0.0; 63];
        v[0] = first;
        v
    }

    #[test]
    fn test_identical_frames_average_to_themselves() {
        let mut recorder = GestureRecorder::new();
        let v: Vec<f32> = (0..63).map(|i| i as f32 * 0.01).collect();
        recorder.start();
        recorder.record(&v).unwrap();
        recorder.record(&v).unwrap();
        let prototype = recorder.stop().unwrap();
        assert_eq!(&prototype[..], &v[..]);
    }

    #[test]
    fn test_mean_of_two_frames() {
        let mut recorder = GestureRecorder::new();
        recorder.start();
        recorder.record(&vector(1.0)).unwrap();
        recorder.record(&vector(3.0)).unwrap();
        let prototype = recorder.stop().unwrap();
        assert_eq!(prototype[0], 2.0);
        assert!(prototype[1..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stop_without_frames_errors() {
        let mut recorder = GestureRecorder::new();
        recorder.start();
        assert_eq!(recorder.stop(), Err(GestureError::EmptyRecording));
        assert!(!recorder.is_recording());
    }

    #[test]
    fn test_record_before_start_is_ignored() {
        let mut recorder = GestureRecorder::new();
        recorder.record(&vector(1.0)).unwrap();
        assert_eq!(recorder.frame_count(), 0);
        recorder.start();
        assert_eq!(recorder.stop(), Err(GestureError::EmptyRecording));
    }

    #[test]
    fn test_wrong_length_frame_rejected() {
        let mut recorder = GestureRecorder::new();
        recorder.start();
        assert_eq!(
            recorder.record(&[0.0; 10]),
            Err(GestureError::InvalidFeatureLength { got: 10 })
        );
        assert_eq!(recorder.frame_count(), 0);
    }

    #[test]
    fn test_stop_clears_buffer_for_next_session() {
        let mut recorder = GestureRecorder::new();
        recorder.start();
        recorder.record(&vector(5.0)).unwrap();
        recorder.stop().unwrap();

        recorder.start();
        recorder.record(&vector(1.0)).unwrap();
        let prototype = recorder.stop().unwrap();
        assert_eq!(prototype[0], 1.0);
    }
}
