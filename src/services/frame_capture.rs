// src/services/frame_capture.rs
//
// Saves the rendered window as numbered PNG frames while recording is on.
// nannou writes the captured frame on its own thread once the frame is
// presented, so this only hands out paths and keeps count.

use log::{info, warn};
use nannou::window::Window;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FrameCapture {
    output_dir: PathBuf,
    frame_limit: u32,
    frame_number: u32,
    is_recording: bool,
}

impl FrameCapture {
    pub fn new<P: AsRef<Path>>(output_dir: P, frame_limit: u32) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            frame_limit,
            frame_number: 0,
            is_recording: false,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn frames_captured(&self) -> u32 {
        self.frame_number
    }

    pub fn toggle_recording(&mut self) {
        if self.is_recording {
            info!("Recording stopped after {} frames", self.frame_number);
            self.is_recording = false;
            return;
        }

        if let Err(e) = fs::create_dir_all(&self.output_dir) {
            warn!(
                "Cannot create output directory {}: {}",
                self.output_dir.display(),
                e
            );
            return;
        }
        info!("Recording frames to {}", self.output_dir.display());
        self.is_recording = true;
    }

    /// Path for the next frame, or None when not recording. Reaching the
    /// frame limit stops the recording.
    pub fn next_frame_path(&mut self) -> Option<PathBuf> {
        if !self.is_recording {
            return None;
        }
        if self.frame_number >= self.frame_limit {
            info!("Frame limit of {} reached", self.frame_limit);
            self.is_recording = false;
            return None;
        }

        let path = self
            .output_dir
            .join(format!("frame_{:05}.png", self.frame_number));
        self.frame_number += 1;
        Some(path)
    }

    pub fn capture(&mut self, window: &Window) {
        if let Some(path) = self.next_frame_path() {
            window.capture_frame(path);
        }
    }
}
