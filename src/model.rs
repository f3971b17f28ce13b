//! Core data model for the avatar frame editor.
//! Pure value types plus the reducer that tracks resource readiness and
//! export progress; gesture-rate state lives outside the reducer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Logical size of the square preview canvas. CSS may scale the element;
/// the backing store stays at this size.
pub const PREVIEW_SIZE: f64 = 400.0;
/// Output size of the exported composite.
pub const EXPORT_SIZE: f64 = 1080.0;
/// Circular clip radius as a fraction of the target size. Identical at every
/// resolution so preview and export frame the same content.
pub const CLIP_RADIUS_RATIO: f64 = 0.42;
pub const MIN_SCALE: f64 = 0.3;
pub const MAX_SCALE: f64 = 4.0;
/// Scale applied when a freshly uploaded subject is first shown.
pub const DEFAULT_SCALE: f64 = 1.2;
/// Scale change per wheel notch or keyboard step.
pub const SCALE_STEP: f64 = 0.1;
/// Arrow-key pan distance in preview pixels.
pub const PAN_STEP: f64 = 10.0;
/// Bounded wait for the startup frame load before compositing proceeds
/// without the overlay.
pub const FRAME_LOAD_TIMEOUT_MS: u32 = 10_000;
/// Decorative frame overlay, served next to the bundle.
pub const FRAME_ASSET_PATH: &str = "assets/frame.png";

/// Offset (preview pixels from the centered placement) and scale multiplier
/// applied to the subject photo. Replace-on-write value; never mutated in
/// place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagePosition {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for ImagePosition {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ImagePosition {
    /// Replace the scale, clamped to the editor bounds.
    pub fn with_scale(self, scale: f64) -> Self {
        Self {
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            ..self
        }
    }

    /// Step the scale by whole wheel/keyboard notches (negative zooms out).
    pub fn stepped_scale(self, steps: f64) -> Self {
        self.with_scale(self.scale + steps * SCALE_STEP)
    }

    pub fn panned(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn moved_to(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }
}

/// Natural dimensions of the decoded subject photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub width: u32,
    pub height: u32,
}

/// Readiness of the decorative frame overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStatus {
    #[default]
    Loading,
    Ready,
    /// Load failed or timed out; compositing proceeds without the overlay.
    Missing,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub subject: Option<SubjectInfo>,
    pub frame: FrameStatus,
    pub exporting: bool,
    /// User-facing status line (frame fallback, export errors).
    pub status: Option<String>,
    /// Bumped on every action; the redraw effect keys off this so each
    /// readiness change triggers exactly one render pass.
    pub render_epoch: u64,
}

#[derive(Clone, Debug)]
pub enum EditorAction {
    /// A freshly decoded subject was installed; position has been reset.
    SubjectLoaded(SubjectInfo),
    FrameLoaded,
    FrameFailed(String),
    ExportStarted,
    ExportFinished { error: Option<String> },
}

impl Reducible for EditorState {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use EditorAction::*;
        let mut new = (*self).clone();
        match action {
            SubjectLoaded(info) => {
                new.subject = Some(info);
                new.status = None;
            }
            FrameLoaded => {
                new.frame = FrameStatus::Ready;
            }
            FrameFailed(reason) => {
                new.frame = FrameStatus::Missing;
                new.status = Some(format!("Frame overlay unavailable ({reason}); continuing without it."));
            }
            ExportStarted => {
                new.exporting = true;
                new.status = None;
            }
            ExportFinished { error } => {
                new.exporting = false;
                new.status = error;
            }
        }
        new.render_epoch = new.render_epoch.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_matches_fresh_upload() {
        let pos = ImagePosition::default();
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 0.0);
        assert_eq!(pos.scale, DEFAULT_SCALE);
    }

    #[test]
    fn scale_clamps_at_both_bounds() {
        let pos = ImagePosition::default();
        assert_eq!(pos.with_scale(100.0).scale, MAX_SCALE);
        assert_eq!(pos.with_scale(-3.0).scale, MIN_SCALE);
        assert_eq!(pos.with_scale(0.0).scale, MIN_SCALE);
    }

    #[test]
    fn stepped_scale_saturates_under_repeated_steps() {
        let mut pos = ImagePosition::default();
        for _ in 0..100 {
            pos = pos.stepped_scale(1.0);
        }
        assert_eq!(pos.scale, MAX_SCALE);
        for _ in 0..100 {
            pos = pos.stepped_scale(-1.0);
        }
        assert_eq!(pos.scale, MIN_SCALE);
    }

    #[test]
    fn subject_loaded_bumps_epoch_and_clears_status() {
        let state = Rc::new(EditorState {
            status: Some("old".into()),
            ..EditorState::default()
        });
        let epoch = state.render_epoch;
        let next = state.reduce(EditorAction::SubjectLoaded(SubjectInfo {
            width: 2000,
            height: 1000,
        }));
        assert_eq!(
            next.subject,
            Some(SubjectInfo {
                width: 2000,
                height: 1000
            })
        );
        assert_eq!(next.status, None);
        assert_eq!(next.render_epoch, epoch + 1);
    }

    #[test]
    fn frame_failure_degrades_without_clearing_subject() {
        let state = Rc::new(EditorState::default()).reduce(EditorAction::SubjectLoaded(
            SubjectInfo {
                width: 10,
                height: 10,
            },
        ));
        let next = state.reduce(EditorAction::FrameFailed("timeout".into()));
        assert_eq!(next.frame, FrameStatus::Missing);
        assert!(next.subject.is_some());
        assert!(next.status.as_deref().unwrap().contains("timeout"));
    }

    #[test]
    fn export_finish_resets_flag_and_surfaces_error() {
        let state = Rc::new(EditorState::default()).reduce(EditorAction::ExportStarted);
        assert!(state.exporting);
        let ok = state.clone().reduce(EditorAction::ExportFinished { error: None });
        assert!(!ok.exporting);
        assert_eq!(ok.status, None);
        let failed = state.reduce(EditorAction::ExportFinished {
            error: Some("encode failed".into()),
        });
        assert!(!failed.exporting);
        assert_eq!(failed.status.as_deref(), Some("encode failed"));
    }
}
