pub mod editor_controls;
pub mod upload_overlay;

pub use editor_controls::EditorControls;
pub use upload_overlay::UploadOverlay;
