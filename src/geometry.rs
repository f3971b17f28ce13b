//! Placement math shared by the preview canvas and the export target.
//! Everything here is plain-float and stateless; DOM types never leak in.

use crate::model::{CLIP_RADIUS_RATIO, ImagePosition, PREVIEW_SIZE};

/// Destination rectangle for drawing the subject into a square target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Convert device (client) coordinates to canvas-logical coordinates.
///
/// The canvas is square and uniformly scaled by CSS, so a single ratio
/// (`logical_size / rect_width`) maps both axes. Drag-start, drag-move, and
/// pinch handlers must all route through here; a mismatch desyncs dragging
/// from pointer motion.
pub fn to_canvas_space(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    logical_size: f64,
) -> (f64, f64) {
    let ratio = if rect_width > 0.0 {
        logical_size / rect_width
    } else {
        1.0
    };
    ((client_x - rect_left) * ratio, (client_y - rect_top) * ratio)
}

pub fn clip_radius(target_size: f64) -> f64 {
    CLIP_RADIUS_RATIO * target_size
}

pub fn clip_center(target_size: f64) -> (f64, f64) {
    (target_size / 2.0, target_size / 2.0)
}

/// Place the subject inside a square target.
///
/// The base box is `target_size * scale` square; the dimension matching the
/// photo's longer side is shrunk to keep the native aspect. The box is
/// centered, then shifted by the stored offsets. Offsets are recorded at
/// preview resolution, so other targets scale them by
/// `target_size / PREVIEW_SIZE`.
pub fn compute_image_placement(
    natural_w: f64,
    natural_h: f64,
    position: &ImagePosition,
    target_size: f64,
) -> Placement {
    let base = target_size * position.scale;
    let aspect = natural_w / natural_h;
    let (w, h) = if aspect > 1.0 {
        (base, base / aspect)
    } else {
        (base * aspect, base)
    };
    let offset_ratio = target_size / PREVIEW_SIZE;
    Placement {
        x: (target_size - w) / 2.0 + position.x * offset_ratio,
        y: (target_size - h) / 2.0 + position.y * offset_ratio,
        w,
        h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EXPORT_SIZE;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected} got {actual}"
        );
    }

    #[test]
    fn canvas_space_applies_offset_and_uniform_ratio() {
        // 400 logical units shown at 200 CSS px: ratio 2.
        let (x, y) = to_canvas_space(150.0, 100.0, 100.0, 50.0, 200.0, 400.0);
        assert_close(x, 100.0);
        assert_close(y, 100.0);
    }

    #[test]
    fn canvas_space_survives_zero_width_rect() {
        let (x, y) = to_canvas_space(10.0, 20.0, 0.0, 0.0, 0.0, 400.0);
        assert_close(x, 10.0);
        assert_close(y, 20.0);
    }

    #[test]
    fn placement_preserves_aspect() {
        let cases = [
            (2000.0, 1000.0),
            (1000.0, 2000.0),
            (333.0, 517.0),
            (4096.0, 4096.0),
        ];
        for (w, h) in cases {
            let pos = ImagePosition::default().with_scale(0.7);
            let p = compute_image_placement(w, h, &pos, PREVIEW_SIZE);
            assert!(
                (p.w / p.h - w / h).abs() < 1e-9,
                "aspect drifted for {w}x{h}"
            );
        }
    }

    #[test]
    fn wide_subject_at_default_position() {
        // 2000x1000 at {0,0,1.2} on the 400 preview: 480x240, centered.
        let p = compute_image_placement(2000.0, 1000.0, &ImagePosition::default(), PREVIEW_SIZE);
        assert_close(p.w, 480.0);
        assert_close(p.h, 240.0);
        assert_close(p.x, -40.0);
        assert_close(p.y, 80.0);
    }

    #[test]
    fn preview_and_export_are_similar_compositions() {
        let pos = ImagePosition {
            x: 10.0,
            y: -5.0,
            scale: 1.5,
        };
        let preview = compute_image_placement(1600.0, 900.0, &pos, PREVIEW_SIZE);
        let export = compute_image_placement(1600.0, 900.0, &pos, EXPORT_SIZE);
        let ratio = EXPORT_SIZE / PREVIEW_SIZE;
        assert_close(export.x, preview.x * ratio);
        assert_close(export.y, preview.y * ratio);
        assert_close(export.w, preview.w * ratio);
        assert_close(export.h, preview.h * ratio);
    }

    #[test]
    fn clip_geometry_uses_one_ratio_everywhere() {
        assert_close(clip_radius(PREVIEW_SIZE), 168.0);
        assert_close(clip_radius(EXPORT_SIZE), 453.6);
        assert_eq!(clip_center(PREVIEW_SIZE), (200.0, 200.0));
        assert_eq!(clip_center(EXPORT_SIZE), (540.0, 540.0));
    }
}
