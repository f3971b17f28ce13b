//! Compositor for the circular frame scene. One draw path serves both the
//! 400px preview and the 1080px export, parameterized by target size.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::assets::ImageResource;
use crate::geometry::{clip_center, clip_radius, compute_image_placement};
use crate::model::ImagePosition;

const TAU: f64 = std::f64::consts::PI * 2.0;

/// Draw the full composite: white base coat, clipped subject, border ring,
/// frame overlay, vignette. Resources that are not ready are skipped, which
/// is how the frame-timeout fallback degrades.
pub fn draw_composite(
    ctx: &CanvasRenderingContext2d,
    target_size: f64,
    subject: Option<&ImageResource>,
    frame: Option<&ImageResource>,
    position: &ImagePosition,
) -> Result<(), JsValue> {
    let (cx, cy) = clip_center(target_size);
    let radius = clip_radius(target_size);

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, target_size, target_size);

    if let Some(subject) = subject {
        ctx.save();
        ctx.begin_path();
        ctx.arc(cx, cy, radius, 0.0, TAU)?;
        ctx.clip();
        let placement = compute_image_placement(
            subject.natural_width as f64,
            subject.natural_height as f64,
            position,
            target_size,
        );
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &subject.element,
            placement.x,
            placement.y,
            placement.w,
            placement.h,
        )?;
        ctx.restore();
    }

    // Border ring is decorative and drawn even before a subject exists.
    ctx.begin_path();
    ctx.arc(cx, cy, radius, 0.0, TAU)?;
    ctx.set_stroke_style_str("#d0d4da");
    ctx.set_line_width(target_size / 200.0);
    ctx.stroke();

    if let Some(frame) = frame {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &frame.element,
            0.0,
            0.0,
            target_size,
            target_size,
        )?;
    }

    // Vignette: clear at 0.8r fading to 10% black at 1.1r softens the rim.
    let gradient = ctx.create_radial_gradient(cx, cy, radius * 0.8, cx, cy, radius * 1.1)?;
    gradient.add_color_stop(0.0, "rgba(0,0,0,0)")?;
    gradient.add_color_stop(1.0, "rgba(0,0,0,0.1)")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, target_size, target_size);

    Ok(())
}

/// Best-effort static visual shown when the 2d context throws mid-draw.
pub fn draw_error_indicator(ctx: &CanvasRenderingContext2d, target_size: f64) {
    ctx.set_fill_style_str("#f6f8fa");
    ctx.fill_rect(0.0, 0.0, target_size, target_size);
    ctx.set_fill_style_str("#57606a");
    ctx.set_font("14px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("Preview unavailable", target_size / 2.0, target_size / 2.0);
}
