//! Export path: render the current composition at full resolution and hand
//! the PNG to the browser's save-file machinery.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, Url};
use yew::Callback;

use crate::assets::ImageResource;
use crate::model::{EXPORT_SIZE, ImagePosition};
use crate::render::draw_composite;
use crate::util::{export_filename, now_ms};

/// Render a 1080x1080 composite and trigger a download. `done` fires exactly
/// once: `None` on success, `Some(message)` on failure. No partial file is
/// delivered on failure.
pub fn export_composite(
    subject: &ImageResource,
    frame: Option<&ImageResource>,
    position: &ImagePosition,
    done: Callback<Option<String>>,
) {
    if let Err(err) = begin_export(subject, frame, position, done.clone()) {
        done.emit(Some(describe(&err)));
    }
}

fn begin_export(
    subject: &ImageResource,
    frame: Option<&ImageResource>,
    position: &ImagePosition,
    done: Callback<Option<String>>,
) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(EXPORT_SIZE as u32);
    canvas.set_height(EXPORT_SIZE as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    draw_composite(&ctx, EXPORT_SIZE, Some(subject), frame, position)?;

    let filename = export_filename(now_ms());
    let callback = Closure::once(move |blob: JsValue| {
        if blob.is_null() || blob.is_undefined() {
            done.emit(Some("png encode produced no data".to_string()));
            return;
        }
        match deliver(blob, &filename) {
            Ok(()) => done.emit(None),
            Err(err) => done.emit(Some(describe(&err))),
        }
    });
    canvas.to_blob_with_type(callback.as_ref().unchecked_ref(), "image/png")?;
    callback.forget();
    Ok(())
}

/// Hand the encoded blob to a transient anchor click with the generated
/// filename.
fn deliver(blob: JsValue, filename: &str) -> Result<(), JsValue> {
    let blob: Blob = blob.dyn_into()?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display:none;");
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| "export failed".to_string())
}
