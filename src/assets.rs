//! Loading and lifecycle for the two image resources: the uploaded subject
//! photo and the decorative frame overlay.

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, future_to_promise};
use web_sys::{File, HtmlImageElement, Url};

use crate::model::FRAME_LOAD_TIMEOUT_MS;

const TIMEOUT_SENTINEL: &str = "frame_load_timeout";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("image decode failed")]
    Decode,
    #[error("frame load timed out")]
    Timeout,
    #[error("browser interface unavailable: {0}")]
    Dom(String),
}

/// A decoded, dimensioned image ready for drawing. Dimensions are captured
/// once at decode time so the render pipeline never sees a zero-size draw.
pub struct ImageResource {
    pub element: HtmlImageElement,
    pub natural_width: u32,
    pub natural_height: u32,
    /// Object URL backing `element.src` for uploaded subjects; revoked when
    /// the resource is dropped from the editor. None for the static frame.
    object_url: Option<String>,
}

impl ImageResource {
    fn from_element(
        element: HtmlImageElement,
        object_url: Option<String>,
    ) -> Result<Self, AssetError> {
        let natural_width = element.natural_width();
        let natural_height = element.natural_height();
        if natural_width == 0 || natural_height == 0 {
            if let Some(url) = &object_url {
                let _ = Url::revoke_object_url(url);
            }
            return Err(AssetError::Decode);
        }
        Ok(Self {
            element,
            natural_width,
            natural_height,
            object_url,
        })
    }

    /// Revoke the backing object URL. Called when the editor discards the
    /// resource; the element itself is garbage-collected.
    pub fn release(&self) {
        if let Some(url) = &self.object_url {
            let _ = Url::revoke_object_url(url);
        }
    }
}

/// Monotonic ticket dispenser guarding against a stale, slower upload
/// finishing after a newer one started. There is no cancellation; the stale
/// result is simply dropped when its ticket is no longer current.
#[derive(Default)]
pub struct Generation(Cell<u64>);

impl Generation {
    pub fn next(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Content types accepted from the upload collaborator.
pub fn is_image_type(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Decode an image from a URL via `HtmlImageElement`, resolving once the
/// browser reports it loaded.
async fn load_image(src: &str) -> Result<HtmlImageElement, AssetError> {
    let img =
        HtmlImageElement::new().map_err(|_| AssetError::Dom("image element".to_string()))?;
    let img = Rc::new(img);
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload_img = img.clone();
        let onload = Closure::once(move || {
            let _ = resolve.call1(&JsValue::NULL, onload_img.as_ref());
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        img.set_src(src);
        onload.forget();
        onerror.forget();
    });
    JsFuture::from(promise).await.map_err(|_| AssetError::Decode)?;
    Ok((*img).clone())
}

/// Load the frame overlay with a bounded wait. Failure and timeout are both
/// non-fatal to the editor; the caller degrades to compositing without the
/// overlay.
pub async fn load_frame(src: &'static str) -> Result<ImageResource, AssetError> {
    let load = future_to_promise(async move {
        match load_image(src).await {
            Ok(element) => Ok(JsValue::from(element)),
            Err(_) => Err(JsValue::from_str("frame_load_failed")),
        }
    });
    let timeout = future_to_promise(async {
        TimeoutFuture::new(FRAME_LOAD_TIMEOUT_MS).await;
        Err(JsValue::from_str(TIMEOUT_SENTINEL))
    });
    let race = js_sys::Promise::race(&js_sys::Array::of2(&load, &timeout));
    let value = JsFuture::from(race).await.map_err(|err| {
        if err.as_string().as_deref() == Some(TIMEOUT_SENTINEL) {
            AssetError::Timeout
        } else {
            AssetError::Decode
        }
    })?;
    let element: HtmlImageElement = value.dyn_into().map_err(|_| AssetError::Decode)?;
    ImageResource::from_element(element, None)
}

/// Decode an uploaded file into a subject resource. Non-image content types
/// are rejected before any DOM work happens.
pub async fn load_subject_file(file: File) -> Result<ImageResource, AssetError> {
    let mime = file.type_();
    if !is_image_type(&mime) {
        return Err(AssetError::UnsupportedType(mime));
    }
    let url = Url::create_object_url_with_blob(&file)
        .map_err(|_| AssetError::Dom("object url".to_string()))?;
    match load_image(&url).await {
        Ok(element) => ImageResource::from_element(element, Some(url)),
        Err(err) => {
            let _ = Url::revoke_object_url(&url);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_types_gate_uploads() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/jpeg"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type(""));
    }

    #[test]
    fn stale_generation_ticket_is_not_current() {
        let generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert!(
            AssetError::UnsupportedType("text/plain".into())
                .to_string()
                .contains("text/plain")
        );
        assert!(AssetError::Timeout.to_string().contains("timed out"));
    }
}
