use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadOverlayProps {
    pub show: bool,
    pub open_picker: Callback<()>,
}

/// Centered prompt shown until a subject photo exists. The whole overlay is
/// a click target for the file picker.
#[function_component(UploadOverlay)]
pub fn upload_overlay(props: &UploadOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let open_cb = props.open_picker.clone();
    let open = Callback::from(move |_: MouseEvent| open_cb.emit(()));
    html! {
        <div onclick={open} style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:8px; cursor:pointer; color:#57606a; text-align:center; user-select:none;">
            <div style="font-size:34px;">{"📷"}</div>
            <div style="font-size:15px; font-weight:600;">{"Add your photo"}</div>
            <div style="font-size:12px; opacity:0.8; max-width:220px;">{"Click to choose a file, or drop an image onto the circle. Drag to position, pinch or scroll to zoom."}</div>
        </div>
    }
}
