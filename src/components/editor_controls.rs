use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorControlsProps {
    pub has_subject: bool,
    pub exporting: bool,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_change_photo: Callback<()>,
    pub on_export: Callback<()>,
}

#[function_component(EditorControls)]
pub fn editor_controls(props: &EditorControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let change = {
        let cb = props.on_change_photo.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export = {
        let cb = props.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let busy = !props.has_subject || props.exporting;
    let export_label = if props.exporting { "Exporting…" } else { "Download PNG" };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo} disabled={!props.has_subject}> {"-"} </button>
        <button onclick={zi} disabled={!props.has_subject}> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={reset} disabled={!props.has_subject}> {"Reset"} </button>
        <button onclick={change}> { if props.has_subject { "Change Photo" } else { "Upload Photo" } } </button>
        <span style="width:8px;"></span>
        <button onclick={export} disabled={busy}> {export_label} </button>
    </div>}
}
