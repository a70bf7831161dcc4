use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct JsonPanelProps {
    pub json: String,
    /// Editor revision; the box is overwritten whenever it changes.
    pub revision: u64,
    pub on_load: Callback<String>,
}

#[function_component]
pub fn JsonPanel(props: &JsonPanelProps) -> Html {
    let text_ref = use_node_ref();

    // Mirror the saved state into the box, leaving hand edits alone in between
    {
        let text_ref = text_ref.clone();
        let json = props.json.clone();
        use_effect_with(props.revision, move |_| {
            if let Some(area) = text_ref.cast::<HtmlTextAreaElement>() {
                area.set_value(&json);
            }
            || ()
        });
    }

    let load_cb = {
        let cb = props.on_load.clone();
        let text_ref = text_ref.clone();
        Callback::from(move |_| {
            if let Some(area) = text_ref.cast::<HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };

    html! {<div style="position:absolute; right:12px; bottom:12px; top:300px; width:296px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <span style="font-weight:600; font-size:13px;">{"Save / Load"}</span>
            <button onclick={load_cb} style="padding:2px 10px;">{"Load"}</button>
        </div>
        <textarea ref={text_ref} spellcheck="false"
            style="flex:1; resize:none; background:#0e1116; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; font-family:ui-monospace, monospace; font-size:11px; padding:6px;" />
    </div>}
}
