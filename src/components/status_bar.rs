use yew::prelude::*;

use crate::terrain::TerrainId;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub hover_text: String,
    pub brush: TerrainId,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    html! {<div style="position:absolute; top:64px; left:50%; transform:translateX(-50%); display:flex; gap:14px; align-items:center; font-size:12px; background:rgba(22,27,34,0.75); border:1px solid #30363d; border-radius:6px; padding:3px 10px; pointer-events:none;">
        <span style="font-variant-numeric:tabular-nums;">{ props.hover_text.clone() }</span>
        <span style="opacity:0.7;">{ format!("Brush: {}", props.brush.terrain().label) }</span>
    </div>}
}
