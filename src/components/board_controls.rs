use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{HEX_SIZE_RANGE, RADIUS_RANGE};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardControlsProps {
    pub radius: u32,
    pub hex_size: f64,
    pub on_radius: Callback<u32>,
    pub on_hex_size: Callback<f64>,
    pub on_clear: Callback<()>,
    pub on_randomize: Callback<()>,
}

fn slider_value(e: &InputEvent) -> Option<f64> {
    e.target_dyn_into::<HtmlInputElement>()
        .and_then(|input| input.value().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[function_component(BoardControls)]
pub fn board_controls(props: &BoardControlsProps) -> Html {
    let radius_cb = {
        let cb = props.on_radius.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = slider_value(&e) {
                cb.emit(v.max(0.0) as u32);
            }
        })
    };
    let size_cb = {
        let cb = props.on_hex_size.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = slider_value(&e) {
                cb.emit(v);
            }
        })
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let random_cb = {
        let cb = props.on_randomize.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row = "display:flex; align-items:center; gap:8px; font-size:12px;";
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; gap:14px; align-items:center;">
        <label style={row}>
            <span>{"Radius"}</span>
            <input type="range" min={RADIUS_RANGE.0.to_string()} max={RADIUS_RANGE.1.to_string()} step="1"
                value={props.radius.to_string()} oninput={radius_cb} />
            <span style="min-width:22px; font-variant-numeric:tabular-nums;">{ props.radius }</span>
        </label>
        <label style={row}>
            <span>{"Hex size"}</span>
            <input type="range" min={HEX_SIZE_RANGE.0.to_string()} max={HEX_SIZE_RANGE.1.to_string()} step="1"
                value={props.hex_size.to_string()} oninput={size_cb} />
            <span style="min-width:28px; font-variant-numeric:tabular-nums;">{ props.hex_size.round() }</span>
        </label>
        <button onclick={clear_cb}>{"Clear"}</button>
        <button onclick={random_cb}>{"Randomize"}</button>
    </div>}
}
