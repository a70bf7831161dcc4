use yew::prelude::*;

use crate::terrain::TerrainId;

#[derive(Properties, PartialEq, Clone)]
pub struct LandPanelProps {
    pub started: bool,
    pub deck_count: usize,
    pub discard_count: usize,
    pub hand: Option<TerrainId>,
    pub drawn: Vec<TerrainId>,
    pub can_draw: bool,
    pub on_start: Callback<()>,
    pub on_draw: Callback<()>,
    pub on_choose: Callback<usize>,
}

fn tile(id: TerrainId) -> Html {
    let t = id.terrain();
    let color = t.color.unwrap_or("#2a2f38");
    html! {
        <span style="display:inline-flex; align-items:center; gap:6px;">
            <span style={format!("display:inline-block; width:14px; height:14px; background:{}; border:1px solid #30363d; border-radius:3px;", color)}></span>
            <span>{ t.label }</span>
        </span>
    }
}

#[function_component]
pub fn LandPanel(props: &LandPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let draw_cb = {
        let cb = props.on_draw.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 10px; width:280px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <span style="font-weight:600;">{"Land"}</span>
            <span style="font-size:11px; opacity:0.7;">
                { if props.started {
                    format!("Deck {} · Discard {}", props.deck_count, props.discard_count)
                } else {
                    "not started".to_string()
                } }
            </span>
        </div>
        <div style="display:flex; gap:6px;">
            <button onclick={start_cb} style="flex:1;">{ if props.started { "Restart" } else { "Start" } }</button>
            <button onclick={draw_cb} disabled={!props.can_draw} style="flex:1;">{"Draw 3"}</button>
        </div>
        <div style="display:flex; align-items:center; gap:8px;">
            <span style="opacity:0.7;">{"Hand:"}</span>
            { match props.hand {
                Some(id) => tile(id),
                None => html!{ <span style="opacity:0.5;">{"—"}</span> },
            } }
        </div>
        { if props.drawn.is_empty() { html!{} } else { html!{
            <div style="display:flex; flex-direction:column; gap:4px;">
                <span style="font-size:11px; opacity:0.7;">{"Choose one:"}</span>
                { for props.drawn.iter().enumerate().map(|(i, id)| {
                    let onclick = {
                        let cb = props.on_choose.clone();
                        Callback::from(move |_| cb.emit(i))
                    };
                    html!{ <button key={i} {onclick} style="text-align:left;">{ tile(*id) }</button> }
                }) }
            </div>
        } } }
    </div>}
}
