use yew::prelude::*;

use crate::terrain::{Terrain, TerrainId, TERRAIN};

#[derive(Properties, PartialEq, Clone)]
pub struct TerrainButtonProps {
    pub terrain: &'static Terrain,
    pub selected: bool,
    /// Highlighted because a held land tile overrides the manual pick.
    pub held: bool,
    pub on_select: Callback<TerrainId>,
}

#[function_component(TerrainButton)]
pub fn terrain_button(props: &TerrainButtonProps) -> Html {
    let onclick = {
        let cb = props.on_select.clone();
        let id = props.terrain.id;
        Callback::from(move |_| cb.emit(id))
    };
    let border = if props.held {
        "#d29922"
    } else if props.selected {
        "#58a6ff"
    } else {
        "#30363d"
    };
    let title = props.terrain.info.unwrap_or_default();
    html! {
        <button {onclick} title={title} style={format!("display:flex; align-items:center; gap:8px; width:100%; text-align:left; padding:3px 6px; background:#1c2128; color:inherit; border:1px solid {}; border-radius:6px; cursor:pointer;", border)}>
            { match props.terrain.color {
                Some(c) => html!{ <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:2px;", c)}></span> },
                None => html!{ <span style="display:inline-block; width:12px; height:12px;"></span> },
            } }
            <span>{ props.terrain.label }</span>
        </button>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TerrainPaletteProps {
    /// Manual brush.
    pub selected: TerrainId,
    /// What will actually paint next.
    pub active: TerrainId,
    pub on_select: Callback<TerrainId>,
}

#[function_component]
pub fn TerrainPalette(props: &TerrainPaletteProps) -> Html {
    let overridden = props.active != props.selected;
    html! {<div style="position:absolute; left:12px; top:12px; bottom:12px; overflow-y:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; width:170px; display:flex; flex-direction:column; gap:4px; font-size:13px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Terrain"}</div>
        { for TERRAIN.iter().map(|t| html!{
            <TerrainButton
                key={t.id.as_str()}
                terrain={t}
                selected={t.id == props.selected}
                held={overridden && t.id == props.active}
                on_select={props.on_select.clone()}
            />
        }) }
    </div>}
}
