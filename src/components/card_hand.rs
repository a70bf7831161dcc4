use yew::prelude::*;

use crate::cards::{Affinity, Card};

const NEUTRAL_CARD_COLOR: &str = "#9aa4b5";

fn card_color(card: &Card) -> &'static str {
    card.affinity
        .and_then(Affinity::terrain)
        .and_then(|t| t.terrain().color)
        .unwrap_or(NEUTRAL_CARD_COLOR)
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardHandProps {
    pub hand: Vec<Card>,
    pub deck_count: usize,
    pub discard_count: usize,
    pub turn: u32,
    pub on_play: Callback<String>,
    pub on_draw: Callback<()>,
    pub on_discard_hand: Callback<()>,
    pub on_shuffle: Callback<()>,
    pub on_next_turn: Callback<()>,
}

#[function_component]
pub fn CardHand(props: &CardHandProps) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; left:194px; right:320px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
            <div style="display:flex; align-items:center; gap:14px; flex-wrap:wrap;">
                <span>{"Turn "}<span style={value_style}>{ props.turn }</span></span>
                <span>{"Deck "}<span style={value_style}>{ props.deck_count }</span></span>
                <span>{"Discard "}<span style={value_style}>{ props.discard_count }</span></span>
                <span style="flex:1;"></span>
                <button onclick={emit(&props.on_draw)}>{"Draw"}</button>
                <button onclick={emit(&props.on_discard_hand)}>{"Discard hand"}</button>
                <button onclick={emit(&props.on_shuffle)}>{"Shuffle"}</button>
                <button onclick={emit(&props.on_next_turn)}>{"Next turn"}</button>
            </div>
            <div style="display:flex; gap:8px; overflow-x:auto; min-height:110px;">
                { if props.hand.is_empty() {
                    html!{ <div style="opacity:0.6; align-self:center;">{"Hand is empty"}</div> }
                } else { html!{} } }
                { for props.hand.iter().enumerate().map(|(i, card)| {
                    let onclick = {
                        let cb = props.on_play.clone();
                        let id = card.id.clone();
                        Callback::from(move |_| cb.emit(id.clone()))
                    };
                    let color = card_color(card);
                    html!{
                        <div key={i} {onclick} title="Play"
                            style={format!("flex:0 0 150px; cursor:pointer; border:1px solid {c}; background:linear-gradient(180deg, {c}55, #161b22 70%); border-radius:8px; padding:6px 8px; display:flex; flex-direction:column; gap:4px;", c = color)}>
                            <div style="display:flex; justify-content:space-between; gap:6px;">
                                <span style="font-weight:600;">{ card.name.clone() }</span>
                                <span style="min-width:20px; text-align:center; border-radius:10px; background:#0e1116;">{ card.cost }</span>
                            </div>
                            { if let Some(a) = card.affinity { html!{ <div style="font-size:11px; opacity:0.75;">{ a.to_string() }</div> } } else { html!{} } }
                            { if let Some(t) = &card.text { html!{ <div style="font-size:11px; line-height:1.3;">{ t.clone() }</div> } } else { html!{} } }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card_from_id;

    #[test]
    fn card_colour_follows_affinity() {
        assert_eq!(card_color(&card_from_id("tidal-pull")), crate::terrain::TerrainId::Wasser.terrain().color.unwrap());
        assert_eq!(card_color(&card_from_id("homebrew")), NEUTRAL_CARD_COLOR);
        let mut bare = card_from_id("lava-surge");
        bare.affinity = None;
        assert_eq!(card_color(&bare), NEUTRAL_CARD_COLOR);
    }
}
