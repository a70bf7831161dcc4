use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use super::{
    board_controls::BoardControls, board_view::BoardView, card_hand::CardHand,
    json_panel::JsonPanel, land_panel::LandPanel, status_bar::StatusBar,
    terrain_palette::TerrainPalette,
};
use crate::assets::{load_terrain_images, ImageCache};
use crate::config::EditorConfig;
use crate::editor::{Editor, EditorEvent, Update};
use crate::persist::Snapshot;
use crate::util::cwarn;

/// Redraw hook installed by the board view once its canvas is mounted.
pub type DrawSlot = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

/// Shared editor state handed to the canvas. Compares by identity so props
/// never force a re-mount.
#[derive(Clone)]
pub struct EditorHandle {
    pub editor: Rc<RefCell<Editor>>,
    pub images: Rc<RefCell<ImageCache>>,
    pub draw: DrawSlot,
}

impl PartialEq for EditorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.editor, &other.editor)
    }
}

impl EditorHandle {
    pub fn redraw(&self) {
        if let Some(f) = &*self.draw.borrow() {
            f();
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_mut_ref(EditorConfig::load);
    let editor = {
        let config = config.clone();
        use_mut_ref(move || Editor::new(&config.borrow()))
    };
    let images = use_mut_ref(ImageCache::default);
    let draw = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let handle = EditorHandle { editor, images, draw };
    let force = use_force_update();

    // Load terrain images once; a single redraw when the batch settles
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            load_terrain_images(move |cache| {
                *handle.images.borrow_mut() = cache;
                handle.redraw();
            });
            || ()
        });
    }

    let dispatch = {
        let handle = handle.clone();
        Callback::from(move |event: EditorEvent| {
            let result = handle.editor.borrow_mut().update(event);
            match result {
                Update::Unchanged => {}
                Update::View => handle.redraw(),
                Update::Ui => force.force_update(),
                Update::State => {
                    handle.redraw();
                    force.force_update();
                }
            }
        })
    };

    // Slider changes are remembered as the next session's defaults
    let save_board_settings = {
        let config = config.clone();
        let handle = handle.clone();
        move || {
            let mut cfg = config.borrow_mut();
            {
                let ed = handle.editor.borrow();
                cfg.radius = ed.board.radius;
                cfg.hex_size = ed.board.hex_size;
            }
            if let Err(err) = cfg.save() {
                cwarn(&format!("settings not saved: {err}"));
            }
        }
    };
    let on_radius = {
        let dispatch = dispatch.clone();
        let save = save_board_settings.clone();
        Callback::from(move |r: u32| {
            dispatch.emit(EditorEvent::SetRadius(r));
            save();
        })
    };
    let on_hex_size = {
        let dispatch = dispatch.clone();
        let save = save_board_settings;
        Callback::from(move |s: f64| {
            dispatch.emit(EditorEvent::SetHexSize(s));
            save();
        })
    };

    let on_load_json = {
        let dispatch = dispatch.clone();
        Callback::from(move |text: String| match Snapshot::parse(&text) {
            Ok(snapshot) => dispatch.emit(EditorEvent::Load(snapshot)),
            Err(err) => {
                cwarn(&format!("rejected save text: {err}"));
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("Invalid JSON.");
                }
            }
        })
    };

    let ed = handle.editor.borrow();
    let land = &ed.land;
    html! {
        <div style="position:fixed; inset:0; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif; overflow:hidden;">
            <BoardView handle={handle.clone()} dispatch={dispatch.clone()} />
            <TerrainPalette
                selected={ed.brush}
                active={ed.active_brush()}
                on_select={dispatch.reform(EditorEvent::SelectBrush)}
            />
            <BoardControls
                radius={ed.board.radius}
                hex_size={ed.board.hex_size}
                on_radius={on_radius}
                on_hex_size={on_hex_size}
                on_clear={dispatch.reform(|_| EditorEvent::ClearBoard)}
                on_randomize={dispatch.reform(|_| EditorEvent::RandomizeBoard)}
            />
            <LandPanel
                started={land.started}
                deck_count={land.deck.len()}
                discard_count={land.discard.len()}
                hand={land.hand}
                drawn={land.drawn.clone()}
                can_draw={!land.started || land.can_draw()}
                on_start={dispatch.reform(|_| EditorEvent::StartLand)}
                on_draw={dispatch.reform(|_| EditorEvent::DrawLand)}
                on_choose={dispatch.reform(EditorEvent::ChooseLand)}
            />
            <CardHand
                hand={ed.cards.hand.clone()}
                deck_count={ed.cards.deck.len()}
                discard_count={ed.cards.discard.len()}
                turn={ed.turn}
                on_play={dispatch.reform(EditorEvent::PlayCard)}
                on_draw={dispatch.reform(|_| EditorEvent::DrawCard)}
                on_discard_hand={dispatch.reform(|_| EditorEvent::DiscardHand)}
                on_shuffle={dispatch.reform(|_| EditorEvent::ShuffleDeck)}
                on_next_turn={dispatch.reform(|_| EditorEvent::NextTurn)}
            />
            <JsonPanel json={ed.json().to_string()} revision={ed.revision} on_load={on_load_json} />
            <StatusBar hover_text={ed.hover_text()} brush={ed.active_brush()} />
        </div>
    }
}
