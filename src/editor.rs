//! Whole-editor state and the single event entry point.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::cards::{card_from_id, demo_deck, Card, CardZones};
use crate::config::EditorConfig;
use crate::hex::{pixel_to_axial, Axial};
use crate::land::LandDraft;
use crate::persist::Snapshot;
use crate::state::{PointerButton, PointerState, Viewport};
use crate::terrain::TerrainId;
use crate::util::{clog, cwarn, entropy_seed};

#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    /// Button press at canvas-local `(x, y)`.
    PointerDown { x: f64, y: f64, button: PointerButton, shift: bool },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Wheel { x: f64, y: f64, delta_y: f64 },
    Resize { width: f64, height: f64 },
    SelectBrush(TerrainId),
    SetRadius(u32),
    SetHexSize(f64),
    ClearBoard,
    RandomizeBoard,
    DrawCard,
    PlayCard(String),
    DiscardHand,
    ShuffleDeck,
    NextTurn,
    StartLand,
    DrawLand,
    ChooseLand(usize),
    Load(Snapshot),
}

/// What an event touched, so the view can do the least work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Update {
    Unchanged,
    /// Hover text or similar panel-only data.
    Ui,
    /// Pan/zoom or canvas size; only the canvas needs redrawing.
    View,
    /// Model data changed: redraw, refresh panels, re-mirror the save JSON.
    State,
}

#[derive(Debug, Clone)]
pub struct Editor {
    pub board: Board,
    pub view: Viewport,
    pub pointer: PointerState,
    pub cards: CardZones,
    pub land: LandDraft,
    pub turn: u32,
    /// Manually picked brush. See `active_brush` for what actually paints.
    pub brush: TerrainId,
    pub hover: Option<Axial>,
    pub default_brush: TerrainId,
    /// Bumped on every `State` update.
    pub revision: u64,
    json: String,
    rng: StdRng,
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let editor = Self::with_rng(config, StdRng::seed_from_u64(seed));
        clog(&format!(
            "editor start: seed={} hex_size={} radius={} cards={}",
            seed,
            config.hex_size,
            config.radius,
            editor.cards.total()
        ));
        editor
    }

    pub fn with_rng(config: &EditorConfig, mut rng: StdRng) -> Self {
        let mut cards = CardZones::with_deck(demo_deck(&mut rng));
        cards.draw(config.opening_hand, &mut rng);
        let mut editor = Self {
            board: Board::new(config.hex_size, config.radius),
            view: Viewport::default(),
            pointer: PointerState::default(),
            cards,
            land: LandDraft::default(),
            turn: 1,
            brush: config.default_brush,
            hover: None,
            default_brush: config.default_brush,
            revision: 0,
            json: String::new(),
            rng,
        };
        editor.sync_json();
        editor
    }

    /// Terrain the next paint will write: a held land tile beats the manual brush.
    pub fn active_brush(&self) -> TerrainId {
        self.land.hand.unwrap_or(self.brush)
    }

    /// Cell under a canvas-local point.
    pub fn cell_at(&self, sx: f64, sy: f64) -> Axial {
        let (wx, wy) = self.view.screen_to_world(sx, sy);
        pixel_to_axial(wx, wy, self.board.hex_size)
    }

    /// Paints (or erases) the cell under a canvas-local point. Clicks outside the
    /// board radius do nothing.
    pub fn paint_at(&mut self, sx: f64, sy: f64, erase: bool) -> bool {
        let at = self.cell_at(sx, sy);
        if !self.board.contains(at) {
            return false;
        }
        let brush = self.active_brush();
        if erase || brush.is_empty() {
            return self.board.erase(at);
        }
        self.board.paint(at, brush);
        self.land.consume();
        true
    }

    pub fn randomize(&mut self) {
        self.board.randomize(&mut self.rng);
    }

    pub fn start_land(&mut self) {
        self.land.start(&mut self.rng);
        self.board.clear();
        self.brush = self.default_brush;
        clog(&format!("land draft started with {} tiles", self.land.total()));
    }

    pub fn draw_land(&mut self) -> bool {
        if !self.land.started {
            self.start_land();
        }
        self.land.draw(&mut self.rng)
    }

    pub fn choose_land(&mut self, index: usize) -> bool {
        match self.land.choose(index) {
            Some(choice) => {
                self.brush = choice;
                true
            }
            None => false,
        }
    }

    pub fn next_turn(&mut self) {
        self.turn = self.turn.saturating_add(1);
        self.cards.draw(1, &mut self.rng);
    }

    /// Replaces whichever sections `snapshot` carries. The turn counter is
    /// always taken from it.
    pub fn load(&mut self, snapshot: Snapshot) {
        if let Some(board) = &snapshot.board {
            board.apply_to(&mut self.board);
            clog(&format!(
                "loaded board: radius={} tiles={} visible={}",
                self.board.radius,
                self.board.tiles.len(),
                self.board.visible_tiles().count()
            ));
        }
        if let Some(cards) = snapshot.cards {
            let zone = |ids: Vec<String>| -> Vec<Card> { ids.iter().map(|id| card_from_id(id)).collect() };
            self.cards = CardZones {
                deck: zone(cards.deck),
                hand: zone(cards.hand),
                discard: zone(cards.discard),
            };
        }
        if let Some(land) = snapshot.land {
            self.land = land.into_draft();
        }
        self.turn = snapshot.turn;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, &self.land, &self.cards, self.turn)
    }

    /// Save text as of the last `State` update.
    pub fn json(&self) -> &str {
        &self.json
    }

    fn sync_json(&mut self) {
        match self.snapshot().to_json() {
            Ok(text) => self.json = text,
            Err(err) => cwarn(&format!("could not mirror state: {err}")),
        }
    }

    /// `"q,r"` plus label and info for the hovered cell, or `—` off the board.
    pub fn hover_text(&self) -> String {
        let Some(at) = self.hover else {
            return "—".to_string();
        };
        let mut text = at.key();
        if let Some(t) = self.board.get(at) {
            let terrain = t.terrain();
            text.push_str(&format!(" · {}", terrain.label));
            if let Some(info) = terrain.info {
                text.push_str(&format!(" — {}", info));
            }
        }
        text
    }

    pub fn update(&mut self, event: EditorEvent) -> Update {
        let result = self.apply(event);
        if result == Update::State {
            self.revision = self.revision.wrapping_add(1);
            self.sync_json();
        }
        result
    }

    fn apply(&mut self, event: EditorEvent) -> Update {
        use EditorEvent::*;
        let changed = |yes: bool| if yes { Update::State } else { Update::Unchanged };
        match event {
            PointerDown { x, y, button, shift } => match button {
                PointerButton::Middle => {
                    self.pointer.begin_pan(x, y);
                    Update::Unchanged
                }
                PointerButton::Primary if shift => {
                    self.pointer.begin_pan(x, y);
                    Update::Unchanged
                }
                PointerButton::Primary => changed(self.paint_at(x, y, false)),
                PointerButton::Secondary => changed(self.paint_at(x, y, true)),
            },
            PointerMove { x, y } => {
                if let Some((dx, dy)) = self.pointer.drag_to(x, y) {
                    self.view.pan_by(dx, dy);
                    return Update::View;
                }
                let at = self.cell_at(x, y);
                let hover = self.board.contains(at).then_some(at);
                if hover == self.hover {
                    return Update::Unchanged;
                }
                self.hover = hover;
                Update::Ui
            }
            PointerUp => {
                self.pointer.release();
                Update::Unchanged
            }
            Wheel { x, y, delta_y } => {
                self.view.wheel(delta_y, x, y);
                Update::View
            }
            Resize { width, height } => {
                self.view.center_if_unset(width, height);
                Update::View
            }
            SelectBrush(t) => {
                self.brush = t;
                Update::Ui
            }
            SetRadius(r) => {
                self.board.set_radius(r);
                Update::State
            }
            SetHexSize(s) => changed(self.board.set_hex_size(s)),
            ClearBoard => {
                self.board.clear();
                Update::State
            }
            RandomizeBoard => {
                self.randomize();
                Update::State
            }
            DrawCard => changed(self.cards.draw(1, &mut self.rng) > 0),
            PlayCard(id) => changed(self.cards.play(&id)),
            DiscardHand => changed(self.cards.discard_hand()),
            ShuffleDeck => {
                self.cards.shuffle_deck(&mut self.rng);
                Update::State
            }
            NextTurn => {
                self.next_turn();
                Update::State
            }
            StartLand => {
                self.start_land();
                Update::State
            }
            DrawLand => {
                let was_started = self.land.started;
                changed(self.draw_land() || !was_started)
            }
            ChooseLand(i) => changed(self.choose_land(i)),
            Load(snapshot) => {
                self.load(snapshot);
                Update::State
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::axial_to_pixel;
    use TerrainId::*;

    fn editor() -> Editor {
        let cfg = EditorConfig {
            hex_size: 50.0,
            radius: 2,
            ..Default::default()
        };
        let mut ed = Editor::with_rng(&cfg, StdRng::seed_from_u64(21));
        ed.update(EditorEvent::Resize { width: 800.0, height: 600.0 });
        ed
    }

    /// Canvas point at the centre of cell `(q, r)`.
    fn screen_of(ed: &Editor, q: i32, r: i32) -> (f64, f64) {
        let (wx, wy) = axial_to_pixel(q, r, ed.board.hex_size);
        ed.view.world_to_screen(wx, wy)
    }

    fn load_json(ed: &mut Editor, text: &str) -> Result<Update, crate::persist::PersistError> {
        let snapshot = Snapshot::parse(text)?;
        Ok(ed.update(EditorEvent::Load(snapshot)))
    }

    fn click(ed: &mut Editor, q: i32, r: i32, button: PointerButton) -> Update {
        let (x, y) = screen_of(ed, q, r);
        ed.update(EditorEvent::PointerDown { x, y, button, shift: false })
    }

    #[test]
    fn starts_with_opening_hand_and_centered_view() {
        let ed = editor();
        assert_eq!(ed.cards.hand.len(), 3);
        assert_eq!(ed.cards.total(), 11);
        assert_eq!(ed.turn, 1);
        assert_eq!(ed.view.pan_x, 400.0);
        assert_eq!(ed.view.pan_y, 300.0);
        assert!(!ed.land.started);
    }

    #[test]
    fn left_click_paints_right_click_erases() {
        let mut ed = editor();
        ed.update(EditorEvent::SelectBrush(Regenwald));
        assert_eq!(click(&mut ed, 1, -1, PointerButton::Primary), Update::State);
        assert_eq!(ed.board.get(Axial::new(1, -1)), Some(Regenwald));
        assert_eq!(click(&mut ed, 1, -1, PointerButton::Secondary), Update::State);
        assert_eq!(ed.board.get(Axial::new(1, -1)), None);
    }

    #[test]
    fn empty_brush_erases() {
        let mut ed = editor();
        ed.board.paint(Axial::new(0, 0), Berg);
        ed.update(EditorEvent::SelectBrush(Leer));
        click(&mut ed, 0, 0, PointerButton::Primary);
        assert!(ed.board.tiles.is_empty());
    }

    #[test]
    fn clicks_outside_radius_change_nothing() {
        let mut ed = editor();
        let rev = ed.revision;
        assert_eq!(click(&mut ed, 5, 5, PointerButton::Primary), Update::Unchanged);
        assert!(ed.board.tiles.is_empty());
        assert_eq!(ed.revision, rev);
    }

    #[test]
    fn paint_follows_pan_and_zoom() {
        let mut ed = editor();
        ed.update(EditorEvent::Wheel { x: 123.0, y: 456.0, delta_y: -120.0 });
        ed.update(EditorEvent::PointerDown { x: 10.0, y: 10.0, button: PointerButton::Middle, shift: false });
        ed.update(EditorEvent::PointerMove { x: 45.0, y: -5.0 });
        ed.update(EditorEvent::PointerUp);
        assert!(ed.view.zoom > 1.0);
        click(&mut ed, -1, 2, PointerButton::Primary);
        assert_eq!(ed.board.get(Axial::new(-1, 2)), Some(Wuste));
    }

    #[test]
    fn shift_click_pans_instead_of_painting() {
        let mut ed = editor();
        let (x, y) = screen_of(&ed, 0, 0);
        let up = ed.update(EditorEvent::PointerDown { x, y, button: PointerButton::Primary, shift: true });
        assert_eq!(up, Update::Unchanged);
        assert!(ed.board.tiles.is_empty());
        assert_eq!(ed.update(EditorEvent::PointerMove { x: x + 30.0, y: y - 10.0 }), Update::View);
        assert_eq!(ed.view.pan_x, 430.0);
        assert_eq!(ed.view.pan_y, 290.0);
        ed.update(EditorEvent::PointerUp);
        assert!(!ed.pointer.panning);
    }

    #[test]
    fn hover_reports_cell_and_terrain() {
        let mut ed = editor();
        ed.board.paint(Axial::new(0, 1), Wald);
        let (x, y) = screen_of(&ed, 0, 1);
        assert_eq!(ed.update(EditorEvent::PointerMove { x, y }), Update::Ui);
        assert_eq!(ed.hover_text(), "0,1 · Wald — Dichter Wald mit hohen Kiefern");
        assert_eq!(ed.update(EditorEvent::PointerMove { x: x + 1.0, y }), Update::Unchanged);
        let (x, y) = screen_of(&ed, 1, 0);
        ed.update(EditorEvent::PointerMove { x, y });
        assert_eq!(ed.hover_text(), "1,0");
        let (x, y) = screen_of(&ed, 7, 0);
        ed.update(EditorEvent::PointerMove { x, y });
        assert_eq!(ed.hover_text(), "—");
    }

    #[test]
    fn held_land_tile_paints_then_goes_to_discard() {
        let mut ed = editor();
        ed.update(EditorEvent::SelectBrush(Wasser));
        ed.update(EditorEvent::DrawLand);
        assert!(ed.land.started);
        assert_eq!(ed.land.drawn.len(), 3);
        let offered = ed.land.drawn[0];
        ed.update(EditorEvent::ChooseLand(0));
        assert_eq!(ed.active_brush(), offered);

        click(&mut ed, 0, 0, PointerButton::Primary);
        assert_eq!(ed.board.get(Axial::new(0, 0)), Some(offered));
        assert_eq!(ed.land.hand, None);
        assert_eq!(ed.land.discard, vec![offered]);
        assert_eq!(ed.land.total(), 51);
        // the manual brush now matches the last chosen tile
        assert_eq!(ed.active_brush(), offered);
    }

    #[test]
    fn drawing_again_while_holding_offers_three() {
        let mut ed = editor();
        ed.update(EditorEvent::DrawLand);
        ed.update(EditorEvent::ChooseLand(0));
        let first = ed.land.hand.unwrap();
        assert_eq!(ed.update(EditorEvent::DrawLand), Update::State);
        assert_eq!(ed.land.drawn.len(), 3);
        assert_eq!(ed.active_brush(), first);

        ed.update(EditorEvent::ChooseLand(2));
        assert_eq!(ed.land.discard, vec![first]);
        assert_eq!(ed.land.total(), 51);
    }

    #[test]
    fn erasing_keeps_the_held_tile() {
        let mut ed = editor();
        ed.update(EditorEvent::DrawLand);
        ed.update(EditorEvent::ChooseLand(1));
        let held = ed.land.hand;
        ed.board.paint(Axial::new(0, 0), Berg);
        click(&mut ed, 0, 0, PointerButton::Secondary);
        assert_eq!(ed.land.hand, held);
        assert!(ed.board.tiles.is_empty());
    }

    #[test]
    fn missed_paint_keeps_the_held_tile() {
        let mut ed = editor();
        ed.update(EditorEvent::DrawLand);
        ed.update(EditorEvent::ChooseLand(0));
        let held = ed.land.hand;
        click(&mut ed, 9, -9, PointerButton::Primary);
        assert_eq!(ed.land.hand, held);
    }

    #[test]
    fn starting_land_clears_board_and_brush() {
        let mut ed = editor();
        ed.update(EditorEvent::SelectBrush(Geysir));
        ed.update(EditorEvent::RandomizeBoard);
        assert_eq!(ed.board.tiles.len(), 19);
        ed.update(EditorEvent::StartLand);
        assert!(ed.board.tiles.is_empty());
        assert_eq!(ed.brush, Wuste);
        assert_eq!(ed.land.deck.len(), 51);
    }

    #[test]
    fn next_turn_counts_and_draws() {
        let mut ed = editor();
        ed.update(EditorEvent::NextTurn);
        assert_eq!(ed.turn, 2);
        assert_eq!(ed.cards.hand.len(), 4);
        let id = ed.cards.hand[0].id.clone();
        assert_eq!(ed.update(EditorEvent::PlayCard(id)), Update::State);
        assert_eq!(ed.cards.discard.len(), 1);
        assert_eq!(ed.update(EditorEvent::PlayCard("nope".into())), Update::Unchanged);
        assert_eq!(ed.update(EditorEvent::DiscardHand), Update::State);
        assert_eq!(ed.cards.hand.len(), 0);
        assert_eq!(ed.cards.total(), 11);
    }

    #[test]
    fn json_mirror_follows_state_changes() {
        let mut ed = editor();
        click(&mut ed, 0, 0, PointerButton::Primary);
        assert!(ed.json().contains("\"k\": \"0,0\""));
        assert!(ed.json().contains("\"v\": \"wuste\""));
    }

    #[test]
    fn bad_json_leaves_state_alone() {
        let mut ed = editor();
        ed.board.paint(Axial::new(0, 0), Spirit);
        let before = ed.snapshot();
        assert!(load_json(&mut ed, "{\"board\": ").is_err());
        assert_eq!(ed.snapshot(), before);
    }

    #[test]
    fn load_replaces_only_given_sections() {
        let mut ed = editor();
        let hand_before = ed.cards.hand.clone();
        let text = r#"{"board": {"hexSize": 30, "radius": 1, "tiles": [{"k": "0,-1", "v": "ruine"}]}, "turn": 9}"#;
        assert_eq!(load_json(&mut ed, text).unwrap(), Update::State);
        assert_eq!(ed.board.hex_size, 30.0);
        assert_eq!(ed.board.radius, 1);
        assert_eq!(ed.board.get(Axial::new(0, -1)), Some(Ruine));
        assert_eq!(ed.cards.hand, hand_before);
        assert_eq!(ed.turn, 9);
    }

    #[test]
    fn tiny_hex_sizes_never_break_picking() {
        let mut ed = editor();
        let text = r#"{"board": {"hexSize": 1e-9, "radius": 2, "tiles": []}}"#;
        load_json(&mut ed, text).unwrap();
        assert_eq!(ed.board.hex_size, 20.0);
        assert_eq!(ed.update(EditorEvent::PointerMove { x: 790.0, y: 590.0 }), Update::Unchanged);

        // the size event itself still takes any positive value
        ed.update(EditorEvent::SetHexSize(1e-9));
        assert_eq!(ed.update(EditorEvent::PointerMove { x: 790.0, y: 590.0 }), Update::Unchanged);
        assert_eq!(ed.hover, None);
        assert_eq!(
            ed.update(EditorEvent::PointerDown { x: 790.0, y: 590.0, button: PointerButton::Primary, shift: false }),
            Update::Unchanged
        );
        assert!(ed.board.tiles.is_empty());
    }

    #[test]
    fn save_then_load_restores_everything() {
        let mut ed = editor();
        ed.update(EditorEvent::DrawLand);
        ed.update(EditorEvent::RandomizeBoard);
        ed.update(EditorEvent::NextTurn);
        let text = ed.json().to_string();
        let saved = ed.snapshot();

        let mut other = Editor::with_rng(&EditorConfig::default(), StdRng::seed_from_u64(1));
        load_json(&mut other, &text).unwrap();
        assert_eq!(other.snapshot(), saved);
        assert_eq!(other.board, ed.board);
        assert_eq!(other.land, ed.land);
    }
}
