//! Save/load JSON for the text box.
//!
//! Saving always writes every section. Loading is lenient: each top-level
//! section is optional, and bad entries inside a section are dropped instead
//! of failing the whole load. Only text that is not JSON at all is an error.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::board::Board;
use crate::cards::{Card, CardZones};
use crate::config::{HEX_SIZE_RANGE, RADIUS_RANGE};
use crate::hex::{tile_key, Axial};
use crate::land::{LandDraft, DRAFT_SIZE};
use crate::terrain::TerrainId;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileEntry {
    pub k: String,
    pub v: TerrainId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSection {
    /// `None` when a loaded value was missing or unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    pub tiles: Vec<TileEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LandSection {
    pub deck: Vec<TerrainId>,
    pub hand: Option<TerrainId>,
    pub drawn: Vec<TerrainId>,
    pub discard: Vec<TerrainId>,
    pub started: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardSection {
    pub deck: Vec<String>,
    pub hand: Vec<String>,
    pub discard: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land: Option<LandSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<CardSection>,
    pub turn: u32,
}

impl BoardSection {
    pub fn capture(board: &Board) -> Self {
        Self {
            hex_size: Some(board.hex_size),
            radius: Some(board.radius),
            tiles: board
                .tiles
                .iter()
                .map(|(at, v)| TileEntry { k: tile_key(at.q, at.r), v: *v })
                .collect(),
        }
    }

    /// Tile map described by this section. Keys that do not parse are skipped.
    pub fn tile_map(&self) -> BTreeMap<Axial, TerrainId> {
        self.tiles
            .iter()
            .filter(|t| !t.v.is_empty())
            .filter_map(|t| t.k.parse::<Axial>().ok().map(|at| (at, t.v)))
            .collect()
    }

    /// Replaces the tile map and whichever of size/radius were readable.
    pub fn apply_to(&self, board: &mut Board) {
        if let Some(size) = self.hex_size {
            board.set_hex_size(size);
        }
        if let Some(radius) = self.radius {
            board.set_radius(radius);
        }
        board.tiles = self.tile_map();
    }
}

impl LandSection {
    pub fn capture(land: &LandDraft) -> Self {
        Self {
            deck: land.deck.clone(),
            hand: land.hand,
            drawn: land.drawn.clone(),
            discard: land.discard.clone(),
            started: land.started,
        }
    }

    pub fn into_draft(self) -> LandDraft {
        let mut land = LandDraft {
            deck: self.deck,
            hand: self.hand,
            drawn: self.drawn,
            discard: self.discard,
            started: self.started,
        };
        // a partial offer cannot be chosen from; put it back on top
        if !land.drawn.is_empty() && land.drawn.len() != DRAFT_SIZE {
            let mut partial = std::mem::take(&mut land.drawn);
            partial.reverse();
            land.deck.append(&mut partial);
        }
        land
    }
}

impl CardSection {
    pub fn capture(cards: &CardZones) -> Self {
        let ids = |zone: &[Card]| -> Vec<String> { zone.iter().map(|c| c.id.clone()).collect() };
        Self {
            deck: ids(&cards.deck),
            hand: ids(&cards.hand),
            discard: ids(&cards.discard),
        }
    }
}

impl Snapshot {
    pub fn capture(board: &Board, land: &LandDraft, cards: &CardZones, turn: u32) -> Self {
        Self {
            board: Some(BoardSection::capture(board)),
            land: Some(LandSection::capture(land)),
            cards: Some(CardSection::capture(cards)),
            turn,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string_pretty(self).map_err(PersistError::Encode)
    }

    /// Parses save text. Fails only when `text` is not valid JSON; an empty box
    /// counts as `{}`.
    pub fn parse(text: &str) -> Result<Self, PersistError> {
        let text = if text.trim().is_empty() { "{}" } else { text };
        let value: Value = serde_json::from_str(text).map_err(PersistError::Parse)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            board: value.get("board").and_then(read_board),
            land: value.get("land").and_then(read_land),
            cards: value.get("cards").and_then(read_cards),
            turn: value
                .get("turn")
                .and_then(Value::as_u64)
                .filter(|t| *t >= 1)
                .map(|t| t.min(u32::MAX as u64) as u32)
                .unwrap_or(1),
        }
    }
}

fn read_board(v: &Value) -> Option<BoardSection> {
    let obj = v.as_object()?;
    Some(BoardSection {
        hex_size: obj
            .get("hexSize")
            .and_then(Value::as_f64)
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(|s| s.clamp(HEX_SIZE_RANGE.0, HEX_SIZE_RANGE.1)),
        radius: obj
            .get("radius")
            .and_then(Value::as_f64)
            .filter(|r| r.is_finite() && *r >= 0.0)
            .map(|r| (r.floor() as u32).clamp(RADIUS_RANGE.0, RADIUS_RANGE.1)),
        tiles: obj
            .get("tiles")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(read_tile).collect())
            .unwrap_or_default(),
    })
}

fn read_tile(v: &Value) -> Option<TileEntry> {
    let k = v.get("k")?.as_str()?;
    let v = v.get("v")?.as_str()?.parse::<TerrainId>().ok()?;
    Some(TileEntry { k: k.to_string(), v })
}

fn terrain_list(v: Option<&Value>) -> Vec<TerrainId> {
    v.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|s| s.parse::<TerrainId>().ok())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn read_land(v: &Value) -> Option<LandSection> {
    let obj = v.as_object()?;
    Some(LandSection {
        deck: terrain_list(obj.get("deck")),
        hand: obj
            .get("hand")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<TerrainId>().ok())
            .filter(|t| !t.is_empty()),
        drawn: terrain_list(obj.get("drawn")),
        discard: terrain_list(obj.get("discard")),
        started: obj.get("started").and_then(Value::as_bool).unwrap_or(false),
    })
}

fn id_list(v: Option<&Value>) -> Vec<String> {
    v.and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

fn read_cards(v: &Value) -> Option<CardSection> {
    let obj = v.as_object()?;
    Some(CardSection {
        deck: id_list(obj.get("deck")),
        hand: id_list(obj.get("hand")),
        discard: id_list(obj.get("discard")),
    })
}
