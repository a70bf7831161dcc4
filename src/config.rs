//! Editor start-up settings, persisted in `localStorage`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{DEFAULT_HEX_SIZE, DEFAULT_RADIUS};
use crate::terrain::TerrainId;
use crate::util::cwarn;

pub const STORAGE_KEY: &str = "hexmap_settings";
pub const RADIUS_RANGE: (u32, u32) = (0, 20);
pub const HEX_SIZE_RANGE: (f64, f64) = (20.0, 140.0);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write settings")]
    Write,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub hex_size: f64,
    pub radius: u32,
    pub default_brush: TerrainId,
    /// Cards drawn into the hand when the editor opens.
    pub opening_hand: usize,
    /// Fixed seed for shuffles and randomize; random per session when absent.
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            radius: DEFAULT_RADIUS,
            default_brush: TerrainId::Wuste,
            opening_hand: 3,
            seed: None,
        }
    }
}

impl EditorConfig {
    /// Parses stored settings, falling back to defaults for anything unusable.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<EditorConfig>(raw) {
            Ok(cfg) => cfg.sanitized(),
            Err(err) => {
                cwarn(&format!("ignoring stored settings: {err}"));
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !(self.hex_size.is_finite() && self.hex_size > 0.0) {
            self.hex_size = DEFAULT_HEX_SIZE;
        }
        self.hex_size = self.hex_size.clamp(HEX_SIZE_RANGE.0, HEX_SIZE_RANGE.1);
        self.radius = self.radius.clamp(RADIUS_RANGE.0, RADIUS_RANGE.1);
        if self.default_brush.is_empty() {
            self.default_brush = TerrainId::Wuste;
        }
        self
    }

    pub fn load() -> Self {
        let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return Self::default();
        };
        match store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw),
            _ => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let store = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ConfigError::StorageUnavailable)?;
        let raw = serde_json::to_string(self)?;
        store.set_item(STORAGE_KEY, &raw).map_err(|_| ConfigError::Write)
    }
}
