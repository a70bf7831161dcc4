//! Terrain catalog: the fixed set of paintable terrain types and how they render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainId {
    Wuste,
    Kueste,
    Wasser,
    Ebene,
    Sternenebene,
    Wald,
    Regenwald,
    Waldtempel,
    Sumpf,
    Berg,
    Bergkamm,
    Himmelberge,
    Geysir,
    Feuertempel,
    Spirit,
    Ruine,
    Tempelruine,
    /// Sentinel for "no terrain". Never stored in the tile map.
    Leer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terrain {
    pub id: TerrainId,
    pub label: &'static str,
    /// Flat fill colour as `#rrggbb`; `None` for the empty sentinel.
    pub color: Option<&'static str>,
    pub image: Option<&'static str>,
    pub info: Option<&'static str>,
}

const fn terrain(
    id: TerrainId,
    label: &'static str,
    color: Option<&'static str>,
    image: Option<&'static str>,
    info: &'static str,
) -> Terrain {
    Terrain { id, label, color, image, info: Some(info) }
}

pub static TERRAIN: [Terrain; 18] = [
    terrain(TerrainId::Wuste, "Wüste", Some("#C9B27B"), None, "Heiße Dünen und trockene Winde"),
    terrain(TerrainId::Kueste, "Küste", Some("#3A9AB7"), Some("assets/tiles/coast.png"), "Sandiger Übergang zum Meer"),
    terrain(TerrainId::Wasser, "Wasser", Some("#2F6E8E"), None, "Klare See mit kleiner Strömung"),
    terrain(TerrainId::Ebene, "Ebene", Some("#7A8A5B"), None, "Weite Gräser und sanfte Hügel"),
    terrain(TerrainId::Sternenebene, "Sternenebene", Some("#8B7CC9"), Some("assets/tiles/star plains.png"), "Felder unter leuchtendem Nachthimmel"),
    terrain(TerrainId::Wald, "Wald", Some("#3E6B55"), Some("assets/tiles/forest.png"), "Dichter Wald mit hohen Kiefern"),
    terrain(TerrainId::Regenwald, "Regenwald", Some("#2F7A5A"), Some("assets/tiles/rainforest.png"), "Feuchte, dichte Vegetation"),
    terrain(TerrainId::Waldtempel, "Waldtempel", Some("#5F7D5F"), Some("assets/tiles/forest temple.png"), "Verwachsener Tempel im Grün"),
    terrain(TerrainId::Sumpf, "Sumpf", Some("#4E5B49"), Some("assets/tiles/swamp.png"), "Nebliger Morast mit Tümpeln"),
    terrain(TerrainId::Berg, "Berg", Some("#6A6F7B"), Some("assets/tiles/mountain.png"), "Felsige Steilhänge"),
    terrain(TerrainId::Bergkamm, "Bergkamm", Some("#747A88"), Some("assets/tiles/mountain2.png"), "Karger Grat mit Geröll"),
    terrain(TerrainId::Himmelberge, "Himmelsberge", Some("#9AB4D9"), Some("assets/tiles/heavenly mountains.png"), "Helle Gipfel über den Wolken"),
    terrain(TerrainId::Geysir, "Geysir", Some("#4CA3D9"), Some("assets/tiles/geysir.png"), "Sprudelnde Quelle mit Dampf"),
    terrain(TerrainId::Feuertempel, "Feuertempel", Some("#C26A3F"), Some("assets/tiles/fire temple.png"), "Glühender Tempel im Lavastrom"),
    terrain(TerrainId::Spirit, "Spirit", Some("#8C6DB6"), None, "Schimmernde Geisterlande"),
    terrain(TerrainId::Ruine, "Ruine", Some("#9A8A7A"), Some("assets/tiles/ancient ruine.png"), "Alte Mauern voller Geheimnisse"),
    terrain(TerrainId::Tempelruine, "Tempelruine", Some("#BFA56A"), Some("assets/tiles/temple ruin.png"), "Eingestürzter Tempelkomplex"),
    terrain(TerrainId::Leer, "Leer", None, Some("assets/tiles/leer.png"), "Kein Terrain"),
];

impl TerrainId {
    pub const ALL: [TerrainId; 18] = [
        TerrainId::Wuste,
        TerrainId::Kueste,
        TerrainId::Wasser,
        TerrainId::Ebene,
        TerrainId::Sternenebene,
        TerrainId::Wald,
        TerrainId::Regenwald,
        TerrainId::Waldtempel,
        TerrainId::Sumpf,
        TerrainId::Berg,
        TerrainId::Bergkamm,
        TerrainId::Himmelberge,
        TerrainId::Geysir,
        TerrainId::Feuertempel,
        TerrainId::Spirit,
        TerrainId::Ruine,
        TerrainId::Tempelruine,
        TerrainId::Leer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TerrainId::Wuste => "wuste",
            TerrainId::Kueste => "kueste",
            TerrainId::Wasser => "wasser",
            TerrainId::Ebene => "ebene",
            TerrainId::Sternenebene => "sternenebene",
            TerrainId::Wald => "wald",
            TerrainId::Regenwald => "regenwald",
            TerrainId::Waldtempel => "waldtempel",
            TerrainId::Sumpf => "sumpf",
            TerrainId::Berg => "berg",
            TerrainId::Bergkamm => "bergkamm",
            TerrainId::Himmelberge => "himmelberge",
            TerrainId::Geysir => "geysir",
            TerrainId::Feuertempel => "feuertempel",
            TerrainId::Spirit => "spirit",
            TerrainId::Ruine => "ruine",
            TerrainId::Tempelruine => "tempelruine",
            TerrainId::Leer => "leer",
        }
    }

    pub fn is_empty(self) -> bool {
        self == TerrainId::Leer
    }

    /// Catalog entry for this id. The table is indexed in declaration order.
    pub fn terrain(self) -> &'static Terrain {
        &TERRAIN[self as usize]
    }
}

impl fmt::Display for TerrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTerrain(pub String);

impl FromStr for TerrainId {
    type Err = UnknownTerrain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TerrainId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTerrain(s.to_string()))
    }
}

/// Every terrain a tile can actually hold (the catalog minus the empty sentinel).
pub fn paintable() -> impl Iterator<Item = TerrainId> {
    TerrainId::ALL.into_iter().filter(|id| !id.is_empty())
}

/// Distinct image sources referenced by the catalog, in catalog order.
pub fn image_sources() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for t in TERRAIN.iter() {
        if let Some(src) = t.image {
            if !out.contains(&src) {
                out.push(src);
            }
        }
    }
    out
}
