//! Demo card game: static card library plus deck/hand/discard bookkeeping.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use crate::terrain::TerrainId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affinity {
    Terrain(TerrainId),
    Neutral,
}

impl Affinity {
    pub fn terrain(self) -> Option<TerrainId> {
        match self {
            Affinity::Terrain(t) => Some(t),
            Affinity::Neutral => None,
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affinity::Terrain(t) => f.write_str(t.as_str()),
            Affinity::Neutral => f.write_str("neutral"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub affinity: Option<Affinity>,
    pub text: Option<String>,
}

struct CardDef {
    id: &'static str,
    name: &'static str,
    cost: u32,
    affinity: TerrainId,
    text: &'static str,
}

const CARD_LIBRARY: &[CardDef] = &[
    CardDef { id: "sapling-spirit", name: "Sapling Spirit", cost: 2, affinity: TerrainId::Wald, text: "Beschwöre einen 1/1 Waldgeist. Kosten -1 pro Wald in Reichweite." },
    CardDef { id: "lava-surge", name: "Lava Surge", cost: 4, affinity: TerrainId::Berg, text: "Füge 3 Schaden an einer Einheit oder einem Spieler zu." },
    CardDef { id: "tidal-pull", name: "Tidal Pull", cost: 3, affinity: TerrainId::Wasser, text: "Verschiebe eine Einheit um 1 Hex in Richtung Wasser." },
    CardDef { id: "stone-guard", name: "Stone Guard", cost: 3, affinity: TerrainId::Ebene, text: "2/3 Wächter. Kosten -1 wenn angrenzend an Ebene." },
    CardDef { id: "bog-lurker", name: "Bog Lurker", cost: 2, affinity: TerrainId::Sumpf, text: "1/4 Tarnung auf Sumpf." },
    CardDef { id: "geyser-mage", name: "Geysir-Mage", cost: 4, affinity: TerrainId::Geysir, text: "Ziehe 1 Karte. Wenn Geysir in Reichweite, ziehe 2." },
    CardDef { id: "plain-rider", name: "Plain Rider", cost: 1, affinity: TerrainId::Ebene, text: "Eilige 1/1. +1/+0 wenn auf Ebene gespielt." },
    CardDef { id: "sand-djinn", name: "Sand Djinn", cost: 3, affinity: TerrainId::Wuste, text: "Fliegend 2/2. Erhalte +1 Ausweichen in Wüste." },
    CardDef { id: "spirit-beacon", name: "Spirit Beacon", cost: 2, affinity: TerrainId::Spirit, text: "Permanent: Affinitätskarten kosten 1 weniger, einmal pro Zug." },
];

const DEMO_DECK: &[&str] = &[
    "sapling-spirit",
    "sapling-spirit",
    "lava-surge",
    "tidal-pull",
    "stone-guard",
    "bog-lurker",
    "geyser-mage",
    "plain-rider",
    "plain-rider",
    "sand-djinn",
    "spirit-beacon",
];

/// Looks a card up in the library; unknown ids become a neutral 1-cost custom card.
pub fn card_from_id(id: &str) -> Card {
    match CARD_LIBRARY.iter().find(|c| c.id == id) {
        Some(def) => Card {
            id: def.id.to_string(),
            name: def.name.to_string(),
            cost: def.cost,
            affinity: Some(Affinity::Terrain(def.affinity)),
            text: Some(def.text.to_string()),
        },
        None => Card {
            id: id.to_string(),
            name: id.to_string(),
            cost: 1,
            affinity: Some(Affinity::Neutral),
            text: Some("Custom Card".to_string()),
        },
    }
}

pub fn demo_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck: Vec<Card> = DEMO_DECK.iter().map(|id| card_from_id(id)).collect();
    deck.shuffle(rng);
    deck
}

/// The three card zones. The top of the deck is the end of `deck`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardZones {
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub discard: Vec<Card>,
}

impl CardZones {
    pub fn with_deck(deck: Vec<Card>) -> Self {
        Self {
            deck,
            ..Default::default()
        }
    }

    fn refill_from_discard<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.deck.is_empty() && !self.discard.is_empty() {
            self.deck.append(&mut self.discard);
            self.deck.shuffle(rng);
        }
    }

    /// Draws up to `count` cards, reshuffling the discard pile whenever the deck
    /// runs dry. Returns how many were actually drawn.
    pub fn draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            self.refill_from_discard(rng);
            let Some(card) = self.deck.pop() else { break };
            self.hand.push(card);
            drawn += 1;
        }
        drawn
    }

    /// Moves the first hand card with `id` to the discard pile.
    pub fn play(&mut self, id: &str) -> bool {
        let Some(idx) = self.hand.iter().position(|c| c.id == id) else {
            return false;
        };
        let card = self.hand.remove(idx);
        self.discard.push(card);
        true
    }

    pub fn discard_hand(&mut self) -> bool {
        if self.hand.is_empty() {
            return false;
        }
        self.discard.append(&mut self.hand);
        true
    }

    /// Merges the discard pile back into the deck and shuffles.
    pub fn shuffle_deck<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.append(&mut self.discard);
        self.deck.shuffle(rng);
    }

    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    fn sorted_ids(z: &CardZones) -> Vec<String> {
        let mut all: Vec<String> = z
            .deck
            .iter()
            .chain(z.hand.iter())
            .chain(z.discard.iter())
            .map(|c| c.id.clone())
            .collect();
        all.sort();
        all
    }

    #[test]
    fn unknown_ids_become_custom_cards() {
        let c = card_from_id("mystery");
        assert_eq!(c.name, "mystery");
        assert_eq!(c.cost, 1);
        assert_eq!(c.affinity, Some(Affinity::Neutral));
        let known = card_from_id("lava-surge");
        assert_eq!(known.cost, 4);
        assert_eq!(known.affinity, Some(Affinity::Terrain(TerrainId::Berg)));
    }

    #[test]
    fn draw_pops_from_top() {
        let mut z = CardZones::with_deck(vec![card_from_id("a"), card_from_id("b")]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(z.draw(1, &mut rng), 1);
        assert_eq!(ids(&z.hand), vec!["b"]);
        assert_eq!(ids(&z.deck), vec!["a"]);
    }

    #[test]
    fn draw_reshuffles_discard_without_loss() {
        let mut z = CardZones {
            deck: vec![card_from_id("A")],
            hand: vec![],
            discard: vec![card_from_id("B"), card_from_id("C")],
        };
        let before = sorted_ids(&z);
        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(z.draw(2, &mut rng), 2);
        assert_eq!(z.hand.len(), 2);
        assert_eq!(z.hand[0].id, "A");
        assert!(z.hand[1].id == "B" || z.hand[1].id == "C");
        assert!(z.discard.is_empty());
        assert_eq!(z.deck.len(), 1);
        assert_eq!(sorted_ids(&z), before);
    }

    #[test]
    fn draw_stops_when_everything_is_empty() {
        let mut z = CardZones::with_deck(vec![card_from_id("x")]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(z.draw(5, &mut rng), 1);
        assert_eq!(z.hand.len(), 1);
        assert_eq!(z.draw(1, &mut rng), 0);
    }

    #[test]
    fn play_moves_first_match_only() {
        let mut z = CardZones {
            deck: vec![],
            hand: vec![card_from_id("plain-rider"), card_from_id("bog-lurker"), card_from_id("plain-rider")],
            discard: vec![],
        };
        assert!(z.play("plain-rider"));
        assert_eq!(ids(&z.hand), vec!["bog-lurker", "plain-rider"]);
        assert_eq!(ids(&z.discard), vec!["plain-rider"]);
        assert!(!z.play("lava-surge"));
        assert_eq!(z.total(), 3);
    }

    #[test]
    fn discard_hand_and_shuffle_back() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut z = CardZones::with_deck(demo_deck(&mut rng));
        assert_eq!(z.total(), 11);
        z.draw(4, &mut rng);
        assert!(z.discard_hand());
        assert!(!z.discard_hand());
        assert_eq!(z.discard.len(), 4);
        z.shuffle_deck(&mut rng);
        assert!(z.discard.is_empty());
        assert_eq!(z.deck.len(), 11);
    }
}
