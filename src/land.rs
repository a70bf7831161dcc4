//! Land draft: draw three terrain tiles, keep one as the next brush.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::terrain::{paintable, TerrainId};

pub const DRAFT_SIZE: usize = 3;
pub const COPIES_PER_TERRAIN: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandDraft {
    /// Draw pile; the next tile drawn is the last element.
    pub deck: Vec<TerrainId>,
    /// Tile chosen from the last draft, waiting to be painted.
    pub hand: Option<TerrainId>,
    /// Offered tiles: empty, or exactly `DRAFT_SIZE`.
    pub drawn: Vec<TerrainId>,
    pub discard: Vec<TerrainId>,
    pub started: bool,
}

pub fn fresh_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<TerrainId> {
    let mut deck = Vec::new();
    for id in paintable() {
        deck.extend(std::iter::repeat_n(id, COPIES_PER_TERRAIN));
    }
    deck.shuffle(rng);
    deck
}

impl LandDraft {
    /// (Re)starts the draft with a freshly shuffled deck. Clearing the board is
    /// the caller's job.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = LandDraft {
            deck: fresh_deck(rng),
            started: true,
            ..Default::default()
        };
    }

    pub fn can_draw(&self) -> bool {
        self.started
            && self.drawn.is_empty()
            && self.deck.len() + self.discard.len() >= DRAFT_SIZE
    }

    fn refill_from_discard<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.deck.is_empty() && !self.discard.is_empty() {
            self.deck.append(&mut self.discard);
            self.deck.shuffle(rng);
        }
    }

    /// Offers the next three tiles. Starts the draft first if needed.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.started {
            self.start(rng);
        }
        if !self.can_draw() {
            return false;
        }
        for _ in 0..DRAFT_SIZE {
            self.refill_from_discard(rng);
            if let Some(t) = self.deck.pop() {
                self.drawn.push(t);
            }
        }
        true
    }

    /// Keeps the offered tile at `index`. The other two go under the deck (the
    /// front of `deck`) in reverse offer order. A tile still held from an
    /// earlier draft is discarded.
    pub fn choose(&mut self, index: usize) -> Option<TerrainId> {
        if index >= self.drawn.len() {
            return None;
        }
        if let Some(prev) = self.hand.take() {
            self.discard.push(prev);
        }
        let choice = self.drawn.remove(index);
        let mut rest = std::mem::take(&mut self.drawn);
        rest.reverse();
        rest.append(&mut self.deck);
        self.deck = rest;
        self.hand = Some(choice);
        Some(choice)
    }

    /// Spends the held tile after it has been painted.
    pub fn consume(&mut self) -> Option<TerrainId> {
        let t = self.hand.take()?;
        self.discard.push(t);
        Some(t)
    }

    pub fn total(&self) -> usize {
        self.deck.len() + self.drawn.len() + self.discard.len() + usize::from(self.hand.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use TerrainId::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn start_stocks_three_of_each() {
        let mut land = LandDraft::default();
        land.start(&mut rng());
        assert!(land.started);
        assert_eq!(land.deck.len(), 51);
        assert_eq!(land.deck.iter().filter(|t| **t == Wald).count(), 3);
        assert!(!land.deck.contains(&Leer));
    }

    #[test]
    fn draw_offers_exactly_three() {
        let mut land = LandDraft::default();
        let mut r = rng();
        assert!(land.draw(&mut r));
        assert!(land.started);
        assert_eq!(land.drawn.len(), 3);
        assert_eq!(land.deck.len(), 48);
        // pending draft blocks another draw
        assert!(!land.draw(&mut r));
        assert_eq!(land.drawn.len(), 3);
    }

    #[test]
    fn rejects_go_back_reversed_on_the_bottom() {
        let mut land = LandDraft {
            deck: vec![Wald, Berg, Sumpf, Ebene, Wasser, Geysir],
            started: true,
            ..Default::default()
        };
        let mut r = rng();
        assert!(land.draw(&mut r));
        assert_eq!(land.drawn, vec![Geysir, Wasser, Ebene]);
        assert_eq!(land.deck, vec![Wald, Berg, Sumpf]);
        assert_eq!(land.choose(1), Some(Wasser));
        assert_eq!(land.hand, Some(Wasser));
        assert!(land.drawn.is_empty());
        assert_eq!(land.deck, vec![Ebene, Geysir, Wald, Berg, Sumpf]);
    }

    #[test]
    fn choose_keeps_duplicates() {
        let mut land = LandDraft {
            deck: vec![Ruine, Wald, Wald, Wald],
            started: true,
            ..Default::default()
        };
        land.draw(&mut rng());
        land.choose(0);
        assert_eq!(land.hand, Some(Wald));
        assert_eq!(land.deck, vec![Wald, Wald, Ruine]);
    }

    #[test]
    fn choose_out_of_range_is_ignored() {
        let mut land = LandDraft::default();
        assert_eq!(land.choose(0), None);
        land.draw(&mut rng());
        assert_eq!(land.choose(3), None);
        assert_eq!(land.drawn.len(), 3);
        assert_eq!(land.hand, None);
    }

    #[test]
    fn drawing_while_holding_discards_the_old_tile() {
        let mut land = LandDraft::default();
        let mut r = rng();
        land.draw(&mut r);
        let first = land.choose(2).unwrap();
        assert!(land.can_draw());
        assert!(land.draw(&mut r));
        assert_eq!(land.drawn.len(), 3);
        assert_eq!(land.hand, Some(first));
        assert!(!land.can_draw());

        let second = land.choose(0).unwrap();
        assert_eq!(land.hand, Some(second));
        assert_eq!(land.discard, vec![first]);
        assert_eq!(land.total(), 51);

        assert_eq!(land.consume(), Some(second));
        assert_eq!(land.discard, vec![first, second]);
        assert_eq!(land.consume(), None);
        assert!(land.can_draw());
        assert_eq!(land.total(), 51);
    }

    #[test]
    fn draw_reshuffles_discard_when_deck_runs_out() {
        let mut land = LandDraft {
            deck: vec![Wald],
            discard: vec![Berg, Berg],
            started: true,
            ..Default::default()
        };
        assert!(land.draw(&mut rng()));
        assert_eq!(land.drawn, vec![Wald, Berg, Berg]);
        assert!(land.deck.is_empty());
        assert!(land.discard.is_empty());
    }

    #[test]
    fn too_few_tiles_means_no_draft() {
        let mut land = LandDraft {
            deck: vec![Wald],
            discard: vec![Berg],
            started: true,
            ..Default::default()
        };
        assert!(!land.draw(&mut rng()));
        assert!(land.drawn.is_empty());
        assert_eq!(land.total(), 2);
    }
}
