use once_cell::sync::OnceCell;

use fitpic_types::{Outfit, OutfitId};

use crate::{Error, Result};

const OUTFITS_JSON: &str = include_str!("../data/outfits.json");

static BUILTIN: OnceCell<Vec<Outfit>> = OnceCell::new();

/// The outfit catalog shipped with the app, parsed once on first use.
pub fn builtin_outfits() -> Result<&'static [Outfit]> {
    BUILTIN
        .get_or_try_init(|| serde_json::from_str(OUTFITS_JSON))
        .map(Vec::as_slice)
        .map_err(Error::from)
}

/// Working copy of the outfit catalog.
///
/// Order is feed order. Records are reference data except for
/// `rating`/`reviews` (updated on rating submission) and remixes, which are
/// inserted at the front so they appear first in the feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    outfits: Vec<Outfit>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Ok(Self::from_outfits(builtin_outfits()?.to_vec()))
    }

    pub fn from_outfits(outfits: Vec<Outfit>) -> Self {
        Self { outfits }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_outfits(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    pub fn as_slice(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outfit> {
        self.outfits.iter()
    }

    pub fn get(&self, id: OutfitId) -> Option<&Outfit> {
        self.outfits.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: OutfitId) -> Option<&mut Outfit> {
        self.outfits.iter_mut().find(|o| o.id == id)
    }

    pub fn require(&self, id: OutfitId) -> Result<&Outfit> {
        self.get(id).ok_or(Error::UnknownOutfit(id))
    }

    pub fn require_mut(&mut self, id: OutfitId) -> Result<&mut Outfit> {
        self.get_mut(id).ok_or(Error::UnknownOutfit(id))
    }

    /// Records in `[start, end)`, clamped to the catalog bounds.
    pub fn range(&self, start: usize, end: usize) -> &[Outfit] {
        let end = end.min(self.outfits.len());
        let start = start.min(end);
        &self.outfits[start..end]
    }

    /// Id one past the largest id in the catalog.
    pub fn next_id(&self) -> OutfitId {
        self.outfits.iter().map(|o| o.id).max().unwrap_or(0) + 1
    }

    pub fn insert_front(&mut self, outfit: Outfit) {
        tracing::debug!(id = outfit.id, title = %outfit.title, "Inserting outfit at catalog front");
        self.outfits.insert(0, outfit);
    }

    /// Re-insert persisted remixes that are not yet in the catalog.
    ///
    /// `remixes` is in creation order, so the newest one ends up first.
    pub fn restore_remixes(&mut self, remixes: &[Outfit]) -> usize {
        let mut restored = 0;
        for remix in remixes {
            if self.get(remix.id).is_none() {
                self.outfits.insert(0, remix.clone());
                restored += 1;
            }
        }
        if restored > 0 {
            tracing::info!(restored, "Restored user remixes into catalog");
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_parses() {
        let outfits = builtin_outfits().unwrap();
        assert_eq!(outfits.len(), 12);

        let ids: HashSet<_> = outfits.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), outfits.len(), "outfit ids must be unique");

        for outfit in outfits {
            assert!(!outfit.products.is_empty(), "outfit {} has no products", outfit.id);
            assert!(!outfit.filter_style.is_empty(), "outfit {} has no style tags", outfit.id);
            assert!(outfit.confidence <= 100);
        }
    }

    #[test]
    fn test_boho_date_night_tags() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.get(1).unwrap();
        assert_eq!(first.title, "Boho Date Night");
        assert_eq!(first.filter_style, vec!["boho", "casual"]);
        assert_eq!(first.category_string(), "date-night");
    }

    #[test]
    fn test_range_clamps_to_bounds() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.range(0, 8).len(), 8);
        assert_eq!(catalog.range(8, 16).len(), 4);
        assert!(catalog.range(16, 24).is_empty());
        assert_eq!(catalog.range(8, 16)[0].id, 9);
    }

    #[test]
    fn test_next_id_and_insert_front() {
        let mut catalog = Catalog::builtin().unwrap();
        let original = catalog.require(2).unwrap().clone();
        let remix = Outfit::remix_of(&original, catalog.next_id(), vec!["color".into()], 85);
        assert_eq!(remix.id, 13);

        catalog.insert_front(remix);
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.as_slice()[0].id, 13);
        assert_eq!(catalog.next_id(), 14);
    }

    #[test]
    fn test_restore_remixes_skips_known_ids() {
        let mut catalog = Catalog::builtin().unwrap();
        let base = catalog.require(1).unwrap().clone();
        let a = Outfit::remix_of(&base, 20, vec!["shoes".into()], 90);
        let b = Outfit::remix_of(&base, 21, vec!["budget".into()], 82);

        assert_eq!(catalog.restore_remixes(&[a.clone(), b.clone()]), 2);
        assert_eq!(catalog.as_slice()[0].id, 21);
        assert_eq!(catalog.as_slice()[1].id, 20);

        assert_eq!(catalog.restore_remixes(&[a, b]), 0);
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_require_unknown_outfit() {
        let catalog = Catalog::from_outfits(Vec::new());
        let err = catalog.require(99).unwrap_err();
        assert_eq!(err.to_string(), "Outfit 99 not found in catalog");
        assert_eq!(catalog.next_id(), 1);
    }
}
