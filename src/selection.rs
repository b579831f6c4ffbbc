// Selection tracking: one or more regions, never empty

use crate::error::{Error, Result};
use crate::region::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    regions: Vec<Region>,
}

impl Selection {
    pub fn new(region: Region) -> Self {
        Self {
            regions: vec![region],
        }
    }

    pub fn from_caret(pt: usize) -> Self {
        Self::new(Region::point(pt))
    }

    /// Builds a selection from several regions, ordered by position.
    /// Returns `None` for an empty list.
    pub fn from_regions(mut regions: Vec<Region>) -> Option<Self> {
        if regions.is_empty() {
            return None;
        }
        regions.sort_by_key(|r| (r.begin(), r.end()));
        regions.dedup();
        Some(Self { regions })
    }

    /// Drops every region and selects `region` alone.
    pub fn replace(&mut self, region: Region) {
        self.regions.clear();
        self.regions.push(region);
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_multiple(&self) -> bool {
        self.regions.len() > 1
    }

    /// The earliest region in the buffer, not the first one selected in time.
    pub fn first(&self) -> Region {
        self.regions[0]
    }

    pub fn single(&self) -> Result<Region> {
        if self.is_multiple() {
            return Err(Error::MultipleSelections);
        }
        Ok(self.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_creation() {
        let selection = Selection::new(Region::new(0, 5));
        assert_eq!(selection.len(), 1);
        assert!(!selection.is_multiple());
        assert_eq!(selection.single().unwrap(), Region::new(0, 5));
    }

    #[test]
    fn test_from_caret_is_empty_region() {
        let selection = Selection::from_caret(2);
        assert_eq!(selection.first(), Region::point(2));
    }

    #[test]
    fn test_from_regions_orders_by_position() {
        let selection =
            Selection::from_regions(vec![Region::new(10, 12), Region::new(1, 3)]).unwrap();
        assert_eq!(selection.regions(), &[Region::new(1, 3), Region::new(10, 12)]);
        assert!(Selection::from_regions(Vec::new()).is_none());
    }

    #[test]
    fn test_multiple_regions_have_no_single() {
        let selection = Selection::from_regions(vec![Region::point(0), Region::new(4, 6)]).unwrap();
        assert!(selection.is_multiple());
        assert!(matches!(selection.single(), Err(Error::MultipleSelections)));
    }

    #[test]
    fn test_from_regions_drops_duplicates() {
        let selection = Selection::from_regions(vec![Region::point(3), Region::point(3)]).unwrap();
        assert_eq!(selection.len(), 1);
        assert!(!selection.is_multiple());
    }

    #[test]
    fn test_replace() {
        let mut selection = Selection::from_regions(vec![Region::point(1), Region::point(9)]).unwrap();
        selection.replace(Region::new(4, 7));
        assert_eq!(selection.regions(), &[Region::new(4, 7)]);
    }
}
