// src/selection.rs
use crate::region_data::Region;

/// At most one selected region, owned by the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    current: Option<Region>,
}

impl Selection {
    pub fn current(&self) -> Option<&Region> {
        self.current.as_ref()
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, region: Region) -> bool {
        if self.current.as_ref().map(|r| r.id.as_str()) == Some(region.id.as_str()) {
            return false;
        }
        self.current = Some(region);
        true
    }

    /// Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region_data::Dataset;

    #[test]
    fn test_select_is_idempotent() {
        let data = Dataset::load().unwrap();
        let ka = data.find("KA").unwrap().clone();
        let mut selection = Selection::default();

        assert!(selection.select(ka.clone()));
        let after_first = selection.clone();
        assert!(!selection.select(ka.clone()));
        assert_eq!(selection, after_first);
        assert_eq!(selection.current(), Some(&ka));
    }

    #[test]
    fn test_select_replaces() {
        let data = Dataset::load().unwrap();
        let mut selection = Selection::default();
        selection.select(data.find("KA").unwrap().clone());
        assert!(selection.select(data.find("GA").unwrap().clone()));
        assert_eq!(selection.current().unwrap().name, "Goa");
    }

    #[test]
    fn test_clear() {
        let data = Dataset::load().unwrap();
        let mut selection = Selection::default();
        assert!(!selection.clear());
        selection.select(data.find("DL").unwrap().clone());
        assert!(selection.clear());
        assert!(selection.current().is_none());
    }
}
