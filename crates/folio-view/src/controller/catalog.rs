use std::collections::{BTreeMap, HashMap};

use crate::view::ProjectPayload;

/// Lookup of project cards by id.
///
/// Card clicks and `project` deep links resolve payloads through the same
/// lookup, so a deep link opens exactly what a click would.
pub trait ProjectCatalog {
    fn lookup(&self, id: &str) -> Option<ProjectPayload>;
}

impl ProjectCatalog for [ProjectPayload] {
    fn lookup(&self, id: &str) -> Option<ProjectPayload> {
        self.iter().find(|p| p.id == id).cloned()
    }
}

impl ProjectCatalog for Vec<ProjectPayload> {
    fn lookup(&self, id: &str) -> Option<ProjectPayload> {
        self.as_slice().lookup(id)
    }
}

impl ProjectCatalog for BTreeMap<String, ProjectPayload> {
    fn lookup(&self, id: &str) -> Option<ProjectPayload> {
        self.get(id).cloned()
    }
}

impl ProjectCatalog for HashMap<String, ProjectPayload> {
    fn lookup(&self, id: &str) -> Option<ProjectPayload> {
        self.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_lookup() {
        let cards = vec![ProjectPayload::with_id("a"), ProjectPayload::with_id("b")];
        assert_eq!(cards.lookup("b").map(|p| p.id), Some("b".to_string()));
        assert!(cards.lookup("c").is_none());
        assert!(cards.lookup("").is_none());
    }

    #[test]
    fn test_map_lookup() {
        let mut cards = BTreeMap::new();
        cards.insert("card-7".to_string(), ProjectPayload::with_id("card-7"));
        assert!(cards.lookup("card-7").is_some());
    }
}
