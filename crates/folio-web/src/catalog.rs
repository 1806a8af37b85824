//! Project cards as a [`ProjectCatalog`]

use folio_view::{ProjectCatalog, ProjectPayload};
use web_sys::{Document, Element};

const ATTR_TITLE: &str = "data-title";
const ATTR_DESCRIPTION: &str = "data-description";
const ATTR_IMAGE: &str = "data-image";
const ATTR_LINK: &str = "data-link";

/// Looks project cards up by element id
///
/// Only elements matching the card selector count, so a `project`
/// parameter naming some other element is treated as missing.
pub struct DomCatalog {
    document: Document,
    card_selector: String,
}

impl DomCatalog {
    pub fn new(document: Document, card_selector: impl Into<String>) -> Self {
        Self {
            document,
            card_selector: card_selector.into(),
        }
    }

    /// Read the overlay payload carried by a card element
    pub fn payload_of(&self, card: &Element) -> Option<ProjectPayload> {
        if !card.matches(&self.card_selector).unwrap_or(false) {
            return None;
        }
        let id = card.id();
        if id.is_empty() {
            return None;
        }
        let attr = |name: &str| card.get_attribute(name).unwrap_or_default();
        Some(ProjectPayload {
            id,
            title: attr(ATTR_TITLE),
            description: attr(ATTR_DESCRIPTION),
            image_ref: attr(ATTR_IMAGE),
            link: attr(ATTR_LINK),
        })
    }
}

impl ProjectCatalog for DomCatalog {
    fn lookup(&self, id: &str) -> Option<ProjectPayload> {
        if id.is_empty() {
            return None;
        }
        let card = self.document.get_element_by_id(id)?;
        self.payload_of(&card)
    }
}
