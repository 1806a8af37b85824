//! Renders view flags onto the document

use folio_view::{ViewError, ViewFlags, ViewResult, ViewState, ViewSurface, ROOT_CLASSES};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement};

use crate::config::Selectors;
use crate::dom_error;

const MODAL_SHOW_CLASS: &str = "show";

/// The project detail modal and its content slots
struct Modal {
    root: Element,
    title: Element,
    description: Element,
    image: Option<HtmlImageElement>,
    link: Option<HtmlAnchorElement>,
}

impl Modal {
    fn find(document: &Document, selectors: &Selectors) -> ViewResult<Option<Self>> {
        let query = |selector: &str| document.query_selector(selector).map_err(dom_error);
        let Some(root) = query(&selectors.modal)? else {
            return Ok(None);
        };
        let (Some(title), Some(description)) = (
            query(&selectors.modal_title)?,
            query(&selectors.modal_description)?,
        ) else {
            return Ok(None);
        };
        Ok(Some(Self {
            root,
            title,
            description,
            image: query(&selectors.modal_image)?.and_then(|e| e.dyn_into().ok()),
            link: query(&selectors.modal_link)?.and_then(|e| e.dyn_into().ok()),
        }))
    }

    fn show(&self, state: &ViewState) -> Result<(), JsValue> {
        match &state.overlay {
            Some(payload) => {
                self.title.set_text_content(Some(&payload.title));
                self.description.set_text_content(Some(&payload.description));
                if let Some(image) = &self.image {
                    image.set_src(&payload.image_ref);
                }
                if let Some(link) = &self.link {
                    link.set_href(&payload.link);
                }
                self.root.class_list().add_1(MODAL_SHOW_CLASS)
            }
            None => self.root.class_list().remove_1(MODAL_SHOW_CLASS),
        }
    }
}

/// [`ViewSurface`] writing classes and styles onto `<body>`
///
/// The scroll lock is held back until the entrance sequence finishes;
/// until then the stylesheet owns `overflow`.
pub struct DomSurface {
    body: HtmlElement,
    modal: Option<Modal>,
    scroll_policy: bool,
}

impl DomSurface {
    pub fn new(document: &Document, selectors: &Selectors) -> ViewResult<Self> {
        let body = document
            .body()
            .ok_or_else(|| ViewError::Dom("document has no body".to_string()))?;
        let modal = Modal::find(document, selectors)?;
        if modal.is_none() {
            warn!(selector = %selectors.modal, "project modal not found; overlay will not render");
        }
        Ok(Self {
            body,
            modal,
            scroll_policy: false,
        })
    }

    /// Start applying the scroll lock on subsequent renders
    pub fn enable_scroll_policy(&mut self) {
        self.scroll_policy = true;
    }

    pub fn body(&self) -> &HtmlElement {
        &self.body
    }

    fn apply(&self, state: &ViewState, flags: &ViewFlags) -> Result<(), JsValue> {
        let classes = self.body.class_list();
        for class in ROOT_CLASSES {
            if flags.has_class(class) {
                classes.add_1(class)?;
            } else {
                classes.remove_1(class)?;
            }
        }
        if self.scroll_policy {
            self.body.style().set_property("overflow", flags.overflow())?;
        }
        if let Some(modal) = &self.modal {
            modal.show(state)?;
        }
        Ok(())
    }
}

impl ViewSurface for DomSurface {
    fn render(&mut self, state: &ViewState, flags: &ViewFlags) {
        if let Err(err) = self.apply(state, flags) {
            warn!(error = ?err, "failed to render view flags");
        }
    }
}

/// Root element as an `HtmlElement`, for custom property writes
pub(crate) fn root_element(document: &Document) -> ViewResult<HtmlElement> {
    document
        .document_element()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ViewError::Dom("document has no root element".to_string()))
}
