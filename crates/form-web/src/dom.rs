use form_core::{ElementLookup, StyledElement, ToggleError, DISPLAY_PROPERTY};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Browser document seen through the core lookup trait.
pub struct WebDocument(web::Document);

impl WebDocument {
    pub fn new(document: web::Document) -> Self {
        Self(document)
    }

    pub fn current() -> Option<Self> {
        window_document().map(Self::new)
    }
}

impl ElementLookup for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(|el| WebElement {
            id: id.to_owned(),
            el,
        })
    }
}

pub struct WebElement {
    id: String,
    el: web::Element,
}

impl WebElement {
    // HTML, SVG and MathML elements all expose `style`; anything else has none.
    fn style(&self) -> Result<web::CssStyleDeclaration, ToggleError> {
        if let Some(html) = self.el.dyn_ref::<web::HtmlElement>() {
            return Ok(html.style());
        }
        js_sys::Reflect::get(&self.el, &JsValue::from_str("style"))
            .ok()
            .and_then(|style| style.dyn_into::<web::CssStyleDeclaration>().ok())
            .ok_or_else(|| ToggleError::NotStyleable(self.id.clone()))
    }
}

impl StyledElement for WebElement {
    fn display(&self) -> Result<String, ToggleError> {
        self.style()?
            .get_property_value(DISPLAY_PROPERTY)
            .map_err(|e| ToggleError::Style(format!("{:?}", e)))
    }

    fn set_display(&self, value: &str) -> Result<(), ToggleError> {
        self.style()?
            .set_property(DISPLAY_PROPERTY, value)
            .map_err(|e| ToggleError::Style(format!("{:?}", e)))
    }
}
