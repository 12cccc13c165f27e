//! Element lookup seam and the visibility toggle itself.
//!
//! Hosts (the browser document, [`crate::MemoryDocument`]) implement
//! [`ElementLookup`]; the functions here never touch a platform API directly.

use crate::display::{DisplayValue, Visibility};
use crate::error::ToggleError;

/// An element whose inline `display` style can be read and written.
pub trait StyledElement {
    fn display(&self) -> Result<String, ToggleError>;
    fn set_display(&self, value: &str) -> Result<(), ToggleError>;
}

/// Resolves element identifiers. Absence is `None`, never a panic.
pub trait ElementLookup {
    type Element: StyledElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

fn resolve<D: ElementLookup>(doc: &D, id: &str) -> Result<D::Element, ToggleError> {
    doc.element_by_id(id)
        .ok_or_else(|| ToggleError::NotFound(id.to_owned()))
}

/// Flip the element's display between `block` and `none`.
///
/// Returns the visibility after the write. An unknown `id` yields
/// [`ToggleError::NotFound`] and writes nothing.
pub fn toggle_visibility<D: ElementLookup>(doc: &D, id: &str) -> Result<Visibility, ToggleError> {
    let el = resolve(doc, id)?;
    let current = DisplayValue::parse(&el.display()?);
    let next = current.toggled();
    el.set_display(next.as_css())?;
    log::debug!(
        "[toggle] #{} display {:?} -> {:?}",
        id,
        current.as_css(),
        next.as_css()
    );
    Ok(next.visibility())
}

pub fn visibility_of<D: ElementLookup>(doc: &D, id: &str) -> Result<Visibility, ToggleError> {
    let el = resolve(doc, id)?;
    Ok(DisplayValue::parse(&el.display()?).visibility())
}

/// Show or hide regardless of the current value.
pub fn set_visibility<D: ElementLookup>(
    doc: &D,
    id: &str,
    visibility: Visibility,
) -> Result<(), ToggleError> {
    let el = resolve(doc, id)?;
    el.set_display(visibility.display().as_css())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDocument;

    #[test]
    fn toggle_reports_resulting_visibility() {
        let doc = MemoryDocument::new();
        doc.insert("panel", "block");
        assert_eq!(toggle_visibility(&doc, "panel"), Ok(Visibility::Hidden));
        assert_eq!(toggle_visibility(&doc, "panel"), Ok(Visibility::Shown));
    }

    #[test]
    fn missing_element_is_not_found() {
        let doc = MemoryDocument::new();
        let err = toggle_visibility(&doc, "ghost").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no element with id `ghost`");
    }

    #[test]
    fn set_visibility_ignores_current_value() {
        let doc = MemoryDocument::new();
        doc.insert("panel", "flex");
        set_visibility(&doc, "panel", Visibility::Hidden).unwrap();
        assert_eq!(doc.display_of("panel").as_deref(), Some("none"));
        set_visibility(&doc, "panel", Visibility::Shown).unwrap();
        assert_eq!(doc.display_of("panel").as_deref(), Some("block"));
    }
}
