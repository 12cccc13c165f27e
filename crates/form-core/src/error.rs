use thiserror::Error;

/// Failures a visibility toggle can run into.
///
/// `NotFound` is the only one a well-formed page produces; the others come
/// from the host refusing access to an element's inline style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("no element with id `{0}`")]
    NotFound(String),
    #[error("element `{0}` has no inline style")]
    NotStyleable(String),
    #[error("style access failed: {0}")]
    Style(String),
}

impl ToggleError {
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToggleError::NotFound(_))
    }
}
