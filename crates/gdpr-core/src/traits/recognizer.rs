use crate::errors::GatewayResult;

/// A labeled span emitted by a named-entity recognizer, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Recognizer label, e.g. "PERSON", "ORG", "GPE", "LOC", "DATE".
    pub label: String,
    /// The surface text of the span.
    pub text: String,
}

impl EntitySpan {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Named-entity recognition capability.
///
/// Any backend that can tag spans with a label satisfies the pipeline;
/// the model/session behind it is loaded once and treated as read-only
/// during inference.
pub trait IEntityRecognizer: Send + Sync {
    /// Recognize entities in raw text, returned in order of appearance.
    fn recognize(&self, text: &str) -> GatewayResult<Vec<EntitySpan>>;

    /// Human-readable recognizer name.
    fn name(&self) -> &str;

    /// Whether this recognizer is currently usable.
    fn is_available(&self) -> bool;
}
