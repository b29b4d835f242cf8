//! Entity span type.

use serde::{Deserialize, Serialize};

use crate::annotation::label::EntityLabel;

/// A labeled region of a document's source text.
///
/// Offsets are byte offsets into the owning document's text. Spans are
/// produced either by an upstream recognizer or by the whole-text fallback
/// in the entity filter.
///
/// # Examples
///
/// ```
/// use taxon::annotation::{EntityLabel, EntitySpan};
///
/// let text = "Harvard University";
/// let span = EntitySpan::over(text, 0, text.len(), EntityLabel::Org).unwrap();
/// assert_eq!(span.text(text), "Harvard University");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// The byte offset where this span starts
    pub start: usize,
    /// The byte offset where this span ends (exclusive)
    pub end: usize,
    /// The entity label attached to this span
    pub label: EntityLabel,
}

impl EntitySpan {
    /// Create a span over `text` covering `start..end`.
    ///
    /// Returns `None` when the range is empty, inverted, out of bounds, or
    /// not aligned to character boundaries. Malformed bounds degrade to
    /// "no entity" rather than failing.
    pub fn over(text: &str, start: usize, end: usize, label: EntityLabel) -> Option<Self> {
        if start >= end || end > text.len() {
            return None;
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return None;
        }

        Some(EntitySpan { start, end, label })
    }

    /// Resolve this span against its source text.
    ///
    /// Returns an empty string when the span does not address a valid
    /// range of `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// Get the byte length of this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_over_full_text() {
        let text = "Marie Curie";
        let span = EntitySpan::over(text, 0, text.len(), EntityLabel::Person).unwrap();

        assert_eq!(span.start, 0);
        assert_eq!(span.end, 11);
        assert_eq!(span.text(text), "Marie Curie");
        assert_eq!(span.len(), 11);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_over_rejects_bad_bounds() {
        let text = "hello";

        assert!(EntitySpan::over(text, 0, 0, EntityLabel::Org).is_none());
        assert!(EntitySpan::over(text, 3, 2, EntityLabel::Org).is_none());
        assert!(EntitySpan::over(text, 0, 6, EntityLabel::Org).is_none());
        assert!(EntitySpan::over("", 0, 0, EntityLabel::Org).is_none());
    }

    #[test]
    fn test_span_over_rejects_split_char_boundary() {
        // 'é' occupies two bytes; offset 1 lands inside it
        let text = "école";
        assert!(EntitySpan::over(text, 1, 3, EntityLabel::Org).is_none());
        assert!(EntitySpan::over(text, 0, text.len(), EntityLabel::Org).is_some());
    }

    #[test]
    fn test_span_text_degrades_on_foreign_source() {
        let span = EntitySpan {
            start: 0,
            end: 10,
            label: EntityLabel::Org,
        };

        assert_eq!(span.text("short"), "");
    }
}
