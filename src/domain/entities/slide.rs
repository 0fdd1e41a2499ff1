//! Slide entity.

use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// Unique identifier for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(Uuid);

impl SlideId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single title-plus-content text unit within a presentation.
///
/// Slides compare and hash by identity only; editing the title or the
/// content does not change which slide it is.
#[derive(Debug, Clone)]
pub struct Slide {
    id: SlideId,
    title: String,
    content: String,
}

impl Slide {
    /// Creates a new slide with the given title and content.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: SlideId::generate(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the slide id.
    #[must_use]
    pub fn id(&self) -> SlideId {
        self.id
    }

    /// Returns the slide title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the slide content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the slide title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the slide content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new("Untitled", "")
    }
}

impl PartialEq for Slide {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Slide {}

impl Hash for Slide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slide() {
        let slide = Slide::default();
        assert_eq!(slide.title(), "Untitled");
        assert_eq!(slide.content(), "");
    }

    #[test]
    fn test_equality_is_by_identity() {
        let a = Slide::new("Same", "Same");
        let b = Slide::new("Same", "Same");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_edits_do_not_change_identity() {
        let mut slide = Slide::new("Before", "Before");
        let snapshot = slide.clone();

        slide.set_title("After");
        slide.set_content("After");

        assert_eq!(slide, snapshot);
        assert_eq!(slide.title(), "After");
        assert_eq!(slide.content(), "After");
    }
}
