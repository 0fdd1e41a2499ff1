//! Presentation entity.

use std::hash::{Hash, Hasher};

use uuid::Uuid;

use super::Slide;
use crate::domain::errors::ModelError;

/// Unique identifier for a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentationId(Uuid);

impl PresentationId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PresentationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of slides.
///
/// The creation order is assigned once by the owning library and never
/// changes afterwards. Presentations compare and hash by identity only.
#[derive(Debug, Clone)]
pub struct Presentation {
    id: PresentationId,
    title: String,
    creation_order: u64,
    slides: Vec<Slide>,
}

impl Presentation {
    /// Creates a presentation with an empty slide sequence.
    #[must_use]
    pub fn new(title: impl Into<String>, creation_order: u64) -> Self {
        Self {
            id: PresentationId::generate(),
            title: title.into(),
            creation_order,
            slides: Vec::new(),
        }
    }

    /// Returns the presentation id.
    #[must_use]
    pub fn id(&self) -> PresentationId {
        self.id
    }

    /// Returns the presentation title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation-order key assigned by the owning library.
    #[must_use]
    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }

    /// Returns the slides in presentation order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns the slide at `index`, if any.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Returns a mutable reference to the slide at `index`, if any.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Replaces the title unconditionally. The empty string is allowed.
    pub fn rename(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }

    /// Appends a new slide and returns it.
    pub fn add_slide(&mut self, title: impl Into<String>, content: impl Into<String>) -> &Slide {
        self.slides.push(Slide::new(title, content));
        // just pushed, so the sequence is non-empty
        &self.slides[self.slides.len() - 1]
    }

    /// Removes and returns the slide at `index`.
    ///
    /// # Errors
    /// Returns `ModelError::NotFound` if `index` is out of bounds; the
    /// slide sequence is left untouched in that case.
    pub fn remove_slide(&mut self, index: usize) -> Result<Slide, ModelError> {
        if index >= self.slides.len() {
            return Err(ModelError::not_found(index, self.slides.len()));
        }
        Ok(self.slides.remove(index))
    }

    /// Moves the slide at `from` so that it ends up at index `to`.
    ///
    /// Moving a slide onto its own index is a no-op success.
    ///
    /// # Errors
    /// Returns `ModelError::NotFound` if `from` is out of bounds and
    /// `ModelError::InvalidIndex` if `to` is; the slide sequence is
    /// left untouched on failure.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<(), ModelError> {
        let len = self.slides.len();
        if from >= len {
            return Err(ModelError::not_found(from, len));
        }
        if to >= len {
            return Err(ModelError::invalid_index(to, len));
        }
        if from != to {
            let slide = self.slides.remove(from);
            self.slides.insert(to, slide);
        }
        Ok(())
    }
}

impl PartialEq for Presentation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Presentation {}

impl Hash for Presentation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
