//! Library entity.

use super::{Presentation, PresentationId};
use crate::domain::errors::ModelError;
use crate::domain::ordering::OrderAssigner;
use crate::domain::seed;
use crate::domain::sort::{SortPolicy, SortedView};

/// The top-level collection of all presentations.
///
/// The library exclusively owns its presentations and the order
/// assigner that hands out their creation-order keys. Storage order is
/// insertion order; display order comes from [`Library::sorted_view`].
#[derive(Debug, Clone)]
pub struct Library {
    presentations: Vec<Presentation>,
    orders: OrderAssigner,
}

impl Library {
    /// Creates a library preloaded with the starter presentations,
    /// carrying creation orders 1 through 5.
    #[must_use]
    pub fn new() -> Self {
        let mut library = Self::empty();
        library.presentations = seed::seed_presentations(&mut library.orders);
        library
    }

    /// Creates a library with no presentations and a fresh counter.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            presentations: Vec::new(),
            orders: OrderAssigner::new(),
        }
    }

    /// Discards all presentations and reseeds the starter content.
    ///
    /// The order counter is reset first, so the reseeded presentations
    /// receive creation orders 1 through 5 again no matter how many
    /// entries existed before. Calling this repeatedly does not
    /// accumulate state.
    pub fn reset(&mut self) {
        self.orders.reset();
        self.presentations = seed::seed_presentations(&mut self.orders);
    }

    /// Appends a new presentation with an empty slide sequence and a
    /// fresh creation-order key, and returns it.
    ///
    /// The empty title is allowed.
    pub fn create_presentation(&mut self, title: impl Into<String>) -> &Presentation {
        let presentation = Presentation::new(title, self.orders.next());
        self.presentations.push(presentation);
        // just pushed, so the sequence is non-empty
        &self.presentations[self.presentations.len() - 1]
    }

    /// Removes and returns the presentation at `index` in storage
    /// order.
    ///
    /// # Errors
    /// Returns `ModelError::NotFound` if `index` is out of bounds; the
    /// library is left untouched in that case.
    pub fn remove_presentation(&mut self, index: usize) -> Result<Presentation, ModelError> {
        if index >= self.presentations.len() {
            return Err(ModelError::not_found(index, self.presentations.len()));
        }
        Ok(self.presentations.remove(index))
    }

    /// Removes and returns the presentation with the given id.
    ///
    /// # Errors
    /// Returns `ModelError::UnknownId` if no presentation with that id
    /// exists; the library is left untouched in that case.
    pub fn remove_presentation_by_id(
        &mut self,
        id: PresentationId,
    ) -> Result<Presentation, ModelError> {
        let position = self
            .presentations
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| ModelError::unknown_id(id.as_uuid()))?;
        Ok(self.presentations.remove(position))
    }

    /// Returns the presentations in storage order.
    #[must_use]
    pub fn presentations(&self) -> &[Presentation] {
        &self.presentations
    }

    /// Returns the presentation at `index` in storage order, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Presentation> {
        self.presentations.get(index)
    }

    /// Returns a mutable reference to the presentation at `index` in
    /// storage order, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Presentation> {
        self.presentations.get_mut(index)
    }

    /// Returns the presentation with the given id, if any.
    #[must_use]
    pub fn by_id(&self, id: PresentationId) -> Option<&Presentation> {
        self.presentations.iter().find(|p| p.id() == id)
    }

    /// Returns a mutable reference to the presentation with the given
    /// id, if any.
    pub fn by_id_mut(&mut self, id: PresentationId) -> Option<&mut Presentation> {
        self.presentations.iter_mut().find(|p| p.id() == id)
    }

    /// Returns the number of presentations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presentations.len()
    }

    /// Returns true if the library holds no presentations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presentations.is_empty()
    }

    /// Returns a non-mutating, re-iterable view of the presentations
    /// sorted under `policy`. Storage order is untouched.
    #[must_use]
    pub fn sorted_view(&self, policy: SortPolicy) -> SortedView<'_> {
        SortedView::new(&self.presentations, policy)
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
