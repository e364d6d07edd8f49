use crate::attractor::Attractor;
use crate::body::AttractorBody;

/// The ordered collection of attractors owned by one body.
///
/// Created empty by [`init_body`] when the body joins the world; application
/// code appends and removes entries directly between simulation steps. Entry
/// order is insertion order. Every entry is applied independently, so order
/// never changes the accumulated result, but iteration is stable.
#[derive(Debug)]
pub struct AttractorRegistry<B> {
    entries: Vec<Attractor<B>>,
}

impl<B> AttractorRegistry<B> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an attractor to the end of the registry.
    pub fn push(&mut self, attractor: Attractor<B>) {
        self.entries.push(attractor);
    }

    /// Removes and returns the attractor at `index`.
    ///
    /// ### Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Attractor<B> {
        self.entries.remove(index)
    }

    /// Number of registered attractors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no attractors are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attractors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attractor<B>> {
        self.entries.iter()
    }
}

impl<B> Default for AttractorRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B> IntoIterator for &'a AttractorRegistry<B> {
    type Item = &'a Attractor<B>;
    type IntoIter = std::slice::Iter<'a, Attractor<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ensures `body`'s extension slot holds an attractor registry.
///
/// Idempotent: a registry that is already present is left untouched, entries
/// included, so the host may call this on every body-creation event without
/// losing state. Never fails.
pub fn init_body<B: AttractorBody>(body: &mut B) {
    let slot = body.attractors_mut();
    if slot.is_none() {
        *slot = Some(AttractorRegistry::new());
    }
}
