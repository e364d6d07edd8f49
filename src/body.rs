use glam::Vec2;

use crate::registry::AttractorRegistry;

/// Engine-side view of a simulated body.
///
/// The host engine owns all body state; this layer only needs the position,
/// the mass, the engine's force-application primitive, and the per-body
/// extension slot where the attractor registry lives. The slot starts as
/// `None` and is filled by [`init_body`](crate::init_body); the pass treats
/// a missing registry the same as an empty one.
pub trait AttractorBody: Sized {
    /// Current world position.
    fn position(&self) -> Vec2;

    /// Body mass. Used by the built-in gravity attractors.
    fn mass(&self) -> f32;

    /// Accumulates `force` on this body, applied at world-space `point`,
    /// for the engine's integrator to consume at the end of the step.
    fn apply_force(&mut self, point: Vec2, force: Vec2);

    /// The extension slot holding this body's registry, if initialized.
    fn attractors(&self) -> Option<&AttractorRegistry<Self>>;

    /// Mutable access to the extension slot.
    fn attractors_mut(&mut self) -> &mut Option<AttractorRegistry<Self>>;
}
