use crate::attractor::AttractorError;
use crate::body::AttractorBody;
use crate::pass::apply_attractors;
use crate::registry::init_body;

/// Plugin identifier, for hosts that key extension state by name.
pub const NAME: &str = "attractors";

/// Plugin version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension points a host engine must expose to carry this layer.
///
/// Any engine offering an "after body creation" and a "before update"
/// interception point satisfies this; [`install`] wires the layer's two
/// entry points into them.
pub trait EngineHooks {
    type Body: AttractorBody;

    /// Registers `hook` to run once per body, at or immediately after the
    /// moment the body joins the world, before any update observes it.
    fn after_body_create(&mut self, hook: fn(&mut Self::Body));

    /// Registers `hook` to run once per step, strictly before the step's
    /// integration phase consumes accumulated forces. An `Err` from the
    /// hook fails the step.
    fn before_update(&mut self, hook: fn(&mut [Self::Body]) -> Result<(), AttractorError>);
}

/// Splices the attractor layer into `engine`'s lifecycle: registry
/// initialization after every body creation, the force application pass
/// before every update.
pub fn install<E: EngineHooks>(engine: &mut E) {
    engine.after_body_create(init_body::<E::Body>);
    engine.before_update(apply_attractors::<E::Body>);
}
