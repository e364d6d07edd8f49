//! Attractor force fields for 2D rigid-body engines.
//!
//! Bodies declare zero or more attractors; once per simulation step, before
//! the host engine integrates motion, [`apply_attractors`] walks every body
//! pair and applies the forces those attractors produce.
//!
//! Main components:
//! - [`attractor`] — attractor entries and the pass error type.
//! - [`registry`] — the per-body attractor collection and its creation hook.
//! - [`body`] — the trait a host engine's body type implements.
//! - [`pass`] — the per-step force application pass.
//! - [`plugin`] — lifecycle hooks for splicing the layer into a host.
//! - [`gravity`] — ready-made gravity attractors.

pub mod attractor;
pub mod body;
pub mod gravity;
pub mod pass;
pub mod plugin;
pub mod registry;

pub use attractor::{Attractor, AttractorError, AttractorFn};
pub use body::AttractorBody;
pub use pass::apply_attractors;
pub use plugin::{install, EngineHooks};
pub use registry::{init_body, AttractorRegistry};
