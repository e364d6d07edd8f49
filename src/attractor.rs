use std::error::Error;
use std::fmt;

use glam::Vec2;

/// Force computation evaluated once per body pair.
///
/// Called with the attracting body first and the target body second. It
/// either returns a force for the pass to apply to the target, returns
/// `Ok(None)` after applying forces itself (to either or both bodies), or
/// returns `Err` to fault the pass.
pub type AttractorFn<B> = Box<dyn Fn(&mut B, &mut B) -> Result<Option<Vec2>, AttractorError>>;

/// A single force-generating behavior attached to a body.
pub enum Attractor<B> {
    /// A fixed force vector, applied as-is to every later body.
    Constant(Vec2),
    /// A per-pair computation, optionally self-applying.
    Function(AttractorFn<B>),
}

impl<B> Attractor<B> {
    /// Wraps a closure in the function variant.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut B, &mut B) -> Result<Option<Vec2>, AttractorError> + 'static,
    {
        Attractor::Function(Box::new(f))
    }
}

impl<B> fmt::Debug for Attractor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attractor::Constant(force) => f.debug_tuple("Constant").field(force).finish(),
            Attractor::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Faults surfaced by the force application pass.
///
/// All evaluation is in-memory and deterministic, so none of these are
/// retryable; the host fails the step and surfaces the error.
#[derive(Debug, Clone, PartialEq)]
pub enum AttractorError {
    /// A force function signalled a fault while evaluating a pair.
    Function(String),
    /// An attractor produced a force with a non-finite component.
    MalformedForce(Vec2),
}

impl fmt::Display for AttractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttractorError::Function(reason) => write!(f, "attractor function fault: {reason}"),
            AttractorError::MalformedForce(force) => write!(
                f,
                "attractor produced a non-finite force ({}, {})",
                force.x, force.y
            ),
        }
    }
}

impl Error for AttractorError {}
