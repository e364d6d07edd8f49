use crate::attractor::{Attractor, AttractorError};
use crate::body::AttractorBody;
use crate::registry::AttractorRegistry;

/// Evaluates every attractor across all body pairs and applies the resulting
/// forces. The host runs this once per step, before integrating motion.
///
/// `bodies` is the world snapshot in engine order. For each pair of distinct
/// bodies the earlier one acts as the source: its entries are evaluated in
/// registry order against the later body, and any produced force is applied
/// to the later body at that body's position. The reverse direction of the
/// same pair is never evaluated, so symmetric attraction is the job of force
/// functions that apply to both bodies themselves — see
/// [`gravity::newtonian`](crate::gravity::newtonian).
///
/// Bodies with a missing or empty registry are skipped as sources with no
/// observable effect. Evaluation is fully deterministic: sources in snapshot
/// order, targets in snapshot order within each source.
///
/// The first fault aborts the pass; forces applied before it stand.
pub fn apply_attractors<B: AttractorBody>(bodies: &mut [B]) -> Result<(), AttractorError> {
    for source in 0..bodies.len() {
        // Lift the source's registry out of its slot so force functions can
        // borrow the source body without aliasing the entries. Restored
        // before the pass returns, fault or not.
        let Some(registry) = bodies[source].attractors_mut().take() else {
            continue;
        };

        let result = if registry.is_empty() {
            Ok(())
        } else {
            attract_from(bodies, source, &registry)
        };

        *bodies[source].attractors_mut() = Some(registry);
        result?;
    }
    Ok(())
}

/// Applies `registry`'s entries from `bodies[source]` to every later body.
fn attract_from<B: AttractorBody>(
    bodies: &mut [B],
    source: usize,
    registry: &AttractorRegistry<B>,
) -> Result<(), AttractorError> {
    for target in (source + 1)..bodies.len() {
        let (head, tail) = bodies.split_at_mut(target);
        let body_a = &mut head[source];
        let body_b = &mut tail[0];

        for entry in registry {
            let force = match entry {
                Attractor::Constant(force) => Some(*force),
                Attractor::Function(f) => f(body_a, body_b)?,
            };

            if let Some(force) = force {
                if !force.is_finite() {
                    return Err(AttractorError::MalformedForce(force));
                }
                body_b.apply_force(body_b.position(), force);
            }
        }
    }
    Ok(())
}
