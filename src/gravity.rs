use crate::attractor::Attractor;
use crate::body::AttractorBody;

/// Default gravitational constant for [`newtonian`].
pub const GRAVITY_CONSTANT: f32 = 0.001;

/// Squared-distance floor that keeps coincident bodies from producing an
/// infinite force.
const MIN_DISTANCE_SQ: f32 = 1.0e-4;

/// Minimum separation below which a [`field`] pull is suppressed; the
/// direction is degenerate at close range.
const FIELD_MIN_DISTANCE: f32 = 0.1;

/// How a [`field`] attractor's pull decays with distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falloff {
    Constant,
    Linear,
    InverseSquare,
}

impl Falloff {
    fn magnitude(self, strength: f32, distance: f32, target_mass: f32) -> f32 {
        match self {
            Falloff::Constant => strength * target_mass,
            Falloff::Linear => strength * target_mass / distance,
            Falloff::InverseSquare => strength * target_mass / (distance * distance),
        }
    }
}

/// Mutual Newtonian gravity with the default [`GRAVITY_CONSTANT`].
pub fn newtonian<B: AttractorBody>() -> Attractor<B> {
    newtonian_with(GRAVITY_CONSTANT)
}

/// Mutual Newtonian gravity with gravitational constant `g`.
///
/// Applies equal and opposite forces to both bodies itself and yields no
/// force for the pass to apply, so a single entry on either body of a pair
/// attracts both sides.
pub fn newtonian_with<B: AttractorBody>(g: f32) -> Attractor<B> {
    Attractor::from_fn(move |body_a: &mut B, body_b: &mut B| {
        let to_b = body_b.position() - body_a.position();
        let mut distance_sq = to_b.length_squared();
        if distance_sq == 0.0 {
            distance_sq = MIN_DISTANCE_SQ;
        }

        let normal = to_b / distance_sq.sqrt();
        let magnitude = -g * body_a.mass() * body_b.mass() / distance_sq;
        let force = normal * magnitude;

        body_a.apply_force(body_a.position(), -force);
        body_b.apply_force(body_b.position(), force);
        Ok(None)
    })
}

/// One-directional pull toward the attracting body.
///
/// Later bodies inside `radius` are pulled toward the source with the given
/// `falloff`; the source itself feels nothing. The force is returned for
/// the pass to apply.
pub fn field<B: AttractorBody>(strength: f32, radius: f32, falloff: Falloff) -> Attractor<B> {
    Attractor::from_fn(move |body_a: &mut B, body_b: &mut B| {
        let to_source = body_a.position() - body_b.position();
        let distance = to_source.length();
        if distance >= radius || distance <= FIELD_MIN_DISTANCE {
            return Ok(None);
        }

        let direction = to_source / distance;
        let magnitude = falloff.magnitude(strength, distance, body_b.mass());
        Ok(Some(direction * magnitude))
    })
}
