//! Console demo: a central mass and a handful of satellites under the
//! built-in Newtonian attractor, integrated by a minimal host world.

use attractors::{
    gravity, install, AttractorBody, AttractorError, AttractorRegistry, EngineHooks,
};
use glam::Vec2;
use rand::Rng;

const CENTRAL_MASS: f32 = 1000.0;
const SATELLITES: usize = 6;
const DT: f32 = 0.5;
const STEPS: u32 = 2000;

/// Point mass with a force accumulator and the attractor extension slot.
struct Particle {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    force_accumulator: Vec2,
    attractors: Option<AttractorRegistry<Particle>>,
}

impl Particle {
    fn new(position: Vec2, velocity: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
            force_accumulator: Vec2::ZERO,
            attractors: None,
        }
    }
}

impl AttractorBody for Particle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn apply_force(&mut self, _point: Vec2, force: Vec2) {
        self.force_accumulator += force;
    }

    fn attractors(&self) -> Option<&AttractorRegistry<Particle>> {
        self.attractors.as_ref()
    }

    fn attractors_mut(&mut self) -> &mut Option<AttractorRegistry<Particle>> {
        &mut self.attractors
    }
}

/// Minimal host engine: a body list plus the two extension points the
/// attractor layer installs into.
struct World {
    bodies: Vec<Particle>,
    body_create_hooks: Vec<fn(&mut Particle)>,
    update_hooks: Vec<fn(&mut [Particle]) -> Result<(), AttractorError>>,
}

impl World {
    fn new() -> Self {
        Self {
            bodies: Vec::new(),
            body_create_hooks: Vec::new(),
            update_hooks: Vec::new(),
        }
    }

    fn add_body(&mut self, mut body: Particle) {
        for hook in &self.body_create_hooks {
            hook(&mut body);
        }
        self.bodies.push(body);
    }

    /// One simulation step: force pass, then semi-implicit Euler.
    fn step(&mut self, dt: f32) -> Result<(), AttractorError> {
        for hook in &self.update_hooks {
            hook(&mut self.bodies)?;
        }

        for body in &mut self.bodies {
            let acceleration = body.force_accumulator / body.mass;
            body.velocity += acceleration * dt;
            body.position += body.velocity * dt;
            body.force_accumulator = Vec2::ZERO;
        }
        Ok(())
    }
}

impl EngineHooks for World {
    type Body = Particle;

    fn after_body_create(&mut self, hook: fn(&mut Particle)) {
        self.body_create_hooks.push(hook);
    }

    fn before_update(&mut self, hook: fn(&mut [Particle]) -> Result<(), AttractorError>) {
        self.update_hooks.push(hook);
    }
}

fn main() -> Result<(), AttractorError> {
    let mut world = World::new();
    install(&mut world);

    world.add_body(Particle::new(Vec2::ZERO, Vec2::ZERO, CENTRAL_MASS));
    world.bodies[0]
        .attractors_mut()
        .as_mut()
        .expect("creation hook initializes the registry")
        .push(gravity::newtonian());

    // Satellites on a ring, with tangential velocity for a near-circular
    // orbit: v = sqrt(g * M / r).
    let mut rng = rand::rng();
    for _ in 0..SATELLITES {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let radius = rng.random_range(80.0..160.0);
        let position = Vec2::new(angle.cos(), angle.sin()) * radius;
        let tangent = Vec2::new(-angle.sin(), angle.cos());
        let speed = (gravity::GRAVITY_CONSTANT * CENTRAL_MASS / radius).sqrt();
        world.add_body(Particle::new(position, tangent * speed, 1.0));
    }

    for step in 0..STEPS {
        world.step(DT)?;

        if step % 200 == 0 {
            println!("step {step:4}");
            for (index, body) in world.bodies.iter().enumerate() {
                println!(
                    "  body {index}: position ({:8.2}, {:8.2})  speed {:6.3}",
                    body.position.x,
                    body.position.y,
                    body.velocity.length()
                );
            }
        }
    }
    Ok(())
}
