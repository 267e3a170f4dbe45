use crate::consts::{BODY_COUNT, PAIR_COUNT};
use crate::math::gravity::magnitude;
use crate::math::Vec3;

use super::body::{Body, BodyID, CANONICAL_BODIES};

/// Every unordered pair (i, j) with i < j, in lexicographic order. The
/// integration step walks this table, so its order is part of the numerics.
pub const PAIRS: [(usize, usize); PAIR_COUNT] = build_pairs();

const fn build_pairs() -> [(usize, usize); PAIR_COUNT] {
    let mut pairs = [(0, 0); PAIR_COUNT];
    let mut k = 0;
    let mut i = 0;
    while i < BODY_COUNT {
        let mut j = i + 1;
        while j < BODY_COUNT {
            pairs[k] = (i, j);
            k += 1;
            j += 1;
        }
        i += 1;
    }
    pairs
}

#[derive(Debug, Clone)]
pub struct NBodySystem {
    // Invariants:
    //   - always exactly the five canonical bodies, in canonical order
    //   - masses never change
    bodies: [Body; BODY_COUNT],
}

impl NBodySystem {
    /// Builds the outer solar system, with the sun's velocity chosen so that
    /// the total momentum is zero.
    pub fn new() -> Self {
        let mut bodies = CANONICAL_BODIES;

        let mut p = Vec3::ZERO;
        for body in bodies.iter() {
            p.accumulate(body.velocity.scale(body.mass));
        }
        bodies[BodyID::SUN.0].offset_momentum(p);

        NBodySystem { bodies }
    }

    pub fn bodies(&self) -> &[Body; BODY_COUNT] {
        &self.bodies
    }

    pub fn body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    /// Advances the system by one step of length `dt`.
    ///
    /// All the pairwise forces are computed from the positions at the start of
    /// the step. Then every velocity is updated, and only after that are the
    /// positions moved along the new velocities.
    pub fn advance(&mut self, dt: f64) {
        let bodies = &mut self.bodies;

        let mut d_positions = [Vec3::ZERO; PAIR_COUNT];
        for (d, &(i, j)) in d_positions.iter_mut().zip(PAIRS.iter()) {
            *d = bodies[i].position.sub(bodies[j].position);
        }

        let mut magnitudes = [0.0; PAIR_COUNT];
        for (mag, &d) in magnitudes.iter_mut().zip(d_positions.iter()) {
            *mag = magnitude(d, dt);
        }

        for (k, &(i, j)) in PAIRS.iter().enumerate() {
            let d_pos = d_positions[k];
            let mag = magnitudes[k];
            let (mass_i, mass_j) = (bodies[i].mass, bodies[j].mass);
            bodies[i].velocity.decrement(d_pos.scale(mass_j * mag));
            bodies[j].velocity.accumulate(d_pos.scale(mass_i * mag));
        }

        for body in bodies.iter_mut() {
            body.position.accumulate(body.velocity.scale(dt));
        }
    }

    pub fn advance_many(&mut self, steps: u64, dt: f64) {
        for _ in 0..steps {
            self.advance(dt);
        }
    }

    /// Total energy: kinetic, minus the magnitude of the gravitational
    /// potential energy.
    pub fn energy(&self) -> f64 {
        let mut e = 0.0;

        for (i, body) in self.bodies.iter().enumerate() {
            e += body.kinetic_energy();

            for other in self.bodies[i + 1..].iter() {
                let d = body.position.sub(other.position);
                e -= (body.mass * other.mass) / d.norm();
            }
        }
        e
    }
}

impl Default for NBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
