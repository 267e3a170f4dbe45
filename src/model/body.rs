use crate::consts::{BODY_COUNT, DAYS_PER_YEAR, SOLAR_MASS};
use crate::math::Vec3;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

impl BodyID {
    pub const SUN: BodyID = BodyID(0);
    pub const JUPITER: BodyID = BodyID(1);
    pub const SATURN: BodyID = BodyID(2);
    pub const URANUS: BodyID = BodyID(3);
    pub const NEPTUNE: BodyID = BodyID(4);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f64,
}

impl Body {
    /// Sets this body's velocity so that it cancels out the momentum `p` of
    /// the rest of the system. Only meaningful for the central body, whose
    /// mass is exactly `SOLAR_MASS`.
    pub fn offset_momentum(&mut self, p: Vec3) {
        self.velocity = p.scale(-1.0 / SOLAR_MASS);
    }

    pub fn momentum(&self) -> Vec3 {
        self.velocity.scale(self.mass)
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.sum_squares()
    }
}

// Initial conditions for the outer solar system. Velocities are tabulated in
// AU/day and converted to AU/year here.

pub const SUN: Body = Body {
    position: Vec3::ZERO,
    velocity: Vec3::ZERO,
    mass: SOLAR_MASS,
};

pub const JUPITER: Body = Body {
    position: Vec3::new(
        4.84143144246472090e+00,
        -1.16032004402742839e+00,
        -1.03622044471123109e-01,
    ),
    velocity: Vec3::new(
        1.66007664274403694e-03 * DAYS_PER_YEAR,
        7.69901118419740425e-03 * DAYS_PER_YEAR,
        -6.90460016972063023e-05 * DAYS_PER_YEAR,
    ),
    mass: 9.54791938424326609e-04 * SOLAR_MASS,
};

pub const SATURN: Body = Body {
    position: Vec3::new(
        8.34336671824457987e+00,
        4.12479856412430479e+00,
        -4.03523417114321381e-01,
    ),
    velocity: Vec3::new(
        -2.76742510726862411e-03 * DAYS_PER_YEAR,
        4.99852801234917238e-03 * DAYS_PER_YEAR,
        2.30417297573763929e-05 * DAYS_PER_YEAR,
    ),
    mass: 2.85885980666130812e-04 * SOLAR_MASS,
};

pub const URANUS: Body = Body {
    position: Vec3::new(
        1.28943695621391310e+01,
        -1.51111514016986312e+01,
        -2.23307578892655734e-01,
    ),
    velocity: Vec3::new(
        2.96460137564761618e-03 * DAYS_PER_YEAR,
        2.37847173959480950e-03 * DAYS_PER_YEAR,
        -2.96589568540237556e-05 * DAYS_PER_YEAR,
    ),
    mass: 4.36624404335156298e-05 * SOLAR_MASS,
};

pub const NEPTUNE: Body = Body {
    position: Vec3::new(
        1.53796971148509165e+01,
        -2.59193146099879641e+01,
        1.79258772950371181e-01,
    ),
    velocity: Vec3::new(
        2.68067772490389322e-03 * DAYS_PER_YEAR,
        1.62824170038242295e-03 * DAYS_PER_YEAR,
        -9.51592254519715870e-05 * DAYS_PER_YEAR,
    ),
    mass: 5.15138902046611451e-05 * SOLAR_MASS,
};

/// The bodies in the order the system stores them. Index with `BodyID`.
pub const CANONICAL_BODIES: [Body; BODY_COUNT] = [SUN, JUPITER, SATURN, URANUS, NEPTUNE];

pub fn body_name(id: BodyID) -> &'static str {
    match id.0 {
        0 => "Sun",
        1 => "Jupiter",
        2 => "Saturn",
        3 => "Uranus",
        4 => "Neptune",
        _ => "<unknown>",
    }
}
