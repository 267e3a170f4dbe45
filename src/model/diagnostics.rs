use nalgebra::Vector3;

use crate::math::Vec3;

use super::system::NBodySystem;

// Quantities that the integrator should (approximately) conserve. Nothing here
// is used by `advance` itself; they're for checking up on it.
impl NBodySystem {
    pub fn total_mass(&self) -> f64 {
        self.bodies().iter().map(|b| b.mass).sum()
    }

    pub fn momentum(&self) -> Vec3 {
        let mut p = Vec3::ZERO;
        for body in self.bodies().iter() {
            p.accumulate(body.momentum());
        }
        p
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies().iter().map(|b| b.kinetic_energy()).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        let bodies = self.bodies();
        let mut e = 0.0;
        for (i, body) in bodies.iter().enumerate() {
            for other in bodies[i + 1..].iter() {
                let d = body.position.sub(other.position);
                e -= (body.mass * other.mass) / d.norm();
            }
        }
        e
    }

    /// L = sum of m (r x v), about the origin.
    pub fn angular_momentum(&self) -> Vector3<f64> {
        self.bodies()
            .iter()
            .map(|b| {
                let r: Vector3<f64> = b.position.into();
                let v: Vector3<f64> = b.velocity.into();
                b.mass * r.cross(&v)
            })
            .sum()
    }

    pub fn center_of_mass(&self) -> Vector3<f64> {
        let weighted: Vector3<f64> = self
            .bodies()
            .iter()
            .map(|b| b.mass * Vector3::from(b.position))
            .sum();
        weighted / self.total_mass()
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_energy_split() {
        let mut system = NBodySystem::new();
        for _ in 0..3 {
            let sum = system.kinetic_energy() + system.potential_energy();
            assert_relative_eq!(sum, system.energy(), max_relative = 1e-14);
            assert!(system.kinetic_energy() > 0.0);
            assert!(system.potential_energy() < 0.0);
            system.advance_many(100, 0.01);
        }
    }

    #[test]
    fn test_momentum_stays_zero() {
        let mut system = NBodySystem::new();
        assert_abs_diff_eq!(system.momentum(), Vec3::ZERO, epsilon = 1e-15);

        // Every pairwise kick is equal and opposite, so this only picks up rounding
        system.advance_many(1000, 0.01);
        assert_abs_diff_eq!(system.momentum(), Vec3::ZERO, epsilon = 1e-13);
    }

    #[test]
    fn test_angular_momentum_conserved() {
        let mut system = NBodySystem::new();
        let initial = system.angular_momentum();
        assert!(initial.norm() > 0.0);

        system.advance_many(1000, 0.01);
        assert_relative_eq!(
            system.angular_momentum(),
            initial,
            epsilon = 1e-12,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_center_of_mass_fixed() {
        let mut system = NBodySystem::new();
        let initial = system.center_of_mass();

        system.advance_many(1000, 0.01);
        assert_abs_diff_eq!(system.center_of_mass(), initial, epsilon = 1e-12);
    }
}
