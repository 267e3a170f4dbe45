use super::vector::Vec3;

/// Returns dt / |d|^3.
///
/// Multiplied by the other body's mass and by `d` itself, this is the velocity
/// change one body of a pair picks up from the other over a step of length `dt`.
/// Computing it once per pair means the division and square root are shared
/// between both members.
pub fn magnitude(d: Vec3, dt: f64) -> f64 {
    let sum = d.sum_squares();
    dt / (sum * sum.sqrt())
}
