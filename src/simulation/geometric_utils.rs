//! Small vector helpers for 2D positions and velocities.

use ndarray::Array1;
use rand::Rng;

/// Builds a 2D vector.
pub fn vec2(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

/// Returns the Euclidean length of a vector.
pub fn magnitude(v: &Array1<f32>) -> f32 {
    v.mapv(|x| x.powi(2)).sum().sqrt()
}

/// Draws a uniformly random position inside `[0, width) x [0, height)`.
pub fn random_position(rng: &mut impl Rng, width: f32, height: f32) -> Array1<f32> {
    vec2(rng.random_range(0.0..width), rng.random_range(0.0..height))
}

/// Draws a random direction with both components uniform in `[-1, 1)`.
///
/// The result is not normalized, so its length lies between 0 and sqrt(2).
pub fn random_direction(rng: &mut impl Rng) -> Array1<f32> {
    vec2(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
}

/// Wraps a position vector into `[0, box_width) x [0, box_height)` (toroidal topology).
///
/// # Arguments
///
/// * `v` - Mutable position vector to wrap
/// * `box_width` - Width of the simulation box
/// * `box_height` - Height of the simulation box
pub fn wrap_around_mut(v: &mut Array1<f32>, box_width: f32, box_height: f32) {
    v[0] = wrap(v[0], box_width);
    v[1] = wrap(v[1], box_height);
}

// rem_euclid of a tiny negative value rounds up to `extent` itself in f32.
fn wrap(x: f32, extent: f32) -> f32 {
    let wrapped = x.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}
