use crate::{vector::Vector, Result, INFINITE_SMALL};
use std::f64::consts::PI;

pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.check_same_dimension(v2)?;
    let u1 = v1.normalized()?;
    let u2 = v2.normalized()?;
    u1.dot(&u2)
}

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(v1.minus(v2)?.magnitude())
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

pub fn scalar_approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < INFINITE_SMALL
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| Vector::new((0..dim).map(|_| rng.gen_range(-1.0..1.0))))
        .collect()
}
