//! Three known sides: triangle inequality and Law-of-Cosines angle completion.

use super::SolveError;
use super::slots::other_indices;

/// Strict triangle inequality: every pair of sides must sum to more than the
/// third.
pub(crate) fn check_inequality(sides: [f64; 3]) -> Result<(), SolveError> {
    let [a, b, c] = sides;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(SolveError::TriangleInequalityViolated { sides });
    }
    Ok(())
}

/// A power-of-two scale near the longest side, and the sides divided by it.
///
/// Law-of-Cosines and Heron terms square the sides; on the unit scale they
/// neither overflow nor underflow for any finite positive input. Dividing by
/// a power of two is exact, so ordinary inputs give bit-identical results.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn normalized(sides: [f64; 3]) -> (f64, [f64; 3]) {
    let longest = sides.iter().copied().fold(0.0, f64::max);
    let scale = 2.0_f64.powi(longest.log2().floor() as i32);
    (scale, sides.map(|side| side / scale))
}

/// Interior angles for three sides that close a triangle.
///
/// Angle `i` is opposite side `i` and depends only on the three side values,
/// never on another computed angle.
pub(crate) fn complete_angles(sides: [f64; 3]) -> [f64; 3] {
    let (_, unit) = normalized(sides);
    std::array::from_fn(|index| {
        let [j, k] = other_indices(index);
        let (a, b, c) = (unit[index], unit[j], unit[k]);
        // Rounding can push a near-flat triangle slightly outside [-1, 1].
        let cosine = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
        cosine.acos()
    })
}
