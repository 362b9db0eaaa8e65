//! Two known sides and one known angle.
//!
//! SAS (the angle sits between the two sides) has one answer and reduces
//! straight to three sides. SSA (the angle is opposite one of the sides) may
//! have none, one or two.

use std::f64::consts::{FRAC_PI_2, PI};

use super::slots::{SlotLabels, other_indices, remaining_index};
use super::spec::Given;
use super::sss::{check_inequality, normalized};
use super::tolerance::Tolerance;
use super::{Case, SolveError};

/// Third side from two sides and their included angle (Law of Cosines).
pub(crate) fn sas_sides(given: &Given) -> Result<[f64; 3], SolveError> {
    let &[(angle_index, included)] = given.angles.as_slice() else {
        return Err(mismatch(Case::Sas, given));
    };
    let [i, j] = other_indices(angle_index);
    let (Some(first), Some(second)) = (given.side(i), given.side(j)) else {
        return Err(mismatch(Case::Sas, given));
    };

    let (scale, [x, y, _]) = normalized([first, second, 0.0]);
    let third = scale * (x * x + y * y - 2.0 * x * y * included.cos()).max(0.0).sqrt();

    let mut sides = [0.0; 3];
    sides[i] = first;
    sides[j] = second;
    sides[angle_index] = third;
    // A sliver angle between equal sides can round the third side to zero.
    check_inequality(sides)?;
    Ok(sides)
}

/// The side triples an SSA specification admits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SsaSides {
    pub primary: [f64; 3],
    pub alternate: Option<[f64; 3]>,
}

/// Derives both SSA side triples.
///
/// With `alpha` the given angle, `a` its opposite side and `b` the other
/// given side, the height `h = b * sin(alpha)` decides the outcome:
///
/// - `a < h`: the side cannot reach, no triangle.
/// - `a == h` (acute `alpha`): one right triangle.
/// - `h < a < b` (acute `alpha`): two triangles, `beta` and `PI - beta`.
/// - `a == b`: one isoceles triangle for an acute `alpha`, none otherwise.
/// - `a > b`: one triangle.
///
/// The equalities are decided on the given sides with
/// [`Tolerance::DEFAULT`], never on recomputed angles.
pub(crate) fn ssa_sides(given: &Given, labels: &SlotLabels) -> Result<SsaSides, SolveError> {
    let &[(k, alpha)] = given.angles.as_slice() else {
        return Err(mismatch(Case::Ssa, given));
    };
    let Some(a) = given.side(k) else {
        return Err(mismatch(Case::Ssa, given));
    };
    let Some(&(m, b)) = given.sides.iter().find(|(index, _)| *index != k) else {
        return Err(mismatch(Case::Ssa, given));
    };
    let n = remaining_index(k, m);
    let no_angle = |index: usize| SolveError::NoAngleSolution {
        label: labels.angles()[index].clone(),
    };

    let tol = Tolerance::DEFAULT;
    let sin_alpha = alpha.sin();
    let height = b * sin_alpha;
    let acute = alpha < FRAC_PI_2;
    // Equal sides near a right angle also sit on the height; they are isoceles.
    let isoceles = tol.approx_eq_f64(a, b);
    let tangent = acute && !isoceles && tol.approx_eq_f64(a, height);

    if a < height && !tangent && !isoceles {
        return Err(no_angle(m));
    }
    if !acute && (a < b || isoceles) {
        return Err(no_angle(n));
    }

    let beta = if tangent {
        FRAC_PI_2
    } else if isoceles {
        alpha
    } else {
        (height / a).asin()
    };

    let gamma = PI - (alpha + beta);
    if gamma <= 0.0 {
        return Err(no_angle(n));
    }

    let assemble = |gamma: f64| {
        let mut sides = [0.0; 3];
        sides[k] = a;
        sides[m] = b;
        sides[n] = gamma.sin() * a / sin_alpha;
        sides
    };

    let primary = assemble(gamma);
    check_inequality(primary).map_err(|_| no_angle(n))?;

    let alternate = if acute && !tangent && !isoceles && a < b {
        let gamma = beta - alpha;
        (gamma > 0.0)
            .then(|| assemble(gamma))
            .filter(|sides| check_inequality(*sides).is_ok())
    } else {
        None
    };

    log::trace!(
        "ssa: alpha={alpha} a={a} b={b} beta={beta} primary={primary:?} alternate={alternate:?}"
    );

    Ok(SsaSides { primary, alternate })
}

fn mismatch(expected: Case, given: &Given) -> SolveError {
    SolveError::InvalidCase {
        expected,
        found: super::classify::classify(given),
    }
}
