//! Two known angles and one known side.
//!
//! Whether the side lies between the two angles (ASA) or not (AAS) makes no
//! difference: the third angle is whatever is left of PI, and the known side
//! with its opposite angle fixes the Law-of-Sines ratio for the other two.

use std::f64::consts::PI;

use super::slots::{SlotLabels, remaining_index};
use super::spec::Given;
use super::{Case, SolveError};

/// All three sides and all three angles.
pub(crate) fn aas_asa_parts(
    given: &Given,
    labels: &SlotLabels,
) -> Result<([f64; 3], [f64; 3]), SolveError> {
    let (&[(p, first), (q, second)], &[(side_index, side)]) =
        (given.angles.as_slice(), given.sides.as_slice())
    else {
        return Err(SolveError::InvalidCase {
            expected: Case::AasAsa,
            found: super::classify::classify(given),
        });
    };
    let missing = remaining_index(p, q);

    let third = PI - (first + second);
    if third <= 0.0 {
        return Err(SolveError::NoAngleSolution {
            label: labels.angles()[missing].clone(),
        });
    }

    let mut angles = [0.0; 3];
    angles[p] = first;
    angles[q] = second;
    angles[missing] = third;

    let ratio = side / angles[side_index].sin();
    let sides = std::array::from_fn(|index| {
        if index == side_index {
            side
        } else {
            angles[index].sin() * ratio
        }
    });

    Ok((sides, angles))
}
