//! Derived measurements and shape predicates on a solved [`Triangle`].
//!
//! Every equality-like test goes through a [`Closeness`] comparator. The
//! plain methods use [`Tolerance::DEFAULT`]; the `_with` variants take any
//! comparator, a [`Tolerance`] or a closure.
//!
//! The acute/obtuse/pythagorean split is three-way: a triangle within
//! tolerance of a right angle is pythagorean and neither acute nor obtuse.
//! For filtering SSA candidates near a right angle, [`Triangle::is_not_acute`]
//! and [`Triangle::is_not_obtuse`] are usually the safer choice.

use std::f64::consts::FRAC_PI_2;

use super::slots::Slot;
use super::sss::normalized;
use super::tolerance::{Closeness, Tolerance};
use super::{SolveError, Triangle};

impl Triangle {
    /// Area by Heron's formula, evaluated on the unit scale and scaled back.
    ///
    /// Infinite or zero only when the true area is outside the `f64` range.
    #[must_use]
    pub fn area(&self) -> f64 {
        let (scale, unit) = normalized(self.sides());
        unit_area(unit) * scale * scale
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }

    /// Height of the triangle over the side named `base`.
    pub fn altitude(&self, base: &str) -> Result<f64, SolveError> {
        let slot = self.slot(base)?;
        if !slot.is_side() {
            return Err(SolveError::UnknownSlot(base.to_owned()));
        }
        let (scale, unit) = normalized(self.sides());
        Ok(scale * 2.0 * unit_area(unit) / unit[slot.index()])
    }

    #[must_use]
    pub fn is_equilateral(&self) -> bool {
        self.is_equilateral_with(&Tolerance::DEFAULT)
    }

    #[must_use]
    pub fn is_equilateral_with(&self, close: &impl Closeness) -> bool {
        let [a, b, c] = self.sides();
        close.is_close(a, b) && close.is_close(b, c) && close.is_close(a, c)
    }

    /// True when any two sides match. Equilateral triangles count.
    #[must_use]
    pub fn is_isoceles(&self) -> bool {
        self.is_isoceles_with(&Tolerance::DEFAULT)
    }

    #[must_use]
    pub fn is_isoceles_with(&self, close: &impl Closeness) -> bool {
        let [a, b, c] = self.sides();
        close.is_close(a, b) || close.is_close(a, c) || close.is_close(b, c)
    }

    /// True for a right triangle: `p² + q² ≈ r²` over the sorted sides,
    /// compared after dividing by `r`.
    #[must_use]
    pub fn is_pythagorean(&self) -> bool {
        self.is_pythagorean_with(&Tolerance::DEFAULT)
    }

    #[must_use]
    pub fn is_pythagorean_with(&self, close: &impl Closeness) -> bool {
        let (_, unit) = normalized(self.sides());
        let [p, q, r] = sorted(unit);
        close.is_close(p * p + q * q, r * r)
    }

    /// Not pythagorean, and every angle below a right angle.
    #[must_use]
    pub fn is_acute(&self) -> bool {
        self.is_acute_with(&Tolerance::DEFAULT)
    }

    #[must_use]
    pub fn is_acute_with(&self, close: &impl Closeness) -> bool {
        !self.is_pythagorean_with(close) && self.angles().iter().all(|&angle| angle < FRAC_PI_2)
    }

    /// Neither pythagorean nor acute.
    #[must_use]
    pub fn is_obtuse(&self) -> bool {
        self.is_obtuse_with(&Tolerance::DEFAULT)
    }

    #[must_use]
    pub fn is_obtuse_with(&self, close: &impl Closeness) -> bool {
        !self.is_pythagorean_with(close) && !self.is_acute_with(close)
    }

    /// Pythagorean or obtuse.
    #[must_use]
    pub fn is_not_acute(&self) -> bool {
        !self.is_acute()
    }

    /// Pythagorean or acute.
    #[must_use]
    pub fn is_not_obtuse(&self) -> bool {
        !self.is_obtuse()
    }

    /// Same shape: the sorted angles match pairwise. Independent of labels,
    /// reflection, rotation and scale.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        self.is_similar_with(other, &Tolerance::DEFAULT)
    }

    #[must_use]
    pub fn is_similar_with(&self, other: &Self, close: &impl Closeness) -> bool {
        sorted(self.angles())
            .into_iter()
            .zip(sorted(other.angles()))
            .all(|(lhs, rhs)| close.is_close(lhs, rhs))
    }

    /// A copy with every side multiplied by `factor`. Angles are unchanged.
    pub fn scale(&self, factor: f64) -> Result<Self, SolveError> {
        if factor.is_nan() || factor == f64::INFINITY {
            return Err(SolveError::NonFiniteValue {
                label: "factor".to_owned(),
                value: factor,
            });
        }
        if factor <= 0.0 {
            return Err(SolveError::NonPositiveValue {
                label: "factor".to_owned(),
                value: factor,
            });
        }
        let sides = self.sides().map(|side| side * factor);
        if sides.iter().any(|side| !side.is_finite() || *side <= 0.0) {
            return Err(SolveError::NonFiniteValue {
                label: "factor".to_owned(),
                value: factor,
            });
        }
        Ok(Self::from_parts(
            sides,
            self.angles(),
            self.labels().clone(),
            self.supplied().to_vec(),
        ))
    }

    /// The same triangle with its sides reassigned in ascending order, so
    /// that side 0 is the shortest. Angles are recomputed for the new
    /// assignment.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let sides = sorted(self.sides());
        Self::from_sides(sides, self.labels().clone(), vec![Slot::A, Slot::B, Slot::C])
    }
}

fn unit_area([a, b, c]: [f64; 3]) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

fn sorted(mut values: [f64; 3]) -> [f64; 3] {
    values.sort_by(f64::total_cmp);
    values
}
