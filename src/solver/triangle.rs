use std::fmt;

use serde::Serialize;

use super::SolveError;
use super::slots::{Slot, SlotKind, SlotLabels};
use super::sss::complete_angles;

/// A fully solved triangle.
///
/// Holds all six measurements. Only the solver builds one, and only once
/// every value is known; the value is immutable afterwards. Derived
/// operations such as [`scale`](Self::scale) return a new triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    sides: [f64; 3],
    angles: [f64; 3],
    labels: SlotLabels,
    supplied: Vec<Slot>,
}

impl Triangle {
    pub(crate) fn from_parts(
        sides: [f64; 3],
        angles: [f64; 3],
        labels: SlotLabels,
        supplied: Vec<Slot>,
    ) -> Self {
        Self {
            sides,
            angles,
            labels,
            supplied,
        }
    }

    /// Completes the angles of three sides already known to close a triangle.
    pub(crate) fn from_sides(sides: [f64; 3], labels: SlotLabels, supplied: Vec<Slot>) -> Self {
        Self::from_parts(sides, complete_angles(sides), labels, supplied)
    }

    #[must_use]
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }

    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.sides[0]
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.sides[1]
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.sides[2]
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.angles[0]
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.angles[1]
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.angles[2]
    }

    #[must_use]
    pub fn value(&self, slot: Slot) -> f64 {
        match slot.kind() {
            SlotKind::Side => self.sides[slot.index()],
            SlotKind::Angle => self.angles[slot.index()],
        }
    }

    /// Measurement by label.
    pub fn get(&self, label: &str) -> Result<f64, SolveError> {
        self.slot(label).map(|slot| self.value(slot))
    }

    /// The angle opposite a side label, or the side opposite an angle label.
    pub fn opposite(&self, label: &str) -> Result<f64, SolveError> {
        self.slot(label).map(|slot| self.value(slot.opposite()))
    }

    pub(crate) fn slot(&self, label: &str) -> Result<Slot, SolveError> {
        self.labels
            .resolve(label)
            .ok_or_else(|| SolveError::UnknownSlot(label.to_owned()))
    }

    #[must_use]
    pub fn labels(&self) -> &SlotLabels {
        &self.labels
    }

    /// The slots the caller supplied, in canonical order.
    #[must_use]
    pub fn supplied(&self) -> &[Slot] {
        &self.supplied
    }

    /// Every measurement with its label, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(move |(slot, label)| (label, self.value(slot)))
    }
}

impl fmt::Display for Triangle {
    /// `Triangle(a=3, b=4, c=5)`: the supplied measurements only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Triangle(")?;
        for (position, slot) in self.supplied.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", self.labels.label(*slot), self.value(*slot))?;
        }
        f.write_str(")")
    }
}
