//! Caller input: a partial set of measurements keyed by label.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::slots::{Slot, SlotLabels};
use super::SolveError;

/// Three of the six measurements of a triangle, keyed by slot label.
///
/// Behaves like an insertion-ordered map: inserting a label that is already
/// present replaces its value in place. Nothing is checked until the
/// specification is handed to a solver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    entries: Vec<(String, f64)>,
}

impl Specification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: f64) -> Self {
        self.insert(label, value);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(existing, value)| (existing == label).then_some(*value))
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Side-only specification for the triangle with the given vertices,
    /// using the default labels.
    #[must_use]
    pub fn from_coordinates(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2]) -> Self {
        Self::from_coordinates_with_labels(p0, p1, p2, &SlotLabels::default())
    }

    /// Side-only specification for the triangle with the given vertices.
    ///
    /// Side `i` is the distance between the two points other than `p_i`, so
    /// angle `i` of the solved triangle is the interior angle at `p_i`.
    #[must_use]
    pub fn from_coordinates_with_labels(
        p0: [f64; 2],
        p1: [f64; 2],
        p2: [f64; 2],
        labels: &SlotLabels,
    ) -> Self {
        let points = [p0, p1, p2];
        let mut spec = Self::new();
        for (index, label) in labels.sides().iter().enumerate() {
            let [from, to] = super::slots::other_indices(index);
            let dx = points[to][0] - points[from][0];
            let dy = points[to][1] - points[from][1];
            spec.insert(label.clone(), dx.hypot(dy));
        }
        spec
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for Specification {
    fn from_iter<T: IntoIterator<Item = (L, f64)>>(iter: T) -> Self {
        let mut spec = Self::new();
        for (label, value) in iter {
            spec.insert(label, value);
        }
        spec
    }
}

impl<L: Into<String>, const N: usize> From<[(L, f64); N]> for Specification {
    fn from(entries: [(L, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// A specification that passed validation, split into sides and angles.
///
/// Each list keeps the caller's order and holds `(slot index, value)`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Given {
    pub sides: Vec<(usize, f64)>,
    pub angles: Vec<(usize, f64)>,
}

impl Given {
    pub fn len(&self) -> usize {
        self.sides.len() + self.angles.len()
    }

    pub fn side(&self, index: usize) -> Option<f64> {
        self.sides
            .iter()
            .find_map(|&(slot, value)| (slot == index).then_some(value))
    }

    /// The supplied slots in canonical order.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .sides
            .iter()
            .filter_map(|&(index, _)| Slot::side(index))
            .chain(self.angles.iter().filter_map(|&(index, _)| Slot::angle(index)))
            .collect();
        slots.sort();
        slots
    }
}

/// Checks every entry, then the entry count.
///
/// Per entry: the value must be finite and positive, the label must name a
/// slot, and an angle must be below π.
pub(crate) fn validate(spec: &Specification, labels: &SlotLabels) -> Result<Given, SolveError> {
    let mut given = Given {
        sides: Vec::with_capacity(3),
        angles: Vec::with_capacity(3),
    };

    for (label, value) in spec.entries() {
        let value = *value;
        if value.is_nan() || value == f64::INFINITY {
            return Err(SolveError::NonFiniteValue {
                label: label.clone(),
                value,
            });
        }
        if value <= 0.0 {
            return Err(SolveError::NonPositiveValue {
                label: label.clone(),
                value,
            });
        }
        let slot = labels
            .resolve(label)
            .ok_or_else(|| SolveError::UnknownSlot(label.clone()))?;
        if slot.is_angle() {
            if value >= PI {
                return Err(SolveError::AngleOutOfRange {
                    label: label.clone(),
                    value,
                });
            }
            given.angles.push((slot.index(), value));
        } else {
            given.sides.push((slot.index(), value));
        }
    }

    match given.len() {
        3 => Ok(given),
        n if n < 3 => Err(SolveError::UnderSpecified {
            given: n,
            sides: given.sides.len(),
        }),
        n => Err(SolveError::OverSpecified { given: n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(entries: &[(&str, f64)]) -> Result<Given, SolveError> {
        let spec: Specification = entries.iter().copied().collect();
        validate(&spec, &SlotLabels::default())
    }

    #[test]
    fn splits_sides_and_angles_in_caller_order() {
        let given = check(&[("c", 5.0), ("alpha", 0.5), ("a", 3.0)]).unwrap();
        assert_eq!(given.sides, vec![(2, 5.0), (0, 3.0)]);
        assert_eq!(given.angles, vec![(0, 0.5)]);
        assert_eq!(given.slots(), vec![Slot::A, Slot::C, Slot::ALPHA]);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(matches!(
            check(&[("a", 0.0), ("b", 4.0), ("c", 5.0)]),
            Err(SolveError::NonPositiveValue { ref label, .. }) if label == "a"
        ));
        assert!(matches!(
            check(&[("a", 3.0), ("beta", -0.1), ("c", 5.0)]),
            Err(SolveError::NonPositiveValue { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            check(&[("a", f64::NAN), ("b", 4.0), ("c", 5.0)]),
            Err(SolveError::NonFiniteValue { .. })
        ));
        assert!(matches!(
            check(&[("a", f64::INFINITY), ("b", 4.0), ("c", 5.0)]),
            Err(SolveError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn rejects_angles_at_or_beyond_pi() {
        assert!(matches!(
            check(&[("a", 3.0), ("beta", 4.0), ("c", 5.0)]),
            Err(SolveError::AngleOutOfRange { .. })
        ));
        assert!(matches!(
            check(&[("a", 3.0), ("beta", PI), ("c", 5.0)]),
            Err(SolveError::AngleOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            check(&[("a", 3.0), ("d", 4.0), ("c", 5.0)]),
            Err(SolveError::UnknownSlot("d".to_owned()))
        );
    }

    #[test]
    fn rejects_wrong_counts() {
        assert_eq!(
            check(&[("a", 3.0)]),
            Err(SolveError::UnderSpecified { given: 1, sides: 1 })
        );
        assert_eq!(
            check(&[("a", 3.0), ("b", 4.0), ("c", 5.0), ("alpha", 1.0)]),
            Err(SolveError::OverSpecified { given: 4 })
        );
        assert_eq!(
            check(&[]),
            Err(SolveError::UnderSpecified { given: 0, sides: 0 })
        );
    }

    #[test]
    fn insert_replaces_existing_label() {
        let spec = Specification::new().with("a", 3.0).with("b", 4.0).with("a", 6.0);
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("a"), Some(6.0));
        assert_eq!(spec.entries()[0].0, "a");
    }

    #[test]
    fn coordinates_give_opposite_side_lengths() {
        let spec = Specification::from_coordinates([0.0, 0.0], [3.0, 0.0], [3.0, 4.0]);
        assert_eq!(spec.get("a"), Some(4.0));
        assert_eq!(spec.get("b"), Some(5.0));
        assert_eq!(spec.get("c"), Some(3.0));
    }
}
