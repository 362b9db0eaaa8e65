//! The six measurement slots of a triangle and the labels they go by.
//!
//! A triangle has three side slots and three angle slots. The pairing is
//! structural: the angle at index `i` is opposite the side at index `i`.
//! Labels are only a naming layer on top of that; the solver resolves a
//! label to a [`Slot`] once and works on indices from then on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotKind {
    Side,
    Angle,
}

/// One of the six canonical measurement slots.
///
/// Ordering is canonical: the three sides in index order, then the three
/// angles in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct Slot {
    kind: SlotKind,
    index: u8,
}

/// Unchecked wire form of a [`Slot`].
#[derive(Deserialize)]
struct RawSlot {
    kind: SlotKind,
    index: usize,
}

impl TryFrom<RawSlot> for Slot {
    type Error = SolveError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        let slot = match raw.kind {
            SlotKind::Side => Self::side(raw.index),
            SlotKind::Angle => Self::angle(raw.index),
        };
        slot.ok_or_else(|| SolveError::UnknownSlot(format!("{:?} {}", raw.kind, raw.index)))
    }
}

impl Slot {
    pub const A: Self = Self::new_unchecked(SlotKind::Side, 0);
    pub const B: Self = Self::new_unchecked(SlotKind::Side, 1);
    pub const C: Self = Self::new_unchecked(SlotKind::Side, 2);
    pub const ALPHA: Self = Self::new_unchecked(SlotKind::Angle, 0);
    pub const BETA: Self = Self::new_unchecked(SlotKind::Angle, 1);
    pub const GAMMA: Self = Self::new_unchecked(SlotKind::Angle, 2);

    /// All six slots in canonical order.
    pub const ALL: [Self; 6] = [
        Self::A,
        Self::B,
        Self::C,
        Self::ALPHA,
        Self::BETA,
        Self::GAMMA,
    ];

    const fn new_unchecked(kind: SlotKind, index: u8) -> Self {
        Self { kind, index }
    }

    /// Side slot at `index`, or `None` when `index` is not 0, 1 or 2.
    #[must_use]
    pub const fn side(index: usize) -> Option<Self> {
        if index < 3 {
            Some(Self::new_unchecked(SlotKind::Side, index as u8))
        } else {
            None
        }
    }

    /// Angle slot at `index`, or `None` when `index` is not 0, 1 or 2.
    #[must_use]
    pub const fn angle(index: usize) -> Option<Self> {
        if index < 3 {
            Some(Self::new_unchecked(SlotKind::Angle, index as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn kind(self) -> SlotKind {
        self.kind
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self.kind, SlotKind::Side)
    }

    #[must_use]
    pub const fn is_angle(self) -> bool {
        matches!(self.kind, SlotKind::Angle)
    }

    /// The angle opposite a side, or the side opposite an angle.
    #[must_use]
    pub const fn opposite(self) -> Self {
        let kind = match self.kind {
            SlotKind::Side => SlotKind::Angle,
            SlotKind::Angle => SlotKind::Side,
        };
        Self::new_unchecked(kind, self.index)
    }

    /// The two other slots of the same kind, in index order.
    #[must_use]
    pub const fn others(self) -> [Self; 2] {
        let [first, second] = other_indices(self.index());
        [
            Self::new_unchecked(self.kind, first as u8),
            Self::new_unchecked(self.kind, second as u8),
        ]
    }
}

/// The two indices in `0..3` other than `index`.
pub(crate) const fn other_indices(index: usize) -> [usize; 2] {
    match index {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// The one index in `0..3` that is neither `first` nor `second`.
pub(crate) const fn remaining_index(first: usize, second: usize) -> usize {
    3 - first - second
}

/// Caller-facing names for the six slots.
///
/// `sides[i]` and `angles[i]` name an opposite side/angle pair. All six
/// labels must be distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotLabels {
    sides: [String; 3],
    angles: [String; 3],
}

impl Default for SlotLabels {
    fn default() -> Self {
        Self {
            sides: ["a".to_owned(), "b".to_owned(), "c".to_owned()],
            angles: ["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()],
        }
    }
}

impl SlotLabels {
    /// Builds a label schema from three side labels and the three angle
    /// labels opposite them.
    pub fn new<S: Into<String>>(sides: [S; 3], angles: [S; 3]) -> Result<Self, SolveError> {
        let labels = Self {
            sides: sides.map(Into::into),
            angles: angles.map(Into::into),
        };
        labels.check_distinct()?;
        Ok(labels)
    }

    /// Labels derived from three vertex names.
    ///
    /// `"ABC"` names the angles `A`, `B`, `C` and each side after the two
    /// vertices it joins: `BC` (opposite `A`), `AC` (opposite `B`) and `AB`
    /// (opposite `C`).
    pub fn from_vertex_names(names: &str) -> Result<Self, SolveError> {
        let vertices: Vec<char> = names.chars().collect();
        let [p, q, r] = vertices.as_slice() else {
            return Err(SolveError::InvalidLabels(format!(
                "vertex names {names:?} must be exactly three characters"
            )));
        };
        Self::new(
            [format!("{q}{r}"), format!("{p}{r}"), format!("{p}{q}")],
            [p.to_string(), q.to_string(), r.to_string()],
        )
    }

    fn check_distinct(&self) -> Result<(), SolveError> {
        let all: Vec<&str> = self.iter().map(|(_, label)| label).collect();
        for (i, label) in all.iter().enumerate() {
            if label.is_empty() {
                return Err(SolveError::InvalidLabels("labels must not be empty".to_owned()));
            }
            if all[..i].contains(label) {
                return Err(SolveError::InvalidLabels(format!(
                    "label {label:?} is used more than once"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn sides(&self) -> &[String; 3] {
        &self.sides
    }

    #[must_use]
    pub fn angles(&self) -> &[String; 3] {
        &self.angles
    }

    #[must_use]
    pub fn label(&self, slot: Slot) -> &str {
        match slot.kind() {
            SlotKind::Side => &self.sides[slot.index()],
            SlotKind::Angle => &self.angles[slot.index()],
        }
    }

    /// Resolves a label to its slot.
    #[must_use]
    pub fn resolve(&self, label: &str) -> Option<Slot> {
        self.iter()
            .find_map(|(slot, candidate)| (candidate == label).then_some(slot))
    }

    /// Label of the measurement opposite `label`.
    #[must_use]
    pub fn opposite_label(&self, label: &str) -> Option<&str> {
        self.resolve(label).map(|slot| self.label(slot.opposite()))
    }

    /// Slots and their labels in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.label(slot)))
    }
}

impl fmt::Display for SlotLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sides ({}, {}, {}), angles ({}, {}, {})",
            self.sides[0], self.sides[1], self.sides[2], self.angles[0], self.angles[1], self.angles[2]
        )
    }
}
