use serde::{Deserialize, Serialize};

use super::spec::Given;

/// Which three measurements a specification supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    /// Three sides.
    Sss,
    /// Two sides and the angle between them.
    Sas,
    /// Two sides and an angle opposite one of them.
    Ssa,
    /// Two angles and one side, included or not. Both solve the same way.
    AasAsa,
    /// Three angles and no side. Fixes the shape but not the size, so it is
    /// rejected.
    Aaa,
}

impl Case {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sss => "SSS",
            Self::Sas => "SAS",
            Self::Ssa => "SSA",
            Self::AasAsa => "AAS/ASA",
            Self::Aaa => "AAA",
        }
    }
}

/// Classifies a validated specification of exactly three measurements.
pub(crate) fn classify(given: &Given) -> Case {
    match given.angles.as_slice() {
        [] => Case::Sss,
        [(angle, _)] => {
            if given.side(*angle).is_some() {
                Case::Ssa
            } else {
                Case::Sas
            }
        }
        [_, _] => Case::AasAsa,
        _ => Case::Aaa,
    }
}
