//! Entry points: validate, classify, derive candidates, commit one.
//!
//! Deriving is predicate-free and returns every triangle the specification
//! admits, fully built. Committing picks exactly one of those, optionally
//! through a caller filter. A filter only ever sees materialized candidates;
//! the solver is never re-entered to build them.

use super::aas_asa::aas_asa_parts;
use super::classify::classify;
use super::sas_ssa::{SsaSides, sas_sides, ssa_sides};
use super::slots::SlotLabels;
use super::spec::{Given, Specification, validate};
use super::sss::{check_inequality, complete_angles};
use super::{Case, SolveError, Triangle};

/// The triangles a specification admits.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidates {
    Unique(Triangle),
    /// Two distinct SSA solutions. The first is the one whose angle opposite
    /// the non-opposite given side is acute.
    Ambiguous(Triangle, Triangle),
}

impl Candidates {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Unique(_) => 1,
            Self::Ambiguous(..) => 2,
        }
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(..))
    }

    /// The primary candidate and, for an ambiguous specification, the
    /// alternate one.
    #[must_use]
    pub fn into_pair(self) -> (Triangle, Option<Triangle>) {
        match self {
            Self::Unique(triangle) => (triangle, None),
            Self::Ambiguous(primary, alternate) => (primary, Some(alternate)),
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Triangle> {
        match self {
            Self::Unique(triangle) => vec![triangle],
            Self::Ambiguous(primary, alternate) => vec![primary, alternate],
        }
    }
}

/// A triangle solver bound to one label schema.
///
/// The schema is resolved once, at construction; solving works on slot
/// indices only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solver {
    labels: SlotLabels,
}

impl Solver {
    /// Solver using the default labels `a, b, c` / `alpha, beta, gamma`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_labels(labels: SlotLabels) -> Self {
        Self { labels }
    }

    #[must_use]
    pub fn labels(&self) -> &SlotLabels {
        &self.labels
    }

    /// Validates `spec` and reports which case it is.
    pub fn classify(&self, spec: &Specification) -> Result<Case, SolveError> {
        validate(spec, &self.labels).map(|given| classify(&given))
    }

    /// Solves `spec`, failing with [`SolveError::AmbiguousSolution`] when two
    /// triangles fit.
    pub fn solve(&self, spec: &Specification) -> Result<Triangle, SolveError> {
        match self.derive_candidates(spec)? {
            Candidates::Unique(triangle) => Ok(triangle),
            Candidates::Ambiguous(..) => Err(SolveError::AmbiguousSolution),
        }
    }

    /// Solves `spec`, keeping only candidates accepted by `filter`.
    ///
    /// The filter runs on every candidate, unique or not, and exactly one
    /// must pass. Predicates such as [`Triangle::is_acute`] can be passed
    /// directly.
    pub fn solve_with_filter<F>(&self, spec: &Specification, filter: F) -> Result<Triangle, SolveError>
    where
        F: Fn(&Triangle) -> bool,
    {
        let mut accepted: Vec<Triangle> = self
            .derive_candidates(spec)?
            .into_vec()
            .into_iter()
            .filter(|candidate| filter(candidate))
            .collect();

        log::debug!("filter accepted {} candidate(s)", accepted.len());

        match accepted.len() {
            1 => Ok(accepted.swap_remove(0)),
            n => Err(SolveError::FilterResolutionFailure { accepted: n }),
        }
    }

    /// Both triangles an SSA specification admits, the second absent when
    /// the solution is unique.
    pub fn ssa_candidates(
        &self,
        spec: &Specification,
    ) -> Result<(Triangle, Option<Triangle>), SolveError> {
        let given = validate(spec, &self.labels)?;
        let case = classify(&given);
        if case != Case::Ssa {
            return Err(SolveError::InvalidCase {
                expected: Case::Ssa,
                found: case,
            });
        }
        let SsaSides { primary, alternate } = ssa_sides(&given, &self.labels)?;
        Ok((
            self.materialize(primary, &given),
            alternate.map(|sides| self.materialize(sides, &given)),
        ))
    }

    /// Every triangle `spec` admits, without choosing between them.
    pub fn derive_candidates(&self, spec: &Specification) -> Result<Candidates, SolveError> {
        let given = validate(spec, &self.labels)?;
        let case = classify(&given);
        log::debug!("solving {} specification {:?}", case.name(), spec.entries());

        let candidates = match case {
            Case::Sss => {
                let sides = given_sides(&given)?;
                check_inequality(sides)?;
                Candidates::Unique(self.materialize(sides, &given))
            }
            Case::Sas => Candidates::Unique(self.materialize(sas_sides(&given)?, &given)),
            Case::Ssa => {
                let SsaSides { primary, alternate } = ssa_sides(&given, &self.labels)?;
                let primary = self.materialize(primary, &given);
                match alternate {
                    Some(sides) => Candidates::Ambiguous(primary, self.materialize(sides, &given)),
                    None => Candidates::Unique(primary),
                }
            }
            Case::AasAsa => {
                let (sides, angles) = aas_asa_parts(&given, &self.labels)?;
                Candidates::Unique(Triangle::from_parts(
                    sides,
                    angles,
                    self.labels.clone(),
                    given.slots(),
                ))
            }
            Case::Aaa => {
                return Err(SolveError::UnderSpecified {
                    given: given.len(),
                    sides: 0,
                });
            }
        };

        Ok(candidates)
    }

    /// Builds a triangle from three sides, keeping supplied values verbatim.
    fn materialize(&self, mut sides: [f64; 3], given: &Given) -> Triangle {
        let mut angles = complete_angles(sides);
        for &(index, value) in &given.sides {
            sides[index] = value;
        }
        for &(index, value) in &given.angles {
            angles[index] = value;
        }
        Triangle::from_parts(sides, angles, self.labels.clone(), given.slots())
    }
}

fn given_sides(given: &Given) -> Result<[f64; 3], SolveError> {
    match [given.side(0), given.side(1), given.side(2)] {
        [Some(a), Some(b), Some(c)] => Ok([a, b, c]),
        _ => Err(SolveError::InvalidCase {
            expected: Case::Sss,
            found: classify(given),
        }),
    }
}

/// Solves `spec` with the default labels.
pub fn solve(spec: &Specification) -> Result<Triangle, SolveError> {
    Solver::new().solve(spec)
}

/// Solves `spec` with the default labels, keeping only candidates accepted
/// by `filter`.
pub fn solve_with_filter<F>(spec: &Specification, filter: F) -> Result<Triangle, SolveError>
where
    F: Fn(&Triangle) -> bool,
{
    Solver::new().solve_with_filter(spec, filter)
}

/// Both SSA candidates for `spec`, with the default labels.
pub fn ssa_candidates(spec: &Specification) -> Result<(Triangle, Option<Triangle>), SolveError> {
    Solver::new().ssa_candidates(spec)
}
