// ─────────────────────────────────────────────────────────────────────────────
// Tolerance
// ─────────────────────────────────────────────────────────────────────────────

/// Closeness policy for the equality-like tests on a solved triangle.
///
/// Two values are close when their difference is within `rel` times the
/// larger magnitude, or within `abs`, whichever is larger. This is the usual
/// relative/absolute rule; with `abs = 0.0` a value is only close to zero
/// when it is exactly zero.
///
/// Presets:
/// - `Tolerance::DEFAULT` - relative 1e-9, no absolute floor
/// - `Tolerance::LOOSE` - relative 1e-6, no absolute floor
/// - `Tolerance::TIGHT` - relative 1e-12, no absolute floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerance {
    /// Default closeness policy (relative 1e-9).
    pub const DEFAULT: Self = Self { rel: 1e-9, abs: 0.0 };

    /// Loose policy for values that went through several trig calls (1e-6).
    pub const LOOSE: Self = Self { rel: 1e-6, abs: 0.0 };

    /// Tight policy (1e-12).
    pub const TIGHT: Self = Self { rel: 1e-12, abs: 0.0 };

    #[must_use]
    pub const fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }

    /// Relative-only tolerance.
    #[must_use]
    pub const fn relative(rel: f64) -> Self {
        Self { rel, abs: 0.0 }
    }

    /// Absolute-only tolerance.
    #[must_use]
    pub const fn absolute(abs: f64) -> Self {
        Self { rel: 0.0, abs }
    }

    #[must_use]
    pub fn approx_eq_f64(self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        diff <= (self.rel * a.abs().max(b.abs())).max(self.abs)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A comparator deciding whether two measurements are "the same".
///
/// Implemented by [`Tolerance`] and by any `Fn(f64, f64) -> bool`, so a
/// caller can pass either a policy value or a closure.
pub trait Closeness {
    fn is_close(&self, a: f64, b: f64) -> bool;
}

impl Closeness for Tolerance {
    fn is_close(&self, a: f64, b: f64) -> bool {
        self.approx_eq_f64(a, b)
    }
}

impl<F> Closeness for F
where
    F: Fn(f64, f64) -> bool,
{
    fn is_close(&self, a: f64, b: f64) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_relative() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.approx_eq_f64(1e23, 1e23 * (1.0 + 1e-12)));
        assert!(tol.approx_eq_f64(1e-8, 1e-8 * (1.0 + 1e-12)));
        assert!(!tol.approx_eq_f64(1.0, 1.0 + 1e-6));
        assert!(!tol.approx_eq_f64(0.0, 1e-300));
        assert!(tol.approx_eq_f64(0.0, 0.0));
    }

    #[test]
    fn absolute_floor_applies_near_zero() {
        let tol = Tolerance::new(1e-9, 1e-12);
        assert!(tol.approx_eq_f64(0.0, 1e-13));
        assert!(!tol.approx_eq_f64(0.0, 1e-11));
    }

    #[test]
    fn non_finite_values_are_never_close() {
        let tol = Tolerance::LOOSE;
        assert!(!tol.approx_eq_f64(f64::NAN, f64::NAN));
        assert!(!tol.approx_eq_f64(f64::INFINITY, 1.0));
    }

    #[test]
    fn closures_are_comparators() {
        let exact = |a: f64, b: f64| a == b;
        assert!(exact.is_close(2.0, 2.0));
        assert!(!exact.is_close(2.0, 2.0 + f64::EPSILON * 2.0));
        assert!(Tolerance::DEFAULT.is_close(3.0, 3.0));
    }
}
