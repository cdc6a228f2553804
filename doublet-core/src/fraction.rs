use std::{cmp::Ordering, ops::Mul};

use thiserror::Error;

/// A bounded scalar in `[0.0, 1.0]`.
///
/// Used for quantities that are fractions by construction, such as the
/// portion of a time step that overlaps an active source window.
///
/// The type wraps an `f64` and guarantees the value is within `[0, 1]`.
/// Because of this invariant, `UnitFraction` implements [`Eq`] and [`Ord`]
/// even though raw `f64` does not.
///
/// # Examples
///
/// ```
/// use doublet_core::UnitFraction;
///
/// let half = UnitFraction::new(0.5).unwrap();
/// assert_eq!(half.get(), 0.5);
/// assert_eq!(half * 200.0, 100.0);
/// assert_eq!(200.0 * half, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFraction(f64);

impl UnitFraction {
    /// The fraction `0.0`.
    pub const ZERO: Self = Self(0.0);

    /// The fraction `1.0`.
    pub const ONE: Self = Self(1.0);

    /// Creates a `UnitFraction` if `value` lies within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitFractionError::NotFinite`] if `value` is `NaN` or infinite.
    /// Returns [`UnitFractionError::OutOfRange`] if `value` is outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, UnitFractionError> {
        if !value.is_finite() {
            return Err(UnitFractionError::NotFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(UnitFractionError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates a `UnitFraction` by saturating `value` into `[0, 1]`.
    ///
    /// Values below zero map to [`UnitFraction::ZERO`], values above one map
    /// to [`UnitFraction::ONE`], and `NaN` maps to [`UnitFraction::ZERO`].
    /// Intended for results of arithmetic that is bounded mathematically but
    /// may stray by a rounding error.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UnitFraction {
    type Error = UnitFractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        UnitFraction::new(value)
    }
}

impl From<UnitFraction> for f64 {
    fn from(fraction: UnitFraction) -> Self {
        fraction.0
    }
}

impl Mul<f64> for UnitFraction {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        self.0 * rhs
    }
}

impl Mul<UnitFraction> for f64 {
    type Output = f64;

    fn mul(self, rhs: UnitFraction) -> Self::Output {
        self * rhs.0
    }
}

// Safe because construction forbids NaN.
impl Eq for UnitFraction {}

impl Ord for UnitFraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl PartialOrd for UnitFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Errors that can occur when constructing a [`UnitFraction`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum UnitFractionError {
    /// Input was not finite.
    #[error("value is not finite: {0}")]
    NotFinite(f64),

    /// Input was outside `[0, 1]`.
    #[error("value {0} is outside the range [0, 1]")]
    OutOfRange(f64),
}
