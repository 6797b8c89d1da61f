//! Type-level numeric constraints checked once, at construction.
//!
//! Rock and fluid physics inputs carry sign restrictions that the formulas
//! rely on: velocities and pressures must be strictly positive, salinity and
//! dissolved gas must not be negative. Wrapping such values in
//! [`Constrained<T, C>`] moves the check to the boundary so the formulas
//! themselves never see an out-of-range value.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Both markers work with plain numbers and with [`uom`] quantities, and both
//! provide an associated `new()` constructor (e.g., `StrictlyPositive::new(5.0)`).
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for your own zero-sized marker type to encode
//! another invariant.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// The range variants are also used by model inputs with bounds that don't
/// warrant a dedicated marker (Poisson's ratio, incidence angle, salinity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use rppy::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// let vp = Velocity::new::<meter_per_second>(2500.0);
/// let vp = Constrained::<_, StrictlyPositive>::new(vp).unwrap();
/// assert_eq!(vp.into_inner().get::<meter_per_second>(), 2500.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Checks that an `f64` lies in `[min, max)` or `(min, max)`.
///
/// Shared by inputs whose bounds are physical rather than sign-based.
pub(crate) fn check_range(
    value: f64,
    min: f64,
    max: f64,
    min_inclusive: bool,
) -> ConstraintResult<()> {
    if value.is_nan() {
        return Err(ConstraintError::NotANumber);
    }
    let below = if min_inclusive {
        value < min
    } else {
        value <= min
    };
    if below {
        return Err(ConstraintError::BelowMinimum);
    }
    if value >= max {
        return Err(ConstraintError::AboveMaximum);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        assert!(check_range(0.0, 0.0, 1.0, true).is_ok());
        assert_eq!(
            check_range(0.0, 0.0, 1.0, false),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            check_range(1.0, 0.0, 1.0, true),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            check_range(f64::NAN, 0.0, 1.0, true),
            Err(ConstraintError::NotANumber)
        );
    }
}
