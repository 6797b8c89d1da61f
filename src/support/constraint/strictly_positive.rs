use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Compressional velocities, pressures, gas gravity and the positive-definite
/// elastic moduli all use this marker.
///
/// # Examples
///
/// ```
/// use rppy::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Pressure, pressure::megapascal};
///
/// let p = StrictlyPositive::new(Pressure::new::<megapascal>(5.0)).unwrap();
/// assert_eq!(p.as_ref().get::<megapascal>(), 5.0);
///
/// assert!(Constrained::<_, StrictlyPositive>::new(0.6).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, Velocity},
        pressure::gigapascal,
        velocity::meter_per_second,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn velocities() {
        let vs = Velocity::new::<meter_per_second>(1725.0);
        assert!(StrictlyPositive::new(vs).is_ok());

        let vs = Velocity::new::<meter_per_second>(0.0);
        assert!(StrictlyPositive::new(vs).is_err());
    }

    #[test]
    fn moduli() {
        let shear = Pressure::new::<gigapascal>(26.92);
        assert!(StrictlyPositive::new(shear).is_ok());

        let shear = Pressure::new::<gigapascal>(-1.0);
        assert!(StrictlyPositive::new(shear).is_err());
    }
}
