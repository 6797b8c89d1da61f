use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Gas specific gravity: gas density divided by air density at 15.6 °C and
/// atmospheric pressure.
///
/// Methane is about 0.56. Typical natural gases fall between 0.55 and 1.2.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GasGravity(Constrained<Ratio, StrictlyPositive>);

impl GasGravity {
    /// Create a [`GasGravity`] from a dimensionless value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`GasGravity`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for GasGravity {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
