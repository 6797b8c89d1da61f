use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Volume of gas dissolved in oil, in litres of gas at standard conditions
/// per litre of oil (`Rg`).
///
/// Multiply a value in standard cubic feet per barrel by about 0.1781 to get
/// litres per litre.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GasOilRatio(Constrained<Ratio, NonNegative>);

impl GasOilRatio {
    /// Create a [`GasOilRatio`] in litres per litre.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or NaN.
    pub fn new(litres_per_litre: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(litres_per_litre))?))
    }

    /// Litres of gas per litre of oil.
    #[must_use]
    pub fn litres_per_litre(self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }
}

impl Deref for GasOilRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
