use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{ConstraintResult, check_range};

/// Mass fraction of dissolved salt (NaCl equivalent) in a brine.
///
/// Salinity is usually quoted in parts per million. The stored value must lie
/// in `[0, 1)` as a mass fraction.
///
/// ```
/// use rppy::support::units::Salinity;
/// use uom::si::ratio::{part_per_million, ratio};
///
/// let s = Salinity::new::<part_per_million>(30_000.0).unwrap();
/// assert!((s.get::<ratio>() - 0.03).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salinity(Ratio);

impl Salinity {
    /// Create a [`Salinity`] from a value in any ratio unit.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the mass fraction is negative, NaN, or not below one.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::ratio::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Ratio::new::<U>(value))
    }

    /// Create a [`Salinity`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the mass fraction is negative, NaN, or not below one.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        check_range(quantity.get::<ratio>(), 0.0, 1.0, true)?;
        Ok(Self(quantity))
    }

    /// Fresh water.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Ratio::new::<ratio>(0.0))
    }
}

impl Deref for Salinity {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use approx::assert_relative_eq;
    use uom::si::ratio::{part_per_million, percent};

    #[test]
    fn ppm_and_percent_agree() -> ConstraintResult<()> {
        let a = Salinity::new::<part_per_million>(35_000.0)?;
        let b = Salinity::new::<percent>(3.5)?;
        assert_relative_eq!(a.get::<ratio>(), b.get::<ratio>(), max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Salinity::new::<part_per_million>(-1.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            Salinity::new::<part_per_million>(1e6),
            Err(ConstraintError::AboveMaximum)
        );
    }
}
