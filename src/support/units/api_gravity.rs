use uom::si::{f64::MassDensity, mass_density::gram_per_cubic_centimeter};

use crate::support::constraint::{ConstraintError, ConstraintResult};

/// Offset in the API gravity definition, `ρ0 = 141.5 / (API + 131.5)`.
const API_OFFSET: f64 = 131.5;

/// American Petroleum Institute oil gravity, in degrees API.
///
/// API gravity is an inverted density scale. Heavy oils are around 10°API,
/// light condensates above 45°API. Any value above -131.5 maps to a positive
/// reference density.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ApiGravity(f64);

impl ApiGravity {
    /// Create an [`ApiGravity`] in degrees API.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is NaN or would give a non-positive density.
    pub fn new(degrees: f64) -> ConstraintResult<Self> {
        if degrees.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if degrees <= -API_OFFSET {
            return Err(ConstraintError::BelowMinimum);
        }
        Ok(Self(degrees))
    }

    /// Create an [`ApiGravity`] from the oil's density at 15.6 °C and 1 atm.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the density is not strictly positive.
    pub fn from_reference_density(density: MassDensity) -> ConstraintResult<Self> {
        let rho = density.get::<gram_per_cubic_centimeter>();
        if rho.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if rho <= 0.0 {
            return Err(ConstraintError::BelowMinimum);
        }
        Self::new(141.5 / rho - API_OFFSET)
    }

    /// Degrees API.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Density at 15.6 °C and atmospheric pressure, `ρ0`.
    #[must_use]
    pub fn reference_density(self) -> MassDensity {
        MassDensity::new::<gram_per_cubic_centimeter>(141.5 / (self.0 + API_OFFSET))
    }
}
