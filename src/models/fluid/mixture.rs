//! Wood's (Reuss) mixing of pore fluid phases.
//!
//! A uniformly saturated pore space responds to a passing wave as a single
//! fluid: the density is the saturation-weighted mean of the phase densities,
//! and the compressibility is the saturation-weighted mean of the phase
//! compressibilities.

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::support::constraint::{Constraint, ConstraintError, NonNegative};

use super::batzle_wang::FluidProperties;

/// Allowed deviation of the saturation sum from one.
const SATURATION_TOLERANCE: f64 = 1e-9;

/// Errors that can occur while mixing fluid phases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixtureError {
    /// No phases were supplied.
    #[error("a mixture needs at least one phase")]
    Empty,

    /// A phase saturation is negative or NaN.
    #[error("invalid saturation for phase {index}")]
    InvalidSaturation {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    /// The saturations don't add up to one.
    #[error("saturations sum to {sum}, expected 1")]
    SaturationSum { sum: f64 },

    /// A saturated phase has a non-positive density or bulk modulus.
    #[error("phase {index} has a non-positive density or bulk modulus")]
    NotPhysical { index: usize },
}

/// Mixes fluid phases given as `(properties, saturation)` pairs.
///
/// Phases with zero saturation are ignored.
///
/// # Errors
///
/// Returns a [`MixtureError`] if `phases` is empty, if a saturation is
/// negative, if the saturations don't sum to one, or if a saturated phase
/// has a non-positive density or modulus.
///
/// # Example
///
/// ```
/// use rppy::models::fluid::{batzle_wang::FluidProperties, mixture::wood};
/// use uom::si::{
///     f64::{MassDensity, Velocity},
///     mass_density::gram_per_cubic_centimeter,
///     velocity::meter_per_second,
/// };
///
/// let water = FluidProperties::from_density_and_velocity(
///     MassDensity::new::<gram_per_cubic_centimeter>(1.0),
///     Velocity::new::<meter_per_second>(1500.0),
/// );
/// let mix = wood(&[(water, 0.5), (water, 0.5)])?;
/// assert!((mix.velocity.get::<meter_per_second>() - 1500.0).abs() < 1e-9);
/// # Ok::<(), rppy::models::fluid::mixture::MixtureError>(())
/// ```
pub fn wood(phases: &[(FluidProperties, f64)]) -> Result<FluidProperties, MixtureError> {
    if phases.is_empty() {
        return Err(MixtureError::Empty);
    }

    let mut sum = 0.0;
    let mut density = 0.0;
    let mut compliance = 0.0;

    for (index, (props, saturation)) in phases.iter().enumerate() {
        NonNegative::check(saturation)
            .map_err(|source| MixtureError::InvalidSaturation { index, source })?;
        sum += saturation;

        if *saturation == 0.0 {
            continue;
        }

        let rho = props.density.get::<kilogram_per_cubic_meter>();
        let k = props.bulk_modulus.get::<pascal>();
        if !(rho > 0.0 && k > 0.0) {
            return Err(MixtureError::NotPhysical { index });
        }

        density += saturation * rho;
        compliance += saturation / k;
    }

    if (sum - 1.0).abs() > SATURATION_TOLERANCE {
        return Err(MixtureError::SaturationSum { sum });
    }

    Ok(FluidProperties::from_density_and_bulk_modulus(
        MassDensity::new::<kilogram_per_cubic_meter>(density),
        Pressure::new::<pascal>(1.0 / compliance),
    ))
}
