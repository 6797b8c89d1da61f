//! Batzle-Wang pore fluid model.
//!
//! Evaluates the density, compressional velocity and adiabatic bulk modulus
//! of brine, oil and gas from the empirical correlations of Batzle & Wang
//! (1992, *Geophysics* 57(11)). The computational core is in the internal
//! [`core`] module.
//!
//! # Example
//!
//! ```
//! use rppy::models::fluid::batzle_wang::{Fluid, batzle_wang};
//! use rppy::support::units::Salinity;
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     mass_density::gram_per_cubic_centimeter,
//!     pressure::megapascal,
//!     ratio::part_per_million,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//!
//! let brine = Fluid::Brine {
//!     salinity: Salinity::new::<part_per_million>(30_000.0)?,
//! };
//! let props = batzle_wang(
//!     Pressure::new::<megapascal>(5.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     brine,
//! )?;
//!
//! assert!((props.density.get::<gram_per_cubic_centimeter>() - 1.0186679).abs() < 1e-4);
//! assert!((props.velocity.get::<meter_per_second>() - 1535.572).abs() < 1e-3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Fluid, FluidError, FluidParameters, FluidProperties, FluidSample, Phase, max_gas_oil_ratio,
};

use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Evaluates `fluid` at the given pore pressure and temperature.
///
/// # Errors
///
/// Returns [`FluidError::InvalidParameter`] for a non-positive pressure or a
/// temperature at or below absolute zero, and [`FluidError::OutOfDomain`]
/// when the correlation leaves its real domain.
pub fn batzle_wang(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    fluid: Fluid,
) -> Result<FluidProperties, FluidError> {
    core::evaluate(pressure, temperature, &fluid)
}

/// Evaluates a fluid selected by phase name with keyword-style parameters.
///
/// `phase` is one of `"brine"`, `"oil"` or `"gas"` (case-insensitive).
/// Only the parameters the phase needs are read.
///
/// # Errors
///
/// Returns [`FluidError::InvalidPhase`] for an unknown phase name and
/// [`FluidError::MissingParameter`] when a required parameter is absent,
/// in addition to the errors of [`batzle_wang`].
pub fn batzle_wang_by_phase(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    phase: &str,
    params: &FluidParameters,
) -> Result<FluidProperties, FluidError> {
    let fluid = params.fluid(phase.parse()?)?;
    core::evaluate(pressure, temperature, &fluid)
}

/// Batzle-Wang fluid properties as a [`Model`].
///
/// The model is stateless; each call evaluates one [`FluidSample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BatzleWang;

impl Model for BatzleWang {
    type Input = FluidSample;
    type Output = FluidProperties;
    type Error = FluidError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::evaluate(input.pressure, input.temperature, &input.fluid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::megapascal, thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    use crate::support::units::GasGravity;

    fn sample(fluid: Fluid) -> FluidSample {
        FluidSample {
            pressure: Pressure::new::<megapascal>(13.0),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(180.0),
            fluid,
        }
    }

    #[test]
    fn model_matches_function() {
        let input = sample(Fluid::Gas {
            gas_gravity: GasGravity::new(0.6).unwrap(),
        });

        let from_model = BatzleWang.call(&input).unwrap();
        let from_fn = batzle_wang(input.pressure, input.temperature, input.fluid).unwrap();

        assert_eq!(from_model, from_fn);
    }

    #[test]
    fn keyword_surface_matches_typed_surface() {
        let params = FluidParameters {
            gas_gravity: Some(0.6),
            api: Some(21.0),
            gas_oil_ratio: Some(7.0),
            ..FluidParameters::default()
        };
        let input = sample(params.fluid(Phase::Oil).unwrap());

        let by_phase =
            batzle_wang_by_phase(input.pressure, input.temperature, "oil", &params).unwrap();
        let typed = BatzleWang.call(&input).unwrap();

        assert_relative_eq!(
            by_phase.velocity.get::<meter_per_second>(),
            typed.velocity.get::<meter_per_second>()
        );
    }

    #[test]
    fn keyword_surface_reports_bad_phase() {
        let result = batzle_wang_by_phase(
            Pressure::new::<megapascal>(5.0),
            ThermodynamicTemperature::new::<degree_celsius>(25.0),
            "mud",
            &FluidParameters::default(),
        );
        assert!(matches!(result, Err(FluidError::InvalidPhase { .. })));
    }

    #[test]
    fn keyword_surface_reports_missing_salinity() {
        let result = batzle_wang_by_phase(
            Pressure::new::<megapascal>(5.0),
            ThermodynamicTemperature::new::<degree_celsius>(25.0),
            "brine",
            &FluidParameters::default(),
        );
        assert_eq!(
            result,
            Err(FluidError::MissingParameter {
                phase: Phase::Brine,
                parameter: "S",
            })
        );
    }
}
