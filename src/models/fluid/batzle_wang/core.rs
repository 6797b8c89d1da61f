//! Batzle-Wang (1992) pore fluid correlations.
//!
//! Inputs are validated and converted to the correlation units (MPa, °C,
//! g/cm³, mass fraction) here; the per-phase modules work on plain `f64`.

mod brine;
mod error;
mod gas;
mod input;
mod oil;
mod properties;

pub use error::FluidError;
pub use input::{Fluid, FluidParameters, FluidSample, Phase};
pub use properties::FluidProperties;

use tracing::warn;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    mass_density::gram_per_cubic_centimeter,
    pressure::megapascal,
    ratio::ratio,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{ApiGravity, GasGravity},
};

/// Upper pressure of the published calibration data, MPa.
const MAX_CALIBRATED_PRESSURE: f64 = 100.0;

/// Upper temperature of the published calibration data, °C.
const MAX_CALIBRATED_TEMPERATURE: f64 = 350.0;

/// Evaluates density, velocity and bulk modulus of `fluid` at in-situ
/// conditions.
///
/// # Errors
///
/// Returns [`FluidError::InvalidParameter`] for a non-positive pressure or a
/// temperature at or below absolute zero, and [`FluidError::OutOfDomain`] if
/// the correlation leaves its real domain.
pub fn evaluate(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    fluid: &Fluid,
) -> Result<FluidProperties, FluidError> {
    StrictlyPositive::check(&pressure.get::<megapascal>())
        .map_err(FluidError::invalid("pressure"))?;
    StrictlyPositive::check(&temperature.get::<kelvin>())
        .map_err(FluidError::invalid("temperature"))?;

    let p = pressure.get::<megapascal>();
    let t = temperature.get::<degree_celsius>();

    if p > MAX_CALIBRATED_PRESSURE || t > MAX_CALIBRATED_TEMPERATURE {
        warn!(
            pressure_mpa = p,
            temperature_c = t,
            phase = %fluid.phase(),
            "evaluating Batzle-Wang outside its calibration range"
        );
    }

    match *fluid {
        Fluid::Brine { salinity } => brine::evaluate(p, t, salinity.get::<ratio>()),
        Fluid::Oil {
            gas_gravity,
            api,
            gas_oil_ratio,
        } => {
            let g = gas_gravity.get::<ratio>();
            let rg = gas_oil_ratio.litres_per_litre();
            let limit = oil::max_gas_oil_ratio(p, t, g, api.degrees());
            if rg > limit {
                warn!(
                    gas_oil_ratio = rg,
                    saturation_limit = limit,
                    "gas-oil ratio exceeds the saturation limit; excess gas would be free"
                );
            }
            oil::evaluate_live(
                p,
                t,
                oil::LiveOil {
                    g,
                    rho0: api.reference_density().get::<gram_per_cubic_centimeter>(),
                    rg,
                },
            )
        }
        Fluid::DeadOil { api } => oil::evaluate_dead(
            p,
            t,
            api.degrees(),
            api.reference_density().get::<gram_per_cubic_centimeter>(),
        ),
        Fluid::Gas { gas_gravity } => gas::evaluate(p, t, gas_gravity.get::<ratio>()),
    }
}

/// Maximum gas-oil ratio an oil can hold in solution at `pressure` and
/// `temperature`, in litres of gas per litre of oil.
///
/// Live oil with more dissolved gas than this is above its bubble point and
/// the excess exists as a free gas phase.
#[must_use]
pub fn max_gas_oil_ratio(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    gas_gravity: GasGravity,
    api: ApiGravity,
) -> Ratio {
    Ratio::new::<ratio>(oil::max_gas_oil_ratio(
        pressure.get::<megapascal>(),
        temperature.get::<degree_celsius>(),
        gas_gravity.get::<ratio>(),
        api.degrees(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::{
        constraint::ConstraintError,
        units::{GasOilRatio, Salinity},
    };
    use approx::assert_relative_eq;
    use uom::si::{ratio::part_per_million, velocity::meter_per_second};

    fn conditions(p: f64, t: f64) -> (Pressure, ThermodynamicTemperature) {
        (
            Pressure::new::<megapascal>(p),
            ThermodynamicTemperature::new::<degree_celsius>(t),
        )
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let (p, t) = conditions(0.0, 25.0);
        let fluid = Fluid::Brine {
            salinity: Salinity::fresh(),
        };
        assert_eq!(
            evaluate(p, t, &fluid),
            Err(FluidError::InvalidParameter {
                parameter: "pressure",
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn rejects_absolute_zero() {
        let p = Pressure::new::<megapascal>(5.0);
        let fluid = Fluid::Gas {
            gas_gravity: GasGravity::new(0.6).unwrap(),
        };
        let t = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(matches!(
            evaluate(p, t, &fluid),
            Err(FluidError::InvalidParameter {
                parameter: "temperature",
                ..
            })
        ));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let (p, t) = conditions(20.0, 80.0);
        let fluid = Fluid::Brine {
            salinity: Salinity::new::<part_per_million>(80_000.0).unwrap(),
        };
        let first = evaluate(p, t, &fluid).unwrap();
        for _ in 0..10 {
            assert_eq!(evaluate(p, t, &fluid).unwrap(), first);
        }
    }

    #[test]
    fn live_oil_without_gas_differs_from_dead_oil() {
        // The live-oil form keeps its formation volume factor even at Rg = 0,
        // so the two correlations are close but not identical.
        let (p, t) = conditions(10.0, 60.0);
        let api = ApiGravity::new(30.0).unwrap();
        let live = evaluate(
            p,
            t,
            &Fluid::Oil {
                gas_gravity: GasGravity::new(0.6).unwrap(),
                api,
                gas_oil_ratio: GasOilRatio::new(0.0).unwrap(),
            },
        )
        .unwrap();
        let dead = evaluate(p, t, &Fluid::DeadOil { api }).unwrap();

        assert_relative_eq!(
            live.velocity.get::<meter_per_second>(),
            dead.velocity.get::<meter_per_second>(),
            max_relative = 0.05
        );
    }

    #[test]
    fn saturation_limit_in_litres_per_litre() {
        let (p, t) = conditions(5.0, 25.0);
        let limit = max_gas_oil_ratio(
            p,
            t,
            GasGravity::new(0.6).unwrap(),
            ApiGravity::new(21.0).unwrap(),
        );
        assert_relative_eq!(limit.get::<ratio>(), 15.6628, max_relative = 1e-4);
    }
}
