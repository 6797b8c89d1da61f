//! Inputs for Batzle-Wang evaluation.

use std::{fmt, str::FromStr};

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::part_per_million,
};

use crate::support::units::{ApiGravity, GasGravity, GasOilRatio, Salinity};

use super::FluidError;

/// A pore fluid together with the composition its correlation needs.
///
/// Each variant statically carries its own parameters, so a fluid can't be
/// evaluated with a missing salinity or gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fluid {
    /// Sodium chloride brine.
    Brine { salinity: Salinity },

    /// Live oil with dissolved gas.
    Oil {
        gas_gravity: GasGravity,
        api: ApiGravity,
        gas_oil_ratio: GasOilRatio,
    },

    /// Gas-free oil.
    ///
    /// Uses the dead-oil velocity correlation in API gravity rather than the
    /// live-oil pseudo-density form.
    DeadOil { api: ApiGravity },

    /// Hydrocarbon gas.
    Gas { gas_gravity: GasGravity },
}

impl Fluid {
    /// The phase this fluid belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Fluid::Brine { .. } => Phase::Brine,
            Fluid::Oil { .. } | Fluid::DeadOil { .. } => Phase::Oil,
            Fluid::Gas { .. } => Phase::Gas,
        }
    }
}

/// A fluid at a given pore pressure and temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidSample {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub fluid: Fluid,
}

/// The fluid phase names accepted by the keyword-style API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Brine,
    Oil,
    Gas,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Brine => "brine",
            Phase::Oil => "oil",
            Phase::Gas => "gas",
        })
    }
}

impl FromStr for Phase {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brine" => Ok(Phase::Brine),
            "oil" => Ok(Phase::Oil),
            "gas" => Ok(Phase::Gas),
            _ => Err(FluidError::InvalidPhase {
                phase: s.to_owned(),
            }),
        }
    }
}

/// Loosely-typed fluid parameters, as supplied by keyword.
///
/// Values are in the conventional oilfield units. Only the parameters the
/// selected [`Phase`] needs are read; the rest are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FluidParameters {
    /// Salinity `S`, in ppm.
    pub salinity: Option<f64>,
    /// Gas gravity `G`.
    pub gas_gravity: Option<f64>,
    /// Oil gravity, in degrees API.
    pub api: Option<f64>,
    /// Gas-oil ratio `Rg`, in litres per litre.
    pub gas_oil_ratio: Option<f64>,
}

impl FluidParameters {
    /// Builds the [`Fluid`] for `phase` from the supplied parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FluidError::MissingParameter`] if the phase needs a value
    /// that wasn't supplied, or [`FluidError::InvalidParameter`] if a value
    /// is out of range.
    pub fn fluid(&self, phase: Phase) -> Result<Fluid, FluidError> {
        let require = |value: Option<f64>, parameter: &'static str| {
            value.ok_or(FluidError::MissingParameter { phase, parameter })
        };

        Ok(match phase {
            Phase::Brine => {
                let s = require(self.salinity, "S")?;
                Fluid::Brine {
                    salinity: Salinity::from_quantity(Ratio::new::<part_per_million>(s))
                        .map_err(FluidError::invalid("salinity"))?,
                }
            }
            Phase::Oil => {
                let g = require(self.gas_gravity, "G")?;
                let api = require(self.api, "api")?;
                let rg = require(self.gas_oil_ratio, "Rg")?;
                Fluid::Oil {
                    gas_gravity: GasGravity::new(g).map_err(FluidError::invalid("gas gravity"))?,
                    api: ApiGravity::new(api).map_err(FluidError::invalid("API gravity"))?,
                    gas_oil_ratio: GasOilRatio::new(rg)
                        .map_err(FluidError::invalid("gas-oil ratio"))?,
                }
            }
            Phase::Gas => {
                let g = require(self.gas_gravity, "G")?;
                Fluid::Gas {
                    gas_gravity: GasGravity::new(g).map_err(FluidError::invalid("gas gravity"))?,
                }
            }
        })
    }
}
