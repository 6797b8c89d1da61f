//! Extensions to [`uom`] for rock and fluid physics.
//!
//! This crate uses [`uom`] for all physical quantities (pressure, temperature,
//! velocity, density, angles). This module adds the oilfield composition
//! measures that [`uom`] has no notion of, each validated at construction:
//!
//! - [`Salinity`]: dissolved salt mass fraction (typically given in ppm)
//! - [`GasGravity`]: gas density relative to air
//! - [`ApiGravity`]: oil gravity in degrees API
//! - [`GasOilRatio`]: dissolved gas volume per oil volume (`Rg`)
//!
//! Elastic moduli are stresses, so they are represented as
//! [`Pressure`](uom::si::f64::Pressure) through the [`ElasticModulus`] alias.

mod api_gravity;
mod gas_gravity;
mod gas_oil_ratio;
mod salinity;

pub use api_gravity::ApiGravity;
pub use gas_gravity::GasGravity;
pub use gas_oil_ratio::GasOilRatio;
pub use salinity::Salinity;

/// An elastic modulus (E, u, K or L), dimensionally a stress.
pub type ElasticModulus = uom::si::f64::Pressure;
