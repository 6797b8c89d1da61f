//! Pore fluid models.
//!
//! [`batzle_wang`] evaluates density, velocity and bulk modulus of brine, oil
//! and gas at reservoir pressure and temperature. [`mixture`] combines phases
//! into a single effective pore fluid.

pub mod batzle_wang;
pub mod mixture;
