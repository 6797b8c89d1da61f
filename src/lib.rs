//! # rppy
//!
//! Rock and fluid physics formulas for seismic interpretation, built as
//! models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Formula groups, each with a free-function API and a thin
//!   [`twine_core::Model`] adapter:
//!   - [`models::fluid`]: Batzle-Wang pore fluid properties and Wood mixing.
//!   - [`models::seismic`]: Snell's law at a layer boundary.
//!   - [`models::elastic`]: Conversions among the isotropic elastic moduli.
//! - [`support`]: Input constraints and oilfield units used by models.
//!
//! ## Units
//!
//! Every physical value is a [`uom`] quantity, so callers may supply and read
//! values in any unit. The correlations are published in MPa, °C, ppm, m/s
//! and g/cm³, and the conversions to those units happen inside each model.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]. The crate never installs a
//! subscriber.
//!
//! Note: Only [`models`] and [`support`] are public API. Each model's `core`
//! module is an implementation detail.

pub mod models;
pub mod support;
