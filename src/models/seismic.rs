//! Seismic wave propagation models.
//!
//! This module contains models for plane elastic waves crossing layer
//! boundaries.

pub mod snell;
