//! Isotropic linear elasticity models.

pub mod moduli;
