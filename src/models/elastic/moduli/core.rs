//! Closed-form conversion between isotropic elastic moduli.
//!
//! Any two of Young's modulus `E`, Poisson's ratio `v`, shear modulus `u`,
//! bulk modulus `K` and Lamé's first parameter `L` determine the other three.
//! Every pair is reduced to Lamé's parameters `(L, u)`, from which
//!
//! ```text
//! E = u(3L + 2u) / (L + u)
//! v = L / (2(L + u))
//! K = L + 2u/3
//! ```

mod error;
mod pair;
mod solid;

pub use error::ModuliError;
pub use pair::{ModuliInput, ModuliPair, Modulus};
pub use solid::ElasticModuli;

use uom::si::f64::Ratio;

use crate::support::units::ElasticModulus;

/// Young's modulus `E` of the solid described by `pair`.
///
/// # Errors
///
/// See [`ElasticModuli::from_pair`].
pub fn youngs(pair: ModuliPair) -> Result<ElasticModulus, ModuliError> {
    Ok(ElasticModuli::from_pair(pair)?.youngs)
}

/// Poisson's ratio `v` of the solid described by `pair`.
///
/// # Errors
///
/// See [`ElasticModuli::from_pair`].
pub fn poissons(pair: ModuliPair) -> Result<Ratio, ModuliError> {
    Ok(ElasticModuli::from_pair(pair)?.poisson)
}

/// Shear modulus `u` of the solid described by `pair`.
///
/// # Errors
///
/// See [`ElasticModuli::from_pair`].
pub fn shear(pair: ModuliPair) -> Result<ElasticModulus, ModuliError> {
    Ok(ElasticModuli::from_pair(pair)?.shear)
}

/// Bulk modulus `K` of the solid described by `pair`.
///
/// # Errors
///
/// See [`ElasticModuli::from_pair`].
pub fn bulk(pair: ModuliPair) -> Result<ElasticModulus, ModuliError> {
    Ok(ElasticModuli::from_pair(pair)?.bulk)
}

/// Lamé's first parameter `L` of the solid described by `pair`.
///
/// # Errors
///
/// See [`ElasticModuli::from_pair`].
pub fn lame(pair: ModuliPair) -> Result<ElasticModulus, ModuliError> {
    Ok(ElasticModuli::from_pair(pair)?.lame)
}
