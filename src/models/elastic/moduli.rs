//! Conversions among the five isotropic elastic moduli.
//!
//! A [`ModuliPair`] names any two of Young's modulus `E`, Poisson's ratio `v`,
//! shear modulus `u`, bulk modulus `K` and Lamé's first parameter `L`. The
//! free functions [`youngs`], [`poissons`], [`shear`], [`bulk`] and [`lame`]
//! return one modulus; [`ElasticModuli::from_pair`] resolves all of them.
//!
//! # Example
//!
//! ```
//! use rppy::models::elastic::moduli::{ModuliPair, youngs};
//! use uom::si::{
//!     f64::{Pressure, Ratio},
//!     pressure::gigapascal,
//!     ratio::ratio,
//! };
//!
//! let e = youngs(ModuliPair::PoissonShear {
//!     poisson: Ratio::new::<ratio>(0.3),
//!     shear: Pressure::new::<gigapascal>(26.92),
//! })?;
//!
//! assert!((e.get::<gigapascal>() - 70.0).abs() < 0.01);
//! # Ok::<(), rppy::models::elastic::moduli::ModuliError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    ElasticModuli, ModuliError, ModuliInput, ModuliPair, Modulus, bulk, lame, poissons, shear,
    youngs,
};

use twine_core::Model;

/// Elastic moduli conversion as a [`Model`].
///
/// Resolves all five moduli of the solid described by the input pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuliConverter;

impl Model for ModuliConverter {
    type Input = ModuliPair;
    type Output = ElasticModuli;
    type Error = ModuliError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        ElasticModuli::from_pair(*input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Pressure, pressure::gigapascal};

    #[test]
    fn model_resolves_all_moduli() {
        let solid = ModuliConverter
            .call(&ModuliPair::BulkLame {
                bulk: Pressure::new::<gigapascal>(58.33),
                lame: Pressure::new::<gigapascal>(40.38),
            })
            .unwrap();

        assert_relative_eq!(
            solid.shear.get::<gigapascal>(),
            26.925,
            max_relative = 1e-12
        );
        assert_eq!(solid.bulk, Pressure::new::<gigapascal>(58.33));
    }
}
