//! Which two moduli describe a solid.

use std::fmt;

use uom::si::{f64::Ratio, pressure::pascal, ratio::ratio};

use crate::support::{
    constraint::{Constraint, ConstraintError, StrictlyPositive, check_range},
    units::ElasticModulus,
};

use super::ModuliError;

/// One of the five isotropic elastic moduli.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modulus {
    /// Young's modulus `E`.
    Youngs,
    /// Poisson's ratio `v`.
    Poisson,
    /// Shear modulus `u`.
    Shear,
    /// Bulk modulus `K`.
    Bulk,
    /// Lamé's first parameter `L`.
    Lame,
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Modulus::Youngs => "Young's modulus E",
            Modulus::Poisson => "Poisson's ratio v",
            Modulus::Shear => "shear modulus u",
            Modulus::Bulk => "bulk modulus K",
            Modulus::Lame => "Lamé parameter L",
        })
    }
}

/// Any two of `{E, v, u, K, L}`, which together fix an isotropic solid.
///
/// Each unordered pair is its own variant, so a conversion can never be
/// asked with too few or too many moduli.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModuliPair {
    YoungsPoisson {
        youngs: ElasticModulus,
        poisson: Ratio,
    },
    YoungsShear {
        youngs: ElasticModulus,
        shear: ElasticModulus,
    },
    YoungsBulk {
        youngs: ElasticModulus,
        bulk: ElasticModulus,
    },
    YoungsLame {
        youngs: ElasticModulus,
        lame: ElasticModulus,
    },
    PoissonShear {
        poisson: Ratio,
        shear: ElasticModulus,
    },
    PoissonBulk {
        poisson: Ratio,
        bulk: ElasticModulus,
    },
    PoissonLame {
        poisson: Ratio,
        lame: ElasticModulus,
    },
    ShearBulk {
        shear: ElasticModulus,
        bulk: ElasticModulus,
    },
    ShearLame {
        shear: ElasticModulus,
        lame: ElasticModulus,
    },
    BulkLame {
        bulk: ElasticModulus,
        lame: ElasticModulus,
    },
}

impl ModuliPair {
    /// Reduces the pair to Lamé's parameters `(L, u)`, in pascals.
    ///
    /// # Errors
    ///
    /// Returns [`ModuliError::InvalidInput`] for an out-of-range supplied
    /// value and [`ModuliError::NotPhysical`] when the closed form has a zero
    /// or negative denominator or radicand.
    pub(super) fn lame_and_shear(&self) -> Result<(f64, f64), ModuliError> {
        match *self {
            Self::YoungsPoisson { youngs, poisson } => {
                let (e, v) = (positive(youngs, Modulus::Youngs)?, poisson_ratio(poisson)?);
                Ok((e * v / ((1.0 + v) * (1.0 - 2.0 * v)), e / (2.0 * (1.0 + v))))
            }
            Self::YoungsShear { youngs, shear } => {
                let (e, u) = (positive(youngs, Modulus::Youngs)?, positive(shear, Modulus::Shear)?);
                let lame = u * (e - 2.0 * u) / nonzero(3.0 * u - e, "3u - E")?;
                Ok((lame, u))
            }
            Self::YoungsBulk { youngs, bulk } => {
                let (e, k) = (positive(youngs, Modulus::Youngs)?, positive(bulk, Modulus::Bulk)?);
                let denominator = nonzero(9.0 * k - e, "9K - E")?;
                Ok((3.0 * k * (3.0 * k - e) / denominator, 3.0 * k * e / denominator))
            }
            Self::YoungsLame { youngs, lame } => {
                let (e, l) = (positive(youngs, Modulus::Youngs)?, lame_parameter(lame)?);
                let root = (e * e + 9.0 * l * l + 2.0 * e * l).sqrt();
                Ok((l, (e - 3.0 * l + root) / 4.0))
            }
            Self::PoissonShear { poisson, shear } => {
                let (v, u) = (poisson_ratio(poisson)?, positive(shear, Modulus::Shear)?);
                Ok((2.0 * u * v / (1.0 - 2.0 * v), u))
            }
            Self::PoissonBulk { poisson, bulk } => {
                let (v, k) = (poisson_ratio(poisson)?, positive(bulk, Modulus::Bulk)?);
                Ok((
                    3.0 * k * v / (1.0 + v),
                    3.0 * k * (1.0 - 2.0 * v) / (2.0 * (1.0 + v)),
                ))
            }
            Self::PoissonLame { poisson, lame } => {
                let (v, l) = (poisson_ratio(poisson)?, lame_parameter(lame)?);
                Ok((l, l * (1.0 - 2.0 * v) / nonzero(2.0 * v, "2v")?))
            }
            Self::ShearBulk { shear, bulk } => {
                let (u, k) = (positive(shear, Modulus::Shear)?, positive(bulk, Modulus::Bulk)?);
                Ok((k - 2.0 * u / 3.0, u))
            }
            Self::ShearLame { shear, lame } => {
                Ok((lame_parameter(lame)?, positive(shear, Modulus::Shear)?))
            }
            Self::BulkLame { bulk, lame } => {
                let (k, l) = (positive(bulk, Modulus::Bulk)?, lame_parameter(lame)?);
                Ok((l, 1.5 * (k - l)))
            }
        }
    }
}

/// Keyword-style moduli input: any subset of the five moduli.
///
/// Converts to a [`ModuliPair`] only when exactly two are present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModuliInput {
    pub youngs: Option<ElasticModulus>,
    pub poisson: Option<Ratio>,
    pub shear: Option<ElasticModulus>,
    pub bulk: Option<ElasticModulus>,
    pub lame: Option<ElasticModulus>,
}

impl TryFrom<ModuliInput> for ModuliPair {
    type Error = ModuliError;

    fn try_from(input: ModuliInput) -> Result<Self, Self::Error> {
        let ModuliInput {
            youngs,
            poisson,
            shear,
            bulk,
            lame,
        } = input;

        match (youngs, poisson, shear, bulk, lame) {
            (Some(youngs), Some(poisson), None, None, None) => {
                Ok(Self::YoungsPoisson { youngs, poisson })
            }
            (Some(youngs), None, Some(shear), None, None) => Ok(Self::YoungsShear { youngs, shear }),
            (Some(youngs), None, None, Some(bulk), None) => Ok(Self::YoungsBulk { youngs, bulk }),
            (Some(youngs), None, None, None, Some(lame)) => Ok(Self::YoungsLame { youngs, lame }),
            (None, Some(poisson), Some(shear), None, None) => {
                Ok(Self::PoissonShear { poisson, shear })
            }
            (None, Some(poisson), None, Some(bulk), None) => Ok(Self::PoissonBulk { poisson, bulk }),
            (None, Some(poisson), None, None, Some(lame)) => Ok(Self::PoissonLame { poisson, lame }),
            (None, None, Some(shear), Some(bulk), None) => Ok(Self::ShearBulk { shear, bulk }),
            (None, None, Some(shear), None, Some(lame)) => Ok(Self::ShearLame { shear, lame }),
            (None, None, None, Some(bulk), Some(lame)) => Ok(Self::BulkLame { bulk, lame }),
            _ => {
                let supplied = [
                    youngs.is_some(),
                    poisson.is_some(),
                    shear.is_some(),
                    bulk.is_some(),
                    lame.is_some(),
                ]
                .into_iter()
                .filter(|&present| present)
                .count();

                if supplied < 2 {
                    Err(ModuliError::InsufficientInput { supplied })
                } else {
                    Err(ModuliError::AmbiguousInput { supplied })
                }
            }
        }
    }
}

fn positive(value: ElasticModulus, modulus: Modulus) -> Result<f64, ModuliError> {
    let value = value.get::<pascal>();
    StrictlyPositive::check(&value).map_err(ModuliError::invalid(modulus))?;
    Ok(value)
}

fn poisson_ratio(value: Ratio) -> Result<f64, ModuliError> {
    let v = value.get::<ratio>();
    check_range(v, -1.0, 0.5, false).map_err(ModuliError::invalid(Modulus::Poisson))?;
    Ok(v)
}

/// Lamé's first parameter may take either sign.
fn lame_parameter(value: ElasticModulus) -> Result<f64, ModuliError> {
    let l = value.get::<pascal>();
    if l.is_nan() {
        return Err(ModuliError::InvalidInput {
            modulus: Modulus::Lame,
            source: ConstraintError::NotANumber,
        });
    }
    Ok(l)
}

fn nonzero(denominator: f64, what: &str) -> Result<f64, ModuliError> {
    if denominator == 0.0 {
        Err(ModuliError::not_physical(format!("{what} is zero")))
    } else {
        Ok(denominator)
    }
}
