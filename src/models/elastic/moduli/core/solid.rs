use uom::si::{
    f64::{MassDensity, Ratio, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::ElasticModulus,
};

use super::{ModuliError, ModuliPair};

/// A fully resolved isotropic elastic solid.
///
/// Instances returned by [`ElasticModuli::from_pair`] and
/// [`ElasticModuli::from_velocities`] satisfy `u > 0`, `K > 0` and
/// `-1 < v < 0.5`. The fields are public, so values built directly carry no
/// such guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticModuli {
    /// Young's modulus `E`.
    pub youngs: ElasticModulus,
    /// Poisson's ratio `v`.
    pub poisson: Ratio,
    /// Shear modulus `u`.
    pub shear: ElasticModulus,
    /// Bulk modulus `K`.
    pub bulk: ElasticModulus,
    /// Lamé's first parameter `L`.
    pub lame: ElasticModulus,
}

impl ElasticModuli {
    /// Resolves all five moduli from any two.
    ///
    /// Moduli supplied in `pair` are carried through unchanged; the others
    /// are derived via Lamé's parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ModuliError::InvalidInput`] for an out-of-range supplied
    /// modulus and [`ModuliError::NotPhysical`] if the pair describes no
    /// stable solid.
    pub fn from_pair(pair: ModuliPair) -> Result<Self, ModuliError> {
        let (lame, shear) = pair.lame_and_shear()?;
        let mut moduli = Self::from_lame(lame, shear)?;

        match pair {
            ModuliPair::YoungsPoisson { youngs, poisson } => {
                moduli.youngs = youngs;
                moduli.poisson = poisson;
            }
            ModuliPair::YoungsShear { youngs, shear } => {
                moduli.youngs = youngs;
                moduli.shear = shear;
            }
            ModuliPair::YoungsBulk { youngs, bulk } => {
                moduli.youngs = youngs;
                moduli.bulk = bulk;
            }
            ModuliPair::YoungsLame { youngs, lame } => {
                moduli.youngs = youngs;
                moduli.lame = lame;
            }
            ModuliPair::PoissonShear { poisson, shear } => {
                moduli.poisson = poisson;
                moduli.shear = shear;
            }
            ModuliPair::PoissonBulk { poisson, bulk } => {
                moduli.poisson = poisson;
                moduli.bulk = bulk;
            }
            ModuliPair::PoissonLame { poisson, lame } => {
                moduli.poisson = poisson;
                moduli.lame = lame;
            }
            ModuliPair::ShearBulk { shear, bulk } => {
                moduli.shear = shear;
                moduli.bulk = bulk;
            }
            ModuliPair::ShearLame { shear, lame } => {
                moduli.shear = shear;
                moduli.lame = lame;
            }
            ModuliPair::BulkLame { bulk, lame } => {
                moduli.bulk = bulk;
                moduli.lame = lame;
            }
        }

        Ok(moduli)
    }

    /// Resolves the moduli of a solid with P-wave velocity `vp`, S-wave
    /// velocity `vs` and density `density`.
    ///
    /// # Errors
    ///
    /// Returns [`ModuliError::NotPhysical`] if `vs` is zero (a fluid), if
    /// `density` isn't positive, or if `vp/vs` is too small for a stable
    /// solid.
    pub fn from_velocities(
        vp: Velocity,
        vs: Velocity,
        density: MassDensity,
    ) -> Result<Self, ModuliError> {
        let rho = density.get::<kilogram_per_cubic_meter>();
        StrictlyPositive::check(&rho)
            .map_err(|_| ModuliError::not_physical(format!("density = {rho} kg/m³")))?;

        let vp = vp.get::<meter_per_second>();
        let vs = vs.get::<meter_per_second>();
        let shear = rho * vs * vs;
        let p_wave = rho * vp * vp;

        Self::from_lame(p_wave - 2.0 * shear, shear)
    }

    /// P-wave (constrained) modulus `M = K + 4u/3`.
    #[must_use]
    pub fn p_wave_modulus(&self) -> ElasticModulus {
        self.bulk + self.shear * (4.0 / 3.0)
    }

    /// P- and S-wave velocities of the solid at `density`.
    ///
    /// # Errors
    ///
    /// Returns [`ModuliError::NotPhysical`] if `density` isn't positive.
    pub fn velocities(&self, density: MassDensity) -> Result<(Velocity, Velocity), ModuliError> {
        let rho = density.get::<kilogram_per_cubic_meter>();
        StrictlyPositive::check(&rho)
            .map_err(|_| ModuliError::not_physical(format!("density = {rho} kg/m³")))?;

        let vp = (self.p_wave_modulus().get::<pascal>() / rho).sqrt();
        let vs = (self.shear.get::<pascal>() / rho).sqrt();
        Ok((
            Velocity::new::<meter_per_second>(vp),
            Velocity::new::<meter_per_second>(vs),
        ))
    }

    /// Derives all five moduli from Lamé's parameters in pascals.
    fn from_lame(lame: f64, shear: f64) -> Result<Self, ModuliError> {
        let sum = lame + shear;
        if sum == 0.0 {
            return Err(ModuliError::not_physical("L + u is zero"));
        }

        let youngs = shear * (3.0 * lame + 2.0 * shear) / sum;
        let poisson = lame / (2.0 * sum);
        let bulk = lame + 2.0 * shear / 3.0;

        if !(shear.is_finite() && shear > 0.0) {
            return Err(ModuliError::not_physical(format!("u = {shear} Pa")));
        }
        if !(bulk.is_finite() && bulk > 0.0) {
            return Err(ModuliError::not_physical(format!("K = {bulk} Pa")));
        }
        if !(poisson > -1.0 && poisson < 0.5) {
            return Err(ModuliError::not_physical(format!("v = {poisson}")));
        }

        Ok(Self {
            youngs: ElasticModulus::new::<pascal>(youngs),
            poisson: Ratio::new::<ratio>(poisson),
            shear: ElasticModulus::new::<pascal>(shear),
            bulk: ElasticModulus::new::<pascal>(bulk),
            lame: ElasticModulus::new::<pascal>(lame),
        })
    }
}
