use uom::si::{
    f64::{MassDensity, Pressure, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

/// Acoustic properties of a pore fluid at a given pressure and temperature.
///
/// The correlations yield density plus either velocity (brine, oil) or bulk
/// modulus (gas). The third property follows from `K = ρ·Vp²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Density, conventionally reported in g/cm³.
    pub density: MassDensity,

    /// Compressional wave velocity, conventionally reported in m/s.
    pub velocity: Velocity,

    /// Adiabatic bulk modulus.
    ///
    /// Conventionally reported in GPa for liquids and MPa for gas.
    pub bulk_modulus: Pressure,
}

impl FluidProperties {
    /// Builds properties from density and velocity, with `K = ρ·Vp²`.
    #[must_use]
    pub fn from_density_and_velocity(density: MassDensity, velocity: Velocity) -> Self {
        let rho = density.get::<kilogram_per_cubic_meter>();
        let vp = velocity.get::<meter_per_second>();
        Self {
            density,
            velocity,
            bulk_modulus: Pressure::new::<pascal>(rho * vp * vp),
        }
    }

    /// Builds properties from density and bulk modulus, with `Vp = √(K/ρ)`.
    #[must_use]
    pub fn from_density_and_bulk_modulus(density: MassDensity, bulk_modulus: Pressure) -> Self {
        let rho = density.get::<kilogram_per_cubic_meter>();
        let k = bulk_modulus.get::<pascal>();
        Self {
            density,
            velocity: Velocity::new::<meter_per_second>((k / rho).sqrt()),
            bulk_modulus,
        }
    }
}
