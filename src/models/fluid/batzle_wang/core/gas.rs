//! Gas density and adiabatic bulk modulus (Batzle & Wang 1992, eqs. 9-11).
//!
//! The gas is described through its pseudo-reduced pressure `Pr` and
//! temperature `Tr`. The compressibility factor `Z(Pr, Tr)` is an empirical
//! fit with an exponential correction term `E`, and the bulk modulus uses the
//! analytic derivative `∂Z/∂Pr` at constant `Tr`.

use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::gram_per_cubic_centimeter,
    pressure::megapascal,
};

use super::{FluidError, FluidProperties};

/// Universal gas constant, J/(mol·K).
const GAS_CONSTANT: f64 = 8.31441;

/// Molar mass of air used to scale gas gravity, g/mol.
const AIR_MOLAR_MASS: f64 = 28.8;

/// Offset between Celsius and Kelvin.
const ZERO_CELSIUS: f64 = 273.15;

/// Evaluates gas of gravity `g` at pressure `p` (MPa) and temperature `t` (°C).
pub(super) fn evaluate(p: f64, t: f64, g: f64) -> Result<FluidProperties, FluidError> {
    let ta = t + ZERO_CELSIUS;
    let pr = FluidError::check_positive(p / (4.892 - 0.4048 * g), "pseudo-reduced pressure")?;
    let tr = FluidError::check_positive(ta / (94.72 + 170.75 * g), "pseudo-reduced temperature")?;

    let z = Compressibility::new(tr);
    let z_value = FluidError::check_positive(z.value(pr), "compressibility factor Z")?;

    let density = FluidError::check_positive(
        AIR_MOLAR_MASS * g * p / (z_value * GAS_CONSTANT * ta),
        "gas density",
    )?;

    let stiffening = FluidError::check_positive(
        1.0 - pr / z_value * z.derivative(pr),
        "gas compressibility term",
    )?;
    let bulk_modulus =
        FluidError::check_positive(p * heat_capacity_ratio(pr) / stiffening, "gas bulk modulus")?;

    Ok(FluidProperties::from_density_and_bulk_modulus(
        MassDensity::new::<gram_per_cubic_centimeter>(density),
        Pressure::new::<megapascal>(bulk_modulus),
    ))
}

/// Coefficients of `Z = a·Pr + b + E(Pr)` at a fixed reduced temperature.
#[derive(Debug, Clone, Copy)]
struct Compressibility {
    a: f64,
    b: f64,
    /// Amplitude of the exponential term, `0.109·(3.85 − Tr)²`.
    c: f64,
    /// Decay rate of the exponential term.
    decay: f64,
}

impl Compressibility {
    fn new(tr: f64) -> Self {
        Self {
            a: 0.03 + 0.00527 * (3.5 - tr).powi(3),
            b: 0.642 * tr - 0.007 * tr.powi(4) - 0.52,
            c: 0.109 * (3.85 - tr).powi(2),
            decay: (0.45 + 8.0 * (0.56 - 1.0 / tr).powi(2)) / tr,
        }
    }

    fn exponential(&self, pr: f64) -> f64 {
        self.c * (-self.decay * pr.powf(1.2)).exp()
    }

    fn value(&self, pr: f64) -> f64 {
        self.a * pr + self.b + self.exponential(pr)
    }

    /// `∂Z/∂Pr` at constant `Tr`.
    fn derivative(&self, pr: f64) -> f64 {
        self.a - 1.2 * self.decay * pr.powf(0.2) * self.exponential(pr)
    }
}

/// Ratio of heat capacities `γ0` as a function of reduced pressure.
fn heat_capacity_ratio(pr: f64) -> f64 {
    0.85 + 5.6 / (pr + 2.0) + 27.1 / (pr + 3.5).powi(2) - 8.7 * (-0.65 * (pr + 1.0)).exp()
}
