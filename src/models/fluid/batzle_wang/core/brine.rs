//! Brine density and velocity (Batzle & Wang 1992, eqs. 27-29).

use uom::si::{
    f64::{MassDensity, Velocity},
    mass_density::gram_per_cubic_centimeter,
    velocity::meter_per_second,
};

use super::{FluidError, FluidProperties};

/// Pure-water velocity coefficients `w[i][j]` for `T^i · P^j`.
const W: [[f64; 4]; 5] = [
    [1402.85, 1.524, 3.437e-3, -1.197e-5],
    [4.871, -0.0111, 1.739e-4, -1.628e-6],
    [-0.04783, 2.747e-4, -2.135e-6, 1.237e-8],
    [1.487e-4, -6.503e-7, -1.455e-8, 1.327e-10],
    [-2.197e-7, 7.987e-10, 5.230e-11, -4.614e-13],
];

/// Evaluates brine at pressure `p` (MPa), temperature `t` (°C) and salt
/// mass fraction `s`.
pub(super) fn evaluate(p: f64, t: f64, s: f64) -> Result<FluidProperties, FluidError> {
    let density = FluidError::check_positive(density(p, t, s), "brine density")?;
    let velocity = FluidError::check_positive(velocity(p, t, s), "brine velocity")?;

    Ok(FluidProperties::from_density_and_velocity(
        MassDensity::new::<gram_per_cubic_centimeter>(density),
        Velocity::new::<meter_per_second>(velocity),
    ))
}

/// Pure water density in g/cm³.
fn water_density(p: f64, t: f64) -> f64 {
    1.0 + 1e-6
        * (-80.0 * t - 3.3 * t.powi(2) + 0.00175 * t.powi(3) + 489.0 * p - 2.0 * t * p
            + 0.016 * t.powi(2) * p
            - 1.3e-5 * t.powi(3) * p
            - 0.333 * p.powi(2)
            - 0.002 * t * p.powi(2))
}

fn density(p: f64, t: f64, s: f64) -> f64 {
    water_density(p, t)
        + s * (0.668
            + 0.44 * s
            + 1e-6 * (300.0 * p - 2400.0 * p * s + t * (80.0 + 3.0 * t - 3300.0 * s - 13.0 * p + 47.0 * p * s)))
}

/// Pure water velocity in m/s.
fn water_velocity(p: f64, t: f64) -> f64 {
    W.iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, w)| w * t.powi(i as i32) * p.powi(j as i32))
                .sum::<f64>()
        })
        .sum()
}

fn velocity(p: f64, t: f64, s: f64) -> f64 {
    water_velocity(p, t)
        + s * (1170.0 - 9.6 * t + 0.055 * t.powi(2) - 8.5e-5 * t.powi(3) + 2.6 * p
            - 0.0029 * t * p
            - 0.0476 * p.powi(2))
        + s.powf(1.5) * (780.0 - 10.0 * p + 0.16 * p.powi(2))
        - 1820.0 * s.powi(2)
}
