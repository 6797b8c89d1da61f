//! Oil density and velocity (Batzle & Wang 1992, eqs. 18-24).
//!
//! Live oil is handled through a pseudo-density `ρ'` that accounts for the
//! expansion caused by dissolved gas. The velocity correlation is evaluated at
//! `ρ'` while the reported density is the gas-saturated density `ρG`
//! corrected to in-situ pressure and temperature.

use uom::si::{
    f64::{MassDensity, Velocity},
    mass_density::gram_per_cubic_centimeter,
    velocity::meter_per_second,
};

use super::{FluidError, FluidProperties};

/// Live oil inputs in correlation units.
#[derive(Debug, Clone, Copy)]
pub(super) struct LiveOil {
    /// Gas gravity.
    pub g: f64,
    /// Reference density at 15.6 °C and 1 atm, g/cm³.
    pub rho0: f64,
    /// Gas-oil ratio, litres per litre.
    pub rg: f64,
}

/// Evaluates live oil at pressure `p` (MPa) and temperature `t` (°C).
pub(super) fn evaluate_live(p: f64, t: f64, oil: LiveOil) -> Result<FluidProperties, FluidError> {
    let LiveOil { g, rho0, rg } = oil;

    let b0 = FluidError::check_positive(formation_volume_factor(t, g, rho0, rg), "oil B0")?;
    let pseudo_density = rho0 / b0 / (1.0 + 0.001 * rg);
    let saturated_density = (rho0 + 0.0012 * g * rg) / b0;

    let density = FluidError::check_positive(
        in_situ_density(saturated_density, p, t),
        "live oil density",
    )?;
    let velocity = FluidError::check_positive(
        2096.0 * (pseudo_density / (2.6 - pseudo_density)).sqrt() - 3.7 * t
            + 4.64 * p
            + 0.0115 * (4.12 * (1.08 / pseudo_density - 1.0).sqrt() - 1.0) * t * p,
        "live oil velocity",
    )?;

    Ok(properties(density, velocity))
}

/// Evaluates gas-free oil at pressure `p` (MPa) and temperature `t` (°C).
pub(super) fn evaluate_dead(
    p: f64,
    t: f64,
    api: f64,
    rho0: f64,
) -> Result<FluidProperties, FluidError> {
    let density = FluidError::check_positive(in_situ_density(rho0, p, t), "dead oil density")?;
    let velocity = FluidError::check_positive(
        15450.0 / (77.1 + api).sqrt() - 3.7 * t
            + 4.64 * p
            + 0.0115 * (0.36 * api.sqrt() - 1.0) * t * p,
        "dead oil velocity",
    )?;

    Ok(properties(density, velocity))
}

/// Maximum gas-oil ratio (litres per litre) that oil can hold in solution.
pub(super) fn max_gas_oil_ratio(p: f64, t: f64, g: f64, api: f64) -> f64 {
    2.03 * g * (p * (0.02878 * api - 0.00377 * t).exp()).powf(1.205)
}

/// Formation volume factor `B0`.
fn formation_volume_factor(t: f64, g: f64, rho0: f64, rg: f64) -> f64 {
    0.972 + 0.00038 * (2.4 * rg * (g / rho0).sqrt() + t + 17.8).powf(1.175)
}

/// Applies the pressure (eq. 18) then temperature (eq. 19) corrections to a
/// surface density.
fn in_situ_density(rho: f64, p: f64, t: f64) -> f64 {
    let pressure_corrected =
        rho + (0.00277 * p - 1.71e-7 * p.powi(3)) * (rho - 1.15).powi(2) + 3.49e-4 * p;
    pressure_corrected / (0.972 + 3.81e-4 * (t + 17.78).powf(1.175))
}

fn properties(density: f64, velocity: f64) -> FluidProperties {
    FluidProperties::from_density_and_velocity(
        MassDensity::new::<gram_per_cubic_centimeter>(density),
        Velocity::new::<meter_per_second>(velocity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn live(g: f64, api: f64, rg: f64) -> LiveOil {
        LiveOil {
            g,
            rho0: 141.5 / (api + 131.5),
            rg,
        }
    }

    #[test]
    fn dissolved_gas_lightens_and_slows_oil() {
        let dead = evaluate_live(5.0, 25.0, live(0.6, 21.0, 0.0)).unwrap();
        let gassy = evaluate_live(5.0, 25.0, live(0.6, 21.0, 50.0)).unwrap();
        assert!(gassy.density < dead.density);
        assert!(gassy.velocity < dead.velocity);
    }

    #[test]
    fn heating_lowers_velocity() {
        let cool = evaluate_dead(10.0, 20.0, 30.0, 141.5 / 161.5).unwrap();
        let hot = evaluate_dead(10.0, 120.0, 30.0, 141.5 / 161.5).unwrap();
        assert!(hot.velocity < cool.velocity);
        assert!(hot.density < cool.density);
    }

    #[test]
    fn saturation_limit_grows_with_pressure() {
        let shallow = max_gas_oil_ratio(5.0, 25.0, 0.6, 21.0);
        let deep = max_gas_oil_ratio(30.0, 25.0, 0.6, 21.0);
        assert_abs_diff_eq!(shallow, 15.6628, epsilon = 1e-3);
        assert!(deep > shallow);
    }

    #[test]
    fn pseudo_density_pole_is_out_of_domain() {
        // A 2.6 g/cm³ "oil" puts the velocity correlation on its pole.
        let oil = LiveOil {
            g: 0.6,
            rho0: 2.6,
            rg: 0.0,
        };
        assert!(matches!(
            evaluate_live(5.0, 25.0, oil),
            Err(FluidError::OutOfDomain { .. })
        ));
    }
}
