//! Snell's law at a planar interface between two elastic half-spaces.
//!
//! An incident P wave in the upper medium generates a reflected P wave, a
//! reflected S wave, a transmitted P wave and a transmitted S wave, all
//! sharing the incident ray parameter. This module solves for their angles.
//!
//! Post-critical incidence is handled in one of two ways:
//!
//! - [`snell`] returns [`SnellError::BeyondCriticalAngle`] naming the first
//!   branch with no real angle.
//! - [`snell_partial`] reports such branches as `None`.
//!
//! # Example
//!
//! ```
//! use rppy::models::seismic::snell::snell;
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Velocity},
//!     velocity::meter_per_second,
//! };
//!
//! let mps = |v| Velocity::new::<meter_per_second>(v);
//! let angles = snell(
//!     mps(2500.0),
//!     mps(3800.0),
//!     mps(1725.0),
//!     mps(1900.0),
//!     Angle::new::<degree>(30.0),
//! )?;
//!
//! assert!((angles.transmitted_p.get::<degree>() - 49.46).abs() < 0.01);
//! # Ok::<(), rppy::models::seismic::snell::SnellError>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Branch, Interface, Medium, PartialSnellAngles, SnellAngles, SnellConfig, SnellError,
    critical_angle,
};

use twine_core::Model;
use uom::si::f64::{Angle, Velocity};

/// Solves Snell's law for P-wave incidence from the upper medium.
///
/// `vp1`/`vs1` are the upper (incident) medium velocities, `vp2`/`vs2` the
/// lower medium velocities, and `theta1` the incidence angle in `[0, π/2)`.
///
/// # Errors
///
/// Returns [`SnellError::InvalidVelocity`] or [`SnellError::InvalidIncidence`]
/// for out-of-range inputs and [`SnellError::BeyondCriticalAngle`] if any
/// outgoing branch is post-critical.
pub fn snell(
    vp1: Velocity,
    vp2: Velocity,
    vs1: Velocity,
    vs2: Velocity,
    theta1: Angle,
) -> Result<SnellAngles, SnellError> {
    snell_with(&SnellConfig::default(), vp1, vp2, vs1, vs2, theta1)
}

/// Like [`snell`], with explicit solver configuration.
///
/// # Errors
///
/// See [`snell`].
pub fn snell_with(
    config: &SnellConfig,
    vp1: Velocity,
    vp2: Velocity,
    vs1: Velocity,
    vs2: Velocity,
    theta1: Angle,
) -> Result<SnellAngles, SnellError> {
    let interface = Interface::from_velocities(vp1, vp2, vs1, vs2)?;
    core::solve(config, &interface, theta1)
}

/// Solves Snell's law, reporting post-critical branches as `None`.
///
/// # Errors
///
/// Returns [`SnellError::InvalidVelocity`] or [`SnellError::InvalidIncidence`]
/// for out-of-range inputs.
pub fn snell_partial(
    vp1: Velocity,
    vp2: Velocity,
    vs1: Velocity,
    vs2: Velocity,
    theta1: Angle,
) -> Result<PartialSnellAngles, SnellError> {
    snell_partial_with(&SnellConfig::default(), vp1, vp2, vs1, vs2, theta1)
}

/// Like [`snell_partial`], with explicit solver configuration.
///
/// # Errors
///
/// See [`snell_partial`].
pub fn snell_partial_with(
    config: &SnellConfig,
    vp1: Velocity,
    vp2: Velocity,
    vs1: Velocity,
    vs2: Velocity,
    theta1: Angle,
) -> Result<PartialSnellAngles, SnellError> {
    let interface = Interface::from_velocities(vp1, vp2, vs1, vs2)?;
    core::solve_partial(config, &interface, theta1)
}

/// A P wave arriving at an interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    pub interface: Interface,
    pub angle: Angle,
}

/// Snell's law as a [`Model`].
///
/// Uses the strict post-critical policy of [`snell`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Snell {
    pub config: SnellConfig,
}

impl Model for Snell {
    type Input = Incidence;
    type Output = SnellAngles;
    type Error = SnellError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::solve(&self.config, &input.interface, input.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{angle::degree, velocity::meter_per_second};

    fn mps(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    #[test]
    fn model_matches_function() {
        let input = Incidence {
            interface: Interface::from_velocities(
                mps(2500.0),
                mps(3800.0),
                mps(1725.0),
                mps(1900.0),
            )
            .unwrap(),
            angle: Angle::new::<degree>(25.0),
        };

        let from_model = Snell::default().call(&input).unwrap();
        let from_fn = snell(
            mps(2500.0),
            mps(3800.0),
            mps(1725.0),
            mps(1900.0),
            input.angle,
        )
        .unwrap();

        assert_eq!(from_model, from_fn);
    }

    #[test]
    fn fluid_over_rock_has_no_reflected_shear() {
        let angles = snell(
            mps(1500.0),
            mps(3000.0),
            mps(0.0),
            mps(1500.0),
            Angle::new::<degree>(20.0),
        )
        .unwrap();
        assert_eq!(angles.reflected_s.get::<degree>(), 0.0);
    }

    #[test]
    fn velocity_errors_name_the_layer() {
        let result = snell_partial(
            mps(2500.0),
            mps(3800.0),
            mps(1725.0),
            mps(-1.0),
            Angle::new::<degree>(10.0),
        );
        assert!(matches!(
            result,
            Err(SnellError::InvalidVelocity {
                parameter: "vs2",
                ..
            })
        ));
    }

    #[test]
    fn infinite_shear_velocity_is_an_input_error() {
        let result = snell(
            mps(2500.0),
            mps(3800.0),
            mps(f64::INFINITY),
            mps(1900.0),
            Angle::new::<degree>(0.0),
        );
        assert!(matches!(
            result,
            Err(SnellError::InvalidVelocity {
                parameter: "vs1",
                ..
            })
        ));
    }
}
