//! Plane-wave angles at a planar interface.
//!
//! The horizontal slowness (ray parameter) `p = sin(θ1)/Vp1` is conserved by
//! every wave the incident P wave generates. Each outgoing angle is then
//! `asin(p·v)` for the velocity `v` of its wave type and medium. When
//! `p·v > 1` the branch is past its critical angle and has no real angle.

mod angles;
mod config;
mod error;
mod medium;

pub use angles::{PartialSnellAngles, SnellAngles};
pub use config::SnellConfig;
pub use error::{Branch, SnellError};
pub use medium::{Interface, Medium};

use std::f64::consts::FRAC_PI_2;

use tracing::debug;
use uom::si::{
    angle::radian,
    f64::{Angle, Velocity},
    velocity::meter_per_second,
};

use crate::support::constraint::check_range;

/// Solves Snell's law, failing on the first post-critical branch.
///
/// # Errors
///
/// Returns [`SnellError::InvalidIncidence`] for an incidence angle outside
/// `[0, π/2)` and [`SnellError::BeyondCriticalAngle`] if any branch is past
/// its critical angle.
pub fn solve(
    config: &SnellConfig,
    interface: &Interface,
    incidence: Angle,
) -> Result<SnellAngles, SnellError> {
    let ray = Ray::new(config, interface, incidence)?;
    Ok(SnellAngles {
        transmitted_p: ray.angle(Branch::TransmittedP, interface.lower.vp())?,
        reflected_p: incidence,
        reflected_s: ray.angle(Branch::ReflectedS, interface.upper.vs())?,
        transmitted_s: ray.angle(Branch::TransmittedS, interface.lower.vs())?,
        ray_parameter: ray.p,
    })
}

/// Solves Snell's law, reporting post-critical branches as `None`.
///
/// # Errors
///
/// Returns [`SnellError::InvalidIncidence`] for an incidence angle outside
/// `[0, π/2)`.
pub fn solve_partial(
    config: &SnellConfig,
    interface: &Interface,
    incidence: Angle,
) -> Result<PartialSnellAngles, SnellError> {
    let ray = Ray::new(config, interface, incidence)?;
    Ok(PartialSnellAngles {
        transmitted_p: ray.evanescent(Branch::TransmittedP, interface.lower.vp()),
        reflected_p: incidence,
        reflected_s: ray.evanescent(Branch::ReflectedS, interface.upper.vs()),
        transmitted_s: ray.evanescent(Branch::TransmittedS, interface.lower.vs()),
        ray_parameter: ray.p,
    })
}

/// Incidence angle at which a wave refracted into `v_refracted` grazes the
/// interface.
///
/// Returns `None` unless `v_refracted` is faster than `v_incident`, since a
/// slower medium bends every ray toward the normal.
#[must_use]
pub fn critical_angle(v_incident: Velocity, v_refracted: Velocity) -> Option<Angle> {
    let v1 = v_incident.get::<meter_per_second>();
    let v2 = v_refracted.get::<meter_per_second>();
    (v1 > 0.0 && v2 > v1).then(|| Angle::new::<radian>((v1 / v2).asin()))
}

/// A ray with a fixed horizontal slowness.
struct Ray {
    /// Ray parameter, s/m.
    p: f64,
    tolerance: f64,
}

impl Ray {
    fn new(
        config: &SnellConfig,
        interface: &Interface,
        incidence: Angle,
    ) -> Result<Self, SnellError> {
        let theta = incidence.get::<radian>();
        check_range(theta, 0.0, FRAC_PI_2, true)
            .map_err(|source| SnellError::InvalidIncidence { source })?;

        Ok(Self {
            p: theta.sin() / interface.upper.vp().get::<meter_per_second>(),
            tolerance: config.critical_tolerance,
        })
    }

    fn angle(&self, branch: Branch, velocity: Velocity) -> Result<Angle, SnellError> {
        let sine = self.p * velocity.get::<meter_per_second>();

        if (sine - 1.0).abs() <= self.tolerance {
            debug!(%branch, sine, "branch at exactly critical incidence");
            return Ok(Angle::new::<radian>(FRAC_PI_2));
        }
        if sine > 1.0 {
            return Err(SnellError::BeyondCriticalAngle { branch, sine });
        }

        Ok(Angle::new::<radian>(sine.asin()))
    }

    fn evanescent(&self, branch: Branch, velocity: Velocity) -> Option<Angle> {
        match self.angle(branch, velocity) {
            Ok(angle) => Some(angle),
            Err(error) => {
                debug!(%error, "branch is evanescent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::angle::degree;

    use crate::support::constraint::ConstraintError;

    fn mps(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    fn interface(vp1: f64, vp2: f64, vs1: f64, vs2: f64) -> Interface {
        Interface::from_velocities(mps(vp1), mps(vp2), mps(vs1), mps(vs2)).unwrap()
    }

    #[test]
    fn sandstone_over_limestone() {
        let angles = solve(
            &SnellConfig::default(),
            &interface(2500.0, 3800.0, 1725.0, 1900.0),
            Angle::new::<degree>(30.0),
        )
        .unwrap();

        assert_abs_diff_eq!(angles.transmitted_p.get::<degree>(), 49.46, epsilon = 0.01);
        assert_abs_diff_eq!(angles.reflected_s.get::<degree>(), 20.18, epsilon = 0.01);
        assert_abs_diff_eq!(angles.transmitted_s.get::<degree>(), 22.33, epsilon = 0.01);
        assert_relative_eq!(angles.reflected_p.get::<degree>(), 30.0, max_relative = 1e-12);
        assert_relative_eq!(angles.ray_parameter, 0.5 / 2500.0, max_relative = 1e-12);
    }

    #[test]
    fn normal_incidence_is_undeflected() {
        let angles = solve(
            &SnellConfig::default(),
            &interface(2500.0, 3800.0, 1725.0, 1900.0),
            Angle::new::<radian>(0.0),
        )
        .unwrap();
        assert_eq!(angles.transmitted_p.get::<radian>(), 0.0);
        assert_eq!(angles.ray_parameter, 0.0);
    }

    #[test]
    fn exactly_critical_is_a_right_angle() {
        let layers = interface(2000.0, 4000.0, 1000.0, 2000.0);
        let theta = critical_angle(mps(2000.0), mps(4000.0)).unwrap();
        assert_relative_eq!(theta.get::<degree>(), 30.0, max_relative = 1e-12);

        let angles = solve(&SnellConfig::default(), &layers, theta).unwrap();
        assert_eq!(angles.transmitted_p.get::<radian>(), FRAC_PI_2);
        assert!(!angles.transmitted_s.get::<radian>().is_nan());
    }

    #[test]
    fn post_critical_is_an_error() {
        let result = solve(
            &SnellConfig::default(),
            &interface(2500.0, 3800.0, 1725.0, 1900.0),
            Angle::new::<degree>(60.0),
        );
        match result {
            Err(SnellError::BeyondCriticalAngle { branch, sine }) => {
                assert_eq!(branch, Branch::TransmittedP);
                assert_relative_eq!(
                    sine,
                    60f64.to_radians().sin() * 3800.0 / 2500.0,
                    max_relative = 1e-12
                );
            }
            other => panic!("expected a post-critical error, got {other:?}"),
        }
    }

    #[test]
    fn partial_keeps_sub_critical_branches() {
        let angles = solve_partial(
            &SnellConfig::default(),
            &interface(2500.0, 3800.0, 1725.0, 1900.0),
            Angle::new::<degree>(60.0),
        )
        .unwrap();

        assert!(angles.transmitted_p.is_none());
        assert!(angles.reflected_s.is_some());
        assert!(angles.transmitted_s.is_some());
        assert!(angles.complete().is_none());
    }

    #[test]
    fn partial_matches_strict_below_critical() {
        let layers = interface(2500.0, 3800.0, 1725.0, 1900.0);
        let theta = Angle::new::<degree>(30.0);
        let config = SnellConfig::default();

        let strict = solve(&config, &layers, theta).unwrap();
        let partial = solve_partial(&config, &layers, theta).unwrap();
        assert_eq!(partial.complete(), Some(strict));
    }

    #[test]
    fn zero_tolerance_disables_clamping() {
        let config = SnellConfig {
            critical_tolerance: 0.0,
        };
        let layers = interface(2000.0, 4000.0, 1000.0, 2000.0);
        // sin(30°) rounds just below one half, so p·Vp2 lands a hair under 1.
        let angles = solve(&config, &layers, Angle::new::<degree>(30.0)).unwrap();
        assert!(angles.transmitted_p.get::<radian>() < FRAC_PI_2);
    }

    #[test]
    fn rejects_grazing_and_negative_incidence() {
        let layers = interface(2500.0, 3800.0, 1725.0, 1900.0);
        let config = SnellConfig::default();

        assert_eq!(
            solve(&config, &layers, Angle::new::<radian>(FRAC_PI_2)),
            Err(SnellError::InvalidIncidence {
                source: ConstraintError::AboveMaximum
            })
        );
        assert_eq!(
            solve(&config, &layers, Angle::new::<degree>(-1.0)),
            Err(SnellError::InvalidIncidence {
                source: ConstraintError::BelowMinimum
            })
        );
    }

    #[test]
    fn no_critical_angle_into_slower_rock() {
        assert!(critical_angle(mps(3800.0), mps(2500.0)).is_none());
        assert!(critical_angle(mps(2500.0), mps(2500.0)).is_none());
    }
}
