use uom::si::f64::Velocity;

use crate::support::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};

use super::SnellError;

/// An elastic half-space described by its wave velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    vp: Constrained<Velocity, StrictlyPositive>,
    vs: Constrained<Velocity, NonNegative>,
}

impl Medium {
    /// Creates a medium with compressional velocity `vp` and shear velocity
    /// `vs`.
    ///
    /// A zero `vs` describes a fluid.
    ///
    /// # Errors
    ///
    /// Returns [`SnellError::InvalidVelocity`] if `vp` isn't strictly
    /// positive, `vs` is negative, or either is infinite.
    pub fn new(vp: Velocity, vs: Velocity) -> Result<Self, SnellError> {
        Self::named(vp, vs, "vp", "vs")
    }

    pub(super) fn named(
        vp: Velocity,
        vs: Velocity,
        vp_name: &'static str,
        vs_name: &'static str,
    ) -> Result<Self, SnellError> {
        let vp = finite(vp).and_then(StrictlyPositive::new);
        let vs = finite(vs).and_then(NonNegative::new);
        Ok(Self {
            vp: vp.map_err(SnellError::invalid_velocity(vp_name))?,
            vs: vs.map_err(SnellError::invalid_velocity(vs_name))?,
        })
    }

    #[must_use]
    pub fn vp(&self) -> Velocity {
        *self.vp.as_ref()
    }

    #[must_use]
    pub fn vs(&self) -> Velocity {
        *self.vs.as_ref()
    }
}

fn finite(velocity: Velocity) -> Result<Velocity, ConstraintError> {
    if velocity.value.is_infinite() {
        Err(ConstraintError::Infinite)
    } else {
        Ok(velocity)
    }
}

/// A planar boundary between an upper (incident) and lower medium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interface {
    pub upper: Medium,
    pub lower: Medium,
}

impl Interface {
    /// Builds an interface from raw layer velocities.
    ///
    /// # Errors
    ///
    /// Returns [`SnellError::InvalidVelocity`] naming the offending velocity
    /// (`vp1`, `vs1`, `vp2` or `vs2`).
    pub fn from_velocities(
        vp1: Velocity,
        vp2: Velocity,
        vs1: Velocity,
        vs2: Velocity,
    ) -> Result<Self, SnellError> {
        Ok(Self {
            upper: Medium::named(vp1, vs1, "vp1", "vs1")?,
            lower: Medium::named(vp2, vs2, "vp2", "vs2")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::velocity::meter_per_second;

    fn mps(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    #[test]
    fn fluid_layer_is_allowed() {
        let water = Medium::new(mps(1500.0), mps(0.0)).unwrap();
        assert_eq!(water.vs(), mps(0.0));
    }

    #[test]
    fn names_the_bad_velocity() {
        let result = Interface::from_velocities(mps(2500.0), mps(-3800.0), mps(1725.0), mps(1900.0));
        assert_eq!(
            result,
            Err(SnellError::InvalidVelocity {
                parameter: "vp2",
                source: ConstraintError::Negative,
            })
        );

        let result = Interface::from_velocities(mps(2500.0), mps(3800.0), mps(f64::NAN), mps(1900.0));
        assert_eq!(
            result,
            Err(SnellError::InvalidVelocity {
                parameter: "vs1",
                source: ConstraintError::NotANumber,
            })
        );
    }

    #[test]
    fn zero_p_velocity_is_rejected() {
        assert_eq!(
            Medium::new(mps(0.0), mps(0.0)),
            Err(SnellError::InvalidVelocity {
                parameter: "vp",
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn infinite_velocities_are_rejected() {
        let result =
            Interface::from_velocities(mps(2500.0), mps(3800.0), mps(f64::INFINITY), mps(1900.0));
        assert_eq!(
            result,
            Err(SnellError::InvalidVelocity {
                parameter: "vs1",
                source: ConstraintError::Infinite,
            })
        );
        assert!(Medium::new(mps(f64::INFINITY), mps(0.0)).is_err());
    }
}
