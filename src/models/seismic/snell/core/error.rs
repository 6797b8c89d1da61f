use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// The converted or transmitted wave a Snell's law angle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// P wave transmitted into the lower medium.
    TransmittedP,
    /// S wave reflected back into the upper medium.
    ReflectedS,
    /// S wave transmitted into the lower medium.
    TransmittedS,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Branch::TransmittedP => "transmitted P wave",
            Branch::ReflectedS => "reflected S wave",
            Branch::TransmittedS => "transmitted S wave",
        })
    }
}

/// Errors that can occur while solving Snell's law.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnellError {
    /// A layer velocity is out of range.
    ///
    /// P-wave velocities must be strictly positive; S-wave velocities may be
    /// zero for a fluid layer.
    #[error("invalid velocity {parameter}")]
    InvalidVelocity {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The incidence angle is outside `[0, π/2)`.
    #[error("invalid incidence angle")]
    InvalidIncidence {
        #[source]
        source: ConstraintError,
    },

    /// The incidence is past the critical angle for `branch`.
    ///
    /// `sine` is the value `p·v > 1` whose arcsine has no real solution.
    #[error("{branch} is beyond the critical angle (sin = {sine})")]
    BeyondCriticalAngle { branch: Branch, sine: f64 },
}

impl SnellError {
    pub(super) fn invalid_velocity(
        parameter: &'static str,
    ) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidVelocity { parameter, source }
    }
}
