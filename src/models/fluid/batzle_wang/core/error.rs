use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Phase;

/// Errors that can occur while evaluating Batzle-Wang fluid properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FluidError {
    /// The phase name is not one of `brine`, `oil` or `gas`.
    #[error("invalid phase {phase:?}: expected brine, oil, or gas")]
    InvalidPhase { phase: String },

    /// A parameter required by the selected phase was not supplied.
    #[error("missing parameter `{parameter}` for {phase}")]
    MissingParameter {
        phase: Phase,
        parameter: &'static str,
    },

    /// A supplied parameter violates its physical bounds.
    #[error("invalid {parameter}")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The correlation produced a non-real or non-physical intermediate.
    ///
    /// For example, a pseudo-density above the velocity correlation's pole
    /// or a non-positive gas compressibility factor.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },
}

impl FluidError {
    pub(crate) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }

    /// Passes `value` through if it is finite and strictly positive.
    pub(super) fn check_positive(value: f64, what: &str) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::OutOfDomain {
                context: format!("{what} = {value}"),
            })
        }
    }
}
