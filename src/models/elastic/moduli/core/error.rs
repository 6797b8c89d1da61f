use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Modulus;

/// Errors that can occur while converting elastic moduli.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModuliError {
    /// Fewer than two moduli were supplied.
    #[error("two moduli are required, got {supplied}")]
    InsufficientInput { supplied: usize },

    /// More than two moduli were supplied.
    #[error("exactly two moduli are required, got {supplied}")]
    AmbiguousInput { supplied: usize },

    /// A supplied modulus is out of range.
    #[error("invalid {modulus}")]
    InvalidInput {
        modulus: Modulus,
        #[source]
        source: ConstraintError,
    },

    /// The supplied pair describes no stable isotropic solid.
    ///
    /// Raised when a closed form divides by zero or the resolved moduli
    /// violate `u > 0`, `K > 0` or `-1 < v < 0.5`.
    #[error("not a physical solid: {context}")]
    NotPhysical { context: String },
}

impl ModuliError {
    pub(super) fn invalid(modulus: Modulus) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { modulus, source }
    }

    pub(super) fn not_physical(context: impl Into<String>) -> Self {
        Self::NotPhysical {
            context: context.into(),
        }
    }
}
