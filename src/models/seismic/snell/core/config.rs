/// Tolerances for the Snell's law solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnellConfig {
    /// Distance of `p·v` from one within which a branch is treated as exactly
    /// critical and reported at π/2.
    ///
    /// Absorbs the rounding of `sin(asin(x))` when the incidence angle is
    /// itself computed as a critical angle.
    pub critical_tolerance: f64,
}

impl Default for SnellConfig {
    fn default() -> Self {
        Self {
            critical_tolerance: 1e-12,
        }
    }
}
