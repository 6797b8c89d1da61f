use uom::si::f64::Angle;

/// Angles of every plane wave leaving a sub-critical interface.
///
/// All angles are measured from the interface normal. A fluid layer
/// (`Vs = 0`) carries no shear wave, and its S-wave angle is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnellAngles {
    /// Transmitted P-wave angle `θ2`.
    pub transmitted_p: Angle,

    /// Reflected P-wave angle, equal to the incidence angle.
    pub reflected_p: Angle,

    /// Reflected (converted) S-wave angle `φ1`.
    pub reflected_s: Angle,

    /// Transmitted (converted) S-wave angle `φ2`.
    pub transmitted_s: Angle,

    /// Horizontal slowness `p = sin(θ1)/Vp1`, in seconds per metre.
    pub ray_parameter: f64,
}

/// Snell's law angles where post-critical branches are evanescent.
///
/// A `None` branch has no real propagation angle: its wave travels along the
/// interface and decays away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialSnellAngles {
    pub transmitted_p: Option<Angle>,
    pub reflected_p: Angle,
    pub reflected_s: Option<Angle>,
    pub transmitted_s: Option<Angle>,

    /// Horizontal slowness, in seconds per metre.
    pub ray_parameter: f64,
}

impl PartialSnellAngles {
    /// Returns the full set of angles if no branch is evanescent.
    #[must_use]
    pub fn complete(self) -> Option<SnellAngles> {
        Some(SnellAngles {
            transmitted_p: self.transmitted_p?,
            reflected_p: self.reflected_p,
            reflected_s: self.reflected_s?,
            transmitted_s: self.transmitted_s?,
            ray_parameter: self.ray_parameter,
        })
    }
}
