/// An angular measurement stored as radians.
///
/// Every spherical coordinate in the projection crates travels as an `Angle`,
/// so degree/radian mix-ups are caught at the type level. Storage is radians
/// because every trigonometric call wants radians.
///
/// `Eq` and `Ord` are not implemented because the inner f64 can be NaN.
///
/// With the `serde` feature an `Angle` serializes as a bare radian value.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates an angle from radians.
    ///
    /// ```
    /// use quadsphere_core::Angle;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let angle = Angle::from_radians(FRAC_PI_4);
    /// assert!((angle.degrees() - 45.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Returns `(sin, cos)` of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Wraps the angle to [-pi, +pi).
    ///
    /// ```
    /// use quadsphere_core::Angle;
    ///
    /// let wrapped = Angle::from_degrees(270.0).wrapped();
    /// assert!((wrapped.degrees() - (-90.0)).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
