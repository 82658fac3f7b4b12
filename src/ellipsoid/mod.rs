use crate::internal::*;

mod constants;
mod geocart;
mod meridians;
mod model;

pub use model::EllipsoidModel;

/// An ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid {
            a: 6_378_137.0,
            f: 1. / 298.257_223_563,
        }
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid. The semimajor axis must be a positive, finite
    /// length, and the flattening must be in the open interval (0, 1).
    pub fn new(semimajor_axis: f64, flattening: f64) -> Result<Ellipsoid, Error> {
        if !semimajor_axis.is_finite() || semimajor_axis <= 0. {
            return Err(Error::InvalidEllipsoid(format!(
                "semimajor axis must be positive, got {semimajor_axis}"
            )));
        }
        if !(flattening > 0. && flattening < 1.) {
            return Err(Error::InvalidEllipsoid(format!(
                "flattening must be in the interval (0, 1), got {flattening}"
            )));
        }
        Ok(Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        })
    }

    /// Predefined ellipsoid, by its short name (e.g. "WGS84", "clrk80")
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        let Some(e) = constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name)
        else {
            return Err(Error::UnknownEllipsoid(String::from(name)));
        };
        Ellipsoid::new(e.1, 1. / e.2)
    }

    /// Descriptive name of a predefined ellipsoid
    pub fn description(name: &str) -> Option<&'static str> {
        constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name)
            .map(|ellps| ellps.3)
    }
}

impl Ellipsoid {
    // ----- Axes and flattening ---------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b = a(1 - f)*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = 1 - (b/a)²*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let ratio = self.semiminor_axis() / self.a;
        1.0 - ratio * ratio
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*, at the
    /// given latitude (in radians)
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }

    /// The meridian radius of curvature, *M*, at the given latitude (in radians)
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        let num = self.a * (1.0 - es);
        let denom = (1.0 - latitude.sin().powi(2) * es).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------
