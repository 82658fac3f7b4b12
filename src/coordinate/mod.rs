use crate::internal::*;
use std::fmt;

/// Latitude and longitude in degrees, ellipsoidal height in meters
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeodeticPosition {
    pub lat: f64,
    pub lon: f64,
    pub h: f64,
}

/// Geocentric, right handed cartesian coordinates in meters, Z along the
/// polar axis
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Easting and northing in meters, relative to the origin of the projection
/// that produced them
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct ProjectedPosition {
    pub easting: f64,
    pub northing: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl GeodeticPosition {
    #[must_use]
    pub fn new(lat: f64, lon: f64, h: f64) -> GeodeticPosition {
        GeodeticPosition { lat, lon, h }
    }

    /// From a (lat, lon) or (lat, lon, h) slice. Missing height is zero.
    pub fn from_slice(values: &[f64]) -> Result<GeodeticPosition, Error> {
        match *values {
            [lat, lon] => Ok(GeodeticPosition::new(lat, lon, 0.)),
            [lat, lon, h] => Ok(GeodeticPosition::new(lat, lon, h)),
            _ => Err(arity_error("geodetic", "2 or 3", values.len())),
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.lat, self.lon, self.h]
    }

    /// Reject NaN and infinite elements
    pub fn ensure_finite(&self) -> Result<(), Error> {
        ensure_finite("geodetic", &[self.lat, self.lon, self.h])
    }
}

impl CartesianPosition {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> CartesianPosition {
        CartesianPosition { x, y, z }
    }

    pub fn from_slice(values: &[f64]) -> Result<CartesianPosition, Error> {
        match *values {
            [x, y, z] => Ok(CartesianPosition::new(x, y, z)),
            _ => Err(arity_error("cartesian", "3", values.len())),
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    pub fn ensure_finite(&self) -> Result<(), Error> {
        ensure_finite("cartesian", &[self.x, self.y, self.z])
    }

    /// Euclidean distance between two points
    #[must_use]
    pub fn distance(&self, other: &CartesianPosition) -> f64 {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }
}

impl ProjectedPosition {
    #[must_use]
    pub fn new(easting: f64, northing: f64) -> ProjectedPosition {
        ProjectedPosition { easting, northing }
    }

    pub fn from_slice(values: &[f64]) -> Result<ProjectedPosition, Error> {
        match *values {
            [easting, northing] => Ok(ProjectedPosition::new(easting, northing)),
            _ => Err(arity_error("projected", "2", values.len())),
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.easting, self.northing]
    }

    pub fn ensure_finite(&self) -> Result<(), Error> {
        ensure_finite("projected", &[self.easting, self.northing])
    }
}

fn arity_error(kind: &str, expected: &str, found: usize) -> Error {
    Error::InvalidInput(format!(
        "a {kind} coordinate has {expected} elements, got {found}"
    ))
}

fn ensure_finite(kind: &str, values: &[f64]) -> Result<(), Error> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    warn!("Rejecting non-finite {kind} coordinate {values:?}");
    Err(Error::InvalidInput(format!(
        "non-finite {kind} coordinate {values:?}"
    )))
}

// ----- F O R M A T T I N G -------------------------------------------------

// Angles are shown with 6 decimals (~0.1 m), lengths with 3 (1 mm)

impl fmt::Display for GeodeticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}, {:.3}", self.lat, self.lon, self.h)
    }
}

impl fmt::Display for CartesianPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}, {:.3}", self.x, self.y, self.z)
    }
}

impl fmt::Display for ProjectedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.easting, self.northing)
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices() -> Result<(), Error> {
        let geo = GeodeticPosition::from_slice(&[55., 12.])?;
        assert_eq!(geo, GeodeticPosition::new(55., 12., 0.));
        let geo = GeodeticPosition::from_slice(&[55., 12., 100.])?;
        assert_eq!(geo.to_vec(), vec![55., 12., 100.]);

        let cart = CartesianPosition::from_slice(&[1., 2., 3.])?;
        assert_eq!(cart, CartesianPosition::new(1., 2., 3.));
        assert!(CartesianPosition::from_slice(&[1., 2.]).is_err());

        let proj = ProjectedPosition::from_slice(&[1000., 2000.])?;
        assert_eq!(proj.to_vec(), vec![1000., 2000.]);
        assert!(matches!(
            ProjectedPosition::from_slice(&[1., 2., 3., 4.]),
            Err(Error::InvalidInput(_))
        ));
        Ok(())
    }

    #[test]
    fn finiteness() {
        assert!(GeodeticPosition::new(55., 12., 0.).ensure_finite().is_ok());
        assert!(GeodeticPosition::new(f64::NAN, 12., 0.).ensure_finite().is_err());
        assert!(CartesianPosition::new(1., f64::INFINITY, 0.).ensure_finite().is_err());
        assert!(ProjectedPosition::new(1., f64::NEG_INFINITY).ensure_finite().is_err());
    }

    #[test]
    fn formatting() {
        let geo = GeodeticPosition::new(33.5, -7.25, 12.3456);
        assert_eq!(geo.to_string(), "33.500000, -7.250000, 12.346");
        let cart = CartesianPosition::new(6378137., 0., 0.0004);
        assert_eq!(cart.to_string(), "6378137.000, 0.000, 0.000");
        let proj = ProjectedPosition::new(-12.5, 3.14159);
        assert_eq!(proj.to_string(), "-12.500, 3.142");
    }

    #[test]
    fn distance() {
        let a = CartesianPosition::new(1., 2., 3.);
        let b = CartesianPosition::new(4., 6., 3.);
        assert_eq!(a.distance(&b), 5.);
    }
}
