//! The catalog of predefined reference ellipsoids and projection zones.
//!
//! The catalog is a fixed table: Adding a zone means adding an entry to
//! [`CATALOG`], and nothing else.

use crate::internal::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

// ----- Projection definitions --------------------------------------------------

/// The map projection family of a catalog entry, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// A plain ellipsoid: Geodetic and cartesian conversions only
    None,
    /// Universal Transverse Mercator
    Utm(UtmZone),
    /// Lambert Conformal Conic, one standard parallel
    Lambert(LambertZone),
}

/// A UTM zone. Angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmZone {
    pub zone: u8,
    pub lon_0: f64,
    pub k_0: f64,
}

impl UtmZone {
    pub const fn new(zone: u8, lon_0: f64) -> UtmZone {
        UtmZone {
            zone,
            lon_0,
            k_0: 0.9996,
        }
    }
}

/// A Lambert conformal conic zone, tangent at the latitude of origin.
/// Angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertZone {
    pub lat_0: f64,
    pub lon_0: f64,
    pub k_0: f64,
    /// The area of use. Points outside are rejected by the forward projection
    pub extent: Option<Extent>,
}

impl LambertZone {
    pub const fn new(lat_0: f64, lon_0: f64, extent: Option<Extent>) -> LambertZone {
        LambertZone {
            lat_0,
            lon_0,
            k_0: 1.0,
            extent,
        }
    }
}

/// A latitude/longitude bounding box, in degrees. Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Extent {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Extent {
        Extent {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

impl Projection {
    /// Central meridian, in degrees. `None` for plain ellipsoids.
    pub fn lambda0(&self) -> Option<f64> {
        match self {
            Projection::None => None,
            Projection::Utm(utm) => Some(utm.lon_0),
            Projection::Lambert(lcc) => Some(lcc.lon_0),
        }
    }

    /// Latitude of origin, in degrees. Only defined for Lambert zones.
    pub fn phi0(&self) -> Option<f64> {
        match self {
            Projection::Lambert(lcc) => Some(lcc.lat_0),
            _ => None,
        }
    }

    pub fn is_projected(&self) -> bool {
        !matches!(self, Projection::None)
    }

    /// Check that the parameters describe a usable projection
    pub fn validate(&self) -> Result<(), Error> {
        let (lon_0, k_0) = match self {
            Projection::None => return Ok(()),
            Projection::Utm(utm) => {
                if !(1..=60).contains(&utm.zone) {
                    return Err(Error::InvalidEllipsoid(format!(
                        "UTM zone must be in the interval 1..60, got {}",
                        utm.zone
                    )));
                }
                (utm.lon_0, utm.k_0)
            }
            Projection::Lambert(lcc) => {
                // A cone tangent at the equator degenerates into a cylinder
                if !lcc.lat_0.is_finite() || lcc.lat_0.abs() < 1e-8 || lcc.lat_0.abs() >= 90. {
                    return Err(Error::InvalidEllipsoid(format!(
                        "Lambert latitude of origin must satisfy 0 < |lat_0| < 90, got {}",
                        lcc.lat_0
                    )));
                }
                (lcc.lon_0, lcc.k_0)
            }
        };
        if !lon_0.is_finite() {
            return Err(Error::InvalidEllipsoid(format!(
                "central meridian must be finite, got {lon_0}"
            )));
        }
        if !k_0.is_finite() || k_0 <= 0. {
            return Err(Error::InvalidEllipsoid(format!(
                "scale factor must be positive, got {k_0}"
            )));
        }
        Ok(())
    }
}

// ----- The catalog -----------------------------------------------------------------

/// A catalog entry: Name, description, ellipsoid short name (cf.
/// [`Ellipsoid::named`]) and projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Definition {
    pub name: &'static str,
    pub description: &'static str,
    pub ellps: &'static str,
    pub projection: Projection,
}

impl Definition {
    /// Instantiate the model described by this entry
    pub fn model(&self) -> Result<EllipsoidModel, Error> {
        let ellps = Ellipsoid::named(self.ellps)?;
        EllipsoidModel::new(self.name, self.description, ellps, self.projection)
    }
}

const MOROCCO_LON: (f64, f64) = (-7., 0.);

#[rustfmt::skip]
pub static CATALOG: [Definition; 9] = [
    Definition { name: "WGS84",      description: "World Geodetic System 1984", ellps: "WGS84",  projection: Projection::None },
    Definition { name: "Clarke1880", description: "Clarke 1880 (Morocco)",      ellps: "clrk80", projection: Projection::None },

    Definition { name: "UTM28", description: "UTM Zone 28", ellps: "WGS84", projection: Projection::Utm(UtmZone::new(28, -15.)) },
    Definition { name: "UTM29", description: "UTM Zone 29", ellps: "WGS84", projection: Projection::Utm(UtmZone::new(29,  -9.)) },
    Definition { name: "UTM30", description: "UTM Zone 30", ellps: "WGS84", projection: Projection::Utm(UtmZone::new(30,  -3.)) },

    Definition { name: "LambertI",   description: "Lambert Zone I",   ellps: "clrk80",
        projection: Projection::Lambert(LambertZone::new(37., -6., Some(Extent::new(36., 42., MOROCCO_LON.0, MOROCCO_LON.1)))) },
    Definition { name: "LambertII",  description: "Lambert Zone II",  ellps: "clrk80",
        projection: Projection::Lambert(LambertZone::new(33., -6., Some(Extent::new(32., 36., MOROCCO_LON.0, MOROCCO_LON.1)))) },
    Definition { name: "LambertIII", description: "Lambert Zone III", ellps: "clrk80",
        projection: Projection::Lambert(LambertZone::new(29., -6., Some(Extent::new(28., 32., MOROCCO_LON.0, MOROCCO_LON.1)))) },
    Definition { name: "LambertIV",  description: "Lambert Zone IV",  ellps: "clrk80",
        projection: Projection::Lambert(LambertZone::new(25., -6., Some(Extent::new(24., 28., MOROCCO_LON.0, MOROCCO_LON.1)))) },
];

static REGISTRY: Lazy<BTreeMap<&'static str, &'static Definition>> =
    Lazy::new(|| CATALOG.iter().map(|def| (def.name, def)).collect());

/// The defining parameters of a catalog entry
pub fn lookup(name: &str) -> Result<&'static Definition, Error> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownEllipsoid(name.to_string()))
}

/// The names of the catalog entries, in catalog order
pub fn list_ellipsoids() -> Vec<&'static str> {
    CATALOG.iter().map(|def| def.name).collect()
}

/// Instantiate a transformer for the named catalog entry
pub fn select_ellipsoid(name: &str) -> Result<CoordinateTransformer, Error> {
    let model = lookup(name)?.model()?;
    CoordinateTransformer::new(model)
}

/// Check whether (lat, lon), in degrees, is inside the extent of the named
/// zone. Entries without an extent accept every point.
pub fn validate_lambert(lat: f64, lon: f64, zone: &str) -> Result<bool, Error> {
    let def = lookup(zone)?;
    Ok(match def.projection {
        Projection::Lambert(LambertZone {
            extent: Some(extent),
            ..
        }) => extent.contains(lat, lon),
        _ => true,
    })
}

// ----- Tests ---------------------------------------------------------------------
