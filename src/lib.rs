//! *Conversions between geodetic, geocentric cartesian and projected
//! coordinates, on a small catalog of reference ellipsoids and map
//! projection zones*.
//!
//! Usage
//! =====
//!
//! Select a system by name from the [catalog], and convert:
//!
//! ```
//! use geoconv::prelude::*;
//!
//! fn main() -> Result<(), Error> {
//!     let utm30 = geoconv::select_ellipsoid("UTM30")?;
//!     let geo = GeodeticPosition::new(40., -3., 0.);
//!     let projected = utm30.geodetic_to_projected(&geo)?;
//!     let back = utm30.projected_to_geodetic(&projected)?;
//!     assert!((back.lat - 40.).abs() < 1e-9);
//!     Ok(())
//! }
//! ```
//!
//! Angles go in and out in degrees, lengths in meters. Projected
//! coordinates are relative to the projection origin: No false easting
//! or false northing is applied.

pub mod catalog;
mod coordinate;
mod ellipsoid;
pub mod math;
mod projection;
mod record;
mod settings;
mod transformer;

pub use catalog::list_ellipsoids;
pub use catalog::select_ellipsoid;

/// Preamble for users of the crate
pub mod prelude {
    pub use crate::catalog::Extent;
    pub use crate::catalog::LambertZone;
    pub use crate::catalog::Projection;
    pub use crate::catalog::UtmZone;
    pub use crate::coordinate::CartesianPosition;
    pub use crate::coordinate::GeodeticPosition;
    pub use crate::coordinate::ProjectedPosition;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::EllipsoidModel;
    pub use crate::record::ConversionDirection;
    pub use crate::record::TransformationRecord;
    pub use crate::settings::Settings;
    pub use crate::transformer::CoordinateTransformer;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Error;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use crate::prelude::*;
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;
    pub use std::f64::consts::FRAC_PI_2;
}

/// The error type of the crate. Every conversion reports its failure as
/// one of these values; none of them are ever surfaced to the user
/// directly by the library.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown ellipsoid or projection zone: {0}")]
    UnknownEllipsoid(String),

    #[error("invalid ellipsoid definition: {0}")]
    InvalidEllipsoid(String),

    #[error("coordinate ({lat}, {lon}) is outside the validity extent of {zone}")]
    CoordinateOutOfZone { zone: String, lat: f64, lon: f64 },

    #[error("{operation}: no convergence after {iterations} iterations")]
    Convergence {
        operation: &'static str,
        iterations: usize,
    },

    #[error("singular input: {0}")]
    SingularInput(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} is not a projected system")]
    NotProjected(String),
}

/// `Fwd`: Indicate that a two-way function or method should run in the
/// *forward* direction.
/// `Inv`: Indicate that a two-way function or method should run in the
/// *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B.R. Bowring (1985): *The accuracy of geodetic latitude and height equations*.
    /// Survey Review, 28(218), pp.202-206,
    /// [DOI](https://doi.org/10.1179/sre.1985.28.218.202)
    Bow85,

    /// Charles F.F. Karney (2011): *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    Kar11,

    /// John P. Snyder (1987): *Map Projections - A Working Manual*.
    /// U.S. Geological Survey Professional Paper 1395.
    /// [DOI](https://doi.org/10.3133/pp1395)
    Sny87,
}
