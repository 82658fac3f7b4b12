//! Map projections: Transverse Mercator for the UTM zones, Lambert
//! conformal conic for the Lambert zones.

use crate::internal::*;

mod lcc;
mod tmerc;

use lcc::Lcc;
use tmerc::Tmerc;

/// A projection, set up for the ellipsoid and zone of one model.
#[derive(Debug, Clone)]
pub(crate) enum Projector {
    Tmerc(Tmerc),
    Lcc(Lcc),
}

impl Projector {
    /// The projector of the model, `None` for plain ellipsoids
    pub fn new(model: &EllipsoidModel) -> Result<Option<Projector>, Error> {
        let ellps = model.ellipsoid();
        Ok(match model.projection() {
            Projection::None => None,
            Projection::Utm(zone) => Some(Projector::Tmerc(Tmerc::new(ellps, zone))),
            Projection::Lambert(zone) => Some(Projector::Lcc(Lcc::new(ellps, zone)?)),
        })
    }

    /// Geodetic to projected. The height is not used.
    pub fn fwd(&self, geo: &GeodeticPosition) -> Result<ProjectedPosition, Error> {
        let lat = geo.lat.to_radians();
        let lon = geo.lon.to_radians();
        let (easting, northing) = match self {
            Projector::Tmerc(tmerc) => tmerc.fwd(lat, lon),
            Projector::Lcc(lcc) => lcc.fwd(lat, lon),
        };
        let projected = ProjectedPosition::new(easting, northing);
        if projected.ensure_finite().is_err() {
            return Err(Error::SingularInput(
                "the projection is undefined at this position",
            ));
        }
        Ok(projected)
    }

    /// Projected to geodetic. The height of the result is zero.
    pub fn inv(
        &self,
        projected: &ProjectedPosition,
        settings: &Settings,
    ) -> Result<GeodeticPosition, Error> {
        let (x, y) = (projected.easting, projected.northing);
        let (lat, lon) = match self {
            Projector::Tmerc(tmerc) => tmerc.inv(x, y, settings)?,
            Projector::Lcc(lcc) => lcc.inv(x, y)?,
        };
        if !(lat.abs() <= FRAC_PI_2 && lon.is_finite()) {
            return Err(Error::SingularInput(
                "the projected position has no geodetic counterpart",
            ));
        }
        Ok(GeodeticPosition::new(lat.to_degrees(), lon.to_degrees(), 0.))
    }
}

// Step length (radians) for the numerical derivatives of the forward projection
const STEP: f64 = 1e-7;

/// Refine an approximate inverse projection by Newton iteration against
/// the forward projection `fwd`, until the forward projected refinement
/// is within `settings.projection_tolerance` meters of `target`.
/// The Jacobian is evaluated by central differences.
pub(crate) fn refine<F>(
    fwd: F,
    target: (f64, f64),
    seed: (f64, f64),
    settings: &Settings,
) -> Result<(f64, f64), Error>
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let (mut lat, mut lon) = seed;
    let max_iter = settings.max_projection_iterations;

    for i in 0..=max_iter {
        let (x, y) = fwd(lat, lon);
        let (dx, dy) = (target.0 - x, target.1 - y);
        if dx.abs().max(dy.abs()) < settings.projection_tolerance {
            trace!("refine: converged after {i} iterations");
            return Ok((lat, lon));
        }
        if i == max_iter || !(dx.is_finite() && dy.is_finite()) {
            break;
        }

        let (x1, y1) = fwd(lat + STEP, lon);
        let (x2, y2) = fwd(lat - STEP, lon);
        let (x3, y3) = fwd(lat, lon + STEP);
        let (x4, y4) = fwd(lat, lon - STEP);
        let dx_dlat = (x1 - x2) / (2. * STEP);
        let dy_dlat = (y1 - y2) / (2. * STEP);
        let dx_dlon = (x3 - x4) / (2. * STEP);
        let dy_dlon = (y3 - y4) / (2. * STEP);

        let det = dx_dlat * dy_dlon - dx_dlon * dy_dlat;
        if det == 0. || !det.is_finite() {
            return Err(Error::SingularInput(
                "the projection is not invertible at this position",
            ));
        }
        lat += (dx * dy_dlon - dx_dlon * dy) / det;
        lon += (dx_dlat * dy - dx * dy_dlat) / det;
    }

    Err(Error::Convergence {
        operation: "projected to geodetic",
        iterations: max_iter,
    })
}

// ----- Tests ---------------------------------------------------------------------
