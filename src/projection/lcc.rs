//! Lambert Conformal Conic, tangent at the latitude of origin
use super::*;
use crate::math::{latitude_from_tsfn, msfn, tsfn};
use std::f64::consts::PI;

const EPS10: f64 = 1e-10;

/// Lambert conformal conic with one standard parallel, coinciding with the
/// latitude of origin, following [Snyder (1987)](crate::Bibliography::Sny87)
/// ch. 15, in the form used by PROJ. No false easting or northing is applied.
#[derive(Debug, Clone)]
pub(crate) struct Lcc {
    a: f64,
    e: f64,
    lon_0: f64,
    k_0: f64,
    // Cone constant, sin 𝜙₀
    n: f64,
    c: f64,
    rho0: f64,
}

impl Lcc {
    pub fn new(ellps: &Ellipsoid, zone: &LambertZone) -> Result<Lcc, Error> {
        let phi0 = zone.lat_0.to_radians();
        let sc = phi0.sin_cos();
        if sc.0.abs() < EPS10 || sc.1.abs() < EPS10 {
            return Err(Error::InvalidEllipsoid(format!(
                "Lcc: invalid latitude of origin {}",
                zone.lat_0
            )));
        }

        let e = ellps.eccentricity();
        let es = ellps.eccentricity_squared();
        let n = sc.0;

        // Snyder (1987) eq. 15-9 and 14-15
        let ts0 = tsfn(sc, e);
        let m0 = msfn(sc, es);
        let c = m0 * ts0.powf(-n) / n;
        let rho0 = c * ts0.powf(n);

        Ok(Lcc {
            a: ellps.semimajor_axis(),
            e,
            lon_0: zone.lon_0.to_radians(),
            k_0: zone.k_0,
            n,
            c,
            rho0,
        })
    }

    /// Forward projection, (lat, lon) in radians to (easting, northing) in meters.
    /// The pole opposite the apex of the cone maps to NaN.
    pub fn fwd(&self, lat: f64, lon: f64) -> (f64, f64) {
        let lam = lon - self.lon_0;
        let mut rho = 0.;

        // Close to one of the poles?
        if (lat.abs() - FRAC_PI_2).abs() < EPS10 {
            if lat * self.n <= 0. {
                return (f64::NAN, f64::NAN);
            }
        } else {
            rho = self.c * tsfn(lat.sin_cos(), self.e).powf(self.n);
        }

        let (sin_nlam, cos_nlam) = (lam * self.n).sin_cos();
        let ak = self.a * self.k_0;
        (ak * rho * sin_nlam, ak * (self.rho0 - rho * cos_nlam))
    }

    /// Inverse projection, closed form apart from the latitude recovery
    pub fn inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let ak = self.a * self.k_0;
        let mut x = x / ak;
        let mut y = self.rho0 - y / ak;
        let mut rho = x.hypot(y);

        // At the apex of the cone
        if rho == 0. {
            return Ok((FRAC_PI_2.copysign(self.n), self.lon_0));
        }

        // Cone opening towards the south?
        if self.n < 0. {
            rho = -rho;
            x = -x;
            y = -y;
        }

        // The developed cone covers a sector of half-angle 𝜋|n|. Beyond
        // that, no longitude within 180° of the central meridian matches
        let theta = x.atan2(y);
        if theta.abs() > PI * self.n.abs() {
            return Err(Error::SingularInput(
                "the projected position is outside the developed cone",
            ));
        }

        let ts = (rho / self.c).powf(1. / self.n);
        let lat = latitude_from_tsfn(ts, self.e)?;
        let lon = theta / self.n + self.lon_0;
        Ok((lat, lon))
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn lambert(lat_0: f64) -> Result<Lcc, Error> {
        let ellps = Ellipsoid::named("clrk80")?;
        Lcc::new(&ellps, &LambertZone::new(lat_0, -6., None))
    }

    #[test]
    fn origin() -> Result<(), Error> {
        for lat_0 in [37., 33., 29., 25., -40.] {
            let lcc = lambert(lat_0)?;
            let (x, y) = lcc.fwd(lat_0.to_radians(), (-6_f64).to_radians());
            assert_float_eq!(x, 0., abs <= 1e-9);
            assert_float_eq!(y, 0., abs <= 1e-9);
        }
        Ok(())
    }

    #[test]
    fn forward() -> Result<(), Error> {
        let lcc = lambert(37.)?;
        let (x, y) = lcc.fwd(38_f64.to_radians(), (-5_f64).to_radians());
        assert_float_eq!(x, 87_847.593_002, abs <= 1e-5);
        assert_float_eq!(y, 111_450.545_581, abs <= 1e-5);

        // Mirror symmetry around the central meridian
        let lcc = lambert(33.)?;
        let (x, y) = lcc.fwd(34_f64.to_radians(), (-7_f64).to_radians());
        assert_float_eq!(x, -92_400.658_815, abs <= 1e-5);
        assert_float_eq!(y, 111_353.498_021, abs <= 1e-5);
        let (x2, y2) = lcc.fwd(34_f64.to_radians(), (-5_f64).to_radians());
        assert_float_eq!(x2, -x, abs <= 1e-9);
        assert_float_eq!(y2, y, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn true_scale_at_the_latitude_of_origin() -> Result<(), Error> {
        let ellps = Ellipsoid::named("clrk80")?;
        let lcc = lambert(37.)?;
        let phi0 = 37_f64.to_radians();
        let lam0 = (-6_f64).to_radians();
        let d = 1e-6;
        let (_, y1) = lcc.fwd(phi0 + d, lam0);
        let (_, y0) = lcc.fwd(phi0 - d, lam0);
        let scale = (y1 - y0) / (2. * d) / ellps.meridian_radius_of_curvature(phi0);
        assert_float_eq!(scale, 1., abs <= 1e-8);
        Ok(())
    }

    #[test]
    fn roundtrip() -> Result<(), Error> {
        let lcc = lambert(33.)?;
        for lat in [20., 32., 33., 34.5, 36., 50.] {
            for lon in [-12., -7., -6., -3.5, 0.] {
                let (lat, lon): (f64, f64) = (lat, lon);
                let (x, y) = lcc.fwd(lat.to_radians(), lon.to_radians());
                let (phi, lam) = lcc.inv(x, y)?;
                assert_float_eq!(phi.to_degrees(), lat, abs <= 1e-9);
                assert_float_eq!(lam.to_degrees(), lon, abs <= 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn poles() -> Result<(), Error> {
        let lcc = lambert(37.)?;

        // The apex of the cone is the north pole
        let (x, y) = lcc.fwd(FRAC_PI_2, 0.3);
        let (phi, lam) = lcc.inv(x, y)?;
        assert_float_eq!(phi, FRAC_PI_2, abs <= 1e-12);
        assert_float_eq!(lam, (-6_f64).to_radians(), abs <= 1e-12);

        // The south pole is at infinity
        let (x, y) = lcc.fwd(-FRAC_PI_2, 0.);
        assert!(x.is_nan() && y.is_nan());
        Ok(())
    }

    #[test]
    fn outside_the_developed_cone() -> Result<(), Error> {
        let lcc = lambert(37.)?;
        for (x, y) in [(0., 20_000_000.), (-5e6, 1.2e7), (5e6, 1.2e7)] {
            assert!(matches!(lcc.inv(x, y), Err(Error::SingularInput(_))), "{x}, {y}");
        }

        // Almost half way around the globe from the central meridian is
        // still inside, on both sides
        for lon in [-185., 173.] {
            let (lat, lon): (f64, f64) = (40., lon);
            let (x, y) = lcc.fwd(lat.to_radians(), lon.to_radians());
            let (phi, lam) = lcc.inv(x, y)?;
            assert_float_eq!(phi.to_degrees(), lat, abs <= 1e-9);
            assert_float_eq!(lam.to_degrees(), lon, abs <= 1e-9);
        }

        // Also for cones opening towards the south
        let south = lambert(-35.)?;
        let (x, y) = south.fwd((-40_f64).to_radians(), 170_f64.to_radians());
        let (phi, lam) = south.inv(x, y)?;
        assert_float_eq!(phi.to_degrees(), -40., abs <= 1e-9);
        assert_float_eq!(lam.to_degrees(), 170., abs <= 1e-9);
        assert!(matches!(south.inv(0., -20_000_000.), Err(Error::SingularInput(_))));
        Ok(())
    }

    #[test]
    fn equatorial_cone() -> Result<(), Error> {
        let ellps = Ellipsoid::named("clrk80")?;
        let result = Lcc::new(&ellps, &LambertZone::new(0., -6., None));
        assert!(matches!(result, Err(Error::InvalidEllipsoid(_))));
        Ok(())
    }
}
