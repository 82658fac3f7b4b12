use super::*;

// Below this distance from the polar axis (1 picometer), a point is
// considered to be on the axis.
const POLAR_AXIS_EPS: f64 = 1.0e-12;

// ----- Geographic <--> Cartesian conversion ------------------------------------
impl Ellipsoid {
    /// Geographic to cartesian conversion. Closed form, exact.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn cartesian(&self, geographic: &GeodeticPosition) -> CartesianPosition {
        let phi = geographic.lat.to_radians();
        let lam = geographic.lon.to_radians();
        let h = geographic.h;

        let N = self.prime_vertical_radius_of_curvature(phi);
        let (sinphi, cosphi) = phi.sin_cos();
        let (sinlam, coslam) = lam.sin_cos();

        let X = (N + h) * cosphi * coslam;
        let Y = (N + h) * cosphi * sinlam;
        let Z = (N * (1.0 - self.eccentricity_squared()) + h) * sinphi;

        CartesianPosition::new(X, Y, Z)
    }

    /// Cartesian to geographic conversion, by fixed point iteration on the
    /// latitude, 𝜙ᵢ₊₁ = atan2(Z + e²·N(𝜙ᵢ)·sin 𝜙ᵢ, p), seeded by the
    /// geocentric latitude.
    ///
    /// The iteration stops when the latitude changes by less than
    /// `settings.tolerance` radians, and fails with [`Error::Convergence`]
    /// after `settings.max_iterations` steps. The height is computed from
    /// the final latitude using the expression suggested by
    /// [Bowring (1985)](crate::Bibliography::Bow85), which stays well
    /// conditioned near the poles.
    ///
    /// Returns the position and the number of iterations used.
    #[allow(non_snake_case)]
    pub fn geographic(
        &self,
        cartesian: &CartesianPosition,
        settings: &Settings,
    ) -> Result<(GeodeticPosition, usize), Error> {
        let (X, Y, Z) = (cartesian.x, cartesian.y, cartesian.z);
        let a = self.semimajor_axis();
        let es = self.eccentricity_squared();

        // The perpendicular distance from the point coordinate to the Z-axis
        let p = X.hypot(Y);

        // On the polar axis the longitude is undefined and the latitude is
        // one of the poles, given by the sign of Z
        if p < POLAR_AXIS_EPS {
            if Z == 0. {
                return Err(Error::SingularInput(
                    "the geocenter has no geodetic latitude",
                ));
            }
            let lat = 90_f64.copysign(Z);
            let h = Z.abs() - self.semiminor_axis();
            trace!("geographic: on the polar axis, no iteration needed");
            return Ok((GeodeticPosition::new(lat, 0., h), 0));
        }

        // The longitude is straightforward: Plain geometry in the equatoreal plane
        let lam = Y.atan2(X);

        let mut phi = Z.atan2(p);
        for i in 1..=settings.max_iterations {
            let N = self.prime_vertical_radius_of_curvature(phi);
            let next = (Z + es * N * phi.sin()).atan2(p);
            let delta = (next - phi).abs();
            phi = next;
            if delta < settings.tolerance {
                let (sinphi, cosphi) = phi.sin_cos();
                let N = self.prime_vertical_radius_of_curvature(phi);
                let h = p * cosphi + Z * sinphi - a * a / N;
                trace!("geographic: converged after {i} iterations");
                return Ok((
                    GeodeticPosition::new(phi.to_degrees(), lam.to_degrees(), h),
                    i,
                ));
            }
        }

        Err(Error::Convergence {
            operation: "cartesian to geodetic",
            iterations: settings.max_iterations,
        })
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn geo_to_cart() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        let settings = Settings::default();

        // Roundtrip geographic <-> cartesian
        let geo = GeodeticPosition::new(55., 12., 100.);
        let cart = ellps.cartesian(&geo);
        let (geo2, iterations) = ellps.geographic(&cart, &settings)?;
        assert_float_eq!(geo.lat, geo2.lat, abs <= 1e-10);
        assert_float_eq!(geo.lon, geo2.lon, abs <= 1e-10);
        assert_float_eq!(geo.h, geo2.h, abs <= 1e-6);
        assert!(iterations < 10);

        // ...and back to the same point in space
        assert!(cart.distance(&ellps.cartesian(&geo2)) < 1e-6);
        Ok(())
    }

    #[test]
    fn equator_and_poles() -> Result<(), Error> {
        let ellps = Ellipsoid::default();
        let settings = Settings::default();

        let cart = ellps.cartesian(&GeodeticPosition::new(0., 0., 0.));
        assert_float_eq!(cart.x, 6_378_137.0, abs <= 1e-9);
        assert_float_eq!(cart.y, 0.0, abs <= 1e-9);
        assert_float_eq!(cart.z, 0.0, abs <= 1e-9);

        let b = ellps.semiminor_axis();
        let (north, iterations) = ellps.geographic(&CartesianPosition::new(0., 0., b), &settings)?;
        assert_eq!(north.lat, 90.);
        assert_float_eq!(north.h, 0., abs <= 1e-9);
        assert_eq!(iterations, 0);

        let (south, _) =
            ellps.geographic(&CartesianPosition::new(0., 0., -b - 100.), &settings)?;
        assert_eq!(south.lat, -90.);
        assert_float_eq!(south.h, 100., abs <= 1e-8);

        let center = ellps.geographic(&CartesianPosition::new(0., 0., 0.), &settings);
        assert!(matches!(center, Err(Error::SingularInput(_))));
        Ok(())
    }

    #[test]
    fn iteration_cap() -> Result<(), Error> {
        let ellps = Ellipsoid::default();
        let settings = Settings {
            tolerance: 0.,
            max_iterations: 5,
            ..Settings::default()
        };
        let cart = ellps.cartesian(&GeodeticPosition::new(45., 10., 0.));
        let result = ellps.geographic(&cart, &settings);
        assert!(matches!(
            result,
            Err(Error::Convergence { iterations: 5, .. })
        ));
        Ok(())
    }
}
