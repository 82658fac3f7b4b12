//! Transverse Mercator, as used by the UTM zones
use super::*;

// A footpoint latitude this close to a pole leaves the inverse series undefined
const EPS12: f64 = 1e-12;

/// Transverse Mercator on an ellipsoid, by the series expansions of
/// [Snyder (1987)](crate::Bibliography::Sny87), eqs. (8-9) to (8-18).
/// Output is relative to the projection origin (the intersection of the
/// central meridian and the equator).
#[derive(Debug, Clone)]
pub(crate) struct Tmerc {
    ellps: Ellipsoid,
    lon_0: f64,
    k_0: f64,
}

impl Tmerc {
    pub fn new(ellps: &Ellipsoid, zone: &UtmZone) -> Tmerc {
        Tmerc {
            ellps: *ellps,
            lon_0: zone.lon_0.to_radians(),
            k_0: zone.k_0,
        }
    }

    /// Forward projection, (lat, lon) in radians to (easting, northing) in meters
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn fwd(&self, lat: f64, lon: f64) -> (f64, f64) {
        let eps = self.ellps.second_eccentricity_squared();
        let k_0 = self.k_0;

        let (sinphi, cosphi) = lat.sin_cos();
        let N = self.ellps.prime_vertical_radius_of_curvature(lat);
        let T = (sinphi / cosphi).powi(2);
        let C = eps * cosphi * cosphi;
        let A = (lon - self.lon_0) * cosphi;
        let M = self.ellps.meridional_distance(lat, Fwd);

        let A2 = A * A;
        let A3 = A2 * A;
        let A4 = A3 * A;
        let A5 = A4 * A;

        // Snyder (8-9)
        let x = k_0
            * N
            * (A + (1. - T + C) * A3 / 6.
                + (5. - 18. * T + T * T + 72. * C - 58. * eps) * A5 / 120.);

        // Snyder (8-10). At the poles tan 𝜙 blows up, but A vanishes faster
        let tanphi_a2 = if cosphi == 0. { 0. } else { sinphi / cosphi * A2 };
        let y = k_0
            * (M + N
                * tanphi_a2
                * (0.5
                    + (5. - T + 9. * C + 4. * C * C) * A2 / 24.
                    + (61. - 58. * T + T * T + 600. * C - 330. * eps) * A4 / 720.));

        (x, y)
    }

    /// First approximation to the inverse projection, by Snyder (8-17) and
    /// (8-18), with the footpoint latitude from the inverse meridional
    /// distance.
    #[allow(non_snake_case)]
    fn seed(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let es = self.ellps.eccentricity_squared();
        let eps = self.ellps.second_eccentricity_squared();
        let a = self.ellps.semimajor_axis();
        let k_0 = self.k_0;

        // Northings beyond the pole are outside the image of the projection
        if (y / k_0).abs() > self.ellps.meridian_quadrant() {
            return Err(Error::SingularInput(
                "the northing is beyond the pole",
            ));
        }

        let phi1 = self.ellps.meridional_distance(y / k_0, Inv);
        let (sinphi1, cosphi1) = phi1.sin_cos();
        if cosphi1.abs() < EPS12 {
            return Err(Error::SingularInput(
                "the footpoint latitude is at a pole",
            ));
        }
        let tanphi1 = sinphi1 / cosphi1;

        let C1 = eps * cosphi1 * cosphi1;
        let T1 = tanphi1 * tanphi1;
        let w = 1. - es * sinphi1 * sinphi1;
        let N1 = a / w.sqrt();
        let R1 = a * (1. - es) / w.powf(1.5);
        let D = x / (N1 * k_0);

        let D2 = D * D;
        let D3 = D2 * D;
        let D4 = D3 * D;
        let D5 = D4 * D;
        let D6 = D5 * D;

        let lat = phi1
            - (N1 * tanphi1 / R1)
                * (D2 / 2. - (5. + 3. * T1 + 10. * C1 - 4. * C1 * C1 - 9. * eps) * D4 / 24.
                    + (61. + 90. * T1 + 298. * C1 + 45. * T1 * T1 - 252. * eps - 3. * C1 * C1)
                        * D6
                        / 720.);

        let lon = self.lon_0
            + (D - (1. + 2. * T1 + C1) * D3 / 6.
                + (5. - 2. * C1 + 28. * T1 - 3. * C1 * C1 + 8. * eps + 24. * T1 * T1) * D5
                    / 120.)
                / cosphi1;

        Ok((lat, lon))
    }

    /// Inverse projection: The closed form series of [`Tmerc::seed`],
    /// refined by Newton iteration until the forward projection of the
    /// result reproduces the input.
    pub fn inv(&self, x: f64, y: f64, settings: &Settings) -> Result<(f64, f64), Error> {
        let seed = self.seed(x, y)?;
        refine(|lat, lon| self.fwd(lat, lon), (x, y), seed, settings)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn utm30() -> Tmerc {
        Tmerc::new(&Ellipsoid::default(), &UtmZone::new(30, -3.))
    }

    #[test]
    fn snyder_example() -> Result<(), Error> {
        // Snyder (1987), pp. 269-270: Clarke 1866, central meridian 75°W
        let ellps = Ellipsoid::named("clrk66")?;
        let zone = UtmZone::new(18, -75.);
        let tmerc = Tmerc::new(&ellps, &zone);
        let (x, y) = tmerc.fwd(40.5_f64.to_radians(), (-73.5_f64).to_radians());
        assert_float_eq!(x, 127_106.5, abs <= 0.05);
        assert_float_eq!(y, 4_484_124.4, abs <= 0.05);
        Ok(())
    }

    #[test]
    fn utm30_forward() {
        // Reference values from the 6th order Krüger series of
        // Karney (2011), relative to the projection origin
        #[rustfmt::skip]
        let points: [((f64, f64), (f64, f64)); 7] = [
            ((40.0, -3.0),  (      0.000_000, 4_427_757.218_738)),
            ((40.5, -1.0),  ( 169_473.168_684, 4_485_176.135_135)),
            ((36.0, -6.0),  (-270_421.370_010, 3_988_111.962_343)),
            ((43.5, -0.2),  ( 226_368.969_787, 4_820_150.399_393)),
            ((42.0, -2.0),  (  82_818.069_248, 4_650_259.847_577)),
            ((0.5,  -5.5),  (-278_265.778_296,    55_318.039_977)),
            ((-33.0, -4.0), ( -93_417.778_208, -3_651_730.974_112)),
        ];

        let tmerc = utm30();
        for ((lat, lon), (e, n)) in points {
            let (x, y) = tmerc.fwd(lat.to_radians(), lon.to_radians());
            assert_float_eq!(x, e, abs <= 1e-3);
            assert_float_eq!(y, n, abs <= 1e-3);
        }
    }

    #[test]
    fn origin_and_central_meridian() {
        let tmerc = utm30();
        let (x, y) = tmerc.fwd(0., (-3_f64).to_radians());
        assert_float_eq!(x, 0., abs <= 1e-9);
        assert_float_eq!(y, 0., abs <= 1e-9);

        // Along the central meridian, northing is the scaled meridional distance
        let lat = 55_f64.to_radians();
        let (x, y) = tmerc.fwd(lat, (-3_f64).to_radians());
        let m = Ellipsoid::default().meridional_distance(lat, Fwd);
        assert_float_eq!(x, 0., abs <= 1e-9);
        assert_float_eq!(y, 0.9996 * m, abs <= 1e-6);
    }

    #[test]
    fn roundtrip() -> Result<(), Error> {
        let tmerc = utm30();
        let settings = Settings::default();
        for lat in [-60., -30., -1., 0., 0.5, 15., 36., 40., 43.5, 60., 80.] {
            for dlon in [-3., -1.5, 0., 0.7, 3.] {
                let phi = (lat as f64).to_radians();
                let lam = (-3. + dlon as f64).to_radians();
                let (x, y) = tmerc.fwd(phi, lam);
                let (phi2, lam2) = tmerc.inv(x, y, &settings)?;
                assert_float_eq!(phi2.to_degrees(), lat, abs <= 1e-9);
                assert_float_eq!(lam2.to_degrees(), -3. + dlon, abs <= 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn far_from_the_central_meridian() -> Result<(), Error> {
        // Well outside the zone, the seed is poor, but the refinement still holds
        let tmerc = utm30();
        let settings = Settings::default();
        let (x, y) = tmerc.fwd(40_f64.to_radians(), 20_f64.to_radians());
        let (phi, lam) = tmerc.inv(x, y, &settings)?;
        assert_float_eq!(phi.to_degrees(), 40., abs <= 1e-9);
        assert_float_eq!(lam.to_degrees(), 20., abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn footpoint_at_the_pole() {
        let tmerc = utm30();
        let quadrant = Ellipsoid::default().meridian_quadrant();
        let result = tmerc.inv(1000., 0.9996 * quadrant, &Settings::default());
        assert!(matches!(result, Err(Error::SingularInput(_))));
    }

    #[test]
    fn northing_beyond_the_pole() {
        let tmerc = utm30();
        let settings = Settings::default();

        // k₀ times the meridian quadrant is 9_997_964.9 m on WGS84
        for northing in [9_998_000., 10_500_000., 11_000_000., 15_000_000.] {
            for (x, y) in [(1000., northing), (1000., -northing), (0., northing)] {
                let result = tmerc.inv(x, y, &settings);
                assert!(matches!(result, Err(Error::SingularInput(_))), "{x}, {y}");
            }
        }

        // Just below the pole is still fine
        let (x, y) = tmerc.fwd(89.9_f64.to_radians(), (-2_f64).to_radians());
        assert!(y < 9_997_964.9);
        assert!(tmerc.inv(x, y, &settings).is_ok());
    }
}
