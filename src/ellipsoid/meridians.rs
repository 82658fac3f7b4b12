use super::*;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The distance, *M*, along a meridian from the equator to the given
    /// latitude (Fwd), or the footpoint latitude of a given meridian
    /// distance (Inv). Latitudes in radians.
    ///
    /// Series expansions in the squared eccentricity, truncated after the
    /// *e⁶* term, following [Snyder (1987)](crate::Bibliography::Sny87)
    /// eqs. (3-21) (forward), (3-24) and (3-26) (inverse). The inverse is
    /// expressed in terms of the rectifying latitude, 𝜇.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn meridional_distance(&self, arg: f64, direction: Direction) -> f64 {
        let es = self.eccentricity_squared();
        let es2 = es * es;
        let es3 = es2 * es;
        let a0 = 1. - es / 4. - 3. * es2 / 64. - 5. * es3 / 256.;

        if direction == Fwd {
            let latitude = arg;
            let a2 = 3. * es / 8. + 3. * es2 / 32. + 45. * es3 / 1024.;
            let a4 = 15. * es2 / 256. + 45. * es3 / 1024.;
            let a6 = 35. * es3 / 3072.;
            return self.a
                * (a0 * latitude - a2 * (2. * latitude).sin() + a4 * (4. * latitude).sin()
                    - a6 * (6. * latitude).sin());
        }

        // The rectifying latitude
        let mu = arg / (self.a * a0);

        let root = (1. - es).sqrt();
        let e1 = (1. - root) / (1. + root);
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;

        mu + (3. * e1 / 2. - 27. * e1_3 / 32.) * (2. * mu).sin()
            + (21. * e1_2 / 16. - 55. * e1_4 / 32.) * (4. * mu).sin()
            + (151. * e1_3 / 96.) * (6. * mu).sin()
            + (1097. * e1_4 / 512.) * (8. * mu).sin()
    }

    /// The Meridian Quadrant, *Qm*, is the distance from the equator to one of the poles.
    #[must_use]
    pub fn meridian_quadrant(&self) -> f64 {
        self.meridional_distance(FRAC_PI_2, Fwd)
    }
}
