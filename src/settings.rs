/// Tunables for the iterative conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Convergence criterion for cartesian to geodetic: The largest
    /// acceptable change of latitude between iterations, in radians.
    /// 1e-12 rad corresponds to a few micrometers on the surface.
    pub tolerance: f64,
    /// Iteration cap for cartesian to geodetic
    pub max_iterations: usize,
    /// Convergence criterion for the inverse Transverse Mercator, in
    /// meters of forward projected residual
    pub projection_tolerance: f64,
    /// Iteration cap for the inverse Transverse Mercator
    pub max_projection_iterations: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            tolerance: 1e-12,
            max_iterations: 50,
            projection_tolerance: 1e-6,
            max_projection_iterations: 20,
        }
    }
}

impl Settings {
    /// Override the cartesian to geodetic tolerance
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Settings {
        self.tolerance = tolerance;
        self
    }

    /// Override the cartesian to geodetic iteration cap
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Settings {
        self.max_iterations = max_iterations;
        self
    }
}
