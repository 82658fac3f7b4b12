use super::*;

/// A reference ellipsoid, optionally carrying the definition of the map
/// projection zone it is used with. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipsoidModel {
    name: String,
    description: String,
    ellps: Ellipsoid,
    projection: Projection,
}

impl EllipsoidModel {
    /// Combine an ellipsoid and a projection into a named model. Fails if
    /// the projection parameters are not usable.
    pub fn new(
        name: &str,
        description: &str,
        ellps: Ellipsoid,
        projection: Projection,
    ) -> Result<EllipsoidModel, Error> {
        projection.validate()?;
        debug!(
            "EllipsoidModel::new: {name}, a={}, f={}, {:?}",
            ellps.semimajor_axis(),
            ellps.flattening(),
            projection
        );
        Ok(EllipsoidModel {
            name: name.to_string(),
            description: description.to_string(),
            ellps,
            projection,
        })
    }

    /// A model given by its defining parameters: Semimajor axis, flattening
    /// and projection.
    pub fn from_parameters(
        name: &str,
        semimajor_axis: f64,
        flattening: f64,
        projection: Projection,
    ) -> Result<EllipsoidModel, Error> {
        let ellps = Ellipsoid::new(semimajor_axis, flattening)?;
        EllipsoidModel::new(name, name, ellps, projection)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellps
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Semimajor axis, *a*
    pub fn a(&self) -> f64 {
        self.ellps.semimajor_axis()
    }

    /// Semiminor axis, *b*
    pub fn b(&self) -> f64 {
        self.ellps.semiminor_axis()
    }

    /// Flattening, *f*
    pub fn f(&self) -> f64 {
        self.ellps.flattening()
    }

    /// Squared eccentricity, *e²*
    pub fn e2(&self) -> f64 {
        self.ellps.eccentricity_squared()
    }

    /// Central meridian (degrees), if the model carries a projection
    pub fn lambda0(&self) -> Option<f64> {
        self.projection.lambda0()
    }

    /// Latitude of origin (degrees), for Lambert models only
    pub fn phi0(&self) -> Option<f64> {
        self.projection.phi0()
    }

    /// The defining and derived parameters, for display
    pub fn parameters(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("Semimajor axis (a)", Some(self.a())),
            ("Semiminor axis (b)", Some(self.b())),
            ("Flattening (f)", Some(self.f())),
            ("Squared eccentricity (e2)", Some(self.e2())),
            ("Central meridian (lambda0)", self.lambda0()),
            ("Latitude of origin (phi0)", self.phi0()),
        ]
    }
}

// ----- Tests ---------------------------------------------------------------------
