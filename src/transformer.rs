use crate::internal::*;
use crate::projection::Projector;

/// The conversions available for one [`EllipsoidModel`]. Constructed by
/// [`select_ellipsoid`](crate::select_ellipsoid), or directly from a model.
///
/// A transformer is immutable: Every conversion is a pure function of its
/// input, the model, and the [`Settings`].
#[derive(Debug, Clone)]
pub struct CoordinateTransformer {
    model: EllipsoidModel,
    settings: Settings,
    projector: Option<Projector>,
}

impl CoordinateTransformer {
    pub fn new(model: EllipsoidModel) -> Result<CoordinateTransformer, Error> {
        CoordinateTransformer::with_settings(model, Settings::default())
    }

    pub fn with_settings(
        model: EllipsoidModel,
        settings: Settings,
    ) -> Result<CoordinateTransformer, Error> {
        let projector = Projector::new(&model)?;
        debug!("CoordinateTransformer for {} with {settings:?}", model.name());
        Ok(CoordinateTransformer {
            model,
            settings,
            projector,
        })
    }

    pub fn model(&self) -> &EllipsoidModel {
        &self.model
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ----- Geodetic <-> Cartesian ------------------------------------------------

    pub fn geodetic_to_cartesian(
        &self,
        geo: &GeodeticPosition,
    ) -> Result<CartesianPosition, Error> {
        geo.ensure_finite()?;
        Ok(self.model.ellipsoid().cartesian(geo))
    }

    pub fn cartesian_to_geodetic(
        &self,
        cart: &CartesianPosition,
    ) -> Result<GeodeticPosition, Error> {
        Ok(self.cartesian_to_geodetic_with_stats(cart)?.0)
    }

    /// As [`cartesian_to_geodetic`](Self::cartesian_to_geodetic), but also
    /// report the number of iterations spent
    pub fn cartesian_to_geodetic_with_stats(
        &self,
        cart: &CartesianPosition,
    ) -> Result<(GeodeticPosition, usize), Error> {
        cart.ensure_finite()?;
        self.model.ellipsoid().geographic(cart, &self.settings)
    }

    // ----- Lambert zone validation -----------------------------------------------

    /// Is (lat, lon), in degrees, inside the extent of the model's Lambert
    /// zone? Models without an extent accept every point.
    #[must_use]
    pub fn validate_lambert(&self, lat: f64, lon: f64) -> bool {
        match self.model.projection() {
            Projection::Lambert(LambertZone {
                extent: Some(extent),
                ..
            }) => extent.contains(lat, lon),
            _ => true,
        }
    }

    /// As [`validate_lambert`](Self::validate_lambert), but failing with
    /// [`Error::CoordinateOutOfZone`]
    pub fn check_lambert(&self, lat: f64, lon: f64) -> Result<(), Error> {
        if self.validate_lambert(lat, lon) {
            return Ok(());
        }
        let zone = self.model.name().to_string();
        warn!("({lat}, {lon}) is outside the extent of {zone}");
        Err(Error::CoordinateOutOfZone { zone, lat, lon })
    }

    // ----- Geodetic <-> Projected ------------------------------------------------

    fn projector(&self) -> Result<&Projector, Error> {
        self.projector
            .as_ref()
            .ok_or_else(|| Error::NotProjected(self.model.name().to_string()))
    }

    /// Forward projection. The height is ignored. Lambert zones reject
    /// points outside their extent.
    pub fn geodetic_to_projected(
        &self,
        geo: &GeodeticPosition,
    ) -> Result<ProjectedPosition, Error> {
        let projector = self.projector()?;
        geo.ensure_finite()?;
        self.check_lambert(geo.lat, geo.lon)?;
        projector.fwd(geo)
    }

    /// Inverse projection. The height of the result is zero.
    pub fn projected_to_geodetic(
        &self,
        projected: &ProjectedPosition,
    ) -> Result<GeodeticPosition, Error> {
        let projector = self.projector()?;
        projected.ensure_finite()?;
        projector.inv(projected, &self.settings)
    }

    // ----- Dispatch --------------------------------------------------------------

    /// Convert a tuple of numbers in the given direction.
    ///
    /// Geodetic input is (lat, lon) or (lat, lon, h), cartesian input is
    /// (X, Y, Z), projected input is (easting, northing), optionally
    /// followed by a height, which is passed through to the output.
    /// Projected output is (easting, northing); all other output has
    /// three elements.
    pub fn convert(
        &self,
        direction: ConversionDirection,
        values: &[f64],
    ) -> Result<Vec<f64>, Error> {
        use ConversionDirection::*;
        trace!("convert: {direction} {values:?}");
        match direction {
            GeoToCart => {
                let geo = GeodeticPosition::from_slice(values)?;
                Ok(self.geodetic_to_cartesian(&geo)?.to_vec())
            }
            CartToGeo => {
                let cart = CartesianPosition::from_slice(values)?;
                Ok(self.cartesian_to_geodetic(&cart)?.to_vec())
            }
            GeoToProj => {
                let geo = GeodeticPosition::from_slice(values)?;
                Ok(self.geodetic_to_projected(&geo)?.to_vec())
            }
            ProjToGeo => {
                let (pair, h) = match *values {
                    [easting, northing, h] => ([easting, northing], h),
                    _ => (
                        <[f64; 2]>::try_from(values).map_err(|_| {
                            Error::InvalidInput(format!(
                                "a projected coordinate has 2 or 3 elements, got {}",
                                values.len()
                            ))
                        })?,
                        0.,
                    ),
                };
                if !h.is_finite() {
                    return Err(Error::InvalidInput(format!("non-finite height {h}")));
                }
                let projected = ProjectedPosition::from_slice(&pair)?;
                let mut geo = self.projected_to_geodetic(&projected)?;
                geo.h = h;
                Ok(geo.to_vec())
            }
        }
    }

    /// As [`convert`](Self::convert), also returning a record of the
    /// conversion in text form
    pub fn convert_with_record(
        &self,
        direction: ConversionDirection,
        values: &[f64],
    ) -> Result<(Vec<f64>, TransformationRecord), Error> {
        let output = self.convert(direction, values)?;
        let input = direction.format_input(values);
        let text = direction.format_output(&output);
        let record = TransformationRecord::new(self.model.name(), input, text, direction);
        debug!("{record}");
        Ok((output, record))
    }
}

// ----- Tests ---------------------------------------------------------------------
