use crate::internal::*;
use chrono::{DateTime, Local};
use std::fmt;

/// The four conversions offered by a [`CoordinateTransformer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    GeoToCart,
    CartToGeo,
    GeoToProj,
    ProjToGeo,
}

impl ConversionDirection {
    /// Short, human readable label, as used in [`TransformationRecord`]s
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ConversionDirection::GeoToCart => "Geo -> Cart",
            ConversionDirection::CartToGeo => "Cart -> Geo",
            ConversionDirection::GeoToProj => "Geo -> UTM/Lambert",
            ConversionDirection::ProjToGeo => "UTM/Lambert -> Geo",
        }
    }

    /// The natural conversion for a model: Projected systems convert between
    /// geodetic and projected coordinates, plain ellipsoids between
    /// geodetic and cartesian. `geodetic_input` selects the direction.
    #[must_use]
    pub fn default_for(model: &EllipsoidModel, geodetic_input: bool) -> ConversionDirection {
        match (model.projection().is_projected(), geodetic_input) {
            (true, true) => ConversionDirection::GeoToProj,
            (true, false) => ConversionDirection::ProjToGeo,
            (false, true) => ConversionDirection::GeoToCart,
            (false, false) => ConversionDirection::CartToGeo,
        }
    }

    /// Is the input of this conversion geodetic?
    #[must_use]
    pub fn from_geodetic(&self) -> bool {
        matches!(
            self,
            ConversionDirection::GeoToCart | ConversionDirection::GeoToProj
        )
    }

    /// Is the output of this conversion geodetic?
    #[must_use]
    pub fn to_geodetic(&self) -> bool {
        !self.from_geodetic()
    }

    /// Text form of an input tuple of this conversion
    #[must_use]
    pub fn format_input(&self, values: &[f64]) -> String {
        format_tuple(self.from_geodetic(), values)
    }

    /// Text form of an output tuple of this conversion
    #[must_use]
    pub fn format_output(&self, values: &[f64]) -> String {
        format_tuple(self.to_geodetic(), values)
    }
}

// Geodetic tuples show angles with 6 decimals (~0.1 m), lengths always get 3 (1 mm)
fn format_tuple(geodetic: bool, values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if geodetic && i < 2 {
                format!("{v:.6}")
            } else {
                format!("{v:.3}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A textual account of one completed conversion, for the caller to keep
/// (or not). Nothing is retained by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformationRecord {
    pub ellipsoid_name: String,
    pub timestamp: DateTime<Local>,
    pub input: String,
    pub output: String,
    pub direction: ConversionDirection,
}

impl TransformationRecord {
    /// A record timestamped now
    pub fn new(
        ellipsoid_name: &str,
        input: String,
        output: String,
        direction: ConversionDirection,
    ) -> TransformationRecord {
        TransformationRecord {
            ellipsoid_name: ellipsoid_name.to_string(),
            timestamp: Local::now(),
            input,
            output,
            direction,
        }
    }

    /// The timestamp, to the second, in local time
    #[must_use]
    pub fn time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl fmt::Display for TransformationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {} => {}",
            self.time(),
            self.ellipsoid_name,
            self.direction,
            self.input,
            self.output
        )
    }
}

// ----- Tests ---------------------------------------------------------------------
