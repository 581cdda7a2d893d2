//! Object position in spherical or Cartesian coordinates

use serde::{Deserialize, Serialize};

use crate::error::{AdmResult, check_range};

/// Spherical position (polar ADM coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SphericalFields")]
pub struct SphericalPosition {
    /// Azimuth in degrees (-180 to 180, positive = left)
    azimuth: f32,
    /// Elevation in degrees (-90 to 90, positive = up)
    elevation: f32,
    /// Normalized distance from the listener
    distance: f32,
}

impl SphericalPosition {
    pub const DEFAULT_DISTANCE: f32 = 1.0;

    /// Create position at the default distance
    pub fn new(azimuth: f32, elevation: f32) -> AdmResult<Self> {
        Ok(Self {
            azimuth: check_range("Azimuth", azimuth, -180.0, 180.0)?,
            elevation: check_range("Elevation", elevation, -90.0, 90.0)?,
            distance: Self::DEFAULT_DISTANCE,
        })
    }

    /// Same direction at another distance
    pub fn with_distance(self, distance: f32) -> AdmResult<Self> {
        Ok(Self {
            distance: check_range("Distance", distance, 0.0, f32::MAX)?,
            ..self
        })
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    #[inline]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

impl Default for SphericalPosition {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: Self::DEFAULT_DISTANCE,
        }
    }
}

#[derive(Deserialize)]
struct SphericalFields {
    azimuth: f32,
    elevation: f32,
    #[serde(default = "default_distance")]
    distance: f32,
}

fn default_distance() -> f32 {
    SphericalPosition::DEFAULT_DISTANCE
}

impl TryFrom<SphericalFields> for SphericalPosition {
    type Error = crate::AdmError;

    fn try_from(fields: SphericalFields) -> AdmResult<Self> {
        Self::new(fields.azimuth, fields.elevation)?.with_distance(fields.distance)
    }
}

/// Cartesian position (normalized room coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartesianFields")]
pub struct CartesianPosition {
    /// X coordinate (-1 to 1, positive = right)
    x: f32,
    /// Y coordinate (-1 to 1, positive = front)
    y: f32,
    /// Z coordinate (-1 to 1, positive = up)
    z: f32,
}

impl CartesianPosition {
    /// Create position on the z = 0 plane
    pub fn new(x: f32, y: f32) -> AdmResult<Self> {
        Ok(Self {
            x: check_range("X", x, -1.0, 1.0)?,
            y: check_range("Y", y, -1.0, 1.0)?,
            z: 0.0,
        })
    }

    /// Same x/y at another height
    pub fn with_z(self, z: f32) -> AdmResult<Self> {
        Ok(Self {
            z: check_range("Z", z, -1.0, 1.0)?,
            ..self
        })
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }
}

#[derive(Deserialize)]
struct CartesianFields {
    x: f32,
    y: f32,
    #[serde(default)]
    z: f32,
}

impl TryFrom<CartesianFields> for CartesianPosition {
    type Error = crate::AdmError;

    fn try_from(fields: CartesianFields) -> AdmResult<Self> {
        Self::new(fields.x, fields.y)?.with_z(fields.z)
    }
}

/// Whichever position variant a block currently carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Spherical(SphericalPosition),
    Cartesian(CartesianPosition),
}

impl Position {
    pub fn is_cartesian(&self) -> bool {
        matches!(self, Self::Cartesian(_))
    }

    pub fn as_spherical(&self) -> Option<SphericalPosition> {
        match self {
            Self::Spherical(p) => Some(*p),
            Self::Cartesian(_) => None,
        }
    }

    pub fn as_cartesian(&self) -> Option<CartesianPosition> {
        match self {
            Self::Cartesian(p) => Some(*p),
            Self::Spherical(_) => None,
        }
    }
}

impl From<SphericalPosition> for Position {
    fn from(position: SphericalPosition) -> Self {
        Self::Spherical(position)
    }
}

impl From<CartesianPosition> for Position {
    fn from(position: CartesianPosition) -> Self {
        Self::Cartesian(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdmError;

    #[test]
    fn test_spherical_ranges() {
        let p = SphericalPosition::new(30.0, 15.0).unwrap();
        assert_eq!(p.distance(), 1.0);
        assert_eq!(p.with_distance(0.5).unwrap().distance(), 0.5);

        assert!(SphericalPosition::new(180.5, 0.0).is_err());
        assert!(SphericalPosition::new(0.0, -91.0).is_err());
        assert!(p.with_distance(-0.1).is_err());
        assert!(matches!(
            SphericalPosition::new(f32::NAN, 0.0),
            Err(AdmError::InvalidValue { parameter: "Azimuth", .. })
        ));
    }

    #[test]
    fn test_cartesian_ranges() {
        let p = CartesianPosition::new(-1.0, 1.0).unwrap().with_z(0.25).unwrap();
        assert_eq!((p.x(), p.y(), p.z()), (-1.0, 1.0, 0.25));
        assert!(CartesianPosition::new(1.1, 0.0).is_err());
        assert!(p.with_z(-2.0).is_err());
    }

    #[test]
    fn test_position_variants() {
        let pos = Position::from(CartesianPosition::default());
        assert!(pos.is_cartesian());
        assert!(pos.as_spherical().is_none());

        let pos = Position::from(SphericalPosition::default());
        assert_eq!(pos.as_spherical(), Some(SphericalPosition::default()));
    }

    #[test]
    fn test_deserialize_validates() {
        let p: SphericalPosition =
            serde_json::from_str(r#"{"azimuth": -30.0, "elevation": 0.0}"#).unwrap();
        assert_eq!(p.distance(), 1.0);
        let out_of_range = r#"{"azimuth": 200.0, "elevation": 0.0}"#;
        assert!(serde_json::from_str::<SphericalPosition>(out_of_range).is_err());

        let pos: Position =
            serde_json::from_str(r#"{"cartesian": {"x": 0.5, "y": -0.5}}"#).unwrap();
        assert_eq!(pos.as_cartesian().map(|p| p.x()), Some(0.5));
    }
}
