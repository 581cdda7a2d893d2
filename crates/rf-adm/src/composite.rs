//! Composite block parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdmError, AdmResult, check_range};
use crate::time::Time;

/// Horizontal screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Vertical screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl FromStr for HorizontalEdge {
    type Err = AdmError;

    fn from_str(s: &str) -> AdmResult<Self> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(AdmError::invalid(
                "ScreenEdgeLock",
                format!("'{other}' is not a horizontal edge"),
            )),
        }
    }
}

impl FromStr for VerticalEdge {
    type Err = AdmError;

    fn from_str(s: &str) -> AdmResult<Self> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(AdmError::invalid(
                "ScreenEdgeLock",
                format!("'{other}' is not a vertical edge"),
            )),
        }
    }
}

impl fmt::Display for HorizontalEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl fmt::Display for VerticalEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

/// Locks the object to screen edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenEdgeLock {
    pub horizontal: Option<HorizontalEdge>,
    pub vertical: Option<VerticalEdge>,
}

impl ScreenEdgeLock {
    pub fn new(horizontal: Option<HorizontalEdge>, vertical: Option<VerticalEdge>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Build from attribute text (`"left"`, `"top"`, ...)
    pub fn parse(horizontal: Option<&str>, vertical: Option<&str>) -> AdmResult<Self> {
        Ok(Self {
            horizontal: horizontal.map(str::parse).transpose()?,
            vertical: vertical.map(str::parse).transpose()?,
        })
    }
}

/// Snap the object to the nearest loudspeaker
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChannelLockFields")]
pub struct ChannelLock {
    flag: bool,
    max_distance: Option<f32>,
}

impl ChannelLock {
    pub fn new(flag: bool) -> Self {
        Self {
            flag,
            max_distance: None,
        }
    }

    /// Only lock to speakers within `max_distance` (0 to 2)
    pub fn with_max_distance(self, max_distance: f32) -> AdmResult<Self> {
        Ok(Self {
            max_distance: Some(check_range("MaxDistance", max_distance, 0.0, 2.0)?),
            ..self
        })
    }

    #[inline]
    pub fn flag(&self) -> bool {
        self.flag
    }

    #[inline]
    pub fn max_distance(&self) -> Option<f32> {
        self.max_distance
    }
}

#[derive(Deserialize)]
struct ChannelLockFields {
    flag: bool,
    max_distance: Option<f32>,
}

impl TryFrom<ChannelLockFields> for ChannelLock {
    type Error = AdmError;

    fn try_from(fields: ChannelLockFields) -> AdmResult<Self> {
        let lock = Self::new(fields.flag);
        match fields.max_distance {
            Some(distance) => lock.with_max_distance(distance),
            None => Ok(lock),
        }
    }
}

/// Split the object into a centre and two divergent virtual sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObjectDivergenceFields")]
pub struct ObjectDivergence {
    value: f32,
    azimuth_range: Option<f32>,
    position_range: Option<f32>,
}

impl ObjectDivergence {
    pub const DEFAULT_AZIMUTH_RANGE: f32 = 45.0;
    pub const DEFAULT_POSITION_RANGE: f32 = 0.0;

    /// Divergence amount (0 to 1)
    pub fn new(value: f32) -> AdmResult<Self> {
        Ok(Self {
            value: check_range("ObjectDivergence", value, 0.0, 1.0)?,
            azimuth_range: None,
            position_range: None,
        })
    }

    /// Spread of the virtual sources in degrees (spherical blocks)
    pub fn with_azimuth_range(self, degrees: f32) -> AdmResult<Self> {
        Ok(Self {
            azimuth_range: Some(check_range("AzimuthRange", degrees, 0.0, 180.0)?),
            ..self
        })
    }

    /// Spread of the virtual sources along x (Cartesian blocks)
    pub fn with_position_range(self, range: f32) -> AdmResult<Self> {
        Ok(Self {
            position_range: Some(check_range("PositionRange", range, 0.0, 1.0)?),
            ..self
        })
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn azimuth_range(&self) -> f32 {
        self.azimuth_range.unwrap_or(Self::DEFAULT_AZIMUTH_RANGE)
    }

    pub fn position_range(&self) -> f32 {
        self.position_range.unwrap_or(Self::DEFAULT_POSITION_RANGE)
    }

    pub fn has_azimuth_range(&self) -> bool {
        self.azimuth_range.is_some()
    }

    pub fn has_position_range(&self) -> bool {
        self.position_range.is_some()
    }
}

#[derive(Deserialize)]
struct ObjectDivergenceFields {
    value: f32,
    azimuth_range: Option<f32>,
    position_range: Option<f32>,
}

impl TryFrom<ObjectDivergenceFields> for ObjectDivergence {
    type Error = AdmError;

    fn try_from(fields: ObjectDivergenceFields) -> AdmResult<Self> {
        let mut divergence = Self::new(fields.value)?;
        if let Some(degrees) = fields.azimuth_range {
            divergence = divergence.with_azimuth_range(degrees)?;
        }
        if let Some(range) = fields.position_range {
            divergence = divergence.with_position_range(range)?;
        }
        Ok(divergence)
    }
}

/// Jump to the block position instead of interpolating over the whole block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpPosition {
    pub flag: bool,
    /// Length of the transition at block start
    pub interpolation_length: Option<Time>,
}

impl JumpPosition {
    pub fn new(flag: bool) -> Self {
        Self {
            flag,
            interpolation_length: None,
        }
    }

    pub fn with_interpolation_length(self, length: Time) -> Self {
        Self {
            interpolation_length: Some(length),
            ..self
        }
    }
}
