//! Scalar block parameters

use serde::{Deserialize, Serialize};

use crate::error::{AdmError, AdmResult, check_range};

macro_rules! flag_parameter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(bool);

        impl $name {
            #[inline]
            pub fn new(value: bool) -> Self {
                Self(value)
            }

            #[inline]
            pub fn get(self) -> bool {
                self.0
            }
        }

        impl From<bool> for $name {
            fn from(value: bool) -> Self {
                Self(value)
            }
        }
    };
}

flag_parameter!(
    /// Coordinate system flag: true when the block position is Cartesian
    Cartesian
);
flag_parameter!(
    /// Renderer must not interpolate from the previous block
    InitializeBlock
);
flag_parameter!(
    /// Position is relative to the reference screen
    ScreenRef
);

macro_rules! extent_parameter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(f32);

        impl $name {
            pub const DEFAULT: Self = Self(0.0);

            #[inline]
            pub fn new(value: f32) -> Self {
                Self(value)
            }

            #[inline]
            pub fn get(self) -> f32 {
                self.0
            }
        }
    };
}

extent_parameter!(
    /// Horizontal extent (degrees when spherical, normalized when Cartesian)
    Width
);
extent_parameter!(
    /// Vertical extent
    Height
);
extent_parameter!(
    /// Extent along the distance axis
    Depth
);

/// Linear gain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gain(f32);

impl Gain {
    pub const UNITY: Self = Self(1.0);

    #[inline]
    pub fn new(linear: f32) -> Self {
        Self(linear)
    }

    /// Gain from decibels
    #[inline]
    pub fn from_db(db: f32) -> Self {
        Self(10.0_f32.powf(db / 20.0))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Gain in decibels (-inf for silence)
    #[inline]
    pub fn as_db(self) -> f32 {
        20.0 * self.0.log10()
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Diffuseness ratio (0 = direct, 1 = fully diffuse)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Diffuse(f32);

impl Diffuse {
    pub const DEFAULT: Self = Self(0.0);

    pub fn new(value: f32) -> AdmResult<Self> {
        check_range("Diffuse", value, 0.0, 1.0).map(Self)
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Diffuse {
    type Error = AdmError;

    fn try_from(value: f32) -> AdmResult<Self> {
        Self::new(value)
    }
}

impl From<Diffuse> for f32 {
    fn from(diffuse: Diffuse) -> Self {
        diffuse.0
    }
}

/// Object importance, 0 (least) to 10 (most)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Importance(u8);

impl Importance {
    pub const MAX: Self = Self(10);

    pub fn new(value: u8) -> AdmResult<Self> {
        if value > Self::MAX.0 {
            return Err(AdmError::invalid("Importance", format!("{value} outside [0, 10]")));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Importance {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Importance {
    type Error = AdmError;

    fn try_from(value: u8) -> AdmResult<Self> {
        Self::new(value)
    }
}

impl From<Importance> for u8 {
    fn from(importance: Importance) -> Self {
        importance.0
    }
}
