//! ReelForge ADM Block Metadata
//!
//! Parameter model of the Audio Definition Model `audioBlockFormat` for
//! object-based content:
//!
//! ## Timing
//! - `rtime` / `duration` relative to the parent object
//! - Loudness timing (`lstart` / `lduration`)
//! - ADM clock text (`hh:mm:ss.fffff`)
//!
//! ## Position
//! - Spherical (azimuth / elevation / distance) or Cartesian (x / y / z)
//! - `cartesian` coordinate-system flag kept consistent with the position
//! - Extent (width / height / depth)
//!
//! ## Rendering hints
//! - Gain, diffuseness, importance
//! - Channel lock, object divergence, jump position
//! - Screen reference and screen edge lock
//!
//! All parameters of a block are accessed through
//! [`AudioBlockFormatObjects::get`], [`has`](AudioBlockFormatObjects::has),
//! [`is_default`](AudioBlockFormatObjects::is_default),
//! [`set`](AudioBlockFormatObjects::set) and
//! [`unset`](AudioBlockFormatObjects::unset), selected by parameter type.

pub mod block;
pub mod composite;
pub mod params;
pub mod position;
pub mod time;

mod error;
mod id;

pub use block::{AudioBlockFormatObjects, BlockFormatOptions, BlockParameter, OptionalParameter};
pub use composite::{
    ChannelLock, HorizontalEdge, JumpPosition, ObjectDivergence, ScreenEdgeLock, VerticalEdge,
};
pub use error::{AdmError, AdmResult};
pub use id::{AudioBlockFormatId, TYPE_OBJECTS};
pub use params::{
    Cartesian, Depth, Diffuse, Gain, Height, Importance, InitializeBlock, ScreenRef, Width,
};
pub use position::{CartesianPosition, Position, SphericalPosition};
pub use time::{Duration, Lduration, Lstart, Rtime, Time};
