//! Objects audioBlockFormat record
//!
//! One time slice of an object's rendering metadata. Every parameter is
//! read and written through the same five calls, selected by type:
//!
//! ```
//! use rf_adm::{AudioBlockFormatObjects, Cartesian, Gain, SphericalPosition};
//!
//! let mut block = AudioBlockFormatObjects::new(SphericalPosition::new(30.0, 0.0)?);
//! assert!(block.is_default::<Gain>());
//!
//! block.set(Gain::from_db(-6.0));
//! assert!(!block.is_default::<Gain>());
//! assert!(!block.get::<Cartesian>()?.get());
//! # Ok::<(), rf_adm::AdmError>(())
//! ```

mod coordinates;
mod dispatch;
mod parameter;

pub use parameter::{BlockParameter, OptionalParameter};

use crate::composite::{ChannelLock, JumpPosition, ObjectDivergence, ScreenEdgeLock};
use crate::error::{AdmError, AdmResult};
use crate::id::AudioBlockFormatId;
use crate::params::{
    Cartesian, Depth, Diffuse, Gain, Height, Importance, InitializeBlock, ScreenRef, Width,
};
use crate::position::{CartesianPosition, Position, SphericalPosition};
use crate::time::{Duration, Lduration, Lstart, Rtime};

/// Position facet of a block: at most one variant is stored
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum PositionSlot {
    #[default]
    Unset,
    Spherical(SphericalPosition),
    Cartesian(CartesianPosition),
}

/// audioBlockFormat of an audioChannelFormat with typeDefinition "Objects"
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlockFormatObjects {
    id: AudioBlockFormatId,
    rtime: Option<Rtime>,
    duration: Option<Duration>,
    lstart: Option<Lstart>,
    lduration: Option<Lduration>,
    initialize_block: Option<InitializeBlock>,
    cartesian: Option<Cartesian>,
    position: PositionSlot,
    width: Option<Width>,
    height: Option<Height>,
    depth: Option<Depth>,
    screen_edge_lock: Option<ScreenEdgeLock>,
    gain: Option<Gain>,
    diffuse: Option<Diffuse>,
    channel_lock: Option<ChannelLock>,
    object_divergence: Option<ObjectDivergence>,
    jump_position: Option<JumpPosition>,
    screen_ref: Option<ScreenRef>,
    importance: Option<Importance>,
}

/// Optional parameters applied at construction
///
/// ```
/// use rf_adm::{AudioBlockFormatObjects, BlockFormatOptions, CartesianPosition, Gain};
///
/// let block = AudioBlockFormatObjects::with_options(
///     CartesianPosition::new(0.5, 1.0)?,
///     BlockFormatOptions {
///         gain: Some(Gain::new(0.5)),
///         ..Default::default()
///     },
/// );
/// assert_eq!(block.get::<Gain>()?, Gain::new(0.5));
/// # Ok::<(), rf_adm::AdmError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockFormatOptions {
    pub id: Option<AudioBlockFormatId>,
    pub rtime: Option<Rtime>,
    pub duration: Option<Duration>,
    pub lstart: Option<Lstart>,
    pub lduration: Option<Lduration>,
    pub initialize_block: Option<InitializeBlock>,
    /// Applied after the position; a value contradicting it drops the position
    pub cartesian: Option<Cartesian>,
    pub width: Option<Width>,
    pub height: Option<Height>,
    pub depth: Option<Depth>,
    pub screen_edge_lock: Option<ScreenEdgeLock>,
    pub gain: Option<Gain>,
    pub diffuse: Option<Diffuse>,
    pub channel_lock: Option<ChannelLock>,
    pub object_divergence: Option<ObjectDivergence>,
    pub jump_position: Option<JumpPosition>,
    pub screen_ref: Option<ScreenRef>,
    pub importance: Option<Importance>,
}

impl AudioBlockFormatObjects {
    /// Create block at `position`; every other parameter is unset
    pub fn new(position: impl Into<Position>) -> Self {
        let mut block = Self {
            id: AudioBlockFormatId::default(),
            rtime: None,
            duration: None,
            lstart: None,
            lduration: None,
            initialize_block: None,
            cartesian: None,
            position: PositionSlot::Unset,
            width: None,
            height: None,
            depth: None,
            screen_edge_lock: None,
            gain: None,
            diffuse: None,
            channel_lock: None,
            object_divergence: None,
            jump_position: None,
            screen_ref: None,
            importance: None,
        };
        block.set(position.into());
        block
    }

    /// Create block at `position`, then apply `options`
    pub fn with_options(position: impl Into<Position>, options: BlockFormatOptions) -> Self {
        let mut block = Self::new(position);
        block.apply(options);
        block
    }

    fn apply(&mut self, options: BlockFormatOptions) {
        let BlockFormatOptions {
            id,
            rtime,
            duration,
            lstart,
            lduration,
            initialize_block,
            cartesian,
            width,
            height,
            depth,
            screen_edge_lock,
            gain,
            diffuse,
            channel_lock,
            object_divergence,
            jump_position,
            screen_ref,
            importance,
        } = options;

        self.set_if(id);
        self.set_if(rtime);
        self.set_if(duration);
        self.set_if(lstart);
        self.set_if(lduration);
        self.set_if(initialize_block);
        if let Some(flag) = cartesian {
            let before = self.position;
            self.set(flag);
            if before != self.position {
                log::warn!(
                    "{}: cartesian={} contradicts the initial position, position is now unset",
                    self.id,
                    flag.get()
                );
            }
        }
        self.set_if(width);
        self.set_if(height);
        self.set_if(depth);
        self.set_if(screen_edge_lock);
        self.set_if(gain);
        self.set_if(diffuse);
        self.set_if(channel_lock);
        self.set_if(object_divergence);
        self.set_if(jump_position);
        self.set_if(screen_ref);
        self.set_if(importance);
    }

    fn set_if<P: BlockParameter>(&mut self, value: Option<P>) {
        if let Some(value) = value {
            self.set(value);
        }
    }

    /// Block identifier
    #[inline]
    pub fn id(&self) -> AudioBlockFormatId {
        self.id
    }

    /// Current value of `P`, or its default when unset
    ///
    /// Fails with [`AdmError::NotSet`] when `P` has neither; check
    /// [`has`](Self::has) first.
    pub fn get<P: BlockParameter>(&self) -> AdmResult<P> {
        P::read(self)
            .or_else(P::default_value)
            .ok_or(AdmError::NotSet(P::NAME))
    }

    /// True if `P` is stored or has a default
    pub fn has<P: BlockParameter>(&self) -> bool {
        P::read(self).is_some() || P::default_value().is_some()
    }

    /// True if `P` has a default and its current value equals it
    pub fn is_default<P: BlockParameter + PartialEq>(&self) -> bool {
        match P::default_value() {
            Some(default) => P::read(self).is_none_or(|value| value == default),
            None => false,
        }
    }

    /// Store `value`
    ///
    /// Position and `Cartesian` writes keep the coordinate system
    /// consistent:
    /// - a [`CartesianPosition`] replaces any spherical one and sets `Cartesian` to true
    /// - a [`SphericalPosition`] replaces any Cartesian one and leaves the flag alone
    /// - a `Cartesian` flag that contradicts the stored position unsets the position
    pub fn set<P: BlockParameter>(&mut self, value: P) {
        value.write(self);
    }

    /// Remove `P`; parameters with a default report it again afterwards
    pub fn unset<P: OptionalParameter>(&mut self) {
        P::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spherical() -> SphericalPosition {
        SphericalPosition::new(-30.0, 10.0).unwrap()
    }

    fn cartesian() -> CartesianPosition {
        CartesianPosition::new(0.5, -0.5).unwrap()
    }

    #[test]
    fn test_new_spherical() {
        let block = AudioBlockFormatObjects::new(spherical());
        assert_eq!(block.get::<SphericalPosition>(), Ok(spherical()));
        assert!(!block.has::<CartesianPosition>());
        assert_eq!(block.cartesian, None);
        assert!(block.is_default::<Cartesian>());
    }

    #[test]
    fn test_new_cartesian_sets_flag() {
        let block = AudioBlockFormatObjects::new(cartesian());
        assert_eq!(block.get::<CartesianPosition>(), Ok(cartesian()));
        assert_eq!(block.get::<Cartesian>(), Ok(Cartesian::new(true)));
        assert!(!block.is_default::<Cartesian>());
    }

    #[test]
    fn test_position_variants_exclusive() {
        let mut block = AudioBlockFormatObjects::new(spherical());
        block.set(cartesian());
        assert_eq!(block.position, PositionSlot::Cartesian(cartesian()));
        assert_eq!(
            block.get::<SphericalPosition>(),
            Err(AdmError::NotSet("SphericalPosition"))
        );

        block.set(spherical());
        assert_eq!(block.position, PositionSlot::Spherical(spherical()));
        assert!(!block.has::<CartesianPosition>());
    }

    #[test]
    fn test_spherical_keeps_flag() {
        let mut block = AudioBlockFormatObjects::new(cartesian());
        block.set(spherical());
        assert_eq!(block.cartesian, Some(Cartesian::new(true)));

        let mut block = AudioBlockFormatObjects::new(spherical());
        block.set(spherical());
        assert_eq!(block.cartesian, None);
    }

    #[test]
    fn test_flag_discards_other_system() {
        let mut block = AudioBlockFormatObjects::new(cartesian());
        block.set(Cartesian::new(false));
        assert_eq!(block.position, PositionSlot::Unset);
        assert_eq!(block.get::<Position>(), Err(AdmError::NotSet("Position")));

        let mut block = AudioBlockFormatObjects::new(spherical());
        block.set(Cartesian::new(true));
        assert_eq!(block.position, PositionSlot::Unset);
        assert_eq!(block.cartesian, Some(Cartesian::new(true)));
    }

    #[test]
    fn test_flag_matching_position_keeps_it() {
        let mut block = AudioBlockFormatObjects::new(cartesian());
        block.set(Cartesian::new(true));
        assert_eq!(block.get::<CartesianPosition>(), Ok(cartesian()));

        let mut block = AudioBlockFormatObjects::new(spherical());
        block.set(Cartesian::new(false));
        assert_eq!(block.get::<SphericalPosition>(), Ok(spherical()));
    }

    #[test]
    fn test_unset_flag_drops_cartesian_position() {
        let mut block = AudioBlockFormatObjects::new(cartesian());
        block.unset::<Cartesian>();
        assert_eq!(block.cartesian, None);
        assert_eq!(block.position, PositionSlot::Unset);

        let mut block = AudioBlockFormatObjects::new(spherical());
        block.unset::<Cartesian>();
        assert_eq!(block.position, PositionSlot::Spherical(spherical()));
    }

    #[test]
    fn test_unset_positions() {
        let mut block = AudioBlockFormatObjects::new(spherical());
        block.unset::<CartesianPosition>();
        assert!(block.has::<SphericalPosition>());
        block.unset::<SphericalPosition>();
        assert!(!block.has::<Position>());

        let mut block = AudioBlockFormatObjects::new(cartesian());
        block.unset::<Position>();
        assert!(!block.has::<CartesianPosition>());
        assert!(block.get::<Cartesian>().unwrap().get());
    }

    #[test]
    fn test_options_applied_after_position() {
        let block = AudioBlockFormatObjects::with_options(
            spherical(),
            BlockFormatOptions {
                id: Some(AudioBlockFormatId::new(0x1001, 1)),
                gain: Some(Gain::new(0.5)),
                importance: Some(Importance::new(3).unwrap()),
                ..Default::default()
            },
        );
        assert_eq!(block.id().to_string(), "AB_00031001_00000001");
        assert_eq!(block.get::<Gain>(), Ok(Gain::new(0.5)));
        assert_eq!(block.get::<Importance>().map(Importance::get), Ok(3));
        assert!(block.has::<SphericalPosition>());
    }

    #[test]
    fn test_options_flag_contradicting_position() {
        let block = AudioBlockFormatObjects::with_options(
            spherical(),
            BlockFormatOptions {
                cartesian: Some(Cartesian::new(true)),
                ..Default::default()
            },
        );
        assert!(!block.has::<Position>());
        assert!(block.get::<Cartesian>().unwrap().get());
    }
}
