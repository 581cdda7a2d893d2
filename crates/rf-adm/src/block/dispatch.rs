//! Slot bindings for parameters without side effects

use super::AudioBlockFormatObjects;
use super::parameter::{BlockParameter, OptionalParameter, sealed::Sealed};
use crate::composite::{ChannelLock, JumpPosition, ObjectDivergence, ScreenEdgeLock};
use crate::id::AudioBlockFormatId;
use crate::params::{Depth, Diffuse, Gain, Height, Importance, InitializeBlock, ScreenRef, Width};
use crate::time::{Duration, Lduration, Lstart, Rtime};

macro_rules! stored_parameter {
    ($ty:ident, $field:ident $(, default = $default:expr)?) => {
        impl Sealed for $ty {}

        impl BlockParameter for $ty {
            const NAME: &'static str = stringify!($ty);

            $(
                fn default_value() -> Option<Self> {
                    Some($default)
                }
            )?

            fn read(block: &AudioBlockFormatObjects) -> Option<Self> {
                block.$field
            }

            fn write(self, block: &mut AudioBlockFormatObjects) {
                block.$field = Some(self);
            }
        }

        impl OptionalParameter for $ty {
            fn clear(block: &mut AudioBlockFormatObjects) {
                block.$field = None;
            }
        }
    };
}

stored_parameter!(Rtime, rtime, default = Rtime::default());
stored_parameter!(Duration, duration);
stored_parameter!(Lstart, lstart);
stored_parameter!(Lduration, lduration);
stored_parameter!(InitializeBlock, initialize_block);
stored_parameter!(Width, width, default = Width::DEFAULT);
stored_parameter!(Height, height, default = Height::DEFAULT);
stored_parameter!(Depth, depth, default = Depth::DEFAULT);
stored_parameter!(ScreenEdgeLock, screen_edge_lock);
stored_parameter!(Gain, gain, default = Gain::UNITY);
stored_parameter!(Diffuse, diffuse, default = Diffuse::DEFAULT);
stored_parameter!(ChannelLock, channel_lock, default = ChannelLock::default());
stored_parameter!(ObjectDivergence, object_divergence, default = ObjectDivergence::default());
stored_parameter!(JumpPosition, jump_position, default = JumpPosition::default());
stored_parameter!(ScreenRef, screen_ref, default = ScreenRef::default());
stored_parameter!(Importance, importance, default = Importance::MAX);

// Mandatory: always present, never removed.
impl Sealed for AudioBlockFormatId {}

impl BlockParameter for AudioBlockFormatId {
    const NAME: &'static str = "AudioBlockFormatId";

    fn read(block: &AudioBlockFormatObjects) -> Option<Self> {
        Some(block.id)
    }

    fn write(self, block: &mut AudioBlockFormatObjects) {
        block.id = self;
    }
}
