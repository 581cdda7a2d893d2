//! Typed access contract between a block and its parameters

use super::AudioBlockFormatObjects;

pub(super) mod sealed {
    pub trait Sealed {}
}

/// A parameter stored in an Objects audioBlockFormat
///
/// Each implementing type owns exactly one slot of the block, so
/// `block.get::<Gain>()` resolves to that slot at compile time.
pub trait BlockParameter: Sized + sealed::Sealed {
    /// ADM name, used in errors and logs
    const NAME: &'static str;

    /// Value observed while nothing is stored, if the parameter has one
    fn default_value() -> Option<Self> {
        None
    }

    #[doc(hidden)]
    fn read(block: &AudioBlockFormatObjects) -> Option<Self>;

    #[doc(hidden)]
    fn write(self, block: &mut AudioBlockFormatObjects);
}

/// A parameter that can be removed from a block
pub trait OptionalParameter: BlockParameter {
    #[doc(hidden)]
    fn clear(block: &mut AudioBlockFormatObjects);
}
