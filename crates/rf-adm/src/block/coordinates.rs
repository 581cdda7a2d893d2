//! Position and coordinate-system parameters
//!
//! The block keeps one position slot. Writing either position variant
//! replaces the other; a Cartesian position also raises the `Cartesian`
//! flag. Writing the flag drops a stored position of the other system.

use super::parameter::{BlockParameter, OptionalParameter, sealed::Sealed};
use super::{AudioBlockFormatObjects, PositionSlot};
use crate::params::Cartesian;
use crate::position::{CartesianPosition, Position, SphericalPosition};

/// Drop the stored position if it belongs to the other coordinate system
fn invalidate_position(block: &mut AudioBlockFormatObjects, cartesian: bool) {
    let stale = match block.position {
        PositionSlot::Spherical(_) => cartesian,
        PositionSlot::Cartesian(_) => !cartesian,
        PositionSlot::Unset => false,
    };
    if stale {
        log::debug!(
            "{}: cartesian={} discards stored {:?}",
            block.id,
            cartesian,
            block.position
        );
        block.position = PositionSlot::Unset;
    }
}

impl Sealed for Cartesian {}

impl BlockParameter for Cartesian {
    const NAME: &'static str = "Cartesian";

    fn default_value() -> Option<Self> {
        Some(Cartesian::default())
    }

    fn read(block: &AudioBlockFormatObjects) -> Option<Self> {
        block.cartesian
    }

    fn write(self, block: &mut AudioBlockFormatObjects) {
        invalidate_position(block, self.get());
        block.cartesian = Some(self);
    }
}

impl OptionalParameter for Cartesian {
    fn clear(block: &mut AudioBlockFormatObjects) {
        invalidate_position(block, Cartesian::default().get());
        block.cartesian = None;
    }
}

impl Sealed for SphericalPosition {}

impl BlockParameter for SphericalPosition {
    const NAME: &'static str = "SphericalPosition";

    fn read(block: &AudioBlockFormatObjects) -> Option<Self> {
        match block.position {
            PositionSlot::Spherical(position) => Some(position),
            _ => None,
        }
    }

    // The flag is left as it is: unset stays unset.
    fn write(self, block: &mut AudioBlockFormatObjects) {
        log::trace!("{}: spherical position {:?}", block.id, self);
        block.position = PositionSlot::Spherical(self);
    }
}

impl OptionalParameter for SphericalPosition {
    fn clear(block: &mut AudioBlockFormatObjects) {
        if let PositionSlot::Spherical(_) = block.position {
            block.position = PositionSlot::Unset;
        }
    }
}

impl Sealed for CartesianPosition {}

impl BlockParameter for CartesianPosition {
    const NAME: &'static str = "CartesianPosition";

    fn read(block: &AudioBlockFormatObjects) -> Option<Self> {
        match block.position {
            PositionSlot::Cartesian(position) => Some(position),
            _ => None,
        }
    }

    fn write(self, block: &mut AudioBlockFormatObjects) {
        log::trace!("{}: cartesian position {:?}", block.id, self);
        block.position = PositionSlot::Cartesian(self);
        block.cartesian = Some(Cartesian::new(true));
    }
}

impl OptionalParameter for CartesianPosition {
    fn clear(block: &mut AudioBlockFormatObjects) {
        if let PositionSlot::Cartesian(_) = block.position {
            block.position = PositionSlot::Unset;
        }
    }
}

impl Sealed for Position {}

impl BlockParameter for Position {
    const NAME: &'static str = "Position";

    fn read(block: &AudioBlockFormatObjects) -> Option<Self> {
        match block.position {
            PositionSlot::Spherical(position) => Some(Position::Spherical(position)),
            PositionSlot::Cartesian(position) => Some(Position::Cartesian(position)),
            PositionSlot::Unset => None,
        }
    }

    fn write(self, block: &mut AudioBlockFormatObjects) {
        match self {
            Position::Spherical(position) => position.write(block),
            Position::Cartesian(position) => position.write(block),
        }
    }
}

impl OptionalParameter for Position {
    fn clear(block: &mut AudioBlockFormatObjects) {
        block.position = PositionSlot::Unset;
    }
}
