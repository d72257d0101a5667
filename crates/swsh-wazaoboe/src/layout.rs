//! On-disk layout of a level-up learnset slot.

use zerocopy::byteorder::little_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Number of move pairs per species.
pub const MAX_MOVES: usize = 65;

/// Size of one species' learnset slot in bytes.
pub const LEARNSET_SIZE: usize = 0x104; // 65 * 4

/// Marks an unused move or level.
pub const SENTINEL: u16 = 0xFFFF;

/// One `(move, level)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct RawMoveSlot {
    pub move_id: U16,
    pub level: U16,
}

impl RawMoveSlot {
    /// An unused slot.
    pub const EMPTY: Self = Self {
        move_id: U16::new(SENTINEL),
        level: U16::new(SENTINEL),
    };

    /// Check whether this slot holds a move.
    pub fn is_used(&self) -> bool {
        self.move_id.get() != SENTINEL && self.level.get() != SENTINEL
    }
}

/// All move pairs of one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct RawLearnset {
    pub slots: [RawMoveSlot; MAX_MOVES],
}

impl RawLearnset {
    /// A learnset with every slot unused.
    pub const EMPTY: Self = Self {
        slots: [RawMoveSlot::EMPTY; MAX_MOVES],
    };
}
