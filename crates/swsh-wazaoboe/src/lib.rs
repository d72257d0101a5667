//! `wazaoboe_total.bin` codec for Pokémon Sword and Shield.
//!
//! Each species owns a 0x104-byte slot of 65 `(move, level)` pairs, both
//! little-endian u16. Unused pairs hold `0xFFFF, 0xFFFF`. Decoding drops
//! every sentinel pair wherever it sits; encoding writes the moves in order
//! and pads the remainder with sentinels.
//!
//! A species can hold at most [`MAX_MOVES`] moves. Longer lists are
//! truncated and reported as a [`CapacityWarning`] instead of failing.

mod error;
mod layout;
mod learnset;
mod table;

pub use error::{Error, Result};
pub use layout::{RawLearnset, RawMoveSlot, LEARNSET_SIZE, MAX_MOVES, SENTINEL};
pub use learnset::{decode_learnset, encode_learnset, CapacityWarning, MoveEntry};
pub use table::{LearnsetTable, PackedLearnsets};
