//! `personal_total.bin` codec for Pokémon Sword and Shield.
//!
//! The personal table holds one 0xB0-byte record per species and form: base
//! stats, types, abilities, held items, breeding data, dex numbers and four
//! bit-packed learnsets. This crate converts the table to readable entries,
//! with every coded field resolved through a [`swsh_consts::Registry`], and
//! back to bytes.
//!
//! # Record Layout
//!
//! All multi-byte values are little-endian. See [`RawPersonal`] for the full
//! field list; the packed words are:
//!
//! - `0x0A` EV yield: six 2-bit yields (hp, atk, def, spd, sp_atk, sp_def)
//!   followed by the `fail_telekinesis` flag at bit 12
//! - `0x21` dex bits: color code in bits 0-5, `has_dex_entry` (bit 6),
//!   `is_visual_form` (bit 7)
//! - `0x5A` species flags: `is_regional_form` (bit 0), `can_not_dynamax` (bit 2)
//!
//! The word at `0x5E` and the 72 bytes at `0x60` are not understood. They
//! are carried through unchanged, the blob as hex text.
//!
//! # Example
//!
//! ```no_run
//! use swsh_consts::Registry;
//! use swsh_personal::PersonalTable;
//!
//! let registry = Registry::load("constants.json")?;
//! let data = std::fs::read("personal_total.bin")?;
//!
//! let mut table = PersonalTable::unpack(&data, &registry)?;
//! if let Some(entry) = table.get_mut("Bulbasaur") {
//!     entry.base_spd = 90;
//! }
//! std::fs::write("personal_total.bin", table.pack(&registry)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bitfield;
mod entry;
mod error;
mod layout;
mod table;

#[cfg(test)]
mod fixtures;

pub use entry::{Learnset, PersonalEntry};
pub use error::{Error, Result};
pub use layout::{RawPersonal, BLANK_RECORD, PERSONAL_SIZE};
pub use table::PersonalTable;
