//! On-disk layout of a personal record.

use zerocopy::byteorder::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Size of one personal record in bytes.
pub const PERSONAL_SIZE: usize = 0xB0; // 176 bytes

/// Width of the TM and TR learnset bit arrays.
pub const TM_BITS_SIZE: usize = 16;

/// Width of the tutor and armor tutor learnset bit arrays.
pub const TUTOR_BITS_SIZE: usize = 4;

/// Size of the opaque blob at 0x60.
pub const UNK60_SIZE: usize = 72;

/// Canonical blank record.
///
/// Newly packed tables start from copies of this record so that bytes the
/// codec never touches keep the values the game expects: gender ratio
/// genderless (0xFF), `has_dex_entry` set, and the flag pattern inside the
/// 0x60 blob.
pub const BLANK_RECORD: [u8; PERSONAL_SIZE] = {
    let mut record = [0u8; PERSONAL_SIZE];
    record[0x12] = 0xFF;
    record[0x21] = 0x40;

    let mut i = 0x60;
    while i <= 0x68 {
        record[i] = 0x01;
        i += 2;
    }

    let mut i = 0x83;
    while i <= 0x91 {
        record[i] = 0x01;
        i += 1;
    }

    record
};

/// Raw personal record, field for field as stored in `personal_total.bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct RawPersonal {
    pub base_hp: u8,
    pub base_atk: u8,
    pub base_def: u8,
    pub base_spd: u8,
    pub base_sp_atk: u8,
    pub base_sp_def: u8,
    pub type_1: u8,
    pub type_2: u8,
    pub catch_rate: u8,
    pub evolution_stage: u8,
    /// Packed EV yield; see [`crate::bitfield::EvYield`].
    pub ev_yield: U16,
    pub common_item: U16,
    pub rare_item: U16,
    pub very_rare_item: U16,
    pub gender_rate: u8,
    pub hatch_cycles: u8,
    pub base_friendship: u8,
    pub growth_type: u8,
    pub egg_group_1: u8,
    pub egg_group_2: u8,
    pub ability_1: U16,
    pub ability_2: U16,
    pub hidden_ability: U16,
    pub first_form_index: U16,
    pub form_count: u8,
    /// Packed dex color and flags; see [`crate::bitfield::DexBits`].
    pub pokedex_bits: u8,
    pub base_exp: U16,
    pub height: U16,
    pub weight: U16,
    pub tm_bits: [u8; TM_BITS_SIZE],
    pub move_tutor_bits: [u8; TUTOR_BITS_SIZE],
    pub tr_bits: [u8; TM_BITS_SIZE],
    pub icon_id: U32,
    pub special_z_item: U16,
    pub special_z_base_move: U16,
    pub special_z_move: U16,
    pub egg_species: U16,
    pub egg_form: U16,
    /// Packed species flags; see [`crate::bitfield::SpeciesFlags`].
    pub species_flags: U16,
    pub pokedex_number: U16,
    pub unk5e: U16,
    pub unk60: [u8; UNK60_SIZE],
    pub armor_tutor_bits: [u8; TUTOR_BITS_SIZE],
    pub armor_dex_number: U16,
    pub crown_dex_number: U16,
}

impl RawPersonal {
    /// A copy of the canonical blank record.
    pub fn blank() -> Self {
        zerocopy::transmute!(BLANK_RECORD)
    }
}
