//! Bit-packed sub-fields of a personal record.
//!
//! Every shift and mask for the record lives here; the entry codec only calls
//! `unpack` and `pack`. Packing merges into a base value so that bits outside
//! the known sub-fields keep whatever the base (normally the blank record)
//! holds.

/// Width mask of one EV yield sub-field.
const EV_MASK: u16 = 0b11;
/// Bit offsets of the EV yield sub-fields.
const EV_HP_SHIFT: u16 = 0;
const EV_ATK_SHIFT: u16 = 2;
const EV_DEF_SHIFT: u16 = 4;
const EV_SPD_SHIFT: u16 = 6;
const EV_SP_ATK_SHIFT: u16 = 8;
const EV_SP_DEF_SHIFT: u16 = 10;
const FAIL_TELEKINESIS_BIT: u16 = 1 << 12;
/// Every bit owned by [`EvYield`].
const EV_YIELD_MASK: u16 = 0x0FFF | FAIL_TELEKINESIS_BIT;

const DEX_COLOR_MASK: u8 = 0x3F;
const HAS_DEX_ENTRY_BIT: u8 = 0x40;
const IS_VISUAL_FORM_BIT: u8 = 0x80;

const IS_REGIONAL_FORM_BIT: u16 = 1 << 0;
const CAN_NOT_DYNAMAX_BIT: u16 = 1 << 2;
const SPECIES_FLAGS_MASK: u16 = IS_REGIONAL_FORM_BIT | CAN_NOT_DYNAMAX_BIT;

/// Effort values granted on defeat, 0-3 per stat.
///
/// Values above 3 are masked with `& 3` when packed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvYield {
    #[cfg_attr(feature = "serde", serde(rename = "evs_hp"))]
    pub hp: u8,
    #[cfg_attr(feature = "serde", serde(rename = "evs_atk"))]
    pub atk: u8,
    #[cfg_attr(feature = "serde", serde(rename = "evs_def"))]
    pub def: u8,
    #[cfg_attr(feature = "serde", serde(rename = "evs_sp_atk"))]
    pub sp_atk: u8,
    #[cfg_attr(feature = "serde", serde(rename = "evs_sp_def"))]
    pub sp_def: u8,
    #[cfg_attr(feature = "serde", serde(rename = "evs_spd"))]
    pub spd: u8,
    pub fail_telekinesis: bool,
}

impl EvYield {
    pub fn unpack(raw: u16) -> Self {
        let field = |shift: u16| ((raw >> shift) & EV_MASK) as u8;
        Self {
            hp: field(EV_HP_SHIFT),
            atk: field(EV_ATK_SHIFT),
            def: field(EV_DEF_SHIFT),
            sp_atk: field(EV_SP_ATK_SHIFT),
            sp_def: field(EV_SP_DEF_SHIFT),
            spd: field(EV_SPD_SHIFT),
            fail_telekinesis: raw & FAIL_TELEKINESIS_BIT != 0,
        }
    }

    pub fn pack(&self, base: u16) -> u16 {
        let field = |value: u8, shift: u16| (u16::from(value) & EV_MASK) << shift;
        let mut raw = base & !EV_YIELD_MASK;
        raw |= field(self.hp, EV_HP_SHIFT);
        raw |= field(self.atk, EV_ATK_SHIFT);
        raw |= field(self.def, EV_DEF_SHIFT);
        raw |= field(self.spd, EV_SPD_SHIFT);
        raw |= field(self.sp_atk, EV_SP_ATK_SHIFT);
        raw |= field(self.sp_def, EV_SP_DEF_SHIFT);
        if self.fail_telekinesis {
            raw |= FAIL_TELEKINESIS_BIT;
        }
        raw
    }
}

/// The pokedex bits byte: a 6-bit color code and two flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DexBits {
    pub color: u8,
    pub has_dex_entry: bool,
    pub is_visual_form: bool,
}

impl DexBits {
    /// Largest color code the byte can hold.
    pub const MAX_COLOR: u8 = DEX_COLOR_MASK;

    pub fn unpack(raw: u8) -> Self {
        Self {
            color: raw & DEX_COLOR_MASK,
            has_dex_entry: raw & HAS_DEX_ENTRY_BIT != 0,
            is_visual_form: raw & IS_VISUAL_FORM_BIT != 0,
        }
    }

    pub fn pack(&self) -> u8 {
        let mut raw = self.color & DEX_COLOR_MASK;
        if self.has_dex_entry {
            raw |= HAS_DEX_ENTRY_BIT;
        }
        if self.is_visual_form {
            raw |= IS_VISUAL_FORM_BIT;
        }
        raw
    }
}

/// Species flag word: regional form at bit 0, dynamax lock at bit 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeciesFlags {
    pub is_regional_form: bool,
    pub can_not_dynamax: bool,
}

impl SpeciesFlags {
    pub fn unpack(raw: u16) -> Self {
        Self {
            is_regional_form: raw & IS_REGIONAL_FORM_BIT != 0,
            can_not_dynamax: raw & CAN_NOT_DYNAMAX_BIT != 0,
        }
    }

    pub fn pack(&self, base: u16) -> u16 {
        let mut raw = base & !SPECIES_FLAGS_MASK;
        if self.is_regional_form {
            raw |= IS_REGIONAL_FORM_BIT;
        }
        if self.can_not_dynamax {
            raw |= CAN_NOT_DYNAMAX_BIT;
        }
        raw
    }
}
