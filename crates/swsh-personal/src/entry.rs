//! Conversion between raw personal records and readable entries.

use swsh_common::flags::{decode_flags, encode_flags};
use swsh_common::RecordRef;
use swsh_consts::{Category, Registry};
use zerocopy::byteorder::little_endian::{U16, U32};

use crate::bitfield::{DexBits, EvYield, SpeciesFlags};
use crate::layout::{RawPersonal, TM_BITS_SIZE, TUTOR_BITS_SIZE, UNK60_SIZE};
use crate::{Error, Result};

/// The four bit-packed learnsets of a personal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Learnset {
    Tm,
    Tr,
    MoveTutor,
    ArmorTutor,
}

impl Learnset {
    /// Registry category listing the moves in bit order.
    pub const fn category(&self) -> Category {
        match self {
            Learnset::Tm => Category::Tms,
            Learnset::Tr => Category::Trs,
            Learnset::MoveTutor => Category::MoveTutors,
            Learnset::ArmorTutor => Category::ArmorTutors,
        }
    }

    /// Width of the bit array in bytes.
    pub const fn width(&self) -> usize {
        match self {
            Learnset::Tm | Learnset::Tr => TM_BITS_SIZE,
            Learnset::MoveTutor | Learnset::ArmorTutor => TUTOR_BITS_SIZE,
        }
    }

    /// Entry field holding this learnset.
    pub const fn field(&self) -> &'static str {
        self.category().key()
    }
}

/// One species' base stats with every coded field resolved to its name.
///
/// Field order follows the JSON layout, which groups related values rather
/// than mirroring the binary order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalEntry {
    pub type_1: String,
    pub type_2: String,
    pub base_hp: u8,
    pub base_atk: u8,
    pub base_def: u8,
    pub base_sp_atk: u8,
    pub base_sp_def: u8,
    pub base_spd: u8,
    pub ability_1: String,
    pub ability_2: String,
    pub hidden_ability: String,
    pub height: u16,
    pub weight: u16,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub ev_yield: EvYield,
    pub catch_rate: u8,
    pub gender_rate: u8,
    pub base_exp: u16,
    pub growth_type: String,
    pub special_z_item: String,
    pub special_z_base_move: String,
    pub special_z_move: String,
    pub egg_group_1: String,
    pub egg_group_2: String,
    pub evolution_stage: u8,
    pub egg_species: String,
    pub egg_form: u16,
    pub hatch_cycles: u8,
    pub base_friendship: u8,
    pub common_item: String,
    pub rare_item: String,
    pub very_rare_item: String,
    pub first_form_index: String,
    pub form_count: u8,
    pub icon_id: u32,
    pub pokedex_number: u16,
    pub armor_dex_number: u16,
    pub crown_dex_number: u16,
    pub dex_color: String,
    pub has_dex_entry: bool,
    pub is_visual_form: bool,
    pub is_regional_form: bool,
    pub can_not_dynamax: bool,
    pub tms: Vec<String>,
    pub trs: Vec<String>,
    pub move_tutors: Vec<String>,
    pub armor_tutors: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "unk5E"))]
    pub unk5e: u16,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "unk60", with = "swsh_common::hex_bytes")
    )]
    pub unk60: [u8; UNK60_SIZE],
}

/// Registry lookups that report failures against one record.
struct Resolver<'a> {
    registry: &'a Registry,
    record: RecordRef,
}

impl Resolver<'_> {
    fn name(&self, category: Category, field: &'static str, code: impl Into<usize>) -> Result<String> {
        self.registry
            .name_of(category, code.into())
            .map(str::to_string)
            .map_err(|source| Error::Lookup {
                record: self.record.clone(),
                field,
                source,
            })
    }

    fn code<T: TryFrom<usize>>(&self, category: Category, field: &'static str, name: &str) -> Result<T> {
        let index = self
            .registry
            .index_of(category, name)
            .map_err(|source| Error::Lookup {
                record: self.record.clone(),
                field,
                source,
            })?;

        T::try_from(index).map_err(|_| Error::FieldOverflow {
            record: self.record.clone(),
            field,
            index,
            bits: (std::mem::size_of::<T>() * 8) as u32,
        })
    }

    fn code16(&self, category: Category, field: &'static str, name: &str) -> Result<U16> {
        self.code::<u16>(category, field, name).map(U16::new)
    }

    fn learnset(&self, learnset: Learnset, bits: &[u8]) -> Vec<String> {
        decode_flags(self.registry.names(learnset.category()), bits)
    }

    fn learnset_bits<const N: usize>(&self, learnset: Learnset, moves: &[String]) -> Result<[u8; N]> {
        let packed = encode_flags(self.registry.names(learnset.category()), moves, N).map_err(
            |source| Error::Learnset {
                record: self.record.clone(),
                field: learnset.field(),
                source,
            },
        )?;

        let mut bits = [0u8; N];
        bits.copy_from_slice(&packed);
        Ok(bits)
    }
}

impl PersonalEntry {
    /// Decode a raw record, resolving every coded field through `registry`.
    pub fn decode(raw: &RawPersonal, registry: &Registry, record: impl Into<RecordRef>) -> Result<Self> {
        let r = Resolver {
            registry,
            record: record.into(),
        };
        let dex_bits = DexBits::unpack(raw.pokedex_bits);
        let species_flags = SpeciesFlags::unpack(raw.species_flags.get());

        Ok(Self {
            type_1: r.name(Category::Types, "type_1", raw.type_1)?,
            type_2: r.name(Category::Types, "type_2", raw.type_2)?,
            base_hp: raw.base_hp,
            base_atk: raw.base_atk,
            base_def: raw.base_def,
            base_sp_atk: raw.base_sp_atk,
            base_sp_def: raw.base_sp_def,
            base_spd: raw.base_spd,
            ability_1: r.name(Category::Abilities, "ability_1", raw.ability_1.get())?,
            ability_2: r.name(Category::Abilities, "ability_2", raw.ability_2.get())?,
            hidden_ability: r.name(Category::Abilities, "hidden_ability", raw.hidden_ability.get())?,
            height: raw.height.get(),
            weight: raw.weight.get(),
            ev_yield: EvYield::unpack(raw.ev_yield.get()),
            catch_rate: raw.catch_rate,
            gender_rate: raw.gender_rate,
            base_exp: raw.base_exp.get(),
            growth_type: r.name(Category::GrowthTypes, "growth_type", raw.growth_type)?,
            special_z_item: r.name(Category::Items, "special_z_item", raw.special_z_item.get())?,
            special_z_base_move: r.name(
                Category::Moves,
                "special_z_base_move",
                raw.special_z_base_move.get(),
            )?,
            special_z_move: r.name(Category::Moves, "special_z_move", raw.special_z_move.get())?,
            egg_group_1: r.name(Category::EggGroups, "egg_group_1", raw.egg_group_1)?,
            egg_group_2: r.name(Category::EggGroups, "egg_group_2", raw.egg_group_2)?,
            evolution_stage: raw.evolution_stage,
            egg_species: r.name(Category::Pokemon, "egg_species", raw.egg_species.get())?,
            egg_form: raw.egg_form.get(),
            hatch_cycles: raw.hatch_cycles,
            base_friendship: raw.base_friendship,
            common_item: r.name(Category::Items, "common_item", raw.common_item.get())?,
            rare_item: r.name(Category::Items, "rare_item", raw.rare_item.get())?,
            very_rare_item: r.name(Category::Items, "very_rare_item", raw.very_rare_item.get())?,
            first_form_index: r.name(
                Category::Pokemon,
                "first_form_index",
                raw.first_form_index.get(),
            )?,
            form_count: raw.form_count,
            icon_id: raw.icon_id.get(),
            pokedex_number: raw.pokedex_number.get(),
            armor_dex_number: raw.armor_dex_number.get(),
            crown_dex_number: raw.crown_dex_number.get(),
            dex_color: r.name(Category::DexColors, "dex_color", dex_bits.color)?,
            has_dex_entry: dex_bits.has_dex_entry,
            is_visual_form: dex_bits.is_visual_form,
            is_regional_form: species_flags.is_regional_form,
            can_not_dynamax: species_flags.can_not_dynamax,
            tms: r.learnset(Learnset::Tm, &raw.tm_bits),
            trs: r.learnset(Learnset::Tr, &raw.tr_bits),
            move_tutors: r.learnset(Learnset::MoveTutor, &raw.move_tutor_bits),
            armor_tutors: r.learnset(Learnset::ArmorTutor, &raw.armor_tutor_bits),
            unk5e: raw.unk5e.get(),
            unk60: raw.unk60,
        })
    }

    /// Encode this entry onto a copy of the blank record.
    pub fn encode(&self, registry: &Registry, record: impl Into<RecordRef>) -> Result<RawPersonal> {
        self.encode_onto(RawPersonal::blank(), registry, record)
    }

    /// Encode this entry onto `base`.
    ///
    /// Bits of the packed sub-field words that no entry field covers keep the
    /// value they have in `base`.
    pub fn encode_onto(
        &self,
        base: RawPersonal,
        registry: &Registry,
        record: impl Into<RecordRef>,
    ) -> Result<RawPersonal> {
        let r = Resolver {
            registry,
            record: record.into(),
        };
        let mut raw = base;

        let color: u8 = r.code(Category::DexColors, "dex_color", &self.dex_color)?;
        if color > DexBits::MAX_COLOR {
            return Err(Error::FieldOverflow {
                record: r.record.clone(),
                field: "dex_color",
                index: color.into(),
                bits: 6,
            });
        }

        raw.base_hp = self.base_hp;
        raw.base_atk = self.base_atk;
        raw.base_def = self.base_def;
        raw.base_spd = self.base_spd;
        raw.base_sp_atk = self.base_sp_atk;
        raw.base_sp_def = self.base_sp_def;
        raw.type_1 = r.code(Category::Types, "type_1", &self.type_1)?;
        raw.type_2 = r.code(Category::Types, "type_2", &self.type_2)?;
        raw.catch_rate = self.catch_rate;
        raw.evolution_stage = self.evolution_stage;
        raw.ev_yield = U16::new(self.ev_yield.pack(base.ev_yield.get()));
        raw.common_item = r.code16(Category::Items, "common_item", &self.common_item)?;
        raw.rare_item = r.code16(Category::Items, "rare_item", &self.rare_item)?;
        raw.very_rare_item = r.code16(Category::Items, "very_rare_item", &self.very_rare_item)?;
        raw.gender_rate = self.gender_rate;
        raw.hatch_cycles = self.hatch_cycles;
        raw.base_friendship = self.base_friendship;
        raw.growth_type = r.code(Category::GrowthTypes, "growth_type", &self.growth_type)?;
        raw.egg_group_1 = r.code(Category::EggGroups, "egg_group_1", &self.egg_group_1)?;
        raw.egg_group_2 = r.code(Category::EggGroups, "egg_group_2", &self.egg_group_2)?;
        raw.ability_1 = r.code16(Category::Abilities, "ability_1", &self.ability_1)?;
        raw.ability_2 = r.code16(Category::Abilities, "ability_2", &self.ability_2)?;
        raw.hidden_ability = r.code16(Category::Abilities, "hidden_ability", &self.hidden_ability)?;
        raw.first_form_index =
            r.code16(Category::Pokemon, "first_form_index", &self.first_form_index)?;
        raw.form_count = self.form_count;
        raw.pokedex_bits = DexBits {
            color,
            has_dex_entry: self.has_dex_entry,
            is_visual_form: self.is_visual_form,
        }
        .pack();
        raw.base_exp = U16::new(self.base_exp);
        raw.height = U16::new(self.height);
        raw.weight = U16::new(self.weight);
        raw.tm_bits = r.learnset_bits(Learnset::Tm, &self.tms)?;
        raw.move_tutor_bits = r.learnset_bits(Learnset::MoveTutor, &self.move_tutors)?;
        raw.tr_bits = r.learnset_bits(Learnset::Tr, &self.trs)?;
        raw.icon_id = U32::new(self.icon_id);
        raw.special_z_item = r.code16(Category::Items, "special_z_item", &self.special_z_item)?;
        raw.special_z_base_move =
            r.code16(Category::Moves, "special_z_base_move", &self.special_z_base_move)?;
        raw.special_z_move = r.code16(Category::Moves, "special_z_move", &self.special_z_move)?;
        raw.egg_species = r.code16(Category::Pokemon, "egg_species", &self.egg_species)?;
        raw.egg_form = U16::new(self.egg_form);
        raw.species_flags = U16::new(
            SpeciesFlags {
                is_regional_form: self.is_regional_form,
                can_not_dynamax: self.can_not_dynamax,
            }
            .pack(base.species_flags.get()),
        );
        raw.pokedex_number = U16::new(self.pokedex_number);
        raw.unk5e = U16::new(self.unk5e);
        raw.unk60 = self.unk60;
        raw.armor_tutor_bits = r.learnset_bits(Learnset::ArmorTutor, &self.armor_tutors)?;
        raw.armor_dex_number = U16::new(self.armor_dex_number);
        raw.crown_dex_number = U16::new(self.crown_dex_number);

        Ok(raw)
    }
}
