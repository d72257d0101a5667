//! Shared registry and record builders for unit tests.

use swsh_consts::Registry;
use zerocopy::byteorder::little_endian::U16;
use zerocopy::FromBytes;

use crate::layout::{RawPersonal, PERSONAL_SIZE};

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{:03}", prefix, i)).collect()
}

pub fn registry() -> Registry {
    let json = serde_json::json!({
        "pokemon": ["Egg", "Bulbasaur", "Ivysaur"],
        "moves": ["None", "Pound", "Karate Chop"],
        "types": ["Normal", "Fighting", "Flying"],
        "abilities": ["None", "Stench", "Drizzle"],
        "items": ["None", "Master Ball"],
        "egg_groups": ["None", "Monster"],
        "growth_types": ["Medium Fast", "Erratic"],
        "dex_colors": ["Red", "Blue", "Yellow"],
        "tms": numbered("TM", 128),
        "trs": numbered("TR", 128),
        "move_tutors": numbered("Tutor", 32),
        "armor_tutors": numbered("Armor", 32),
        "evolution_types": ["None"],
        "genders": ["Male", "Female", "Genderless"],
    });
    Registry::from_json(&json.to_string()).unwrap()
}

/// Fold arbitrary bytes into a record every field of which resolves against
/// [`registry`] and whose packed words carry no bits outside known fields.
pub fn valid_record(bytes: &[u8]) -> RawPersonal {
    assert_eq!(bytes.len(), PERSONAL_SIZE);
    let mut raw = RawPersonal::read_from_bytes(bytes).unwrap();

    let fold = |value: U16, len: u16| U16::new(value.get() % len);

    raw.type_1 %= 3;
    raw.type_2 %= 3;
    raw.ev_yield = U16::new(raw.ev_yield.get() & 0x1FFF);
    raw.common_item = fold(raw.common_item, 2);
    raw.rare_item = fold(raw.rare_item, 2);
    raw.very_rare_item = fold(raw.very_rare_item, 2);
    raw.growth_type %= 2;
    raw.egg_group_1 %= 2;
    raw.egg_group_2 %= 2;
    raw.ability_1 = fold(raw.ability_1, 3);
    raw.ability_2 = fold(raw.ability_2, 3);
    raw.hidden_ability = fold(raw.hidden_ability, 3);
    raw.first_form_index = fold(raw.first_form_index, 3);
    raw.pokedex_bits = (raw.pokedex_bits & 0xC0) | ((raw.pokedex_bits & 0x3F) % 3);
    raw.special_z_item = fold(raw.special_z_item, 2);
    raw.special_z_base_move = fold(raw.special_z_base_move, 3);
    raw.special_z_move = fold(raw.special_z_move, 3);
    raw.egg_species = fold(raw.egg_species, 3);
    raw.species_flags = U16::new(raw.species_flags.get() & 0b101);
    raw
}
