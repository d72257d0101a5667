//! Enumeration categories.

use std::fmt;

/// The closed set of enumeration categories in the side file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Species and their alternate forms.
    Pokemon,
    /// Moves.
    Moves,
    /// Elemental types.
    Types,
    /// Abilities.
    Abilities,
    /// Items.
    Items,
    /// Egg groups.
    EggGroups,
    /// Experience growth rates.
    GrowthTypes,
    /// Pokédex colors.
    DexColors,
    /// TM moves, in TM bit order.
    Tms,
    /// TR moves, in TR bit order.
    Trs,
    /// Tutor moves, in tutor bit order.
    MoveTutors,
    /// Isle of Armor tutor moves, in bit order.
    ArmorTutors,
    /// Evolution condition types.
    EvolutionTypes,
    /// Gender types used by the icon list.
    Genders,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 14;

    /// Get all categories in side-file order.
    pub const fn all() -> [Category; Self::COUNT] {
        [
            Category::Pokemon,
            Category::Moves,
            Category::Types,
            Category::Abilities,
            Category::Items,
            Category::EggGroups,
            Category::GrowthTypes,
            Category::DexColors,
            Category::Tms,
            Category::Trs,
            Category::MoveTutors,
            Category::ArmorTutors,
            Category::EvolutionTypes,
            Category::Genders,
        ]
    }

    /// The key of this category in the side file.
    pub const fn key(&self) -> &'static str {
        match self {
            Category::Pokemon => "pokemon",
            Category::Moves => "moves",
            Category::Types => "types",
            Category::Abilities => "abilities",
            Category::Items => "items",
            Category::EggGroups => "egg_groups",
            Category::GrowthTypes => "growth_types",
            Category::DexColors => "dex_colors",
            Category::Tms => "tms",
            Category::Trs => "trs",
            Category::MoveTutors => "move_tutors",
            Category::ArmorTutors => "armor_tutors",
            Category::EvolutionTypes => "evolution_types",
            Category::Genders => "genders",
        }
    }

    /// Position of this category in [`Category::all`].
    pub(crate) const fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
