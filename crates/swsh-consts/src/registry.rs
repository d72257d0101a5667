//! The loaded enumeration registry.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{Category, Error, LookupError, Result};

/// Side-file layout: one ordered name list per category.
///
/// Every category must be present; unrelated keys are ignored.
#[derive(Debug, Deserialize)]
struct ConstantsFile {
    pokemon: Vec<String>,
    moves: Vec<String>,
    types: Vec<String>,
    abilities: Vec<String>,
    items: Vec<String>,
    egg_groups: Vec<String>,
    growth_types: Vec<String>,
    dex_colors: Vec<String>,
    tms: Vec<String>,
    trs: Vec<String>,
    move_tutors: Vec<String>,
    armor_tutors: Vec<String>,
    evolution_types: Vec<String>,
    genders: Vec<String>,
}

impl ConstantsFile {
    fn take(&mut self, category: Category) -> Vec<String> {
        let list = match category {
            Category::Pokemon => &mut self.pokemon,
            Category::Moves => &mut self.moves,
            Category::Types => &mut self.types,
            Category::Abilities => &mut self.abilities,
            Category::Items => &mut self.items,
            Category::EggGroups => &mut self.egg_groups,
            Category::GrowthTypes => &mut self.growth_types,
            Category::DexColors => &mut self.dex_colors,
            Category::Tms => &mut self.tms,
            Category::Trs => &mut self.trs,
            Category::MoveTutors => &mut self.move_tutors,
            Category::ArmorTutors => &mut self.armor_tutors,
            Category::EvolutionTypes => &mut self.evolution_types,
            Category::Genders => &mut self.genders,
        };
        std::mem::take(list)
    }
}

/// Ordered names of one category plus the reverse index.
#[derive(Debug, Clone, Default)]
struct NameTable {
    names: Vec<String>,
    positions: FxHashMap<String, usize>,
}

impl NameTable {
    fn build(category: Category, names: Vec<String>) -> Result<Self> {
        let mut positions = FxHashMap::with_capacity_and_hasher(names.len(), Default::default());

        for (index, name) in names.iter().enumerate() {
            if let Some(first) = positions.insert(name.clone(), index) {
                return Err(Error::DuplicateName {
                    category,
                    name: name.clone(),
                    first,
                    second: index,
                });
            }
        }

        Ok(Self { names, positions })
    }
}

/// Read-only name/index lookup for every [`Category`].
#[derive(Debug, Clone)]
pub struct Registry {
    tables: Vec<NameTable>,
}

impl Registry {
    /// Load the registry from a `constants.json` side file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let registry = Self::from_json(&text)?;

        tracing::debug!(
            path = %path.display(),
            pokemon = registry.len(Category::Pokemon),
            moves = registry.len(Category::Moves),
            "loaded constants"
        );

        Ok(registry)
    }

    /// Parse the registry from side-file JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let mut file: ConstantsFile = serde_json::from_str(text)?;

        let tables = Category::all()
            .into_iter()
            .map(|category| NameTable::build(category, file.take(category)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tables })
    }

    fn table(&self, category: Category) -> &NameTable {
        &self.tables[category.slot()]
    }

    /// All names of a category, in index order.
    pub fn names(&self, category: Category) -> &[String] {
        &self.table(category).names
    }

    /// Number of names in a category.
    pub fn len(&self, category: Category) -> usize {
        self.table(category).names.len()
    }

    /// Resolve an index to its name.
    pub fn name_of(&self, category: Category, index: usize) -> std::result::Result<&str, LookupError> {
        let names = self.names(category);
        names
            .get(index)
            .map(String::as_str)
            .ok_or(LookupError::IndexOutOfRange {
                category,
                index,
                len: names.len(),
            })
    }

    /// Resolve a name to its index. Matching is exact and case-sensitive.
    pub fn index_of(&self, category: Category, name: &str) -> std::result::Result<usize, LookupError> {
        self.table(category)
            .positions
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::UnknownName {
                category,
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> String {
        let mut object = serde_json::Map::new();
        for category in Category::all() {
            let names: Vec<String> = (0..3).map(|i| format!("{}_{}", category, i)).collect();
            object.insert(category.key().to_string(), names.into());
        }
        object.insert(
            "types".to_string(),
            serde_json::json!(["Normal", "Fighting", "Flying"]),
        );
        serde_json::Value::Object(object).to_string()
    }

    #[test]
    fn test_name_and_index() {
        let registry = Registry::from_json(&sample_json()).unwrap();

        assert_eq!(registry.name_of(Category::Types, 2).unwrap(), "Flying");
        assert_eq!(registry.index_of(Category::Types, "Fighting").unwrap(), 1);
        assert_eq!(registry.len(Category::Genders), 3);
        assert_eq!(registry.names(Category::Moves)[0], "moves_0");
    }

    #[test]
    fn test_index_out_of_range() {
        let registry = Registry::from_json(&sample_json()).unwrap();

        assert_eq!(
            registry.name_of(Category::Types, 3),
            Err(LookupError::IndexOutOfRange {
                category: Category::Types,
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = Registry::from_json(&sample_json()).unwrap();

        assert!(matches!(
            registry.index_of(Category::Types, "flying"),
            Err(LookupError::UnknownName { category: Category::Types, .. })
        ));
    }

    #[test]
    fn test_missing_category_fails() {
        let json = serde_json::json!({ "pokemon": ["Egg"] }).to_string();
        assert!(matches!(Registry::from_json(&json), Err(Error::Json(_))));
    }

    #[test]
    fn test_duplicate_name_fails() {
        let mut value: serde_json::Value = serde_json::from_str(&sample_json()).unwrap();
        value["items"] = serde_json::json!(["None", "Potion", "None"]);

        match Registry::from_json(&value.to_string()) {
            Err(Error::DuplicateName {
                category,
                name,
                first,
                second,
            }) => {
                assert_eq!(category, Category::Items);
                assert_eq!(name, "None");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("expected DuplicateName, got {:?}", other),
        }
    }
}
