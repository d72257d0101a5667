//! Whole-file conversion of `personal_total.bin`.

use swsh_common::{BinaryReader, Keyed, RecordRef};
use swsh_consts::{Category, Registry};
use zerocopy::IntoBytes;

use crate::layout::{RawPersonal, PERSONAL_SIZE};
use crate::{Error, PersonalEntry, Result};

/// All personal entries of a table, keyed by species name in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonalTable {
    entries: Keyed<PersonalEntry>,
}

impl PersonalTable {
    /// Wrap already-built entries.
    pub fn new(entries: Keyed<PersonalEntry>) -> Self {
        Self { entries }
    }

    /// Decode a whole table. Record `i` is keyed by `pokemon[i]`.
    pub fn unpack(data: &[u8], registry: &Registry) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let count = reader.record_count::<RawPersonal>()?;
        let mut entries = Keyed::with_capacity(count);

        for index in 0..count {
            let raw: RawPersonal = reader.read_struct()?;
            let name = registry
                .name_of(Category::Pokemon, index)
                .map_err(|source| Error::Lookup {
                    record: RecordRef::Index(index),
                    field: "species",
                    source,
                })?;

            entries.insert(name, PersonalEntry::decode(&raw, registry, index)?);
        }

        tracing::debug!(records = count, "unpacked personal table");
        Ok(Self { entries })
    }

    /// Encode the table into a blob holding one record per species.
    ///
    /// Species absent from the table keep the blank record.
    pub fn pack(&self, registry: &Registry) -> Result<Vec<u8>> {
        let species_count = registry.len(Category::Pokemon);
        let mut buffer = RawPersonal::blank().as_bytes().repeat(species_count);

        for (name, entry) in self.entries.iter() {
            let index = registry
                .index_of(Category::Pokemon, name)
                .map_err(|source| Error::Lookup {
                    record: RecordRef::from(name),
                    field: "species",
                    source,
                })?;

            let offset = index * PERSONAL_SIZE;
            let raw = entry.encode(registry, name)?;
            buffer[offset..offset + PERSONAL_SIZE].copy_from_slice(raw.as_bytes());
        }

        tracing::debug!(
            entries = self.entries.len(),
            records = species_count,
            "packed personal table"
        );
        Ok(buffer)
    }

    /// Look up an entry by species name.
    pub fn get(&self, species: &str) -> Option<&PersonalEntry> {
        self.entries.get(species)
    }

    /// Look up an entry by species name for modification.
    pub fn get_mut(&mut self, species: &str) -> Option<&mut PersonalEntry> {
        self.entries.get_mut(species)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(species, entry)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonalEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{registry, valid_record};
    use crate::layout::BLANK_RECORD;

    fn table_blob(records: &[RawPersonal]) -> Vec<u8> {
        records.iter().flat_map(|r| r.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_unpack_keys_by_species() {
        let registry = registry();
        let mut second = RawPersonal::blank();
        second.base_hp = 45;
        let data = table_blob(&[RawPersonal::blank(), second]);

        let table = PersonalTable::unpack(&data, &registry).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["Egg", "Bulbasaur"]
        );
        assert_eq!(table.get("Bulbasaur").unwrap().base_hp, 45);
    }

    #[test]
    fn test_table_roundtrip() {
        let registry = registry();
        let records: Vec<RawPersonal> = (0..3u8)
            .map(|seed| {
                let bytes: Vec<u8> = (0..PERSONAL_SIZE)
                    .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
                    .collect();
                valid_record(&bytes)
            })
            .collect();
        let data = table_blob(&records);

        let table = PersonalTable::unpack(&data, &registry).unwrap();
        assert_eq!(table.pack(&registry).unwrap(), data);
    }

    #[test]
    fn test_pack_places_by_name_and_fills_blanks() {
        let registry = registry();
        let mut entry = PersonalEntry::decode(&RawPersonal::blank(), &registry, 0usize).unwrap();
        entry.base_hp = 80;
        let table = PersonalTable::new([("Ivysaur", entry)].into_iter().collect());

        let data = table.pack(&registry).unwrap();
        assert_eq!(data.len(), 3 * PERSONAL_SIZE);
        assert_eq!(&data[..PERSONAL_SIZE], &BLANK_RECORD[..]);
        assert_eq!(&data[PERSONAL_SIZE..2 * PERSONAL_SIZE], &BLANK_RECORD[..]);
        assert_eq!(data[2 * PERSONAL_SIZE], 80);
    }

    #[test]
    fn test_partial_record_is_format_error() {
        let registry = registry();
        let data = vec![0u8; PERSONAL_SIZE + 3];

        assert!(matches!(
            PersonalTable::unpack(&data, &registry),
            Err(Error::Common(swsh_common::Error::InvalidLength {
                record_size: PERSONAL_SIZE,
                ..
            }))
        ));
    }

    #[test]
    fn test_more_records_than_species() {
        let registry = registry();
        let data = table_blob(&[RawPersonal::blank(); 4]);

        assert!(matches!(
            PersonalTable::unpack(&data, &registry),
            Err(Error::Lookup {
                record: RecordRef::Index(3),
                field: "species",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_species_key() {
        let registry = registry();
        let entry = PersonalEntry::decode(&RawPersonal::blank(), &registry, 0usize).unwrap();
        let table = PersonalTable::new([("Missingno", entry)].into_iter().collect());

        assert!(matches!(
            table.pack(&registry),
            Err(Error::Lookup { field: "species", .. })
        ));
    }
}
