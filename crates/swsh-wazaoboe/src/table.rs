//! Whole-file conversion of `wazaoboe_total.bin`.

use swsh_common::{BinaryReader, Keyed, RecordRef};
use swsh_consts::{Category, Registry};
use zerocopy::IntoBytes;

use crate::layout::{RawLearnset, LEARNSET_SIZE};
use crate::learnset::{decode_learnset, encode_learnset, CapacityWarning, MoveEntry};
use crate::{Error, Result};

/// Level-up moves of every species, keyed by species name in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LearnsetTable {
    entries: Keyed<Vec<MoveEntry>>,
}

/// A packed table together with the truncations made while packing it.
#[derive(Debug, Clone)]
pub struct PackedLearnsets {
    pub data: Vec<u8>,
    pub warnings: Vec<CapacityWarning>,
}

impl LearnsetTable {
    /// Wrap already-built move lists.
    pub fn new(entries: Keyed<Vec<MoveEntry>>) -> Self {
        Self { entries }
    }

    /// Decode a whole table. Slot `i` is keyed by `pokemon[i]`.
    pub fn unpack(data: &[u8], registry: &Registry) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let count = reader.record_count::<RawLearnset>()?;
        let mut entries = Keyed::with_capacity(count);

        for index in 0..count {
            let raw: RawLearnset = reader.read_struct()?;
            let species = registry
                .name_of(Category::Pokemon, index)
                .map_err(|source| Error::Lookup {
                    record: RecordRef::Index(index),
                    field: "species",
                    source,
                })?;

            entries.insert(species, decode_learnset(&raw, registry, index)?);
        }

        tracing::debug!(records = count, "unpacked level-up learnsets");
        Ok(Self { entries })
    }

    /// Encode the table into one slot per species.
    ///
    /// Species absent from the table get an empty slot. Overlong move lists
    /// are truncated, logged, and returned as warnings.
    pub fn pack(&self, registry: &Registry) -> Result<PackedLearnsets> {
        let species_count = registry.len(Category::Pokemon);
        let mut data = vec![0xFFu8; species_count * LEARNSET_SIZE];
        let mut warnings = Vec::new();

        for (species, moves) in self.entries.iter() {
            let index = registry
                .index_of(Category::Pokemon, species)
                .map_err(|source| Error::Lookup {
                    record: RecordRef::from(species),
                    field: "species",
                    source,
                })?;

            let (raw, warning) = encode_learnset(moves, registry, species)?;
            if let Some(warning) = warning {
                tracing::warn!("{}", warning);
                warnings.push(warning);
            }

            let offset = index * LEARNSET_SIZE;
            data[offset..offset + LEARNSET_SIZE].copy_from_slice(raw.as_bytes());
        }

        tracing::debug!(
            entries = self.entries.len(),
            records = species_count,
            truncated = warnings.len(),
            "packed level-up learnsets"
        );
        Ok(PackedLearnsets { data, warnings })
    }

    /// Look up a species' moves.
    pub fn get(&self, species: &str) -> Option<&[MoveEntry]> {
        self.entries.get(species).map(Vec::as_slice)
    }

    /// Look up a species' moves for modification.
    pub fn get_mut(&mut self, species: &str) -> Option<&mut Vec<MoveEntry>> {
        self.entries.get_mut(species)
    }

    /// Number of species in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(species, moves)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vec<MoveEntry>)> {
        self.entries.iter()
    }
}
