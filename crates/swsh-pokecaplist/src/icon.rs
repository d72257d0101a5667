//! Icon list records and the list codec.

use swsh_common::{BinaryReader, RecordRef};
use swsh_consts::{Category, Registry};
use zerocopy::byteorder::little_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::{Error, Result};

/// Size of one icon record in bytes.
pub const ICON_SIZE: usize = 8;

/// Raw icon record as stored in `pokecaplist.bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct RawIcon {
    pub icon_id: U16,
    pub form_id: U16,
    pub gender_type: U16,
    pub padding: u8,
    pub is_gigantamax: u8,
}

/// One icon list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconEntry {
    pub icon_id: u16,
    pub form_id: u16,
    pub gender_type: String,
    pub is_gigantamax: bool,
}

impl IconEntry {
    /// Decode a raw record. Any non-zero flag byte reads as `true`.
    pub fn decode(raw: &RawIcon, registry: &Registry, record: impl Into<RecordRef>) -> Result<Self> {
        let gender_type = registry
            .name_of(Category::Genders, raw.gender_type.get().into())
            .map_err(|source| Error::Lookup {
                record: record.into(),
                field: "gender_type",
                source,
            })?;

        Ok(Self {
            icon_id: raw.icon_id.get(),
            form_id: raw.form_id.get(),
            gender_type: gender_type.to_string(),
            is_gigantamax: raw.is_gigantamax != 0,
        })
    }

    /// Encode into a raw record with a zero padding byte.
    pub fn encode(&self, registry: &Registry, record: impl Into<RecordRef>) -> Result<RawIcon> {
        let record = record.into();
        let index = registry
            .index_of(Category::Genders, &self.gender_type)
            .map_err(|source| Error::Lookup {
                record: record.clone(),
                field: "gender_type",
                source,
            })?;
        let gender_type =
            u16::try_from(index).map_err(|_| Error::GenderOverflow { record, index })?;

        Ok(RawIcon {
            icon_id: U16::new(self.icon_id),
            form_id: U16::new(self.form_id),
            gender_type: U16::new(gender_type),
            padding: 0,
            is_gigantamax: u8::from(self.is_gigantamax),
        })
    }
}

/// The ordered icon list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IconList {
    pub entries: Vec<IconEntry>,
}

impl IconList {
    pub fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    /// Decode a whole list; the entry count is the blob size divided by
    /// [`ICON_SIZE`].
    pub fn unpack(data: &[u8], registry: &Registry) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let count = reader.record_count::<RawIcon>()?;
        let mut entries = Vec::with_capacity(count);

        for index in 0..count {
            let raw: RawIcon = reader.read_struct()?;
            entries.push(IconEntry::decode(&raw, registry, index)?);
        }

        tracing::debug!(records = count, "unpacked icon list");
        Ok(Self { entries })
    }

    /// Encode the list, one record per entry in order.
    pub fn pack(&self, registry: &Registry) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(self.entries.len() * ICON_SIZE);

        for (index, entry) in self.entries.iter().enumerate() {
            let raw = entry.encode(registry, index)?;
            data.extend_from_slice(raw.as_bytes());
        }

        tracing::debug!(records = self.entries.len(), "packed icon list");
        Ok(data)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up an entry by position; icon lists are addressed by index only.
impl std::ops::Index<usize> for IconList {
    type Output = IconEntry;

    fn index(&self, index: usize) -> &IconEntry {
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry() -> Registry {
        let mut object = serde_json::Map::new();
        for category in Category::all() {
            object.insert(category.key().to_string(), serde_json::json!(["None"]));
        }
        object.insert(
            "genders".to_string(),
            serde_json::json!(["Male", "Female", "Genderless", "Dual"]),
        );
        Registry::from_json(&serde_json::Value::Object(object).to_string()).unwrap()
    }

    #[test]
    fn test_record_size() {
        assert_eq!(std::mem::size_of::<RawIcon>(), ICON_SIZE);
    }

    #[test]
    fn test_decode_record() {
        let registry = registry();
        let data = [
            0x19, 0x00, 0x01, 0x00, 0x02, 0x00, 0x00, 0x01, // Pikachu G-Max
            0x34, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
        ];

        let list = IconList::unpack(&data, &registry).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[0],
            IconEntry {
                icon_id: 25,
                form_id: 1,
                gender_type: "Genderless".to_string(),
                is_gigantamax: true,
            }
        );
        assert_eq!(list[1].icon_id, 0x334);
        assert_eq!(list[1].gender_type, "Dual");
        assert!(!list[1].is_gigantamax);

        assert_eq!(list.pack(&registry).unwrap(), data);
    }

    #[test]
    fn test_ragged_length_is_format_error() {
        let registry = registry();

        assert!(matches!(
            IconList::unpack(&[0u8; 12], &registry),
            Err(Error::Common(swsh_common::Error::InvalidLength {
                length: 12,
                record_size: ICON_SIZE,
            }))
        ));
    }

    #[test]
    fn test_empty_list() {
        let registry = registry();
        let list = IconList::unpack(&[], &registry).unwrap();
        assert!(list.is_empty());
        assert!(list.pack(&registry).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_gender_code() {
        let registry = registry();
        let data = [0x01, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00];

        assert!(matches!(
            IconList::unpack(&data, &registry),
            Err(Error::Lookup {
                record: RecordRef::Index(0),
                field: "gender_type",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_gender_name() {
        let registry = registry();
        let list = IconList::new(vec![IconEntry {
            icon_id: 1,
            form_id: 0,
            gender_type: "Unknown".to_string(),
            is_gigantamax: false,
        }]);

        assert!(matches!(
            list.pack(&registry),
            Err(Error::Lookup { field: "gender_type", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_entry_roundtrip(
            icon_id in any::<u16>(),
            form_id in any::<u16>(),
            gender in 0usize..4,
            is_gigantamax in any::<bool>(),
        ) {
            let registry = registry();
            let entry = IconEntry {
                icon_id,
                form_id,
                gender_type: registry.names(Category::Genders)[gender].clone(),
                is_gigantamax,
            };

            let raw = entry.encode(&registry, 0usize).unwrap();
            prop_assert_eq!(IconEntry::decode(&raw, &registry, 0usize).unwrap(), entry);
        }
    }
}
