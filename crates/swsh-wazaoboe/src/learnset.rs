//! Conversion between raw learnset slots and ordered move lists.

use std::fmt;

use swsh_common::RecordRef;
use swsh_consts::{Category, Registry};
use zerocopy::byteorder::little_endian::U16;

use crate::layout::{RawLearnset, RawMoveSlot, MAX_MOVES, SENTINEL};
use crate::{Error, Result};

/// A move learned on reaching a level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEntry {
    pub level: u16,
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub move_name: String,
}

impl MoveEntry {
    pub fn new(level: u16, move_name: impl Into<String>) -> Self {
        Self {
            level,
            move_name: move_name.into(),
        }
    }
}

/// Raised when a species lists more moves than its slot holds.
///
/// The surplus moves are dropped; the first [`MAX_MOVES`] are still written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityWarning {
    pub species: String,
    pub supplied: usize,
    pub kept: usize,
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' has {} level-up moves, only the first {} are kept",
            self.species, self.supplied, self.kept
        )
    }
}

/// Decode one species' slot into its moves, in slot order.
///
/// Sentinel pairs are skipped wherever they appear.
pub fn decode_learnset(
    raw: &RawLearnset,
    registry: &Registry,
    record: impl Into<RecordRef>,
) -> Result<Vec<MoveEntry>> {
    let record = record.into();

    raw.slots
        .iter()
        .filter(|slot| slot.is_used())
        .map(|slot| -> Result<MoveEntry> {
            let move_name = registry
                .name_of(Category::Moves, slot.move_id.get().into())
                .map_err(|source| Error::Lookup {
                    record: record.clone(),
                    field: "move",
                    source,
                })?;
            Ok(MoveEntry::new(slot.level.get(), move_name))
        })
        .collect()
}

/// Encode a species' moves into a sentinel-padded slot.
///
/// Moves past [`MAX_MOVES`] are dropped and reported through the returned
/// [`CapacityWarning`]; every other problem is an error.
pub fn encode_learnset(
    moves: &[MoveEntry],
    registry: &Registry,
    species: &str,
) -> Result<(RawLearnset, Option<CapacityWarning>)> {
    let record = RecordRef::from(species);
    let mut raw = RawLearnset::EMPTY;

    let warning = (moves.len() > MAX_MOVES).then(|| CapacityWarning {
        species: species.to_string(),
        supplied: moves.len(),
        kept: MAX_MOVES,
    });

    for (slot, entry) in raw.slots.iter_mut().zip(moves) {
        let index = registry
            .index_of(Category::Moves, &entry.move_name)
            .map_err(|source| Error::Lookup {
                record: record.clone(),
                field: "move",
                source,
            })?;

        let move_id = u16::try_from(index)
            .ok()
            .filter(|&id| id != SENTINEL)
            .ok_or_else(|| Error::MoveOverflow {
                record: record.clone(),
                name: entry.move_name.clone(),
                index,
            })?;

        if entry.level == SENTINEL {
            return Err(Error::SentinelLevel { record });
        }

        *slot = RawMoveSlot {
            move_id: U16::new(move_id),
            level: U16::new(entry.level),
        };
    }

    Ok((raw, warning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LEARNSET_SIZE;
    use proptest::prelude::*;
    use zerocopy::{FromBytes, IntoBytes};

    fn registry() -> Registry {
        let mut object = serde_json::Map::new();
        for category in swsh_consts::Category::all() {
            object.insert(category.key().to_string(), serde_json::json!(["None"]));
        }
        let moves: Vec<String> = (0..100).map(|i| format!("Move{:02}", i)).collect();
        object.insert("moves".to_string(), moves.into());
        object.insert(
            "pokemon".to_string(),
            serde_json::json!(["Egg", "Bulbasaur", "Ivysaur"]),
        );
        Registry::from_json(&serde_json::Value::Object(object).to_string()).unwrap()
    }

    fn moves(count: usize) -> Vec<MoveEntry> {
        (0..count)
            .map(|i| MoveEntry::new(i as u16 + 1, format!("Move{:02}", i % 100)))
            .collect()
    }

    #[test]
    fn test_exactly_full_slot_roundtrip() {
        let registry = registry();
        let list = moves(MAX_MOVES);

        let (raw, warning) = encode_learnset(&list, &registry, "Bulbasaur").unwrap();
        assert!(warning.is_none());
        assert!(raw.slots.iter().all(RawMoveSlot::is_used));
        assert_eq!(decode_learnset(&raw, &registry, 1usize).unwrap(), list);
    }

    #[test]
    fn test_overfull_slot_truncates_with_warning() {
        let registry = registry();
        let list = moves(MAX_MOVES + 1);

        let (raw, warning) = encode_learnset(&list, &registry, "Bulbasaur").unwrap();
        assert_eq!(
            warning,
            Some(CapacityWarning {
                species: "Bulbasaur".to_string(),
                supplied: 66,
                kept: 65,
            })
        );
        assert_eq!(
            decode_learnset(&raw, &registry, 1usize).unwrap(),
            list[..MAX_MOVES]
        );
    }

    #[test]
    fn test_short_list_is_padded_with_sentinels() {
        let registry = registry();
        let (raw, _) = encode_learnset(&moves(2), &registry, "Egg").unwrap();
        let bytes = raw.as_bytes();

        assert_eq!(&bytes[..8], &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x02, 0x00]);
        assert!(bytes[8..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_sentinels_skipped_anywhere() {
        let registry = registry();
        let mut raw = RawLearnset::EMPTY;
        raw.slots[0] = RawMoveSlot {
            move_id: U16::new(3),
            level: U16::new(1),
        };
        raw.slots[2] = RawMoveSlot {
            move_id: U16::new(4),
            level: U16::new(7),
        };
        raw.slots[64] = RawMoveSlot {
            move_id: U16::new(5),
            level: U16::new(50),
        };
        // Half-sentinel slots count as empty too.
        raw.slots[1].move_id = U16::new(9);
        raw.slots[3].level = U16::new(9);

        let decoded = decode_learnset(&raw, &registry, 0usize).unwrap();
        assert_eq!(
            decoded,
            vec![
                MoveEntry::new(1, "Move03"),
                MoveEntry::new(7, "Move04"),
                MoveEntry::new(50, "Move05"),
            ]
        );
    }

    #[test]
    fn test_unknown_move_index() {
        let registry = registry();
        let mut raw = RawLearnset::EMPTY;
        raw.slots[5] = RawMoveSlot {
            move_id: U16::new(500),
            level: U16::new(1),
        };

        assert!(matches!(
            decode_learnset(&raw, &registry, 2usize),
            Err(Error::Lookup {
                record: RecordRef::Index(2),
                field: "move",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_move_name() {
        let registry = registry();
        let list = vec![MoveEntry::new(1, "Splash")];

        assert!(matches!(
            encode_learnset(&list, &registry, "Egg"),
            Err(Error::Lookup { field: "move", .. })
        ));
    }

    #[test]
    fn test_sentinel_level_is_rejected() {
        let registry = registry();
        let list = vec![MoveEntry::new(SENTINEL, "Move01")];

        assert!(matches!(
            encode_learnset(&list, &registry, "Egg"),
            Err(Error::SentinelLevel { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_move_list_roundtrip(
            list in prop::collection::vec((0u16..SENTINEL, 0usize..100), 0..=MAX_MOVES)
        ) {
            let registry = registry();
            let list: Vec<MoveEntry> = list
                .into_iter()
                .map(|(level, id)| MoveEntry::new(level, format!("Move{:02}", id)))
                .collect();

            let (raw, warning) = encode_learnset(&list, &registry, "Egg").unwrap();
            prop_assert!(warning.is_none());
            prop_assert_eq!(decode_learnset(&raw, &registry, 0usize).unwrap(), list);
        }

        #[test]
        fn prop_slot_bytes_roundtrip(
            slots in prop::collection::vec(
                prop_oneof![Just(None), (0u16..100, 0u16..SENTINEL).prop_map(Some)],
                MAX_MOVES,
            )
        ) {
            // Used slots packed first, sentinels after: the only layout encode
            // produces.
            let mut bytes = vec![0xFFu8; LEARNSET_SIZE];
            for (i, (id, level)) in slots.iter().flatten().enumerate() {
                bytes[i * 4..i * 4 + 2].copy_from_slice(&id.to_le_bytes());
                bytes[i * 4 + 2..i * 4 + 4].copy_from_slice(&level.to_le_bytes());
            }
            let raw = RawLearnset::read_from_bytes(&bytes).unwrap();

            let decoded = decode_learnset(&raw, &registry(), 0usize).unwrap();
            let (encoded, _) = encode_learnset(&decoded, &registry(), "Egg").unwrap();
            prop_assert_eq!(encoded.as_bytes(), &bytes[..]);
        }
    }
}
