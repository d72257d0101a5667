//! Bit-flag set encoding.
//!
//! A flag set is stored as a fixed-width byte array with one bit per position
//! of a master list: position `i` lives in byte `i >> 3`, bit `i & 7`. The
//! master list alone defines the order, so decoded sets always come back in
//! master-list order no matter how they were supplied.

use crate::{Error, Result};

/// Byte index and bit mask for a master-list position.
#[inline]
const fn locate(position: usize) -> (usize, u8) {
    (position >> 3, 1 << (position & 7))
}

/// Check whether the bit for `position` is set.
///
/// Positions past the end of `bits` read as unset.
#[inline]
pub fn is_set(bits: &[u8], position: usize) -> bool {
    let (byte, mask) = locate(position);
    bits.get(byte).is_some_and(|b| b & mask != 0)
}

/// Collect the master-list names whose bits are set.
pub fn decode_flags<S: AsRef<str>>(master: &[S], bits: &[u8]) -> Vec<String> {
    master
        .iter()
        .enumerate()
        .filter(|(position, _)| is_set(bits, *position))
        .map(|(_, name)| name.as_ref().to_string())
        .collect()
}

/// Pack the selected names into a zeroed buffer of `width` bytes.
///
/// Every selected name must appear in `master` and its position must fit in
/// `width * 8` bits. Repeated names are harmless.
pub fn encode_flags<S, T>(master: &[S], selected: &[T], width: usize) -> Result<Vec<u8>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut bits = vec![0u8; width];
    let capacity = width * 8;

    for name in selected {
        let name = name.as_ref();
        let position = master
            .iter()
            .position(|m| m.as_ref() == name)
            .ok_or_else(|| Error::UnknownFlag(name.to_string()))?;

        if position >= capacity {
            return Err(Error::FlagOutOfRange {
                name: name.to_string(),
                position,
                capacity,
            });
        }

        let (byte, mask) = locate(position);
        bits[byte] |= mask;
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn master(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("TM{:03}", i)).collect()
    }

    #[test]
    fn test_bit_positions() {
        let master = master(16);
        let bits = encode_flags(&master, &["TM000", "TM007", "TM008", "TM015"], 2).unwrap();
        assert_eq!(bits, vec![0b1000_0001, 0b1000_0001]);
    }

    #[test]
    fn test_decode_follows_master_order() {
        let master = master(10);
        let bits = encode_flags(&master, &["TM009", "TM002", "TM005"], 2).unwrap();
        assert_eq!(decode_flags(&master, &bits), vec!["TM002", "TM005", "TM009"]);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let master = master(4);
        assert!(matches!(
            encode_flags(&master, &["HM01"], 1),
            Err(Error::UnknownFlag(name)) if name == "HM01"
        ));
    }

    #[test]
    fn test_position_beyond_width_is_rejected() {
        let master = master(12);
        assert!(matches!(
            encode_flags(&master, &["TM010"], 1),
            Err(Error::FlagOutOfRange { position: 10, capacity: 8, .. })
        ));
    }

    #[test]
    fn test_short_buffer_reads_as_unset() {
        let master = master(12);
        assert_eq!(decode_flags(&master, &[0xFF]).len(), 8);
    }

    proptest! {
        #[test]
        fn prop_subset_roundtrip(len in 1usize..=128, seed in any::<u128>()) {
            let master = master(len);
            let subset: Vec<String> = master
                .iter()
                .enumerate()
                .filter(|(i, _)| seed & (1u128 << i) != 0)
                .map(|(_, name)| name.clone())
                .collect();

            let width = len.div_ceil(8);
            let bits = encode_flags(&master, &subset, width).unwrap();
            prop_assert_eq!(bits.len(), width);
            prop_assert_eq!(decode_flags(&master, &bits), subset);
        }
    }
}
