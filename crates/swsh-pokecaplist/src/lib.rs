//! `pokecaplist.bin` codec for Pokémon Sword and Shield.
//!
//! The icon list is a bare array of 8-byte records with no header:
//!
//! | Offset | Size | Field          |
//! |--------|------|----------------|
//! | 0x0    | 2    | icon id        |
//! | 0x2    | 2    | form id        |
//! | 0x4    | 2    | gender type    |
//! | 0x6    | 1    | padding        |
//! | 0x7    | 1    | gigantamax flag|
//!
//! The gender type is resolved through the `genders` registry category.

mod error;
mod icon;

pub use error::{Error, Result};
pub use icon::{IconEntry, IconList, RawIcon, ICON_SIZE};
