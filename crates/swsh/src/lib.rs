//! swsh - Pokémon Sword/Shield data table conversion library.
//!
//! This crate provides a unified interface to the swshtools crates for
//! turning the game's fixed-layout binary tables into readable entries and
//! back.
//!
//! # Crates
//!
//! - [`swsh_common`] - Common utilities (record slicing, bit-flag sets, keyed tables)
//! - [`swsh_consts`] - Enumeration registry (`constants.json`)
//! - [`swsh_personal`] - Base stats (`personal_total.bin`)
//! - [`swsh_wazaoboe`] - Level-up learnsets (`wazaoboe_total.bin`)
//! - [`swsh_pokecaplist`] - Icon list (`pokecaplist.bin`)
//!
//! # Example
//!
//! ```no_run
//! use swsh::prelude::*;
//!
//! let registry = Registry::load("constants.json")?;
//!
//! let data = std::fs::read("wazaoboe_total.bin")?;
//! let table = LearnsetTable::unpack(&data, &registry)?;
//! if let Some(moves) = table.get("Bulbasaur") {
//!     println!("Bulbasaur learns {} moves by level", moves.len());
//! }
//!
//! let packed = table.pack(&registry)?;
//! for warning in &packed.warnings {
//!     eprintln!("{}", warning);
//! }
//! std::fs::write("wazaoboe_total.bin", packed.data)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use swsh_common as common;
pub use swsh_consts as consts;
pub use swsh_personal as personal;
pub use swsh_pokecaplist as pokecaplist;
pub use swsh_wazaoboe as wazaoboe;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use swsh_common::{Keyed, RecordRef};
    pub use swsh_consts::{Category, LookupError, Registry};
    pub use swsh_personal::{PersonalEntry, PersonalTable};
    pub use swsh_pokecaplist::{IconEntry, IconList};
    pub use swsh_wazaoboe::{CapacityWarning, LearnsetTable, MoveEntry, PackedLearnsets};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
