//! Enumeration registry for swshtools.
//!
//! Binary tables store moves, items, abilities and the like as bare integers.
//! The registry maps those integers to readable names and back, one ordered
//! name list per [`Category`]. It is loaded once from a `constants.json` side
//! file and is read-only afterwards; codecs take it by reference.
//!
//! # Side-file Format
//!
//! A JSON object with one array of strings per category. The index of a name
//! in its array is the code stored in the binary tables.
//!
//! ```json
//! {
//!     "pokemon": ["Egg", "Bulbasaur", "Ivysaur"],
//!     "types": ["Normal", "Fighting", "Flying"],
//!     "...": []
//! }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use swsh_consts::{Category, Registry};
//!
//! let registry = Registry::load("constants.json")?;
//! let name = registry.name_of(Category::Types, 9)?;
//! assert_eq!(registry.index_of(Category::Types, name)?, 9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod category;
mod error;
mod registry;

pub use category::Category;
pub use error::{Error, LookupError, Result};
pub use registry::Registry;
