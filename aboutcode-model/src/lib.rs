//! # aboutcode model
//!
//! Parsing, validation and serialization of ABOUT records, and operations
//! over whole inventories of them.
//!
//! ## Modules
//!
//! - [`parser`] - record text to ordered `(name, value)` pairs
//! - [`about`] - the [`About`] descriptor with hydration, validation and serialization
//! - [`inventory`] - collect records from a file or directory tree
//! - [`groupings`] - uniqueness, grouping by license or name, field name union
//! - [`export`] - inventory CSV output
//!
//! ```
//! use aboutcode_model::{by_license, About};
//!
//! let mut zlib = About::new();
//! zlib.loads("about_resource: zlib.c\nname: zlib\nlicense: zlib\n", None);
//! let records = vec![zlib];
//!
//! let groups = by_license(&records);
//! assert_eq!(groups["zlib"].len(), 1);
//! ```

pub mod about;
pub mod export;
pub mod groupings;
pub mod inventory;
pub mod parser;

pub use about::{well_known_kind, About, REQUIRED_FIELDS, WELL_KNOWN_FIELDS};
pub use export::{to_csv, write_csv};
pub use groupings::{by_license, by_name, field_names, unique};
pub use inventory::collect_inventory;
pub use parser::{is_valid_field_name, parse};
