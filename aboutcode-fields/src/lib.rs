//! # aboutcode fields
//!
//! The typed, self-validating values that make up an ABOUT record.
//!
//! A [`Field`] pairs a name with a [`FieldKind`] and the raw text read from a
//! record. Validation turns the raw text into a [`FieldValue`] and a list of
//! [`Issue`](aboutcode_common::Issue)s, recomputing both from scratch on every
//! call.
//!
//! ```
//! use aboutcode_fields::{Field, FieldKind, FieldValue};
//!
//! let mut field = Field::new("license", FieldKind::List, "apache-2.0\n mit\n", true);
//! assert!(field.validate(None).is_empty());
//! assert_eq!(
//!     field.value(),
//!     &FieldValue::List(vec!["apache-2.0".to_string(), "mit".to_string()])
//! );
//! ```

mod field;
mod kind;
pub mod paths;
mod url;
mod value;

pub use field::Field;
pub use kind::FieldKind;
pub use url::is_valid_url;
pub use value::FieldValue;
