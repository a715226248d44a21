//! Persisted: typed XML file persistence for serde types.
//!
//! Two operations over plain files:
//! - [`read`]: deserialize an XML file into a typed value
//! - [`write`]: serialize a typed value to an XML file, creating missing
//!   parent directories ([`try_write`] is the same operation with the
//!   failure cause surfaced instead of swallowed)
//!
//! There is no state held between calls; a file written by [`write`] reads
//! back as a field-wise-equal value with [`read`].
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let user = User { name: "Alice".to_string(), age: 30 };
//! assert!(persisted::write(&user, "out/users/alice.xml"));
//! let restored: User = persisted::read("out/users/alice.xml")?;
//! assert_eq!(restored, user);
//! ```
//!
//! The [`Persist`] and [`Restore`] extension traits offer the same
//! operations as methods on the payload types themselves.

mod error;
mod persist;
mod xml_file;

pub use error::Error;
pub use persist::{Persist, Restore};
pub use xml_file::{read, try_write, write};
