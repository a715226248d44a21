//! Persistence extension traits.
//!
//! These put the crate's operations directly on the payload types, so call
//! sites read as `config.write_to(path)` and `Config::read_from(path)`
//! rather than juggling free functions.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::xml_file;

/// Extension trait for writing a value to an XML file.
///
/// Automatically implemented for every `Serialize` type.
///
/// # Example
///
/// ```rust,ignore
/// use persisted::Persist;
///
/// #[derive(serde::Serialize)]
/// struct Settings {
///     volume: u8,
/// }
///
/// let settings = Settings { volume: 7 };
/// assert!(settings.write_to("config/settings.xml"));
/// ```
pub trait Persist: Serialize {
    /// Write `self` to `path`, creating missing parent directories.
    ///
    /// Returns `true` on success; on failure the cause is logged and `false`
    /// is returned. See [`crate::write`].
    fn write_to(&self, path: impl AsRef<Path>) -> bool {
        xml_file::write(self, path)
    }

    /// Like [`Persist::write_to`], but surfaces the failure cause.
    fn try_write_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        xml_file::try_write(self, path)
    }
}

impl<T: Serialize + ?Sized> Persist for T {}

/// Extension trait for reading a value back from an XML file.
///
/// Automatically implemented for every `DeserializeOwned` type.
pub trait Restore: DeserializeOwned {
    /// Read a `Self` from the XML file at `path`. See [`crate::read`].
    fn read_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        xml_file::read(path)
    }
}

impl<T: DeserializeOwned> Restore for T {}
