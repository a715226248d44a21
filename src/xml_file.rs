//! Reading and writing serde types as XML files on local disk.

use std::path::Path;
use std::{fs, io};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Reads the XML file at `path` and deserializes it into a `T`.
///
/// The file must already exist; a missing file is [`Error::NotFound`], not an
/// empty value. The file handle is dropped on every exit path, including
/// deserialization failure.
pub fn read<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument("path cannot be empty"));
    }
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_owned(),
        });
    }

    log::debug!("Reading {}...", path.display());
    let file = fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    quick_xml::de::from_reader(io::BufReader::new(file)).map_err(|error| Error::Deserialize {
        path: path.to_owned(),
        message: error.to_string(),
    })
}

/// Serializes `data` as a UTF-8 XML document and writes it to `path`,
/// creating missing parent directories first.
///
/// The destination is truncated if it already exists, so the file only ever
/// holds the most recently written document.
pub fn try_write<T: Serialize + ?Sized>(data: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    use io::Write;

    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument("path cannot be empty"));
    }

    if let Some(parent) = path.parent() {
        // An empty parent means a bare file name relative to the working
        // directory; there is nothing to create.
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_owned(),
                source,
            })?;
        }
    }

    let mut document = String::from(XML_DECLARATION);
    let mut serializer = quick_xml::se::Serializer::new(&mut document);
    serializer.indent(' ', 2);
    data.serialize(serializer).map_err(|error| Error::Serialize {
        path: path.to_owned(),
        message: error.to_string(),
    })?;

    log::debug!("Writing {}...", path.display());
    let mut file = fs::File::create(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    file.write_all(document.as_bytes())
        .map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })
}

/// Serializes `data` to `path` and reports success as a boolean.
///
/// Failures are not surfaced to the caller: any error from the
/// serialize/create/write sequence yields `false`, with the cause logged at
/// `warn` level. Callers that need the cause use [`try_write`].
pub fn write<T: Serialize + ?Sized>(data: &T, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match try_write(data, path) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("Failed to write {}: {}", path.display(), error);
            false
        }
    }
}
