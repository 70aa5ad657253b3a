//! The document facade: named entries over the codec.
//!
//! An [`Eml`] document is header metadata plus an insertion-ordered table
//! of `identifier := value` entries. It is created empty or loaded whole
//! from a file, grown through per-type `set_*` calls, and written back
//! in full by [`Eml::save`]. Re-using an identifier is an error, never
//! an overwrite.
//!
//! ## Examples
//!
//! ```rust
//! use eml::Eml;
//!
//! let mut doc = Eml::new();
//! doc.set_int("x", 42).unwrap();
//! doc.set_list("l", vec![1.into(), 2.into(), 3.into()]).unwrap();
//!
//! assert!(doc.exists("x"));
//! assert_eq!(doc.get_int("x"), Some(42));
//!
//! // Absent identifiers yield the documented defaults, not errors.
//! assert_eq!(doc.get_int("missing"), None);
//! assert!(doc.get_list("missing").is_empty());
//! ```

use crate::array::TypedArray;
use crate::error::{Error, Result};
use crate::map::EmlMap;
use crate::value::{Scalar, Value};
use chrono::{Local, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Literal marker opening every eML file's header line.
pub(crate) const HEADER_MARKER: &str = "eML Header";

/// Format version written into new documents.
pub const FORMAT_VERSION: f64 = 0.01;

const LANGUAGE: &str = "rust";

/// Header metadata of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Format version the file was written with.
    pub version: f64,
    /// Source-language tag of the producer.
    pub language: String,
    /// Creation timestamp.
    pub created: NaiveDateTime,
    /// Last-update timestamp, refreshed on every save.
    pub updated: NaiveDateTime,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = Local::now().naive_local();
        Metadata {
            version: FORMAT_VERSION,
            language: LANGUAGE.to_string(),
            created: now,
            updated: now,
        }
    }
}

/// A strongly typed eML document.
///
/// Holds the metadata and the named entries, and optionally the file
/// path it was opened from (which [`Eml::save`] writes back to).
///
/// # Examples
///
/// ```rust
/// use eml::Eml;
///
/// let mut doc = Eml::new();
/// doc.set_str("greeting", "hello").unwrap();
///
/// // A second set on the same identifier is rejected.
/// assert!(doc.set_str("greeting", "again").is_err());
/// assert_eq!(doc.get_str("greeting"), Some("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Eml {
    path: Option<PathBuf>,
    meta: Metadata,
    entries: IndexMap<String, Value>,
}

impl Eml {
    /// Creates an empty document bound to no file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a document at `path`: fully loads the file when it exists,
    /// otherwise starts empty with the path bound for a later
    /// [`Eml::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Eml> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Eml {
                path: Some(path.to_path_buf()),
                ..Self::default()
            })
        }
    }

    /// Loads a document from an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file is missing or unreadable, or
    /// any decode error for malformed content.
    pub fn load(path: impl AsRef<Path>) -> Result<Eml> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let mut doc = crate::from_str(&text)?;
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    pub(crate) fn from_parts(meta: Metadata, entries: IndexMap<String, Value>) -> Self {
        Eml {
            path: None,
            meta,
            entries,
        }
    }

    /// The file path this document is bound to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The header metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    /// Number of entries in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the identifier is present.
    #[must_use]
    pub fn exists(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Removes an entry, returning its value if it was present.
    pub fn remove(&mut self, identifier: &str) -> Option<Value> {
        self.entries.shift_remove(identifier)
    }

    /// Returns the raw value of an entry.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Value> {
        self.entries.get(identifier)
    }

    /// Iterates over `(identifier, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn entry_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    fn insert(&mut self, identifier: &str, value: Value) -> Result<()> {
        if self.entries.contains_key(identifier) {
            return Err(Error::DuplicateIdentifier(identifier.to_string()));
        }
        self.entries.insert(identifier.to_string(), value);
        Ok(())
    }

    /// Stores a boolean under a fresh identifier.
    ///
    /// # Errors
    ///
    /// All `set_*` calls return [`Error::DuplicateIdentifier`] when the
    /// identifier is already present; the document is left untouched.
    pub fn set_bool(&mut self, identifier: &str, value: bool) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Bool(value)))
    }

    /// Stores a byte under a fresh identifier.
    pub fn set_byte(&mut self, identifier: &str, value: u8) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Byte(value)))
    }

    /// Stores an integer under a fresh identifier.
    pub fn set_int(&mut self, identifier: &str, value: i64) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Int(value)))
    }

    /// Stores a float under a fresh identifier.
    pub fn set_float(&mut self, identifier: &str, value: f64) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Float(value)))
    }

    /// Stores a complex number under a fresh identifier.
    pub fn set_complex(&mut self, identifier: &str, value: num_complex::Complex64) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Complex(value)))
    }

    /// Stores a string under a fresh identifier.
    pub fn set_str(&mut self, identifier: &str, value: impl Into<String>) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Str(value.into())))
    }

    /// Stores a date under a fresh identifier.
    pub fn set_date(&mut self, identifier: &str, value: NaiveDate) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::Date(value)))
    }

    /// Stores a datetime under a fresh identifier.
    pub fn set_datetime(&mut self, identifier: &str, value: NaiveDateTime) -> Result<()> {
        self.insert(identifier, Value::Scalar(Scalar::DateTime(value)))
    }

    /// Stores a list under a fresh identifier.
    pub fn set_list(&mut self, identifier: &str, items: Vec<Value>) -> Result<()> {
        self.insert(identifier, Value::List(items))
    }

    /// Stores a tuple under a fresh identifier. Its arity is fixed from
    /// here on.
    pub fn set_tuple(&mut self, identifier: &str, items: Vec<Value>) -> Result<()> {
        self.insert(identifier, Value::Tuple(items))
    }

    /// Stores a set under a fresh identifier. Duplicate members are
    /// dropped, keeping the first occurrence.
    pub fn set_set(&mut self, identifier: &str, items: Vec<Value>) -> Result<()> {
        self.insert(identifier, Value::Set(dedup(items)))
    }

    /// Stores a frozen set under a fresh identifier.
    pub fn set_frozen_set(&mut self, identifier: &str, items: Vec<Value>) -> Result<()> {
        self.insert(identifier, Value::FrozenSet(dedup(items)))
    }

    /// Stores a dict under a fresh identifier.
    pub fn set_dict(&mut self, identifier: &str, map: EmlMap) -> Result<()> {
        self.insert(identifier, Value::Dict(map))
    }

    /// Stores a typed array under a fresh identifier.
    pub fn set_array(&mut self, identifier: &str, array: TypedArray) -> Result<()> {
        self.insert(identifier, Value::Array(array))
    }

    /// Gets a previously stored boolean; `None` when absent or of
    /// another kind.
    #[must_use]
    pub fn get_bool(&self, identifier: &str) -> Option<bool> {
        self.get(identifier)?.as_bool()
    }

    /// Gets a previously stored byte.
    #[must_use]
    pub fn get_byte(&self, identifier: &str) -> Option<u8> {
        match self.get(identifier) {
            Some(Value::Scalar(Scalar::Byte(b))) => Some(*b),
            _ => None,
        }
    }

    /// Gets a previously stored integer.
    #[must_use]
    pub fn get_int(&self, identifier: &str) -> Option<i64> {
        self.get(identifier)?.as_i64()
    }

    /// Gets a previously stored float.
    #[must_use]
    pub fn get_float(&self, identifier: &str) -> Option<f64> {
        self.get(identifier)?.as_f64()
    }

    /// Gets a previously stored complex number.
    #[must_use]
    pub fn get_complex(&self, identifier: &str) -> Option<num_complex::Complex64> {
        match self.get(identifier) {
            Some(Value::Scalar(Scalar::Complex(c))) => Some(*c),
            _ => None,
        }
    }

    /// Gets a previously stored string.
    #[must_use]
    pub fn get_str(&self, identifier: &str) -> Option<&str> {
        self.get(identifier)?.as_str()
    }

    /// Gets a previously stored date.
    #[must_use]
    pub fn get_date(&self, identifier: &str) -> Option<NaiveDate> {
        match self.get(identifier) {
            Some(Value::Scalar(Scalar::Date(d))) => Some(*d),
            _ => None,
        }
    }

    /// Gets a previously stored datetime.
    #[must_use]
    pub fn get_datetime(&self, identifier: &str) -> Option<NaiveDateTime> {
        match self.get(identifier) {
            Some(Value::Scalar(Scalar::DateTime(dt))) => Some(*dt),
            _ => None,
        }
    }

    /// Gets a previously stored list; empty when absent.
    #[must_use]
    pub fn get_list(&self, identifier: &str) -> Vec<Value> {
        match self.get(identifier) {
            Some(Value::List(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Gets a previously stored tuple; empty when absent.
    #[must_use]
    pub fn get_tuple(&self, identifier: &str) -> Vec<Value> {
        match self.get(identifier) {
            Some(Value::Tuple(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Gets a previously stored set; empty when absent.
    #[must_use]
    pub fn get_set(&self, identifier: &str) -> Vec<Value> {
        match self.get(identifier) {
            Some(Value::Set(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Gets a previously stored frozen set; empty when absent.
    #[must_use]
    pub fn get_frozen_set(&self, identifier: &str) -> Vec<Value> {
        match self.get(identifier) {
            Some(Value::FrozenSet(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Gets a previously stored dict; empty when absent.
    #[must_use]
    pub fn get_dict(&self, identifier: &str) -> EmlMap {
        match self.get(identifier) {
            Some(Value::Dict(map)) => map.clone(),
            _ => EmlMap::new(),
        }
    }

    /// Gets a previously stored typed array.
    #[must_use]
    pub fn get_array(&self, identifier: &str) -> Option<&TypedArray> {
        self.get(identifier)?.as_array()
    }

    /// Serializes the document in full to its bound path, overwriting
    /// any existing file and refreshing the last-update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPath`] when the document is bound to no
    /// file, or [`Error::Io`] when the write fails.
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(Error::MissingPath)?;
        self.save_to(path)
    }

    /// Serializes the document in full to `path`, overwriting any
    /// existing file.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.meta.updated = Local::now().naive_local();
        let text = crate::to_string(self);
        fs::write(path.as_ref(), text)
            .map_err(|e| Error::Io(format!("{}: {e}", path.as_ref().display())))?;
        Ok(())
    }

    /// Serializes the document to a path that must not exist yet.
    ///
    /// The document stays bound to its original path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAlreadyExists`] without touching the
    /// existing file.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::FileAlreadyExists(path.display().to_string()));
        }
        self.save_to(path)
    }
}

fn dedup(items: Vec<Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
