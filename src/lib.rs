//! # eml
//!
//! A self-describing, strongly typed, line-oriented data format.
//!
//! ## What is eML?
//!
//! eML stores named, typed values in a plain text file and gives them
//! back with their exact runtime types intact: primitives, fixed-width
//! numeric subtypes, and arbitrarily nested containers. A `float32`
//! stays a `float32`, a tuple stays a tuple, a dict keyed by a mix of
//! ints and datetimes keeps every key's type through the round trip.
//!
//! ## Key Features
//!
//! - **Self-describing**: every value carries a `<tag>` naming its type;
//!   no schema is needed to read a file back
//! - **Line-oriented**: one header line plus one line per value or
//!   container element; files are readable and diffable
//! - **Deep nesting**: lists of dicts of tuples of sets, without
//!   brackets; nesting is encoded by line position alone
//! - **Typed arrays**: multi-dimensional, row-major, homogeneous or
//!   per-cell mixed
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use eml::Eml;
//!
//! let mut doc = Eml::new();
//! doc.set_int("answer", 42).unwrap();
//! doc.set_list("primes", vec![2.into(), 3.into(), 5.into()]).unwrap();
//!
//! let text = eml::to_string(&doc);
//! let back = eml::from_str(&text).unwrap();
//!
//! assert_eq!(back.get_int("answer"), Some(42));
//! assert_eq!(back.get_list("primes"), doc.get_list("primes"));
//! ```
//!
//! ## Working with Files
//!
//! A document opened from a path loads fully before any access, and
//! saves back in full:
//!
//! ```rust,no_run
//! use eml::Eml;
//!
//! let mut doc = Eml::open("config.eml")?;
//! if !doc.exists("retries") {
//!     doc.set_int("retries", 3)?;
//! }
//! doc.save()?;
//! # Ok::<(), eml::Error>(())
//! ```
//!
//! Identifiers are write-once: a second `set_*` on the same name fails
//! with [`Error::DuplicateIdentifier`] rather than overwriting.
//!
//! ## Format
//!
//! The wire format is documented in the [`format`] module. A small file
//! looks like:
//!
//! ```text
//! eML Header | 0.01 | rust | 07/27/2024 10:00:00.000000 | 08/05/2024 11:30:00.500000
//! answer := <int>42
//! primes := <list|3> <int>2
//!                    <int>3
//!                    <int>5
//! ```

pub mod array;
pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod kind;
pub mod map;
pub mod options;
pub mod ser;
pub mod tag;
pub mod value;

pub use array::TypedArray;
pub use de::Decoder;
pub use document::{Eml, Metadata, FORMAT_VERSION};
pub use error::{Error, Result};
pub use kind::{ContainerKind, ScalarKind};
pub use map::EmlMap;
pub use options::EmlOptions;
pub use ser::Encoder;
pub use value::{Scalar, Value};

use std::io;

/// Parses eML text into a document.
///
/// # Examples
///
/// ```rust
/// let text = "\
/// eML Header | 0.01 | rust | 07/27/2024 10:00:00.000000 | 07/27/2024 10:00:00.000000
/// x := <int>7
/// ";
/// let doc = eml::from_str(text).unwrap();
/// assert_eq!(doc.get_int("x"), Some(7));
/// ```
///
/// # Errors
///
/// Returns an error if the header is missing or any entry is malformed.
/// The whole input is parsed before any entry is available; a failure
/// aborts the entire load.
pub fn from_str(s: &str) -> Result<Eml> {
    Decoder::from_str(s).decode_document()
}

/// Reads eML text from an I/O stream and parses it into a document.
///
/// # Errors
///
/// Returns an error if reading fails or the content is not valid eML.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Eml> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Serializes a document to eML text.
///
/// Encoding is total (every [`Value`] has a wire form), so this returns
/// the text directly.
///
/// # Examples
///
/// ```rust
/// use eml::Eml;
///
/// let mut doc = Eml::new();
/// doc.set_bool("flag", false).unwrap();
/// assert!(eml::to_string(&doc).contains("flag := <bool>false"));
/// ```
#[must_use]
pub fn to_string(doc: &Eml) -> String {
    to_string_with_options(doc, EmlOptions::default())
}

/// Serializes a document to eML text with custom options.
#[must_use]
pub fn to_string_with_options(doc: &Eml, options: EmlOptions) -> String {
    Encoder::new(options).encode(doc)
}

/// Serializes a document to a writer in eML format.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W: io::Write>(mut writer: W, doc: &Eml) -> Result<()> {
    writer.write_all(to_string(doc).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_strings() {
        let mut doc = Eml::new();
        doc.set_int("x", 42).unwrap();
        doc.set_str("s", "hello world").unwrap();

        let text = to_string(&doc);
        let back = from_str(&text).unwrap();
        assert_eq!(back.get_int("x"), Some(42));
        assert_eq!(back.get_str("s"), Some("hello world"));
        assert_eq!(back.metadata().language, "rust");
    }

    #[test]
    fn round_trip_through_readers_and_writers() {
        let mut doc = Eml::new();
        doc.set_float("pi", 3.25).unwrap();

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        let back = from_reader(io::Cursor::new(buffer)).unwrap();
        assert_eq!(back.get_float("pi"), Some(3.25));
    }

    #[test]
    fn entry_order_is_preserved() {
        let mut doc = Eml::new();
        doc.set_int("b", 1).unwrap();
        doc.set_int("a", 2).unwrap();
        doc.set_int("c", 3).unwrap();

        let back = from_str(&to_string(&doc)).unwrap();
        let idents: Vec<&str> = back.iter().map(|(k, _)| k).collect();
        assert_eq!(idents, vec!["b", "a", "c"]);
    }
}
