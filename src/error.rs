//! Error types for eML encoding and decoding.
//!
//! Every failure in the codec or the document facade surfaces as an
//! [`Error`]. Errors are fail-fast: a malformed line or an unsatisfiable
//! declaration aborts the whole load or save, and the caller decides what
//! to do next. There is no recovery or retry inside the codec.
//!
//! ## Error Categories
//!
//! - **Structural**: [`Error::MalformedHeader`], [`Error::TagParse`]:
//!   the line cannot be carved into its syntactic parts
//! - **Type level**: [`Error::UnsupportedType`], [`Error::InvalidLiteral`]:
//!   the parts are there but do not name or hold a known type
//! - **Cardinality**: [`Error::ElementCountMismatch`]: a container or
//!   array declared more (or fewer) elements than the data provides
//! - **Document**: [`Error::DuplicateIdentifier`],
//!   [`Error::FileAlreadyExists`], [`Error::MissingPath`], [`Error::Io`]
//!
//! ## Examples
//!
//! ```rust
//! use eml::{from_str, Error};
//!
//! let result = from_str("this file has no header");
//! assert!(matches!(result, Err(Error::MalformedHeader { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors produced by the eML codec and document
/// facade.
///
/// Decoding errors carry the 1-based line number of the offending input
/// line where one is known.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The header line is missing or cannot be parsed
    #[error("malformed header at line {line}: {msg}")]
    MalformedHeader { line: usize, msg: String },

    /// No `<...>` tag pair found where one is required
    #[error("no <...> tag found at line {line} in {fragment:?}")]
    TagParse { line: usize, fragment: String },

    /// A tag names a type that is not in the registry
    #[error("unsupported type tag {0:?}")]
    UnsupportedType(String),

    /// A typed extraction found a value of a different kind
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A value body cannot be converted to its declared type
    #[error("invalid {expected} literal at line {line}: {found:?}")]
    InvalidLiteral {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// A declared element count does not match the data actually available
    #[error("{what} declares {expected} elements but {found} were available")]
    ElementCountMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A `set_*` call re-used an identifier already present in the document
    #[error("identifier {0:?} already exists")]
    DuplicateIdentifier(String),

    /// `save_as` refused to overwrite an existing file
    #[error("file {0:?} already exists")]
    FileAlreadyExists(String),

    /// `save` was called on a document with no bound file path
    #[error("no file path bound to this document")]
    MissingPath,
}

impl Error {
    /// Creates an I/O error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a malformed-header error at the given line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eml::Error;
    ///
    /// let err = Error::malformed_header(1, "expected 5 fields, found 2");
    /// assert!(err.to_string().contains("line 1"));
    /// ```
    pub fn malformed_header(line: usize, msg: &str) -> Self {
        Error::MalformedHeader {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates a tag-parse error for a fragment with no `<...>` pair.
    pub fn tag_parse(line: usize, fragment: &str) -> Self {
        Error::TagParse {
            line,
            fragment: fragment.to_string(),
        }
    }

    /// Creates an unsupported-type error for an unknown tag or kind name.
    pub fn unsupported_type(tag: &str) -> Self {
        Error::UnsupportedType(tag.to_string())
    }

    /// Creates an invalid-literal error when a body cannot be converted to
    /// its declared type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eml::Error;
    ///
    /// let err = Error::invalid_literal(3, "int", "not-a-number");
    /// assert!(err.to_string().contains("invalid int literal"));
    /// ```
    pub fn invalid_literal(line: usize, expected: &'static str, found: &str) -> Self {
        Error::InvalidLiteral {
            line,
            expected,
            found: found.to_string(),
        }
    }

    /// Creates a type-mismatch error for a failed typed extraction.
    pub fn type_mismatch(expected: &'static str, found: &str) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.to_string(),
        }
    }

    /// Creates an element-count mismatch error for a container or array.
    pub fn count_mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        Error::ElementCountMismatch {
            what,
            expected,
            found,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
