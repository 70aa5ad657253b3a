//! The type registry: tag names for every kind the format can carry.
//!
//! eML is self-describing: every stored value names its exact runtime
//! type in a tag. This module owns the two directions of that mapping:
//! tag string to kind ([`ScalarKind::from_tag`], [`ContainerKind::from_tag`])
//! and kind back to tag ([`ScalarKind::tag`], [`ContainerKind::tag`]).
//! Both are table-driven lookups over a fixed registry; a tag absent from
//! the table is an [`UnsupportedType`](crate::Error::UnsupportedType)
//! condition at the call site, never a silent fallback.
//!
//! ## Examples
//!
//! ```rust
//! use eml::ScalarKind;
//!
//! assert_eq!(ScalarKind::from_tag("int32"), Some(ScalarKind::Int32));
//! assert_eq!(ScalarKind::Int32.tag(), "int32");
//! assert_eq!(ScalarKind::from_tag("float96"), None);
//! ```

/// The primitive kinds of the format.
///
/// `Bool` through `DateTime` are the natural-width kinds; the remainder
/// are the fixed-width numeric subtypes used for array cells and anywhere
/// an exact storage width must survive a round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Byte,
    Int,
    Float,
    Complex,
    Str,
    Date,
    DateTime,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Complex64,
    Complex128,
}

/// Registry table mapping tag text to primitive kind.
const SCALAR_TAGS: &[(&str, ScalarKind)] = &[
    ("bool", ScalarKind::Bool),
    ("byte", ScalarKind::Byte),
    ("int", ScalarKind::Int),
    ("float", ScalarKind::Float),
    ("complex", ScalarKind::Complex),
    ("str", ScalarKind::Str),
    ("date", ScalarKind::Date),
    ("datetime", ScalarKind::DateTime),
    ("int8", ScalarKind::Int8),
    ("uint8", ScalarKind::UInt8),
    ("int16", ScalarKind::Int16),
    ("uint16", ScalarKind::UInt16),
    ("int32", ScalarKind::Int32),
    ("uint32", ScalarKind::UInt32),
    ("int64", ScalarKind::Int64),
    ("uint64", ScalarKind::UInt64),
    ("float32", ScalarKind::Float32),
    ("float64", ScalarKind::Float64),
    ("complex64", ScalarKind::Complex64),
    ("complex128", ScalarKind::Complex128),
];

impl ScalarKind {
    /// Looks up a primitive kind by its tag text.
    ///
    /// Returns `None` for tags outside the registry (container tags,
    /// unknown subtypes), leaving the error decision to the caller.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<ScalarKind> {
        SCALAR_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }

    /// Returns the tag text written for this kind.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Byte => "byte",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Complex => "complex",
            ScalarKind::Str => "str",
            ScalarKind::Date => "date",
            ScalarKind::DateTime => "datetime",
            ScalarKind::Int8 => "int8",
            ScalarKind::UInt8 => "uint8",
            ScalarKind::Int16 => "int16",
            ScalarKind::UInt16 => "uint16",
            ScalarKind::Int32 => "int32",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::Int64 => "int64",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Complex64 => "complex64",
            ScalarKind::Complex128 => "complex128",
        }
    }
}

/// The container kinds of the format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Dict,
    List,
    Set,
    Tuple,
    FrozenSet,
    Array,
}

const CONTAINER_TAGS: &[(&str, ContainerKind)] = &[
    ("dict", ContainerKind::Dict),
    ("list", ContainerKind::List),
    ("set", ContainerKind::Set),
    ("tuple", ContainerKind::Tuple),
    ("frozenset", ContainerKind::FrozenSet),
    ("array", ContainerKind::Array),
];

impl ContainerKind {
    /// Looks up a container kind by its tag text.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<ContainerKind> {
        CONTAINER_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }

    /// Returns the tag text written for this kind.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            ContainerKind::Dict => "dict",
            ContainerKind::List => "list",
            ContainerKind::Set => "set",
            ContainerKind::Tuple => "tuple",
            ContainerKind::FrozenSet => "frozenset",
            ContainerKind::Array => "array",
        }
    }
}
