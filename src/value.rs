//! The typed value model.
//!
//! This module provides the two sum types every other component works in
//! terms of:
//!
//! - [`Scalar`]: a primitive value carrying its exact runtime type,
//!   including the fixed-width numeric subtypes
//! - [`Value`]: a scalar or an arbitrarily nested container
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use eml::{Scalar, Value};
//!
//! // From primitives
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let name = Value::from("alice");
//!
//! // Containers hold any Value
//! let items = Value::List(vec![Value::from(1), Value::from(2.5)]);
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use eml::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_scalar());
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```
//!
//! ## Equality
//!
//! Floats and complex numbers compare and hash by bit pattern, so a
//! [`Scalar`] is `Eq + Hash` and can key a [`Dict`](Value::Dict). Sets
//! compare by membership rather than storage order, matching their
//! unordered semantics.

use crate::array::TypedArray;
use crate::kind::ScalarKind;
use crate::map::EmlMap;
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Date literal layout: `MM/DD/YYYY`.
pub(crate) const DATE_FORMAT: &str = "%m/%d/%Y";
/// Datetime literal layout: `MM/DD/YYYY HH:MM:SS.ffffff`.
pub(crate) const DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S%.6f";

/// A primitive value tagged with its exact runtime type.
///
/// The natural-width kinds (`Bool`, `Int`, `Float`, `Complex`, `Str`,
/// `Date`, `DateTime`, `Byte`) cover ordinary use; the fixed-width
/// variants preserve a declared storage width through a round trip, which
/// matters mostly for array cells.
///
/// # Examples
///
/// ```rust
/// use eml::{Scalar, ScalarKind};
///
/// let s = Scalar::Int32(7);
/// assert_eq!(s.kind(), ScalarKind::Int32);
/// assert_eq!(s.literal(), "7");
/// ```
#[derive(Debug, Clone)]
pub enum Scalar {
    Bool(bool),
    Byte(u8),
    Int(i64),
    Float(f64),
    Complex(num_complex::Complex64),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Complex64(num_complex::Complex32),
    Complex128(num_complex::Complex64),
}

impl Scalar {
    /// Returns the registry kind of this scalar.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Byte(_) => ScalarKind::Byte,
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Complex(_) => ScalarKind::Complex,
            Scalar::Str(_) => ScalarKind::Str,
            Scalar::Date(_) => ScalarKind::Date,
            Scalar::DateTime(_) => ScalarKind::DateTime,
            Scalar::Int8(_) => ScalarKind::Int8,
            Scalar::UInt8(_) => ScalarKind::UInt8,
            Scalar::Int16(_) => ScalarKind::Int16,
            Scalar::UInt16(_) => ScalarKind::UInt16,
            Scalar::Int32(_) => ScalarKind::Int32,
            Scalar::UInt32(_) => ScalarKind::UInt32,
            Scalar::Int64(_) => ScalarKind::Int64,
            Scalar::UInt64(_) => ScalarKind::UInt64,
            Scalar::Float32(_) => ScalarKind::Float32,
            Scalar::Float64(_) => ScalarKind::Float64,
            Scalar::Complex64(_) => ScalarKind::Complex64,
            Scalar::Complex128(_) => ScalarKind::Complex128,
        }
    }

    /// Returns the literal text written for this scalar.
    ///
    /// Numbers use their `Display` form, complex numbers the `a+bi` form,
    /// strings their verbatim content, dates and datetimes the two fixed
    /// timestamp layouts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eml::Scalar;
    /// use chrono::NaiveDate;
    ///
    /// assert_eq!(Scalar::Bool(true).literal(), "true");
    /// assert_eq!(Scalar::Float(2.5).literal(), "2.5");
    /// let date = NaiveDate::from_ymd_opt(2024, 7, 27).unwrap();
    /// assert_eq!(Scalar::Date(date).literal(), "07/27/2024");
    /// ```
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Scalar::Bool(v) => v.to_string(),
            Scalar::Byte(v) => v.to_string(),
            Scalar::Int(v) | Scalar::Int64(v) => v.to_string(),
            Scalar::Float(v) | Scalar::Float64(v) => v.to_string(),
            Scalar::Complex(v) | Scalar::Complex128(v) => v.to_string(),
            Scalar::Str(s) => s.clone(),
            Scalar::Date(d) => d.format(DATE_FORMAT).to_string(),
            Scalar::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
            Scalar::Int8(v) => v.to_string(),
            Scalar::UInt8(v) => v.to_string(),
            Scalar::Int16(v) => v.to_string(),
            Scalar::UInt16(v) => v.to_string(),
            Scalar::Int32(v) => v.to_string(),
            Scalar::UInt32(v) => v.to_string(),
            Scalar::UInt64(v) => v.to_string(),
            Scalar::Float32(v) => v.to_string(),
            Scalar::Complex64(v) => v.to_string(),
        }
    }

    /// Parses a literal body as the given kind.
    ///
    /// The body is stripped of surrounding alignment whitespace first;
    /// failure to convert is an [`Error::InvalidLiteral`] carrying the
    /// input line number.
    pub(crate) fn parse(kind: ScalarKind, body: &str, line: usize) -> Result<Scalar> {
        let text = body.trim();
        let bad = || Error::invalid_literal(line, kind.tag(), text);
        Ok(match kind {
            ScalarKind::Bool => match text.to_ascii_lowercase().as_str() {
                "true" => Scalar::Bool(true),
                "false" => Scalar::Bool(false),
                _ => return Err(bad()),
            },
            ScalarKind::Byte => Scalar::Byte(text.parse().map_err(|_| bad())?),
            ScalarKind::Int => Scalar::Int(text.parse().map_err(|_| bad())?),
            ScalarKind::Float => Scalar::Float(text.parse().map_err(|_| bad())?),
            ScalarKind::Complex => Scalar::Complex(text.parse().map_err(|_| bad())?),
            ScalarKind::Str => Scalar::Str(text.to_string()),
            ScalarKind::Date => {
                Scalar::Date(NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| bad())?)
            }
            ScalarKind::DateTime => Scalar::DateTime(
                NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).map_err(|_| bad())?,
            ),
            ScalarKind::Int8 => Scalar::Int8(text.parse().map_err(|_| bad())?),
            ScalarKind::UInt8 => Scalar::UInt8(text.parse().map_err(|_| bad())?),
            ScalarKind::Int16 => Scalar::Int16(text.parse().map_err(|_| bad())?),
            ScalarKind::UInt16 => Scalar::UInt16(text.parse().map_err(|_| bad())?),
            ScalarKind::Int32 => Scalar::Int32(text.parse().map_err(|_| bad())?),
            ScalarKind::UInt32 => Scalar::UInt32(text.parse().map_err(|_| bad())?),
            ScalarKind::Int64 => Scalar::Int64(text.parse().map_err(|_| bad())?),
            ScalarKind::UInt64 => Scalar::UInt64(text.parse().map_err(|_| bad())?),
            ScalarKind::Float32 => Scalar::Float32(text.parse().map_err(|_| bad())?),
            ScalarKind::Float64 => Scalar::Float64(text.parse().map_err(|_| bad())?),
            ScalarKind::Complex64 => Scalar::Complex64(text.parse().map_err(|_| bad())?),
            ScalarKind::Complex128 => Scalar::Complex128(text.parse().map_err(|_| bad())?),
        })
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal())
    }
}

// Floats and complex numbers compare by bit pattern so that Eq and Hash
// stay consistent. -0.0 != 0.0 and NaN == NaN under this relation.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Byte(a), Scalar::Byte(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Complex(a), Scalar::Complex(b)) => {
                a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
            }
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            (Scalar::Date(a), Scalar::Date(b)) => a == b,
            (Scalar::DateTime(a), Scalar::DateTime(b)) => a == b,
            (Scalar::Int8(a), Scalar::Int8(b)) => a == b,
            (Scalar::UInt8(a), Scalar::UInt8(b)) => a == b,
            (Scalar::Int16(a), Scalar::Int16(b)) => a == b,
            (Scalar::UInt16(a), Scalar::UInt16(b)) => a == b,
            (Scalar::Int32(a), Scalar::Int32(b)) => a == b,
            (Scalar::UInt32(a), Scalar::UInt32(b)) => a == b,
            (Scalar::Int64(a), Scalar::Int64(b)) => a == b,
            (Scalar::UInt64(a), Scalar::UInt64(b)) => a == b,
            (Scalar::Float32(a), Scalar::Float32(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Float64(a), Scalar::Float64(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Complex64(a), Scalar::Complex64(b)) => {
                a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
            }
            (Scalar::Complex128(a), Scalar::Complex128(b)) => {
                a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
            }
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Scalar::Bool(v) => v.hash(state),
            Scalar::Byte(v) | Scalar::UInt8(v) => v.hash(state),
            Scalar::Int(v) | Scalar::Int64(v) => v.hash(state),
            Scalar::Float(v) | Scalar::Float64(v) => v.to_bits().hash(state),
            Scalar::Complex(v) | Scalar::Complex128(v) => {
                v.re.to_bits().hash(state);
                v.im.to_bits().hash(state);
            }
            Scalar::Str(s) => s.hash(state),
            Scalar::Date(d) => d.hash(state),
            Scalar::DateTime(dt) => dt.hash(state),
            Scalar::Int8(v) => v.hash(state),
            Scalar::Int16(v) => v.hash(state),
            Scalar::UInt16(v) => v.hash(state),
            Scalar::Int32(v) => v.hash(state),
            Scalar::UInt32(v) => v.hash(state),
            Scalar::UInt64(v) => v.hash(state),
            Scalar::Float32(v) => v.to_bits().hash(state),
            Scalar::Complex64(v) => {
                v.re.to_bits().hash(state);
                v.im.to_bits().hash(state);
            }
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<num_complex::Complex64> for Scalar {
    fn from(value: num_complex::Complex64) -> Self {
        Scalar::Complex(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Date(value)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(value: NaiveDateTime) -> Self {
        Scalar::DateTime(value)
    }
}

/// Any value the format can store: a scalar or a nested container.
///
/// Containers nest without limit: a list may hold dicts of tuples of
/// sets. [`Dict`](Value::Dict) keys are always scalars; set members are
/// unique by structural equality; [`Tuple`](Value::Tuple) arity is fixed
/// at construction; [`FrozenSet`](Value::FrozenSet) differs from
/// [`Set`](Value::Set) only in its immutability marker, not its encoding
/// of members.
#[derive(Debug, Clone)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    FrozenSet(Vec<Value>),
    Dict(EmlMap),
    Array(TypedArray),
}

fn members_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

// Sets compare by membership; everything else is structural. Dict
// comparison is order-independent through IndexMap.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => members_equal(a, b),
            (Value::FrozenSet(a), Value::FrozenSet(b)) => members_equal(a, b),
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns `true` if the value is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a dict.
    #[inline]
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Returns `true` if the value is a set or frozen set.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_) | Value::FrozenSet(_))
    }

    /// Returns `true` if the value is a typed array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// If the value is a scalar, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a boolean scalar, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eml::Value;
    ///
    /// assert_eq!(Value::from(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an `int` scalar, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a `float` scalar, returns it.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string scalar, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list, tuple, set or frozen set, returns its
    /// elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) | Value::Tuple(v) | Value::Set(v) | Value::FrozenSet(v) => Some(v),
            _ => None,
        }
    }

    /// If the value is a dict, returns a reference to its map.
    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&EmlMap> {
        match self {
            Value::Dict(m) => Some(m),
            _ => None,
        }
    }

    /// If the value is a typed array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&TypedArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(Scalar::Int(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<num_complex::Complex64> for Value {
    fn from(value: num_complex::Complex64) -> Self {
        Value::Scalar(Scalar::Complex(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Str(value))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Scalar(Scalar::Date(value))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Scalar(Scalar::DateTime(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<EmlMap> for Value {
    fn from(value: EmlMap) -> Self {
        Value::Dict(value)
    }
}

impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Value::Array(value)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Scalar(Scalar::Int(i)) => Ok(i),
            other => Err(Error::type_mismatch("int", &format!("{other:?}"))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Scalar(Scalar::Float(f)) => Ok(f),
            other => Err(Error::type_mismatch("float", &format!("{other:?}"))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Scalar(Scalar::Bool(b)) => Ok(b),
            other => Err(Error::type_mismatch("bool", &format!("{other:?}"))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Scalar(Scalar::Str(s)) => Ok(s),
            other => Err(Error::type_mismatch("str", &format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(s: &Scalar) -> u64 {
        let mut h = DefaultHasher::new();
        s.hash(&mut h);
        h.finish()
    }

    #[test]
    fn literal_round_trips_every_kind() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 27).unwrap();
        let dt = date.and_hms_micro_opt(13, 5, 9, 123456).unwrap();
        let cases = vec![
            Scalar::Bool(false),
            Scalar::Byte(255),
            Scalar::Int(-666),
            Scalar::Float(666.666),
            Scalar::Complex(num_complex::Complex64::new(1.0, 1.0)),
            Scalar::Str("this is a test of the primitives".to_string()),
            Scalar::Date(date),
            Scalar::DateTime(dt),
            Scalar::Int8(-128),
            Scalar::UInt8(255),
            Scalar::Int16(-32768),
            Scalar::UInt16(65535),
            Scalar::Int32(-7),
            Scalar::UInt32(7),
            Scalar::Int64(i64::MIN),
            Scalar::UInt64(u64::MAX),
            Scalar::Float32(1.5),
            Scalar::Float64(-2.25),
            Scalar::Complex64(num_complex::Complex32::new(0.5, -0.5)),
            Scalar::Complex128(num_complex::Complex64::new(-3.0, 4.0)),
        ];
        for scalar in cases {
            let text = scalar.literal();
            let back = Scalar::parse(scalar.kind(), &text, 1).unwrap();
            assert_eq!(back, scalar, "kind {:?}", scalar.kind());
        }
    }

    #[test]
    fn datetime_literal_uses_fixed_layout() {
        let dt = NaiveDate::from_ymd_opt(2024, 7, 27)
            .unwrap()
            .and_hms_micro_opt(1, 2, 3, 40)
            .unwrap();
        assert_eq!(Scalar::DateTime(dt).literal(), "07/27/2024 01:02:03.000040");
    }

    #[test]
    fn parse_strips_alignment_whitespace() {
        assert_eq!(
            Scalar::parse(ScalarKind::Int, "   42  ", 1).unwrap(),
            Scalar::Int(42)
        );
        assert_eq!(
            Scalar::parse(ScalarKind::Str, "  padded text  ", 1).unwrap(),
            Scalar::Str("padded text".to_string())
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Scalar::parse(ScalarKind::Int, "yup", 9).unwrap_err();
        assert!(matches!(err, Error::InvalidLiteral { line: 9, .. }));
        assert!(Scalar::parse(ScalarKind::Date, "27/07/2024", 1).is_err());
        assert!(Scalar::parse(ScalarKind::Byte, "256", 1).is_err());
    }

    #[test]
    fn bool_parse_is_case_insensitive() {
        assert_eq!(
            Scalar::parse(ScalarKind::Bool, "True", 1).unwrap(),
            Scalar::Bool(true)
        );
        assert_eq!(
            Scalar::parse(ScalarKind::Bool, "false", 1).unwrap(),
            Scalar::Bool(false)
        );
    }

    #[test]
    fn same_number_different_width_is_not_equal() {
        assert_ne!(Scalar::Int(1), Scalar::Int32(1));
        assert_ne!(Scalar::Float(1.0), Scalar::Float32(1.0));
        assert_ne!(Scalar::Byte(1), Scalar::UInt8(1));
    }

    #[test]
    fn float_eq_and_hash_agree() {
        let a = Scalar::Float(2.5);
        let b = Scalar::Float(2.5);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(Scalar::Float(0.0), Scalar::Float(-0.0));
    }

    #[test]
    fn set_equality_ignores_order() {
        let a = Value::Set(vec![Value::from(1), Value::from(2), Value::from(3)]);
        let b = Value::Set(vec![Value::from(3), Value::from(1), Value::from(2)]);
        assert_eq!(a, b);

        let c = Value::Set(vec![Value::from(1), Value::from(2)]);
        assert_ne!(a, c);
    }

    #[test]
    fn list_equality_keeps_order() {
        let a = Value::List(vec![Value::from(1), Value::from(2)]);
        let b = Value::List(vec![Value::from(2), Value::from(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn set_and_frozenset_are_distinct() {
        let members = vec![Value::from(1)];
        assert_ne!(Value::Set(members.clone()), Value::FrozenSet(members));
    }
}
