//! eML decoding.
//!
//! The [`Decoder`] turns the text of an eML file back into a typed
//! [`Eml`] document. Parsing is line-oriented: the file is split into an
//! immutable line array up front, and a single cursor index is threaded
//! through every recursive call. A container's element lines sit
//! physically after its header line, so recursion and the cursor advance
//! in lockstep: when a nested container finishes, the cursor is already
//! positioned on the parent's next element.
//!
//! Leading and trailing whitespace on any consumed line is alignment
//! padding and is stripped before parsing.
//!
//! ## Usage
//!
//! Most users should use [`crate::from_str`]:
//!
//! ```rust
//! use eml::from_str;
//!
//! let text = "\
//! eML Header | 0.01 | rust | 07/27/2024 10:00:00.000000 | 07/27/2024 10:00:00.000000
//! answer := <int>42
//! ";
//! let doc = from_str(text).unwrap();
//! assert_eq!(doc.get_int("answer"), Some(42));
//! ```

use crate::array;
use crate::document::{Eml, Metadata, HEADER_MARKER};
use crate::error::{Error, Result};
use crate::kind::{ContainerKind, ScalarKind};
use crate::map::EmlMap;
use crate::tag::{split_tag, Tag};
use crate::value::{Scalar, Value, DATETIME_FORMAT};
use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// The eML decoder.
///
/// Holds the line array and the shared cursor. Created via
/// [`Decoder::from_str`]; consumed by [`Decoder::decode_document`].
pub struct Decoder<'de> {
    lines: Vec<&'de str>,
    cursor: usize,
}

impl<'de> Decoder<'de> {
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(input: &'de str) -> Self {
        Decoder {
            lines: input.lines().collect(),
            cursor: 0,
        }
    }

    /// Parses the whole input into a document: header first, then every
    /// `:=` entry until the cursor is exhausted.
    pub fn decode_document(mut self) -> Result<Eml> {
        let meta = self.parse_header()?;
        let mut entries: IndexMap<String, Value> = IndexMap::new();

        while let Some(raw) = self.next_line() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            // Only lines with := start an entry; container element lines
            // are consumed inside decode_entry and never reach this loop.
            let Some((identifier, rhs)) = line.split_once(":=") else {
                continue;
            };
            let identifier = identifier.trim();
            let (tag, body) = split_tag(rhs, self.line_no())?;
            let value = self.decode_entry(&tag, body)?;
            if entries.insert(identifier.to_string(), value).is_some() {
                return Err(Error::DuplicateIdentifier(identifier.to_string()));
            }
        }

        Ok(Eml::from_parts(meta, entries))
    }

    /// 1-based number of the most recently consumed line.
    fn line_no(&self) -> usize {
        self.cursor
    }

    fn next_line(&mut self) -> Option<&'de str> {
        let line = self.lines.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(line)
    }

    /// Pops the line holding the next container element, or reports how
    /// far the container got before the input ran out.
    fn element_line(&mut self, what: &'static str, expected: usize, found: usize) -> Result<&'de str> {
        self.next_line()
            .ok_or_else(|| Error::count_mismatch(what, expected, found))
    }

    fn parse_header(&mut self) -> Result<Metadata> {
        loop {
            let Some(raw) = self.next_line() else {
                return Err(Error::malformed_header(
                    self.line_no(),
                    "missing 'eML Header' line",
                ));
            };
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if !line.contains(HEADER_MARKER) {
                return Err(Error::malformed_header(
                    self.line_no(),
                    "first line is not an 'eML Header'",
                ));
            }

            let fields: Vec<&str> = line.split('|').map(str::trim).collect();
            if fields.len() != 5 {
                return Err(Error::malformed_header(
                    self.line_no(),
                    &format!("expected 5 '|'-separated fields, found {}", fields.len()),
                ));
            }
            let version = fields[1].parse::<f64>().map_err(|_| {
                Error::malformed_header(self.line_no(), &format!("bad version {:?}", fields[1]))
            })?;
            let created = self.header_timestamp(fields[3])?;
            let updated = self.header_timestamp(fields[4])?;
            return Ok(Metadata {
                version,
                language: fields[2].to_string(),
                created,
                updated,
            });
        }
    }

    fn header_timestamp(&self, text: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).map_err(|_| {
            Error::malformed_header(self.line_no(), &format!("bad timestamp {text:?}"))
        })
    }

    /// Central dispatch: primitive tags parse in place, container tags
    /// recurse, anything else is unsupported.
    fn decode_entry(&mut self, tag: &Tag<'_>, body: &str) -> Result<Value> {
        if let Some(kind) = ScalarKind::from_tag(tag.head()) {
            return Ok(Value::Scalar(Scalar::parse(kind, body, self.line_no())?));
        }
        match ContainerKind::from_tag(tag.head()) {
            Some(ContainerKind::Dict) => {
                let count = tag.count(self.line_no())?;
                self.decode_dict(count, body)
            }
            Some(ContainerKind::List) => {
                let count = tag.count(self.line_no())?;
                Ok(Value::List(self.decode_elements("list", count, body, false)?))
            }
            Some(ContainerKind::Tuple) => {
                let count = tag.count(self.line_no())?;
                Ok(Value::Tuple(self.decode_elements("tuple", count, body, false)?))
            }
            Some(ContainerKind::Set) => {
                let count = tag.count(self.line_no())?;
                Ok(Value::Set(self.decode_elements("set", count, body, true)?))
            }
            Some(ContainerKind::FrozenSet) => {
                let count = tag.count(self.line_no())?;
                Ok(Value::FrozenSet(self.decode_elements(
                    "frozenset",
                    count,
                    body,
                    true,
                )?))
            }
            Some(ContainerKind::Array) => {
                Ok(Value::Array(array::decode(tag, body, self.line_no())?))
            }
            None => Err(Error::unsupported_type(tag.head())),
        }
    }

    /// Decodes a declared-count element sequence: the first element body
    /// comes from the header line's remainder, each further element from
    /// the next cursor line. Elements recurse through
    /// [`Self::decode_entry`], so nested containers consume their own
    /// lines before the loop resumes.
    fn decode_elements(
        &mut self,
        what: &'static str,
        count: usize,
        first: &str,
        dedup: bool,
    ) -> Result<Vec<Value>> {
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let body = if index == 0 {
                first
            } else {
                self.element_line(what, count, index)?
            };
            let (tag, rest) = split_tag(body.trim(), self.line_no())?;
            let value = self.decode_entry(&tag, rest)?;
            if !dedup || !items.contains(&value) {
                items.push(value);
            }
        }
        Ok(items)
    }

    fn decode_dict(&mut self, count: usize, first: &str) -> Result<Value> {
        let mut map = EmlMap::with_capacity(count);
        for index in 0..count {
            let body = if index == 0 {
                first
            } else {
                self.element_line("dict", count, index)?
            };
            let (key, value) = self.decode_pair(body.trim())?;
            map.insert(key, value);
        }
        Ok(Value::Dict(map))
    }

    /// One dict pair: the key is everything before the segment's first
    /// `|`, the value everything after. Keys are always primitives.
    fn decode_pair(&mut self, body: &str) -> Result<(Scalar, Value)> {
        let line = self.line_no();
        let (key_text, value_text) = body
            .split_once('|')
            .ok_or_else(|| Error::invalid_literal(line, "dict pair", body))?;

        let (key_tag, key_body) = split_tag(key_text, line)?;
        let key_kind = ScalarKind::from_tag(key_tag.head())
            .ok_or_else(|| Error::unsupported_type(key_tag.head()))?;
        let key = Scalar::parse(key_kind, key_body, line)?;

        let (value_tag, value_body) = split_tag(value_text, line)?;
        let value = self.decode_entry(&value_tag, value_body)?;
        Ok((key, value))
    }
}
