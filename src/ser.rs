//! eML encoding.
//!
//! The [`Encoder`] walks a document's entries in insertion order and
//! emits the line sequence the decoder inverts. Containers follow the
//! first-inline rule: the element count lives in the header tag, the
//! first element (or dict pair) shares the header's line, and every
//! further element gets its own line. A nested container appends its own
//! header inline and its elements then follow under the same rule.
//! Nesting depth is encoded purely by which line a tag's remainder
//! starts on, with no brackets anywhere.
//!
//! Continuation lines are left-padded so elements line up under the
//! header. The padding is cosmetic; [`EmlOptions::with_align`] turns it
//! off and the decoder accepts either form.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`]:
//!
//! ```rust
//! use eml::Eml;
//!
//! let mut doc = Eml::new();
//! doc.set_list("l", vec![1.into(), 2.into(), 3.into()]).unwrap();
//!
//! let text = eml::to_string(&doc);
//! assert!(text.contains("l := <list|3> <int>1"));
//! ```

use crate::document::{Eml, HEADER_MARKER};
use crate::kind::ContainerKind;
use crate::map::EmlMap;
use crate::options::EmlOptions;
use crate::value::{Scalar, Value, DATETIME_FORMAT};

/// The eML encoder.
///
/// Accumulates output lines; created via [`Encoder::new`] and consumed
/// by [`Encoder::encode`].
pub struct Encoder {
    lines: Vec<String>,
    options: EmlOptions,
}

fn scalar_text(scalar: &Scalar) -> String {
    format!("<{}>{}", scalar.kind().tag(), scalar.literal())
}

impl Encoder {
    #[must_use]
    pub fn new(options: EmlOptions) -> Self {
        Encoder {
            lines: Vec::new(),
            options,
        }
    }

    /// Serializes the whole document: header line first, then every
    /// entry in insertion order. Returns the file text, newline
    /// terminated.
    #[must_use]
    pub fn encode(mut self, doc: &Eml) -> String {
        let meta = doc.metadata();
        self.lines.push(format!(
            "{HEADER_MARKER} | {} | {} | {} | {}",
            meta.version,
            meta.language,
            meta.created.format(DATETIME_FORMAT),
            meta.updated.format(DATETIME_FORMAT),
        ));

        for (identifier, value) in doc.entry_map() {
            self.encode_entry(identifier, value);
        }

        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn encode_entry(&mut self, identifier: &str, value: &Value) {
        let prefix = format!("{identifier} := ");
        match value {
            Value::Scalar(s) => self.lines.push(prefix + &scalar_text(s)),
            container => self.append_container(prefix, container),
        }
    }

    /// Returns the prefix continuation lines start with: padding the
    /// width of `header` when aligning, nothing otherwise.
    fn continuation(&self, header: &str) -> String {
        if self.options.align {
            " ".repeat(header.chars().count())
        } else {
            String::new()
        }
    }

    /// Appends a container to the line under construction. `prefix`
    /// already holds everything to the left: the identifier, or an
    /// enclosing container's header chain.
    fn append_container(&mut self, prefix: String, value: &Value) {
        match value {
            Value::Scalar(s) => self.lines.push(prefix + &scalar_text(s)),
            Value::List(items) => self.append_elements(prefix, ContainerKind::List, items),
            Value::Tuple(items) => self.append_elements(prefix, ContainerKind::Tuple, items),
            Value::Set(items) => self.append_elements(prefix, ContainerKind::Set, items),
            Value::FrozenSet(items) => {
                self.append_elements(prefix, ContainerKind::FrozenSet, items)
            }
            Value::Dict(map) => self.append_dict(prefix, map),
            Value::Array(array) => self
                .lines
                .push(format!("{prefix}{} {}", array.tag_text(), array.body_text())),
        }
    }

    fn append_elements(&mut self, prefix: String, kind: ContainerKind, items: &[Value]) {
        let header = format!("{prefix}<{}|{}> ", kind.tag(), items.len());
        if items.is_empty() {
            self.lines.push(header.trim_end().to_string());
            return;
        }

        let pad = self.continuation(&header);
        let mut current = header;
        for item in items {
            let line_prefix = std::mem::replace(&mut current, pad.clone());
            match item {
                Value::Scalar(s) => self.lines.push(line_prefix + &scalar_text(s)),
                container => self.append_container(line_prefix, container),
            }
        }
    }

    fn append_dict(&mut self, prefix: String, map: &EmlMap) {
        let header = format!("{prefix}<{}|{}>", ContainerKind::Dict.tag(), map.len());
        if map.is_empty() {
            self.lines.push(header);
            return;
        }

        let pad = self.continuation(&header);
        let mut current = header;
        for (key, value) in map {
            let line_prefix = std::mem::replace(&mut current, pad.clone());
            let keyed = format!("{line_prefix}{}|", scalar_text(key));
            match value {
                Value::Scalar(s) => self.lines.push(keyed + &scalar_text(s)),
                container => self.append_container(keyed, container),
            }
        }
    }
}
