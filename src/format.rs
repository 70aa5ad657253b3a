//! eML wire format reference.
//!
//! This module documents the eML file format as implemented by this
//! library. It contains no code; it is the normative description the
//! encoder and decoder are written against.
//!
//! # Overview
//!
//! eML is a self-describing, line-oriented, strongly typed text format.
//! Every stored value carries a tag naming its exact runtime type, so a
//! file round-trips to the same typed values it was written from,
//! including fixed-width numeric subtypes and arbitrarily nested
//! containers. The format is textual and verbose on purpose: a file is
//! meant to be readable and diffable by a person.
//!
//! # Header
//!
//! The first non-blank line is the header. It opens with the literal
//! marker `eML Header` followed by four `|`-separated fields:
//!
//! ```text
//! eML Header | 0.01 | rust | 07/27/2024 10:00:00.000000 | 08/05/2024 11:30:00.500000
//! ```
//!
//! 1. format version (float)
//! 2. source-language tag (string)
//! 3. creation timestamp
//! 4. last-update timestamp
//!
//! Timestamps use the fixed layout `MM/DD/YYYY HH:MM:SS.ffffff`. A
//! missing or garbled header fails the whole load.
//!
//! # Entries
//!
//! Every subsequent non-blank line containing `:=` starts one entry:
//!
//! ```text
//! identifier := <tag[|param...]>body
//! ```
//!
//! Identifiers may contain interior spaces; surrounding whitespace is
//! trimmed. The `<...>` tag names the value's kind, with `|`-separated
//! parameters for containers. Whitespace used to align continuation
//! lines is never significant on read.
//!
//! # Primitives
//!
//! | Tag | Literal | Example |
//! |-----|---------|---------|
//! | `bool` | `true` / `false` | `flag := <bool>true` |
//! | `byte` | decimal 0–255 | `b := <byte>17` |
//! | `int` | decimal integer | `n := <int>-666` |
//! | `float` | decimal / scientific | `x := <float>666.666` |
//! | `complex` | `a+bi` | `z := <complex>1+1i` |
//! | `str` | verbatim text | `s := <str>plain text` |
//! | `date` | `MM/DD/YYYY` | `d := <date>07/27/2024` |
//! | `datetime` | `MM/DD/YYYY HH:MM:SS.ffffff` | `t := <datetime>07/27/2024 01:02:03.000040` |
//!
//! The fixed-width subtypes `int8`–`int64`, `uint8`–`uint64`, `float32`,
//! `float64`, `complex64` and `complex128` use the same literal forms and
//! appear mostly as array subtypes and cell tags.
//!
//! # Containers
//!
//! Container tags declare their element count up front: `<list|3>`,
//! `<set|2>`, `<tuple|4>`, `<frozenset|1>`, `<dict|2>`. The first
//! element shares the header's line; each further element occupies the
//! next line, conventionally left-padded to align under the first:
//!
//! ```text
//! l := <list|3> <int>1
//!               <float>1.3
//!               <str>yup
//! ```
//!
//! A nested container appends its header *inline* and its own elements
//! then follow under the same rule; depth is encoded purely by which
//! line a tag's remainder starts on:
//!
//! ```text
//! outer := <list|2> <list|2> <int>1
//!                            <int>2
//!                   <int>3
//! ```
//!
//! A count of `0` is a bare header with nothing following. A count the
//! remaining lines cannot satisfy fails the load.
//!
//! Dict pairs are `key|value`: the key is a tagged primitive (any
//! primitive kind; keys keep their exact type), the value is any entry
//! body, recursing for containers:
//!
//! ```text
//! d := <dict|2><str>a|<int>5
//!              <int>2|<list|2> <int>1
//!                              <int>2
//! ```
//!
//! Sets and frozen sets are written like lists; members are unique and
//! their order carries no meaning. A frozen set differs from a set only
//! in its immutability marker, not in its encoding.
//!
//! # Arrays
//!
//! Array tags carry an element subtype token and a parenthesized shape;
//! the body is the row-major cells joined with `|`:
//!
//! ```text
//! a := <array|int32|(2, 3)> 1|2|3|4|5|6
//! ```
//!
//! An empty subtype token marks a mixed array whose cells carry their
//! own tags:
//!
//! ```text
//! m := <array||(4,)> <int>1|<float>2.5|<str>x|<bool>true
//! ```
//!
//! One-dimensional shapes print as `(n,)`. The flattened cell count must
//! equal the product of the shape dimensions.
//!
//! # Limits
//!
//! - Strings cannot contain newlines (the format is line-oriented), and
//!   surrounding whitespace is not preserved.
//! - Dict *keys* and array cells cannot contain `|`; dict, list and set
//!   *values* may, because only the first separator of a pair is
//!   significant.
