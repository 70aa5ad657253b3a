//! The array codec: multi-dimensional typed arrays.
//!
//! An eML array is a shape plus a flat, row-major cell sequence. When
//! every cell shares one primitive subtype the array is *homogeneous*
//! and its cells are written as bare literals; otherwise it is *mixed*
//! and every cell carries its own tag. Either way the declared shape
//! fully determines how many cells the body must hold.
//!
//! ## Examples
//!
//! ```rust
//! use eml::{Scalar, TypedArray, ScalarKind};
//!
//! let cells = vec![
//!     Scalar::Int32(1), Scalar::Int32(2), Scalar::Int32(3),
//!     Scalar::Int32(4), Scalar::Int32(5), Scalar::Int32(6),
//! ];
//! let array = TypedArray::new(vec![2, 3], cells).unwrap();
//! assert_eq!(array.dtype(), Some(ScalarKind::Int32));
//! assert_eq!(array.get(&[1, 2]), Some(&Scalar::Int32(6)));
//! ```

use crate::error::{Error, Result};
use crate::kind::{ContainerKind, ScalarKind};
use crate::tag::Tag;
use crate::value::Scalar;

/// A multi-dimensional array of scalar cells in row-major order.
///
/// The element subtype is recorded at construction: `Some(kind)` for a
/// homogeneous array, `None` for mixed cells. The distinction is part of
/// the value: it controls the encoded form and survives a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    dtype: Option<ScalarKind>,
    shape: Vec<usize>,
    data: Vec<Scalar>,
}

fn shape_len(shape: &[usize]) -> usize {
    shape.iter().product()
}

impl TypedArray {
    /// Builds an array from a shape and flat row-major cells, inferring
    /// the element subtype: `Some(kind)` when every cell agrees, `None`
    /// (mixed) otherwise.
    ///
    /// Fails with [`Error::ElementCountMismatch`] when the cell count
    /// does not equal the product of the shape dimensions.
    pub fn new(shape: Vec<usize>, data: Vec<Scalar>) -> Result<Self> {
        let dtype = infer_dtype(&data);
        Self::with_dtype(dtype, shape, data)
    }

    /// Builds an array with an explicit element subtype.
    ///
    /// `dtype: None` marks the array as mixed even if the cells happen to
    /// agree, which preserves the per-cell tags of a decoded mixed array.
    pub fn with_dtype(
        dtype: Option<ScalarKind>,
        shape: Vec<usize>,
        data: Vec<Scalar>,
    ) -> Result<Self> {
        let expected = shape_len(&shape);
        if data.len() != expected {
            return Err(Error::count_mismatch("array", expected, data.len()));
        }
        if let Some(kind) = dtype {
            if let Some(cell) = data.iter().find(|c| c.kind() != kind) {
                return Err(Error::type_mismatch(kind.tag(), cell.kind().tag()));
            }
        }
        Ok(TypedArray { dtype, shape, data })
    }

    /// The element subtype: `Some` for homogeneous arrays, `None` for
    /// mixed cells.
    #[inline]
    #[must_use]
    pub fn dtype(&self) -> Option<ScalarKind> {
        self.dtype
    }

    /// The declared shape.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The flat row-major cells.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Scalar] {
        &self.data
    }

    /// Looks up a cell by multi-dimensional index.
    ///
    /// Returns `None` when the index rank or any coordinate is out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<&Scalar> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (i, dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        self.data.get(flat)
    }

    /// The tag text for this array: `array`, the subtype token (empty for
    /// mixed), and the parenthesized shape.
    #[must_use]
    pub(crate) fn tag_text(&self) -> String {
        let subtype = self.dtype.map(|k| k.tag()).unwrap_or("");
        format!(
            "<{}|{}|{}>",
            ContainerKind::Array.tag(),
            subtype,
            shape_text(&self.shape)
        )
    }

    /// The `|`-separated cell body: bare literals for a homogeneous
    /// array, tagged cells for a mixed one.
    #[must_use]
    pub(crate) fn body_text(&self) -> String {
        let cells: Vec<String> = match self.dtype {
            Some(_) => self.data.iter().map(Scalar::literal).collect(),
            None => self
                .data
                .iter()
                .map(|c| format!("<{}>{}", c.kind().tag(), c.literal()))
                .collect(),
        };
        cells.join("|")
    }
}

fn infer_dtype(data: &[Scalar]) -> Option<ScalarKind> {
    let first = data.first()?.kind();
    data.iter().all(|c| c.kind() == first).then_some(first)
}

/// Formats a shape as its parenthesized text: `(4,)` for one dimension,
/// `(2, 3)` otherwise.
pub(crate) fn shape_text(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({single},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Parses parenthesized shape text into a dimension list.
pub(crate) fn parse_shape(text: &str, line: usize) -> Result<Vec<usize>> {
    let bad = || Error::invalid_literal(line, "array shape", text);
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(bad)?;
    inner
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<usize>().map_err(|_| bad()))
        .collect()
}

/// Decodes an array entry from its tag parameters and cell body.
pub(crate) fn decode(tag: &Tag<'_>, body: &str, line: usize) -> Result<TypedArray> {
    let subtype_token = tag
        .param(0)
        .ok_or_else(|| Error::invalid_literal(line, "array subtype", ""))?;
    let shape_token = tag
        .param(1)
        .ok_or_else(|| Error::invalid_literal(line, "array shape", ""))?;

    let dtype = if subtype_token.is_empty() {
        None
    } else {
        Some(
            ScalarKind::from_tag(subtype_token)
                .ok_or_else(|| Error::unsupported_type(subtype_token))?,
        )
    };
    let shape = parse_shape(shape_token, line)?;
    let expected = shape_len(&shape);

    let body = body.trim();
    if expected == 0 {
        if !body.is_empty() {
            return Err(Error::count_mismatch("array", 0, body.split('|').count()));
        }
        return TypedArray::with_dtype(dtype, shape, Vec::new());
    }

    let raw_cells: Vec<&str> = body.split('|').collect();
    if raw_cells.len() != expected {
        return Err(Error::count_mismatch("array", expected, raw_cells.len()));
    }

    let mut data = Vec::with_capacity(expected);
    for raw in raw_cells {
        let cell = match dtype {
            Some(kind) => Scalar::parse(kind, raw, line)?,
            None => {
                let (cell_tag, rest) = crate::tag::split_tag(raw, line)?;
                let kind = ScalarKind::from_tag(cell_tag.head())
                    .ok_or_else(|| Error::unsupported_type(cell_tag.head()))?;
                Scalar::parse(kind, rest, line)?
            }
        };
        data.push(cell);
    }
    TypedArray::with_dtype(dtype, shape, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::split_tag;

    #[test]
    fn shape_text_matches_both_arities() {
        assert_eq!(shape_text(&[4]), "(4,)");
        assert_eq!(shape_text(&[2, 3]), "(2, 3)");
        assert_eq!(shape_text(&[2, 3, 4]), "(2, 3, 4)");
    }

    #[test]
    fn parse_shape_accepts_trailing_comma() {
        assert_eq!(parse_shape("(4,)", 1).unwrap(), vec![4]);
        assert_eq!(parse_shape("(2, 3)", 1).unwrap(), vec![2, 3]);
        assert!(parse_shape("2, 3", 1).is_err());
        assert!(parse_shape("(two,)", 1).is_err());
    }

    #[test]
    fn new_infers_homogeneous_dtype() {
        let array = TypedArray::new(vec![2], vec![Scalar::Int(1), Scalar::Int(2)]).unwrap();
        assert_eq!(array.dtype(), Some(ScalarKind::Int));
    }

    #[test]
    fn new_infers_mixed_dtype() {
        let array = TypedArray::new(vec![2], vec![Scalar::Int(1), Scalar::Float(2.5)]).unwrap();
        assert_eq!(array.dtype(), None);
    }

    #[test]
    fn shape_product_is_validated() {
        let err = TypedArray::new(vec![2, 3], vec![Scalar::Int(1)]).unwrap_err();
        assert!(matches!(
            err,
            Error::ElementCountMismatch {
                expected: 6,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn get_uses_row_major_order() {
        let cells = (1..=6).map(Scalar::Int).collect();
        let array = TypedArray::new(vec![2, 3], cells).unwrap();
        assert_eq!(array.get(&[0, 0]), Some(&Scalar::Int(1)));
        assert_eq!(array.get(&[0, 2]), Some(&Scalar::Int(3)));
        assert_eq!(array.get(&[1, 0]), Some(&Scalar::Int(4)));
        assert_eq!(array.get(&[2, 0]), None);
        assert_eq!(array.get(&[0]), None);
    }

    #[test]
    fn decode_homogeneous_body() {
        let (tag, _) = split_tag("<array|int32|(2, 3)>", 1).unwrap();
        let array = decode(&tag, "1|2|3|4|5|6", 1).unwrap();
        assert_eq!(array.dtype(), Some(ScalarKind::Int32));
        assert_eq!(array.shape(), &[2, 3]);
        assert_eq!(array.get(&[1, 2]), Some(&Scalar::Int32(6)));
    }

    #[test]
    fn decode_mixed_body() {
        let (tag, _) = split_tag("<array||(4,)>", 1).unwrap();
        let array = decode(&tag, "<int>1|<float>2.5|<str>x|<bool>true", 1).unwrap();
        assert_eq!(array.dtype(), None);
        assert_eq!(array.cells()[1], Scalar::Float(2.5));
        assert_eq!(array.cells()[3], Scalar::Bool(true));
    }

    #[test]
    fn decode_rejects_short_body() {
        let (tag, _) = split_tag("<array|int|(2, 3)>", 4).unwrap();
        let err = decode(&tag, "1|2|3", 4).unwrap_err();
        assert!(matches!(err, Error::ElementCountMismatch { .. }));
    }

    #[test]
    fn decode_rejects_unknown_subtype() {
        let (tag, _) = split_tag("<array|float128|(1,)>", 1).unwrap();
        assert!(matches!(
            decode(&tag, "1.0", 1),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn mixed_marker_survives_agreeing_cells() {
        let array =
            TypedArray::with_dtype(None, vec![2], vec![Scalar::Int(1), Scalar::Int(2)]).unwrap();
        let body = array.body_text();
        assert_eq!(body, "<int>1|<int>2");
    }

    #[test]
    fn empty_array_encodes_and_decodes() {
        let array = TypedArray::new(vec![0], Vec::new()).unwrap();
        assert_eq!(array.tag_text(), "<array||(0,)>");
        let (tag, _) = split_tag("<array||(0,)>", 1).unwrap();
        assert_eq!(decode(&tag, "", 1).unwrap(), array);
    }
}
