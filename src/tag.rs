//! The tag grammar: carving `<...>` tags out of line fragments.
//!
//! Every value in an eML file is introduced by a delimited tag such as
//! `<int>`, `<list|3>` or `<array|float64|(2, 3)>`. This module extracts
//! the first tag from a fragment and hands back everything after the
//! closing `>` untouched, so the same routine can be re-applied to the
//! remainder at every nesting level.

use crate::error::{Error, Result};

/// A parsed `<...>` tag: the kind name plus any parameter tokens.
///
/// Tokens are the `|`-separated pieces of the tag interior, trimmed of
/// alignment whitespace. Interior empty tokens are preserved: a mixed
/// array tag `<array||(4,)>` carries an empty subtype token on purpose.
///
/// # Examples
///
/// ```rust
/// use eml::tag::split_tag;
///
/// let (tag, rest) = split_tag("<list|3> <int>1", 1).unwrap();
/// assert_eq!(tag.head(), "list");
/// assert_eq!(tag.param(0), Some("3"));
/// assert_eq!(rest, " <int>1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Tag<'a> {
    /// The kind name: the first token of the tag.
    #[must_use]
    pub fn head(&self) -> &'a str {
        self.tokens.first().copied().unwrap_or("")
    }

    /// The `i`-th parameter token after the kind name.
    #[must_use]
    pub fn param(&self, i: usize) -> Option<&'a str> {
        self.tokens.get(i + 1).copied()
    }

    /// Parses the declared element count carried by a container tag.
    ///
    /// Fails with [`Error::InvalidLiteral`] when the count token is
    /// missing or not an unsigned integer.
    pub fn count(&self, line: usize) -> Result<usize> {
        let token = self
            .param(0)
            .ok_or_else(|| Error::invalid_literal(line, "element count", ""))?;
        token
            .parse::<usize>()
            .map_err(|_| Error::invalid_literal(line, "element count", token))
    }
}

/// Extracts the first `<...>` tag from a fragment.
///
/// Returns the tag and the raw remainder following the closing `>`.
/// The remainder is not trimmed: a primitive string body keeps its text
/// exactly as written, and callers that expect further structure strip it
/// themselves.
///
/// Fails with [`Error::TagParse`] if the fragment holds no `<`/`>` pair.
pub fn split_tag(fragment: &str, line: usize) -> Result<(Tag<'_>, &str)> {
    let open = fragment
        .find('<')
        .ok_or_else(|| Error::tag_parse(line, fragment))?;
    let close = fragment[open..]
        .find('>')
        .map(|i| open + i)
        .ok_or_else(|| Error::tag_parse(line, fragment))?;

    let tokens = fragment[open + 1..close]
        .split('|')
        .map(str::trim)
        .collect();

    Ok((Tag { tokens }, &fragment[close + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_primitive_tag_and_body() {
        let (tag, rest) = split_tag("<int>42", 1).unwrap();
        assert_eq!(tag.head(), "int");
        assert_eq!(tag.param(0), None);
        assert_eq!(rest, "42");
    }

    #[test]
    fn splits_container_tag_with_count() {
        let (tag, rest) = split_tag("<dict|2><str>a|<int>1", 1).unwrap();
        assert_eq!(tag.head(), "dict");
        assert_eq!(tag.count(1).unwrap(), 2);
        assert_eq!(rest, "<str>a|<int>1");
    }

    #[test]
    fn trims_alignment_whitespace_inside_tokens() {
        let (tag, _) = split_tag("<list |4> x", 1).unwrap();
        assert_eq!(tag.head(), "list");
        assert_eq!(tag.param(0), Some("4"));
    }

    #[test]
    fn keeps_empty_subtype_token() {
        let (tag, _) = split_tag("<array||(4,)> 1|2", 1).unwrap();
        assert_eq!(tag.head(), "array");
        assert_eq!(tag.param(0), Some(""));
        assert_eq!(tag.param(1), Some("(4,)"));
    }

    #[test]
    fn remainder_may_contain_further_angles() {
        let (tag, rest) = split_tag("<str>a < b > c", 1).unwrap();
        assert_eq!(tag.head(), "str");
        assert_eq!(rest, "a < b > c");
    }

    #[test]
    fn missing_tag_is_an_error() {
        assert!(matches!(
            split_tag("no tag here", 7),
            Err(Error::TagParse { line: 7, .. })
        ));
        assert!(matches!(
            split_tag("<unclosed", 7),
            Err(Error::TagParse { .. })
        ));
    }

    #[test]
    fn bad_count_is_an_invalid_literal() {
        let (tag, _) = split_tag("<list|many>", 3).unwrap();
        assert!(matches!(
            tag.count(3),
            Err(Error::InvalidLiteral { line: 3, .. })
        ));
    }
}
