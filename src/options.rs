//! Configuration options for eML encoding.
//!
//! The format's layout is fixed, so there is little to configure. The
//! continuation-line padding that visually aligns container elements is
//! purely cosmetic and can be turned off. The decoder strips all
//! leading whitespace and never depends on it.
//!
//! ## Examples
//!
//! ```rust
//! use eml::{Eml, EmlOptions};
//!
//! let mut doc = Eml::new();
//! doc.set_list("l", vec![1.into(), 2.into()]).unwrap();
//!
//! let aligned = eml::to_string(&doc);
//! let compact = eml::to_string_with_options(&doc, EmlOptions::new().with_align(false));
//! assert_ne!(aligned, compact);
//!
//! // Both decode to the same document.
//! assert_eq!(
//!     eml::from_str(&aligned).unwrap().get_list("l"),
//!     eml::from_str(&compact).unwrap().get_list("l"),
//! );
//! ```

/// Configuration options for eML encoding.
#[derive(Clone, Debug)]
pub struct EmlOptions {
    /// Pad container continuation lines so elements line up under the
    /// first one. Cosmetic only; default `true`.
    pub align: bool,
}

impl Default for EmlOptions {
    fn default() -> Self {
        EmlOptions { align: true }
    }
}

impl EmlOptions {
    /// Creates the default options (aligned continuation lines).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether container continuation lines are left-padded for
    /// visual alignment.
    #[must_use]
    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }
}
