//! Placement settings from markup-style `data-*` attributes.
//!
//! Reads `data-rule`, `data-scale`, `data-width`, `data-height` and
//! `data-src` from an element's attribute list and produces
//! [`Attributes`] that build a [`PlacementRequest`](crate::PlacementRequest).
//!
//! # Example
//!
//! ```
//! use zenplace::{attrs, PlacementRule, Size, Source};
//!
//! let result = attrs::parse([
//!     ("class", "image-pos"),
//!     ("data-rule", "contain"),
//!     ("data-src", "/img/portrait.jpg"),
//! ]);
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.attributes.rule, Some(PlacementRule::Contain));
//!
//! // Image finished loading; its container is 200×100.
//! let img = Source::image(50.0, 100.0);
//! let container = Size::new(200.0, 100.0);
//! let pos = result.attributes
//!     .to_request(&img, &container)
//!     .expect("rule present")
//!     .compute()
//!     .unwrap();
//! assert_eq!((pos.x, pos.width), (75.0, 50.0));
//! ```
//!
//! Attributes without the `data-` prefix (`class`, `id`, ...) are skipped
//! silently. Unknown `data-` keys produce [`ParseWarning::KeyNotRecognized`].

pub mod attributes;
mod parse;

pub use attributes::Attributes;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing an attribute list.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed placement settings.
    pub attributes: Attributes,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from attribute parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A `data-` key that carries no placement setting.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse `(name, value)` attribute pairs.
///
/// Names are matched case-insensitively.
pub fn parse<'a, I>(attrs: I) -> ParseResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let (attributes, warnings) = parse::parse_attributes(attrs);
    ParseResult {
        attributes,
        warnings,
    }
}
