//! SVG markup loading, mutation and serialization.
//!
//! Figma SVG exports are small, well-formed XML documents. They are loaded
//! into an owned [`Element`] tree with quick-xml, rewritten through the
//! [`MarkupElement`] trait and written back with explicit end tags.

mod element;
mod escape;
mod load;

pub use element::{Element, MarkupElement};
pub use load::{MarkupError, load};
