//! Built-in response processors
//!
//! Each processor covers one media-type family. All of them treat the
//! fully-open `*/*` range as an exact match: a client with no preference
//! accepts whatever the first registered processor produces.

pub mod json;
pub mod text;
pub mod xml;

pub use json::JsonProcessor;
pub use text::TextProcessor;
pub use xml::XmlProcessor;
