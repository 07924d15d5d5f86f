//! # Hardy Serializers
//!
//! The serializer capability consumed by response processors, plus the
//! built-in JSON and XML serializers.
//!
//! A [`Serializer`] declares which content types it can produce via
//! [`Serializer::can_serialize`] and writes a model out as bytes via
//! [`Serializer::serialize`]. Processors resolve their serializer once at
//! construction from the registered collection and hold it for the lifetime
//! of the application.
//!
//! ## Feature Flags
//!
//! - `json` (default): JSON serialization support
//! - `xml` (default): XML serialization support
//!
//! ## Examples
//!
//! ```
//! use hardy_serializers::{JsonSerializer, Serializer};
//! use serde_json::json;
//!
//! let serializer = JsonSerializer::new();
//! assert!(serializer.can_serialize("application/json"));
//!
//! let mut out = Vec::new();
//! serializer
//! 	.serialize("application/json", &json!({"id": 1}), &mut out)
//! 	.unwrap();
//! assert_eq!(out, br#"{"id":1}"#);
//! ```

pub mod serializer;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "xml")]
pub mod xml;

pub use serializer::{Serializer, SerializerError};

#[cfg(feature = "json")]
pub use json::JsonSerializer;
#[cfg(feature = "xml")]
pub use xml::XmlSerializer;
