//! Core serializer trait and error types
//!
//! Provides the foundational `Serializer` capability along with error types
//! for serialization operations.

use serde_json::Value;

/// Capability for turning a model value into response bytes
///
/// Implementors are stateless after construction and safely shared
/// read-only across concurrently handled requests.
///
/// # Examples
///
/// ```
/// use hardy_serializers::{JsonSerializer, Serializer};
/// use serde_json::json;
///
/// let serializer = JsonSerializer::new();
/// assert!(serializer.can_serialize("application/json"));
/// assert!(!serializer.can_serialize("application/xml"));
/// ```
pub trait Serializer: Send + Sync {
	/// Whether this serializer can produce the given content type
	fn can_serialize(&self, content_type: &str) -> bool;

	/// Serialize the model into `out` as the given content type
	fn serialize(
		&self,
		content_type: &str,
		model: &Value,
		out: &mut Vec<u8>,
	) -> Result<(), SerializerError>;
}

/// Errors that can occur during serialization
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
	#[error("Serializer does not support content type '{content_type}'")]
	Unsupported { content_type: String },

	#[error("JSON serialization failed: {0}")]
	Json(#[from] serde_json::Error),

	#[error("XML serialization failed: {0}")]
	Xml(String),
}
