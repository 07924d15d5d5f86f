//! JSON serializer backed by serde_json

use super::serializer::{Serializer, SerializerError};
use serde_json::Value;

/// Serializes models as JSON
///
/// Claims `application/json`, `text/json` and any vendor media type with a
/// `+json` suffix (such as `application/vnd.acme.v2+json`).
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
	/// Creates a new JsonSerializer
	///
	/// # Examples
	///
	/// ```
	/// use hardy_serializers::{JsonSerializer, Serializer};
	///
	/// let serializer = JsonSerializer::new();
	/// assert!(serializer.can_serialize("text/json"));
	/// assert!(serializer.can_serialize("application/vnd.acme.v2+json"));
	/// ```
	pub fn new() -> Self {
		Self
	}
}

impl Serializer for JsonSerializer {
	fn can_serialize(&self, content_type: &str) -> bool {
		let content_type = content_type.trim().to_ascii_lowercase();
		content_type == "application/json"
			|| content_type == "text/json"
			|| content_type.ends_with("+json")
	}

	fn serialize(
		&self,
		content_type: &str,
		model: &Value,
		out: &mut Vec<u8>,
	) -> Result<(), SerializerError> {
		if !self.can_serialize(content_type) {
			return Err(SerializerError::Unsupported {
				content_type: content_type.to_string(),
			});
		}

		serde_json::to_writer(out, model)?;
		Ok(())
	}
}
