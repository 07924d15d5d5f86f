//! XML serializer backed by quick-xml
//!
//! Renders a JSON-like model structure into XML: objects become nested
//! elements, arrays become repeated elements, scalars become text nodes.

use super::serializer::{Serializer, SerializerError};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;

/// XML serializer configuration
#[derive(Debug, Clone)]
pub struct XmlSerializerConfig {
	/// Name of the document root element (default: "response")
	pub root_name: String,
	/// Element name used for members of an array without a field name
	/// (default: "item")
	pub item_name: String,
}

impl Default for XmlSerializerConfig {
	fn default() -> Self {
		Self {
			root_name: "response".to_string(),
			item_name: "item".to_string(),
		}
	}
}

/// Serializes models as XML
///
/// Claims `application/xml`, `text/xml` and any vendor media type with a
/// `+xml` suffix (such as `application/vnd.acme.v2+xml`).
#[derive(Debug, Clone, Default)]
pub struct XmlSerializer {
	config: XmlSerializerConfig,
}

impl XmlSerializer {
	/// Creates a new XmlSerializer with the default configuration
	///
	/// # Examples
	///
	/// ```
	/// use hardy_serializers::{Serializer, XmlSerializer};
	///
	/// let serializer = XmlSerializer::new();
	/// assert!(serializer.can_serialize("application/xml"));
	/// assert!(serializer.can_serialize("application/vnd.acme.v2+xml"));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an XmlSerializer with a custom configuration
	///
	/// # Examples
	///
	/// ```
	/// use hardy_serializers::xml::{XmlSerializer, XmlSerializerConfig};
	/// use hardy_serializers::Serializer;
	/// use serde_json::json;
	///
	/// let config = XmlSerializerConfig {
	/// 	root_name: "user".to_string(),
	/// 	..Default::default()
	/// };
	/// let serializer = XmlSerializer::with_config(config);
	///
	/// let mut out = Vec::new();
	/// serializer
	/// 	.serialize("application/xml", &json!({"id": 1}), &mut out)
	/// 	.unwrap();
	/// assert_eq!(String::from_utf8(out).unwrap(), "<user><id>1</id></user>");
	/// ```
	pub fn with_config(config: XmlSerializerConfig) -> Self {
		Self { config }
	}

	fn write_element(
		&self,
		writer: &mut Writer<&mut Vec<u8>>,
		name: &str,
		value: &Value,
	) -> Result<(), SerializerError> {
		match value {
			// Arrays repeat the enclosing element name for each member
			Value::Array(items) => {
				for item in items {
					self.write_element(writer, name, item)?;
				}
				Ok(())
			}
			_ => {
				writer
					.write_event(Event::Start(BytesStart::new(name)))
					.map_err(|e| SerializerError::Xml(e.to_string()))?;
				self.write_value(writer, value)?;
				writer
					.write_event(Event::End(BytesEnd::new(name)))
					.map_err(|e| SerializerError::Xml(e.to_string()))
			}
		}
	}

	fn write_value(
		&self,
		writer: &mut Writer<&mut Vec<u8>>,
		value: &Value,
	) -> Result<(), SerializerError> {
		match value {
			Value::Null => Ok(()),
			Value::Bool(b) => self.write_text(writer, if *b { "true" } else { "false" }),
			Value::Number(n) => self.write_text(writer, &n.to_string()),
			Value::String(s) => self.write_text(writer, s),
			Value::Array(items) => {
				for item in items {
					self.write_element(writer, &self.config.item_name, item)?;
				}
				Ok(())
			}
			Value::Object(map) => {
				for (key, child) in map {
					self.write_element(writer, key, child)?;
				}
				Ok(())
			}
		}
	}

	fn write_text(
		&self,
		writer: &mut Writer<&mut Vec<u8>>,
		text: &str,
	) -> Result<(), SerializerError> {
		writer
			.write_event(Event::Text(BytesText::new(text)))
			.map_err(|e| SerializerError::Xml(e.to_string()))
	}
}

impl Serializer for XmlSerializer {
	fn can_serialize(&self, content_type: &str) -> bool {
		let content_type = content_type.trim().to_ascii_lowercase();
		content_type == "application/xml"
			|| content_type == "text/xml"
			|| content_type.ends_with("+xml")
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

		let mut writer = Writer::new(out);
		// The root element always wraps the model, even when it is an array
		writer
			.write_event(Event::Start(BytesStart::new(self.config.root_name.as_str())))
			.map_err(|e| SerializerError::Xml(e.to_string()))?;
		self.write_value(&mut writer, model)?;
		writer
			.write_event(Event::End(BytesEnd::new(self.config.root_name.as_str())))
			.map_err(|e| SerializerError::Xml(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn render(value: Value) -> String {
		let mut out = Vec::new();
		XmlSerializer::new()
			.serialize("application/xml", &value, &mut out)
			.unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	#[case("application/xml")]
	#[case("text/xml")]
	#[case("application/vnd.acme.v2+xml")]
	fn test_can_serialize_xml_types(#[case] content_type: &str) {
		assert!(XmlSerializer::new().can_serialize(content_type));
	}

	#[rstest]
	#[case("application/json")]
	#[case("text/plain")]
	fn test_rejects_non_xml_types(#[case] content_type: &str) {
		assert!(!XmlSerializer::new().can_serialize(content_type));
	}

	#[rstest]
	fn test_scalar_model() {
		assert_eq!(render(json!("hello")), "<response>hello</response>");
	}

	#[rstest]
	fn test_object_model() {
		assert_eq!(
			render(json!({"id": 1, "name": "Alice"})),
			"<response><id>1</id><name>Alice</name></response>"
		);
	}

	#[rstest]
	fn test_array_members_repeat_element() {
		assert_eq!(
			render(json!({"tag": ["a", "b"]})),
			"<response><tag>a</tag><tag>b</tag></response>"
		);
	}

	#[rstest]
	fn test_root_array_uses_item_name() {
		assert_eq!(
			render(json!([1, 2])),
			"<response><item>1</item><item>2</item></response>"
		);
	}

	#[rstest]
	fn test_text_is_escaped() {
		assert_eq!(
			render(json!({"note": "a < b"})),
			"<response><note>a &lt; b</note></response>"
		);
	}

	#[rstest]
	fn test_null_renders_empty_element() {
		assert_eq!(render(json!(null)), "<response></response>");
	}
}
