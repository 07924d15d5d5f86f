//! XML-family response processor

use crate::context::NegotiationContext;
use crate::media_range::MediaRange;
use crate::media_type::MediaType;
use crate::processor::{ExtensionMapping, ProcessError, ResponseProcessor};
use crate::processor_match::{MatchResult, ProcessorMatch};
use crate::processors::json::is_vendor_suffix;
use hardy_http::Response;
use hardy_serializers::Serializer;
use serde_json::Value;
use std::sync::Arc;

const OUTPUT_CONTENT_TYPE: &str = "application/xml";

/// Serves `application/xml`, `text/xml` and the `+xml` vendor family
///
/// Classification mirrors [`JsonProcessor`](crate::processors::JsonProcessor)
/// with the XML spellings; model compatibility is always `DontCare`.
pub struct XmlProcessor {
	serializer: Option<Arc<dyn Serializer>>,
	extension_mappings: Vec<ExtensionMapping>,
}

impl XmlProcessor {
	/// Creates an XmlProcessor with an explicit, possibly absent serializer
	pub fn new(serializer: Option<Arc<dyn Serializer>>) -> Self {
		Self {
			serializer,
			extension_mappings: vec![ExtensionMapping::new(
				"xml",
				MediaRange::new(MediaType::concrete("application", "xml")),
			)],
		}
	}

	/// Creates an XmlProcessor resolving the first registered serializer
	/// that can serialize `application/xml`
	pub fn from_serializers(serializers: &[Arc<dyn Serializer>]) -> Self {
		let serializer = serializers
			.iter()
			.find(|s| s.can_serialize(OUTPUT_CONTENT_TYPE))
			.cloned();
		Self::new(serializer)
	}

	fn is_exact_xml_content_type(requested: &MediaRange) -> bool {
		if requested.is_wildcard() {
			return true;
		}

		requested.is_exactly("application/xml") || requested.is_exactly("text/xml")
	}

	fn is_wildcard_xml_content_type(requested: &MediaRange) -> bool {
		if !requested.type_().is_wildcard() && !requested.type_().is_literal("application") {
			return false;
		}

		if requested.subtype().is_wildcard() {
			return true;
		}

		requested
			.subtype()
			.as_literal()
			.is_some_and(|subtype| is_vendor_suffix(subtype, "+xml"))
	}
}

impl ResponseProcessor for XmlProcessor {
	fn extension_mappings(&self) -> &[ExtensionMapping] {
		&self.extension_mappings
	}

	fn can_process(
		&self,
		requested: &MediaRange,
		_context: &NegotiationContext,
	) -> ProcessorMatch {
		if Self::is_exact_xml_content_type(requested) {
			return ProcessorMatch::new(MatchResult::DontCare, MatchResult::ExactMatch);
		}

		if Self::is_wildcard_xml_content_type(requested) {
			return ProcessorMatch::new(MatchResult::DontCare, MatchResult::NonExactMatch);
		}

		ProcessorMatch::new(MatchResult::DontCare, MatchResult::NoMatch)
	}

	fn full_output_content_type(
		&self,
		_requested: &MediaRange,
		_context: &NegotiationContext,
	) -> String {
		OUTPUT_CONTENT_TYPE.to_string()
	}

	fn process(
		&self,
		requested: &MediaRange,
		context: &NegotiationContext,
	) -> Result<Response, ProcessError> {
		let serializer =
			self.serializer
				.as_ref()
				.ok_or_else(|| ProcessError::SerializationUnavailable {
					content_type: OUTPUT_CONTENT_TYPE.to_string(),
				})?;

		let model = context.model_for_range(requested).unwrap_or(&Value::Null);
		let mut body = Vec::new();
		serializer.serialize(OUTPUT_CONTENT_TYPE, model, &mut body)?;

		Ok(Response::ok()
			.with_content_type(OUTPUT_CONTENT_TYPE)
			.with_body(body))
	}
}
