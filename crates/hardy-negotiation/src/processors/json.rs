//! JSON-family response processor

use crate::context::NegotiationContext;
use crate::media_range::MediaRange;
use crate::media_type::MediaType;
use crate::processor::{ExtensionMapping, ProcessError, ResponseProcessor};
use crate::processor_match::{MatchResult, ProcessorMatch};
use hardy_http::Response;
use hardy_serializers::Serializer;
use serde_json::Value;
use std::sync::Arc;

const OUTPUT_CONTENT_TYPE: &str = "application/json";

/// Serves `application/json`, `text/json` and the `+json` vendor family
///
/// Model compatibility is always `DontCare`: the processor accepts any
/// model shape and defers actual serializability to its serializer.
///
/// # Examples
///
/// ```
/// use hardy_negotiation::context::NegotiationContext;
/// use hardy_negotiation::media_range::MediaRange;
/// use hardy_negotiation::processor::ResponseProcessor;
/// use hardy_negotiation::processor_match::MatchResult;
/// use hardy_negotiation::processors::JsonProcessor;
/// use hardy_serializers::JsonSerializer;
/// use std::sync::Arc;
///
/// let processor = JsonProcessor::new(Some(Arc::new(JsonSerializer::new())));
/// let context = NegotiationContext::new();
///
/// let range = MediaRange::parse("application/json").unwrap();
/// let result = processor.can_process(&range, &context);
/// assert_eq!(result.requested_content_type_result, MatchResult::ExactMatch);
/// ```
pub struct JsonProcessor {
	serializer: Option<Arc<dyn Serializer>>,
	extension_mappings: Vec<ExtensionMapping>,
}

impl JsonProcessor {
	/// Creates a JsonProcessor with an explicit, possibly absent serializer
	///
	/// A processor without a serializer still reports matches and
	/// participates in ranking; it fails at `process` time when actually
	/// selected.
	pub fn new(serializer: Option<Arc<dyn Serializer>>) -> Self {
		Self {
			serializer,
			extension_mappings: vec![ExtensionMapping::new(
				"json",
				MediaRange::new(MediaType::concrete("application", "json")),
			)],
		}
	}

	/// Creates a JsonProcessor resolving its serializer from a registered
	/// collection: the first one that declares it can serialize
	/// `application/json`
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::processors::JsonProcessor;
	/// use hardy_serializers::{JsonSerializer, Serializer, XmlSerializer};
	/// use std::sync::Arc;
	///
	/// let serializers: Vec<Arc<dyn Serializer>> = vec![
	/// 	Arc::new(XmlSerializer::new()),
	/// 	Arc::new(JsonSerializer::new()),
	/// ];
	/// let processor = JsonProcessor::from_serializers(&serializers);
	/// ```
	pub fn from_serializers(serializers: &[Arc<dyn Serializer>]) -> Self {
		let serializer = serializers
			.iter()
			.find(|s| s.can_serialize(OUTPUT_CONTENT_TYPE))
			.cloned();
		Self::new(serializer)
	}

	fn is_exact_json_content_type(requested: &MediaRange) -> bool {
		// A fully-open range is treated as an exact match for convenience:
		// any processor accepts */*
		if requested.is_wildcard() {
			return true;
		}

		requested.is_exactly("application/json") || requested.is_exactly("text/json")
	}

	fn is_wildcard_json_content_type(requested: &MediaRange) -> bool {
		if !requested.type_().is_wildcard() && !requested.type_().is_literal("application") {
			return false;
		}

		if requested.subtype().is_wildcard() {
			return true;
		}

		// Vendor-specific JSON media types such as application/vnd.acme.v2+json
		requested
			.subtype()
			.as_literal()
			.is_some_and(|subtype| is_vendor_suffix(subtype, "+json"))
	}
}

/// True iff `subtype` names a vendor tree entry with the given suffix,
/// compared ignoring ASCII case (e.g. `vnd.acme.v2+json`)
pub(crate) fn is_vendor_suffix(subtype: &str, suffix: &str) -> bool {
	let subtype = subtype.to_ascii_lowercase();
	subtype.starts_with("vnd") && subtype.ends_with(suffix)
}

impl ResponseProcessor for JsonProcessor {
	fn extension_mappings(&self) -> &[ExtensionMapping] {
		&self.extension_mappings
	}

	fn can_process(
		&self,
		requested: &MediaRange,
		_context: &NegotiationContext,
	) -> ProcessorMatch {
		if Self::is_exact_json_content_type(requested) {
			return ProcessorMatch::new(MatchResult::DontCare, MatchResult::ExactMatch);
		}

		if Self::is_wildcard_json_content_type(requested) {
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
