//! Plain-text response processor

use crate::context::NegotiationContext;
use crate::media_range::MediaRange;
use crate::media_type::MediaType;
use crate::processor::{ExtensionMapping, ProcessError, ResponseProcessor};
use crate::processor_match::{MatchResult, ProcessorMatch};
use hardy_http::Response;
use serde_json::Value;

const OUTPUT_CONTENT_TYPE: &str = "text/plain";

/// Serves `text/plain` and the `text/*` family
///
/// Needs no serializer capability: string models are written verbatim and
/// anything else is rendered as compact JSON text.
pub struct TextProcessor {
	extension_mappings: Vec<ExtensionMapping>,
}

impl TextProcessor {
	pub fn new() -> Self {
		Self {
			extension_mappings: vec![ExtensionMapping::new(
				"txt",
				MediaRange::new(MediaType::concrete("text", "plain")),
			)],
		}
	}

	fn is_exact_text_content_type(requested: &MediaRange) -> bool {
		if requested.is_wildcard() {
			return true;
		}

		requested.is_exactly("text/plain")
	}

	fn is_wildcard_text_content_type(requested: &MediaRange) -> bool {
		if !requested.type_().is_wildcard() && !requested.type_().is_literal("text") {
			return false;
		}

		requested.subtype().is_wildcard()
	}
}

impl Default for TextProcessor {
	fn default() -> Self {
		Self::new()
	}
}

impl ResponseProcessor for TextProcessor {
	fn extension_mappings(&self) -> &[ExtensionMapping] {
		&self.extension_mappings
	}

	fn can_process(
		&self,
		requested: &MediaRange,
		_context: &NegotiationContext,
	) -> ProcessorMatch {
		if Self::is_exact_text_content_type(requested) {
			return ProcessorMatch::new(MatchResult::DontCare, MatchResult::ExactMatch);
		}

		if Self::is_wildcard_text_content_type(requested) {
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
		let body = match context.model_for_range(requested) {
			Some(Value::String(text)) => text.clone().into_bytes(),
			Some(value) => value.to_string().into_bytes(),
			None => Vec::new(),
		};

		Ok(Response::ok()
			.with_content_type(OUTPUT_CONTENT_TYPE)
			.with_body(body))
	}
}
