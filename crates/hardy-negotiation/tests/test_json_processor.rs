use hardy_negotiation::context::NegotiationContext;
use hardy_negotiation::media_range::MediaRange;
use hardy_negotiation::processor::ResponseProcessor;
use hardy_negotiation::processor_match::MatchResult;
use hardy_negotiation::processors::JsonProcessor;
use hardy_serializers::{JsonSerializer, Serializer};
use std::sync::Arc;

fn processor() -> JsonProcessor {
	let serializers: Vec<Arc<dyn Serializer>> = vec![Arc::new(JsonSerializer::new())];
	JsonProcessor::from_serializers(&serializers)
}

fn content_result(raw: &str) -> MatchResult {
	let range = MediaRange::parse(raw).unwrap();
	processor()
		.can_process(&range, &NegotiationContext::new())
		.requested_content_type_result
}

#[test]
fn test_fully_wildcarded_range_is_exact() {
	assert_eq!(content_result("*/*"), MatchResult::ExactMatch);
	// Parameters don't change the classification of the bare open range
	assert_eq!(content_result("*/*;q=0.1"), MatchResult::ExactMatch);
}

#[test]
fn test_concrete_json_types_are_exact() {
	assert_eq!(content_result("application/json"), MatchResult::ExactMatch);
	assert_eq!(content_result("text/json"), MatchResult::ExactMatch);
}

#[test]
fn test_vendor_json_is_non_exact() {
	assert_eq!(
		content_result("application/vnd.acme+json"),
		MatchResult::NonExactMatch
	);
	assert_eq!(
		content_result("application/vnd.acme.v2+json"),
		MatchResult::NonExactMatch
	);
}

#[test]
fn test_vendor_xml_is_no_match() {
	assert_eq!(
		content_result("application/vnd.acme+xml"),
		MatchResult::NoMatch
	);
}

#[test]
fn test_foreign_type_is_no_match() {
	for raw in ["text/html", "image/png", "video/mp4", "multipart/form-data"] {
		assert_eq!(content_result(raw), MatchResult::NoMatch, "for {raw}");
	}
}

#[test]
fn test_output_content_type_constant_across_matching_ranges() {
	let processor = processor();
	let context = NegotiationContext::new();
	for raw in [
		"*/*",
		"application/json",
		"text/json",
		"application/*",
		"application/vnd.acme+json",
	] {
		let range = MediaRange::parse(raw).unwrap();
		assert!(processor.can_process(&range, &context).is_viable());
		assert_eq!(
			processor.full_output_content_type(&range, &context),
			"application/json"
		);
	}
}

#[test]
fn test_extension_mapping_registered_once() {
	let processor = processor();
	let mappings = processor.extension_mappings();
	assert_eq!(mappings.len(), 1);
	assert_eq!(mappings[0].extension(), "json");
	assert_eq!(mappings[0].range().to_string(), "application/json");
}
