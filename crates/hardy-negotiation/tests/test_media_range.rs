use hardy_negotiation::media_range::MediaRange;
use hardy_negotiation::media_type::{MediaType, MediaTypeError};

#[test]
fn test_roundtrip_concrete_types() {
	for raw in [
		"application/json",
		"text/json",
		"application/xml",
		"text/plain",
		"application/vnd.acme.v2+json",
		"image/svg+xml",
	] {
		let range = MediaRange::parse(raw).unwrap();
		assert!(range.is_exactly(raw), "round-trip failed for {raw}");
	}
}

#[test]
fn test_parse_requires_exactly_one_separator() {
	assert!(matches!(
		MediaRange::parse("application"),
		Err(MediaTypeError::Format(_))
	));
	assert!(matches!(
		MediaRange::parse("a/b/c"),
		Err(MediaTypeError::Format(_))
	));
	assert!(matches!(
		MediaRange::parse("/json"),
		Err(MediaTypeError::Format(_))
	));
}

#[test]
fn test_parameters_preserved_in_order() {
	let range = MediaRange::parse("application/json;q=0.8;profile=compact;q=0.1").unwrap();
	assert_eq!(range.parameters().len(), 3);
	// Duplicate keys retained; first occurrence wins on read
	assert_eq!(range.parameter("q"), Some("0.8"));
	assert_eq!(range.quality(), 0.8);
}

#[test]
fn test_exact_comparison_ignores_parameters() {
	let range = MediaRange::parse("application/json;charset=utf-8").unwrap();
	assert!(range.is_exactly("application/json"));
}

#[test]
fn test_wildcards_never_exact() {
	assert!(!MediaRange::parse("*/*").unwrap().is_exactly("application/json"));
	assert!(!MediaRange::parse("application/*").unwrap().is_exactly("application/json"));
	assert!(!MediaRange::parse("*/json").unwrap().is_exactly("application/json"));
}

#[test]
fn test_wildcard_matching_is_one_sided_api() {
	// Wildcard semantics live in `matches`, not in `is_exactly` or `==`
	let range = MediaRange::parse("application/*").unwrap();
	assert!(range.matches(&MediaType::concrete("application", "json")));
	assert!(range.matches(&MediaType::concrete("application", "xml")));
	assert!(!range.matches(&MediaType::concrete("text", "plain")));
}

#[test]
fn test_case_insensitive_equality() {
	let range = MediaRange::parse("Application/VND.Acme+JSON").unwrap();
	assert!(range.is_exactly("application/vnd.acme+json"));
}
