//! Media ranges: a media type plus ordered parameters
//!
//! A range is what one entry of an Accept header parses into, e.g.
//! `application/vnd.acme.v2+json;q=0.8;profile=compact`.

use crate::media_type::{MediaType, MediaTypeError, MediaTypePart};
use std::fmt;
use std::str::FromStr;

/// A content-type pattern sent by a client, possibly containing wildcards
///
/// Immutable value type. Parameters keep the order they were given in and
/// duplicates are retained; consumers read the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRange {
	media_type: MediaType,
	parameters: Vec<(String, String)>,
}

impl MediaRange {
	/// Creates a parameter-less range from a media type
	pub fn new(media_type: MediaType) -> Self {
		Self {
			media_type,
			parameters: Vec::new(),
		}
	}

	/// The fully-open `*/*` range
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_range::MediaRange;
	///
	/// assert!(MediaRange::any().is_wildcard());
	/// ```
	pub fn any() -> Self {
		Self::new(MediaType::any())
	}

	/// Parses a range of the form `type/subtype;param=value;...`
	///
	/// The first `;`-separated segment is parsed as the media type; the
	/// remaining segments are `key=value` parameters in the order given.
	/// Segments without `=` are ignored; duplicate keys are both retained.
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_range::MediaRange;
	///
	/// let range = MediaRange::parse("text/html;q=0.9;charset=utf-8").unwrap();
	/// assert_eq!(range.parameter("q"), Some("0.9"));
	/// assert_eq!(range.parameter("charset"), Some("utf-8"));
	///
	/// assert!(MediaRange::parse("application").is_err());
	/// ```
	pub fn parse(raw: &str) -> Result<Self, MediaTypeError> {
		let mut segments = raw.split(';');
		let media_type = MediaType::parse(segments.next().unwrap_or(""))?;

		let parameters = segments
			.filter_map(|segment| {
				let (key, value) = segment.split_once('=')?;
				Some((key.trim().to_string(), value.trim().to_string()))
			})
			.collect();

		Ok(Self {
			media_type,
			parameters,
		})
	}

	/// The underlying media type
	pub fn media_type(&self) -> &MediaType {
		&self.media_type
	}

	/// The type side of the underlying media type
	pub fn type_(&self) -> &MediaTypePart {
		self.media_type.type_()
	}

	/// The subtype side of the underlying media type
	pub fn subtype(&self) -> &MediaTypePart {
		self.media_type.subtype()
	}

	/// The ordered parameter list, duplicates included
	pub fn parameters(&self) -> &[(String, String)] {
		&self.parameters
	}

	/// Reads the first occurrence of a parameter, name compared
	/// case-insensitively
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// The quality value from the first `q` parameter, clamped to
	/// [0.0, 1.0], defaulting to 1.0
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_range::MediaRange;
	///
	/// assert_eq!(MediaRange::parse("text/html;q=0.5").unwrap().quality(), 0.5);
	/// assert_eq!(MediaRange::parse("text/html").unwrap().quality(), 1.0);
	/// assert_eq!(MediaRange::parse("text/html;q=7").unwrap().quality(), 1.0);
	/// ```
	pub fn quality(&self) -> f32 {
		self.parameter("q")
			.and_then(|value| value.parse::<f32>().ok())
			.map(|q| q.clamp(0.0, 1.0))
			.unwrap_or(1.0)
	}

	/// True iff both sides of the media type are wildcards (bare `*/*`)
	pub fn is_wildcard(&self) -> bool {
		self.media_type.is_wildcard()
	}

	/// Answers "is this literally content type X"
	///
	/// Compares type and subtype case-insensitively against the parsed
	/// argument; wildcards never match in this exact comparison, and a
	/// malformed argument never matches. Parameters are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_range::MediaRange;
	///
	/// let range = MediaRange::parse("Application/JSON;q=0.9").unwrap();
	/// assert!(range.is_exactly("application/json"));
	/// assert!(!range.is_exactly("text/json"));
	/// assert!(!MediaRange::any().is_exactly("application/json"));
	/// ```
	pub fn is_exactly(&self, content_type: &str) -> bool {
		let Ok(other) = MediaType::parse(content_type) else {
			return false;
		};
		match (other.type_().as_literal(), other.subtype().as_literal()) {
			(Some(type_), Some(subtype)) => {
				self.type_().is_literal(type_) && self.subtype().is_literal(subtype)
			}
			// A wildcard argument can never name a literal content type
			_ => false,
		}
	}

	/// Wildcard-aware matching against a concrete media type
	///
	/// True iff type sides are equal-or-either-wildcard AND subtype sides
	/// are equal-or-either-wildcard.
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_range::MediaRange;
	/// use hardy_negotiation::media_type::MediaType;
	///
	/// let range = MediaRange::parse("application/*").unwrap();
	/// assert!(range.matches(&MediaType::concrete("application", "json")));
	/// assert!(!range.matches(&MediaType::concrete("text", "html")));
	/// ```
	pub fn matches(&self, candidate: &MediaType) -> bool {
		self.media_type.matches(candidate)
	}
}

impl FromStr for MediaRange {
	type Err = MediaTypeError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Self::parse(raw)
	}
}

impl fmt::Display for MediaRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.media_type)?;
		for (key, value) in &self.parameters {
			write!(f, ";{}={}", key, value)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parameters_keep_order_and_duplicates() {
		let range = MediaRange::parse("text/html;b=2;a=1;b=3").unwrap();
		assert_eq!(
			range.parameters(),
			&[
				("b".to_string(), "2".to_string()),
				("a".to_string(), "1".to_string()),
				("b".to_string(), "3".to_string()),
			]
		);
		// First occurrence wins on lookup
		assert_eq!(range.parameter("b"), Some("2"));
	}

	#[rstest]
	fn test_parameter_name_is_case_insensitive() {
		let range = MediaRange::parse("text/html;Q=0.4").unwrap();
		assert_eq!(range.parameter("q"), Some("0.4"));
		assert_eq!(range.quality(), 0.4);
	}

	#[rstest]
	fn test_segment_without_equals_is_ignored() {
		let range = MediaRange::parse("text/html;flag;q=0.4").unwrap();
		assert_eq!(range.parameters().len(), 1);
	}

	#[rstest]
	#[case("application/json")]
	#[case("text/json")]
	#[case("application/vnd.acme.v2+json")]
	fn test_roundtrip_concrete_types(#[case] raw: &str) {
		assert!(MediaRange::parse(raw).unwrap().is_exactly(raw));
	}

	#[rstest]
	fn test_is_exactly_rejects_wildcards_both_ways() {
		assert!(!MediaRange::any().is_exactly("application/json"));
		let concrete = MediaRange::parse("application/json").unwrap();
		assert!(!concrete.is_exactly("*/*"));
		assert!(!concrete.is_exactly("application/*"));
	}

	#[rstest]
	fn test_is_exactly_rejects_malformed_argument() {
		let concrete = MediaRange::parse("application/json").unwrap();
		assert!(!concrete.is_exactly("application"));
	}

	#[rstest]
	fn test_quality_default_and_clamp() {
		assert_eq!(MediaRange::parse("a/b").unwrap().quality(), 1.0);
		assert_eq!(MediaRange::parse("a/b;q=-2").unwrap().quality(), 0.0);
		assert_eq!(MediaRange::parse("a/b;q=notanumber").unwrap().quality(), 1.0);
	}

	#[rstest]
	fn test_display_includes_parameters() {
		let range = MediaRange::parse("text/html;q=0.9;level=1").unwrap();
		assert_eq!(range.to_string(), "text/html;q=0.9;level=1");
	}
}
