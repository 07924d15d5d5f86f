//! Media type grammar: `type/subtype` pairs with wildcard sides
//!
//! The wildcard is a distinct enum variant rather than the literal token
//! `"*"`, so matching logic can short-circuit on it and no code path ever
//! compares against the raw string.

use std::fmt;

/// Errors raised while parsing media type and media range strings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaTypeError {
	#[error("Malformed media type '{0}': expected exactly one '/' with non-empty sides")]
	Format(String),
}

/// One side of a `type/subtype` pair: a wildcard or a literal token
///
/// Literals retain the spelling they were parsed with; equality and
/// matching fold ASCII case. A `Wildcard` is never equal to a `Literal`
/// under `==`; use [`MediaTypePart::matches`] when wildcard semantics are
/// wanted.
#[derive(Debug, Clone, Eq)]
pub enum MediaTypePart {
	Wildcard,
	Literal(String),
}

impl MediaTypePart {
	/// Parses a single side of a media type
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_type::MediaTypePart;
	///
	/// assert!(MediaTypePart::parse("*").unwrap().is_wildcard());
	/// assert!(!MediaTypePart::parse("json").unwrap().is_wildcard());
	/// assert!(MediaTypePart::parse("").is_err());
	/// ```
	pub fn parse(raw: &str) -> Result<Self, MediaTypeError> {
		let raw = raw.trim();
		if raw.is_empty() {
			return Err(MediaTypeError::Format(raw.to_string()));
		}
		if raw == "*" {
			return Ok(Self::Wildcard);
		}
		Ok(Self::Literal(raw.to_string()))
	}

	/// True iff this side is the wildcard
	pub fn is_wildcard(&self) -> bool {
		matches!(self, Self::Wildcard)
	}

	/// Wildcard-aware comparison: true iff either side is the wildcard or
	/// the literals are equal ignoring ASCII case
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_type::MediaTypePart;
	///
	/// let json = MediaTypePart::parse("json").unwrap();
	/// let any = MediaTypePart::Wildcard;
	///
	/// assert!(json.matches(&any));
	/// assert!(any.matches(&json));
	/// assert!(json.matches(&MediaTypePart::parse("JSON").unwrap()));
	/// assert!(!json.matches(&MediaTypePart::parse("xml").unwrap()));
	/// ```
	pub fn matches(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Wildcard, _) | (_, Self::Wildcard) => true,
			(Self::Literal(a), Self::Literal(b)) => a.eq_ignore_ascii_case(b),
		}
	}

	/// True iff this side is a literal equal to `token` ignoring ASCII case
	///
	/// Wildcards never match a literal token here.
	pub fn is_literal(&self, token: &str) -> bool {
		match self {
			Self::Wildcard => false,
			Self::Literal(s) => s.eq_ignore_ascii_case(token),
		}
	}

	/// The literal token, if this side is not the wildcard
	pub fn as_literal(&self) -> Option<&str> {
		match self {
			Self::Wildcard => None,
			Self::Literal(s) => Some(s),
		}
	}
}

impl PartialEq for MediaTypePart {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Wildcard, Self::Wildcard) => true,
			(Self::Literal(a), Self::Literal(b)) => a.eq_ignore_ascii_case(b),
			_ => false,
		}
	}
}

impl fmt::Display for MediaTypePart {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Wildcard => write!(f, "*"),
			Self::Literal(s) => write!(f, "{}", s),
		}
	}
}

/// A `type/subtype` pair, each side possibly a wildcard
///
/// Immutable once constructed. Strict equality (`==`) never treats a
/// wildcard side as equal to a literal side; callers wanting wildcard
/// semantics use [`MediaType::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
	type_: MediaTypePart,
	subtype: MediaTypePart,
}

impl MediaType {
	/// Creates a MediaType from already-built parts
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_type::{MediaType, MediaTypePart};
	///
	/// let any = MediaType::new(MediaTypePart::Wildcard, MediaTypePart::Wildcard);
	/// assert_eq!(any.to_string(), "*/*");
	/// ```
	pub fn new(type_: MediaTypePart, subtype: MediaTypePart) -> Self {
		Self { type_, subtype }
	}

	/// Creates a concrete (non-wildcard) MediaType from literal tokens
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_type::MediaType;
	///
	/// let json = MediaType::concrete("application", "json");
	/// assert_eq!(json.to_string(), "application/json");
	/// ```
	pub fn concrete(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			type_: MediaTypePart::Literal(type_.into()),
			subtype: MediaTypePart::Literal(subtype.into()),
		}
	}

	/// The fully-open `*/*` media type
	pub fn any() -> Self {
		Self {
			type_: MediaTypePart::Wildcard,
			subtype: MediaTypePart::Wildcard,
		}
	}

	/// Parses a `type/subtype` string
	///
	/// Fails unless the string contains exactly one `/` separator with
	/// non-empty sides.
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_type::{MediaType, MediaTypeError};
	///
	/// let parsed = MediaType::parse("application/json").unwrap();
	/// assert_eq!(parsed, MediaType::concrete("application", "json"));
	///
	/// assert!(matches!(MediaType::parse("application"), Err(MediaTypeError::Format(_))));
	/// assert!(matches!(MediaType::parse("a/b/c"), Err(MediaTypeError::Format(_))));
	/// assert!(matches!(MediaType::parse("/json"), Err(MediaTypeError::Format(_))));
	/// ```
	pub fn parse(raw: &str) -> Result<Self, MediaTypeError> {
		let raw = raw.trim();
		let mut sides = raw.split('/');
		match (sides.next(), sides.next(), sides.next()) {
			(Some(type_), Some(subtype), None) => Ok(Self {
				type_: MediaTypePart::parse(type_)
					.map_err(|_| MediaTypeError::Format(raw.to_string()))?,
				subtype: MediaTypePart::parse(subtype)
					.map_err(|_| MediaTypeError::Format(raw.to_string()))?,
			}),
			_ => Err(MediaTypeError::Format(raw.to_string())),
		}
	}

	/// The type side
	pub fn type_(&self) -> &MediaTypePart {
		&self.type_
	}

	/// The subtype side
	pub fn subtype(&self) -> &MediaTypePart {
		&self.subtype
	}

	/// True iff both sides are wildcards
	pub fn is_wildcard(&self) -> bool {
		self.type_.is_wildcard() && self.subtype.is_wildcard()
	}

	/// Wildcard-aware comparison: both sides equal-or-either-wildcard
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_type::MediaType;
	///
	/// let any = MediaType::any();
	/// let json = MediaType::concrete("application", "json");
	/// let xml = MediaType::concrete("application", "xml");
	///
	/// assert!(any.matches(&json));
	/// assert!(json.matches(&any));
	/// assert!(!json.matches(&xml));
	/// ```
	pub fn matches(&self, other: &Self) -> bool {
		self.type_.matches(&other.type_) && self.subtype.matches(&other.subtype)
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.type_, self.subtype)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("application/json", false)]
	#[case("*/*", true)]
	#[case("  text/html  ", false)]
	fn test_parse_well_formed(#[case] raw: &str, #[case] wildcard: bool) {
		let parsed = MediaType::parse(raw).unwrap();
		assert_eq!(parsed.is_wildcard(), wildcard);
	}

	#[rstest]
	#[case("application")]
	#[case("a/b/c")]
	#[case("/json")]
	#[case("application/")]
	#[case("")]
	#[case("/")]
	fn test_parse_malformed(#[case] raw: &str) {
		assert!(matches!(
			MediaType::parse(raw),
			Err(MediaTypeError::Format(_))
		));
	}

	#[rstest]
	fn test_strict_equality_is_case_insensitive() {
		assert_eq!(
			MediaType::parse("Application/JSON").unwrap(),
			MediaType::concrete("application", "json")
		);
	}

	#[rstest]
	fn test_wildcard_not_equal_to_literal() {
		// Strict equality never applies wildcard semantics
		assert_ne!(
			MediaType::parse("*/*").unwrap(),
			MediaType::concrete("application", "json")
		);
		assert_ne!(
			MediaTypePart::Wildcard,
			MediaTypePart::Literal("*".to_string())
		);
	}

	#[rstest]
	fn test_literal_star_parses_as_wildcard() {
		// The raw token "*" always becomes the sentinel, so the two
		// representations cannot diverge downstream
		assert!(MediaTypePart::parse("*").unwrap().is_wildcard());
	}

	#[rstest]
	#[case("*/*", "application/json", true)]
	#[case("application/*", "application/json", true)]
	#[case("*/json", "application/json", true)]
	#[case("application/json", "application/json", true)]
	#[case("application/json", "APPLICATION/JSON", true)]
	#[case("application/xml", "application/json", false)]
	#[case("text/*", "application/json", false)]
	fn test_matches(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
		let left = MediaType::parse(left).unwrap();
		let right = MediaType::parse(right).unwrap();
		assert_eq!(left.matches(&right), expected);
		assert_eq!(right.matches(&left), expected);
	}

	#[rstest]
	fn test_display_roundtrip() {
		assert_eq!(MediaType::parse("*/*").unwrap().to_string(), "*/*");
		assert_eq!(
			MediaType::parse("Application/Json").unwrap().to_string(),
			"Application/Json"
		);
	}
}
