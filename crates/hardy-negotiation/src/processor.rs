//! The response processor capability
//!
//! A processor is one candidate way of producing a response body: it can
//! cheaply classify whether it serves a requested range (`can_process`),
//! name the concrete content type it would emit, and, once selected,
//! expensively produce the response. The two-phase contract means a
//! misconfigured processor still participates in ranking and only fails
//! when actually chosen.

use crate::context::NegotiationContext;
use crate::media_range::MediaRange;
use crate::processor_match::ProcessorMatch;
use hardy_http::Response;
use hardy_serializers::SerializerError;

/// Maps a file extension (such as `json`) to the media range it stands for
///
/// Registered once per processor at construction, read-only afterward.
/// Consumed when routing a dotted-extension URL to a concrete range and
/// when building content-negotiation response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMapping {
	extension: String,
	range: MediaRange,
}

impl ExtensionMapping {
	/// Creates a mapping from an extension (without the dot) to a range
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::media_range::MediaRange;
	/// use hardy_negotiation::processor::ExtensionMapping;
	///
	/// let mapping = ExtensionMapping::new(
	/// 	"json",
	/// 	MediaRange::parse("application/json").unwrap(),
	/// );
	/// assert_eq!(mapping.extension(), "json");
	/// ```
	pub fn new(extension: impl Into<String>, range: MediaRange) -> Self {
		Self {
			extension: extension.into(),
			range,
		}
	}

	/// The extension, without a leading dot
	pub fn extension(&self) -> &str {
		&self.extension
	}

	/// The media range the extension maps to
	pub fn range(&self) -> &MediaRange {
		&self.range
	}

	/// Whether this mapping covers `extension`, compared case-insensitively
	/// and ignoring a leading dot
	pub fn covers(&self, extension: &str) -> bool {
		self.extension
			.eq_ignore_ascii_case(extension.trim_start_matches('.'))
	}
}

/// Errors raised while producing a response, after a processor has already
/// been selected
///
/// By this point the client's request was judged acceptable, so these are
/// server-side failures, not negotiation outcomes.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
	#[error("No serializer available for '{content_type}'")]
	SerializationUnavailable { content_type: String },

	#[error("Serialization failed: {0}")]
	Serialization(#[from] SerializerError),
}

/// A candidate producer of response bodies
///
/// Implementors are stateless after construction (a resolved serializer
/// reference is fixed at construction and never reassigned) and safely
/// shared read-only across concurrently handled requests.
pub trait ResponseProcessor: Send + Sync {
	/// Static extension mappings this processor registers
	fn extension_mappings(&self) -> &[ExtensionMapping];

	/// Cheap classification: how well does this processor serve the
	/// requested range? Never fails; `NoMatch` is an outcome, not an error.
	fn can_process(
		&self,
		requested: &MediaRange,
		context: &NegotiationContext,
	) -> ProcessorMatch;

	/// The concrete (non-wildcard) content type this processor will emit
	/// for the given range
	///
	/// Only valid to call after a prior `can_process` returned
	/// non-`NoMatch` for an equivalent range.
	fn full_output_content_type(
		&self,
		requested: &MediaRange,
		context: &NegotiationContext,
	) -> String;

	/// Produce the response; the expensive late phase
	fn process(
		&self,
		requested: &MediaRange,
		context: &NegotiationContext,
	) -> Result<Response, ProcessError>;
}
