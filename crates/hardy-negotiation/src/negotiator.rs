//! The negotiation coordinator
//!
//! Gathers `can_process` results from the registered processors for each
//! requested range in priority order, ranks the viable candidates and
//! invokes the winner. Registration order is the final tie-break, so the
//! processor collection is an ordered sequence fixed at construction.

use crate::accept::AcceptHeader;
use crate::context::NegotiationContext;
use crate::media_range::MediaRange;
use crate::processor::{ExtensionMapping, ProcessError, ResponseProcessor};
use crate::processor_match::ProcessorMatch;
use hardy_http::Response;
use std::sync::Arc;
use tracing::{debug, trace};

/// Coordinator-level negotiation outcomes that reach the caller
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum NegotiationError {
	/// Every processor reported NoMatch for every requested range; a
	/// client-visible "not acceptable" outcome, not a crash
	#[error("No processor can satisfy the requested media ranges")]
	NotAcceptable,

	/// The selected processor failed to produce a response; a server-side
	/// failure, since the request was already judged acceptable
	#[error("Selected processor failed: {0}")]
	Process(#[from] ProcessError),
}

/// The winning processor for a negotiation, with what it matched and how
#[derive(Clone)]
pub struct NegotiatedMatch {
	/// The winning processor
	pub processor: Arc<dyn ResponseProcessor>,
	/// The requested range the processor matched
	pub range: MediaRange,
	/// How well it matched
	pub result: ProcessorMatch,
}

/// Selects and invokes the response processor for a request
///
/// Holds no per-request state; one instance is shared across concurrently
/// handled requests.
///
/// # Examples
///
/// ```
/// use hardy_negotiation::accept::AcceptHeader;
/// use hardy_negotiation::context::NegotiationContext;
/// use hardy_negotiation::negotiator::{NegotiationError, ResponseNegotiator};
/// use hardy_negotiation::processors::JsonProcessor;
/// use hardy_serializers::{JsonSerializer, Serializer};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let serializers: Vec<Arc<dyn Serializer>> = vec![Arc::new(JsonSerializer::new())];
/// let negotiator =
/// 	ResponseNegotiator::new(vec![Arc::new(JsonProcessor::from_serializers(&serializers))]);
///
/// let mut context = NegotiationContext::new();
/// context.set_default_model(json!({"ok": true}));
///
/// let accept = AcceptHeader::parse("*/*");
/// let response = negotiator.negotiate(accept.ranges(), &context).unwrap();
/// assert_eq!(response.content_type(), Some("application/json"));
///
/// let accept = AcceptHeader::parse("text/html");
/// let err = negotiator.negotiate(accept.ranges(), &context).unwrap_err();
/// assert!(matches!(err, NegotiationError::NotAcceptable));
/// ```
pub struct ResponseNegotiator {
	processors: Vec<Arc<dyn ResponseProcessor>>,
}

impl ResponseNegotiator {
	/// Creates a negotiator over an ordered processor collection
	///
	/// Order is significant: it breaks ranking ties.
	pub fn new(processors: Vec<Arc<dyn ResponseProcessor>>) -> Self {
		Self { processors }
	}

	/// The registered processors in registration order
	pub fn processors(&self) -> &[Arc<dyn ResponseProcessor>] {
		&self.processors
	}

	/// Finds the best processor for the prioritized ranges without
	/// producing a response
	///
	/// Ranges are tried in the order given; the first range any processor
	/// can viably serve decides the winner. Within one range, candidates
	/// rank by content-type specificity, then model compatibility, then
	/// registration order.
	pub fn best_match(
		&self,
		ranges: &[MediaRange],
		context: &NegotiationContext,
	) -> Option<NegotiatedMatch> {
		for range in ranges {
			let mut best: Option<(usize, ProcessorMatch)> = None;

			for (index, processor) in self.processors.iter().enumerate() {
				let result = processor.can_process(range, context);
				trace!(
					range = %range,
					processor = index,
					content = ?result.requested_content_type_result,
					model = ?result.model_result,
					"classified candidate"
				);

				if !result.is_viable() {
					continue;
				}

				// Strictly-better only: registration order wins ties
				let better = match &best {
					Some((_, current)) => result.ranking() > current.ranking(),
					None => true,
				};
				if better {
					best = Some((index, result));
				}
			}

			if let Some((index, result)) = best {
				debug!(
					range = %range,
					processor = index,
					"selected response processor"
				);
				return Some(NegotiatedMatch {
					processor: Arc::clone(&self.processors[index]),
					range: range.clone(),
					result,
				});
			}
		}

		None
	}

	/// Runs a full negotiation and produces the response
	///
	/// The winner's concrete content type is set on the response and a
	/// `Vary: Accept` header records that the selection depended on the
	/// request's Accept header.
	pub fn negotiate(
		&self,
		ranges: &[MediaRange],
		context: &NegotiationContext,
	) -> Result<Response, NegotiationError> {
		let winner = self
			.best_match(ranges, context)
			.ok_or(NegotiationError::NotAcceptable)?;

		let content_type = winner
			.processor
			.full_output_content_type(&winner.range, context);
		let response = winner.processor.process(&winner.range, context)?;

		Ok(response
			.with_content_type(&content_type)
			.with_header("Vary", "Accept"))
	}

	/// Convenience: parse an Accept header string and negotiate
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::context::NegotiationContext;
	/// use hardy_negotiation::negotiator::ResponseNegotiator;
	/// use hardy_negotiation::processors::JsonProcessor;
	/// use hardy_serializers::{JsonSerializer, Serializer};
	/// use std::sync::Arc;
	///
	/// let serializers: Vec<Arc<dyn Serializer>> = vec![Arc::new(JsonSerializer::new())];
	/// let negotiator =
	/// 	ResponseNegotiator::new(vec![Arc::new(JsonProcessor::from_serializers(&serializers))]);
	///
	/// let response = negotiator
	/// 	.negotiate_header("application/json", &NegotiationContext::new())
	/// 	.unwrap();
	/// assert_eq!(response.content_type(), Some("application/json"));
	/// ```
	pub fn negotiate_header(
		&self,
		accept: &str,
		context: &NegotiationContext,
	) -> Result<Response, NegotiationError> {
		let header = AcceptHeader::parse(accept);
		self.negotiate(header.ranges(), context)
	}

	/// All extension mappings across the registered processors, in
	/// registration order
	///
	/// Consumed when building content-negotiation response headers.
	pub fn extension_mappings(&self) -> impl Iterator<Item = &ExtensionMapping> {
		self.processors
			.iter()
			.flat_map(|processor| processor.extension_mappings())
	}

	/// Maps a file extension (with or without a leading dot) to the media
	/// range it stands for
	///
	/// Processors are scanned in registration order; the first mapping that
	/// covers the extension wins.
	pub fn range_for_extension(&self, extension: &str) -> Option<&MediaRange> {
		self.extension_mappings()
			.find(|mapping| mapping.covers(extension))
			.map(|mapping| mapping.range())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::processors::{JsonProcessor, XmlProcessor};
	use hardy_serializers::{JsonSerializer, Serializer, XmlSerializer};

	fn serializers() -> Vec<Arc<dyn Serializer>> {
		vec![
			Arc::new(JsonSerializer::new()),
			Arc::new(XmlSerializer::new()),
		]
	}

	fn negotiator() -> ResponseNegotiator {
		let serializers = serializers();
		ResponseNegotiator::new(vec![
			Arc::new(JsonProcessor::from_serializers(&serializers)),
			Arc::new(XmlProcessor::from_serializers(&serializers)),
		])
	}

	#[test]
	fn test_empty_ranges_are_not_acceptable() {
		let result = negotiator().best_match(&[], &NegotiationContext::new());
		assert!(result.is_none());
	}

	#[test]
	fn test_earlier_range_wins_over_better_later_match() {
		// text/xml is only served by the XML processor; the later
		// application/json range never gets considered
		let ranges = vec![
			MediaRange::parse("text/xml").unwrap(),
			MediaRange::parse("application/json").unwrap(),
		];
		let winner = negotiator()
			.best_match(&ranges, &NegotiationContext::new())
			.unwrap();
		assert_eq!(
			winner
				.processor
				.full_output_content_type(&winner.range, &NegotiationContext::new()),
			"application/xml"
		);
	}

	#[test]
	fn test_extension_lookup_in_registration_order() {
		let negotiator = negotiator();
		assert_eq!(
			negotiator.range_for_extension("json").unwrap().to_string(),
			"application/json"
		);
		assert_eq!(
			negotiator.range_for_extension(".xml").unwrap().to_string(),
			"application/xml"
		);
		assert!(negotiator.range_for_extension("csv").is_none());
	}
}
