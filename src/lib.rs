//! # Hardy
//!
//! Content negotiation for Rust web services: match a client's acceptable
//! media ranges against registered response processors, rank the candidates
//! and let the winner produce the response.
//!
//! Hardy follows Rust's composition patterns: processors and serializers
//! are trait capabilities with independently constructible, stateless
//! implementations, wired together at application start-up.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `negotiation` - The matching engine (media grammar, processors,
//!   coordinator)
//! - `serializers` - The serializer capability with JSON and XML
//!   implementations
//! - `http-types` - The `Response` type processors produce
//!
//! ## Quick Example
//!
//! ```
//! use hardy::negotiation::accept::AcceptHeader;
//! use hardy::negotiation::context::NegotiationContext;
//! use hardy::negotiation::negotiator::ResponseNegotiator;
//! use hardy::negotiation::processors::{JsonProcessor, XmlProcessor};
//! use hardy::serializers::{JsonSerializer, Serializer, XmlSerializer};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! // Register serializers once at start-up; processors resolve theirs
//! // at construction
//! let serializers: Vec<Arc<dyn Serializer>> = vec![
//! 	Arc::new(JsonSerializer::new()),
//! 	Arc::new(XmlSerializer::new()),
//! ];
//!
//! // Registration order is the ranking tie-break
//! let negotiator = ResponseNegotiator::new(vec![
//! 	Arc::new(JsonProcessor::from_serializers(&serializers)),
//! 	Arc::new(XmlProcessor::from_serializers(&serializers)),
//! ]);
//!
//! let mut context = NegotiationContext::new();
//! context.set_default_model(json!({"id": 1}));
//!
//! let accept = AcceptHeader::parse("application/vnd.acme.v2+json");
//! let response = negotiator.negotiate(accept.ranges(), &context).unwrap();
//! assert_eq!(response.content_type(), Some("application/json"));
//! ```

#[cfg(feature = "negotiation")]
pub use hardy_negotiation as negotiation;

#[cfg(feature = "serializers")]
pub use hardy_serializers as serializers;

#[cfg(feature = "http-types")]
pub use hardy_http as http;

// Re-export the capability seams and the types callers touch on every
// negotiation
#[cfg(feature = "negotiation")]
pub use hardy_negotiation::{
	AcceptHeader, ExtensionMapping, MatchResult, MediaRange, MediaType, MediaTypeError,
	MediaTypePart, NegotiatedMatch, NegotiationContext, NegotiationError, ProcessError,
	ProcessorMatch, ResponseNegotiator, ResponseProcessor,
};

#[cfg(feature = "serializers")]
pub use hardy_serializers::{Serializer, SerializerError};

#[cfg(feature = "http-types")]
pub use hardy_http::Response;
