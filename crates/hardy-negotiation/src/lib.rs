//! # Hardy Negotiation
//!
//! Content negotiation matching engine: given the media ranges a client
//! accepts and a set of registered response processors, determine which
//! processor can satisfy the request, with what specificity, and invoke the
//! winner to produce the response.
//!
//! The engine is synchronous and allocation-light: one negotiation runs to
//! completion within the handling of one request. Processors are stateless
//! after construction and safely shared across concurrently handled
//! requests.
//!
//! ## Examples
//!
//! ```
//! use hardy_negotiation::accept::AcceptHeader;
//! use hardy_negotiation::context::NegotiationContext;
//! use hardy_negotiation::negotiator::ResponseNegotiator;
//! use hardy_negotiation::processors::JsonProcessor;
//! use hardy_serializers::{JsonSerializer, Serializer};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let serializers: Vec<Arc<dyn Serializer>> = vec![Arc::new(JsonSerializer::new())];
//! let negotiator =
//! 	ResponseNegotiator::new(vec![Arc::new(JsonProcessor::from_serializers(&serializers))]);
//!
//! let mut context = NegotiationContext::new();
//! context.set_default_model(json!({"id": 1}));
//!
//! let accept = AcceptHeader::parse("application/json");
//! let response = negotiator.negotiate(accept.ranges(), &context).unwrap();
//! assert_eq!(response.content_type(), Some("application/json"));
//! ```

pub mod accept;
pub mod context;
pub mod media_range;
pub mod media_type;
pub mod negotiator;
pub mod processor;
pub mod processor_match;
pub mod processors;

pub use accept::AcceptHeader;
pub use context::NegotiationContext;
pub use media_range::MediaRange;
pub use media_type::{MediaType, MediaTypeError, MediaTypePart};
pub use negotiator::{NegotiatedMatch, NegotiationError, ResponseNegotiator};
pub use processor::{ExtensionMapping, ProcessError, ResponseProcessor};
pub use processor_match::{MatchResult, ProcessorMatch};
