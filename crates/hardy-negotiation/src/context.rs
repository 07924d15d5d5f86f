//! Request-scoped negotiation context
//!
//! Carries the model (or per-range model overrides) that the selected
//! processor will serialize. Processors stay stateless; everything
//! per-request lives here.

use crate::media_range::MediaRange;
use serde_json::Value;

/// Request-scoped state consumed by response processors
///
/// # Examples
///
/// ```
/// use hardy_negotiation::context::NegotiationContext;
/// use hardy_negotiation::media_range::MediaRange;
/// use serde_json::json;
///
/// let mut context = NegotiationContext::new();
/// context.set_default_model(json!({"id": 1}));
/// context.set_model_for(
/// 	MediaRange::parse("application/xml").unwrap(),
/// 	json!({"xml": true}),
/// );
///
/// let json_range = MediaRange::parse("application/json").unwrap();
/// let xml_range = MediaRange::parse("application/xml").unwrap();
/// assert_eq!(context.model_for_range(&json_range), Some(&json!({"id": 1})));
/// assert_eq!(context.model_for_range(&xml_range), Some(&json!({"xml": true})));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NegotiationContext {
	default_model: Option<Value>,
	range_models: Vec<(MediaRange, Value)>,
}

impl NegotiationContext {
	/// Creates an empty context
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the model used when no per-range override matches
	pub fn set_default_model(&mut self, model: Value) {
		self.default_model = Some(model);
	}

	/// Registers a model override for ranges matching `range`
	pub fn set_model_for(&mut self, range: MediaRange, model: Value) {
		self.range_models.push((range, model));
	}

	/// Looks up the model for a requested range
	///
	/// Overrides are scanned in registration order with wildcard-aware
	/// matching; the first hit wins, falling back to the default model.
	pub fn model_for_range(&self, requested: &MediaRange) -> Option<&Value> {
		self.range_models
			.iter()
			.find(|(range, _)| requested.matches(range.media_type()))
			.map(|(_, model)| model)
			.or(self.default_model.as_ref())
	}
}
