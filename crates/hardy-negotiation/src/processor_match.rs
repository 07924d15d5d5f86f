//! Match classification and ranking
//!
//! A processor answers `can_process` with a [`ProcessorMatch`]: how well it
//! matched along the content-type axis and the model axis. Matches are
//! ranked by an explicit weight per axis rather than enum declaration
//! order, so that `DontCare` never loses an axis to a processor that does
//! care.

/// How well one axis of a processor matched a requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
	/// The processor cannot serve this axis; a first-class outcome, not an
	/// error
	NoMatch,
	/// The axis is irrelevant to this processor; ranks equal to an exact
	/// match so the processor never loses on this axis alone
	DontCare,
	/// Matched through a wildcard or a vendor-suffix family rule
	NonExactMatch,
	/// Matched the concrete content type (or an equivalent exact rule)
	ExactMatch,
}

impl MatchResult {
	/// Ranking weight: ExactMatch and DontCare at the top, then
	/// NonExactMatch, then NoMatch
	pub fn ranking_weight(&self) -> u8 {
		match self {
			Self::NoMatch => 0,
			Self::NonExactMatch => 1,
			Self::DontCare | Self::ExactMatch => 2,
		}
	}
}

/// The outcome of one `can_process` call along both axes
///
/// Created fresh per call, compared during ranking, discarded afterwards.
///
/// # Examples
///
/// ```
/// use hardy_negotiation::processor_match::{MatchResult, ProcessorMatch};
///
/// let exact = ProcessorMatch::new(MatchResult::DontCare, MatchResult::ExactMatch);
/// let family = ProcessorMatch::new(MatchResult::DontCare, MatchResult::NonExactMatch);
/// assert!(exact.ranking() > family.ranking());
///
/// let none = ProcessorMatch::no_match();
/// assert!(!none.is_viable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorMatch {
	/// Model-compatibility axis
	pub model_result: MatchResult,
	/// Content-type specificity axis
	pub requested_content_type_result: MatchResult,
}

impl ProcessorMatch {
	/// Creates a match from both axes
	pub fn new(model_result: MatchResult, requested_content_type_result: MatchResult) -> Self {
		Self {
			model_result,
			requested_content_type_result,
		}
	}

	/// The "cannot serve this range" outcome on both axes
	pub fn no_match() -> Self {
		Self {
			model_result: MatchResult::NoMatch,
			requested_content_type_result: MatchResult::NoMatch,
		}
	}

	/// A match is viable when neither axis reported NoMatch
	pub fn is_viable(&self) -> bool {
		self.requested_content_type_result != MatchResult::NoMatch
			&& self.model_result != MatchResult::NoMatch
	}

	/// Ranking key: content axis first, model axis breaks ties
	///
	/// Registration order breaks full ties; that happens at the
	/// coordinator, which knows the order.
	pub fn ranking(&self) -> (u8, u8) {
		(
			self.requested_content_type_result.ranking_weight(),
			self.model_result.ranking_weight(),
		)
	}
}
