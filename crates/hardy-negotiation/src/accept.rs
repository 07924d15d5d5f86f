//! Accept header parsing

use crate::media_range::MediaRange;

/// Represents an Accept header as an ordered list of media ranges
///
/// Entries that fail to parse are skipped rather than failing the whole
/// header; an empty or absent header means "no preference" and yields the
/// single fully-open range `*/*`.
#[derive(Debug, Clone)]
pub struct AcceptHeader {
	ranges: Vec<MediaRange>,
}

impl AcceptHeader {
	/// Parses an Accept header string into a prioritized range list
	///
	/// A malformed entry is skipped; a header whose every entry is
	/// malformed yields an empty list, which the coordinator turns into a
	/// negotiation failure. Only a genuinely empty header means "no
	/// preference".
	///
	/// # Examples
	///
	/// ```
	/// use hardy_negotiation::accept::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("application/json, text/html; q=0.9");
	/// assert_eq!(accept.ranges().len(), 2);
	/// assert_eq!(accept.ranges()[0].quality(), 1.0);
	/// assert_eq!(accept.ranges()[1].quality(), 0.9);
	///
	/// // Malformed entries are skipped, not fatal
	/// let partial = AcceptHeader::parse("application, text/html");
	/// assert_eq!(partial.ranges().len(), 1);
	///
	/// // No preference means fully open
	/// let open = AcceptHeader::parse("");
	/// assert!(open.ranges()[0].is_wildcard());
	/// ```
	pub fn parse(header: &str) -> Self {
		if header.trim().is_empty() {
			return Self {
				ranges: vec![MediaRange::any()],
			};
		}

		let mut ranges: Vec<MediaRange> = header
			.split(',')
			.filter(|entry| !entry.trim().is_empty())
			.filter_map(|entry| MediaRange::parse(entry.trim()).ok())
			.collect();

		// Sort by quality (highest first); stable, so client order is kept
		// among equal qualities
		ranges.sort_by(|a, b| {
			b.quality()
				.partial_cmp(&a.quality())
				.unwrap_or(std::cmp::Ordering::Equal)
		});

		Self { ranges }
	}

	/// The ranges in descending priority order
	pub fn ranges(&self) -> &[MediaRange] {
		&self.ranges
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_orders_by_quality() {
		let accept = AcceptHeader::parse("text/html;q=0.2, application/json, text/plain;q=0.5");
		let ordered: Vec<String> = accept
			.ranges()
			.iter()
			.map(|r| r.media_type().to_string())
			.collect();
		assert_eq!(ordered, ["application/json", "text/plain", "text/html"]);
	}

	#[rstest]
	fn test_equal_quality_keeps_client_order() {
		let accept = AcceptHeader::parse("text/html, application/json");
		let ordered: Vec<String> = accept
			.ranges()
			.iter()
			.map(|r| r.media_type().to_string())
			.collect();
		assert_eq!(ordered, ["text/html", "application/json"]);
	}

	#[rstest]
	fn test_all_entries_malformed_yields_no_ranges() {
		let accept = AcceptHeader::parse("application, text");
		assert!(accept.ranges().is_empty());
	}

	#[rstest]
	fn test_empty_header_means_no_preference() {
		let accept = AcceptHeader::parse("   ");
		assert_eq!(accept.ranges().len(), 1);
		assert!(accept.ranges()[0].is_wildcard());
	}

	#[rstest]
	fn test_parameters_survive_parsing() {
		let accept = AcceptHeader::parse("application/vnd.acme+json;q=0.8;profile=compact");
		assert_eq!(accept.ranges()[0].parameter("profile"), Some("compact"));
	}
}
