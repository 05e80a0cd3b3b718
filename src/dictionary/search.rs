//! Incremental prefix search over the source terms.

use super::WordRecord;

/// Result line shown when a non-empty query matches nothing.
pub const NOT_FOUND: &str = "No encontrada";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
	/// Empty query: nothing shown, nothing highlighted.
	Cleared,
	Matched(&'a WordRecord),
	NotMatched,
}

impl<'a> SearchOutcome<'a> {
	pub fn display_text(&self) -> &'a str {
		match *self {
			Self::Cleared => "",
			Self::Matched(record) => &record.ng,
			Self::NotMatched => NOT_FOUND,
		}
	}

	pub fn matched(&self) -> Option<&'a WordRecord> {
		match *self {
			Self::Matched(record) => Some(record),
			_ => None,
		}
	}
}

/// First record, in list order, whose source term starts with the trimmed,
/// lowercased query.
pub fn search<'a>(records: &'a [WordRecord], raw: &str) -> SearchOutcome<'a> {
	let query = raw.trim().to_lowercase();
	if query.is_empty() {
		return SearchOutcome::Cleared;
	}
	records
		.iter()
		.find(|r| r.es.to_lowercase().starts_with(&query))
		.map_or(SearchOutcome::NotMatched, SearchOutcome::Matched)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dictionary::record;

	fn casa_casar() -> Vec<WordRecord> {
		vec![
			record("1", "Casa", "House", "sustantivo"),
			record("2", "Casar", "Marry", "verbo"),
		]
	}

	#[test]
	fn first_prefix_match_in_list_order_wins() {
		let records = casa_casar();
		let outcome = search(&records, "cas");
		assert_eq!(outcome, SearchOutcome::Matched(&records[0]));
		assert_eq!(outcome.display_text(), "House");
	}

	#[test]
	fn longer_prefix_narrows_to_later_record() {
		let records = casa_casar();
		let outcome = search(&records, "casar");
		assert_eq!(outcome.matched().map(|r| r.id.as_str()), Some("2"));
		assert_eq!(outcome.display_text(), "Marry");
	}

	#[test]
	fn query_is_trimmed_and_case_insensitive() {
		let records = casa_casar();
		assert_eq!(search(&records, "  CASA ").display_text(), "House");
	}

	#[test]
	fn empty_or_blank_query_clears() {
		let records = casa_casar();
		for q in ["", "   ", "\t"] {
			let outcome = search(&records, q);
			assert_eq!(outcome, SearchOutcome::Cleared);
			assert_eq!(outcome.display_text(), "");
			assert!(outcome.matched().is_none());
		}
	}

	#[test]
	fn unknown_prefix_is_not_found() {
		let records = casa_casar();
		let outcome = search(&records, "xyz");
		assert_eq!(outcome, SearchOutcome::NotMatched);
		assert_eq!(outcome.display_text(), NOT_FOUND);
	}

	#[test]
	fn substring_is_not_a_prefix() {
		let records = casa_casar();
		assert_eq!(search(&records, "asa"), SearchOutcome::NotMatched);
	}

	#[test]
	fn empty_list_never_matches() {
		assert_eq!(search(&[], "a"), SearchOutcome::NotMatched);
		assert_eq!(search(&[], ""), SearchOutcome::Cleared);
	}
}
