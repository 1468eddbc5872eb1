//! The first stage: recovering pagination state from a location snapshot.
//!
//! Get started with the [`locate`] function. Look in [`error`] for what makes a candidate page number unusable.

use crate::{PageNum, DEFAULT_PAGE};

pub mod error;

pub use error::Error;

/// Query keys recognized as carrying the page number, compared case-insensitively.
pub const PAGE_PARAMS: &[&str] = &["page", "page_num", "pageNum", "page_number", "pageNumber"];

/// A borrowed view of the current navigation location.
///
/// The caller obtains this from its environment; the component itself never reads ambient state. `query` is the raw query string without its leading `?`.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
	/// The path component, such as `/blog/5`.
	pub path: &'a str,
	/// The raw query string, such as `pageNum=2&sort=asc`, if there is one.
	pub query: Option<&'a str>,
}

/// Pagination state recovered from a [`Snapshot`], fresh per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	/// The path with any page suffix stripped.
	pub base_path: String,
	/// The active page number. Always at least [`DEFAULT_PAGE`].
	pub current_page: PageNum,
	/// The recognized query key carrying the page number, in its original spelling, if one was present.
	pub page_param: Option<String>,
	/// The non-page query pairs, rejoined with `&` in their original order. `None` when there are none.
	pub other_query: Option<String>,
}

/// Strictly parse a candidate page number.
///
/// The single policy point for page-number text: anything that is not an integer of at least [`DEFAULT_PAGE`] is rejected, rather than clamped or passed through as a poisoned sentinel. A leading `+` parses; leading whitespace does not.
///
/// # Errors
///
/// [`Error::Invalid`] if `candidate` is not an integer, [`Error::OutOfRange`] if it is an integer below 1.
pub fn parse_page(candidate: &str) -> Result<PageNum, Error> {
	let page: PageNum = candidate.parse()?;
	if page < DEFAULT_PAGE {
		return Err(Error::OutOfRange(page));
	}
	Ok(page)
}

/// Recover a [`Location`] from a [`Snapshot`].
///
/// The last path segment becomes the current page if [`parse_page`] accepts it; otherwise the full path is the base path and the page defaults to 1. Then the first query pair whose key is one of [`PAGE_PARAMS`] is consumed: its key is recorded and, if its value is acceptable, the value overrides the current page. A rejected candidate leaves the previously derived page in place, so this function cannot fail.
#[must_use]
pub fn locate(snapshot: &Snapshot<'_>) -> Location {
	let (base_path, mut current_page) = split_page_suffix(snapshot.path);
	let mut page_param = None;
	let mut other_pairs = Vec::new();

	if let Some(query) = snapshot.query.filter(|query| !query.is_empty()) {
		for pair in query.split('&') {
			let mut parts = pair.split('=');
			let key = parts.next().unwrap_or_default();
			if page_param.is_none() && is_page_param(key) {
				if let Some(Ok(page)) = parts.next().map(parse_page) {
					current_page = page;
				}
				page_param = Some(key.to_owned());
			} else {
				other_pairs.push(pair);
			}
		}
	}

	Location {
		base_path: base_path.to_owned(),
		current_page,
		page_param,
		other_query: if other_pairs.is_empty() {
			None
		} else {
			Some(other_pairs.join("&"))
		},
	}
}

fn is_page_param(key: &str) -> bool {
	PAGE_PARAMS
		.iter()
		.any(|param| param.eq_ignore_ascii_case(key))
}

fn split_page_suffix(path: &str) -> (&str, PageNum) {
	let (base, last) = path.rsplit_once('/').unwrap_or(("", path));
	match parse_page(last) {
		Ok(page) => (base, page),
		Err(_) => (path, DEFAULT_PAGE),
	}
}
