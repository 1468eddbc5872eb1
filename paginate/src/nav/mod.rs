//! The second stage: turning the located state into concrete links.
//!
//! [`window`] decides which page numbers are visible, [`format_url`] builds the URL for one page, and [`Nav`] packages the whole link row.

use smallvec::SmallVec;

use crate::locate::Location;
use crate::PageNum;

#[cfg(test)]
mod test;

/// The widest run of page numbers the sizing rules in [`window`] can produce.
pub const WINDOW_CAP: usize = 5;

/// The visible page numbers around `current_page`: ascending, consecutive, each within `[1, total_pages]`.
///
/// The window keeps a roughly constant width around the current page, widening near the first two pages (where a symmetric window would degenerate) and, mirrored, near the last two. A `current_page` outside `[1, total_pages]` is not rejected; it yields a short or empty window.
#[must_use]
pub fn window(current_page: PageNum, total_pages: PageNum) -> SmallVec<[PageNum; WINDOW_CAP]> {
	let delta = if current_page < 3 { 4 } else { 2 };
	let left = if current_page > total_pages - 2 {
		if total_pages == current_page {
			current_page - delta - 2
		} else {
			current_page - delta - 1
		}
	} else {
		current_page - delta
	};
	// exclusive upper bound
	let right = if current_page == 2 {
		current_page + delta
	} else {
		current_page + delta + 1
	};
	(left.max(1)..right.min(total_pages + 1)).collect()
}

/// Build the navigation URL for one page.
///
/// With a `page_param` the page travels in the query, otherwise it is appended as a path segment (with a root `base_path` collapsing to nothing). `other_query` is appended after `&` in either form.
///
/// Pure string construction: nothing is percent-encoded, since every component originates from an already-encoded URL. A caller composing URLs from raw user input must encode first.
#[must_use]
pub fn format_url(
	base_path: &str,
	page_param: Option<&str>,
	page: PageNum,
	other_query: Option<&str>,
) -> String {
	let base_path = if base_path == "/" { "" } else { base_path };
	let mut url = match page_param {
		Some(param) => format!("{base_path}?{param}={page}"),
		None => format!("{base_path}/{page}"),
	};
	if let Some(other) = other_query.filter(|other| !other.is_empty()) {
		url.push('&');
		url.push_str(other);
	}
	url
}

/// One visible, clickable page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
	/// The page this link leads to.
	pub page: PageNum,
	/// Where it leads.
	pub url: String,
	/// Whether this is the page the user is already on.
	pub active: bool,
}

/// A link the user can follow from the paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	/// The left arrow.
	Previous,
	/// The right arrow.
	Next,
	/// A numbered link.
	Page(PageNum),
}

/// The complete link row: the windowed page links plus the two arrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
	/// The visible page links, ascending.
	pub pages: Vec<PageLink>,
	/// Where the left arrow leads. Clamped to page 1.
	pub previous: String,
	/// Where the right arrow leads. Unclamped; the arrow is hidden on the last page instead.
	pub next: String,
	/// The left arrow is hidden on the first page.
	pub previous_visible: bool,
	/// The right arrow is hidden on the last page.
	pub next_visible: bool,
}

impl Nav {
	/// Compute the link row for `location` within `total_pages`.
	///
	/// The link whose page equals the current page is marked active; when the current page lies outside the window, nothing is.
	#[must_use]
	pub fn compute(location: &Location, total_pages: PageNum) -> Self {
		let url_for = |page| {
			format_url(
				&location.base_path,
				location.page_param.as_deref(),
				page,
				location.other_query.as_deref(),
			)
		};

		let pages = window(location.current_page, total_pages)
			.into_iter()
			.map(|page| PageLink {
				page,
				url: url_for(page),
				active: page == location.current_page,
			})
			.collect();

		Self {
			pages,
			previous: url_for((location.current_page - 1).max(1)),
			next: url_for(location.current_page + 1),
			previous_visible: location.current_page != 1,
			next_visible: location.current_page != total_pages,
		}
	}

	/// The URL that following `target` navigates to.
	///
	/// `None` for a hidden arrow or for a page outside the window.
	#[must_use]
	pub fn target_url(&self, target: Target) -> Option<&str> {
		match target {
			Target::Previous => self.previous_visible.then_some(self.previous.as_str()),
			Target::Next => self.next_visible.then_some(self.next.as_str()),
			Target::Page(page) => self
				.pages
				.iter()
				.find(|link| link.page == page)
				.map(|link| link.url.as_str()),
		}
	}
}
