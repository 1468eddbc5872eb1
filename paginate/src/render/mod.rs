//! The third stage: the markup fragment.

use crate::locate::Location;
use crate::nav::{Nav, Target};
use crate::{Config, PageNum};


/// The rendered paginator: a wrapper `<div>` holding a list with a previous arrow, the windowed page links, and a next arrow.
///
/// Arrows hidden by the visibility rules stay in the markup with `visibility: hidden` so the row keeps its shape. Style flags become classes on the number elements; these are hooks only, no styling ships with the fragment.
///
/// Embed it in an outer askama template as a field rendered through the `safe` filter, or call [`askama::Template::render`] directly for the raw markup.
#[derive(askama::Template, Debug, Clone)]
#[template(path = "pagination.html")]
pub struct Fragment {
	/// The computed link row.
	pub nav: Nav,
	/// The caller's flags.
	pub config: Config,
}

impl Fragment {
	/// Compute the link row for `location` and wrap it for rendering under `config`.
	#[must_use]
	pub fn new(location: &Location, total_pages: PageNum, config: Config) -> Self {
		Self {
			nav: Nav::compute(location, total_pages),
			config,
		}
	}

	/// The navigation callback: invoke `handler` with the URL `target` leads to.
	///
	/// Does nothing unless [`Config::navigate`] is set and `target` resolves to a visible link; a plain-anchor host never calls this. Returns whether `handler` ran.
	pub fn navigate(&self, target: Target, handler: impl FnOnce(&str)) -> bool {
		if !self.config.navigate {
			return false;
		}
		match self.nav.target_url(target) {
			Some(url) => {
				handler(url);
				true
			}
			None => false,
		}
	}
}
