//! # Paginate
//!
//! Deciding which page links a paginator shows and where each one points.
//!
//! The pipeline has three stages: [`locate`] recovers the pagination state from a location snapshot, [`nav`] computes the visible window of page numbers and formats a URL for every link, and [`render`] turns the result into an HTML fragment.
//!
//! Callers that want the whole component in one call can use [`paginate`]; callers that build their own markup can stop after [`nav::Nav::compute`].

#![warn(clippy::pedantic)]
#![warn(
	missing_copy_implementations,
	elided_lifetimes_in_paths,
	explicit_outlives_requirements,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	noop_method_call,
	pointer_structural_match,
	single_use_lifetimes,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
	unused_lifetimes,
	unused_macro_rules,
	unused_qualifications,
	variant_size_differences
)]
#![allow(clippy::tabs_in_doc_comments)] // rustfmt formats our doc comments and we use tabs
#![deny(unsafe_code)]

pub mod locate;
pub mod nav;
pub mod render;

/// Page numbers are 1-indexed, and signed so the window arithmetic can run below zero without wrapping.
pub type PageNum = i64;

/// The page number assumed when a location does not carry one.
pub const DEFAULT_PAGE: PageNum = 1;

/// Flags supplied by the embedding caller, immutable for the component's lifetime.
///
/// Deserializable so a host configuration file can carry it verbatim. Everything defaults to off.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
	/// Draw a border around each page number.
	pub border: bool,
	/// Round each page number into a circle.
	pub circle: bool,
	/// Mark the markup for host-side wiring and let [`render::Fragment::navigate`] invoke the caller's handler.
	pub navigate: bool,
}

/// Locate, compute, and wrap in one call: the per-render entry point.
#[must_use]
pub fn paginate(
	snapshot: &locate::Snapshot<'_>,
	total_pages: PageNum,
	config: Config,
) -> render::Fragment {
	render::Fragment::new(&locate::locate(snapshot), total_pages, config)
}
