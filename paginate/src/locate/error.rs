//! Why a candidate page number could not be used.

use crate::PageNum;

/// Reasons [`parse_page`](super::parse_page) rejects a candidate.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// The candidate is not an integer at all.
	#[error("invalid page number: {0}")]
	Invalid(#[from] std::num::ParseIntError),
	/// The candidate is an integer, but pages are numbered from 1.
	#[error("page number {0} is out of range")]
	OutOfRange(PageNum),
}
