use itertools::Itertools as _;
use rand::Rng as _;

use super::{format_url, window, Nav, PageLink, Target, WINDOW_CAP};
use crate::locate::{locate, Location, Snapshot};
use crate::PageNum;

fn path_location(base_path: &str, current_page: PageNum) -> Location {
	Location {
		base_path: base_path.to_owned(),
		current_page,
		page_param: None,
		other_query: None,
	}
}

#[test]
fn window_is_centered_in_the_middle() {
	assert_eq!(window(5, 10).as_slice(), [3, 4, 5, 6, 7]);
}

#[test]
fn window_widens_at_the_start() {
	assert_eq!(window(1, 10).as_slice(), [1, 2, 3, 4, 5]);
	assert_eq!(window(2, 10).as_slice(), [1, 2, 3, 4, 5]);
	assert_eq!(window(2, 4).as_slice(), [1, 2, 3, 4]);
	assert_eq!(window(1, 3).as_slice(), [1, 2, 3]);
}

#[test]
fn window_widens_at_the_end() {
	assert_eq!(window(10, 10).as_slice(), [6, 7, 8, 9, 10]);
	assert_eq!(window(9, 10).as_slice(), [6, 7, 8, 9, 10]);
}

#[test]
fn window_of_a_single_page() {
	assert_eq!(window(1, 1).as_slice(), [1]);
}

#[test]
fn middle_windows_are_exactly_five_wide() {
	for total_pages in 5..40 {
		for current_page in 3..=(total_pages - 2) {
			assert_eq!(
				window(current_page, total_pages).as_slice(),
				[
					current_page - 2,
					current_page - 1,
					current_page,
					current_page + 1,
					current_page + 2,
				],
				"current_page {current_page}, total_pages {total_pages}",
			);
		}
	}
}

#[test]
fn random_windows_stay_in_bounds() {
	let mut rng = rand::thread_rng();
	for _ in 0..20_000 {
		let total_pages = rng.gen_range(1..=200);
		let current_page = rng.gen_range(-5..=total_pages + 5);
		let pages = window(current_page, total_pages);
		assert!(pages.len() <= WINDOW_CAP);
		assert!(pages
			.iter()
			.all(|page| (1..=total_pages).contains(page)));
		assert!(pages.iter().tuple_windows().all(|(a, b)| b - a == 1));
	}
}

#[test]
fn urls_with_a_path_page() {
	assert_eq!(format_url("/blog", None, 3, None), "/blog/3");
	assert_eq!(format_url("/", None, 3, None), "/3");
	assert_eq!(format_url("", None, 3, None), "/3");
	assert_eq!(
		format_url("/blog", None, 3, Some("sort=asc")),
		"/blog/3&sort=asc"
	);
}

#[test]
fn urls_with_a_query_page() {
	assert_eq!(
		format_url("/", Some("page"), 3, Some("sort=asc")),
		"?page=3&sort=asc"
	);
	assert_eq!(
		format_url("/items", Some("pageNum"), 3, Some("sort=asc")),
		"/items?pageNum=3&sort=asc"
	);
	assert_eq!(format_url("/items", Some("page"), 2, None), "/items?page=2");
	assert_eq!(format_url("/items", Some("page"), 2, Some("")), "/items?page=2");
}

#[test]
fn path_style_end_to_end() {
	let location = locate(&Snapshot {
		path: "/blog/5",
		query: None,
	});
	let nav = Nav::compute(&location, 10);

	assert_eq!(
		nav.pages.iter().map(|link| link.page).collect::<Vec<_>>(),
		[3, 4, 5, 6, 7]
	);
	assert_eq!(
		nav.pages[2],
		PageLink {
			page: 5,
			url: "/blog/5".to_owned(),
			active: true,
		}
	);
	assert_eq!(nav.previous, "/blog/4");
	assert_eq!(nav.next, "/blog/6");
	assert!(nav.previous_visible);
	assert!(nav.next_visible);
}

#[test]
fn query_style_end_to_end() {
	let location = locate(&Snapshot {
		path: "/items",
		query: Some("pageNum=2&sort=asc"),
	});
	let nav = Nav::compute(&location, 4);

	assert_eq!(
		nav.pages.iter().map(|link| link.page).collect::<Vec<_>>(),
		[1, 2, 3, 4]
	);
	assert_eq!(
		nav.target_url(Target::Page(3)),
		Some("/items?pageNum=3&sort=asc")
	);
	assert_eq!(nav.previous, "/items?pageNum=1&sort=asc");
	assert_eq!(nav.next, "/items?pageNum=3&sort=asc");
}

#[test]
fn exactly_one_link_is_active() {
	for current_page in 1..=20 {
		let nav = Nav::compute(&path_location("/blog", current_page), 20);
		let active = nav.pages.iter().filter(|link| link.active).count();
		assert_eq!(active, 1);
		assert!(nav
			.pages
			.iter()
			.find(|link| link.active)
			.is_some_and(|link| link.page == current_page));
	}
}

#[test]
fn out_of_range_page_renders_inactively() {
	let nav = Nav::compute(&path_location("/blog", 15), 10);
	assert!(nav.pages.iter().all(|link| !link.active));
}

#[test]
fn arrows_at_the_boundaries() {
	let first = Nav::compute(&path_location("/blog", 1), 10);
	assert!(!first.previous_visible);
	assert_eq!(first.previous, "/blog/1");
	assert_eq!(first.target_url(Target::Previous), None);

	let last = Nav::compute(&path_location("/blog", 10), 10);
	assert!(!last.next_visible);
	// unclamped; the hidden arrow covers it
	assert_eq!(last.next, "/blog/11");
	assert_eq!(last.target_url(Target::Next), None);

	let only = Nav::compute(&path_location("/blog", 1), 1);
	assert!(!only.previous_visible);
	assert!(!only.next_visible);
}

#[test]
fn target_urls_resolve_within_the_window() {
	let nav = Nav::compute(&path_location("/blog", 5), 10);
	assert_eq!(nav.target_url(Target::Previous), Some("/blog/4"));
	assert_eq!(nav.target_url(Target::Next), Some("/blog/6"));
	assert_eq!(nav.target_url(Target::Page(7)), Some("/blog/7"));
	assert_eq!(nav.target_url(Target::Page(8)), None);
}
