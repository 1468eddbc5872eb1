use std::sync::Arc;

use axum::response::ErrorResponse;
use axum::{extract, Router};

use crate::config::Config;
use crate::data::{Item, Items};
use crate::error;

#[derive(askama::Template)]
#[template(path = "blog.html")]
struct Template {
	posts: Vec<Item>,
	current_page: paginate::PageNum,
	total_pages: paginate::PageNum,
	pagination: paginate::render::Fragment,
}
crate::helpers::impl_into_response!(Template);

/// Path-suffix pagination: the page number is the last segment, as in `/blog/5`.
pub async fn get_handler(
	extract::OriginalUri(uri): extract::OriginalUri,
	extract::Extension(items): extract::Extension<Arc<Items>>,
	extract::Extension(config): extract::Extension<Arc<Config>>,
) -> Result<Template, ErrorResponse> {
	let location = paginate::locate::locate(&paginate::locate::Snapshot {
		path: uri.path(),
		query: uri.query(),
	});
	let total_pages = items.total_pages(config.page_size);
	if location.current_page > total_pages {
		return Err(error::NotFound("page").into());
	}

	Ok(Template {
		posts: items.page(location.current_page, config.page_size).to_vec(),
		current_page: location.current_page,
		total_pages,
		pagination: paginate::render::Fragment::new(&location, total_pages, config.pagination),
	})
}

pub fn configure() -> Router {
	Router::new()
		.route("/blog", axum::routing::get(get_handler))
		.route("/blog/:page", axum::routing::get(get_handler))
}
